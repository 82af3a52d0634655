// Primer: introductory console lessons with a step-through browser

use std::io;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use primer::config::{LogLevel, RunConfig};
use primer::console::{record, Console};
use primer::lessons::{self, Catalog, LessonId};
use primer::ui::App;

/// Introductory console lessons: strings, numbers, conditions, loops and collections.
#[derive(Parser, Debug)]
#[command(name = "primer", version, about)]
struct Cli {
    /// Log verbosity (logs go to stderr)
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the lessons
    List,

    /// Run a lesson and print its output
    Run {
        /// Lesson to run (intro, strings, numbers, conditions, loops, collections)
        #[arg(required_unless_present = "all")]
        lesson: Option<String>,

        /// Run every lesson in order; a named lesson is then ignored
        #[arg(long)]
        all: bool,

        /// Assign one slot past the end of a fixed-size sequence (collections)
        #[arg(long)]
        overrun: bool,

        /// Extra arguments are accepted and ignored
        #[arg(trailing_var_arg = true, hide = true)]
        args: Vec<String>,
    },

    /// Step through a lesson's output in a terminal UI
    Browse {
        /// Lesson to open first
        #[arg(value_enum, default_value_t = LessonId::Intro)]
        lesson: LessonId,

        /// Assign one slot past the end of a fixed-size sequence (collections)
        #[arg(long)]
        overrun: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let catalog = Catalog::standard();

    match cli.command {
        Commands::List => {
            for lesson in catalog.iter() {
                println!("{:<12} {}", lesson.id(), lesson.title());
            }
            Ok(())
        }
        Commands::Run {
            lesson,
            all,
            overrun,
            args,
        } => {
            if !args.is_empty() {
                tracing::debug!(?args, "ignoring extra arguments");
            }
            let config = RunConfig::default().with_overrun(overrun);
            let ids: Vec<LessonId> = match lesson {
                Some(name) if !all => vec![parse_lesson(&name)],
                _ => LessonId::ALL.to_vec(),
            };
            run_lessons(&catalog, &ids, &config)
        }
        Commands::Browse { lesson, overrun } => {
            let config = RunConfig::default().with_overrun(overrun);
            browse(catalog, lesson, config)
        }
    }
}

/// Resolve a lesson name, exiting with a usage error if it is unknown
fn parse_lesson(name: &str) -> LessonId {
    match <LessonId as ValueEnum>::from_str(name, false) {
        Ok(id) => id,
        Err(_) => {
            let names: Vec<&str> = LessonId::ALL.iter().map(|id| id.name()).collect();
            Cli::command()
                .error(
                    ErrorKind::InvalidValue,
                    format!(
                        "invalid value '{}' for '<LESSON>'\n  [possible values: {}]",
                        name,
                        names.join(", ")
                    ),
                )
                .exit()
        }
    }
}

fn init_logging(level: LogLevel) {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::new(level.directive()))
        .with_target(false)
        .init();
}

fn run_lessons(catalog: &Catalog, ids: &[LessonId], config: &RunConfig) -> Result<()> {
    for (n, id) in ids.iter().enumerate() {
        let lesson = catalog
            .get(*id)
            .with_context(|| format!("lesson {} is not registered", id))?;

        let mut console = Console::echoing(io::stdout());
        if n > 0 {
            // Blank line between lessons when running several
            console.line("")?;
        }
        lessons::run(lesson, &mut console, config)
            .with_context(|| format!("lesson {} stopped", id))?;
    }
    Ok(())
}

fn browse(catalog: Catalog, id: LessonId, config: RunConfig) -> Result<()> {
    let lesson = catalog
        .get(id)
        .with_context(|| format!("lesson {} is not registered", id))?;

    // Record before touching the terminal so nothing is printed into the alternate screen
    let transcript = record(lesson, &config);
    if let Some(err) = transcript.error() {
        tracing::warn!(lesson = %id, error = %err, "browsing partial transcript");
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(catalog, transcript, config);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("browser failed")
}
