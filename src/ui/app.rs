//! Main TUI application state and logic

use crate::config::RunConfig;
use crate::console::{record, Transcript};
use crate::lessons::{Catalog, LessonId};
use crate::ui::panes::{self, PlaybackState};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Lesson,
    Output,
}

impl FocusedPane {
    pub fn toggle(self) -> Self {
        match self {
            FocusedPane::Lesson => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Lesson,
        }
    }
}

/// The main application state
pub struct App {
    catalog: Catalog,
    config: RunConfig,

    /// Recorded run of the lesson being browsed
    pub transcript: Transcript,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub lesson_scroll: usize,
    pub output_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app browsing `transcript`; `catalog` supplies the other lessons
    pub fn new(catalog: Catalog, transcript: Transcript, config: RunConfig) -> Self {
        let status_message = ready_message(&transcript);
        App {
            catalog,
            config,
            transcript,
            focused_pane: FocusedPane::Output,
            lesson_scroll: 0,
            output_scroll: 0,
            should_quit: false,
            status_message,
            is_playing: false,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing && self.last_play_time.elapsed() >= Duration::from_secs(1) {
                if self.transcript.step_forward() {
                    self.status_message = "Playing...".to_string();
                    self.output_scroll = usize::MAX;
                } else {
                    self.is_playing = false;
                    self.status_message = self.end_message();
                }
                self.last_play_time = Instant::now();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Two panes side by side, plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(main_chunks[0]);

        panes::render_lesson_pane(
            frame,
            columns[0],
            self.transcript.title(),
            self.transcript.sections(),
            self.transcript.section_index(),
            self.focused_pane == FocusedPane::Lesson,
            &mut self.lesson_scroll,
        );

        panes::render_output_pane(
            frame,
            columns[1],
            self.transcript.visible(),
            self.focused_pane == FocusedPane::Output,
            &mut self.output_scroll,
        );

        panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            PlaybackState {
                position: self.transcript.position(),
                total: self.transcript.len(),
                is_playing: self.is_playing,
                has_error: self.transcript.error().is_some(),
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1);
                let stepped = (0..n).take_while(|_| self.transcript.step_forward()).count();
                self.status_message = format!("Stepped forward {} line(s)", stepped);
                self.output_scroll = usize::MAX;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.toggle();
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.step_backward();
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Lesson => self.lesson_scroll = self.lesson_scroll.saturating_sub(1),
                FocusedPane::Output => {
                    // The renderer clamps usize::MAX; pull it back into range first
                    let max = self.transcript.position().saturating_sub(1);
                    self.output_scroll = self.output_scroll.min(max).saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Lesson => self.lesson_scroll = self.lesson_scroll.saturating_add(1),
                FocusedPane::Output => self.output_scroll = self.output_scroll.saturating_add(1),
            },
            KeyCode::Char(']') => {
                self.is_playing = false;
                if self.transcript.next_section() {
                    self.status_message = "Next section".to_string();
                    self.lesson_scroll = 0;
                    self.output_scroll = usize::MAX;
                } else {
                    self.status_message = "No later section".to_string();
                }
            }
            KeyCode::Char('[') => {
                self.is_playing = false;
                if self.transcript.previous_section() {
                    self.status_message = "Previous section".to_string();
                    self.lesson_scroll = 0;
                    self.output_scroll = usize::MAX;
                } else {
                    self.status_message = "No earlier section".to_string();
                }
            }
            KeyCode::Char('n') => self.switch_lesson(self.transcript.lesson().next()),
            KeyCode::Char('p') => self.switch_lesson(self.transcript.lesson().prev()),
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        self.last_play_time = Instant::now()
                            .checked_sub(Duration::from_secs(1))
                            .unwrap_or_else(Instant::now);
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                self.transcript.jump_to_end();
                self.status_message = self.end_message();
                self.output_scroll = usize::MAX;
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                self.transcript.rewind_to_start();
                self.status_message = "Jumped to start".to_string();
                self.output_scroll = 0;
            }
            _ => {}
        }
    }

    /// Replace the transcript with a fresh recording of another lesson
    pub fn switch_lesson(&mut self, id: LessonId) {
        self.is_playing = false;
        match self.catalog.get(id) {
            Some(lesson) => {
                tracing::debug!(lesson = %id, "switching lesson");
                self.transcript = record(lesson, &self.config);
                self.status_message = ready_message(&self.transcript);
                self.lesson_scroll = 0;
                self.output_scroll = 0;
            }
            None => {
                self.status_message = format!("Lesson {} is not available", id);
            }
        }
    }

    fn step_forward(&mut self) {
        if self.transcript.step_forward() {
            self.status_message = "Stepped forward".to_string();
            // Auto-scroll output to bottom
            self.output_scroll = usize::MAX;
        } else {
            self.status_message = format!("Cannot step forward: {}", self.end_message());
        }
    }

    fn step_backward(&mut self) {
        if self.transcript.step_backward() {
            self.status_message = "Stepped backward".to_string();
            self.output_scroll = usize::MAX;
        } else {
            self.status_message = "Cannot step backward: at start".to_string();
        }
    }

    fn end_message(&self) -> String {
        match self.transcript.error() {
            Some(err) => format!("Lesson stopped ({}): {}", err.kind(), err),
            None => "Lesson complete".to_string(),
        }
    }
}

fn ready_message(transcript: &Transcript) -> String {
    format!("{}: {} line(s) recorded", transcript.lesson(), transcript.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn app(id: LessonId, config: RunConfig) -> App {
        let catalog = Catalog::standard();
        let transcript = record(catalog.get(id).unwrap(), &config);
        App::new(catalog, transcript, config)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn arrow_keys_step_through_output() {
        let mut app = app(LessonId::Intro, RunConfig::default());
        press(&mut app, KeyCode::Right);
        assert_eq!(app.transcript.position(), 1);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.transcript.position(), 0);
        assert_eq!(app.status_message, "Cannot step backward: at start");
    }

    #[test]
    fn number_keys_step_several_lines() {
        let mut app = app(LessonId::Loops, RunConfig::default());
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.transcript.position(), 5);
        assert_eq!(app.status_message, "Stepped forward 5 line(s)");
    }

    #[test]
    fn enter_reports_the_error_of_a_stopped_lesson() {
        let mut app = app(LessonId::Collections, RunConfig::default().with_overrun(true));
        press(&mut app, KeyCode::Enter);
        assert!(app.transcript.is_at_end());
        assert!(app.status_message.contains("index 4 out of bounds"));
    }

    #[test]
    fn lesson_keys_switch_transcripts() {
        let mut app = app(LessonId::Intro, RunConfig::default());
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.transcript.lesson(), LessonId::Strings);
        press(&mut app, KeyCode::Char('p'));
        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.transcript.lesson(), LessonId::Collections);
    }

    #[test]
    fn render_shows_visible_output_and_current_section() {
        let mut app = app(LessonId::Intro, RunConfig::default());
        assert!(screen(&mut app).contains("(no output yet)"));

        press(&mut app, KeyCode::Right);
        let text = screen(&mut app);
        assert!(text.contains("Hello, World!"));
        assert!(!text.contains("Learning Rust as Programming Language"));
        assert!(text.contains("Line 1/2"));
    }

    #[test]
    fn quit_key_stops_the_loop() {
        let mut app = app(LessonId::Intro, RunConfig::default());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
