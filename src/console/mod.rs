//! Lesson output capture
//!
//! Lessons never print directly. They write through a [`Console`], which keeps
//! every line together with the section that produced it and, when built with
//! [`Console::echoing`], forwards each line to a writer as soon as it exists.
//! A finished run becomes a [`Transcript`] that the browser can step through.

mod transcript;

pub use transcript::{record, Transcript};

use crate::errors::LessonError;
use std::fmt;
use std::io::Write;

/// Section id used before a lesson opens its first section
pub const PRELUDE: &str = "prelude";

/// Write one formatted line to a [`Console`]
///
/// Expands to `console.line(format!(...))`, so the caller decides how to
/// handle the returned `Result`.
#[macro_export]
macro_rules! say {
    ($console:expr, $($arg:tt)*) => {
        $console.line(format!($($arg)*))
    };
}

/// A line of lesson output with the section that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleLine {
    pub text: String,
    pub section: &'static str,
}

/// Records lesson output and optionally echoes it to a writer
pub struct Console {
    lines: Vec<ConsoleLine>,
    section: &'static str,
    sink: Option<Box<dyn Write>>,
}

impl Console {
    /// Console that only records
    pub fn recording() -> Self {
        Console {
            lines: Vec::new(),
            section: PRELUDE,
            sink: None,
        }
    }

    /// Console that records and writes every line to `sink` immediately
    pub fn echoing<W: Write + 'static>(sink: W) -> Self {
        Console {
            lines: Vec::new(),
            section: PRELUDE,
            sink: Some(Box::new(sink)),
        }
    }

    /// Start a new section; following lines are tagged with `id`
    pub fn section(&mut self, id: &'static str) {
        tracing::debug!(section = id, "entering section");
        self.section = id;
    }

    /// Id of the section currently being written
    pub fn current_section(&self) -> &'static str {
        self.section
    }

    /// Write text followed by a newline
    ///
    /// Embedded newlines split the text into several lines, so `"\nTitle"`
    /// produces an empty line followed by `Title`.
    pub fn line(&mut self, text: impl Into<String>) -> Result<(), LessonError> {
        let text = text.into();
        for part in text.split('\n') {
            if let Some(sink) = self.sink.as_mut() {
                writeln!(sink, "{}", part)?;
            }
            self.lines.push(ConsoleLine {
                text: part.to_string(),
                section: self.section,
            });
        }
        if let Some(sink) = self.sink.as_mut() {
            sink.flush()?;
        }
        Ok(())
    }

    /// All recorded lines
    pub fn lines(&self) -> &[ConsoleLine] {
        &self.lines
    }

    /// Recorded text without section tags
    pub fn output(&self) -> Vec<String> {
        self.lines.iter().map(|line| line.text.clone()).collect()
    }

    pub fn into_lines(self) -> Vec<ConsoleLine> {
        self.lines
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::recording()
    }
}

impl fmt::Debug for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console")
            .field("lines", &self.lines.len())
            .field("section", &self.section)
            .field("echoing", &self.sink.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn embedded_newlines_become_separate_lines() {
        let mut console = Console::recording();
        console.line("\nRow Display").unwrap();
        assert_eq!(console.output(), vec!["", "Row Display"]);
    }

    #[test]
    fn lines_are_tagged_with_the_open_section() {
        let mut console = Console::recording();
        console.line("first").unwrap();
        console.section("trim");
        say!(console, "[{}]", "x").unwrap();

        assert_eq!(console.lines()[0].section, PRELUDE);
        assert_eq!(console.lines()[1].section, "trim");
        assert_eq!(console.lines()[1].text, "[x]");
    }

    #[test]
    fn echoing_console_writes_each_line_immediately() {
        let buffer = SharedBuffer::default();
        let mut console = Console::echoing(buffer.clone());
        console.line("Hello").unwrap();
        assert_eq!(buffer.0.borrow().as_slice(), b"Hello\n");

        console.line("a\nb").unwrap();
        assert_eq!(buffer.0.borrow().as_slice(), b"Hello\na\nb\n");
        assert_eq!(console.lines().len(), 3);
    }
}
