// Recorded lesson runs for step-through playback

use super::{Console, ConsoleLine};
use crate::config::RunConfig;
use crate::errors::LessonError;
use crate::lessons::{self, Lesson, LessonId, Section};
use rustc_hash::FxHashMap;

/// Output of one lesson run plus a playback cursor
///
/// The cursor counts visible lines: position 0 shows nothing, position
/// `len()` shows the whole run.
#[derive(Debug)]
pub struct Transcript {
    lesson: LessonId,
    title: &'static str,
    sections: &'static [Section],
    lines: Vec<ConsoleLine>,
    error: Option<LessonError>,
    section_starts: FxHashMap<&'static str, usize>,
    position: usize,
}

/// Run a lesson against a recording console
///
/// A lesson error does not fail the recording; it is kept in the transcript
/// next to the output produced before it.
pub fn record(lesson: &dyn Lesson, config: &RunConfig) -> Transcript {
    let mut console = Console::recording();
    let result = lessons::run(lesson, &mut console, config);
    Transcript::new(lesson, console.into_lines(), result.err())
}

impl Transcript {
    pub fn new(lesson: &dyn Lesson, lines: Vec<ConsoleLine>, error: Option<LessonError>) -> Self {
        let mut section_starts = FxHashMap::default();
        for (index, line) in lines.iter().enumerate() {
            section_starts.entry(line.section).or_insert(index);
        }

        Transcript {
            lesson: lesson.id(),
            title: lesson.title(),
            sections: lesson.sections(),
            lines,
            error,
            section_starts,
            position: 0,
        }
    }

    pub fn lesson(&self) -> LessonId {
        self.lesson
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn sections(&self) -> &'static [Section] {
        self.sections
    }

    pub fn lines(&self) -> &[ConsoleLine] {
        &self.lines
    }

    pub fn error(&self) -> Option<&LessonError> {
        self.error.as_ref()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Lines shown at the current position
    pub fn visible(&self) -> &[ConsoleLine] {
        &self.lines[..self.position]
    }

    /// Section of the most recently shown line
    pub fn current_section(&self) -> Option<&'static str> {
        self.visible().last().map(|line| line.section)
    }

    pub fn is_at_start(&self) -> bool {
        self.position == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.position == self.lines.len()
    }

    /// Show one more line; false when already at the end
    pub fn step_forward(&mut self) -> bool {
        if self.is_at_end() {
            return false;
        }
        self.position += 1;
        true
    }

    /// Hide the last shown line; false when already at the start
    pub fn step_backward(&mut self) -> bool {
        if self.is_at_start() {
            return false;
        }
        self.position -= 1;
        true
    }

    pub fn rewind_to_start(&mut self) {
        self.position = 0;
    }

    pub fn jump_to_end(&mut self) {
        self.position = self.lines.len();
    }

    /// Move to the first line of a section; false if it produced no output
    pub fn jump_to_section(&mut self, id: &str) -> bool {
        match self.section_starts.get(id) {
            Some(&start) => {
                self.position = start + 1;
                true
            }
            None => false,
        }
    }

    /// Move to the first line of the section after the current one
    pub fn next_section(&mut self) -> bool {
        let current = self.section_index();
        let next = self
            .sections
            .iter()
            .enumerate()
            .skip(current.map_or(0, |index| index + 1))
            .find(|(_, section)| self.section_starts.contains_key(section.id));
        match next {
            Some((_, section)) => self.jump_to_section(section.id),
            None => false,
        }
    }

    /// Move to the first line of the section before the current one
    pub fn previous_section(&mut self) -> bool {
        let Some(current) = self.section_index() else {
            return false;
        };
        let previous = self.sections[..current]
            .iter()
            .rev()
            .find(|section| self.section_starts.contains_key(section.id));
        match previous {
            Some(section) => self.jump_to_section(section.id),
            None => {
                self.rewind_to_start();
                true
            }
        }
    }

    /// Index into [`Transcript::sections`] of the current section
    pub fn section_index(&self) -> Option<usize> {
        let id = self.current_section()?;
        self.sections.iter().position(|section| section.id == id)
    }
}
