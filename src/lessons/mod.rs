//! The lessons and the catalog that owns them
//!
//! Every lesson is a unit struct implementing [`Lesson`]. A lesson runs top to
//! bottom once, writing each result to a [`Console`]. Lessons are independent:
//! none of them calls another, and none keeps state between runs.
//!
//! # Lessons
//!
//! - [`intro`]: greeting text
//! - [`strings`]: concatenation, formatting and string methods
//! - [`numbers`]: integer arithmetic, ranges, overflow, floats and decimals
//! - [`conditions`]: comparisons, short-circuit logic and `match`
//! - [`loops`]: `while`, post-condition `loop`, `for` and nesting
//! - [`collections`]: `Vec` and [`FixedSeq`](crate::sequence::FixedSeq)

pub mod collections;
pub mod conditions;
pub mod intro;
pub mod loops;
pub mod numbers;
pub mod strings;

use crate::config::RunConfig;
use crate::console::Console;
use crate::errors::LessonError;
use clap::ValueEnum;
use rustc_hash::FxHashMap;
use std::fmt;

/// Identifies one of the six lessons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum)]
pub enum LessonId {
    Intro,
    Strings,
    Numbers,
    Conditions,
    Loops,
    Collections,
}

impl LessonId {
    /// Canonical order
    pub const ALL: [LessonId; 6] = [
        LessonId::Intro,
        LessonId::Strings,
        LessonId::Numbers,
        LessonId::Conditions,
        LessonId::Loops,
        LessonId::Collections,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LessonId::Intro => "intro",
            LessonId::Strings => "strings",
            LessonId::Numbers => "numbers",
            LessonId::Conditions => "conditions",
            LessonId::Loops => "loops",
            LessonId::Collections => "collections",
        }
    }

    /// Next lesson in canonical order, wrapping around
    pub fn next(self) -> Self {
        let index = self.index();
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Previous lesson in canonical order, wrapping around
    pub fn prev(self) -> Self {
        let index = self.index();
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|id| *id == self).unwrap_or(0)
    }
}

impl fmt::Display for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A titled part of a lesson with a short explanation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    pub note: &'static str,
}

/// A standalone console lesson
pub trait Lesson {
    fn id(&self) -> LessonId;

    /// Heading shown by `primer list` and the browser
    fn title(&self) -> &'static str;

    /// Sections in the order the lesson opens them
    fn sections(&self) -> &'static [Section];

    /// Execute the lesson once, top to bottom
    fn run(&self, console: &mut Console, config: &RunConfig) -> Result<(), LessonError>;
}

/// Run a lesson inside a `lesson` span, logging start and outcome
pub fn run(
    lesson: &dyn Lesson,
    console: &mut Console,
    config: &RunConfig,
) -> Result<(), LessonError> {
    let span = tracing::info_span!("lesson", name = %lesson.id());
    let _guard = span.enter();

    tracing::info!(title = lesson.title(), "starting lesson");
    let result = lesson.run(console, config);
    match &result {
        Ok(()) => tracing::info!(lines = console.lines().len(), "lesson finished"),
        Err(e) => tracing::warn!(error = %e, section = console.current_section(), "lesson stopped"),
    }
    result
}

/// All lessons, keyed by id
pub struct Catalog {
    lessons: FxHashMap<LessonId, Box<dyn Lesson>>,
}

impl Catalog {
    /// Catalog holding the six standard lessons
    pub fn standard() -> Self {
        let mut lessons: FxHashMap<LessonId, Box<dyn Lesson>> = FxHashMap::default();
        lessons.insert(LessonId::Intro, Box::new(intro::Intro));
        lessons.insert(LessonId::Strings, Box::new(strings::Strings));
        lessons.insert(LessonId::Numbers, Box::new(numbers::Numbers));
        lessons.insert(LessonId::Conditions, Box::new(conditions::Conditions));
        lessons.insert(LessonId::Loops, Box::new(loops::Loops));
        lessons.insert(LessonId::Collections, Box::new(collections::Collections));
        Catalog { lessons }
    }

    /// Look up a lesson by id
    pub fn get(&self, id: LessonId) -> Option<&dyn Lesson> {
        self.lessons.get(&id).map(|lesson| lesson.as_ref())
    }

    /// Registered lessons in canonical order
    pub fn iter(&self) -> impl Iterator<Item = &dyn Lesson> + '_ {
        LessonId::ALL.into_iter().filter_map(|id| self.get(id))
    }

    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_registers_every_lesson_under_its_own_id() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.len(), LessonId::ALL.len());
        for id in LessonId::ALL {
            assert_eq!(catalog.get(id).unwrap().id(), id);
        }
    }

    #[test]
    fn iteration_follows_canonical_order() {
        let catalog = Catalog::standard();
        let ids: Vec<LessonId> = catalog.iter().map(|lesson| lesson.id()).collect();
        assert_eq!(ids, LessonId::ALL.to_vec());
    }

    #[test]
    fn lesson_navigation_wraps() {
        assert_eq!(LessonId::Intro.next(), LessonId::Strings);
        assert_eq!(LessonId::Collections.next(), LessonId::Intro);
        assert_eq!(LessonId::Intro.prev(), LessonId::Collections);
    }

    #[test]
    fn every_section_id_is_unique_within_a_lesson() {
        let catalog = Catalog::standard();
        for lesson in catalog.iter() {
            let sections = lesson.sections();
            for (i, a) in sections.iter().enumerate() {
                for b in &sections[i + 1..] {
                    assert_ne!(a.id, b.id, "duplicate section in {}", lesson.id());
                }
            }
        }
    }

    #[test]
    fn lessons_only_tag_output_with_declared_sections() {
        let catalog = Catalog::standard();
        for lesson in catalog.iter() {
            let mut console = Console::recording();
            run(lesson, &mut console, &RunConfig::default()).unwrap();
            for line in console.lines() {
                assert!(
                    lesson.sections().iter().any(|s| s.id == line.section),
                    "{} wrote to undeclared section {}",
                    lesson.id(),
                    line.section
                );
            }
        }
    }
}
