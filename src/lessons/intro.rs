//! Lesson 1: printing to the console

use super::{Lesson, LessonId, Section};
use crate::config::RunConfig;
use crate::console::Console;
use crate::errors::LessonError;

const SECTIONS: &[Section] = &[Section {
    id: "greeting",
    title: "Hello, World",
    note: "println! writes a line of text to standard output. \
           Every lesson here prints through a console instead, \
           which records each line so the run can be replayed.",
}];

pub struct Intro;

impl Lesson for Intro {
    fn id(&self) -> LessonId {
        LessonId::Intro
    }

    fn title(&self) -> &'static str {
        "Printing to the console"
    }

    fn sections(&self) -> &'static [Section] {
        SECTIONS
    }

    fn run(&self, console: &mut Console, _config: &RunConfig) -> Result<(), LessonError> {
        console.section("greeting");
        console.line("Hello, World!")?;
        console.line("Learning Rust as Programming Language")?;
        Ok(())
    }
}
