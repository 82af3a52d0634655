//! Lesson 2: strings
//!
//! Covers `+` concatenation, `format!` interpolation, and the common `str`
//! methods. None of the methods change the string they are called on: each
//! one returns a new `String` (or a borrowed slice), and the lesson prints
//! the source afterwards to show it is untouched.

use super::{Lesson, LessonId, Section};
use crate::config::RunConfig;
use crate::console::Console;
use crate::errors::LessonError;
use crate::say;

const SECTIONS: &[Section] = &[
    Section {
        id: "variables",
        title: "String variables",
        note: "String literals are &'static str. String::from makes an owned \
               String. `+` takes an owned String on the left and a &str on the \
               right; format! builds a new String from a template.",
    },
    Section {
        id: "trim",
        title: "Trimming",
        note: "trim_start, trim_end and trim return slices of the original \
               string without the surrounding whitespace.",
    },
    Section {
        id: "search",
        title: "Searching",
        note: "contains reports whether a substring occurs anywhere.",
    },
    Section {
        id: "replace",
        title: "Replacing",
        note: "replace returns a new String with every match substituted. \
               To keep the result, bind it again (shadowing the old name).",
    },
    Section {
        id: "case",
        title: "Changing case",
        note: "to_uppercase and to_lowercase allocate new Strings.",
    },
    Section {
        id: "affixes",
        title: "Prefixes, suffixes and length",
        note: "starts_with and ends_with test the edges of a string. len is \
               the length in bytes, which equals the character count for ASCII.",
    },
];

pub struct Strings;

impl Lesson for Strings {
    fn id(&self) -> LessonId {
        LessonId::Strings
    }

    fn title(&self) -> &'static str {
        "Strings"
    }

    fn sections(&self) -> &'static [Section] {
        SECTIONS
    }

    fn run(&self, console: &mut Console, _config: &RunConfig) -> Result<(), LessonError> {
        console.section("variables");
        let first_subject = "Rust";
        let second_subject = "Tokio";
        let third_subject = String::from("Axum");
        console.line(third_subject.as_str())?;

        let sentence =
            String::from("Learning ") + first_subject + " first, then " + second_subject + " later";
        console.line(sentence)?;
        say!(console, "Learning {first_subject} first, then {second_subject} later")?;

        console.section("trim");
        let greeting = "      Learning Rust Language!       ";
        say!(console, "[{}]", greeting)?;

        let mut trimmed_greeting = greeting.trim_start();
        say!(console, "[{}]", trimmed_greeting)?;

        trimmed_greeting = greeting.trim_end();
        say!(console, "[{}]", trimmed_greeting)?;

        trimmed_greeting = greeting.trim();
        say!(console, "[{}]", trimmed_greeting)?;

        console.section("search");
        let quote = "When there is a will, there is a way";
        say!(console, "{}", quote.contains("will"))?;
        say!(console, "{}", quote.contains("way"))?;
        say!(console, "{}", quote.contains("why"))?;

        console.section("replace");
        let welcome_msg = String::from("Hello Everyone!");
        console.line(welcome_msg.as_str())?;
        console.line(welcome_msg.replace("Everyone", "Everybody!"))?;
        console.line(welcome_msg.as_str())?;

        let welcome_msg = welcome_msg.replace("Hello", "Greetings");
        console.line(welcome_msg.as_str())?;

        console.section("case");
        console.line(welcome_msg.to_uppercase())?;
        console.line(welcome_msg.to_lowercase())?;
        console.line(welcome_msg.as_str())?;

        console.section("affixes");
        say!(console, "{}", quote.starts_with("When"))?;
        say!(console, "{}", quote.starts_with("way"))?;
        say!(console, "{}", quote.ends_with("way"))?;
        say!(console, "{}", quote.ends_with("When"))?;
        say!(console, "{}", quote.len())?;

        console.line("Hello, World")?;
        Ok(())
    }
}
