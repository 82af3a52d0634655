//! Lesson 4: conditions

use super::{Lesson, LessonId, Section};
use crate::config::RunConfig;
use crate::console::Console;
use crate::errors::LessonError;
use crate::say;
use std::cell::Cell;

const SECTIONS: &[Section] = &[
    Section {
        id: "if-else",
        title: "if and else",
        note: "The condition must be a bool; there is no implicit conversion \
               from numbers. Braces are always required.",
    },
    Section {
        id: "logic",
        title: "Logical operators",
        note: "|| is true when any operand is true, && when all are. Both stop \
               as soon as the left operand decides the result, so the right \
               operand may never run. ! negates.",
    },
    Section {
        id: "if-expression",
        title: "if as an expression",
        note: "if/else produces a value, which replaces the ternary operator.",
    },
    Section {
        id: "match",
        title: "match",
        note: "match compares a value against patterns in order. It must be \
               exhaustive, so `_` catches everything the other arms miss.",
    },
];

pub struct Conditions;

impl Lesson for Conditions {
    fn id(&self) -> LessonId {
        LessonId::Conditions
    }

    fn title(&self) -> &'static str {
        "Conditions"
    }

    fn sections(&self) -> &'static [Section] {
        SECTIONS
    }

    #[allow(clippy::nonminimal_bool)]
    fn run(&self, console: &mut Console, _config: &RunConfig) -> Result<(), LessonError> {
        console.section("if-else");
        console.line("Conditions in Rust")?;

        let a = 5;
        let b = 6;
        if a + b > 10 {
            console.line("The answer is greater than 10.")?;
        } else {
            console.line("The answer is not greater than 10")?;
        }

        console.section("logic");
        let live_in_to = false;
        let work_in_to = true;
        let study_in_to = false;
        if live_in_to || work_in_to || study_in_to {
            console.line("You can have a library card!")?;
        } else {
            console.line("You cannot have a library card!")?;
        }

        let age = 18;
        if age >= 18 {
            console.line("Yes, you can buy fireworks.")?;
        }
        if !(age < 18) {
            console.line("Yes, you can buy fireworks.")?;
        }

        let student_age = 19;
        let student_average = 85.5;
        if student_age >= 18 && student_average >= 80.0 {
            console.line("You are eligible to register for the course.")?;
        } else {
            console.line("You do NOT meet the registration requirements.")?;
        }

        // Counts how often the right-hand operand actually runs
        let evaluations = Cell::new(0);
        let probe = |answer: bool| {
            evaluations.set(evaluations.get() + 1);
            answer
        };

        let has_ticket = false;
        let _ = has_ticket && probe(true);
        say!(
            console,
            "Right operand of `false && ...` evaluated {} time(s)",
            evaluations.get()
        )?;

        evaluations.set(0);
        let is_member = true;
        let _ = is_member || probe(true);
        say!(
            console,
            "Right operand of `true || ...` evaluated {} time(s)",
            evaluations.get()
        )?;

        evaluations.set(0);
        let _ = is_member && probe(true);
        say!(
            console,
            "Right operand of `true && ...` evaluated {} time(s)",
            evaluations.get()
        )?;

        console.section("if-expression");
        let message = if age >= 18 {
            "Yes, you can buy fireworks."
        } else {
            "No, you cannot buy fireworks."
        };
        console.line(message)?;

        console.section("match");
        console.line("Match result:")?;
        for fruit in ["apple", "kiwi"] {
            console.line(describe_fruit(fruit))?;
        }
        for day in [3, 9] {
            console.line(describe_day(day))?;
        }
        Ok(())
    }
}

fn describe_fruit(fruit: &str) -> String {
    match fruit {
        "apple" => "The fruit is apple".to_string(),
        "lemon" => "The fruit is lemon".to_string(),
        "orange" => "The fruit is orange".to_string(),
        "banana" => "The fruit is banana".to_string(),
        _ => format!("Hmm!, so you like {}", fruit),
    }
}

fn describe_day(day: u8) -> String {
    let name = match day {
        1 => "Monday",
        2 => "Tuesday",
        3 => "Wednesday",
        4 => "Thursday",
        5 => "Friday",
        6 => "Saturday",
        7 => "Sunday",
        _ => return format!("Day {} is not a day of the week", day),
    };
    format!("Day {} is {}", day, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_falls_back_for_unknown_values() {
        assert_eq!(describe_fruit("banana"), "The fruit is banana");
        assert_eq!(describe_fruit("mango"), "Hmm!, so you like mango");
        assert_eq!(describe_day(7), "Day 7 is Sunday");
        assert_eq!(describe_day(0), "Day 0 is not a day of the week");
    }

    #[test]
    fn short_circuit_skips_the_right_operand() {
        let mut console = Console::recording();
        Conditions.run(&mut console, &RunConfig::default()).unwrap();
        let out = console.output();

        assert!(out.contains(&"Right operand of `false && ...` evaluated 0 time(s)".to_string()));
        assert!(out.contains(&"Right operand of `true || ...` evaluated 0 time(s)".to_string()));
        assert!(out.contains(&"Right operand of `true && ...` evaluated 1 time(s)".to_string()));
    }
}
