//! Lesson 5: loops

use super::{Lesson, LessonId, Section};
use crate::config::RunConfig;
use crate::console::Console;
use crate::errors::LessonError;
use crate::say;

const SECTIONS: &[Section] = &[
    Section {
        id: "while",
        title: "while",
        note: "while checks its condition before each pass, so the body may \
               run zero times.",
    },
    Section {
        id: "do-while",
        title: "Post-condition loop",
        note: "Rust has no do-while. A `loop` whose exit check sits at the end \
               of the body runs at least once.",
    },
    Section {
        id: "for",
        title: "for over a range",
        note: "`0..10` is a half-open range: 0 through 9.",
    },
    Section {
        id: "for-each",
        title: "for over a collection",
        note: "for visits each element of anything that implements IntoIterator.",
    },
    Section {
        id: "nested",
        title: "Nested loops",
        note: "The inner loop runs to completion on every pass of the outer loop. \
               char ranges work too: 'a'..'h' is a through g.",
    },
];

pub struct Loops;

impl Lesson for Loops {
    fn id(&self) -> LessonId {
        LessonId::Loops
    }

    fn title(&self) -> &'static str {
        "Loops"
    }

    fn sections(&self) -> &'static [Section] {
        SECTIONS
    }

    fn run(&self, console: &mut Console, _config: &RunConfig) -> Result<(), LessonError> {
        console.section("while");
        console.line("Loops in Rust")?;

        let mut counter = 0;
        while counter < 10 {
            say!(console, "The counter is {}", counter)?;
            counter += 1;
        }

        console.section("do-while");
        let mut do_counter = 0;
        loop {
            say!(console, "The do-while counter is {}", do_counter)?;
            do_counter += 1;
            if do_counter >= 10 {
                break;
            }
        }

        console.section("for");
        for i in 0..10 {
            say!(console, "The for loop counter is {}", i)?;
        }

        console.section("for-each");
        for subject in ["Rust", "Tokio", "Axum"] {
            say!(console, "Studying {}", subject)?;
        }

        console.section("nested");
        for row in 1..11 {
            for column in 'a'..'h' {
                say!(console, "The cell is ({}, {})", row, column)?;
            }
        }

        for i in 1..=5 {
            say!(console, "Outer loop iteration: {}, starting inner loop...", i)?;
            for j in 1..=3 {
                say!(console, "\tInner loop iteration: {}", j)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output() -> Vec<String> {
        let mut console = Console::recording();
        Loops.run(&mut console, &RunConfig::default()).unwrap();
        console.output()
    }

    #[test]
    fn counted_loops_run_ten_times() {
        let out = output();
        let count = |prefix: &str| out.iter().filter(|l| l.starts_with(prefix)).count();
        assert_eq!(count("The counter is"), 10);
        assert_eq!(count("The do-while counter is"), 10);
        assert_eq!(count("The for loop counter is"), 10);
        assert_eq!(out[10], "The counter is 9");
    }

    #[test]
    fn grid_covers_ten_rows_by_seven_columns() {
        let out = output();
        let cells: Vec<&String> = out.iter().filter(|l| l.starts_with("The cell is")).collect();
        assert_eq!(cells.len(), 70);
        assert_eq!(cells[0], "The cell is (1, a)");
        assert_eq!(cells[6], "The cell is (1, g)");
        assert_eq!(cells[69], "The cell is (10, g)");
    }

    #[test]
    fn inner_loop_completes_before_the_next_outer_pass() {
        let out = output();
        let start = out
            .iter()
            .position(|l| l == "Outer loop iteration: 1, starting inner loop...")
            .unwrap();
        assert_eq!(out[start + 1], "\tInner loop iteration: 1");
        assert_eq!(out[start + 3], "\tInner loop iteration: 3");
        assert_eq!(out[start + 4], "Outer loop iteration: 2, starting inner loop...");
        assert_eq!(out.len(), start + 20);
    }
}
