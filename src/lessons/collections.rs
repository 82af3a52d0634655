//! Lesson 6: collections
//!
//! `Vec` for sequences that grow, [`FixedSeq`] for sequences whose length is
//! fixed when they are created. Positional access on a `FixedSeq` is checked;
//! with [`RunConfig::trigger_overrun`] set, the lesson assigns one slot past
//! the end and stops with [`LessonError::IndexOutOfRange`].

use super::{Lesson, LessonId, Section};
use crate::config::RunConfig;
use crate::console::Console;
use crate::errors::LessonError;
use crate::sequence::FixedSeq;
use crate::say;

const SECTIONS: &[Section] = &[
    Section {
        id: "vec",
        title: "Creating vectors",
        note: "Vec::new() starts empty; vec![...] starts from a list. push \
               appends to the end.",
    },
    Section {
        id: "indexing",
        title: "Indexing",
        note: "Indexes start at 0. The last element is at len() - 1, and \
               last() returns it as an Option so an empty Vec is handled.",
    },
    Section {
        id: "iteration",
        title: "Iterating",
        note: "for borrows each element in turn. Index loops over 0..len() \
               also work.",
    },
    Section {
        id: "inference",
        title: "Type inference",
        note: "let without a type annotation lets the compiler infer it from the \
               value.",
    },
    Section {
        id: "slices",
        title: "Slices",
        note: "v[1..4] borrows elements 1, 2 and 3; the end of a range is \
               excluded.",
    },
    Section {
        id: "fixed",
        title: "Fixed-size sequences",
        note: "A fixed-size sequence is filled by position. Writing past the \
               end is an error that stops the program.",
    },
    Section {
        id: "sorting",
        title: "Sorting",
        note: "sort orders a Vec ascending in place: alphabetically for \
               strings, numerically for numbers.",
    },
];

pub struct Collections;

impl Lesson for Collections {
    fn id(&self) -> LessonId {
        LessonId::Collections
    }

    fn title(&self) -> &'static str {
        "Vectors and fixed-size sequences"
    }

    fn sections(&self) -> &'static [Section] {
        SECTIONS
    }

    #[allow(clippy::approx_constant, clippy::needless_range_loop)]
    fn run(&self, console: &mut Console, config: &RunConfig) -> Result<(), LessonError> {
        console.section("vec");
        console.line("Working with vectors and fixed-size sequences in Rust")?;

        let mut names: Vec<String> = Vec::new();
        let mut cities: Vec<&str> = Vec::new();
        let mut program_languages: Vec<&str> = vec![];

        let colors = vec!["Red", "Green", "Blue"];
        let fruits = Vec::from(["Apple", "Banana", "Orange"]);
        let animals: Vec<&str> = ["Dog", "Cat", "Elephant"].into();

        names.push("Alex".to_string());
        names.push("Chow".to_string());
        names.push("Sam".to_string());
        names.push("Simpson".to_string());

        cities.push("Toronto");
        cities.push("Mississauga");
        cities.push("Brampton");
        cities.push("Vaughan");

        for language in ["Rust", "Java", "Python", "JavaScript", "TypeScript", "PHP", "C++"] {
            program_languages.push(language);
        }

        say!(console, "\nRow Display: {:?}", names)?;
        say!(console, "Colors: {:?}", colors)?;
        say!(console, "Fruits: {:?}", fruits)?;
        say!(console, "Animals: {:?}", animals)?;

        console.section("indexing");
        say!(console, "\nNumber of members: {}", names.len())?;
        say!(console, "First member: {}", names[0])?;
        say!(console, "Second member: {}", names[1])?;
        say!(console, "Third member: {}", names[2])?;
        say!(console, "Fourth member: {}", names[3])?;
        say!(console, "Last member: {}", names[names.len() - 1])?;

        if let Some(city) = cities.last() {
            say!(console, "\nLast city: {}", city)?;
        }

        console.section("iteration");
        console.line("\nNames in the list:")?;
        for name in &names {
            console.line(name.as_str())?;
        }

        console.line("\nCities in the list:")?;
        for city in &cities {
            console.line(city.to_uppercase())?;
        }

        console.section("inference");
        let numbers: Vec<i32> = Vec::new();
        let max_grade = 100;
        let first_name = "Alex";
        let is_valid = true;
        let pi = 3.14;
        say!(console, "\nMax grade: {}", max_grade)?;
        say!(console, "\nFirst name: {}", first_name)?;
        say!(console, "\nIs valid: {}", is_valid)?;
        say!(console, "\nValue of pi: {}", pi)?;
        say!(console, "\nEmpty numbers: {:?}", numbers)?;

        console.line("\nProgramming languages in the list:")?;
        for i in 0..program_languages.len() {
            console.line(program_languages[i])?;
        }

        console.section("slices");
        console.line("\nProgramming languages from index 1 to 3:")?;
        for language in &program_languages[1..4] {
            console.line(*language)?;
        }

        console.section("fixed");
        let mut names_array: FixedSeq<String> = FixedSeq::with_len("names_array", 4);
        names_array.set(0, "Alex".to_string())?;
        names_array.set(2, "Sam".to_string())?;
        names_array.set(1, "Chow".to_string())?;
        names_array.set(3, "Simpson".to_string())?;

        let instruments_array =
            FixedSeq::from_values("instruments_array", ["Guitar", "Piano", "Drums", "Violin"]);
        let cities_array = FixedSeq::from_values(
            "cities_array",
            ["Toronto", "Mississauga", "Brampton", "Vaughan"],
        );

        say!(console, "\nNames in the sequence \"{}\":", names_array.name())?;
        for i in 0..names_array.len() {
            console.line(names_array.get(i)?.as_str())?;
        }

        say!(console, "\nCities in the sequence \"{}\":", cities_array.name())?;
        for i in 0..cities_array.len() {
            console.line(cities_array.get(i)?.to_uppercase())?;
        }
        say!(console, "Last city from the end: {}", cities_array.from_end(1)?)?;
        say!(console, "Instruments: {}", instruments_array.as_slice().join(", "))?;

        if config.trigger_overrun {
            let index = names_array.len();
            tracing::debug!(index, len = names_array.len(), "assigning past the end");
            say!(console, "\nAssigning {}[{}]...", names_array.name(), index)?;
            names_array.set(index, "Taylor".to_string())?;
        }

        console.section("sorting");
        let mut roster = vec!["Simpson", "Alex", "Chow", "Sam"];
        say!(console, "\nName List before sorting: {:?}", roster)?;
        roster.sort();
        console.line("\nSorted Name List (Ascending):")?;
        for name in &roster {
            console.line(*name)?;
        }

        let mut grades = vec![88, 72, 100, 95];
        grades.sort();
        say!(console, "\nSorted grades (Ascending): {:?}", grades)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(config: RunConfig) -> (Vec<String>, Result<(), LessonError>) {
        let mut console = Console::recording();
        let result = Collections.run(&mut console, &config);
        (console.output(), result)
    }

    #[test]
    fn last_city_is_addressed_from_the_end() {
        let (out, result) = run(RunConfig::default());
        result.unwrap();
        assert!(out.contains(&"Last city: Vaughan".to_string()));
    }

    #[test]
    fn sorting_is_ascending_for_text_and_numbers() {
        let (out, _) = run(RunConfig::default());
        let before = out
            .iter()
            .position(|l| l.starts_with("Name List before sorting:"))
            .unwrap();
        assert_eq!(
            out[before],
            "Name List before sorting: [\"Simpson\", \"Alex\", \"Chow\", \"Sam\"]"
        );
        let start = out
            .iter()
            .position(|l| l == "Sorted Name List (Ascending):")
            .unwrap();
        assert!(start > before);
        assert_eq!(out[start + 1..start + 5], ["Alex", "Chow", "Sam", "Simpson"]);
        assert_eq!(out.last().unwrap(), "Sorted grades (Ascending): [72, 88, 95, 100]");
    }

    #[test]
    fn slice_excludes_its_end() {
        let (out, _) = run(RunConfig::default());
        let start = out
            .iter()
            .position(|l| l == "Programming languages from index 1 to 3:")
            .unwrap();
        assert_eq!(out[start + 1..start + 4], ["Java", "Python", "JavaScript"]);
        assert_eq!(out[start + 4], "");
    }

    #[test]
    fn overrun_stops_before_sorting() {
        let (out, result) = run(RunConfig::default().with_overrun(true));
        assert!(matches!(
            result,
            Err(LessonError::IndexOutOfRange {
                sequence: "names_array",
                index: 4,
                len: 4
            })
        ));
        assert_eq!(out.last().unwrap(), "Assigning names_array[4]...");
        assert!(!out.iter().any(|l| l.starts_with("Sorted")));
    }
}
