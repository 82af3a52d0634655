// Integration tests for lesson output

use primer::config::RunConfig;
use primer::console::{record, Console};
use primer::errors::LessonError;
use primer::lessons::{self, Catalog, LessonId};

fn output(id: LessonId) -> Vec<String> {
    let catalog = Catalog::standard();
    let lesson = catalog.get(id).expect("lesson registered");
    let mut console = Console::recording();
    lessons::run(lesson, &mut console, &RunConfig::default()).expect("lesson failed");
    console.output()
}

#[test]
fn test_every_lesson_is_deterministic() {
    for id in LessonId::ALL {
        assert_eq!(output(id), output(id), "{} changed between runs", id);
    }
}

#[test]
fn test_intro_greets() {
    assert_eq!(
        output(LessonId::Intro),
        vec!["Hello, World!", "Learning Rust as Programming Language"]
    );
}

#[test]
fn test_string_searches() {
    let out = output(LessonId::Strings);
    assert_eq!(out[7..10], ["true", "true", "false"]);
    assert_eq!(out[17..21], ["true", "false", "true", "false"]);
    assert_eq!(out[21], "36");
    assert_eq!(out.last().unwrap(), "Hello, World");
}

#[test]
fn test_number_ranges() {
    let out = output(LessonId::Numbers);
    let expected = [
        "The range of integers is -2147483648 to 2147483647",
        "An example of overflow: the output is -2147483646",
        "The range of f64 is -1.7976931348623157E+308 to 1.7976931348623157E+308",
        "The range of f32 is -3.4028235E+38 to 3.4028235E+38",
        "The range of Decimal is -79228162514264337593543950335 to 79228162514264337593543950335",
        "0.3333333333333333333333333333",
        "10.5",
        "f32",
        "10 as f64",
    ];
    for line in expected {
        assert!(out.iter().any(|l| l == line), "missing line: {}", line);
    }
    assert_eq!(out[out.len() - 2..], ["10", "5"]);
}

#[test]
fn test_overflow_matches_min_plus_two() {
    let wrapped = i32::MAX.wrapping_add(3);
    assert_eq!(wrapped, i32::MIN + 2);
    let out = output(LessonId::Numbers);
    assert!(out.contains(&format!("An example of overflow: the output is {}", wrapped)));
}

#[test]
fn test_conditions_branches() {
    let out = output(LessonId::Conditions);
    assert_eq!(
        out[..7],
        [
            "Conditions in Rust",
            "The answer is greater than 10.",
            "You can have a library card!",
            "Yes, you can buy fireworks.",
            "Yes, you can buy fireworks.",
            "You are eligible to register for the course.",
            "Right operand of `false && ...` evaluated 0 time(s)",
        ]
    );
    assert_eq!(
        out[out.len() - 5..],
        [
            "Match result:",
            "The fruit is apple",
            "Hmm!, so you like kiwi",
            "Day 3 is Wednesday",
            "Day 9 is not a day of the week",
        ]
    );
}

#[test]
fn test_loops_line_count() {
    // 1 heading + 10 while + 10 post-condition + 10 for + 3 for-each + 70 grid + 5 * 4 nested
    assert_eq!(output(LessonId::Loops).len(), 124);
}

#[test]
fn test_collections_access_and_sort() {
    let out = output(LessonId::Collections);
    for line in [
        "Row Display: [\"Alex\", \"Chow\", \"Sam\", \"Simpson\"]",
        "Number of members: 4",
        "First member: Alex",
        "Last member: Simpson",
        "Last city: Vaughan",
        "Is valid: true",
        "Value of pi: 3.14",
        "VAUGHAN",
        "Instruments: Guitar, Piano, Drums, Violin",
        "Name List before sorting: [\"Simpson\", \"Alex\", \"Chow\", \"Sam\"]",
    ] {
        assert!(out.iter().any(|l| l == line), "missing line: {}", line);
    }

    let sorted = out
        .iter()
        .position(|l| l == "Sorted Name List (Ascending):")
        .unwrap();
    assert_eq!(out[sorted + 1..sorted + 5], ["Alex", "Chow", "Sam", "Simpson"]);
}

#[test]
fn test_overrun_is_kept_in_transcript() {
    let catalog = Catalog::standard();
    let lesson = catalog.get(LessonId::Collections).unwrap();
    let transcript = record(lesson, &RunConfig::default().with_overrun(true));

    match transcript.error() {
        Some(LessonError::IndexOutOfRange {
            sequence,
            index,
            len,
        }) => {
            assert_eq!(*sequence, "names_array");
            assert_eq!((*index, *len), (4, 4));
        }
        other => panic!("expected out-of-range error, got {:?}", other),
    }
    assert_eq!(transcript.current_section(), None);
    assert_eq!(transcript.lines().last().map(|l| l.section), Some("fixed"));
}
