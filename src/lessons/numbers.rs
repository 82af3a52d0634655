//! Lesson 3: numbers
//!
//! Integer arithmetic and its limits, then the three fractional types:
//! `f64`, `f32` and `rust_decimal::Decimal`. The overflow example uses
//! `wrapping_add` because plain `+` panics on overflow in debug builds.

use super::{Lesson, LessonId, Section};
use crate::config::RunConfig;
use crate::console::Console;
use crate::errors::LessonError;
use crate::numeric::{float_text, type_name_of};
use crate::say;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

const SECTIONS: &[Section] = &[
    Section {
        id: "integers",
        title: "Integer arithmetic",
        note: "Integer literals default to i32. `/` on integers truncates toward \
               zero and `%` gives the remainder with the sign of the dividend.",
    },
    Section {
        id: "limits",
        title: "Integer limits and overflow",
        note: "i32::MIN and i32::MAX bound the type. wrapping_add wraps past MAX \
               around to MIN; checked_add returns None instead.",
    },
    Section {
        id: "floats",
        title: "f64 and f32",
        note: "f64 is double precision and the default for fractional literals. \
               f32 is single precision and needs an annotation or suffix.",
    },
    Section {
        id: "decimal",
        title: "Decimal",
        note: "Decimal keeps 28 fractional base-10 digits exactly. Its range is \
               far smaller than f64 but 1/3 comes out as exactly 28 threes.",
    },
    Section {
        id: "casts",
        title: "Casting",
        note: "`as` converts between numeric types. Float to integer casts drop \
               the fractional part.",
    },
];

pub struct Numbers;

impl Lesson for Numbers {
    fn id(&self) -> LessonId {
        LessonId::Numbers
    }

    fn title(&self) -> &'static str {
        "Numbers"
    }

    fn sections(&self) -> &'static [Section] {
        SECTIONS
    }

    fn run(&self, console: &mut Console, _config: &RunConfig) -> Result<(), LessonError> {
        console.section("integers");
        console.line("Numbers in Rust")?;

        let a = 20;
        let b = 7;
        let mut c = a + b;
        say!(console, "{}", c)?;

        c = 8;
        let d = (a + b) / c;
        say!(console, "{}", d)?;

        let quotient = (a + b) / c;
        let remainder = (a + b) % c;
        say!(console, "quotient: {}", quotient)?;
        say!(console, "remainder: {}", remainder)?;

        let num1 = 10;
        let num2 = 5;
        let mut result = num1 / num2;
        say!(console, "The result of {} divided by {} is {}", num1, num2, result)?;

        result = num1 % num2;
        say!(console, "The remainder of {} divided by {} is {}", num1, num2, result)?;

        let negative = -(a + b);
        say!(
            console,
            "Truncation is toward zero: {} / {} is {}, remainder {}",
            negative,
            c,
            negative / c,
            negative % c
        )?;

        console.section("limits");
        let max = i32::MAX;
        let min = i32::MIN;
        say!(console, "The range of integers is {} to {}", min, max)?;

        let test = max.wrapping_add(3);
        tracing::debug!(max, test, "wrapped past i32::MAX");
        say!(console, "An example of overflow: the output is {}", test)?;
        say!(console, "Checked addition past the limit gives {:?}", max.checked_add(3))?;

        console.section("floats");
        let max_double = f64::MAX;
        let min_double = f64::MIN;
        say!(
            console,
            "The range of f64 is {} to {}",
            float_text(min_double),
            float_text(max_double)
        )?;

        let max_float = f32::MAX;
        let min_float = f32::MIN;
        say!(
            console,
            "The range of f32 is {} to {}",
            float_text(min_float),
            float_text(max_float)
        )?;

        let float_value: f32 = 10.5;
        console.line(float_text(float_value))?;
        console.line(type_name_of(&float_value))?;

        console.section("decimal");
        let max_decimal = Decimal::MAX;
        let min_decimal = Decimal::MIN;
        say!(console, "The range of Decimal is {} to {}", min_decimal, max_decimal)?;

        let value1 = Decimal::new(10, 1);
        let value2 = Decimal::new(30, 1);
        say!(console, "{}", value1 / value2)?;

        let value3 = Decimal::new(100, 1).to_f64().unwrap_or_default();
        say!(console, "{} as {}", float_text(value3), type_name_of(&value3))?;

        console.section("casts");
        let int_value1 = 10.3_f64 as i32;
        let int_value2 = 5.2_f64 as i32;
        say!(console, "{}", int_value1)?;
        say!(console, "{}", int_value2)?;
        Ok(())
    }
}
