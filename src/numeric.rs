//! Float rendering for lesson output
//!
//! Rust's `Display` for floats never switches to exponent notation, so
//! `f64::MAX` prints as a 309 digit integer. [`float_text`] keeps the shortest
//! round-trip digits but switches to `E` notation for very large or very small
//! magnitudes, with an explicit exponent sign and at least two exponent digits.

use std::fmt::{Display, LowerExp};

const SCIENTIFIC_ABOVE: f64 = 1e15;
const SCIENTIFIC_BELOW: f64 = 1e-5;

/// Floating point types [`float_text`] accepts
pub trait Float: Copy + Display + LowerExp {
    fn magnitude(self) -> f64;
    fn is_finite(self) -> bool;
}

impl Float for f64 {
    fn magnitude(self) -> f64 {
        self.abs()
    }

    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
}

impl Float for f32 {
    fn magnitude(self) -> f64 {
        f64::from(self.abs())
    }

    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }
}

/// Shortest round-trip text for `value`
pub fn float_text<F: Float>(value: F) -> String {
    let magnitude = value.magnitude();
    let scientific = value.is_finite()
        && magnitude != 0.0
        && !(SCIENTIFIC_BELOW..SCIENTIFIC_ABOVE).contains(&magnitude);
    if !scientific {
        return value.to_string();
    }

    let exp = format!("{:e}", value);
    match exp.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}E{}{:0>2}", mantissa, sign, digits)
        }
        None => exp,
    }
}

/// Name of a value's type as the compiler spells it
pub fn type_name_of<T>(_: &T) -> &'static str {
    std::any::type_name::<T>()
}
