//! Fixed-size sequences with checked positional access
//!
//! [`FixedSeq`] is created with a length that never changes. Reads and writes
//! by position are checked, and a position outside `0..len` produces
//! [`LessonError::IndexOutOfRange`] naming the sequence. Growing collections
//! use a plain `Vec` instead.

use crate::errors::LessonError;
use std::slice;

/// A named, fixed-length sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedSeq<T> {
    name: &'static str,
    slots: Box<[T]>,
}

impl<T: Default + Clone> FixedSeq<T> {
    /// Sequence of `len` default values
    pub fn with_len(name: &'static str, len: usize) -> Self {
        FixedSeq {
            name,
            slots: vec![T::default(); len].into_boxed_slice(),
        }
    }
}

impl<T> FixedSeq<T> {
    /// Sequence holding exactly `values`
    pub fn from_values(name: &'static str, values: impl Into<Vec<T>>) -> Self {
        FixedSeq {
            name,
            slots: values.into().into_boxed_slice(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&T, LessonError> {
        self.slots.get(index).ok_or_else(|| self.out_of_range(index))
    }

    pub fn set(&mut self, index: usize, value: T) -> Result<(), LessonError> {
        let err = self.out_of_range(index);
        let slot = self.slots.get_mut(index).ok_or(err)?;
        *slot = value;
        Ok(())
    }

    /// Element `n` places from the end; `from_end(1)` is the last element
    pub fn from_end(&self, n: usize) -> Result<&T, LessonError> {
        let index = self.len().checked_sub(n).ok_or_else(|| self.out_of_range(n))?;
        self.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.slots.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    fn out_of_range(&self, index: usize) -> LessonError {
        LessonError::IndexOutOfRange {
            sequence: self.name,
            index,
            len: self.slots.len(),
        }
    }
}

impl<'a, T> IntoIterator for &'a FixedSeq<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cities() -> FixedSeq<&'static str> {
        FixedSeq::from_values("cities", ["Toronto", "Mississauga", "Brampton", "Vaughan"])
    }

    #[test]
    fn positional_writes_fill_default_slots() {
        let mut names: FixedSeq<String> = FixedSeq::with_len("names", 4);
        assert_eq!(names.get(3).unwrap(), "");

        names.set(2, "Sam".to_string()).unwrap();
        assert_eq!(names.get(2).unwrap(), "Sam");
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn access_past_the_end_fails() {
        let mut names: FixedSeq<String> = FixedSeq::with_len("names", 4);
        let err = names.set(4, "Taylor".to_string()).unwrap_err();
        assert!(matches!(
            err,
            LessonError::IndexOutOfRange {
                sequence: "names",
                index: 4,
                len: 4
            }
        ));
        assert!(names.get(10).is_err());
    }

    #[test]
    fn from_end_counts_back_from_the_last_element() {
        let cities = cities();
        assert_eq!(*cities.from_end(1).unwrap(), "Vaughan");
        assert_eq!(*cities.from_end(4).unwrap(), "Toronto");
        assert!(cities.from_end(0).is_err());
        assert!(cities.from_end(5).is_err());
    }
}
