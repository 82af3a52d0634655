//! Error types for lesson runs
//!
//! This module defines [`LessonError`], which covers everything that can stop a
//! lesson part way through. Out-of-range access on a
//! [`FixedSeq`](crate::sequence::FixedSeq) is the only failure a lesson can
//! produce on its own; the other variant comes from the output writer.
//!
//! All lesson errors are fatal: the run stops and the binary reports the error.

use std::io;
use thiserror::Error;

/// Errors that can stop a lesson run
#[derive(Debug, Error)]
pub enum LessonError {
    /// Positional access outside a fixed-size sequence
    #[error("index {index} out of bounds for `{sequence}` of length {len}")]
    IndexOutOfRange {
        sequence: &'static str,
        index: usize,
        len: usize,
    },

    /// The console could not write a line to its sink
    #[error("failed to write lesson output")]
    Output(#[from] io::Error),
}

impl LessonError {
    /// Short label used by the status bar
    pub fn kind(&self) -> &'static str {
        match self {
            LessonError::IndexOutOfRange { .. } => "index out of range",
            LessonError::Output(_) => "output error",
        }
    }
}
