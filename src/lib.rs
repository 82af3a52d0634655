//! # Introduction
//!
//! Primer is a set of introductory console lessons. Each lesson is a short,
//! linear program that prints what it does: strings, numbers, conditions,
//! loops and collections. Lessons write through a [`console::Console`] that
//! records every line, so the same run can be printed to stdout or stepped
//! through line by line in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Catalog → Lesson::run → Console → stdout
//!                            └────→ Transcript → Browser
//! ```
//!
//! 1. [`lessons`] — the six lessons and the [`lessons::Catalog`] that owns them.
//! 2. [`console`] — line recorder with an optional live sink, plus
//!    [`console::Transcript`] for replaying a finished run.
//! 3. [`sequence`] — [`sequence::FixedSeq`], the fixed-size sequence whose
//!    out-of-range access stops a lesson.
//! 4. [`numeric`] — float rendering shared by the number lessons.
//! 5. [`ui`] — ratatui-based browser; not part of the stable library API.

pub mod config;
pub mod console;
pub mod errors;
pub mod lessons;
pub mod numeric;
pub mod sequence;
pub mod ui;
