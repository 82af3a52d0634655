//! TUI pane rendering modules
//!
//! - [`lesson`]: section list with the current section marked and its note
//! - [`output`]: lesson output up to the current step
//! - [`status`]: status bar with keybindings and playback state
//!
//! Each pane module exports a primary `render_*` function that takes the
//! frame, its area, the data to show and, for scrollable panes, a mutable
//! scroll offset that the renderer clamps.

pub mod lesson;
pub mod output;
pub mod status;

pub use lesson::render_lesson_pane;
pub use output::render_output_pane;
pub use status::{render_status_bar, PlaybackState};
