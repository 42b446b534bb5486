// ============================================================================
// autorip-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with the makemkvcon CLI Tool
//
// This module encapsulates everything process-shaped: spawning makemkvcon
// with its stdout captured, streaming parsed output lines back to the
// caller, cooperative cancellation, and the three accumulator operations
// (list drives, scan drive, back up title) built on top of the stream.

pub mod accumulate;
mod find_exe;
mod makemkvcon;
mod process;

pub use find_exe::find_exe;
pub use makemkvcon::Makemkvcon;
pub use process::{CancelToken, LineStream};
