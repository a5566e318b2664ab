//! Shared terminal utilities.
//!
//! Frame drawing, raw mode management, and ANSI helpers.

mod frame;
mod output;
mod raw_mode;

pub use frame::*;
pub use output::*;
pub use raw_mode::*;
