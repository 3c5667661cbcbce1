//! Type system utilities and aliases.
//!
//! - [`aliases`]: Type aliases for single-threaded shared state.

pub mod aliases;

pub use aliases::*;
