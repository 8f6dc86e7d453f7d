//! Core functionality: geometry and logging utilities

// Macros first so every later module can use them
#[macro_use]
pub(crate) mod utils;
pub mod geometry;
