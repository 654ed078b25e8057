//! Command implementations

pub mod simple;

pub use simple::{MenuChoice, play, run_simple};
