//! Terminal output formatting
//!
//! Display utilities for game feedback, session statistics and command results.

pub mod display;
pub mod formatters;

pub use display::{print_simulation_result, print_solve_result, write_session_stats};
