//! Automated guessing
//!
//! A bisecting player used by the `solve` and `simulate` commands.

mod bisect;

pub use bisect::{Bisector, count_guesses};
