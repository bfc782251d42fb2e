//! Core domain types for the guessing game
//!
//! Everything here is pure and independent of terminal I/O: the secret range,
//! guess evaluation, and the number sources that draw secrets.

mod evaluation;
mod range;
mod source;

pub use evaluation::{Evaluation, evaluate};
pub use range::{RangeError, SecretRange};
pub use source::{FixedSequence, NumberSource, SeededSource, ThreadRngSource};
