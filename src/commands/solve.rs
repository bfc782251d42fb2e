//! Secret solving command
//!
//! Lets the bisection player solve a given secret and records each step.

use crate::core::{Evaluation, SecretRange, evaluate};
use crate::solver::Bisector;
use std::fmt;

/// Result of solving a secret
pub struct SolveResult {
    pub secret: u32,
    pub range: SecretRange,
    pub steps: Vec<SolveStep>,
}

impl SolveResult {
    #[must_use]
    pub fn success(&self) -> bool {
        self.steps.last().is_some_and(|step| step.evaluation.is_correct())
    }
}

/// A single guess in the solution
pub struct SolveStep {
    pub guess: u32,
    pub evaluation: Evaluation,
    /// Candidate interval before this guess
    pub low: u32,
    pub high: u32,
}

impl SolveStep {
    #[must_use]
    pub const fn candidates_before(&self) -> u64 {
        self.high as u64 - self.low as u64 + 1
    }
}

/// Error type for solving
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    OutOfRange { secret: u32, range: SecretRange },
    Exhausted { secret: u32 },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { secret, range } => {
                write!(f, "Secret {secret} is outside the range {range}")
            }
            Self::Exhausted { secret } => {
                write!(f, "No candidates remain while solving {secret}")
            }
        }
    }
}

impl std::error::Error for SolveError {}

/// Solve `secret` with a bisection player over `range`
///
/// # Errors
///
/// Returns an error if:
/// - The secret is outside the range
/// - The player runs out of candidates (not expected for in-range secrets)
pub fn solve_secret(secret: u32, range: SecretRange) -> Result<SolveResult, SolveError> {
    if !range.contains(secret) {
        return Err(SolveError::OutOfRange { secret, range });
    }

    let mut player = Bisector::new(range);
    let mut steps = Vec::new();

    while let (Some(guess), Some((low, high))) = (player.next_guess(), player.interval()) {
        let evaluation = evaluate(guess, secret);
        steps.push(SolveStep {
            guess,
            evaluation,
            low,
            high,
        });

        if evaluation.is_correct() {
            return Ok(SolveResult {
                secret,
                range,
                steps,
            });
        }
        player.observe(guess, evaluation);
    }

    Err(SolveError::Exhausted { secret })
}
