//! A single round of the guessing game
//!
//! A `Game` knows one secret number and exposes `play`, which prompts the
//! guesser in a loop until they guess correctly or ask to quit.

use crate::console::{is_quit_token, read_input};
use crate::core::{Evaluation, evaluate};
use crate::output::formatters::{feedback_message, invalid_input_message};
use std::fmt;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// Errors reported by a game turn
#[derive(Debug)]
pub enum GameError {
    /// Input was neither a whole number nor a quit token
    InvalidInput(String),
    /// The guesser asked to quit, or input ended
    Quit,
    /// Reading or writing the terminal failed
    Io(io::Error),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(input) => write!(f, "Invalid input '{input}'"),
            Self::Quit => write!(f, "Guesser quit the game"),
            Self::Io(err) => write!(f, "Terminal I/O failed: {err}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for GameError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Won { guesses: u32 },
    Quit { guesses: u32 },
}

/// One game: a fixed secret plus the streams used to talk to the guesser
pub struct Game<W: Write, R: BufRead> {
    secret: u32,
    guesses: u32,
    writer: W,
    reader: R,
}

impl<W: Write, R: BufRead> Game<W, R> {
    /// Create a new game with the given secret and I/O streams
    pub const fn new(secret: u32, writer: W, reader: R) -> Self {
        Self {
            secret,
            guesses: 0,
            writer,
            reader,
        }
    }

    /// Number of whole-number guesses evaluated so far
    #[inline]
    #[must_use]
    pub const fn guesses(&self) -> u32 {
        self.guesses
    }

    /// Compare a guess with the secret
    #[inline]
    #[must_use]
    pub fn evaluate(&self, guess: u32) -> Evaluation {
        evaluate(guess, self.secret)
    }

    /// Prompt for, read and evaluate a single guess
    ///
    /// Writes the feedback line for valid guesses. Invalid input leaves the
    /// guess count untouched.
    ///
    /// # Errors
    ///
    /// - `GameError::Quit` on a quit token or end of input
    /// - `GameError::InvalidInput` if the line is not a whole number
    /// - `GameError::Io` if the streams fail
    pub fn turn(&mut self) -> Result<Evaluation, GameError> {
        writeln!(self.writer, "Guess a number...")?;

        let Some(input) = read_input(&mut self.writer, &mut self.reader)? else {
            debug!("input closed during game");
            return Err(GameError::Quit);
        };

        if is_quit_token(&input) {
            return Err(GameError::Quit);
        }

        let Ok(guess) = input.parse::<u32>() else {
            return Err(GameError::InvalidInput(input));
        };

        self.guesses += 1;
        let evaluation = self.evaluate(guess);
        debug!(guess, %evaluation, turn = self.guesses, "evaluated guess");
        writeln!(self.writer, "{}", feedback_message(guess, evaluation))?;

        Ok(evaluation)
    }

    /// Play until the guesser is correct
    ///
    /// Invalid input is reported and the guesser is prompted again.
    /// Returns the number of guesses it took.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Quit` if the guesser quits (no further reads are
    /// made), or `GameError::Io` if the streams fail.
    pub fn play(&mut self) -> Result<u32, GameError> {
        loop {
            match self.turn() {
                Ok(Evaluation::Correct) => {
                    info!(guesses = self.guesses, "game won");
                    return Ok(self.guesses);
                }
                Ok(Evaluation::TooLow | Evaluation::TooHigh) => writeln!(self.writer)?,
                Err(GameError::InvalidInput(input)) => {
                    debug!(%input, "rejected guess");
                    writeln!(self.writer, "{}\n", invalid_input_message(&input))?;
                }
                Err(GameError::Quit) => {
                    info!(guesses = self.guesses, "game quit");
                    writeln!(self.writer, "Quitting...")?;
                    return Err(GameError::Quit);
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Play and classify the result
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the streams fail.
    pub fn run(&mut self) -> io::Result<GameOutcome> {
        match self.play() {
            Ok(guesses) => Ok(GameOutcome::Won { guesses }),
            Err(GameError::Io(err)) => Err(err),
            Err(GameError::Quit | GameError::InvalidInput(_)) => Ok(GameOutcome::Quit {
                guesses: self.guesses,
            }),
        }
    }
}
