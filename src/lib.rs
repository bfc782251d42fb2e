//! Guessing Game
//!
//! An interactive number guessing game with a text menu, plus a bisection
//! player that can solve or simulate games.
//!
//! # Quick Start
//!
//! ```rust
//! use guessing_game::core::{FixedSequence, SecretRange};
//! use guessing_game::game::Game;
//! use guessing_game::session::Session;
//! use std::io::Cursor;
//!
//! let mut session = Session::new(Box::new(FixedSequence::new(vec![7])), SecretRange::default());
//! let secret = session.next_secret();
//!
//! let mut output = Vec::new();
//! let mut game = Game::new(secret, &mut output, Cursor::new("3\n7\n"));
//! assert_eq!(game.play().unwrap(), 2);
//! ```

// Core domain types
pub mod core;

// Terminal I/O helpers
pub mod console;

// A single game round
pub mod game;

// Numbered text menu
pub mod menu;

// Cross-game state
pub mod session;

// Bisection player
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Diagnostic tracing setup
pub mod logging;
