//! State that outlives a single game
//!
//! The session owns the number source and the secret range, and keeps
//! statistics across every game played from the menu.

use crate::core::{NumberSource, SecretRange};
use crate::game::GameOutcome;
use rustc_hash::FxHashMap;
use tracing::debug;

/// Counters across all games of a session
#[derive(Debug, Default, Clone)]
pub struct SessionStats {
    pub games_played: usize,
    pub games_won: usize,
    pub games_quit: usize,
    pub total_winning_guesses: u64,
    pub best_game: Option<u32>,
    /// Winning guess count -> number of games won with it
    pub distribution: FxHashMap<u32, usize>,
}

impl SessionStats {
    pub fn record(&mut self, outcome: GameOutcome) {
        self.games_played += 1;
        match outcome {
            GameOutcome::Won { guesses } => {
                self.games_won += 1;
                self.total_winning_guesses += u64::from(guesses);
                self.best_game = Some(self.best_game.map_or(guesses, |best| best.min(guesses)));
                *self.distribution.entry(guesses).or_insert(0) += 1;
            }
            GameOutcome::Quit { .. } => self.games_quit += 1,
        }
    }

    /// Fraction of played games that were won
    #[must_use]
    pub fn win_rate(&self) -> Option<f64> {
        (self.games_played > 0).then(|| self.games_won as f64 / self.games_played as f64)
    }

    /// Mean guesses over won games
    #[must_use]
    pub fn average_guesses(&self) -> Option<f64> {
        (self.games_won > 0).then(|| self.total_winning_guesses as f64 / self.games_won as f64)
    }

    /// Distribution entries sorted by guess count
    #[must_use]
    pub fn sorted_distribution(&self) -> Vec<(u32, usize)> {
        let mut entries: Vec<(u32, usize)> = self
            .distribution
            .iter()
            .map(|(&guesses, &count)| (guesses, count))
            .collect();
        entries.sort_unstable();
        entries
    }
}

/// Menu-level state shared by every option handler
pub struct Session {
    source: Box<dyn NumberSource>,
    range: SecretRange,
    stats: SessionStats,
}

impl Session {
    #[must_use]
    pub fn new(source: Box<dyn NumberSource>, range: SecretRange) -> Self {
        Self {
            source,
            range,
            stats: SessionStats::default(),
        }
    }

    /// Draw the secret for a new game
    pub fn next_secret(&mut self) -> u32 {
        let secret = self.source.next_secret(self.range);
        debug_assert!(self.range.contains(secret), "source produced out-of-range secret");
        debug!(range = %self.range, "drew new secret");
        secret
    }

    #[must_use]
    pub const fn range(&self) -> SecretRange {
        self.range
    }

    #[must_use]
    pub const fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn record(&mut self, outcome: GameOutcome) {
        self.stats.record(outcome);
    }
}
