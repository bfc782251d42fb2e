//! Simulate every secret - comprehensive solver evaluation
//!
//! Runs the bisection player against every secret in the range (or a prefix
//! of it) and aggregates guess counts.

use crate::core::SecretRange;
use crate::solver::count_guesses;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Statistics from simulating many secrets
#[derive(Debug)]
pub struct SimulationStatistics {
    pub range: SecretRange,
    pub total_secrets: u64,
    pub total_guesses: u64,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count -> number of secrets solved in that many guesses
    pub distribution: FxHashMap<usize, u64>,
    pub duration: Duration,
}

impl SimulationStatistics {
    /// Distribution entries sorted by guess count
    #[must_use]
    pub fn sorted_distribution(&self) -> Vec<(usize, u64)> {
        let mut entries: Vec<(usize, u64)> = self
            .distribution
            .iter()
            .map(|(&guesses, &count)| (guesses, count))
            .collect();
        entries.sort_unstable();
        entries
    }
}

/// Run the bisection player on the first `limit` secrets of `range` (all if `None`)
///
/// Secrets are solved in parallel. A progress bar is drawn when
/// `show_progress` is set.
#[must_use]
pub fn run_simulation(
    range: SecretRange,
    limit: Option<u64>,
    show_progress: bool,
) -> SimulationStatistics {
    let total_secrets = limit.map_or(range.size(), |limit| limit.min(range.size()));
    // total_secrets <= range.size(), so the last secret stays within u32
    let last = (u64::from(range.min()) + total_secrets).saturating_sub(1) as u32;

    let pb = if show_progress {
        let pb = ProgressBar::new(total_secrets);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let distribution = if total_secrets == 0 {
        FxHashMap::default()
    } else {
        (range.min()..=last)
            .into_par_iter()
            .filter_map(|secret| {
                let guesses = count_guesses(secret, range);
                pb.inc(1);
                guesses
            })
            .fold(FxHashMap::default, |mut counts: FxHashMap<usize, u64>, guesses| {
                *counts.entry(guesses).or_insert(0) += 1;
                counts
            })
            .reduce(FxHashMap::default, |mut left, right| {
                for (guesses, count) in right {
                    *left.entry(guesses).or_insert(0) += count;
                }
                left
            })
    };
    let duration = start.elapsed();
    pb.finish_with_message("Complete!");

    let total_guesses: u64 = distribution
        .iter()
        .map(|(&guesses, &count)| guesses as u64 * count)
        .sum();
    let solved: u64 = distribution.values().sum();
    let min_guesses = distribution.keys().copied().min().unwrap_or(0);
    let max_guesses = distribution.keys().copied().max().unwrap_or(0);
    let average_guesses = if solved == 0 {
        0.0
    } else {
        total_guesses as f64 / solved as f64
    };

    info!(
        total_secrets,
        average_guesses,
        max_guesses,
        elapsed_ms = duration.as_millis() as u64,
        "simulation finished"
    );

    SimulationStatistics {
        range,
        total_secrets,
        total_guesses,
        average_guesses,
        min_guesses,
        max_guesses,
        distribution,
        duration,
    }
}
