//! Display functions for session and command results

use super::formatters::create_progress_bar;
use crate::commands::{SimulationStatistics, SolveResult};
use crate::core::Evaluation;
use crate::session::SessionStats;
use colored::Colorize;
use std::io::{self, Write};

/// Write the session statistics shown from the menu
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn write_session_stats<W: Write>(writer: &mut W, stats: &SessionStats) -> io::Result<()> {
    writeln!(writer, "\n{}", "─".repeat(40).cyan())?;
    writeln!(writer, " {}", "SESSION STATISTICS".bright_cyan().bold())?;
    writeln!(writer, "{}", "─".repeat(40).cyan())?;

    writeln!(writer, "  Games played:  {}", stats.games_played)?;
    writeln!(writer, "  Games won:     {}", stats.games_won)?;
    writeln!(writer, "  Games quit:    {}", stats.games_quit)?;

    let Some(win_rate) = stats.win_rate() else {
        writeln!(writer, "\n  No games yet. Pick 'play game' to start one.")?;
        return Ok(());
    };
    writeln!(writer, "  Win rate:      {:.1}%", win_rate * 100.0)?;

    if let Some(average) = stats.average_guesses() {
        writeln!(
            writer,
            "  Average:       {} guesses",
            format!("{average:.2}").bright_yellow().bold()
        )?;
    }
    if let Some(best) = stats.best_game {
        writeln!(writer, "  Best game:     {}", best.to_string().green())?;
    }

    let distribution = stats.sorted_distribution();
    if !distribution.is_empty() {
        writeln!(writer, "\n  {}", "Guess distribution".bright_cyan().bold())?;
        let most = distribution.iter().map(|&(_, count)| count).max().unwrap_or(1);
        for (guesses, count) in distribution {
            let bar = create_progress_bar(count as f64, most as f64, 20);
            writeln!(writer, "  {guesses:3}: {} {count}", bar.green())?;
        }
    }

    Ok(())
}

/// Print the steps the bisection player took to find a secret
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} in {}",
        result.secret.to_string().bright_yellow().bold(),
        result.range
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let feedback = match step.evaluation {
            Evaluation::TooLow => "too low".yellow(),
            Evaluation::TooHigh => "too high".magenta(),
            Evaluation::Correct => "correct".green().bold(),
        };
        println!("\nTurn {}: {} {}", i + 1, step.guess, feedback);

        if verbose {
            println!(
                "  Candidates: {} in [{}, {}]",
                step.candidates_before(),
                step.low,
                step.high
            );
        }
    }

    println!();
    if result.success() {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the aggregate result of a simulation
pub fn print_simulation_result(stats: &SimulationStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Range:            {}", stats.range);
    println!("   Secrets tested:   {}", stats.total_secrets);
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", stats.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", stats.max_guesses).yellow()
    );
    println!(
        "   Theoretical max:  {}",
        stats.range.worst_case_guesses()
    );
    println!("   Time taken:       {:.2}s", stats.duration.as_secs_f64());

    if stats.total_secrets == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (guesses, count) in stats.sorted_distribution() {
        let pct = (count as f64 / stats.total_secrets as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {guesses:2}: {bar} {count:8} ({pct:5.1}%)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameOutcome;

    fn render(stats: &SessionStats) -> String {
        let mut out = Vec::new();
        write_session_stats(&mut out, stats).unwrap();
        String::from_utf8_lossy(&out).into_owned()
    }

    #[test]
    fn empty_stats_invite_a_game() {
        let out = render(&SessionStats::default());
        assert!(out.contains("Games played:  0"));
        assert!(out.contains("No games yet"));
        assert!(!out.contains("Win rate"));
    }

    #[test]
    fn stats_show_rates_and_distribution() {
        let mut stats = SessionStats::default();
        stats.record(GameOutcome::Won { guesses: 3 });
        stats.record(GameOutcome::Quit { guesses: 1 });

        let out = render(&stats);
        assert!(out.contains("Win rate:      50.0%"));
        assert!(out.contains("Guess distribution"));
        assert!(out.contains("  3: "));
    }
}
