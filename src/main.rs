//! Guessing Game - CLI
//!
//! Interactive number guessing game, plus a bisection player that can solve
//! a given secret or simulate every secret in the range.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use guessing_game::{
    commands::{run_play, run_simulation, solve_secret},
    core::{NumberSource, SecretRange, SeededSource, ThreadRngSource},
    logging,
    output::{print_simulation_result, print_solve_result},
    session::Session,
};
use std::io;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "guessing_game",
    about = "Guess the secret number, or watch a bisection player do it",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Smallest possible secret
    #[arg(long, global = true, default_value_t = SecretRange::DEFAULT_MIN)]
    min: u32,

    /// Largest possible secret
    #[arg(long, global = true, default_value_t = SecretRange::DEFAULT_MAX)]
    max: u32,

    /// Seed for reproducible secrets (random if omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (default)
    Play,

    /// Watch the bisection player find a specific secret
    Solve {
        /// The secret to find
        secret: u32,

        /// Show the candidate interval before each guess
        #[arg(short, long)]
        verbose: bool,
    },

    /// Run the bisection player against every secret in the range
    Simulate {
        /// Only simulate the first N secrets of the range
        #[arg(short, long)]
        limit: Option<u64>,

        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let range = SecretRange::new(cli.min, cli.max).context("invalid --min/--max")?;
    debug!(%range, seed = ?cli.seed, "configured");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(range, cli.seed),
        Commands::Solve { secret, verbose } => run_solve_command(secret, verbose, range),
        Commands::Simulate { limit, quiet } => {
            run_simulate_command(range, limit, quiet);
            Ok(())
        }
    }
}

fn run_play_command(range: SecretRange, seed: Option<u64>) -> Result<()> {
    let source: Box<dyn NumberSource> = match seed {
        Some(seed) => Box::new(SeededSource::new(seed)),
        None => Box::new(ThreadRngSource::new()),
    };
    let mut session = Session::new(source, range);

    run_play(&mut session, io::stdout().lock(), io::stdin().lock()).context("terminal I/O failed")
}

fn run_solve_command(secret: u32, verbose: bool, range: SecretRange) -> Result<()> {
    let result = solve_secret(secret, range)?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_simulate_command(range: SecretRange, limit: Option<u64>, quiet: bool) {
    let secrets = limit.map_or(range.size(), |limit| limit.min(range.size()));
    println!("🎯 Simulating {secrets} secrets in {range}...");

    let stats = run_simulation(range, limit, !quiet);
    print_simulation_result(&stats);
}
