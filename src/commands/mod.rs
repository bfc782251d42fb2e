//! Command implementations

pub mod play;
pub mod simulate;
pub mod solve;

pub use play::{build_menu, run_play};
pub use simulate::{SimulationStatistics, run_simulation};
pub use solve::{SolveError, SolveResult, SolveStep, solve_secret};
