//! Interactive play mode
//!
//! Builds the main menu ("play game", "statistics", "exit") around a
//! `Session` and runs it until the guesser leaves.

use crate::game::{Game, GameOutcome};
use crate::menu::{Menu, MenuAction};
use crate::output::write_session_stats;
use crate::session::Session;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::info;

/// Intro text shown above the options on every render
pub const MENU_INTRO: &str = "Please choose from the following...";

/// Build the main menu over the given streams
pub fn build_menu<'a, W, R>(writer: W, reader: R) -> Menu<'a, Session, W, R>
where
    W: Write + 'a,
    R: BufRead + 'a,
{
    Menu::new(MENU_INTRO, writer, reader)
        .option("play game", play_round::<W, R>)
        .option("statistics", show_statistics::<W, R>)
        .option("exit", |_: &mut Session, writer: &mut W, _: &mut R| {
            writeln!(writer, "\n👋 Thanks for playing!")?;
            Ok(MenuAction::Exit)
        })
}

/// Greet the guesser and run the main menu until they exit
///
/// # Errors
///
/// Returns an I/O error if the streams fail.
pub fn run_play<W: Write, R: BufRead>(session: &mut Session, mut writer: W, reader: R) -> io::Result<()> {
    let range = session.range();
    writeln!(
        writer,
        "{}",
        "Welcome to the guessing game!".bright_cyan().bold()
    )?;
    writeln!(
        writer,
        "I'm thinking of a number between {} and {}. Enter 'quit' at any prompt to leave.",
        range.min(),
        range.max()
    )?;

    let mut menu = build_menu(writer, reader);
    menu.run(session)?;

    let stats = session.stats();
    info!(
        games = stats.games_played,
        won = stats.games_won,
        "session finished"
    );
    Ok(())
}

fn play_round<W: Write, R: BufRead>(
    session: &mut Session,
    writer: &mut W,
    reader: &mut R,
) -> io::Result<MenuAction> {
    let secret = session.next_secret();
    writeln!(writer)?;

    let outcome = Game::new(secret, &mut *writer, &mut *reader).run()?;
    session.record(outcome);

    match outcome {
        GameOutcome::Won { guesses } => {
            let noun = if guesses == 1 { "guess" } else { "guesses" };
            writeln!(
                writer,
                "{} Solved in {} {noun}.",
                "You won!".green().bold(),
                guesses.to_string().bright_cyan().bold()
            )?;
        }
        GameOutcome::Quit { .. } => {
            writeln!(writer, "You quit. The secret was {}.", secret.to_string().yellow())?;
        }
    }
    writeln!(writer, "Play again?")?;

    Ok(MenuAction::Continue)
}

fn show_statistics<W: Write, R: BufRead>(
    session: &mut Session,
    writer: &mut W,
    _reader: &mut R,
) -> io::Result<MenuAction> {
    write_session_stats(writer, session.stats())?;
    Ok(MenuAction::Continue)
}
