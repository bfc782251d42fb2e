//! Line-oriented terminal I/O helpers
//!
//! Shared by the game and the menu. Generic over `Write`/`BufRead` so both
//! run against stdin/stdout in the binary and in-memory buffers in tests.

use std::io::{self, BufRead, Write};

/// Characters written before each read
pub const PROMPT: &str = "> ";

/// Inputs that ask to leave the current game or menu
pub const QUIT_TOKENS: [&str; 3] = ["quit", "q", "exit"];

/// Write the prompt marker and read one trimmed line
///
/// Returns `Ok(None)` once the reader is exhausted. Bytes that are not valid
/// UTF-8 are replaced with `U+FFFD` rather than failing the read.
///
/// # Errors
///
/// Returns any I/O error from writing the prompt or reading the line.
///
/// # Examples
/// ```
/// use guessing_game::console::read_input;
/// use std::io::Cursor;
///
/// let mut out = Vec::new();
/// let mut input = Cursor::new("  42 \n");
/// assert_eq!(read_input(&mut out, &mut input).unwrap(), Some("42".to_string()));
/// assert_eq!(read_input(&mut out, &mut input).unwrap(), None);
/// ```
pub fn read_input<W: Write, R: BufRead>(writer: &mut W, reader: &mut R) -> io::Result<Option<String>> {
    write!(writer, "{PROMPT}")?;
    writer.flush()?;

    let mut line = Vec::new();
    if reader.read_until(b'\n', &mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
}

/// Check whether `input` is one of the quit tokens (case-insensitive)
#[must_use]
pub fn is_quit_token(input: &str) -> bool {
    QUIT_TOKENS
        .iter()
        .any(|token| input.eq_ignore_ascii_case(token))
}
