//! Numbered text menu
//!
//! A `Menu` renders intro text followed by numbered options, reads the
//! guesser's choice and dispatches to the handler bound to that option.
//! Handlers receive a caller-supplied context plus the menu's own streams.

use crate::console::{is_quit_token, read_input};
use crate::output::formatters::invalid_choice_message;
use std::fmt;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// What the menu loop should do after a handler returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Continue,
    Exit,
}

/// Errors reported by a menu prompt
#[derive(Debug)]
pub enum MenuError {
    /// Input did not match any option
    InvalidSelection(String),
    Io(io::Error),
}

impl fmt::Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSelection(input) => write!(f, "Invalid selection '{input}'"),
            Self::Io(err) => write!(f, "Terminal I/O failed: {err}"),
        }
    }
}

impl std::error::Error for MenuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::InvalidSelection(_) => None,
        }
    }
}

impl From<io::Error> for MenuError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Callback bound to a menu option
pub type Handler<'a, C, W, R> = Box<dyn FnMut(&mut C, &mut W, &mut R) -> io::Result<MenuAction> + 'a>;

struct MenuOption<'a, C, W, R> {
    label: String,
    handler: Handler<'a, C, W, R>,
}

/// Text menu over a pair of streams
///
/// Options are displayed in registration order, numbered from 1.
pub struct Menu<'a, C, W: Write, R: BufRead> {
    intro: String,
    options: Vec<MenuOption<'a, C, W, R>>,
    writer: W,
    reader: R,
}

impl<'a, C, W: Write, R: BufRead> Menu<'a, C, W, R> {
    pub fn new(intro: impl Into<String>, writer: W, reader: R) -> Self {
        Self {
            intro: intro.into(),
            options: Vec::new(),
            writer,
            reader,
        }
    }

    /// Register an option; it is displayed after all earlier ones
    #[must_use]
    pub fn option<F>(mut self, label: impl Into<String>, handler: F) -> Self
    where
        F: FnMut(&mut C, &mut W, &mut R) -> io::Result<MenuAction> + 'a,
    {
        self.options.push(MenuOption {
            label: label.into(),
            handler: Box::new(handler),
        });
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Option labels in display order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|option| option.label.as_str())
    }

    #[must_use]
    pub const fn writer(&self) -> &W {
        &self.writer
    }

    /// Write the intro text and the numbered options
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the writer.
    pub fn render(&mut self) -> io::Result<()> {
        writeln!(self.writer, "\n{}", self.intro)?;
        for (index, option) in self.options.iter().enumerate() {
            writeln!(self.writer, "{}) {}", index + 1, option.label)?;
        }
        self.writer.flush()
    }

    /// Read a selection and dispatch to its handler
    ///
    /// A quit token or end of input selects `MenuAction::Exit` without
    /// calling any handler.
    ///
    /// # Errors
    ///
    /// Returns `MenuError::InvalidSelection` if the input is not the number
    /// of a registered option, in which case no handler runs.
    pub fn prompt(&mut self, ctx: &mut C) -> Result<MenuAction, MenuError> {
        let Some(input) = read_input(&mut self.writer, &mut self.reader)? else {
            debug!("input closed at menu");
            return Ok(MenuAction::Exit);
        };

        if is_quit_token(&input) {
            return Ok(MenuAction::Exit);
        }

        let option = input
            .parse::<usize>()
            .ok()
            .and_then(|choice| choice.checked_sub(1))
            .and_then(|index| self.options.get_mut(index));

        let Some(option) = option else {
            return Err(MenuError::InvalidSelection(input));
        };

        debug!(label = %option.label, "menu option selected");
        Ok((option.handler)(ctx, &mut self.writer, &mut self.reader)?)
    }

    /// Render and prompt until a handler asks to exit
    ///
    /// Invalid selections are reported and the menu is shown again.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the streams or a handler.
    pub fn run(&mut self, ctx: &mut C) -> io::Result<()> {
        loop {
            self.render()?;
            match self.prompt(ctx) {
                Ok(MenuAction::Continue) => {}
                Ok(MenuAction::Exit) => return Ok(()),
                Err(MenuError::InvalidSelection(input)) => {
                    debug!(%input, "invalid menu selection");
                    writeln!(self.writer, "{}", invalid_choice_message(&input, self.len()))?;
                }
                Err(MenuError::Io(err)) => return Err(err),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    type TestMenu<'a> = Menu<'a, Vec<&'static str>, Vec<u8>, Cursor<&'static str>>;

    fn menu_with_input(input: &'static str) -> TestMenu<'static> {
        Menu::new("Please choose from the following...", Vec::new(), Cursor::new(input))
            .option("first", |calls: &mut Vec<&'static str>, _, _| {
                calls.push("first");
                Ok(MenuAction::Continue)
            })
            .option("second", |calls: &mut Vec<&'static str>, _, _| {
                calls.push("second");
                Ok(MenuAction::Continue)
            })
            .option("exit", |calls: &mut Vec<&'static str>, _, _| {
                calls.push("exit");
                Ok(MenuAction::Exit)
            })
    }

    fn output(menu: &TestMenu<'_>) -> String {
        String::from_utf8_lossy(menu.writer()).into_owned()
    }

    #[test]
    fn render_prints_intro_then_numbered_options() {
        let mut menu = menu_with_input("");
        menu.render().unwrap();

        let out = output(&menu);
        let lines: Vec<&str> = out.lines().filter(|line| !line.is_empty()).collect();
        assert_eq!(
            lines,
            vec![
                "Please choose from the following...",
                "1) first",
                "2) second",
                "3) exit"
            ]
        );
    }

    #[test]
    fn labels_keep_registration_order() {
        let menu = menu_with_input("");
        assert_eq!(menu.labels().collect::<Vec<_>>(), vec!["first", "second", "exit"]);
        assert_eq!(menu.len(), 3);
        assert!(!menu.is_empty());
    }

    #[test]
    fn prompt_invokes_exactly_the_selected_handler() {
        let mut menu = menu_with_input("2\n");
        let mut calls = Vec::new();

        assert_eq!(menu.prompt(&mut calls).unwrap(), MenuAction::Continue);
        assert_eq!(calls, vec!["second"]);
    }

    #[test]
    fn prompt_returns_handler_action() {
        let mut menu = menu_with_input("3\n");
        let mut calls = Vec::new();

        assert_eq!(menu.prompt(&mut calls).unwrap(), MenuAction::Exit);
        assert_eq!(calls, vec!["exit"]);
    }

    #[test]
    fn prompt_rejects_out_of_range_selection() {
        for input in ["0\n", "4\n", "-1\n", "not a number\n"] {
            let mut menu = menu_with_input(input);
            let mut calls = Vec::new();

            let result = menu.prompt(&mut calls);
            assert!(
                matches!(result, Err(MenuError::InvalidSelection(_))),
                "input {input:?} should be rejected"
            );
            assert!(calls.is_empty(), "no handler should run for {input:?}");
        }
    }

    #[test]
    fn prompt_exits_on_quit_token_or_end_of_input() {
        let mut calls = Vec::new();
        assert_eq!(menu_with_input("quit\n").prompt(&mut calls).unwrap(), MenuAction::Exit);
        assert_eq!(menu_with_input("").prompt(&mut calls).unwrap(), MenuAction::Exit);
        assert!(calls.is_empty());
    }

    #[test]
    fn run_reports_invalid_selection_and_renders_again() {
        let mut menu = menu_with_input("7\n1\n3\n");
        let mut calls = Vec::new();
        menu.run(&mut calls).unwrap();

        assert_eq!(calls, vec!["first", "exit"]);
        let out = output(&menu);
        assert!(out.contains("Invalid choice!"));
        assert_eq!(out.matches("Please choose from the following...").count(), 3);
    }

    #[test]
    fn non_utf8_selection_is_invalid_and_rerenders() {
        let mut menu: Menu<'_, Vec<&'static str>, Vec<u8>, Cursor<Vec<u8>>> =
            Menu::new("intro", Vec::new(), Cursor::new(b"\xff\n1\n".to_vec())).option(
                "exit",
                |calls: &mut Vec<&'static str>, _, _| {
                    calls.push("exit");
                    Ok(MenuAction::Exit)
                },
            );
        let mut calls = Vec::new();

        assert!(matches!(menu.prompt(&mut calls), Err(MenuError::InvalidSelection(_))));
        assert!(calls.is_empty());

        menu.run(&mut calls).unwrap();
        assert_eq!(calls, vec!["exit"]);
    }

    #[test]
    fn run_stops_when_input_ends() {
        let mut menu = menu_with_input("1\n1\n");
        let mut calls = Vec::new();
        menu.run(&mut calls).unwrap();
        assert_eq!(calls, vec!["first", "first"]);
    }

    #[test]
    fn handlers_can_use_menu_streams() {
        let mut menu: TestMenu<'_> = Menu::new("intro", Vec::new(), Cursor::new("1\nhello\n"))
            .option("echo", |_: &mut Vec<&'static str>, writer: &mut Vec<u8>, reader: &mut Cursor<&'static str>| {
                let mut line = String::new();
                reader.read_line(&mut line)?;
                write!(writer, "echo: {line}")?;
                Ok(MenuAction::Exit)
            });

        menu.run(&mut Vec::new()).unwrap();
        assert!(output(&menu).contains("echo: hello"));
    }
}
