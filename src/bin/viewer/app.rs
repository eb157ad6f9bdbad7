//! Main application state and event handling
//!
//! The App holds the expression line being edited and the parse outcome.
//! Every edit re-runs the parser, so the tree pane and the error line
//! always reflect the current input.

use boolex::boolex::parser::{parse, Expr, SyntaxError};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// The main application
pub struct App {
    /// The expression line being edited
    pub input: String,
    /// Cursor position within `input`, as a byte offset (input is ASCII)
    pub cursor: usize,
    /// Outcome of parsing the current input
    pub outcome: Result<Expr, SyntaxError>,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new application with an optional initial expression
    pub fn new(initial: Option<String>) -> Self {
        let input = initial.unwrap_or_default();
        let cursor = input.len();
        let outcome = parse(&input);
        App {
            input,
            cursor,
            should_quit: false,
            outcome,
        }
    }

    /// Handle a keyboard event
    ///
    /// Returns whether the state changed (needed for re-rendering)
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Check for quit keys first; letters are expression input here
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                return true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return true;
            }
            _ => {}
        }

        match key.code {
            KeyCode::Char(c)
                if c.is_ascii()
                    && !c.is_ascii_control()
                    && !key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.input.insert(self.cursor, c);
                self.cursor += 1;
                self.reparse();
                true
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.input.remove(self.cursor);
                    self.reparse();
                    true
                } else {
                    false
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.input.len() {
                    self.input.remove(self.cursor);
                    self.reparse();
                    true
                } else {
                    false
                }
            }
            KeyCode::Left => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    true
                } else {
                    false
                }
            }
            KeyCode::Right => {
                if self.cursor < self.input.len() {
                    self.cursor += 1;
                    true
                } else {
                    false
                }
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = self.input.len();
                true
            }
            _ => false,
        }
    }

    fn reparse(&mut self) {
        self.outcome = parse(&self.input);
    }
}
