//! Viewer main function that can be called from boolex.rs
use crossterm::event::{self, Event};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::prelude::*;
use std::io;
use std::time::Duration;

use super::app::App;
use super::ui;

/// Run the viewer, optionally starting from an initial expression
pub fn run_viewer(initial: Option<String>) -> io::Result<()> {
    let mut app = App::new(initial);

    // Setup terminal
    enable_raw_mode()?;
    let stdout = io::stdout();
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    terminal.clear()?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        // Render the full UI every frame
        terminal.draw(|frame| {
            ui::render(frame, app);
        })?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    let _ = app.handle_key(key);
                    if app.should_quit {
                        return Ok(());
                    }
                }
                // On terminal resize, the next loop iteration re-renders
                // with the new dimensions
                Event::Resize(_, _) => {}
                _ => {
                    // Ignore other events (mouse, focus, etc.)
                }
            }
        }
    }
}
