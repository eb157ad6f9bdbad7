//! UI rendering for the expression viewer
//!
//! Three panes: the expression line being edited, a status line with the
//! parse outcome, and the syntax tree of the last successful structure.

use super::app::App;
use boolex::boolex::parser::to_treeviz_str;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Render the full UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // expression input
            Constraint::Length(1), // status line
            Constraint::Min(1),    // syntax tree
            Constraint::Length(1), // help line
        ])
        .split(frame.area());

    render_input(frame, chunks[0], app);
    render_status(frame, chunks[1], app);
    render_tree(frame, chunks[2], app);
    render_help(frame, chunks[3]);
}

fn render_input(frame: &mut Frame, area: Rect, app: &App) {
    let (before, rest) = app.input.split_at(app.cursor);
    let (at, after) = if rest.is_empty() {
        (" ", "")
    } else {
        rest.split_at(1)
    };

    let line = Line::from(vec![
        Span::raw(before),
        Span::styled(at, Style::default().add_modifier(Modifier::REVERSED)),
        Span::raw(after),
    ]);

    let input = Paragraph::new(line).block(Block::default().borders(Borders::ALL).title("Expression"));
    frame.render_widget(input, area);
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.outcome {
        Ok(expr) => Line::from(Span::styled(
            format!(
                " {} gates, {} inputs | {}",
                expr.gate_count(),
                expr.literal_count(),
                expr
            ),
            Style::default().fg(Color::Green),
        )),
        Err(e) => Line::from(Span::styled(
            format!(" Invalid Boolean Expression: {}", e),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_tree(frame: &mut Frame, area: Rect, app: &App) {
    let content = match &app.outcome {
        Ok(expr) => to_treeviz_str(expr),
        // Keep the pane, drop the tree: no partial trees on a failed parse
        Err(_) => String::new(),
    };

    let tree = Paragraph::new(content)
        .block(Block::default().borders(Borders::ALL).title("Syntax Tree"));
    frame.render_widget(tree, area);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(Line::from(Span::styled(
        " type to edit, Esc or Ctrl+C to quit",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(help, area);
}
