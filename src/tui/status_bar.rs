//! Status bar widget for displaying status messages and key hints.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar: transient message on top, key hints below.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let message_line = if let Some(error) = &state.error_message {
            Line::from(Span::styled(
                error.clone(),
                Style::default().fg(theme.error),
            ))
        } else {
            Line::from(Span::styled(
                state.status_message.clone(),
                Style::default().fg(theme.text),
            ))
        };

        let hints = if state.picker.is_some() {
            vec![hint("Enter", " Apply  ", theme), hint("Esc", " Cancel", theme)]
        } else if state.editing {
            vec![
                hint("type", " Edit hex  ", theme),
                hint("Backspace", " Delete  ", theme),
                hint("Enter/Esc", " Done", theme),
            ]
        } else {
            vec![
                hint("Tab", " Group  ", theme),
                hint("↑↓", " Key  ", theme),
                hint("←→", " Stop  ", theme),
                hint("e", " Edit hex  ", theme),
                hint("p", " Picker  ", theme),
                hint("r", " Reset  ", theme),
                hint("y", " Copy stop  ", theme),
                hint("c", " Copy config  ", theme),
                hint("q", " Quit", theme),
            ]
        };

        let lines = vec![message_line, Line::from(flatten(hints))];
        let widget = Paragraph::new(lines).block(Block::default().borders(Borders::TOP));
        f.render_widget(widget, area);
    }
}

fn hint<'a>(key: &'a str, action: &'a str, theme: &Theme) -> [Span<'a>; 2] {
    [
        Span::styled(key, Style::default().fg(theme.accent)),
        Span::styled(action, Style::default().fg(theme.text_muted)),
    ]
}

fn flatten(hints: Vec<[Span<'_>; 2]>) -> Vec<Span<'_>> {
    hints.into_iter().flatten().collect()
}
