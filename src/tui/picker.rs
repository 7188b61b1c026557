//! Color picker popup with RGB channel sliders.
//!
//! The picker is the constrained input channel: whatever the user does here,
//! the result is a well-formed color, so applying it can never diverge a
//! field.

// Input handlers use match arms that never fail; casts are color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
    Frame,
};

use crate::models::{HexColor, RgbColor};

use super::theme::Theme;

/// RGB channel being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RgbChannel {
    /// Red color channel
    Red,
    /// Green color channel
    Green,
    /// Blue color channel
    Blue,
}

/// Outcome of one key event inside the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerAction {
    /// Keep the picker open
    Continue,
    /// Apply the picked color to the active field
    Apply(HexColor),
    /// Close without applying
    Cancel,
}

/// State for the color picker popup
#[derive(Debug, Clone)]
pub struct PickerState {
    /// Red channel value (0-255)
    pub r: u8,
    /// Green channel value (0-255)
    pub g: u8,
    /// Blue channel value (0-255)
    pub b: u8,
    /// Currently active channel for editing
    pub active_channel: RgbChannel,
}

impl PickerState {
    /// Creates a picker initialized with a specific color
    #[must_use]
    pub fn with_color(color: RgbColor) -> Self {
        Self {
            r: color.r,
            g: color.g,
            b: color.b,
            active_channel: RgbChannel::Red,
        }
    }

    /// Get the current color
    #[must_use]
    pub const fn get_color(&self) -> RgbColor {
        RgbColor::new(self.r, self.g, self.b)
    }

    /// Switch to next channel (Red -> Green -> Blue -> Red)
    pub const fn next_channel(&mut self) {
        self.active_channel = match self.active_channel {
            RgbChannel::Red => RgbChannel::Green,
            RgbChannel::Green => RgbChannel::Blue,
            RgbChannel::Blue => RgbChannel::Red,
        };
    }

    /// Switch to previous channel (Red -> Blue -> Green -> Red)
    pub const fn previous_channel(&mut self) {
        self.active_channel = match self.active_channel {
            RgbChannel::Red => RgbChannel::Blue,
            RgbChannel::Green => RgbChannel::Red,
            RgbChannel::Blue => RgbChannel::Green,
        };
    }

    /// Increase the active channel value
    pub const fn increase_value(&mut self, amount: u8) {
        match self.active_channel {
            RgbChannel::Red => self.r = self.r.saturating_add(amount),
            RgbChannel::Green => self.g = self.g.saturating_add(amount),
            RgbChannel::Blue => self.b = self.b.saturating_add(amount),
        }
    }

    /// Decrease the active channel value
    pub const fn decrease_value(&mut self, amount: u8) {
        match self.active_channel {
            RgbChannel::Red => self.r = self.r.saturating_sub(amount),
            RgbChannel::Green => self.g = self.g.saturating_sub(amount),
            RgbChannel::Blue => self.b = self.b.saturating_sub(amount),
        }
    }
}

/// Handle a key event inside the picker
#[must_use]
pub fn handle_input(state: &mut PickerState, key: KeyEvent) -> PickerAction {
    match key.code {
        KeyCode::Esc => PickerAction::Cancel,
        KeyCode::Enter => PickerAction::Apply(HexColor::from(state.get_color())),
        KeyCode::Up | KeyCode::Char('k') => {
            state.increase_value(10);
            PickerAction::Continue
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.decrease_value(10);
            PickerAction::Continue
        }
        KeyCode::Right | KeyCode::Char('l') => {
            state.increase_value(1);
            PickerAction::Continue
        }
        KeyCode::Left | KeyCode::Char('h') => {
            state.decrease_value(1);
            PickerAction::Continue
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                state.previous_channel();
            } else {
                state.next_channel();
            }
            PickerAction::Continue
        }
        _ => PickerAction::Continue,
    }
}

/// Render the picker popup for the named color key
pub fn render(f: &mut Frame, state: &PickerState, label: &str, theme: &Theme) {
    let area = centered_rect(60, 60, f.area());

    // Clear the background area first
    f.render_widget(Clear, area);
    let background = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(background, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(3), // Red slider
            Constraint::Length(3), // Green slider
            Constraint::Length(3), // Blue slider
            Constraint::Length(4), // Color preview
            Constraint::Length(3), // Hex display
            Constraint::Min(0),    // Spacer
            Constraint::Length(2), // Instructions
        ])
        .split(area);

    let title = Paragraph::new(format!("Pick Color: {label}")).style(
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(title, chunks[0]);

    render_channel_slider(
        f,
        chunks[1],
        "Red",
        state.r,
        Color::Red,
        state.active_channel == RgbChannel::Red,
        theme.text_muted,
    );
    render_channel_slider(
        f,
        chunks[2],
        "Green",
        state.g,
        Color::Green,
        state.active_channel == RgbChannel::Green,
        theme.text_muted,
    );
    render_channel_slider(
        f,
        chunks[3],
        "Blue",
        state.b,
        Color::Blue,
        state.active_channel == RgbChannel::Blue,
        theme.text_muted,
    );

    // Color preview
    let preview = Block::default()
        .title(" Preview ")
        .borders(Borders::ALL)
        .style(Style::default().bg(state.get_color().to_ratatui_color()));
    f.render_widget(preview, chunks[4]);

    // Hex code display
    let hex = state.get_color().to_hex();
    let hex_display = Paragraph::new(format!("  {hex}"))
        .style(Style::default().fg(theme.text).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).title(" Hex Code "));
    f.render_widget(hex_display, chunks[5]);

    // Instructions
    let instructions = vec![Line::from(vec![
        Span::styled("↑↓", Style::default().fg(theme.accent)),
        Span::raw(" ±10  "),
        Span::styled("←→", Style::default().fg(theme.accent)),
        Span::raw(" ±1  "),
        Span::styled("Tab", Style::default().fg(theme.accent)),
        Span::raw(" Channel  "),
        Span::styled("Enter", Style::default().fg(theme.accent)),
        Span::raw(" Apply  "),
        Span::styled("Esc", Style::default().fg(theme.accent)),
        Span::raw(" Cancel"),
    ])];
    f.render_widget(Paragraph::new(instructions), chunks[7]);

    // Border around everything
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary));
    f.render_widget(block, area);
}

/// Render a single channel slider
fn render_channel_slider(
    f: &mut Frame,
    area: Rect,
    label: &str,
    value: u8,
    color: Color,
    is_active: bool,
    inactive_color: Color,
) {
    let percentage = (f64::from(value) / 255.0 * 100.0) as u16;
    let label_text = format!("{label}: {value:3}");

    let style = if is_active {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(inactive_color)
    };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::NONE))
        .gauge_style(style)
        .label(label_text)
        .percent(percentage);

    f.render_widget(gauge, area);
}

/// Helper to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
