//! Terminal user interface for the palette manager.
//!
//! Structure: `AppState` holds the two palette sets and all UI state; the
//! event loop renders the full state every frame and routes key events into
//! the palette transitions. Every edit recomputes the affected ramp in full;
//! nothing is cached.

pub mod picker;
pub mod status_bar;
pub mod theme;

pub use theme::Theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

use crate::constants::APP_NAME;
use crate::export;
use crate::models::STOP_LEVELS;
use crate::palette::{PaletteSet, SyncState};

use picker::{PickerAction, PickerState};
use status_bar::StatusBar;

/// Which palette group currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteGroup {
    /// Semantic brand roles
    Brand,
    /// Raw swatch roles
    Swatch,
}

/// Application state for the palette manager.
pub struct AppState {
    /// Brand palette (7 semantic roles)
    pub brand: PaletteSet,
    /// Swatch palette (8 raw roles)
    pub swatch: PaletteSet,

    /// Current UI theme
    pub theme: Theme,
    /// Focused palette group
    pub group: PaletteGroup,
    /// Selected key index within the focused group
    pub selected: usize,
    /// Selected ramp stop index (0-8)
    pub selected_stop: usize,
    /// Whether the hex buffer of the selected key is being edited
    pub editing: bool,
    /// Active color picker popup (if any)
    pub picker: Option<PickerState>,

    /// Status bar message
    pub status_message: String,
    /// Current error message (if any)
    pub error_message: Option<String>,
    /// Whether application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates the initial state: both sets at their defaults, brand focused.
    #[must_use]
    pub fn new() -> Self {
        Self {
            brand: PaletteSet::brand(),
            swatch: PaletteSet::swatch(),
            theme: Theme::detect(),
            group: PaletteGroup::Brand,
            selected: 0,
            selected_stop: 4,
            editing: false,
            picker: None,
            status_message: String::from("Welcome! Edit a base color to regenerate its shades."),
            error_message: None,
            should_quit: false,
        }
    }

    /// Returns the focused palette set.
    #[must_use]
    pub fn current_set(&self) -> &PaletteSet {
        match self.group {
            PaletteGroup::Brand => &self.brand,
            PaletteGroup::Swatch => &self.swatch,
        }
    }

    /// Returns the focused palette set mutably.
    pub fn current_set_mut(&mut self) -> &mut PaletteSet {
        match self.group {
            PaletteGroup::Brand => &mut self.brand,
            PaletteGroup::Swatch => &mut self.swatch,
        }
    }

    /// Sets the status message and clears any error.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
    }

    /// Sets an error message shown in the status bar.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    /// Switches focus between the two groups, clamping the selection.
    pub fn toggle_group(&mut self) {
        self.group = match self.group {
            PaletteGroup::Brand => PaletteGroup::Swatch,
            PaletteGroup::Swatch => PaletteGroup::Brand,
        };
        self.selected = self.selected.min(self.current_set().len() - 1);
    }

    /// Moves the key selection up or down within the focused group.
    pub fn move_selection(&mut self, delta: i32) {
        let len = self.current_set().len() as i32;
        let new = (self.selected as i32 + delta).clamp(0, len - 1);
        self.selected = new as usize;
    }

    /// Moves the ramp stop selection left or right.
    pub fn move_stop(&mut self, delta: i32) {
        let new = (self.selected_stop as i32 + delta).clamp(0, STOP_LEVELS.len() as i32 - 1);
        self.selected_stop = new as usize;
    }

    /// Opens the picker popup seeded with the selected key's canonical color.
    pub fn open_picker(&mut self) {
        if let Some((_, field)) = self.current_set().entry_at(self.selected) {
            self.picker = Some(PickerState::with_color(field.canonical().to_rgb()));
        }
    }

    /// Copies the full config snippet to the system clipboard.
    pub fn copy_config(&mut self) {
        let snippet = export::serialize(&self.brand, &self.swatch);
        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(snippet)) {
            Ok(()) => self.set_status("Config copied to clipboard"),
            Err(e) => self.set_error(format!("Failed to copy to clipboard: {e}")),
        }
    }

    /// Copies the selected ramp stop's hex string to the system clipboard.
    pub fn copy_selected_stop(&mut self) {
        let Some((key, field)) = self.current_set().entry_at(self.selected) else {
            return;
        };
        let ramp = crate::models::ShadeRamp::generate(field.canonical());
        let Some(hex) = ramp.stop_at(self.selected_stop) else {
            return;
        };
        let level = STOP_LEVELS[self.selected_stop];
        let text = hex.as_str().to_string();
        let label = format!("{}-{}", key.key, level);

        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.clone())) {
            Ok(()) => self.set_status(format!("Copied {label}: {text}")),
            Err(e) => self.set_error(format!("Failed to copy to clipboard: {e}")),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Set up terminal for TUI rendering
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if handle_key_event(state, key)? {
                    break; // User quit
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Launch the palette manager and block until the user quits.
pub fn run() -> Result<()> {
    let mut terminal = setup_terminal()?;
    let mut state = AppState::new();

    let result = run_tui(&mut state, &mut terminal);

    restore_terminal(terminal)?;
    result
}

/// Route one key event into the state machine.
///
/// Returns `Ok(true)` when the user asked to quit.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    // Picker popup captures all input while open
    if let Some(picker_state) = state.picker.as_mut() {
        match picker::handle_input(picker_state, key) {
            PickerAction::Continue => {}
            PickerAction::Cancel => {
                state.picker = None;
                state.set_status("Cancelled");
            }
            PickerAction::Apply(color) => {
                state.picker = None;
                let selected = state.selected;
                let hex = color.as_str().to_string();
                state.current_set_mut().set_from_picker_at(selected, color);
                state.set_status(format!("Set color to {hex}"));
            }
        }
        return Ok(false);
    }

    if state.editing {
        return handle_edit_key(state, key);
    }

    match key.code {
        KeyCode::Char('q') => return Ok(true),
        KeyCode::Tab => state.toggle_group(),
        KeyCode::Up | KeyCode::Char('k') => state.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => state.move_selection(1),
        KeyCode::Left | KeyCode::Char('h') => state.move_stop(-1),
        KeyCode::Right | KeyCode::Char('l') => state.move_stop(1),
        KeyCode::Enter | KeyCode::Char('e') => {
            state.editing = true;
            state.set_status("Editing hex. Enter or Esc when done.");
        }
        KeyCode::Char('p') => state.open_picker(),
        KeyCode::Char('r') => {
            let selected = state.selected;
            state.current_set_mut().reset_at(selected);
            state.set_status("Reset to default");
        }
        KeyCode::Char('c') => state.copy_config(),
        KeyCode::Char('y') => state.copy_selected_stop(),
        _ => {}
    }

    Ok(false)
}

/// Handle a key while the hex buffer is being edited.
///
/// Every keystroke goes through the buffer transition, so the visible text
/// always reflects the latest edit while the canonical value lags at the
/// last valid color. Leaving edit mode never reconciles a Diverged buffer.
fn handle_edit_key(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            state.editing = false;
            let synced = state
                .current_set()
                .entry_at(state.selected)
                .is_some_and(|(_, field)| field.sync_state() == SyncState::Synced);
            if synced {
                state.set_status("Hex applied");
            } else {
                state.set_status("Hex left invalid; last valid color stays in effect");
            }
        }
        KeyCode::Backspace => {
            let mut text = current_buffer(state);
            text.pop();
            apply_buffer(state, &text);
        }
        KeyCode::Char(c) => {
            let mut text = current_buffer(state);
            text.push(c);
            apply_buffer(state, &text);
        }
        _ => {}
    }
    Ok(false)
}

fn current_buffer(state: &AppState) -> String {
    state
        .current_set()
        .entry_at(state.selected)
        .map(|(_, field)| field.buffer().to_string())
        .unwrap_or_default()
}

fn apply_buffer(state: &mut AppState, text: &str) {
    let selected = state.selected;
    state.current_set_mut().set_from_buffer_at(selected, text);
}

/// Render the full UI.
pub fn render(f: &mut Frame, state: &AppState) {
    let theme = state.theme.clone();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(10),   // Palette lists
            Constraint::Length(4), // Ramp strip
            Constraint::Length(3), // Hex input line
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    let title = Paragraph::new(format!(" {APP_NAME} - Tailwind Color Manager")).style(
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(title, chunks[0]);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_palette_panel(
        f,
        panels[0],
        &state.brand,
        "Brand Colors",
        state.group == PaletteGroup::Brand,
        state,
        &theme,
    );
    render_palette_panel(
        f,
        panels[1],
        &state.swatch,
        "Palette Colors",
        state.group == PaletteGroup::Swatch,
        state,
        &theme,
    );

    render_ramp_strip(f, chunks[2], state, &theme);
    render_hex_line(f, chunks[3], state, &theme);
    StatusBar::render(f, chunks[4], state, &theme);

    if let Some(picker_state) = &state.picker {
        let label = state
            .current_set()
            .entry_at(state.selected)
            .map_or("", |(key, _)| key.label);
        picker::render(f, picker_state, label, &theme);
    }
}

/// Render one palette group panel.
fn render_palette_panel(
    f: &mut Frame,
    area: Rect,
    set: &PaletteSet,
    title: &str,
    focused: bool,
    state: &AppState,
    theme: &Theme,
) {
    let border_style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.text_muted)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {title} "));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = Vec::with_capacity(set.len());
    for index in 0..set.len() {
        let Some((key, field)) = set.entry_at(index) else {
            continue;
        };
        let is_selected = focused && index == state.selected;

        let dot_style = Style::default().fg(field.canonical().to_rgb().to_ratatui_color());
        let row_style = if is_selected {
            Style::default().fg(theme.text).bg(theme.highlight_bg)
        } else {
            Style::default().fg(theme.text)
        };

        let mut spans = vec![
            Span::styled("● ", dot_style),
            Span::styled(format!("{:<10}", key.label), row_style),
        ];
        if field.sync_state() == SyncState::Diverged {
            spans.push(Span::styled(
                format!("{} ", field.buffer()),
                Style::default().fg(theme.warning),
            ));
            spans.push(Span::styled(
                format!("(last valid {})", field.canonical()),
                Style::default().fg(theme.text_muted),
            ));
        } else {
            spans.push(Span::styled(field.buffer().to_string(), row_style));
        }

        lines.push(Line::from(spans));
    }

    f.render_widget(Paragraph::new(lines), inner);
}

/// Render the nine-stop ramp for the selected key.
fn render_ramp_strip(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let Some((_, field)) = state.current_set().entry_at(state.selected) else {
        return;
    };
    let ramp = crate::models::ShadeRamp::generate(field.canonical());

    let col_constraints: Vec<Constraint> = (0..STOP_LEVELS.len())
        .map(|_| Constraint::Ratio(1, STOP_LEVELS.len() as u32))
        .collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(col_constraints)
        .split(area);

    for (i, (level, color)) in ramp.iter().enumerate() {
        let is_selected = i == state.selected_stop;

        let block = Block::default().style(Style::default().bg(color.to_rgb().to_ratatui_color()));
        f.render_widget(block, columns[i]);

        if columns[i].height >= 2 {
            let indicator = if is_selected { "▲" } else { " " };
            let label_area = Rect {
                x: columns[i].x,
                y: columns[i].y + columns[i].height - 1,
                width: columns[i].width,
                height: 1,
            };
            let label_style = if is_selected {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text_muted)
            };
            let label = Paragraph::new(format!("{indicator}{level}")).style(label_style);
            f.render_widget(label, label_area);
        }
    }
}

/// Render the hex input line for the selected key.
fn render_hex_line(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let Some((key, field)) = state.current_set().entry_at(state.selected) else {
        return;
    };

    let cursor = if state.editing { "▏" } else { "" };
    let content_style = if field.sync_state() == SyncState::Diverged {
        Style::default().fg(theme.warning)
    } else {
        Style::default().fg(theme.text)
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {}: ", key.label),
            Style::default().fg(theme.text_muted),
        ),
        Span::styled(format!("{}{cursor}", field.buffer()), content_style),
    ]);

    let title = if state.editing { " Hex (editing) " } else { " Hex " };
    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.text_muted))
            .title(title),
    );
    f.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn press(state: &mut AppState, code: KeyCode) -> bool {
        handle_key_event(state, key(code)).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let state = AppState::new();
        assert_eq!(state.group, PaletteGroup::Brand);
        assert_eq!(state.selected, 0);
        assert_eq!(state.selected_stop, 4);
        assert!(!state.editing);
        assert!(state.picker.is_none());
    }

    #[test]
    fn test_quit_key() {
        let mut state = AppState::new();
        assert!(press(&mut state, KeyCode::Char('q')));
    }

    #[test]
    fn test_group_toggle_clamps_selection() {
        let mut state = AppState::new();
        state.group = PaletteGroup::Swatch;
        state.selected = 7; // last swatch key
        state.toggle_group();
        assert_eq!(state.group, PaletteGroup::Brand);
        assert_eq!(state.selected, 6); // brand has 7 keys
    }

    #[test]
    fn test_selection_clamped_at_ends() {
        let mut state = AppState::new();
        state.move_selection(-1);
        assert_eq!(state.selected, 0);
        state.move_selection(100);
        assert_eq!(state.selected, 6);
    }

    #[test]
    fn test_stop_selection_clamped() {
        let mut state = AppState::new();
        state.move_stop(-10);
        assert_eq!(state.selected_stop, 0);
        state.move_stop(20);
        assert_eq!(state.selected_stop, 8);
    }

    #[test]
    fn test_edit_keystrokes_route_through_buffer() {
        let mut state = AppState::new();
        press(&mut state, KeyCode::Char('e'));
        assert!(state.editing);

        // Every deletion runs the buffer transition too: "#009" is a valid
        // 3-digit color, so canonical follows it mid-wipe
        for _ in 0..3 {
            press(&mut state, KeyCode::Backspace);
        }
        let (_, field) = state.brand.entry_at(0).unwrap();
        assert_eq!(field.buffer(), "#009");
        assert_eq!(field.canonical().as_str(), "#009");

        // Finish the wipe, then type an invalid prefix
        for _ in 0..4 {
            press(&mut state, KeyCode::Backspace);
        }
        press(&mut state, KeyCode::Char('#'));
        press(&mut state, KeyCode::Char('1'));
        press(&mut state, KeyCode::Char('2'));

        let (_, field) = state.brand.entry_at(0).unwrap();
        assert_eq!(field.buffer(), "#12");
        assert_eq!(field.canonical().as_str(), "#009");

        // Complete to a valid color
        for c in ['3', '4', '5', '6'] {
            press(&mut state, KeyCode::Char(c));
        }
        let (_, field) = state.brand.entry_at(0).unwrap();
        assert_eq!(field.canonical().as_str(), "#123456");
    }

    #[test]
    fn test_leaving_edit_mode_keeps_diverged_buffer() {
        let mut state = AppState::new();
        press(&mut state, KeyCode::Char('e'));
        press(&mut state, KeyCode::Char('z'));
        press(&mut state, KeyCode::Esc);

        assert!(!state.editing);
        let (_, field) = state.brand.entry_at(0).unwrap();
        assert_eq!(field.sync_state(), SyncState::Diverged);
        assert_eq!(field.buffer(), "#009FDBz");
    }

    #[test]
    fn test_picker_apply_updates_selected_field() {
        let mut state = AppState::new();
        state.group = PaletteGroup::Swatch;
        state.selected = 7; // mint

        press(&mut state, KeyCode::Char('p'));
        assert!(state.picker.is_some());

        if let Some(picker_state) = state.picker.as_mut() {
            picker_state.r = 62;
            picker_state.g = 255;
            picker_state.b = 110;
        }
        press(&mut state, KeyCode::Enter);

        assert!(state.picker.is_none());
        let (key, field) = state.swatch.entry_at(7).unwrap();
        assert_eq!(key.key, "mint");
        assert_eq!(field.canonical().as_str(), "#3EFF6E");
        assert_eq!(field.buffer(), "#3EFF6E");
    }

    #[test]
    fn test_picker_cancel_leaves_field_untouched() {
        let mut state = AppState::new();
        press(&mut state, KeyCode::Char('p'));
        press(&mut state, KeyCode::Esc);

        assert!(state.picker.is_none());
        let (_, field) = state.brand.entry_at(0).unwrap();
        assert_eq!(field.canonical().as_str(), "#009FDB");
    }

    #[test]
    fn test_reset_key() {
        let mut state = AppState::new();
        state.brand.set_from_buffer_at(0, "#123456");
        press(&mut state, KeyCode::Char('r'));

        let (_, field) = state.brand.entry_at(0).unwrap();
        assert_eq!(field.canonical().as_str(), "#009FDB");
    }
}
