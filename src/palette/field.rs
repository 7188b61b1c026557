//! Dual-representation color field: a validated canonical value mirrored by
//! a free-text buffer.
//!
//! Each palette key owns one `ColorField`. The picker channel can only
//! supply valid colors and writes both slots atomically. The text channel
//! always writes the buffer (the visible text must reflect the latest
//! keystroke) and promotes to canonical only when the text passes the hex
//! grammar. An invalid buffer is not an error: it is a modeled, persistent
//! state that downstream consumers never see.

use crate::models::HexColor;

/// Whether the buffer text currently mirrors the canonical value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    /// Buffer text equals the canonical color.
    Synced,
    /// Buffer holds invalid or stale text; canonical keeps the last good value.
    Diverged,
}

/// Per-key color state: canonical value plus editable text buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorField {
    /// Last validated color. Always valid; feeds ramps and serialization.
    canonical: HexColor,
    /// Raw text as typed. May be invalid or partial at any time.
    buffer: String,
}

impl ColorField {
    /// Creates a field in the Synced state at the given color.
    #[must_use]
    pub fn new(initial: HexColor) -> Self {
        let buffer = initial.as_str().to_string();
        Self {
            canonical: initial,
            buffer,
        }
    }

    /// Returns the canonical (always valid) color.
    #[must_use]
    pub fn canonical(&self) -> &HexColor {
        &self.canonical
    }

    /// Returns the buffer text exactly as last entered.
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Returns whether the field is Synced or Diverged.
    ///
    /// Every valid buffer edit promotes to canonical, so the field is Synced
    /// exactly when the buffer equals the canonical text.
    #[must_use]
    pub fn sync_state(&self) -> SyncState {
        if self.buffer == self.canonical.as_str() {
            SyncState::Synced
        } else {
            SyncState::Diverged
        }
    }

    /// Applies a picker-originated change.
    ///
    /// The picker always supplies a valid color, so both slots take the new
    /// value and the field is Synced afterwards regardless of prior state.
    pub fn set_from_picker(&mut self, value: HexColor) {
        self.buffer = value.as_str().to_string();
        self.canonical = value;
    }

    /// Applies a buffer-originated (free text) change.
    ///
    /// The buffer always takes the text. If the text passes the hex grammar
    /// the canonical value follows and `true` is returned; otherwise the
    /// canonical value is left at its last good value and `false` is
    /// returned.
    pub fn set_from_buffer(&mut self, text: &str) -> bool {
        self.buffer = text.to_string();
        match HexColor::parse(text) {
            Ok(color) => {
                self.canonical = color;
                true
            }
            Err(_) => false,
        }
    }
}
