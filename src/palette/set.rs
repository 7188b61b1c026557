//! An ordered collection of color fields over one fixed key table.
//!
//! Two instances exist per session (brand and swatch). They share logic but
//! never share state; the composition is purely structural reuse over two
//! different key tables.

use crate::models::{HexColor, ShadeRamp};

use super::field::ColorField;
use super::keys::{ColorKey, BRAND_KEYS, SWATCH_KEYS};

/// A palette group: fixed key table plus one editable field per key.
#[derive(Debug, Clone)]
pub struct PaletteSet {
    /// Immutable key table (order defines serialization order).
    keys: &'static [ColorKey],
    /// One field per key, same order as `keys`.
    fields: Vec<ColorField>,
}

impl PaletteSet {
    /// Creates a set over a key table, every field at its default color.
    #[must_use]
    pub fn new(keys: &'static [ColorKey]) -> Self {
        let fields = keys
            .iter()
            .map(|key| ColorField::new(key.default_color()))
            .collect();
        Self { keys, fields }
    }

    /// Creates the semantic brand set (7 roles).
    #[must_use]
    pub fn brand() -> Self {
        Self::new(&BRAND_KEYS)
    }

    /// Creates the raw swatch set (8 roles).
    #[must_use]
    pub fn swatch() -> Self {
        Self::new(&SWATCH_KEYS)
    }

    /// Returns the key table.
    #[must_use]
    pub fn keys(&self) -> &'static [ColorKey] {
        self.keys
    }

    /// Number of keys in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the set has no keys. Never true for the two fixed tables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Looks up a field by key identifier.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&ColorField> {
        let index = self.index_of(key)?;
        self.fields.get(index)
    }

    /// Returns the key and field at a position.
    #[must_use]
    pub fn entry_at(&self, index: usize) -> Option<(&ColorKey, &ColorField)> {
        Some((self.keys.get(index)?, self.fields.get(index)?))
    }

    /// Applies a picker-originated change to one key.
    ///
    /// Returns false if the key is not in this set.
    pub fn set_from_picker(&mut self, key: &str, value: HexColor) -> bool {
        let Some(index) = self.index_of(key) else {
            return false;
        };
        self.fields[index].set_from_picker(value);
        true
    }

    /// Applies a picker-originated change by position.
    pub fn set_from_picker_at(&mut self, index: usize, value: HexColor) {
        if let Some(field) = self.fields.get_mut(index) {
            field.set_from_picker(value);
        }
    }

    /// Applies a buffer-originated change to one key.
    ///
    /// Returns whether the text was promoted to canonical (false also covers
    /// an unknown key).
    pub fn set_from_buffer(&mut self, key: &str, text: &str) -> bool {
        let Some(index) = self.index_of(key) else {
            return false;
        };
        self.fields[index].set_from_buffer(text)
    }

    /// Applies a buffer-originated change by position.
    pub fn set_from_buffer_at(&mut self, index: usize, text: &str) -> bool {
        self.fields
            .get_mut(index)
            .is_some_and(|field| field.set_from_buffer(text))
    }

    /// Resets one key back to its documented default color.
    pub fn reset_at(&mut self, index: usize) {
        if let Some(key) = self.keys.get(index) {
            self.fields[index].set_from_picker(key.default_color());
        }
    }

    /// Derives the ramp for one key from its current canonical value.
    #[must_use]
    pub fn ramp(&self, key: &str) -> Option<ShadeRamp> {
        self.field(key).map(|f| ShadeRamp::generate(f.canonical()))
    }

    /// Derives all ramps in key-table order.
    ///
    /// Ramps are recomputed in full on every call; nothing is cached.
    #[must_use]
    pub fn ramps(&self) -> Vec<(&'static ColorKey, ShadeRamp)> {
        self.keys
            .iter()
            .zip(self.fields.iter())
            .map(|(key, field)| (key, ShadeRamp::generate(field.canonical())))
            .collect()
    }

    fn index_of(&self, key: &str) -> Option<usize> {
        self.keys.iter().position(|k| k.key == key)
    }
}
