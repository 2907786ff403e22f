//! Tracks carried by asset cards.
//!
//! A card has at most one of each kind: an unbounded counter, a clamped
//! meter, or a toggle track where exactly one field is active at a time.

use serde::{Deserialize, Serialize};

/// An unbounded tally (kills, supply cached, favors owed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter {
    /// Display name of the counter.
    pub name: String,
    /// Current tally.
    pub value: i32,
}

impl Counter {
    /// Create a counter starting at zero.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: 0,
        }
    }

    /// Adjust by a delta, saturating at the i32 bounds. Returns the new
    /// value.
    pub fn adjust(&mut self, delta: i32) -> i32 {
        self.value = self.value.saturating_add(delta);
        self.value
    }
}

impl std::fmt::Display for Counter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

/// A named numeric resource clamped between min and max.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meter {
    /// Display name of the meter.
    pub name: String,
    /// Current value.
    pub value: i32,
    /// Minimum value (usually 0).
    pub min: i32,
    /// Maximum value.
    pub max: i32,
}

impl Meter {
    /// Create a meter starting at its maximum value.
    pub fn new(name: impl Into<String>, max: i32) -> Self {
        Self {
            name: name.into(),
            value: max,
            min: 0,
            max,
        }
    }

    /// Create a meter with a custom minimum and starting value.
    pub fn with_range(name: impl Into<String>, value: i32, min: i32, max: i32) -> Self {
        let clamped = value.clamp(min, max);
        Self {
            name: name.into(),
            value: clamped,
            min,
            max,
        }
    }

    /// Adjust by a delta, clamping to bounds. Returns the new value.
    pub fn adjust(&mut self, delta: i32) -> i32 {
        self.value = (self.value + delta).clamp(self.min, self.max);
        self.value
    }

    /// Set to an absolute value, clamping to bounds. Returns the new value.
    pub fn set(&mut self, value: i32) -> i32 {
        self.value = value.clamp(self.min, self.max);
        self.value
    }

    /// Returns true if the meter is at its minimum value.
    pub fn is_min(&self) -> bool {
        self.value <= self.min
    }

    /// Returns true if the meter is at its maximum value.
    pub fn is_max(&self) -> bool {
        self.value >= self.max
    }
}

impl std::fmt::Display for Meter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}/{}", self.name, self.value, self.max)
    }
}

/// One position on a toggle track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleField {
    /// Display name of the field.
    pub name: String,
    /// Text shown while this field is active.
    pub active_text: String,
    /// Text shown while this field is inactive.
    pub inactive_text: String,
    /// Whether the field is currently active.
    pub active: bool,
}

impl ToggleField {
    /// Create an inactive field.
    pub fn new(
        name: impl Into<String>,
        active_text: impl Into<String>,
        inactive_text: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            active_text: active_text.into(),
            inactive_text: inactive_text.into(),
            active: false,
        }
    }

    /// The text matching the field's current state.
    pub fn text(&self) -> &str {
        if self.active {
            &self.active_text
        } else {
            &self.inactive_text
        }
    }
}

/// A track where exactly one field is active at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleTrack {
    /// The fields, in display order.
    pub fields: Vec<ToggleField>,
}

impl ToggleTrack {
    /// Build a track from fields; the first one starts active.
    pub fn new(mut fields: Vec<ToggleField>) -> Self {
        for field in &mut fields {
            field.active = false;
        }
        if let Some(first) = fields.first_mut() {
            first.active = true;
        }
        Self { fields }
    }

    /// Move the active marker to `index`. Returns false if the index is
    /// out of range, leaving the track unchanged.
    pub fn activate(&mut self, index: usize) -> bool {
        if index >= self.fields.len() {
            return false;
        }
        for field in &mut self.fields {
            field.active = false;
        }
        self.fields[index].active = true;
        true
    }

    /// The currently active field, if the track has any fields.
    pub fn active(&self) -> Option<&ToggleField> {
        self.fields.iter().find(|f| f.active)
    }
}
