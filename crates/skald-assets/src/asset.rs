//! Asset cards: abilities, input fields, and at most one track of each
//! kind.

use serde::{Deserialize, Serialize};
use skald_core::Game;

use crate::track::{Counter, Meter, ToggleTrack};

/// One ability on a card, toggled on when the player acquires it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    /// Rules text of the ability.
    pub text: String,
    /// Whether the player has this ability.
    #[serde(default)]
    pub enabled: bool,
}

impl Ability {
    /// Create a disabled ability.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            enabled: false,
        }
    }
}

/// A named blank the player fills in when taking the card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputField {
    /// Display name of the blank (e.g. "Name").
    pub name: String,
    /// The filled-in value, if any.
    #[serde(default)]
    pub value: Option<String>,
}

impl InputField {
    /// Create an unfilled field.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }
}

/// An asset card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Card name (e.g. "Hound").
    pub name: String,
    /// Card category (e.g. "Companion", "Module").
    pub category: String,
    /// Game the card belongs to; `None` means any game.
    #[serde(default)]
    pub game: Option<Game>,
    /// Flavor or rules summary shown under the name.
    #[serde(default)]
    pub description: String,
    /// Abilities in card order.
    #[serde(default)]
    pub abilities: Vec<Ability>,
    /// Blanks filled positionally when the card is taken.
    #[serde(default)]
    pub input_fields: Vec<InputField>,
    /// Unbounded tally, if the card has one.
    #[serde(default)]
    pub counter: Option<Counter>,
    /// Clamped resource meter, if the card has one.
    #[serde(default)]
    pub meter: Option<Meter>,
    /// One-active-at-a-time track, if the card has one.
    #[serde(default)]
    pub toggle: Option<ToggleTrack>,
}

impl Asset {
    /// Create a bare card with the given name and category.
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            game: None,
            description: String::new(),
            abilities: Vec::new(),
            input_fields: Vec::new(),
            counter: None,
            meter: None,
            toggle: None,
        }
    }

    /// Tag the card with a game.
    pub fn with_game(mut self, game: Game) -> Self {
        self.game = Some(game);
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append an ability.
    pub fn with_ability(mut self, ability: Ability) -> Self {
        self.abilities.push(ability);
        self
    }

    /// Append an input field.
    pub fn with_input(mut self, field: InputField) -> Self {
        self.input_fields.push(field);
        self
    }

    /// Attach a counter.
    pub fn with_counter(mut self, counter: Counter) -> Self {
        self.counter = Some(counter);
        self
    }

    /// Attach a meter.
    pub fn with_meter(mut self, meter: Meter) -> Self {
        self.meter = Some(meter);
        self
    }

    /// Attach a toggle track.
    pub fn with_toggle(mut self, toggle: ToggleTrack) -> Self {
        self.toggle = Some(toggle);
        self
    }

    /// Flip the ability at `index`. Returns false if the index is out of
    /// range, leaving the card unchanged.
    pub fn toggle_ability(&mut self, index: usize) -> bool {
        let Some(ability) = self.abilities.get_mut(index) else {
            return false;
        };
        ability.enabled = !ability.enabled;
        true
    }

    /// Fill input fields positionally from `values`. Extra values are
    /// ignored; unpaired fields stay as they were. Returns how many
    /// fields were filled.
    pub fn fill_inputs<I, S>(&mut self, values: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut filled = 0;
        for (field, value) in self.input_fields.iter_mut().zip(values) {
            field.value = Some(value.into());
            filled += 1;
        }
        filled
    }
}
