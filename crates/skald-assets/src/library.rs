//! An owned collection of asset cards with name lookup.

use serde::{Deserialize, Serialize};
use skald_core::Game;
use skald_core::game::game_matches;

use crate::asset::Asset;

/// Asset cards in load order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetLibrary {
    assets: Vec<Asset>,
}

impl AssetLibrary {
    /// An empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card.
    pub fn insert(&mut self, asset: Asset) {
        self.assets.push(asset);
    }

    /// Exact name match, case-insensitive, honoring the game filter.
    /// Untagged cards match any filter; no filter matches any card.
    pub fn find(&self, name: &str, game: Option<Game>) -> Option<&Asset> {
        self.assets
            .iter()
            .find(|a| game_matches(a.game, game) && a.name.eq_ignore_ascii_case(name))
    }

    /// Mutable variant of [`AssetLibrary::find`].
    pub fn find_mut(&mut self, name: &str, game: Option<Game>) -> Option<&mut Asset> {
        self.assets
            .iter_mut()
            .find(|a| game_matches(a.game, game) && a.name.eq_ignore_ascii_case(name))
    }

    /// First card whose name occurs anywhere in `text`, case-insensitive.
    /// This is how a free-form command locates the card it mentions.
    pub fn find_in_text(&self, text: &str, game: Option<Game>) -> Option<&Asset> {
        let lowered = text.to_lowercase();
        self.assets
            .iter()
            .find(|a| game_matches(a.game, game) && lowered.contains(&a.name.to_lowercase()))
    }

    /// Cards in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Asset> {
        self.assets.iter()
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// True if the library holds no cards.
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_library() -> AssetLibrary {
        let mut lib = AssetLibrary::new();
        lib.insert(Asset::new("Hound", "Companion").with_game(Game::Ironsworn));
        lib.insert(Asset::new("Sprite", "Module").with_game(Game::Starforged));
        lib.insert(Asset::new("Lorekeeper", "Path"));
        lib
    }

    #[test]
    fn find_is_case_insensitive() {
        let lib = test_library();
        assert!(lib.find("hound", None).is_some());
        assert!(lib.find("HOUND", None).is_some());
        assert!(lib.find("Mastiff", None).is_none());
    }

    #[test]
    fn find_honors_the_game_filter() {
        let lib = test_library();
        assert!(lib.find("Hound", Some(Game::Ironsworn)).is_some());
        assert!(lib.find("Hound", Some(Game::Starforged)).is_none());
    }

    #[test]
    fn untagged_cards_match_any_filter() {
        let lib = test_library();
        assert!(lib.find("Lorekeeper", Some(Game::Ironsworn)).is_some());
        assert!(lib.find("Lorekeeper", Some(Game::Starforged)).is_some());
    }

    #[test]
    fn find_in_text_spots_a_mentioned_card() {
        let lib = test_library();
        let hit = lib.find_in_text("mark progress on my hound's health", None);
        assert_eq!(hit.map(|a| a.name.as_str()), Some("Hound"));
        assert!(lib.find_in_text("no card here", None).is_none());
    }

    #[test]
    fn find_in_text_honors_the_game_filter() {
        let lib = test_library();
        let hit = lib.find_in_text("repair the sprite module", Some(Game::Ironsworn));
        assert!(hit.is_none());
    }

    #[test]
    fn find_mut_allows_edits() {
        let mut lib = test_library();
        lib.find_mut("Hound", None).unwrap().description = "Good dog.".to_string();
        assert_eq!(lib.find("Hound", None).unwrap().description, "Good dog.");
    }
}
