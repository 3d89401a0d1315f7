//! The persistence boundary.
//!
//! Storage itself lives outside this engine; the engine only sees an
//! opaque load/save interface. The caller owns serializing concurrent
//! interactions before invoking it. [`MemoryStore`] backs the tests.

use std::collections::HashMap;

use crate::character::{Character, CharacterId};
use crate::error::{CoreError, CoreResult};

/// Opaque read/write interface to wherever characters are kept.
pub trait CharacterStore {
    /// Fetch a character by id.
    fn load(&self, id: CharacterId) -> CoreResult<Character>;

    /// Write a character back.
    fn save(&mut self, character: &Character) -> CoreResult<()>;
}

/// An in-memory character store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    characters: HashMap<CharacterId, Character>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of characters held.
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Returns true if the store holds no characters.
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

impl CharacterStore for MemoryStore {
    fn load(&self, id: CharacterId) -> CoreResult<Character> {
        self.characters
            .get(&id)
            .cloned()
            .ok_or(CoreError::NotFound(id))
    }

    fn save(&mut self, character: &Character) -> CoreResult<()> {
        self.characters.insert(character.id, character.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::CharacterKind;

    #[test]
    fn save_then_load() {
        let mut store = MemoryStore::new();
        let character = Character::new("Sam", CharacterKind::Hunter);
        store.save(&character).unwrap();
        assert_eq!(store.len(), 1);

        let loaded = store.load(character.id).unwrap();
        assert_eq!(loaded.name, "Sam");
        assert_eq!(loaded.kind, CharacterKind::Hunter);
    }

    #[test]
    fn load_missing_is_not_found() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        let err = store.load(CharacterId::new()).unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)));
    }

    #[test]
    fn save_overwrites_by_id() {
        let mut store = MemoryStore::new();
        let mut character = Character::new("Sam", CharacterKind::Hunter);
        store.save(&character).unwrap();

        character.name = "Samantha".to_string();
        store.save(&character).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.load(character.id).unwrap().name, "Samantha");
    }
}
