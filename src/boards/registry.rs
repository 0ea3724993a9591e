//! Board registry and lookup trait

use std::sync::OnceLock;

use crate::errors::{BoardBrewError, Result};
use crate::models::BoardRecord;

/// Bundled board manifests, embedded at compile time
const BUNDLED_BOARDS: &str = include_str!("boards.json");

/// Lookup capability mapping a board identifier to its manifest.
///
/// The registry behind this trait can be the bundled snapshot, a remote
/// service or a test double; the resolver contract is a pure synchronous
/// lookup either way.
pub trait BoardLookup {
    /// Resolve a board identifier to its record
    fn resolve(&self, id: &str) -> Result<&BoardRecord>;
}

/// Board registry backed by a static table of manifests
pub struct BoardRegistry {
    boards: Vec<BoardRecord>,
}

impl BoardRegistry {
    /// Parse a registry from a JSON array of board manifests
    pub fn from_json(json: &str) -> Result<Self> {
        let boards: Vec<BoardRecord> = serde_json::from_str(json)?;
        Ok(Self { boards })
    }

    /// Build a registry from already-parsed records (used by test doubles)
    pub fn from_records(boards: Vec<BoardRecord>) -> Self {
        Self { boards }
    }

    /// Registry snapshot shipped with the binary
    pub fn bundled() -> &'static BoardRegistry {
        static REGISTRY: OnceLock<BoardRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| {
            BoardRegistry::from_json(BUNDLED_BOARDS)
                .unwrap_or_else(|err| panic!("bundled boards.json is invalid: {}", err))
        })
    }

    /// Iterate all known boards in registry order
    pub fn iter(&self) -> impl Iterator<Item = &BoardRecord> {
        self.boards.iter()
    }

    /// Boards whose id, name or platform contains `filter` (case-insensitive)
    pub fn search<'a>(&'a self, filter: &str) -> Vec<&'a BoardRecord> {
        let needle = filter.to_lowercase();
        self.boards
            .iter()
            .filter(|board| {
                board.id.to_lowercase().contains(&needle)
                    || board.name.to_lowercase().contains(&needle)
                    || board.platform.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

impl BoardLookup for BoardRegistry {
    fn resolve(&self, id: &str) -> Result<&BoardRecord> {
        self.boards
            .iter()
            .find(|board| board.id == id)
            .ok_or_else(|| BoardBrewError::UnknownBoard(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_registry_resolves_known_boards() {
        let registry = BoardRegistry::bundled();

        let uno = registry.resolve("uno").unwrap();
        assert_eq!(uno.platform, "atmelavr");
        assert_eq!(uno.default_framework(), "arduino");
        assert_eq!(uno.build.package, "framework-arduinoavr");

        let nodemcu = registry.resolve("nodemcuv2").unwrap();
        assert_eq!(nodemcu.platform, "espressif8266");
        assert_eq!(nodemcu.build.package, "framework-arduinoespressif8266");
    }

    #[test]
    fn unknown_board_is_an_error() {
        let registry = BoardRegistry::bundled();
        match registry.resolve("missed_board") {
            Err(BoardBrewError::UnknownBoard(id)) => assert_eq!(id, "missed_board"),
            other => panic!("expected UnknownBoard, got {:?}", other.map(|b| b.id.clone())),
        }
    }

    #[test]
    fn search_matches_id_name_and_platform() {
        let registry = BoardRegistry::bundled();
        assert!(registry.search("Arduino Uno").iter().any(|b| b.id == "uno"));
        assert!(
            registry
                .search("espressif8266")
                .iter()
                .all(|b| b.platform == "espressif8266")
        );
        assert!(registry.search("no-such-board").is_empty());
    }
}
