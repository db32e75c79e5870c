//! Shared domain models.

use serde::{Deserialize, Serialize};

/// Sorted, de-duplicated list of team display names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamCatalog {
    names: Vec<String>,
}

impl TeamCatalog {
    /// Build a catalog from raw names, dropping blanks and duplicates.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = names
            .into_iter()
            .map(Into::into)
            .filter(|name| !name.trim().is_empty())
            .collect();
        names.sort();
        names.dedup();
        Self { names }
    }

    /// All team names in display order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Exact-match membership test.
    pub fn contains(&self, name: &str) -> bool {
        self.names.binary_search_by(|probe| probe.as_str().cmp(name)).is_ok()
    }

    /// Number of teams.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True until a catalog has loaded.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// A player entry used for signing suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Identifier assigned by the catalog source.
    pub id: u32,
    /// Short display name (e.g. `Salah`).
    pub web_name: String,
}

/// Players in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerCatalog {
    players: Vec<Player>,
}

impl PlayerCatalog {
    /// Wrap players, keeping their order.
    pub fn new(players: Vec<Player>) -> Self {
        Self { players }
    }

    /// All players in source order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Number of players.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// True when no players were loaded.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

/// Both reference lists, loaded once per run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    /// Team names for the choice questions.
    pub teams: TeamCatalog,
    /// Player names for signing suggestions.
    pub players: PlayerCatalog,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_catalog_sorts_and_dedups() {
        let catalog =
            TeamCatalog::from_names(["Liverpool", "Arsenal", "Chelsea", "Arsenal", " "]);
        assert_eq!(catalog.names(), ["Arsenal", "Chelsea", "Liverpool"]);
        assert!(catalog.contains("Chelsea"));
        assert!(!catalog.contains("Spurs"));
    }

    #[test]
    fn team_catalog_keeps_source_case() {
        let catalog = TeamCatalog::from_names(["spurs", "Spurs", "Man City"]);
        assert_eq!(catalog.names(), ["Man City", "Spurs", "spurs"]);
    }
}
