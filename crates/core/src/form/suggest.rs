use crate::models::{Player, PlayerCatalog};

/// Maximum number of suggestions shown under a signing field.
pub const SUGGESTION_LIMIT: usize = 5;

/// Players whose name contains `input`, case-insensitively, in catalog order.
///
/// Inputs of one character or fewer produce no suggestions.
pub fn suggest<'a>(catalog: &'a PlayerCatalog, input: &str) -> Vec<&'a Player> {
    if input.chars().count() <= 1 {
        return Vec::new();
    }

    let needle = input.to_lowercase();
    catalog
        .players()
        .iter()
        .filter(|player| player.web_name.to_lowercase().contains(&needle))
        .take(SUGGESTION_LIMIT)
        .collect()
}

/// Suggestion list and highlight for one signing field.
#[derive(Debug, Clone, Default)]
pub struct Autocomplete {
    suggestions: Vec<Player>,
    cursor: usize,
}

impl Autocomplete {
    /// Recompute suggestions after the field's text changed.
    pub fn update(&mut self, catalog: &PlayerCatalog, input: &str) {
        self.suggestions = suggest(catalog, input).into_iter().cloned().collect();
        self.cursor = 0;
    }

    /// Current suggestions, best first.
    pub fn suggestions(&self) -> &[Player] {
        &self.suggestions
    }

    /// Whether the list should be drawn.
    pub fn is_open(&self) -> bool {
        !self.suggestions.is_empty()
    }

    /// Index of the highlighted suggestion.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the highlight, clamped to the list.
    pub fn move_cursor(&mut self, delta: isize) {
        if self.suggestions.is_empty() {
            return;
        }
        let last = self.suggestions.len() as isize - 1;
        self.cursor = (self.cursor as isize + delta).clamp(0, last) as usize;
    }

    /// Take the highlighted player's name verbatim and close the list.
    pub fn select(&mut self) -> Option<String> {
        let chosen = self
            .suggestions
            .get(self.cursor)
            .map(|player| player.web_name.clone());
        self.clear();
        chosen
    }

    /// Close the list.
    pub fn clear(&mut self) {
        self.suggestions.clear();
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> PlayerCatalog {
        let names = [
            "Saka", "Salah", "Isak", "Sánchez", "Sarr", "Sanchez", "Sangaré", "Palmer", "Haaland",
        ];
        PlayerCatalog::new(
            names
                .iter()
                .enumerate()
                .map(|(idx, name)| Player {
                    id: idx as u32 + 1,
                    web_name: name.to_string(),
                })
                .collect(),
        )
    }

    fn names<'a>(players: &[&'a Player]) -> Vec<&'a str> {
        players.iter().map(|player| player.web_name.as_str()).collect()
    }

    #[test]
    fn short_input_has_no_suggestions() {
        let catalog = catalog();
        assert!(suggest(&catalog, "").is_empty());
        assert!(suggest(&catalog, "s").is_empty());
        assert!(suggest(&catalog, "é").is_empty());
    }

    #[test]
    fn matches_are_case_insensitive_and_in_catalog_order() {
        let catalog = catalog();
        assert_eq!(
            names(&suggest(&catalog, "SA")),
            ["Saka", "Salah", "Isak", "Sarr", "Sanchez"]
        );
        assert_eq!(names(&suggest(&catalog, "aal")), ["Haaland"]);
    }

    #[test]
    fn suggestions_are_capped_and_all_match() {
        let catalog = catalog();
        for input in ["sa", "an", "ar", "zz", "ÁN"] {
            let found = suggest(&catalog, input);
            assert!(found.len() <= SUGGESTION_LIMIT);
            let needle = input.to_lowercase();
            assert!(found
                .iter()
                .all(|player| player.web_name.to_lowercase().contains(&needle)));
        }
    }

    #[test]
    fn selecting_sets_name_and_closes_list() {
        let catalog = catalog();
        let mut auto = Autocomplete::default();
        auto.update(&catalog, "pal");
        assert!(auto.is_open());
        assert_eq!(auto.select().as_deref(), Some("Palmer"));
        assert!(!auto.is_open());
        assert_eq!(auto.select(), None);
    }

    #[test]
    fn cursor_stays_within_suggestions() {
        let catalog = catalog();
        let mut auto = Autocomplete::default();
        auto.update(&catalog, "sa");
        auto.move_cursor(10);
        assert_eq!(auto.cursor(), SUGGESTION_LIMIT - 1);
        auto.move_cursor(-2);
        assert_eq!(auto.select().as_deref(), Some("Isak"));
    }
}
