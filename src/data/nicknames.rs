use serde_json::Value;

/// Alias definitions from `nicknames.json`, kept in file order.
///
/// Resolution scans entries front to back, so if two characters ever claim
/// the same alias the earlier definition wins. That mirrors the data file's
/// intent; the file is expected not to have collisions.
#[derive(Clone, Debug, Default)]
pub struct NicknameBook {
    entries: Vec<(String, Vec<String>)>,
}

impl NicknameBook {
    pub fn from_entries(entries: Vec<(String, Vec<String>)>) -> Self {
        Self { entries }
    }

    /// Parse a JSON object of `character -> [aliases]`. Entry order is
    /// preserved (serde_json `preserve_order`). Non-array values and
    /// non-string aliases are skipped; a parse failure yields an empty book.
    pub fn from_json(text: &str) -> Self {
        let Ok(Value::Object(map)) = serde_json::from_str::<Value>(text) else {
            return Self::default();
        };

        let entries = map
            .into_iter()
            .filter_map(|(character, value)| {
                let Value::Array(items) = value else {
                    return None;
                };
                let aliases: Vec<String> = items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(s),
                        _ => None,
                    })
                    .collect();
                Some((character, aliases))
            })
            .collect();

        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Owner of the first alias matching `lower` case-insensitively,
    /// scanning entries in definition order.
    pub fn resolve_alias(&self, lower: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, aliases)| aliases.iter().any(|a| a.to_lowercase() == lower))
            .map(|(character, _)| character.as_str())
    }

    /// Every alias string, for lookup tab-completion.
    pub fn all_aliases(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .flat_map(|(_, aliases)| aliases.iter().map(|a| a.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_alias_case_insensitively() {
        let book = NicknameBook::from_json(r#"{"Donkey Kong": ["DK"]}"#);
        assert_eq!(book.resolve_alias("dk"), Some("Donkey Kong"));
        assert_eq!(book.resolve_alias("dkx"), None);
    }

    #[test]
    fn first_definition_wins_on_collision() {
        let book = NicknameBook::from_json(
            r#"{"Meta Knight": ["MK"], "Mario Kart": ["MK"]}"#,
        );
        assert_eq!(book.resolve_alias("mk"), Some("Meta Knight"));
    }

    #[test]
    fn skips_malformed_entries() {
        let book = NicknameBook::from_json(
            r#"{"Fox": "not-a-list", "Wolf": ["Wuff", 7], "Falco": ["Bird"]}"#,
        );
        assert_eq!(book.resolve_alias("wuff"), Some("Wolf"));
        assert_eq!(book.resolve_alias("bird"), Some("Falco"));
        assert_eq!(book.resolve_alias("not-a-list"), None);
    }

    #[test]
    fn bad_json_yields_empty_book() {
        assert!(NicknameBook::from_json("[1, 2]").is_empty());
        assert!(NicknameBook::from_json("garbage").is_empty());
    }
}
