use serde::Deserialize;

/// Ordered list of canonical character names from `characters.json`.
///
/// Order matters for resolution precedence; the source may contain
/// duplicates and they are kept as-is.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    names: Vec<String>,
}

#[derive(Deserialize)]
struct RosterFile {
    #[serde(default)]
    characters: Vec<String>,
}

impl Roster {
    pub fn from_names(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Parse `{"characters": [...]}`. Any parse failure yields an empty roster.
    pub fn from_json(text: &str) -> Self {
        let file: RosterFile = serde_json::from_str(text).unwrap_or(RosterFile {
            characters: Vec::new(),
        });
        Self {
            names: file.characters,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|s| s.as_str())
    }

    /// True if `line` is exactly a canonical name (case-sensitive).
    /// Used by the notes sectioner to spot section delimiters.
    pub fn is_canonical(&self, line: &str) -> bool {
        self.names.iter().any(|n| n == line)
    }

    /// First roster name matching `lower` case-insensitively, in roster order.
    /// Returns the canonical casing, not the caller's.
    pub fn find_case_insensitive(&self, lower: &str) -> Option<&str> {
        self.names
            .iter()
            .find(|n| n.to_lowercase() == lower)
            .map(|s| s.as_str())
    }

    /// All names sorted ascending, for the roster view.
    pub fn sorted(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.names.iter().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}
