use std::fs;
use std::path::Path;

use rust_embed::Embed;

use crate::data::applekill::AppleKillBook;
use crate::data::nicknames::NicknameBook;
use crate::data::roster::Roster;
use crate::engine::resolver;

/// Default data set shipped with the binary. A file of the same name in the
/// configured data directory takes precedence.
#[derive(Embed)]
#[folder = "assets/data/"]
struct DataAssets;

pub const ROSTER_FILE: &str = "characters.json";
pub const NICKNAMES_FILE: &str = "nicknames.json";
pub const APPLEKILL_FILE: &str = "applekill.json";
pub const NOTES_FILE: &str = "notes.txt";

/// All loaded reference data. Populated once at startup and read-only after.
#[derive(Clone, Debug, Default)]
pub struct DataStore {
    pub roster: Roster,
    pub nicknames: NicknameBook,
    pub apple_kills: AppleKillBook,
    pub notes: String,
}

/// User file first, then the bundled asset. Returns None only when neither
/// exists (e.g. a bundled name was removed).
fn read_source(data_dir: &Path, name: &str) -> Option<String> {
    let user_path = data_dir.join(name);
    if let Ok(content) = fs::read_to_string(&user_path) {
        return Some(content);
    }

    let file = DataAssets::get(name)?;
    std::str::from_utf8(file.data.as_ref())
        .ok()
        .map(|s| s.to_string())
}

impl DataStore {
    /// Best-effort load of the four sources. Each source degrades to an empty
    /// default on its own: a missing or unparsable file never aborts the
    /// others and is not surfaced as an error.
    pub fn load(data_dir: &Path) -> Self {
        let roster = read_source(data_dir, ROSTER_FILE)
            .map(|text| Roster::from_json(&text))
            .unwrap_or_default();
        let nicknames = read_source(data_dir, NICKNAMES_FILE)
            .map(|text| NicknameBook::from_json(&text))
            .unwrap_or_default();
        let apple_kills = read_source(data_dir, APPLEKILL_FILE)
            .map(|text| AppleKillBook::from_json(&text))
            .unwrap_or_default();
        let notes = read_source(data_dir, NOTES_FILE).unwrap_or_default();

        Self {
            roster,
            nicknames,
            apple_kills,
            notes,
        }
    }

    pub fn resolve(&self, input: &str) -> Option<&str> {
        resolver::resolve(&self.roster, &self.nicknames, input)
    }

    /// Canonical names plus every alias, for lookup tab-completion.
    pub fn completion_candidates(&self) -> Vec<String> {
        let mut candidates: Vec<String> = self.roster.iter().map(|n| n.to_string()).collect();
        candidates.extend(self.nicknames.all_aliases().map(|a| a.to_string()));
        candidates
    }
}
