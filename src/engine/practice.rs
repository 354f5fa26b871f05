use std::collections::BTreeSet;

use crate::data::DataStore;
use crate::engine::error::LookupError;

/// The user's practice list: a deduplicated set of canonical names.
/// Mutations report the canonical name they acted on so callers can build
/// the confirmation message; persistence is the caller's job (every
/// mutation is followed by a full save through the repository).
#[derive(Clone, Debug, Default)]
pub struct PracticeList {
    members: BTreeSet<String>,
}

impl PracticeList {
    /// Rehydrate from persisted names. Duplicates collapse silently.
    pub fn from_names(names: Vec<String>) -> Self {
        Self {
            members: names.into_iter().collect(),
        }
    }

    /// Resolve `name` and insert the canonical result. Inserting a character
    /// that is already present is a success, not an error.
    pub fn add(&mut self, data: &DataStore, name: &str) -> Result<String, LookupError> {
        let canonical = data.resolve(name).ok_or(LookupError::NotFound)?;
        self.members.insert(canonical.to_string());
        Ok(canonical.to_string())
    }

    /// Resolve `name` and remove it. A resolvable character that is not in
    /// the list is `NotInList`, distinct from an unresolvable `NotFound`.
    pub fn remove(&mut self, data: &DataStore, name: &str) -> Result<String, LookupError> {
        let canonical = data.resolve(name).ok_or(LookupError::NotFound)?;
        if self.members.remove(canonical) {
            Ok(canonical.to_string())
        } else {
            Err(LookupError::NotInList)
        }
    }

    pub fn contains(&self, canonical: &str) -> bool {
        self.members.contains(canonical)
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Members sorted lexicographically ascending.
    pub fn sorted(&self) -> Vec<&str> {
        self.members.iter().map(|s| s.as_str()).collect()
    }

    /// Owned names for serialization.
    pub fn names(&self) -> Vec<String> {
        self.members.iter().cloned().collect()
    }
}
