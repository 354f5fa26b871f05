use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

/// Persisted practice list. The whole file is rewritten on every mutation;
/// there is no incremental update path.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PracticeListData {
    pub schema_version: u32,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub characters: Vec<String>,
}

impl PracticeListData {
    pub fn new(characters: Vec<String>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            updated_at: Utc::now(),
            characters,
        }
    }
}

impl Default for PracticeListData {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
