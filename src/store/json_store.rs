use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Serialize, de::DeserializeOwned};

use crate::store::schema::PracticeListData;

const PRACTICE_FILE: &str = "practice_list.json";

/// Storage backend seam: the practice list manager only talks to this trait,
/// so the JSON file store can be swapped for anything else (including the
/// in-memory store the tests use) without touching list logic.
pub trait PracticeRepository {
    fn load_practice(&self) -> PracticeListData;
    fn save_practice(&self, data: &PracticeListData) -> Result<()>;
}

pub struct JsonStore {
    base_dir: PathBuf,
}

impl JsonStore {
    pub fn new() -> Result<Self> {
        let base_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("matchlab");
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn with_base_dir(base_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    fn file_path(&self, name: &str) -> PathBuf {
        self.base_dir.join(name)
    }

    fn load<T: DeserializeOwned + Default>(&self, name: &str) -> T {
        let path = self.file_path(name);
        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
                Err(_) => T::default(),
            }
        } else {
            T::default()
        }
    }

    /// Atomic save: write to a sibling .tmp, fsync, rename over the target.
    fn save<T: Serialize>(&self, name: &str, data: &T) -> Result<()> {
        let path = self.file_path(name);
        let tmp_path = path.with_extension("tmp");

        let json = serde_json::to_string_pretty(data)?;
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;

        fs::rename(&tmp_path, &path)?;
        Ok(())
    }
}

impl PracticeRepository for JsonStore {
    fn load_practice(&self) -> PracticeListData {
        self.load(PRACTICE_FILE)
    }

    fn save_practice(&self, data: &PracticeListData) -> Result<()> {
        self.save(PRACTICE_FILE, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::schema::SCHEMA_VERSION;
    use tempfile::TempDir;

    fn make_test_store() -> (TempDir, JsonStore) {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::with_base_dir(dir.path().to_path_buf()).unwrap();
        (dir, store)
    }

    #[test]
    fn missing_file_loads_default() {
        let (_dir, store) = make_test_store();
        let data = store.load_practice();
        assert_eq!(data.schema_version, SCHEMA_VERSION);
        assert!(data.characters.is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let (_dir, store) = make_test_store();
        let data = PracticeListData::new(vec!["Mario".to_string(), "Snake".to_string()]);
        store.save_practice(&data).unwrap();

        let loaded = store.load_practice();
        assert_eq!(loaded.characters, vec!["Mario", "Snake"]);
        assert_eq!(loaded.schema_version, SCHEMA_VERSION);
    }

    #[test]
    fn corrupt_file_loads_default() {
        let (dir, store) = make_test_store();
        fs::write(dir.path().join(PRACTICE_FILE), "not json at all").unwrap();
        assert!(store.load_practice().characters.is_empty());
    }

    #[test]
    fn save_leaves_no_tmp_file_behind() {
        let (dir, store) = make_test_store();
        store
            .save_practice(&PracticeListData::new(vec!["Fox".to_string()]))
            .unwrap();

        let tmp_files: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().and_then(|x| x.to_str()) == Some("tmp"))
            .collect();
        assert!(tmp_files.is_empty());
        assert!(store.file_path(PRACTICE_FILE).exists());
    }

    #[test]
    fn save_overwrites_wholesale() {
        let (_dir, store) = make_test_store();
        store
            .save_practice(&PracticeListData::new(vec![
                "Mario".to_string(),
                "Fox".to_string(),
            ]))
            .unwrap();
        store
            .save_practice(&PracticeListData::new(vec!["Kirby".to_string()]))
            .unwrap();

        assert_eq!(store.load_practice().characters, vec!["Kirby"]);
    }
}
