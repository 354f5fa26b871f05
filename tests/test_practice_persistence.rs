use std::fs;

use tempfile::TempDir;

use matchlab::data::DataStore;
use matchlab::data::applekill::AppleKillBook;
use matchlab::data::nicknames::NicknameBook;
use matchlab::data::roster::Roster;
use matchlab::engine::practice::PracticeList;
use matchlab::store::json_store::{JsonStore, PracticeRepository};
use matchlab::store::schema::{PracticeListData, SCHEMA_VERSION};

fn fixture_data() -> DataStore {
    DataStore {
        roster: Roster::from_json(
            r#"{"characters": ["Mario", "Luigi", "Donkey Kong", "Pikachu", "Pac-Man"]}"#,
        ),
        nicknames: NicknameBook::from_json(
            r#"{"Donkey Kong": ["DK"], "Pac-Man": ["Pac", "Pacman"]}"#,
        ),
        apple_kills: AppleKillBook::default(),
        notes: String::new(),
    }
}

/// Drive the full practice flow end to end through the real file store:
/// resolve nicknames, mutate the list, persist after every mutation, then
/// rehydrate from disk as a fresh process would.
#[test]
fn practice_list_survives_restart() {
    let dir = TempDir::new().unwrap();
    let data = fixture_data();

    {
        let store = JsonStore::with_base_dir(dir.path().to_path_buf()).unwrap();
        let mut list = PracticeList::from_names(store.load_practice().characters);
        assert!(list.is_empty());

        assert_eq!(list.add(&data, "dk"), Ok("Donkey Kong".to_string()));
        store.save_practice(&PracticeListData::new(list.names())).unwrap();

        assert_eq!(list.add(&data, "PIKACHU"), Ok("Pikachu".to_string()));
        store.save_practice(&PracticeListData::new(list.names())).unwrap();
    }

    // "Restart": new store over the same directory
    let store = JsonStore::with_base_dir(dir.path().to_path_buf()).unwrap();
    let loaded = store.load_practice();
    assert_eq!(loaded.schema_version, SCHEMA_VERSION);

    let mut list = PracticeList::from_names(loaded.characters);
    assert_eq!(list.sorted(), vec!["Donkey Kong", "Pikachu"]);

    // Aliases still resolve against the rehydrated list
    assert_eq!(list.remove(&data, "Dk"), Ok("Donkey Kong".to_string()));
    store.save_practice(&PracticeListData::new(list.names())).unwrap();

    let reloaded = JsonStore::with_base_dir(dir.path().to_path_buf()).unwrap();
    assert_eq!(reloaded.load_practice().characters, vec!["Pikachu"]);
}

#[test]
fn corrupt_practice_file_degrades_to_empty_list() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("practice_list.json"), "][ nope").unwrap();

    let store = JsonStore::with_base_dir(dir.path().to_path_buf()).unwrap();
    let list = PracticeList::from_names(store.load_practice().characters);
    assert!(list.is_empty());

    // And the next save repairs the file
    let mut list = list;
    let data = fixture_data();
    list.add(&data, "Pac").unwrap();
    store.save_practice(&PracticeListData::new(list.names())).unwrap();

    assert_eq!(store.load_practice().characters, vec!["Pac-Man"]);
}

#[test]
fn practice_file_is_readable_json_with_schema_version() {
    let dir = TempDir::new().unwrap();
    let store = JsonStore::with_base_dir(dir.path().to_path_buf()).unwrap();
    store
        .save_practice(&PracticeListData::new(vec!["Luigi".to_string()]))
        .unwrap();

    let raw = fs::read_to_string(dir.path().join("practice_list.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["schema_version"], SCHEMA_VERSION);
    assert_eq!(value["characters"][0], "Luigi");
    assert!(value["updated_at"].is_string());
}
