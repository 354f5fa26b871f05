use crate::config::Config;
use crate::data::DataStore;
use crate::engine::LookupError;
use crate::engine::notes;
use crate::engine::practice::PracticeList;
use crate::store::json_store::{JsonStore, PracticeRepository};
use crate::store::schema::PracticeListData;
use crate::ui::components::character_list::CharacterRow;
use crate::ui::components::menu::Menu;
use crate::ui::line_input::LineInput;
use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppScreen {
    Menu,
    Lookup,
    Character,
    Practice,
    Roster,
    Settings,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharacterTab {
    Notes,
    AppleKills,
    Punishes,
}

impl CharacterTab {
    pub fn title(self) -> &'static str {
        match self {
            CharacterTab::Notes => "Notes",
            CharacterTab::AppleKills => "Apple Kills",
            CharacterTab::Punishes => "OoS Punishes",
        }
    }

    pub fn next(self) -> Self {
        match self {
            CharacterTab::Notes => CharacterTab::AppleKills,
            CharacterTab::AppleKills => CharacterTab::Punishes,
            CharacterTab::Punishes => CharacterTab::Notes,
        }
    }
}

/// Text destined for a display panel: real content, or a placeholder
/// message rendered dimmed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelText {
    Content(String),
    Placeholder(String),
}

impl PanelText {
    pub fn as_str(&self) -> &str {
        match self {
            PanelText::Content(s) | PanelText::Placeholder(s) => s,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, PanelText::Placeholder(_))
    }
}

pub struct App {
    pub screen: AppScreen,
    pub tab: CharacterTab,
    pub data: DataStore,
    pub practice: PracticeList,
    pub selected: Option<String>,
    pub input: LineInput,
    pub completion_candidates: Vec<String>,
    pub status: Option<String>,
    pub status_is_error: bool,
    pub menu: Menu<'static>,
    pub theme: &'static Theme,
    pub config: Config,
    pub repository: Option<Box<dyn PracticeRepository>>,
    pub should_quit: bool,
    pub panel_scroll: u16,
    pub roster_selected: usize,
    pub practice_selected: usize,
    pub settings_selected: usize,
}

impl App {
    pub fn new(config: Config) -> Self {
        let repository: Option<Box<dyn PracticeRepository>> = match JsonStore::new() {
            Ok(store) => Some(Box::new(store)),
            Err(_) => None,
        };
        let data = DataStore::load(&config.data_dir_path());
        Self::with_parts(config, data, repository)
    }

    /// Explicit assembly point: tests inject their own data set and
    /// repository here instead of touching global dirs.
    pub fn with_parts(
        config: Config,
        data: DataStore,
        repository: Option<Box<dyn PracticeRepository>>,
    ) -> Self {
        let loaded_theme = Theme::load(&config.theme).unwrap_or_default();
        let theme: &'static Theme = Box::leak(Box::new(loaded_theme));
        let menu = Menu::new(theme);

        let practice = repository
            .as_ref()
            .map(|r| PracticeList::from_names(r.load_practice().characters))
            .unwrap_or_default();

        let completion_candidates = data.completion_candidates();

        Self {
            screen: AppScreen::Menu,
            tab: CharacterTab::Notes,
            data,
            practice,
            selected: None,
            input: LineInput::new(""),
            completion_candidates,
            status: None,
            status_is_error: false,
            menu,
            theme,
            config,
            repository,
            should_quit: false,
            panel_scroll: 0,
            roster_selected: 0,
            practice_selected: 0,
            settings_selected: 0,
        }
    }

    // --- status line ---

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
        self.status_is_error = false;
    }

    pub fn set_error(&mut self, error: impl ToString) {
        self.status = Some(error.to_string());
        self.status_is_error = true;
    }

    pub fn clear_status(&mut self) {
        self.status = None;
        self.status_is_error = false;
    }

    // --- navigation ---

    pub fn go_to_menu(&mut self) {
        self.screen = AppScreen::Menu;
        self.clear_status();
    }

    pub fn open_lookup(&mut self) {
        self.input.clear();
        self.screen = AppScreen::Lookup;
        self.clear_status();
    }

    pub fn go_to_character(&mut self) {
        self.screen = AppScreen::Character;
        self.panel_scroll = 0;
    }

    pub fn go_to_practice(&mut self) {
        self.practice_selected = 0;
        self.screen = AppScreen::Practice;
        self.clear_status();
    }

    pub fn go_to_roster(&mut self) {
        self.roster_selected = 0;
        self.screen = AppScreen::Roster;
        self.clear_status();
    }

    pub fn go_to_settings(&mut self) {
        self.settings_selected = 0;
        self.screen = AppScreen::Settings;
        self.clear_status();
    }

    pub fn cycle_tab(&mut self) {
        self.tab = self.tab.next();
        self.panel_scroll = 0;
    }

    pub fn set_tab(&mut self, tab: CharacterTab) {
        self.tab = tab;
        self.panel_scroll = 0;
    }

    // --- user actions ---

    /// Resolve free-form input into the selection. Unrecognized input clears
    /// any previous selection rather than keeping a stale one.
    pub fn set_character(&mut self, input: &str) -> Result<(), LookupError> {
        if input.trim().is_empty() {
            return Err(LookupError::EmptyInput);
        }
        match self.data.resolve(input) {
            Some(canonical) => {
                let canonical = canonical.to_string();
                self.set_status(format!("Character set to {canonical}"));
                self.selected = Some(canonical);
                self.tab = CharacterTab::Notes;
                self.panel_scroll = 0;
                Ok(())
            }
            None => {
                self.selected = None;
                Err(LookupError::NotFound)
            }
        }
    }

    pub fn add_selected_to_practice(&mut self) {
        let Some(name) = self.selected.clone() else {
            self.set_error(LookupError::NoSelection);
            return;
        };
        self.add_to_practice(&name);
    }

    pub fn remove_selected_from_practice(&mut self) {
        let Some(name) = self.selected.clone() else {
            self.set_error(LookupError::NoSelection);
            return;
        };
        self.remove_from_practice(&name);
    }

    pub fn add_to_practice(&mut self, name: &str) {
        match self.practice.add(&self.data, name) {
            Ok(canonical) => {
                self.persist_practice();
                self.set_status(format!("{canonical} added to practice list."));
            }
            Err(e) => self.set_error(e),
        }
    }

    pub fn remove_from_practice(&mut self, name: &str) {
        match self.practice.remove(&self.data, name) {
            Ok(canonical) => {
                self.persist_practice();
                self.set_status(format!("{canonical} removed from practice list."));
            }
            Err(e) => self.set_error(e),
        }
    }

    /// Remove the highlighted row on the practice screen.
    pub fn remove_practice_at_selection(&mut self) {
        let names = self.practice.sorted();
        if let Some(name) = names.get(self.practice_selected) {
            let name = name.to_string();
            self.remove_from_practice(&name);
            let len = self.practice.len();
            if len == 0 {
                self.practice_selected = 0;
            } else if self.practice_selected >= len {
                self.practice_selected = len - 1;
            }
        }
    }

    fn persist_practice(&mut self) {
        // Full rewrite on every mutation; a failed save is not fatal.
        if let Some(ref repository) = self.repository {
            let _ = repository.save_practice(&PracticeListData::new(self.practice.names()));
        }
    }

    // --- panel text (what the character view tabs display) ---

    pub fn notes_text(&self) -> PanelText {
        let Some(ref selected) = self.selected else {
            return PanelText::Placeholder(LookupError::NoSelection.to_string());
        };
        match notes::general_section(
            &self.data.notes,
            selected,
            &self.config.punish_header,
            &self.data.roster,
        ) {
            Some(text) => PanelText::Content(text),
            None => PanelText::Placeholder("No notes found.".to_string()),
        }
    }

    pub fn punish_text(&self) -> PanelText {
        let Some(ref selected) = self.selected else {
            return PanelText::Placeholder(LookupError::NoSelection.to_string());
        };
        match notes::subsection(
            &self.data.notes,
            selected,
            &self.config.punish_header,
            &self.data.roster,
        ) {
            Some(text) => PanelText::Content(text),
            None => PanelText::Placeholder("No punish notes found.".to_string()),
        }
    }

    pub fn apple_kill_text(&self) -> PanelText {
        let Some(ref selected) = self.selected else {
            return PanelText::Placeholder(LookupError::NoSelection.to_string());
        };
        match self.data.apple_kills.get(selected) {
            Some(table) => PanelText::Content(table.render()),
            None => PanelText::Placeholder(LookupError::NoData.to_string()),
        }
    }

    pub fn current_panel_text(&self) -> PanelText {
        match self.tab {
            CharacterTab::Notes => self.notes_text(),
            CharacterTab::AppleKills => self.apple_kill_text(),
            CharacterTab::Punishes => self.punish_text(),
        }
    }

    // --- list rows ---

    pub fn roster_rows(&self) -> Vec<CharacterRow> {
        self.data
            .roster
            .sorted()
            .into_iter()
            .map(|name| CharacterRow {
                in_practice: self.practice.contains(name),
                is_main: name == self.config.main_character,
                name: name.to_string(),
            })
            .collect()
    }

    pub fn practice_rows(&self) -> Vec<CharacterRow> {
        self.practice
            .sorted()
            .into_iter()
            .map(|name| CharacterRow {
                in_practice: true,
                is_main: name == self.config.main_character,
                name: name.to_string(),
            })
            .collect()
    }

    /// Select the highlighted roster row and jump to the character view.
    pub fn select_roster_row(&mut self) {
        let rows = self.roster_rows();
        if let Some(row) = rows.get(self.roster_selected) {
            let name = row.name.clone();
            // Roster rows are canonical already; set_character cannot fail here
            // unless the roster itself is empty.
            let _ = self.set_character(&name);
            self.go_to_character();
        }
    }

    // --- settings ---

    pub fn settings_cycle_theme(&mut self, forward: bool) {
        let themes = Theme::available_themes();
        if themes.is_empty() {
            return;
        }
        let current = themes
            .iter()
            .position(|t| *t == self.config.theme)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % themes.len()
        } else {
            (current + themes.len() - 1) % themes.len()
        };
        self.config.theme = themes[next].clone();

        if let Some(theme) = Theme::load(&self.config.theme) {
            let theme: &'static Theme = Box::leak(Box::new(theme));
            self.theme = theme;
            self.menu.theme = theme;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use anyhow::Result;

    use crate::data::applekill::AppleKillBook;
    use crate::data::nicknames::NicknameBook;
    use crate::data::roster::Roster;

    /// In-memory repository recording every save, so tests can check the
    /// persist-on-mutation contract without a filesystem.
    struct MemoryRepo {
        saved: Rc<RefCell<Vec<Vec<String>>>>,
        initial: Vec<String>,
    }

    impl PracticeRepository for MemoryRepo {
        fn load_practice(&self) -> PracticeListData {
            PracticeListData::new(self.initial.clone())
        }

        fn save_practice(&self, data: &PracticeListData) -> Result<()> {
            self.saved.borrow_mut().push(data.characters.clone());
            Ok(())
        }
    }

    fn test_data() -> DataStore {
        DataStore {
            roster: Roster::from_json(
                r#"{"characters": ["Mario", "Luigi", "Donkey Kong", "Pac-Man"]}"#,
            ),
            nicknames: NicknameBook::from_json(r#"{"Donkey Kong": ["DK"]}"#),
            apple_kills: AppleKillBook::from_json(
                r#"{"Mario": {"BF_Kalos": "50%", "SV_Town": "40%", "SBF_FD_PS2_Hollow": "30%"}}"#,
            ),
            notes: "Mario\nline1\nline2\nOut of Shield Punishes vs Mario\n- up b\nLuigi\nline3"
                .to_string(),
        }
    }

    fn test_app() -> (App, Rc<RefCell<Vec<Vec<String>>>>) {
        test_app_with_initial(Vec::new())
    }

    fn test_app_with_initial(initial: Vec<String>) -> (App, Rc<RefCell<Vec<Vec<String>>>>) {
        let saved = Rc::new(RefCell::new(Vec::new()));
        let repo = MemoryRepo {
            saved: Rc::clone(&saved),
            initial,
        };
        let app = App::with_parts(Config::default(), test_data(), Some(Box::new(repo)));
        (app, saved)
    }

    #[test]
    fn set_character_resolves_and_reports() {
        let (mut app, _) = test_app();
        assert_eq!(app.set_character("dk"), Ok(()));
        assert_eq!(app.selected.as_deref(), Some("Donkey Kong"));
        assert_eq!(app.status.as_deref(), Some("Character set to Donkey Kong"));
    }

    #[test]
    fn unresolvable_input_clears_selection() {
        let (mut app, _) = test_app();
        app.set_character("Mario").unwrap();
        assert_eq!(app.set_character("Ridley"), Err(LookupError::NotFound));
        assert_eq!(app.selected, None);
    }

    #[test]
    fn blank_input_is_empty_input_error() {
        let (mut app, _) = test_app();
        assert_eq!(app.set_character("   "), Err(LookupError::EmptyInput));
    }

    #[test]
    fn actions_without_selection_report_no_selection() {
        let (mut app, _) = test_app();
        assert_eq!(app.set_character("nobody"), Err(LookupError::NotFound));

        app.add_selected_to_practice();
        assert_eq!(app.status.as_deref(), Some("No character selected."));
        assert!(app.status_is_error);

        assert_eq!(
            app.notes_text(),
            PanelText::Placeholder("No character selected.".to_string())
        );
        assert_eq!(
            app.apple_kill_text(),
            PanelText::Placeholder("No character selected.".to_string())
        );
    }

    #[test]
    fn add_persists_and_reports() {
        let (mut app, saved) = test_app();
        app.set_character("mario").unwrap();
        app.add_selected_to_practice();

        assert_eq!(app.status.as_deref(), Some("Mario added to practice list."));
        assert_eq!(*saved.borrow(), vec![vec!["Mario".to_string()]]);
    }

    #[test]
    fn add_then_remove_round_trips_and_persists_each_step() {
        let (mut app, saved) = test_app();
        app.add_to_practice("DK");
        app.remove_from_practice("donkey kong");

        assert!(app.practice.is_empty());
        assert_eq!(
            app.status.as_deref(),
            Some("Donkey Kong removed from practice list.")
        );
        assert_eq!(saved.borrow().len(), 2);
        assert!(saved.borrow()[1].is_empty());
    }

    #[test]
    fn remove_not_in_list_is_distinct_from_not_found() {
        let (mut app, saved) = test_app();
        app.remove_from_practice("Mario");
        assert_eq!(
            app.status.as_deref(),
            Some("Character not found in practice list.")
        );

        app.remove_from_practice("Ridley");
        assert_eq!(app.status.as_deref(), Some("Character not recognized."));

        // Failed removals never persist
        assert!(saved.borrow().is_empty());
    }

    #[test]
    fn practice_list_rehydrates_from_repository() {
        let (app, _) =
            test_app_with_initial(vec!["Pac-Man".to_string(), "Mario".to_string()]);
        assert_eq!(app.practice.sorted(), vec!["Mario", "Pac-Man"]);
    }

    #[test]
    fn notes_tab_shows_section_without_punish_block() {
        let (mut app, _) = test_app();
        app.set_character("Mario").unwrap();
        assert_eq!(
            app.notes_text(),
            PanelText::Content("line1\nline2".to_string())
        );
    }

    #[test]
    fn punish_tab_shows_subsection_with_header() {
        let (mut app, _) = test_app();
        app.set_character("Mario").unwrap();
        assert_eq!(
            app.punish_text(),
            PanelText::Content("Out of Shield Punishes vs Mario\n- up b".to_string())
        );
    }

    #[test]
    fn notes_and_punish_views_never_overlap() {
        let (mut app, _) = test_app();
        app.set_character("Mario").unwrap();
        let notes = app.notes_text();
        let punish = app.punish_text();
        assert!(!notes.as_str().contains("up b"));
        assert!(!punish.as_str().contains("line1"));
    }

    #[test]
    fn missing_notes_give_placeholder() {
        let (mut app, _) = test_app();
        app.set_character("Pac-Man").unwrap();
        assert_eq!(
            app.notes_text(),
            PanelText::Placeholder("No notes found.".to_string())
        );
    }

    #[test]
    fn apple_kill_tab_renders_table_or_placeholder() {
        let (mut app, _) = test_app();
        app.set_character("Mario").unwrap();
        assert_eq!(
            app.apple_kill_text(),
            PanelText::Content(
                "🍎 BF and Kalos: 50%\n🍎 SV and Town: 40%\n🍎 SBF, FD, PS2, and Hollow: 30%"
                    .to_string()
            )
        );

        app.set_character("Luigi").unwrap();
        assert_eq!(
            app.apple_kill_text(),
            PanelText::Placeholder("No apple kill data found.".to_string())
        );
    }

    #[test]
    fn roster_rows_are_sorted_and_marked() {
        let (mut app, _) = test_app();
        app.add_to_practice("DK");
        let rows = app.roster_rows();
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Donkey Kong", "Luigi", "Mario", "Pac-Man"]);

        let dk = rows.iter().find(|r| r.name == "Donkey Kong").unwrap();
        assert!(dk.in_practice);
        let pac = rows.iter().find(|r| r.name == "Pac-Man").unwrap();
        assert!(pac.is_main);
        assert!(!pac.in_practice);
    }

    #[test]
    fn remove_at_selection_clamps_cursor() {
        let (mut app, _) = test_app();
        app.add_to_practice("Mario");
        app.add_to_practice("Luigi");
        app.practice_selected = 1;
        app.remove_practice_at_selection();
        assert_eq!(app.practice.sorted(), vec!["Luigi"]);
        assert_eq!(app.practice_selected, 0);
    }

    #[test]
    fn select_roster_row_jumps_to_character_view() {
        let (mut app, _) = test_app();
        app.go_to_roster();
        app.roster_selected = 2; // "Mario" in sorted order
        app.select_roster_row();
        assert_eq!(app.screen, AppScreen::Character);
        assert_eq!(app.selected.as_deref(), Some("Mario"));
    }

    #[test]
    fn tab_cycles_through_all_three_views() {
        let (mut app, _) = test_app();
        assert_eq!(app.tab, CharacterTab::Notes);
        app.cycle_tab();
        assert_eq!(app.tab, CharacterTab::AppleKills);
        app.cycle_tab();
        assert_eq!(app.tab, CharacterTab::Punishes);
        app.cycle_tab();
        assert_eq!(app.tab, CharacterTab::Notes);
    }

    #[test]
    fn app_works_without_a_repository() {
        let mut app = App::with_parts(Config::default(), test_data(), None);
        app.add_to_practice("Mario");
        assert_eq!(app.status.as_deref(), Some("Mario added to practice list."));
        assert!(app.practice.contains("Mario"));
    }
}
