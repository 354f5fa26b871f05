use crate::data::nicknames::NicknameBook;
use crate::data::roster::Roster;

/// Translate free-form input into a canonical roster name.
///
/// Exact (case-insensitive) roster match wins outright; only then are
/// nickname entries scanned, in their definition order. The returned string
/// always carries the canonical casing from the roster or nickname file,
/// never the caller's.
pub fn resolve<'a>(roster: &'a Roster, nicknames: &'a NicknameBook, input: &str) -> Option<&'a str> {
    let lower = input.trim().to_lowercase();
    if lower.is_empty() {
        return None;
    }

    if let Some(canonical) = roster.find_case_insensitive(&lower) {
        return Some(canonical);
    }

    nicknames.resolve_alias(&lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        Roster::from_names(vec![
            "Mario".to_string(),
            "Donkey Kong".to_string(),
            "Pac-Man".to_string(),
            "Meta Knight".to_string(),
        ])
    }

    fn nicknames() -> NicknameBook {
        NicknameBook::from_entries(vec![
            ("Donkey Kong".to_string(), vec!["DK".to_string()]),
            (
                "Meta Knight".to_string(),
                vec!["MK".to_string(), "Mario".to_string()],
            ),
            ("Pac-Man".to_string(), vec!["Pac".to_string()]),
        ])
    }

    #[test]
    fn roster_names_resolve_to_themselves_any_casing() {
        let roster = roster();
        let book = nicknames();
        for name in ["Mario", "Donkey Kong", "Pac-Man", "Meta Knight"] {
            assert_eq!(resolve(&roster, &book, name), Some(name));
            assert_eq!(resolve(&roster, &book, &name.to_uppercase()), Some(name));
            assert_eq!(resolve(&roster, &book, &name.to_lowercase()), Some(name));
        }
    }

    #[test]
    fn aliases_resolve_to_their_owner() {
        let roster = roster();
        let book = nicknames();
        assert_eq!(resolve(&roster, &book, "dk"), Some("Donkey Kong"));
        assert_eq!(resolve(&roster, &book, "PAC"), Some("Pac-Man"));
    }

    #[test]
    fn roster_exact_match_beats_colliding_alias() {
        // "Mario" is both a roster name and (maliciously) a Meta Knight alias.
        let roster = roster();
        let book = nicknames();
        assert_eq!(resolve(&roster, &book, "mario"), Some("Mario"));
    }

    #[test]
    fn unknown_input_is_none() {
        assert_eq!(resolve(&roster(), &nicknames(), "Ridley"), None);
    }

    #[test]
    fn blank_input_is_none() {
        assert_eq!(resolve(&roster(), &nicknames(), ""), None);
        assert_eq!(resolve(&roster(), &nicknames(), "   "), None);
    }

    #[test]
    fn input_is_trimmed_before_matching() {
        assert_eq!(resolve(&roster(), &nicknames(), "  dk  "), Some("Donkey Kong"));
    }
}
