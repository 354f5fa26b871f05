use crate::data::roster::Roster;

/// Extract the notes section belonging to `character`.
///
/// The notes file is one flat text block where a line holding exactly a
/// canonical name opens that character's section. The name line itself is a
/// marker and is consumed; every following line is captured verbatim (blank
/// lines and indentation included) until a line holding any other canonical
/// name ends the section for good. An empty capture counts as no notes.
pub fn section(notes: &str, character: &str, roster: &Roster) -> Option<String> {
    let mut capturing = false;
    let mut captured: Vec<&str> = Vec::new();

    for line in notes.lines() {
        let trimmed = line.trim();

        if trimmed == character {
            capturing = true;
            continue;
        }
        if capturing && roster.is_canonical(trimmed) {
            break;
        }
        if capturing {
            captured.push(line);
        }
    }

    if captured.is_empty() {
        None
    } else {
        Some(captured.join("\n"))
    }
}

/// Extract a named subsection, e.g. the out-of-shield punish block.
///
/// Capture starts at a line beginning with `header_prefix` + " " + the
/// character name; unlike `section`, that header line is part of the output.
/// Capture ends at a non-empty line holding exactly any canonical name.
pub fn subsection(
    block: &str,
    character: &str,
    header_prefix: &str,
    roster: &Roster,
) -> Option<String> {
    let marker = format!("{header_prefix} {character}");
    let mut capturing = false;
    let mut captured: Vec<&str> = Vec::new();

    for line in block.lines() {
        let trimmed = line.trim();

        if !capturing {
            if trimmed.starts_with(&marker) {
                capturing = true;
                captured.push(line);
            }
            continue;
        }
        if !trimmed.is_empty() && roster.is_canonical(trimmed) {
            break;
        }
        captured.push(line);
    }

    if captured.is_empty() {
        None
    } else {
        Some(captured.join("\n"))
    }
}

/// The general-notes view: the character's section with everything from the
/// first occurrence of the subsection header prefix cut off, so the notes
/// view and the punish view never show the same lines.
pub fn general_section(
    notes: &str,
    character: &str,
    header_prefix: &str,
    roster: &Roster,
) -> Option<String> {
    let full = section(notes, character, roster)?;
    let cut = match full.find(header_prefix) {
        Some(pos) => full[..pos].trim_end().to_string(),
        None => full,
    };

    if cut.is_empty() { None } else { Some(cut) }
}
