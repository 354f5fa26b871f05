use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Submit,
    Cancel,
}

/// Single-line editor for the character lookup box. Tab cycles through
/// completions drawn from the candidate list the caller passes in (canonical
/// names plus aliases), matched case-insensitively by prefix.
pub struct LineInput {
    text: String,
    /// Cursor position as a char index (0 = before first char).
    cursor: usize,
    completions: Vec<String>,
    completion_index: Option<usize>,
    /// Text snapshot when Tab was first pressed.
    completion_seed: String,
}

impl LineInput {
    pub fn new(text: &str) -> Self {
        let cursor = text.chars().count();
        Self {
            text: text.to_string(),
            cursor,
            completions: Vec::new(),
            completion_index: None,
            completion_seed: String::new(),
        }
    }

    pub fn value(&self) -> &str {
        &self.text
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
        self.reset_completion();
    }

    /// Returns (before_cursor, cursor_char, after_cursor) for styled rendering.
    /// When cursor is at end of text, cursor_char is None.
    pub fn render_parts(&self) -> (&str, Option<char>, &str) {
        let byte_offset = self.char_to_byte(self.cursor);
        if self.cursor >= self.text.chars().count() {
            (&self.text, None, "")
        } else {
            let ch = self.text[byte_offset..].chars().next().unwrap();
            let next_byte = byte_offset + ch.len_utf8();
            (&self.text[..byte_offset], Some(ch), &self.text[next_byte..])
        }
    }

    pub fn handle(&mut self, key: KeyEvent, candidates: &[String]) -> InputResult {
        match key.code {
            KeyCode::Esc => return InputResult::Cancel,
            KeyCode::Enter => return InputResult::Submit,

            KeyCode::Left => {
                self.reset_completion();
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
            }
            KeyCode::Right => {
                self.reset_completion();
                let len = self.text.chars().count();
                if self.cursor < len {
                    self.cursor += 1;
                }
            }
            KeyCode::Home => {
                self.reset_completion();
                self.cursor = 0;
            }
            KeyCode::End => {
                self.reset_completion();
                self.cursor = self.text.chars().count();
            }
            KeyCode::Backspace => {
                self.reset_completion();
                if self.cursor > 0 {
                    let byte_offset = self.char_to_byte(self.cursor - 1);
                    let ch = self.text[byte_offset..].chars().next().unwrap();
                    self.text
                        .replace_range(byte_offset..byte_offset + ch.len_utf8(), "");
                    self.cursor -= 1;
                }
            }
            KeyCode::Delete => {
                self.reset_completion();
                let len = self.text.chars().count();
                if self.cursor < len {
                    let byte_offset = self.char_to_byte(self.cursor);
                    let ch = self.text[byte_offset..].chars().next().unwrap();
                    self.text
                        .replace_range(byte_offset..byte_offset + ch.len_utf8(), "");
                }
            }
            KeyCode::Tab => {
                self.tab_complete(true, candidates);
            }
            KeyCode::BackTab => {
                self.tab_complete(false, candidates);
            }
            KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.reset_completion();
                self.cursor = 0;
            }
            KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.reset_completion();
                self.cursor = self.text.chars().count();
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.reset_completion();
                self.text.clear();
                self.cursor = 0;
            }
            KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.reset_completion();
                self.delete_word_back();
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.reset_completion();
                let byte_offset = self.char_to_byte(self.cursor);
                self.text.insert(byte_offset, ch);
                self.cursor += 1;
            }
            _ => {}
        }
        InputResult::Continue
    }

    /// Convert char index to byte offset.
    fn char_to_byte(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(b, _)| b)
            .unwrap_or(self.text.len())
    }

    /// Delete word before cursor (unix-word-rubout: skip whitespace, then non-whitespace).
    fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let chars: Vec<char> = self.text.chars().collect();
        let mut pos = self.cursor;

        while pos > 0 && chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        while pos > 0 && !chars[pos - 1].is_whitespace() {
            pos -= 1;
        }

        let start_byte = self.char_to_byte(pos);
        let end_byte = self.char_to_byte(self.cursor);
        self.text.replace_range(start_byte..end_byte, "");
        self.cursor = pos;
    }

    fn reset_completion(&mut self) {
        self.completions.clear();
        self.completion_index = None;
        self.completion_seed.clear();
    }

    fn tab_complete(&mut self, forward: bool, candidates: &[String]) {
        // Only activate when cursor is at end of line
        let len = self.text.chars().count();
        if self.cursor < len {
            return;
        }

        if self.completion_index.is_none() {
            self.completion_seed = self.text.clone();
            self.completions = Self::matching_candidates(&self.completion_seed, candidates);
            if self.completions.is_empty() {
                return;
            }
            self.completion_index = Some(0);
            self.apply_completion(0);
        } else if !self.completions.is_empty() {
            let idx = self.completion_index.unwrap();
            let count = self.completions.len();
            let next = if forward {
                (idx + 1) % count
            } else {
                (idx + count - 1) % count
            };
            self.completion_index = Some(next);
            self.apply_completion(next);
        }
    }

    fn apply_completion(&mut self, idx: usize) {
        self.text = self.completions[idx].clone();
        self.cursor = self.text.chars().count();
    }

    /// Case-insensitive prefix matches in candidate order, deduplicated.
    /// An empty seed matches everything so plain Tab browses the roster.
    fn matching_candidates(seed: &str, candidates: &[String]) -> Vec<String> {
        let lower_seed = seed.to_lowercase();
        let mut out: Vec<String> = Vec::new();
        for candidate in candidates {
            if candidate.to_lowercase().starts_with(&lower_seed)
                && !out.iter().any(|c| c == candidate)
            {
                out.push(candidate.clone());
            }
        }
        out
    }
}
