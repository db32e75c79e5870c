//! Single-line text editing on top of a plain `String`.

/// Longest value accepted by a free-text field.
pub const MAX_FIELD_LEN: usize = 80;

/// Cursor for editing one line. Positions count characters, not bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineEditor {
    cursor: usize,
}

impl LineEditor {
    /// Place the cursor after the last character of `value`.
    pub fn at_end(value: &str) -> Self {
        Self {
            cursor: value.chars().count(),
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn move_cursor(&mut self, value: &str, delta: isize) {
        let len = value.chars().count() as isize;
        self.cursor = (self.cursor as isize + delta).clamp(0, len) as usize;
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self, value: &str) {
        self.cursor = value.chars().count();
    }

    /// Insert `ch` at the cursor. Returns whether the value changed.
    pub fn insert(&mut self, value: &mut String, ch: char, max_len: usize) -> bool {
        if ch.is_control() || value.chars().count() >= max_len {
            return false;
        }
        let at = byte_index(value, self.cursor);
        value.insert(at, ch);
        self.cursor += 1;
        true
    }

    pub fn backspace(&mut self, value: &mut String) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = byte_index(value, self.cursor);
        value.remove(at);
        true
    }

    pub fn delete(&mut self, value: &mut String) -> bool {
        if self.cursor >= value.chars().count() {
            return false;
        }
        let at = byte_index(value, self.cursor);
        value.remove(at);
        true
    }
}

fn byte_index(value: &str, char_pos: usize) -> usize {
    value
        .char_indices()
        .nth(char_pos)
        .map(|(idx, _)| idx)
        .unwrap_or(value.len())
}

/// Characters a `YYYY-MM-DD` field will take.
pub fn is_date_char(ch: char) -> bool {
    ch.is_ascii_digit() || ch == '-'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_multibyte_names_by_character() {
        let mut value = "Odegaard".to_string();
        let mut editor = LineEditor::default();
        editor.delete(&mut value);
        assert!(editor.insert(&mut value, 'Ø', MAX_FIELD_LEN));
        assert_eq!(value, "Ødegaard");

        editor.move_end(&value);
        assert_eq!(editor.cursor(), 8);
        editor.move_cursor(&value, -7);
        assert!(editor.backspace(&mut value));
        assert_eq!(value, "degaard");
        assert_eq!(editor.cursor(), 0);
        assert!(!editor.backspace(&mut value));
    }

    #[test]
    fn respects_length_limit_and_control_chars() {
        let mut value = "abc".to_string();
        let mut editor = LineEditor::at_end(&value);
        assert!(!editor.insert(&mut value, 'd', 3));
        assert!(!editor.insert(&mut value, '\u{7}', 10));
        assert_eq!(value, "abc");
    }

    #[test]
    fn cursor_is_clamped() {
        let value = "ab";
        let mut editor = LineEditor::default();
        editor.move_cursor(value, -3);
        assert_eq!(editor.cursor(), 0);
        editor.move_cursor(value, 9);
        assert_eq!(editor.cursor(), 2);
    }
}
