//! Single-line text input

use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
    /// Cursor position in chars
    cursor: usize,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: &str) -> Self {
        Self {
            value: value.to_string(),
            cursor: value.chars().count(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.cursor = value.chars().count();
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Insert pasted text; line breaks become spaces since the field is single-line
    pub fn insert_str(&mut self, text: &str) {
        let flat: String = text
            .chars()
            .filter(|c| *c != '\r')
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();

        let at = self.byte_index(self.cursor);
        self.value.insert_str(at, &flat);
        self.cursor += flat.chars().count();
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
    }

    pub fn delete(&mut self) {
        if self.cursor >= self.value.chars().count() {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.value.chars().count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    /// Terminal column of the cursor, accounting for wide characters
    ///
    /// Saturates at `u16::MAX` for absurdly long contents.
    pub fn cursor_column(&self) -> u16 {
        let at = self.byte_index(self.cursor);
        u16::try_from(self.value[..at].width()).unwrap_or(u16::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_and_backspace() {
        let mut field = TextField::new();
        for c in "What is X?".chars() {
            field.insert_char(c);
        }
        field.backspace();
        assert_eq!(field.value(), "What is X");
    }

    #[test]
    fn test_insert_in_middle() {
        let mut field = TextField::with_value("Bb");
        field.move_left();
        field.insert_char('o');
        assert_eq!(field.value(), "Bob");
    }

    #[test]
    fn test_delete_at_end_is_noop() {
        let mut field = TextField::with_value("abc");
        field.delete();
        assert_eq!(field.value(), "abc");
        field.move_home();
        field.delete();
        assert_eq!(field.value(), "bc");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut field = TextField::with_value("Gödel");
        field.move_left();
        field.move_left();
        field.move_left();
        field.backspace();
        assert_eq!(field.value(), "Gdel");
    }

    #[test]
    fn test_cursor_column_counts_wide_chars() {
        let field = TextField::with_value("論文");
        assert_eq!(field.cursor_column(), 4);
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut field = TextField::new();
        field.insert_str("line one\r\nline two");
        assert_eq!(field.value(), "line one line two");
        assert_eq!(field.cursor_column(), 17);
    }

    #[test]
    fn test_paste_in_middle_moves_cursor_past_it() {
        let mut field = TextField::with_value("ab");
        field.move_left();
        field.insert_str("XY");
        field.insert_char('!');
        assert_eq!(field.value(), "aXY!b");
    }

    #[test]
    fn test_huge_paste_saturates_cursor_column() {
        let mut field = TextField::new();
        field.insert_str(&"a".repeat(70_000));
        assert_eq!(field.value().len(), 70_000);
        assert_eq!(field.cursor_column(), u16::MAX);
    }
}
