//! Text field helpers built on `tui-textarea`.
//!
//! Every text field in the app is a [`TextArea`]. Search boxes and most form
//! fields are single-line; only the notes field accepts newlines.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::{CursorMove, TextArea};

/// Creates an empty text field showing `placeholder`.
#[must_use]
pub fn text_field(placeholder: &str) -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_placeholder_text(placeholder);
    textarea
}

/// Replaces the content of `textarea`, keeping its placeholder.
pub fn set_text(textarea: &mut TextArea<'static>, text: &str) {
    let placeholder = textarea.placeholder_text().to_string();
    let mut replaced = TextArea::new(text.split('\n').map(str::to_string).collect());
    replaced.set_placeholder_text(placeholder);
    replaced.move_cursor(CursorMove::Bottom);
    replaced.move_cursor(CursorMove::End);
    *textarea = replaced;
}

/// Returns the full text of `textarea`.
#[must_use]
pub fn text_of(textarea: &TextArea<'_>) -> String {
    textarea.lines().join("\n")
}

/// Normalizes pasted text for insertion.
///
/// Line endings become `\n` and control characters other than newlines are
/// dropped. For single-line fields newlines are replaced by spaces.
#[must_use]
pub fn sanitize_paste(text: &str, multiline: bool) -> String {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    normalized
        .chars()
        .filter(|c| !c.is_control() || *c == '\n')
        .map(|c| if c == '\n' && !multiline { ' ' } else { c })
        .collect()
}

/// Feeds `key` to `textarea`. Returns whether the text changed.
///
/// Enter is swallowed by single-line fields.
pub fn edit_field(textarea: &mut TextArea<'static>, key: KeyEvent, multiline: bool) -> bool {
    if key.code == KeyCode::Enter && !multiline {
        return false;
    }
    if key.code == KeyCode::Enter && key.modifiers.contains(KeyModifiers::CONTROL) {
        return false;
    }
    let before = text_of(textarea);
    textarea.input(key);
    text_of(textarea) != before
}

/// Inserts sanitized pasted text. Returns whether the text changed.
pub fn paste_into(textarea: &mut TextArea<'static>, text: &str, multiline: bool) -> bool {
    let cleaned = sanitize_paste(text, multiline);
    if cleaned.is_empty() {
        return false;
    }
    textarea.insert_str(&cleaned);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    mod paste {
        use super::*;

        #[test]
        fn normalizes_line_endings() {
            assert_eq!(sanitize_paste("a\r\nb\rc", true), "a\nb\nc");
        }

        #[test]
        fn single_line_fields_flatten_newlines() {
            assert_eq!(sanitize_paste("Spicy\r\nLunch", false), "Spicy Lunch");
        }

        #[test]
        fn drops_control_characters() {
            assert_eq!(sanitize_paste("ta\u{7}co\ts", true), "tacos");
        }

        #[test]
        fn paste_into_inserts_at_cursor() {
            let mut field = text_field("Dish");
            assert!(paste_into(&mut field, "Pad\nThai", false));
            assert_eq!(text_of(&field), "Pad Thai");
        }

        #[test]
        fn empty_paste_is_ignored() {
            let mut field = text_field("Dish");
            assert!(!paste_into(&mut field, "\u{1b}", false));
            assert_eq!(text_of(&field), "");
        }
    }

    mod editing {
        use super::*;

        #[test]
        fn typing_reports_change() {
            let mut field = text_field("Dish");
            assert!(edit_field(&mut field, key(KeyCode::Char('a')), false));
            assert_eq!(text_of(&field), "a");
        }

        #[test]
        fn cursor_movement_is_not_a_change() {
            let mut field = text_field("Dish");
            set_text(&mut field, "abc");
            assert!(!edit_field(&mut field, key(KeyCode::Left), false));
        }

        #[test]
        fn enter_is_swallowed_by_single_line_fields() {
            let mut field = text_field("Dish");
            set_text(&mut field, "abc");
            assert!(!edit_field(&mut field, key(KeyCode::Enter), false));
            assert_eq!(field.lines().len(), 1);
        }

        #[test]
        fn enter_adds_line_in_multiline_fields() {
            let mut field = text_field("Notes");
            set_text(&mut field, "good");
            assert!(edit_field(&mut field, key(KeyCode::Enter), true));
            assert_eq!(field.lines().len(), 2);
        }

        #[test]
        fn set_text_keeps_placeholder_and_moves_cursor_to_end() {
            let mut field = text_field("Add a tag");
            set_text(&mut field, "Spicy");
            assert_eq!(field.placeholder_text(), "Add a tag");
            assert_eq!(field.cursor(), (0, 5));
        }
    }
}
