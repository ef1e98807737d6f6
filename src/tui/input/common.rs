use unicode_segmentation::UnicodeSegmentation;

use crate::tui::app::EditInput;

/// Byte offset of the grapheme boundary before `pos`
pub(super) fn prev_boundary(s: &str, pos: usize) -> usize {
    s[..pos]
        .grapheme_indices(true)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Byte offset of the grapheme boundary after `pos`
pub(super) fn next_boundary(s: &str, pos: usize) -> usize {
    s[pos..]
        .graphemes(true)
        .next()
        .map(|g| pos + g.len())
        .unwrap_or(s.len())
}

pub(super) fn insert_char(input: &mut EditInput, c: char) {
    input.buffer.insert(input.cursor, c);
    input.cursor += c.len_utf8();
}

pub(super) fn backspace(input: &mut EditInput) {
    if input.cursor == 0 {
        return;
    }
    let start = prev_boundary(&input.buffer, input.cursor);
    input.buffer.replace_range(start..input.cursor, "");
    input.cursor = start;
}

pub(super) fn cursor_left(input: &mut EditInput) {
    input.cursor = prev_boundary(&input.buffer, input.cursor);
}

pub(super) fn cursor_right(input: &mut EditInput) {
    input.cursor = next_boundary(&input.buffer, input.cursor);
}
