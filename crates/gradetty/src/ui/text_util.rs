use ratatui::text::Line;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates `text` to at most `max_width` display columns, ending with an
/// ellipsis when anything was cut.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut truncated = String::new();
    let mut current_width = 0;
    for character in text.chars() {
        let character_width = character.width().unwrap_or(0);
        if current_width + character_width > max_width - 1 {
            break;
        }
        truncated.push(character);
        current_width += character_width;
    }
    truncated.push('…');

    truncated
}

/// Word-wraps `text` to `width` columns, keeping explicit line breaks. A
/// single word wider than `width` (a URL, a token) is hard-broken at the
/// column limit instead of overflowing its line.
pub fn wrap_lines(text: &str, width: usize) -> Vec<Line<'_>> {
    let width = width.max(1);
    let mut wrapped = Vec::new();
    for line in text.split('\n') {
        let mut current_line = String::new();
        let mut current_width = 0;

        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            wrapped.push(Line::from(""));
            continue;
        }

        for word in words {
            let word_len = word.chars().count();
            let space_len = usize::from(current_width != 0);

            if current_width + space_len + word_len > width && !current_line.is_empty() {
                wrapped.push(Line::from(std::mem::take(&mut current_line)));
                current_width = 0;
            }

            if word_len > width {
                let characters: Vec<char> = word.chars().collect();
                for chunk in characters.chunks(width) {
                    if current_width + chunk.len() > width {
                        wrapped.push(Line::from(std::mem::take(&mut current_line)));
                        current_width = 0;
                    }
                    current_line.extend(chunk);
                    current_width += chunk.len();
                }
                continue;
            }

            if current_width > 0 {
                current_line.push(' ');
                current_width += 1;
            }
            current_line.push_str(word);
            current_width += word_len;
        }
        if !current_line.is_empty() {
            wrapped.push(Line::from(current_line));
        }
    }
    wrapped
}
