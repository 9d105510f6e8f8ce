//! Text wrapping and clipping utilities

use tracing::trace;

/// Marker appended to clipped single-line text
pub const ELLIPSIS: &str = "...";

fn char_width<F: Fn(&str) -> f32>(ch: char, measure: &F) -> f32 {
    measure(ch.encode_utf8(&mut [0; 4]))
}

/// Break text into lines no wider than `max_width`.
///
/// Explicit newlines are kept as line breaks. Words wider than a whole line
/// are split on char boundaries. `measure` returns the width of a string at
/// the font size in use.
pub fn wrap_text<F: Fn(&str) -> f32>(text: &str, max_width: f32, measure: F) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }

    let space_width = measure(" ");
    let mut lines = Vec::new();

    for segment in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0.0;

        for word in segment.split_whitespace() {
            let word_width = measure(word);

            if word_width > max_width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                current_width = 0.0;
                for ch in word.chars() {
                    let width = char_width(ch, &measure);
                    if !current.is_empty() && current_width + width > max_width {
                        lines.push(std::mem::take(&mut current));
                        current_width = 0.0;
                    }
                    current.push(ch);
                    current_width += width;
                }
                continue;
            }

            if !current.is_empty() && current_width + space_width + word_width > max_width {
                lines.push(std::mem::take(&mut current));
                current_width = 0.0;
            }
            if !current.is_empty() {
                current.push(' ');
                current_width += space_width;
            }
            current.push_str(word);
            current_width += word_width;
        }

        lines.push(current);
    }

    trace!("Wrapped text into {} lines", lines.len());
    lines
}

/// Collapse text onto one line, clipping it with [`ELLIPSIS`] when it is
/// wider than `max_width`
pub fn fit_with_ellipsis<F: Fn(&str) -> f32>(text: &str, max_width: f32, measure: F) -> String {
    let single_line = text.replace('\n', " ");
    if measure(&single_line) <= max_width {
        return single_line;
    }

    let budget = max_width - measure(ELLIPSIS);
    let mut fitted = String::new();
    let mut width = 0.0;
    for ch in single_line.chars() {
        let ch_width = char_width(ch, &measure);
        if width + ch_width > budget {
            break;
        }
        fitted.push(ch);
        width += ch_width;
    }

    trace!("Clipped {:?} to {:?}", single_line, fitted);
    format!("{}{}", fitted.trim_end(), ELLIPSIS)
}
