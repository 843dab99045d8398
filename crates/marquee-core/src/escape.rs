//! Formatting-escape model shared by the generator and the trim adapter.
//!
//! A formatting change is the two-character sequence [`ESCAPE`] followed by
//! one code character. The pair is atomic: windowing and truncation must
//! never leave a trailing [`ESCAPE`] with its code cut off. All widths and
//! offsets in this crate count `char`s, not bytes.

/// Marker character that introduces a formatting sequence.
pub const ESCAPE: char = '§';

/// Code that resets color and styles back to the display default.
pub const RESET_CODE: char = 'r';

/// Codes that select a color (and implicitly clear active styles).
#[inline]
pub fn is_color_code(code: char) -> bool {
    matches!(code, '0'..='9' | 'a'..='f')
}

/// Codes that toggle a style on top of the current color.
#[inline]
pub fn is_style_code(code: char) -> bool {
    matches!(code, 'k'..='o')
}

/// Most recent active formatting sequence at the end of `text`.
///
/// Scans backwards collecting style codes until a color or reset code
/// terminates the search, so the result can be prepended to a window to
/// carry formatting state across the cut. Empty when nothing is active.
pub fn last_format_code(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut result = String::new();

    for i in (0..chars.len().saturating_sub(1)).rev() {
        if chars[i] != ESCAPE {
            continue;
        }
        let code = chars[i + 1].to_ascii_lowercase();
        if is_style_code(code) {
            result.insert(0, code);
            result.insert(0, ESCAPE);
        } else if is_color_code(code) || code == RESET_CODE {
            result.insert(0, code);
            result.insert(0, ESCAPE);
            break;
        }
    }

    result
}
