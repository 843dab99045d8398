//! Sliding-window frame generation.
//!
//! Turns one long line of text into the ordered frame set a
//! [`MarqueeText`](super::MarqueeText) plays back. Formatting continuity is
//! preserved across the window cut by prepending the last active formatting
//! sequence of the consumed text to each frame.

use crate::escape::{last_format_code, ESCAPE};

/// Generate scrolling frames using the built-in formatting lookup.
///
/// See [`scrolling_frames_with`] for the windowing rules.
pub fn scrolling_frames(
    text: &str,
    prefix: &str,
    suffix: &str,
    display_width: usize,
) -> Vec<String> {
    scrolling_frames_with(text, prefix, suffix, display_width, last_format_code)
}

/// Generate scrolling frames with an injected "last active formatting
/// sequence" lookup.
///
/// Text that already fits the window passes through as a single frame.
/// Otherwise a window of `display_width` chars slides from offset 0 to
/// `len - display_width`, emitting `prefix + carry + window + suffix` per
/// offset, where `carry` is `last_format` applied to the consumed head. A
/// window ending in a dangling [`ESCAPE`] loses that marker; a head ending
/// in a dangling [`ESCAPE`] yields the bare fallback frame
/// `ESCAPE + window` with no wrapping or carry.
///
/// The start offset advances by 3 chars when it sits on an [`ESCAPE`] pair
/// and by 2 when it sits on a space. Offsets near the end of the text can
/// therefore be skipped entirely; existing animations are authored against
/// exactly that frame sequence, so the skip arithmetic must not change.
pub fn scrolling_frames_with<F>(
    text: &str,
    prefix: &str,
    suffix: &str,
    display_width: usize,
    last_format: F,
) -> Vec<String>
where
    F: Fn(&str) -> String,
{
    let chars: Vec<char> = text.chars().collect();

    // Zero width has nothing to slide over
    if display_width == 0 || chars.len() <= display_width {
        return vec![text.to_string()];
    }

    let mut frames = Vec::new();
    let mut i = 0;

    while i <= chars.len() - display_width {
        let mut window: Vec<char> = chars[i..i + display_width].to_vec();
        if window.last() == Some(&ESCAPE) {
            window.pop();
        }
        let window: String = window.into_iter().collect();

        let head: String = chars[..i].iter().collect();
        if head.ends_with(ESCAPE) {
            frames.push(format!("{ESCAPE}{window}"));
            i += 1;
            continue;
        }

        let carry = last_format(&head);
        frames.push(format!("{prefix}{carry}{window}{suffix}"));

        if chars[i] == ESCAPE {
            i += 3;
        } else if chars[i] == ' ' {
            i += 2;
        } else {
            i += 1;
        }
    }

    frames
}
