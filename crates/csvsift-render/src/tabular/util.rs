//! Width-aware text helpers for table cells.
//!
//! Widths are terminal columns, not bytes or chars: CJK characters count as
//! two and ANSI escape codes count as zero.

use console::{measure_text_width, pad_str, Alignment};

use super::types::Align;

/// Returns the display width of a string in terminal columns.
///
/// # Example
///
/// ```rust
/// use csvsift_render::tabular::display_width;
///
/// assert_eq!(display_width("iphone 14"), 9);
/// assert_eq!(display_width("日本"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    measure_text_width(s)
}

/// Returns the widest line of a possibly multi-line cell.
pub fn block_width(s: &str) -> usize {
    s.lines().map(display_width).max().unwrap_or(0)
}

/// Pads a string on the left (right-aligns) to reach the target width.
///
/// ```rust
/// use csvsift_render::tabular::pad_left;
///
/// assert_eq!(pad_left("42", 5), "   42");
/// ```
pub fn pad_left(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Right, None).into_owned()
}

/// Pads a string on the right (left-aligns) to reach the target width.
///
/// ```rust
/// use csvsift_render::tabular::pad_right;
///
/// assert_eq!(pad_right("42", 5), "42   ");
/// assert_eq!(pad_right("hello", 3), "hello"); // No truncation
/// ```
pub fn pad_right(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Left, None).into_owned()
}

/// Pads a string on both sides (centers) to reach the target width.
///
/// When the remaining space is odd, the extra space goes on the right.
pub fn pad_center(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Center, None).into_owned()
}

/// Pads according to an [`Align`].
pub fn pad_aligned(s: &str, width: usize, align: Align) -> String {
    match align {
        Align::Left => pad_right(s, width),
        Align::Right => pad_left(s, width),
        Align::Center => pad_center(s, width),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_width_ascii() {
        assert_eq!(display_width("hello"), 5);
        assert_eq!(display_width(""), 0);
        assert_eq!(display_width(" "), 1);
    }

    #[test]
    fn display_width_ansi() {
        assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
    }

    #[test]
    fn display_width_unicode() {
        assert_eq!(display_width("日本語"), 6);
        assert_eq!(display_width("café"), 4);
    }

    #[test]
    fn block_width_uses_widest_line() {
        assert_eq!(block_width("ab\nabcd\nabc"), 4);
        assert_eq!(block_width(""), 0);
    }

    #[test]
    fn padding() {
        assert_eq!(pad_left("7", 3), "  7");
        assert_eq!(pad_right("7", 3), "7  ");
        assert_eq!(pad_center("hi", 6), "  hi  ");
        assert_eq!(pad_center("hi", 5), " hi  ");
        assert_eq!(pad_right("日本", 6), "日本  ");
    }

    #[test]
    fn pad_aligned_dispatches() {
        assert_eq!(pad_aligned("x", 3, Align::Left), "x  ");
        assert_eq!(pad_aligned("x", 3, Align::Right), "  x");
        assert_eq!(pad_aligned("x", 3, Align::Center), " x ");
    }
}
