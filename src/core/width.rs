//! Display-width arithmetic for the fixed-column entry listing.
//!
//! The listing assumes a monospaced grid where every character takes one or two cells:
//! - the ellipsis `…` counts as one cell, regardless of how the terminal draws it
//! - any character encoded in a single UTF-8 byte counts as one cell
//! - everything else (accented letters, CJK, emoji, ...) counts as two cells
//!
//! This is deliberately coarser than a full East-Asian-width table so that names render
//! identically on every terminal the listing is used with.

/// Ellipsis appended to truncated names. Occupies a single cell.
pub const ELLIPSIS: char = '…';

/// Cells reserved for the entry name column.
pub const NAME_WIDTH: usize = 43;

/// Cells reserved for the right-justified size column.
pub const SIZE_WIDTH: usize = 13;

/// Mark glyph + name column + size column.
pub const LINE_WIDTH: usize = 1 + NAME_WIDTH + SIZE_WIDTH;

/// Cell width of a single character.
#[inline]
pub fn char_width(c: char) -> usize {
    if c == ELLIPSIS || c.len_utf8() == 1 {
        1
    } else {
        2
    }
}

/// Total cell width of a string.
pub fn display_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

/// Returns the longest prefix of `s` whose width does not exceed `max_width`.
///
/// Cuts before the first character that would push the running width past the budget,
/// so a two-cell character is never split across the limit.
pub fn truncate_to_width(s: &str, max_width: usize) -> &str {
    let mut current_w = 0;

    for (idx, c) in s.char_indices() {
        let w = char_width(c);
        if current_w + w > max_width {
            return &s[..idx];
        }
        current_w += w;
    }
    s
}

/// Right-pads `s` with spaces up to `target_width` cells. Never truncates.
pub fn pad_to_width(s: &str, target_width: usize) -> String {
    let fill = target_width.saturating_sub(display_width(s));
    let mut out = String::with_capacity(s.len() + fill);
    out.push_str(s);
    out.extend(std::iter::repeat_n(' ', fill));
    out
}

/// Right-justifies `s` to `width` characters, padding with spaces on the left.
///
/// Counts characters, not cells. Only used for the size column, which is always ASCII.
pub fn rjust(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_widths() {
        assert_eq!(char_width('a'), 1);
        assert_eq!(char_width(' '), 1);
        assert_eq!(char_width(ELLIPSIS), 1);
        assert_eq!(char_width('é'), 2);
        assert_eq!(char_width('日'), 2);
        assert_eq!(char_width('🦀'), 2);
    }

    #[test]
    fn width_is_additive() {
        let parts = ["", "abc", "日本語", "mixed_名前.txt", "…", "🦀 crab"];
        for a in parts {
            for b in parts {
                let joined = format!("{a}{b}");
                assert_eq!(
                    display_width(&joined),
                    display_width(a) + display_width(b),
                    "width not additive for {a:?} + {b:?}"
                );
            }
        }
    }

    #[test]
    fn truncate_stays_within_budget_and_is_prefix() {
        let inputs = ["", "plain_ascii_name", "日本語のファイル名", "a日b本c語", "…abc…"];
        for s in inputs {
            for n in 0..=20 {
                let cut = truncate_to_width(s, n);
                assert!(display_width(cut) <= n, "{s:?} cut to {n} gave {cut:?}");
                assert!(s.starts_with(cut));
            }
        }
    }

    #[test]
    fn truncate_cuts_before_wide_char_crossing_the_limit() {
        assert_eq!(truncate_to_width("ab日", 3), "ab");
        assert_eq!(truncate_to_width("ab日", 4), "ab日");
        assert_eq!(truncate_to_width("日本", 1), "");
    }

    #[test]
    fn truncate_returns_whole_string_when_it_fits() {
        assert_eq!(truncate_to_width("short", 43), "short");
        assert_eq!(truncate_to_width("exact", 5), "exact");
    }

    #[test]
    fn pad_reaches_target_or_keeps_input() {
        let inputs = ["", "abc", "日本", "overflowing_name"];
        for s in inputs {
            for n in 0..=12 {
                let padded = pad_to_width(s, n);
                assert_eq!(display_width(&padded), n.max(display_width(s)));
                assert!(padded.starts_with(s));
            }
        }
    }

    #[test]
    fn rjust_pads_on_the_left() {
        assert_eq!(rjust("<DIR>", 13), "        <DIR>");
        assert_eq!(rjust("1234", 2), "1234");
        assert_eq!(rjust("", SIZE_WIDTH).len(), SIZE_WIDTH);
    }

    #[test]
    fn line_width_constant() {
        assert_eq!(LINE_WIDTH, 57);
    }
}
