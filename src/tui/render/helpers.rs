use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate to a display width, appending an ellipsis when cut
pub(super) fn truncate(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width.saturating_sub(1) {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('\u{2026}');
    out
}

/// Pad or truncate to an exact display width
pub(super) fn fixed_width(s: &str, width: usize) -> String {
    let cut = truncate(s, width);
    let pad = width.saturating_sub(cut.width());
    format!("{}{}", cut, " ".repeat(pad))
}

/// A colored status/priority chip like `[Active]`
pub(super) fn chip(label: &str, color: Color) -> Span<'static> {
    Span::styled(format!("[{}]", label), Style::default().fg(color))
}

/// Proportional bar of `width` cells, `value` out of `max`
pub(super) fn bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value * width + max / 2) / max
    };
    let filled = filled.min(width);
    format!(
        "{}{}",
        "\u{2588}".repeat(filled),
        "\u{2500}".repeat(width - filled)
    )
}

/// Centered popup rect of the given size, clamped to `area`
pub(super) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer title", 8), "a longe\u{2026}");
        assert_eq!(truncate("x", 0), "");
    }

    #[test]
    fn test_fixed_width_pads() {
        assert_eq!(fixed_width("ab", 4), "ab  ");
        assert_eq!(fixed_width("abcdef", 4), "abc\u{2026}");
    }

    #[test]
    fn test_bar_proportions() {
        assert_eq!(bar(0, 100, 10), "\u{2500}".repeat(10));
        assert_eq!(bar(100, 100, 10), "\u{2588}".repeat(10));
        assert_eq!(bar(50, 100, 10), format!("{}{}", "\u{2588}".repeat(5), "\u{2500}".repeat(5)));
        // max of 0 is an empty bar, not a division by zero
        assert_eq!(bar(3, 0, 4), "\u{2500}".repeat(4));
    }

    #[test]
    fn test_centered_rect_clamps() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered_rect(40, 10, area);
        assert_eq!(rect, Rect::new(20, 7, 40, 10));
        let huge = centered_rect(200, 50, area);
        assert_eq!(huge, area);
    }
}
