//! Unified diff rendering for template rewrites.

use crossterm::style::Stylize;
use similar::TextDiff;

use crate::ui::theme;

/// Render a unified diff of a template rewrite.
pub fn render_unified_diff(path: &str, old: &str, new: &str, supports_color: bool) -> String {
    let diff = TextDiff::from_lines(old, new);
    let a = format!("a/{}", path);
    let b = format!("b/{}", path);
    let unified = diff.unified_diff().context_radius(1).header(&a, &b).to_string();

    if !supports_color {
        return unified;
    }

    let mut out = String::with_capacity(unified.len());
    for line in unified.lines() {
        let styled = if line.starts_with("---") || line.starts_with("+++") || line.starts_with("@@")
        {
            format!("{}", line.with(theme::colors::INFO))
        } else if line.starts_with('-') {
            format!("{}", line.with(theme::colors::ERROR))
        } else if line.starts_with('+') {
            format!("{}", line.with(theme::colors::SUCCESS))
        } else {
            format!("{}", line.with(theme::colors::DIM))
        };
        out.push_str(&styled);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headers_for_both_sides() {
        let rendered = render_unified_diff("base.html.tera", "a\nb\n", "a\nc\n", false);
        assert!(rendered.starts_with("--- a/base.html.tera\n+++ b/base.html.tera\n"));
    }

    #[test]
    fn renders_replaced_line_as_remove_and_add() {
        let rendered = render_unified_diff("t", "x\nsha384-OLD\ny\n", "x\nsha384-NEW\ny\n", false);
        assert!(rendered.contains("\n-sha384-OLD\n"));
        assert!(rendered.contains("\n+sha384-NEW\n"));
    }

    #[test]
    fn identical_input_has_no_hunks() {
        let rendered = render_unified_diff("t", "same\n", "same\n", false);
        assert!(!rendered.contains("@@"));
    }
}
