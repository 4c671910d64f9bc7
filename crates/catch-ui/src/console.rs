//! Console painting of display records.

use catch_core::render::DisplayRecord;
use crossterm::style::ContentStyle;

use crate::themes::Theme;

/// Render a record for the console.
///
/// With `colorize` off the result is exactly [`DisplayRecord::plain`]; with
/// it on only the STATE and INFO values are wrapped in escape sequences.
pub fn paint(display: &DisplayRecord<'_>, theme: &Theme, colorize: bool) -> String {
    if !colorize {
        return display.plain();
    }
    let state = theme.state_style(display.state_emphasis).apply(display.state());
    let statement = theme
        .statement_style(display.statement_emphasis)
        .apply(display.statement());
    display.layout(&state, &statement)
}

/// Paint a single status line, or return it unchanged when `colorize` is off.
pub fn paint_line(text: &str, style: ContentStyle, colorize: bool) -> String {
    if colorize {
        style.apply(text).to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catch_core::render::render;
    use catch_core::SessionRecord;
    use chrono::NaiveDate;

    fn record(state: &str, statement: &str) -> SessionRecord {
        SessionRecord {
            id: 3,
            user: "app".to_string(),
            host: "10.0.0.4:3000".to_string(),
            database: Some("shop".to_string()),
            command: "Query".to_string(),
            elapsed_seconds: 2,
            state: Some(state.to_string()),
            statement_text: Some(statement.to_string()),
        }
    }

    fn at() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_uncolored_paint_equals_plain() {
        let r = record("executing", "SELECT COUNT(*) FROM t");
        let d = render(&r, at());
        assert_eq!(paint(&d, &Theme::dark(), false), d.plain());
    }

    #[test]
    fn test_colored_paint_wraps_state_and_info_only() {
        let r = record("executing", "DELETE FROM t");
        let d = render(&r, at());
        let colored = paint(&d, &Theme::dark(), true);

        assert_ne!(colored, d.plain());
        assert!(colored.contains('\x1b'));
        assert!(colored.contains("DELETE FROM t"));
        assert!(colored.contains("     USER: app\n"));
        assert!(colored
            .starts_with("*************************** Process Info @ 2024-03-01 08:00:00"));
    }

    #[test]
    fn test_plain_unchanged_by_prior_colored_paint() {
        let r = record("login", "SELECT 1");
        let d = render(&r, at());
        let before = d.plain();
        let _ = paint(&d, &Theme::light(), true);
        assert_eq!(d.plain(), before);
    }

    #[test]
    fn test_paint_line() {
        let theme = Theme::dark();
        assert_eq!(paint_line("ok", theme.connected, false), "ok");
        let colored = paint_line("ok", theme.write_danger, true);
        assert!(colored.contains("ok"));
        assert!(colored.contains('\x1b'));
    }
}
