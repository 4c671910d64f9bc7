use catch_core::render::Emphasis;
use crossterm::style::{Attribute, Color, ContentStyle};

/// Terminal background type detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackgroundType {
    Dark,
    Light,
}

/// Detect terminal background type from the `COLORFGBG` environment variable.
///
/// The variable has the format `"foreground;background"`. Background values
/// 0–6 are considered dark; 7–15 are considered light. Absent or unparseable
/// values give `BackgroundType::Dark`.
pub fn detect_background() -> BackgroundType {
    background_from(std::env::var("COLORFGBG").ok().as_deref())
}

fn background_from(colorfgbg: Option<&str>) -> BackgroundType {
    colorfgbg
        .and_then(|val| val.split(';').next_back())
        .and_then(|bg| bg.parse::<u8>().ok())
        .map(|bg| {
            if bg <= 6 {
                BackgroundType::Dark
            } else {
                BackgroundType::Light
            }
        })
        .unwrap_or(BackgroundType::Dark)
}

fn fg(color: Color) -> ContentStyle {
    ContentStyle {
        foreground_color: Some(color),
        ..ContentStyle::default()
    }
}

fn bold(color: Color) -> ContentStyle {
    ContentStyle {
        foreground_color: Some(color),
        attributes: Attribute::Bold.into(),
        ..ContentStyle::default()
    }
}

/// Console palette: one style per emphasis tag, per field.
#[derive(Debug, Clone)]
pub struct Theme {
    // ── State field ──────────────────────────────────────────────────────────
    pub state_default: ContentStyle,
    pub state_alert: ContentStyle,
    pub state_info: ContentStyle,
    pub state_healthy: ContentStyle,

    // ── Statement field ──────────────────────────────────────────────────────
    pub statement_default: ContentStyle,
    pub standard_query: ContentStyle,
    pub aggregate_query: ContentStyle,
    pub bounded_query: ContentStyle,
    pub write_success: ContentStyle,
    pub write_warning: ContentStyle,
    pub write_danger: ContentStyle,
    pub structural: ContentStyle,

    // ── Status lines ─────────────────────────────────────────────────────────
    pub connected: ContentStyle,
}

impl Theme {
    /// Dark-background palette (default).
    pub fn dark() -> Self {
        Self {
            state_default: fg(Color::Yellow),
            state_alert: fg(Color::Red),
            state_info: fg(Color::Blue),
            state_healthy: fg(Color::Green),

            statement_default: fg(Color::Cyan),
            standard_query: bold(Color::Cyan),
            aggregate_query: bold(Color::Magenta),
            bounded_query: bold(Color::Green),
            write_success: bold(Color::Green),
            write_warning: bold(Color::Yellow),
            write_danger: bold(Color::Red),
            structural: bold(Color::Magenta),

            connected: fg(Color::Green),
        }
    }

    /// Light-background palette.
    ///
    /// Swaps the bright yellow and cyan for their dark variants, which are
    /// unreadable on a white canvas otherwise.
    pub fn light() -> Self {
        Self {
            state_default: fg(Color::DarkYellow),
            state_alert: fg(Color::DarkRed),
            state_info: fg(Color::DarkBlue),
            state_healthy: fg(Color::DarkGreen),

            statement_default: fg(Color::DarkCyan),
            standard_query: bold(Color::DarkCyan),
            aggregate_query: bold(Color::DarkMagenta),
            bounded_query: bold(Color::DarkGreen),
            write_success: bold(Color::DarkGreen),
            write_warning: bold(Color::DarkYellow),
            write_danger: bold(Color::DarkRed),
            structural: bold(Color::DarkMagenta),

            connected: fg(Color::DarkGreen),
        }
    }

    /// Resolve a theme by name. `"auto"` and unknown names use
    /// [`detect_background`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            "light" => Self::light(),
            _ => match detect_background() {
                BackgroundType::Light => Self::light(),
                BackgroundType::Dark => Self::dark(),
            },
        }
    }

    /// Style for the STATE field. Statement-only tags fall back to default.
    pub fn state_style(&self, emphasis: Emphasis) -> ContentStyle {
        match emphasis {
            Emphasis::Alert => self.state_alert,
            Emphasis::Info => self.state_info,
            Emphasis::Healthy => self.state_healthy,
            _ => self.state_default,
        }
    }

    /// Style for the INFO field. State-only tags fall back to default.
    pub fn statement_style(&self, emphasis: Emphasis) -> ContentStyle {
        match emphasis {
            Emphasis::StandardQuery => self.standard_query,
            Emphasis::StrongAggregate => self.aggregate_query,
            Emphasis::StrongBounded => self.bounded_query,
            Emphasis::StrongSuccess => self.write_success,
            Emphasis::StrongWarning => self.write_warning,
            Emphasis::StrongDanger => self.write_danger,
            Emphasis::StrongStructural => self.structural,
            _ => self.statement_default,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_bold(style: &ContentStyle) -> bool {
        style.attributes.has(Attribute::Bold)
    }

    // ── background detection ──────────────────────────────────────────────

    #[test]
    fn test_background_from_colorfgbg() {
        assert_eq!(background_from(Some("15;0")), BackgroundType::Dark);
        assert_eq!(background_from(Some("0;15")), BackgroundType::Light);
        assert_eq!(background_from(Some("0;default;7")), BackgroundType::Light);
        assert_eq!(background_from(Some("garbage")), BackgroundType::Dark);
        assert_eq!(background_from(None), BackgroundType::Dark);
    }

    // ── dark palette ──────────────────────────────────────────────────────

    #[test]
    fn test_dark_state_styles() {
        let t = Theme::dark();
        assert_eq!(t.state_style(Emphasis::Neutral).foreground_color, Some(Color::Yellow));
        assert_eq!(t.state_style(Emphasis::Alert).foreground_color, Some(Color::Red));
        assert_eq!(t.state_style(Emphasis::Info).foreground_color, Some(Color::Blue));
        assert_eq!(t.state_style(Emphasis::Healthy).foreground_color, Some(Color::Green));
    }

    #[test]
    fn test_dark_statement_styles() {
        let t = Theme::dark();
        let neutral = t.statement_style(Emphasis::Neutral);
        assert_eq!(neutral.foreground_color, Some(Color::Cyan));
        assert!(!is_bold(&neutral));

        let agg = t.statement_style(Emphasis::StrongAggregate);
        assert_eq!(agg.foreground_color, Some(Color::Magenta));
        assert!(is_bold(&agg));

        assert_eq!(
            t.statement_style(Emphasis::StrongDanger).foreground_color,
            Some(Color::Red)
        );
        assert_eq!(
            t.statement_style(Emphasis::StrongWarning).foreground_color,
            Some(Color::Yellow)
        );
    }

    #[test]
    fn test_cross_field_tags_fall_back_to_default() {
        let t = Theme::dark();
        assert_eq!(
            t.state_style(Emphasis::StrongDanger).foreground_color,
            t.state_default.foreground_color
        );
        assert_eq!(
            t.statement_style(Emphasis::Alert).foreground_color,
            t.statement_default.foreground_color
        );
    }

    // ── lookup ────────────────────────────────────────────────────────────

    #[test]
    fn test_from_name_explicit() {
        assert_eq!(
            Theme::from_name("light").state_default.foreground_color,
            Some(Color::DarkYellow)
        );
        assert_eq!(
            Theme::from_name("dark").state_default.foreground_color,
            Some(Color::Yellow)
        );
    }
}
