use std::sync::OnceLock;

use owo_colors::Style;

static PALETTE: OnceLock<Palette> = OnceLock::new();

/// Styles keyed by what happened to a record
#[derive(Debug, Clone)]
pub struct Palette {
    /// Record stored, removed or written out
    pub stored: Style,
    /// Record already present or missing
    pub absent: Style,
    pub failure: Style,
    pub label: Style,
    pub icon: Style,
}

impl Palette {
    pub fn new(colored: bool) -> Self {
        if !colored {
            let plain = Style::new();
            return Self {
                stored: plain,
                absent: plain,
                failure: plain,
                label: plain,
                icon: plain,
            };
        }
        Self {
            stored: Style::new().green().bold(),
            absent: Style::new().yellow(),
            failure: Style::new().red().bold(),
            label: Style::new().dimmed(),
            icon: Style::new().magenta(),
        }
    }
}

/// Palette for stdout; honours `NO_COLOR`/`CLICOLOR` and non-tty output
pub fn palette() -> &'static Palette {
    PALETTE.get_or_init(|| Palette::new(console::colors_enabled()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use owo_colors::OwoColorize;

    #[test]
    fn test_plain_palette_adds_no_escapes() {
        let palette = Palette::new(false);
        assert_eq!("Success".style(palette.stored).to_string(), "Success");
        assert_eq!("missing".style(palette.absent).to_string(), "missing");
    }

    #[test]
    fn test_colored_palette_marks_failures() {
        let palette = Palette::new(true);
        let rendered = "boom".style(palette.failure).to_string();
        assert!(rendered.contains("boom"));
        assert!(rendered.starts_with('\u{1b}'));
    }
}
