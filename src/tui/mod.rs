//! Terminal User Interface
//!
//! Line-based menus for the mystery game, coloured with crossterm

pub mod app;

pub use app::App;

use crossterm::style::{style, Color, Stylize};

/// Color scheme for the game
#[derive(Debug, Clone)]
pub struct Theme {
    pub enabled: bool,
    pub accent: Color,
    pub alert: Color,
    pub success: Color,
    pub warning: Color,
    pub clue: Color,
    pub header: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            enabled: true,
            accent: Color::Cyan,
            alert: Color::Red,
            success: Color::Green,
            warning: Color::Yellow,
            clue: Color::Yellow,
            header: Color::Magenta,
        }
    }
}

impl Theme {
    /// No escape codes at all, for pipes and tests
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn paint(&self, text: &str, color: Color) -> String {
        if self.enabled {
            style(text).with(color).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn bold(&self, text: &str, color: Color) -> String {
        if self.enabled {
            style(text).with(color).bold().to_string()
        } else {
            text.to_string()
        }
    }
}

/// ASCII art logo
pub const LOGO: &str = r#"
╔══════════════════════════════════════════════╗
║                                              ║
║         D E T E C T I V E   Q U E S T        ║
║                                              ║
║      Someone took the silver key. Who?       ║
║                                              ║
╚══════════════════════════════════════════════╝
"#;

/// Main menu entries
pub const MENU_TEXT: &str = "\
1. Explore the mansion
2. Review clues
3. Analyze suspects
4. Quit";

/// Explore prompt
pub const EXPLORE_HELP: &str = "Options: E (left) | D (right) | S (back to menu)";

pub const FAREWELL: &str = "Thanks for playing Detective Quest! See you next time.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_theme_leaves_text_alone() {
        let theme = Theme::plain();
        assert_eq!(theme.paint("Library", theme.accent), "Library");
        assert_eq!(theme.bold("Library", theme.header), "Library");
    }

    #[test]
    fn test_default_theme_adds_escape_codes() {
        let theme = Theme::default();
        let painted = theme.bold("Library", theme.accent);
        assert!(painted.contains('\u{1b}'));
        assert!(painted.contains("Library"));
    }
}
