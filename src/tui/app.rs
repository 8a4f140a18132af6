//! Main application state and menus

use crate::game::exploration::{ExploreCommand, ExploreOutcome, Expedition};
use crate::game::Game;
use crate::tui::{Theme, EXPLORE_HELP, FAREWELL, LOGO, MENU_TEXT};
use crate::{GameError, Result};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info};

/// Main menu choices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Explore,
    ReviewClues,
    AnalyzeSuspects,
    Quit,
}

impl FromStr for MenuOption {
    type Err = GameError;

    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let line = line.trim();
        let number: u32 = line
            .parse()
            .map_err(|_| GameError::NotANumber(line.to_string()))?;
        match number {
            1 => Ok(MenuOption::Explore),
            2 => Ok(MenuOption::ReviewClues),
            3 => Ok(MenuOption::AnalyzeSuspects),
            4 => Ok(MenuOption::Quit),
            n => Err(GameError::InvalidOption(n)),
        }
    }
}

/// A line as text. Bytes that aren't UTF-8 are a recoverable input error.
fn decode_line(bytes: &[u8]) -> std::result::Result<&str, GameError> {
    std::str::from_utf8(bytes).map_err(|_| GameError::InvalidEncoding)
}

/// Application state
pub struct App<R, W> {
    pub game: Game,
    pub theme: Theme,
    pub running: bool,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(input: R, output: W, theme: Theme) -> Self {
        Self {
            game: Game::new(),
            theme,
            running: true,
            input,
            output,
        }
    }

    /// Play until the player quits or input runs out
    pub fn run(&mut self) -> Result<()> {
        let logo = self.theme.bold(LOGO, self.theme.accent);
        writeln!(self.output, "{}", logo)?;

        while self.running {
            if !self.handle_input()? {
                break;
            }
        }

        self.output.flush()?;
        Ok(())
    }

    /// Show the main menu and act on one choice. Returns false once the game is over.
    pub fn handle_input(&mut self) -> Result<bool> {
        let title = self.theme.bold(
            "=============== DETECTIVE QUEST ===============",
            self.theme.header,
        );
        writeln!(self.output, "\n{}", title)?;
        let status = self.theme.paint(&self.game.check_status(), self.theme.accent);
        writeln!(self.output, "{}", status)?;
        writeln!(self.output, "{}", MENU_TEXT)?;
        write!(self.output, "Choose an option: ")?;

        let Some(bytes) = self.read_line()? else {
            return self.quit();
        };

        match decode_line(&bytes).and_then(str::parse::<MenuOption>) {
            Ok(MenuOption::Explore) => self.explore()?,
            Ok(MenuOption::ReviewClues) => self.review_clues()?,
            Ok(MenuOption::AnalyzeSuspects) => self.analyze_suspects()?,
            Ok(MenuOption::Quit) => return self.quit(),
            Err(e) => {
                debug!(input = %String::from_utf8_lossy(&bytes).trim(), "rejected menu input");
                self.report_error(&e)?;
            }
        }

        Ok(self.running)
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Next raw line of input, None at end of input. Only stream failures are errors;
    /// the bytes are decoded by the caller.
    fn read_line(&mut self) -> Result<Option<Vec<u8>>> {
        self.output.flush()?;
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn report_error(&mut self, error: &GameError) -> Result<()> {
        let message = self.theme.paint(&format!("✗ {}", error), self.theme.alert);
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    fn quit(&mut self) -> Result<bool> {
        info!(status = %self.game.check_status(), "game over");
        writeln!(self.output, "\n{}", FAREWELL)?;
        self.running = false;
        Ok(false)
    }

    fn explore(&mut self) -> Result<()> {
        self.game.stats.expeditions += 1;
        let mut expedition = Expedition::new();

        let header = self.theme.bold("--- Exploring the Mansion ---", self.theme.header);
        writeln!(self.output, "\n{}", header)?;
        let entrance = &expedition.current_room(&self.game).name;
        let room = self.theme.bold(entrance, self.theme.accent);
        writeln!(self.output, "You are in the {}.", room)?;

        while !expedition.is_finished() {
            writeln!(self.output, "\n{}", EXPLORE_HELP)?;
            write!(self.output, "Command: ")?;

            let Some(bytes) = self.read_line()? else {
                self.quit()?;
                return Ok(());
            };

            let outcome = decode_line(&bytes)
                .and_then(str::parse::<ExploreCommand>)
                .and_then(|command| expedition.step(&mut self.game, command));

            match outcome {
                Ok(ExploreOutcome::Entered { room, found }) => {
                    let room = self.theme.bold(&room, self.theme.accent);
                    writeln!(self.output, "You moved to the {}.", room)?;
                    if let Some(clue) = found {
                        let text = self.theme.paint(&format!("\"{}\"", clue.text), self.theme.clue);
                        writeln!(self.output, "★ CLUE FOUND! {}", text)?;
                        writeln!(self.output, "  Points at: {}", clue.suspects.join(", "))?;
                    }
                }
                Ok(ExploreOutcome::Left) => {
                    writeln!(self.output, "\nBack to the main menu.")?;
                }
                Err(e) => self.report_error(&e)?,
            }
        }

        Ok(())
    }

    fn review_clues(&mut self) -> Result<()> {
        let header = self.theme.bold("--- Collected Clues ---", self.theme.header);
        writeln!(self.output, "\n{}", header)?;

        if self.game.clues.is_empty() {
            writeln!(self.output, "No clues collected yet.")?;
        } else {
            for clue in self.game.clues.in_order() {
                writeln!(self.output, "   - {}", clue)?;
            }
        }
        writeln!(self.output, "-----------------------")?;
        Ok(())
    }

    fn analyze_suspects(&mut self) -> Result<()> {
        let report = self.game.case_report();

        let header = self.theme.bold("--- Suspects and Clues ---", self.theme.header);
        writeln!(self.output, "\n{}", header)?;

        if report.suspects.is_empty() {
            writeln!(self.output, "No suspects registered yet.")?;
        }
        for suspect in &report.suspects {
            let name = self.theme.bold(&suspect.name, self.theme.accent);
            writeln!(self.output, "  ➜ Suspect: {} (clues: {})", name, suspect.clue_count)?;
            for clue in &suspect.clues {
                writeln!(self.output, "    - \"{}\"", clue)?;
            }
        }
        writeln!(self.output, "--------------------------")?;

        match report.prime_suspect {
            Some(prime) => {
                let verdict = self.theme.bold(
                    &format!("MOST LIKELY SUSPECT: {} ({} clues)", prime.name, prime.clue_count),
                    self.theme.success,
                );
                writeln!(self.output, "\n✔ {}", verdict)?;
            }
            None => {
                let verdict = self.theme.paint(
                    "Not enough clues yet to name a most likely suspect.",
                    self.theme.warning,
                );
                writeln!(self.output, "\n? {}", verdict)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn play(script: &str) -> (Game, String) {
        let mut app = App::new(Cursor::new(script.to_string()), Vec::new(), Theme::plain());
        app.run().unwrap();
        assert!(!app.running);
        let game = app.game.clone();
        let output = String::from_utf8(app.into_output()).unwrap();
        (game, output)
    }

    #[test]
    fn test_parse_menu_option() {
        assert_eq!("1".parse::<MenuOption>(), Ok(MenuOption::Explore));
        assert_eq!(" 4\n".parse::<MenuOption>(), Ok(MenuOption::Quit));
        assert_eq!("9".parse::<MenuOption>(), Err(GameError::InvalidOption(9)));
        assert_eq!("0".parse::<MenuOption>(), Err(GameError::InvalidOption(0)));
        assert_eq!(
            "abc".parse::<MenuOption>(),
            Err(GameError::NotANumber("abc".to_string()))
        );
    }

    #[test]
    fn test_decode_line() {
        assert_eq!(decode_line(b"3\n"), Ok("3\n"));
        assert_eq!(decode_line(&[0xff, b'\n']), Err(GameError::InvalidEncoding));
        assert_eq!(decode_line(b"\xC3\n"), Err(GameError::InvalidEncoding));
    }

    #[test]
    fn test_quit_immediately() {
        let (game, output) = play("4\n");
        assert!(output.contains(FAREWELL));
        assert_eq!(game.stats.expeditions, 0);
    }

    #[test]
    fn test_end_of_input_quits() {
        let (_, output) = play("");
        assert!(output.contains(FAREWELL));

        let (game, output) = play("1\ne\n");
        assert!(output.contains(FAREWELL));
        assert_eq!(game.clues.len(), 1);
    }

    #[test]
    fn test_bad_menu_input_reprompts() {
        let (_, output) = play("hello\n7\n4\n");
        assert!(output.contains("'hello' is not a number"));
        assert!(output.contains("Invalid option: 7"));
        assert_eq!(output.matches("Choose an option:").count(), 3);
    }

    #[test]
    fn test_no_color_in_plain_theme() {
        let (_, output) = play("2\n3\n4\n");
        assert!(!output.contains('\u{1b}'));
        assert!(output.contains("No clues collected yet."));
        assert!(output.contains("No suspects registered yet."));
        assert!(output.contains("Not enough clues yet"));
    }
}
