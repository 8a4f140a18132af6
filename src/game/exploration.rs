//! Walking the mansion
//!
//! An expedition starts at the entrance and moves one room at a time.
//! Entering a room that still holds a clue files it with the game.

use super::Game;
use crate::data::{Direction, Room};
use crate::GameError;
use std::str::FromStr;
use tracing::debug;

/// What the player can type while exploring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExploreCommand {
    Go(Direction),
    Leave,
}

impl FromStr for ExploreCommand {
    type Err = GameError;

    /// Only the first non-blank character counts, in either case
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let c = line.trim().chars().next().ok_or(GameError::EmptyInput)?;
        match c.to_ascii_lowercase() {
            'e' => Ok(ExploreCommand::Go(Direction::Left)),
            'd' => Ok(ExploreCommand::Go(Direction::Right)),
            's' => Ok(ExploreCommand::Leave),
            _ => Err(GameError::InvalidCommand(c)),
        }
    }
}

/// Result of one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExploreOutcome {
    /// Moved into a new room, possibly finding its clue
    Entered {
        room: String,
        found: Option<FoundClue>,
    },
    /// Back to the main menu
    Left,
}

/// A clue picked up on entering a room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundClue {
    pub text: String,
    pub suspects: Vec<String>,
}

/// One trip through the mansion
#[derive(Debug, Clone, Default)]
pub struct Expedition {
    /// Turns taken from the entrance
    path: Vec<Direction>,
    finished: bool,
}

impl Expedition {
    /// Start at the entrance
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(&self) -> &[Direction] {
        &self.path
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The room the player is standing in
    pub fn current_room<'g>(&self, game: &'g Game) -> &'g Room {
        game.mansion
            .room(&self.path)
            .unwrap_or_else(|| game.mansion.entrance())
    }

    /// Apply one command. A blocked move leaves the expedition where it was.
    pub fn step(
        &mut self,
        game: &mut Game,
        command: ExploreCommand,
    ) -> Result<ExploreOutcome, GameError> {
        let direction = match command {
            ExploreCommand::Leave => {
                self.finished = true;
                debug!(path = ?self.path, "expedition ended");
                return Ok(ExploreOutcome::Left);
            }
            ExploreCommand::Go(direction) => direction,
        };

        let mut target = self.path.clone();
        target.push(direction);

        let Some(room) = game.mansion.room_mut(&target) else {
            game.stats.blocked_moves += 1;
            debug!(%direction, "no passage");
            return Err(GameError::NoPassage(direction));
        };
        let name = room.name.clone();
        let clue = room.take_clue();

        // Only ever holds paths that resolved to a room
        self.path = target;
        game.stats.moves += 1;
        debug!(room = %name, "entered room");

        let found = clue.map(|text| {
            let suspects = game
                .collect_clue(&text)
                .iter()
                .map(|s| s.to_string())
                .collect();
            FoundClue { text, suspects }
        });

        Ok(ExploreOutcome::Entered { room: name, found })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::{Left, Right};

    fn go(direction: Direction) -> ExploreCommand {
        ExploreCommand::Go(direction)
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("E".parse::<ExploreCommand>(), Ok(go(Left)));
        assert_eq!("d".parse::<ExploreCommand>(), Ok(go(Right)));
        assert_eq!("  s\n".parse::<ExploreCommand>(), Ok(ExploreCommand::Leave));
        assert_eq!("east".parse::<ExploreCommand>(), Ok(go(Left)));
        assert_eq!("x".parse::<ExploreCommand>(), Err(GameError::InvalidCommand('x')));
        assert_eq!("   ".parse::<ExploreCommand>(), Err(GameError::EmptyInput));
    }

    #[test]
    fn test_enter_library_collects_clue() {
        let mut game = Game::new();
        let mut expedition = Expedition::new();

        let outcome = expedition.step(&mut game, go(Left)).unwrap();
        assert_eq!(
            outcome,
            ExploreOutcome::Entered {
                room: "Library".to_string(),
                found: Some(FoundClue {
                    text: "A torn note mentions 'Miss Scarlett'.".to_string(),
                    suspects: vec!["Miss Scarlett".to_string()],
                }),
            }
        );
        assert!(game.clues.contains("A torn note mentions 'Miss Scarlett'."));
        assert_eq!(game.suspects.find("Miss Scarlett").unwrap().clue_count(), 1);
        assert_eq!(game.mansion.room(&[Left]).unwrap().clue(), None);
    }

    #[test]
    fn test_reentering_room_finds_nothing() {
        let mut game = Game::new();
        Expedition::new().step(&mut game, go(Left)).unwrap();

        let mut second = Expedition::new();
        let outcome = second.step(&mut game, go(Left)).unwrap();
        assert_eq!(
            outcome,
            ExploreOutcome::Entered {
                room: "Library".to_string(),
                found: None,
            }
        );
        assert_eq!(game.suspects.find("Miss Scarlett").unwrap().clue_count(), 1);
        assert_eq!(game.clues.len(), 1);
    }

    #[test]
    fn test_dead_end_keeps_position() {
        let mut game = Game::new();
        let mut expedition = Expedition::new();

        expedition.step(&mut game, go(Right)).unwrap();
        expedition.step(&mut game, go(Right)).unwrap();
        assert_eq!(expedition.current_room(&game).name, "Attic");

        let before = game.suspects.clone();
        assert_eq!(
            expedition.step(&mut game, go(Right)),
            Err(GameError::NoPassage(Right))
        );
        assert_eq!(expedition.path(), [Right, Right]);
        assert_eq!(expedition.current_room(&game).name, "Attic");
        assert_eq!(game.suspects, before);
        assert_eq!(game.stats.blocked_moves, 1);
    }

    #[test]
    fn test_empty_room() {
        let mut game = Game::new();
        let mut expedition = Expedition::new();
        expedition.step(&mut game, go(Right)).unwrap();

        let outcome = expedition.step(&mut game, go(Left)).unwrap();
        assert_eq!(
            outcome,
            ExploreOutcome::Entered {
                room: "Basement".to_string(),
                found: None,
            }
        );
    }

    #[test]
    fn test_kitchen_clue_blames_two() {
        let mut game = Game::new();
        let mut expedition = Expedition::new();

        expedition.step(&mut game, go(Right)).unwrap();
        assert_eq!(game.suspects.find("Mr. Brown").unwrap().clue_count(), 1);
        assert_eq!(game.suspects.find("Miss Scarlett").unwrap().clue_count(), 1);
    }

    #[test]
    fn test_leave() {
        let mut game = Game::new();
        let mut expedition = Expedition::new();

        assert_eq!(
            expedition.step(&mut game, ExploreCommand::Leave),
            Ok(ExploreOutcome::Left)
        );
        assert!(expedition.is_finished());
    }

    #[test]
    fn test_entrance_clue_stays_put() {
        let mut game = Game::new();
        let expedition = Expedition::new();

        assert_eq!(expedition.current_room(&game).name, "Entrance Hall");
        Expedition::new().step(&mut game, ExploreCommand::Leave).unwrap();
        assert_eq!(game.mansion.entrance().clue(), Some("The silver key is missing."));
    }
}
