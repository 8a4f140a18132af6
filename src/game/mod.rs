//! Core game logic and state management

pub mod exploration;
pub mod investigation;

use crate::data::*;
use investigation::CaseReport;
use tracing::{debug, info};

/// The main game state
#[derive(Debug, Clone)]
pub struct Game {
    /// The mansion being searched
    pub mansion: Mansion,

    /// Every distinct clue found so far
    pub clues: ClueStore,

    /// Who the clues point at
    pub suspects: SuspectRegistry,

    /// Game statistics
    pub stats: GameStats,
}

/// Game statistics
#[derive(Debug, Clone, Default)]
pub struct GameStats {
    pub moves: u32,
    pub blocked_moves: u32,
    pub expeditions: u32,
}

impl Game {
    /// Create a new game with a freshly built mansion
    pub fn new() -> Self {
        Self {
            mansion: Mansion::build(),
            clues: ClueStore::new(),
            suspects: SuspectRegistry::new(),
            stats: GameStats::default(),
        }
    }

    /// File a clue: store it and link it to every suspect it implicates.
    /// Returns the suspects it was linked to.
    pub fn collect_clue(&mut self, clue: &str) -> &'static [&'static str] {
        if !self.clues.insert(clue) {
            debug!(clue, "clue already in the case file");
        }

        let implicated = investigation::implicated_suspects(clue);
        for suspect in implicated {
            let record = self.suspects.associate(suspect, clue);
            debug!(suspect, count = record.clue_count(), "clue associated");
        }

        info!(clue, suspects = ?implicated, "clue collected");
        implicated
    }

    /// Summary of the suspects for the analysis screen
    pub fn case_report(&self) -> CaseReport {
        CaseReport::from_registry(&self.suspects)
    }

    /// One-line summary shown above the main menu
    pub fn check_status(&self) -> String {
        format!(
            "Expeditions: {} | Moves: {} ({} blocked) | Clues: {} | Suspects: {} | Unfound: {}",
            self.stats.expeditions,
            self.stats.moves,
            self.stats.blocked_moves,
            self.clues.len(),
            self.suspects.len(),
            self.mansion.remaining_clues()
        )
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_is_empty() {
        let game = Game::new();
        assert!(game.clues.is_empty());
        assert!(game.suspects.is_empty());
        assert!(game.case_report().prime_suspect.is_none());
        assert_eq!(game.mansion.remaining_clues(), 6);
    }

    #[test]
    fn test_collect_unmatched_clue() {
        let mut game = Game::new();
        let linked = game.collect_clue("There's a broken wine glass on the floor.");

        assert_eq!(linked, ["Mr. Brown", "Miss Scarlett"]);
        assert!(game.clues.contains("There's a broken wine glass on the floor."));
        assert_eq!(game.suspects.find("Mr. Brown").unwrap().clue_count(), 1);
        assert_eq!(game.suspects.find("Miss Scarlett").unwrap().clue_count(), 1);
    }

    #[test]
    fn test_collect_same_clue_twice() {
        let mut game = Game::new();
        game.collect_clue("The silver key is missing.");
        game.collect_clue("The silver key is missing.");

        assert_eq!(game.clues.len(), 1);
        assert_eq!(game.suspects.find("Mr. Green").unwrap().clue_count(), 2);
    }

    #[test]
    fn test_status_line() {
        let game = Game::new();
        assert_eq!(
            game.check_status(),
            "Expeditions: 0 | Moves: 0 (0 blocked) | Clues: 0 | Suspects: 0 | Unfound: 6"
        );
    }
}
