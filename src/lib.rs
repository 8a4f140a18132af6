//! Detective Quest
//!
//! A mansion mystery game where you walk the rooms of a mansion,
//! pick up clues, and let the case file point at the most likely culprit.
//!
//! # Game Mechanics
//!
//! - **Exploration**: Walk a fixed binary tree of rooms, left or right
//! - **Clues**: Each room hides at most one clue, collected the first time you enter
//! - **Suspects**: Every clue implicates one or more suspects
//! - **Deduction**: The suspect with the most clues is the prime suspect
//!
//! # Architecture
//!
//! - `data` - The mansion map, the clue tree and the suspect registry
//! - `game` - Game state, clue-to-suspect rules, exploration state machine
//! - `tui` - Line-based terminal menus styled with crossterm

pub mod data;
pub mod game;
pub mod tui;

pub use data::*;
pub use game::Game;

/// Game version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for the game
pub type Result<T> = anyhow::Result<T>;

/// Recoverable input errors. The menus report these and prompt again.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid input: '{0}' is not a number. Please enter a number.")]
    NotANumber(String),

    #[error("Invalid option: {0}. Choose between 1 and 4.")]
    InvalidOption(u32),

    #[error("Invalid input: please type a command.")]
    EmptyInput,

    #[error("Invalid input: that line is not valid text. Please try again.")]
    InvalidEncoding,

    #[error("Invalid command '{0}'. Use E, D or S.")]
    InvalidCommand(char),

    #[error("There is no passage to the {0}. Try another way.")]
    NoPassage(Direction),
}
