//! Data structures for the game world
//!
//! Defines the mansion map, the clue store and the suspect registry.

pub mod clues;
pub mod mansion;
pub mod suspects;

pub use clues::*;
pub use mansion::*;
pub use suspects::*;

/// Which way to leave a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}
