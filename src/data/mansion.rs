//! The mansion map
//!
//! A fixed binary tree of rooms. The shape is decided once in
//! [`Mansion::build`]; afterwards the only thing that changes is
//! whether a room still holds its clue.

use super::Direction;

/// A single room in the mansion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub name: String,
    clue: Option<String>,
    left: Option<Box<Room>>,
    right: Option<Box<Room>>,
}

impl Room {
    fn new(name: &str, clue: &str) -> Self {
        Self {
            name: name.to_string(),
            clue: (!clue.is_empty()).then(|| clue.to_string()),
            left: None,
            right: None,
        }
    }

    fn with_children(mut self, left: Room, right: Room) -> Self {
        self.left = Some(Box::new(left));
        self.right = Some(Box::new(right));
        self
    }

    /// The clue still waiting in this room, if any
    pub fn clue(&self) -> Option<&str> {
        self.clue.as_deref()
    }

    /// Remove the clue from the room. Returns it only the first time.
    pub fn take_clue(&mut self) -> Option<String> {
        self.clue.take()
    }

    pub fn child(&self, direction: Direction) -> Option<&Room> {
        match direction {
            Direction::Left => self.left.as_deref(),
            Direction::Right => self.right.as_deref(),
        }
    }

    fn child_mut(&mut self, direction: Direction) -> Option<&mut Room> {
        match direction {
            Direction::Left => self.left.as_deref_mut(),
            Direction::Right => self.right.as_deref_mut(),
        }
    }

    pub fn has_passage(&self, direction: Direction) -> bool {
        self.child(direction).is_some()
    }

    /// Directions with a room behind them
    pub fn exits(&self) -> Vec<Direction> {
        [Direction::Left, Direction::Right]
            .into_iter()
            .filter(|d| self.has_passage(*d))
            .collect()
    }

    fn count(&self) -> usize {
        1 + self.left.as_ref().map_or(0, |r| r.count())
            + self.right.as_ref().map_or(0, |r| r.count())
    }

    fn count_clues(&self) -> usize {
        usize::from(self.clue.is_some())
            + self.left.as_ref().map_or(0, |r| r.count_clues())
            + self.right.as_ref().map_or(0, |r| r.count_clues())
    }
}

/// The whole mansion, owned from the entrance down
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mansion {
    root: Room,
}

impl Mansion {
    /// Build the fixed seven-room mansion
    pub fn build() -> Self {
        let library = Room::new("Library", "A torn note mentions 'Miss Scarlett'.")
            .with_children(
                Room::new("Master Bedroom", "A ring with initials 'J.B.' was under the pillow."),
                Room::new("Dining Room", "A suspect's portrait was turned to face the wall."),
            );
        let kitchen = Room::new("Kitchen", "There's a broken wine glass on the floor.")
            .with_children(
                Room::new("Basement", ""),
                Room::new("Attic", "A blue fabric was caught on the window."),
            );
        let hall = Room::new("Entrance Hall", "The silver key is missing.")
            .with_children(library, kitchen);

        Self { root: hall }
    }

    pub fn entrance(&self) -> &Room {
        &self.root
    }

    /// Follow a path of turns from the entrance
    pub fn room(&self, path: &[Direction]) -> Option<&Room> {
        path.iter()
            .try_fold(&self.root, |room, direction| room.child(*direction))
    }

    pub fn room_mut(&mut self, path: &[Direction]) -> Option<&mut Room> {
        let mut room = &mut self.root;
        for direction in path {
            room = room.child_mut(*direction)?;
        }
        Some(room)
    }

    pub fn room_count(&self) -> usize {
        self.root.count()
    }

    /// Clues not yet picked up anywhere in the mansion
    pub fn remaining_clues(&self) -> usize {
        self.root.count_clues()
    }
}

impl Default for Mansion {
    fn default() -> Self {
        Self::build()
    }
}
