//! Collected clues
//!
//! A binary search tree keyed by clue text. Duplicates are ignored and
//! an in-order walk gives the clues alphabetically.

use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq)]
struct ClueNode {
    text: String,
    left: Option<Box<ClueNode>>,
    right: Option<Box<ClueNode>>,
}

impl ClueNode {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            left: None,
            right: None,
        }
    }
}

/// Every distinct clue the player has found
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClueStore {
    root: Option<Box<ClueNode>>,
    len: usize,
}

impl ClueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a clue. Returns false if the same text was already stored.
    pub fn insert(&mut self, text: &str) -> bool {
        let added = Self::insert_at(&mut self.root, text);
        if added {
            self.len += 1;
        }
        added
    }

    fn insert_at(slot: &mut Option<Box<ClueNode>>, text: &str) -> bool {
        match slot {
            None => {
                *slot = Some(Box::new(ClueNode::new(text)));
                true
            }
            Some(node) => match text.cmp(node.text.as_str()) {
                Ordering::Less => Self::insert_at(&mut node.left, text),
                Ordering::Greater => Self::insert_at(&mut node.right, text),
                Ordering::Equal => false,
            },
        }
    }

    pub fn contains(&self, text: &str) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match text.cmp(node.text.as_str()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Clues in alphabetical order
    pub fn in_order(&self) -> InOrder<'_> {
        let mut iter = InOrder { stack: Vec::new() };
        iter.push_left(self.root.as_deref());
        iter
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}

/// In-order walk over a [`ClueStore`]
pub struct InOrder<'a> {
    stack: Vec<&'a ClueNode>,
}

impl<'a> InOrder<'a> {
    fn push_left(&mut self, mut node: Option<&'a ClueNode>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some(node.text.as_str())
    }
}
