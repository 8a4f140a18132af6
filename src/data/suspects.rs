//! Suspects and the clues pointing at them
//!
//! A small hash table with a fixed number of buckets. Names are
//! bucketed by their first letter only, so collisions are common and
//! each bucket keeps a chain of suspects.

use std::collections::VecDeque;

/// Number of buckets in the registry
pub const BUCKET_COUNT: usize = 10;

/// Bucket for a suspect name: its first letter, case-folded, modulo the
/// bucket count. Names that are empty or don't start with a-z land in 0.
pub fn bucket_index(name: &str) -> usize {
    match name.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some(c @ 'a'..='z') => (c as usize - 'a' as usize) % BUCKET_COUNT,
        _ => 0,
    }
}

/// A person of interest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suspect {
    pub name: String,
    /// Most recent first
    clues: VecDeque<String>,
}

impl Suspect {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            clues: VecDeque::new(),
        }
    }

    pub fn clue_count(&self) -> usize {
        self.clues.len()
    }

    /// Associated clues, most recently added first
    pub fn clues(&self) -> impl Iterator<Item = &str> {
        self.clues.iter().map(String::as_str)
    }
}

/// All suspects, bucketed by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuspectRegistry {
    /// Each chain is ordered newest first
    buckets: [VecDeque<Suspect>; BUCKET_COUNT],
}

impl SuspectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact, case-sensitive lookup
    pub fn find(&self, name: &str) -> Option<&Suspect> {
        self.buckets[bucket_index(name)]
            .iter()
            .find(|s| s.name == name)
    }

    /// Link a clue to a suspect, creating the suspect on first mention.
    /// The same clue may be linked more than once and counts every time.
    pub fn associate(&mut self, name: &str, clue: &str) -> &Suspect {
        let chain = &mut self.buckets[bucket_index(name)];
        let position = match chain.iter().position(|s| s.name == name) {
            Some(position) => position,
            None => {
                chain.push_front(Suspect::new(name));
                0
            }
        };

        let suspect = &mut chain[position];
        suspect.clues.push_front(clue.to_string());
        suspect
    }

    /// Every suspect, bucket by bucket, newest first within a bucket
    pub fn iter(&self) -> impl Iterator<Item = &Suspect> {
        self.buckets.iter().flat_map(|chain| chain.iter())
    }

    /// The suspect with the most clues. On a tie the first one met in
    /// [`iter`](Self::iter) order wins. None until someone has a clue.
    pub fn most_likely(&self) -> Option<&Suspect> {
        let mut best: Option<&Suspect> = None;
        for suspect in self.iter() {
            if best.map_or(true, |b| suspect.clue_count() > b.clue_count()) {
                best = Some(suspect);
            }
        }
        best.filter(|s| s.clue_count() > 0)
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(VecDeque::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(VecDeque::is_empty)
    }
}
