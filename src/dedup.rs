use std::collections::HashSet;

use crate::board::Solution;

/// Keeps the first representative of each transpose-equivalence class, in
/// discovery order. When the search runs sharded, one deduplicator merges
/// all shard results so the equivalence check is global.
#[derive(Debug, Default)]
pub struct Deduplicator {
    seen: HashSet<Solution>,
    accepted: Vec<Solution>,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts `solution` unless it, or its diagonal transpose, has been
    /// accepted before. Returns whether it was kept.
    pub fn insert(&mut self, solution: Solution) -> bool {
        if self.seen.contains(&solution) || self.seen.contains(&solution.transpose()) {
            return false;
        }
        self.seen.insert(solution);
        self.accepted.push(solution);
        true
    }

    pub fn accepted(&self) -> &[Solution] {
        &self.accepted
    }

    pub fn into_accepted(self) -> Vec<Solution> {
        self.accepted
    }
}
