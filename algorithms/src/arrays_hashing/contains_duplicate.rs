//! Repeated-value detection.
//!
//! Variables:
//!   a    : &[T]        — input, length N
//!   seen : HashSet<&T> — values visited so far
//!
//! Equations:
//!   EarlyExit:     first i with a[i] ∈ seen  →  true;  else seen' = seen ∪ {a[i]}
//!   DistinctCount: |{a[0..N]}| < N
//!
//!   Both O(N) expected time, O(N) space. EarlyExit stops at the first
//!   repeat; DistinctCount always hashes every element.

use std::collections::HashSet;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicateStrategy {
    #[default]
    EarlyExit,
    DistinctCount,
}

impl DuplicateStrategy {
    pub const ALL: [DuplicateStrategy; 2] = [Self::EarlyExit, Self::DistinctCount];

    pub fn detect<T: Hash + Eq>(self, nums: &[T]) -> bool {
        match self {
            Self::EarlyExit => {
                let mut seen = HashSet::with_capacity(nums.len());
                // `insert` is false when the value was already present.
                nums.iter().any(|n| !seen.insert(n))
            }
            Self::DistinctCount => nums.iter().collect::<HashSet<_>>().len() < nums.len(),
        }
    }
}

pub fn has_duplicate<T: Hash + Eq>(nums: &[T]) -> bool {
    DuplicateStrategy::EarlyExit.detect(nums)
}
