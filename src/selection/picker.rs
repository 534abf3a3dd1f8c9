//! Next-question selection for quiz rounds.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use rand::Rng;

use super::{CategoryScope, SelectionError, SelectionResult};
use crate::db::{Id, Question};

/// How the picker chooses among unseen candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PickPolicy {
    /// Uniformly at random.
    #[default]
    Random,
    /// Lowest remaining id, in store order.
    First,
}

impl FromStr for PickPolicy {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "first" => Ok(Self::First),
            other => Err(SelectionError::InvalidField {
                field: "pick_policy",
                message: format!("expected 'random' or 'first', got '{}'", other),
            }),
        }
    }
}

impl fmt::Display for PickPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Random => f.write_str("random"),
            Self::First => f.write_str("first"),
        }
    }
}

/// Stateless quiz question picker.
///
/// The picker never records what it returns; the client sends the ids it
/// has already seen with every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuizPicker {
    policy: PickPolicy,
}

impl QuizPicker {
    pub fn new(policy: PickPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> PickPolicy {
        self.policy
    }

    /// Pick one question from `candidates` that is inside `scope` and not in
    /// `previous`.
    ///
    /// Candidates are expected in store order (ascending id).
    pub fn pick<R: Rng>(
        &self,
        candidates: Vec<Question>,
        scope: CategoryScope,
        previous: &HashSet<Id>,
        rng: &mut R,
    ) -> SelectionResult<Question> {
        let mut remaining: Vec<Question> = candidates
            .into_iter()
            .filter(|q| scope.contains(q) && !previous.contains(&q.id))
            .collect();

        if remaining.is_empty() {
            return Err(SelectionError::Exhausted);
        }

        let index = match self.policy {
            PickPolicy::Random => rng.gen_range(0..remaining.len()),
            PickPolicy::First => 0,
        };
        Ok(remaining.swap_remove(index))
    }
}
