//! Gift-assignment draw: single-cycle permutation over the roster.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::participant::{Participant, Roster};

/// One giver→receiver pairing from a draw.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Participant buying the present.
    pub giver: String,
    /// Participant receiving it.
    pub receiver: String,
    /// Giver's SMS contact, when one was supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub giver_phone: Option<String>,
}

/// Draw failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DrawError {
    /// Rosters below two entries cannot form a cycle.
    #[error("need at least 2 participants, got {count}")]
    InsufficientParticipants {
        /// Number of entries supplied.
        count: usize,
    },
}

/// Draw assignments with the thread-local RNG.
pub fn draw(roster: &Roster) -> Result<Vec<Assignment>, DrawError> {
    draw_with_rng(roster, &mut rand::thread_rng())
}

/// Draw assignments with a caller-supplied RNG (seedable for tests).
///
/// Shuffles the roster (Fisher–Yates, uniform over all n! orders), then reads
/// adjacent pairs off the shuffled sequence as a cycle: position `i` gives to
/// position `(i + 1) % n`. A cycle of length ≥ 2 never maps anyone to
/// themselves, covers every participant exactly once as giver and once as
/// receiver, and stays connected (no disjoint sub-cycles). `n = 2` yields the
/// mutual pair, which is a valid draw.
pub fn draw_with_rng<R: Rng + ?Sized>(
    roster: &Roster,
    rng: &mut R,
) -> Result<Vec<Assignment>, DrawError> {
    if roster.len() < 2 {
        return Err(DrawError::InsufficientParticipants {
            count: roster.len(),
        });
    }

    let mut order: Vec<&Participant> = roster.entries().iter().collect();
    order.shuffle(rng);

    let assignments = order
        .iter()
        .enumerate()
        .map(|(i, giver)| {
            let receiver = order[(i + 1) % order.len()];
            Assignment {
                giver: giver.name.clone(),
                receiver: receiver.name.clone(),
                giver_phone: giver.phone.clone(),
            }
        })
        .collect();
    Ok(assignments)
}
