//! santa-core: participant roster model and gift-assignment draw.
//!
//! Pure domain crate: no async, no I/O. A draw arranges the roster into one
//! cycle, so every participant gives exactly once and receives exactly once.

mod draw;
mod participant;

pub use draw::{Assignment, DrawError, draw, draw_with_rng};
pub use participant::{
    PHONE_COUNTRY_PREFIX, PHONE_LOCAL_DIGITS, Participant, Roster, RosterError,
};
