//! Participant and roster types with boundary validation.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Country-code prefix every stored phone number must carry.
pub const PHONE_COUNTRY_PREFIX: &str = "+48";

/// Number of digits expected after the country-code prefix.
pub const PHONE_LOCAL_DIGITS: usize = 9;

/// One gift-exchange participant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Display name; identity within a roster.
    pub name: String,
    /// Optional SMS contact in `+48XXXXXXXXX` form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Participant {
    /// Build a participant from a name and an optional phone number.
    #[must_use]
    pub fn new(name: impl Into<String>, phone: Option<String>) -> Self {
        Self {
            name: name.into(),
            phone,
        }
    }
}

/// Validation failures when building a roster from raw entries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    /// A name was blank after trimming.
    #[error("participant name must be non-empty")]
    EmptyName,
    /// The same name appeared twice.
    #[error("duplicate participant name: {name}")]
    DuplicateName {
        /// The repeated name.
        name: String,
    },
    /// A phone number was present but malformed.
    #[error("phone number must start with {PHONE_COUNTRY_PREFIX} and have {PHONE_LOCAL_DIGITS} digits, got {phone}")]
    InvalidPhone {
        /// The rejected value.
        phone: String,
    },
}

/// Ordered, name-unique list of participants.
///
/// Construction goes through [`Roster::from_entries`], so every held entry is
/// already validated. Insertion order is preserved; it is irrelevant to draw
/// correctness but serves as the shuffle input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    entries: Vec<Participant>,
}

impl Roster {
    /// Validate raw entries into a roster.
    ///
    /// Names are trimmed and must be non-empty and unique (case-sensitive).
    /// Phones are trimmed; an empty string counts as absent, anything else
    /// must match the fixed national format.
    pub fn from_entries(entries: Vec<Participant>) -> Result<Self, RosterError> {
        let mut seen: HashSet<String> = HashSet::with_capacity(entries.len());
        let mut validated = Vec::with_capacity(entries.len());
        for raw in entries {
            let name = raw.name.trim().to_string();
            if name.is_empty() {
                return Err(RosterError::EmptyName);
            }
            if !seen.insert(name.clone()) {
                return Err(RosterError::DuplicateName { name });
            }
            let phone = match raw.phone {
                Some(phone) => {
                    let phone = phone.trim().to_string();
                    if phone.is_empty() {
                        None
                    } else if is_valid_phone(&phone) {
                        Some(phone)
                    } else {
                        return Err(RosterError::InvalidPhone { phone });
                    }
                }
                None => None,
            };
            validated.push(Participant { name, phone });
        }
        Ok(Self { entries: validated })
    }

    /// Validated entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[Participant] {
        &self.entries
    }

    /// Number of participants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the roster holds no participants.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn is_valid_phone(phone: &str) -> bool {
    let Some(local) = phone.strip_prefix(PHONE_COUNTRY_PREFIX) else {
        return false;
    };
    local.len() == PHONE_LOCAL_DIGITS && local.chars().all(|c| c.is_ascii_digit())
}
