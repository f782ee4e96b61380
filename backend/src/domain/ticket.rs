//! Ticket numbers: the public handle of a complaint.
//!
//! A ticket number is six symbols drawn from `A-Z0-9` (36 symbols, roughly 31
//! bits of entropy). Uniqueness is not a property of the value itself; the
//! complaint store enforces it and the service regenerates on collision.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use super::ports::TicketGenerator;

/// Number of symbols in a ticket number.
pub const TICKET_LENGTH: usize = 6;

/// Symbols a ticket number may contain.
pub const TICKET_ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Validation errors raised by [`TicketNumber::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TicketNumberValidationError {
    #[error("ticket number must not be empty")]
    Empty,
    #[error("ticket number must be {expected} characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("ticket number may only contain A-Z and 0-9, found {character:?}")]
    InvalidCharacter { character: char },
}

/// Six-symbol uppercase alphanumeric complaint identifier.
///
/// # Examples
/// ```
/// use complaints::domain::TicketNumber;
///
/// let ticket = TicketNumber::new("AB12CD").expect("well-formed ticket");
/// assert_eq!(ticket.as_str(), "AB12CD");
/// assert!(TicketNumber::new("ab12cd").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TicketNumber(String);

impl TicketNumber {
    /// Validate and wrap `value`.
    pub fn new(value: impl Into<String>) -> Result<Self, TicketNumberValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(TicketNumberValidationError::Empty);
        }
        if let Some(character) = value
            .chars()
            .find(|c| !(c.is_ascii_uppercase() || c.is_ascii_digit()))
        {
            return Err(TicketNumberValidationError::InvalidCharacter { character });
        }
        let actual = value.len();
        if actual != TICKET_LENGTH {
            return Err(TicketNumberValidationError::InvalidLength {
                expected: TICKET_LENGTH,
                actual,
            });
        }
        Ok(Self(value))
    }

    /// Draw a ticket number uniformly at random, with replacement.
    pub fn generate_with<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let value = (0..TICKET_LENGTH)
            .filter_map(|_| TICKET_ALPHABET.choose(&mut *rng))
            .map(|&symbol| char::from(symbol))
            .collect();
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TicketNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for TicketNumber {
    type Err = TicketNumberValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for TicketNumber {
    type Error = TicketNumberValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TicketNumber> for String {
    fn from(value: TicketNumber) -> Self {
        value.0
    }
}

/// Production [`TicketGenerator`] backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomTicketGenerator;

impl TicketGenerator for RandomTicketGenerator {
    fn generate(&self) -> TicketNumber {
        TicketNumber::generate_with(&mut rand::thread_rng())
    }
}
