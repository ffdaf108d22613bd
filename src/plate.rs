//! Validated license plate used as the registry key.
//!
//! A plate is four ASCII digits followed by three uppercase consonants of the
//! English alphabet (`1234BCD`). Construction through [`Plate::new`] is strict
//! and case-sensitive; [`str::parse`] applies the console normalization first
//! (trim, uppercase) so interactive input like ` 1234bcd ` is accepted.

use crate::error::WorkshopError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const DIGITS: usize = 4;
const LETTERS: usize = 3;
const VOWELS: &[u8] = b"AEIOU";

#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Plate(String);

impl Plate {
    /// Validate `raw` against `^[0-9]{4}[B-DF-HJ-NP-TV-Z]{3}$`.
    ///
    /// The input is expected to be uppercased already; lowercase letters are
    /// rejected rather than folded.
    pub fn new(raw: impl Into<String>) -> Result<Self, WorkshopError> {
        let raw = raw.into();
        if is_valid(&raw) {
            Ok(Self(raw))
        } else {
            Err(WorkshopError::InvalidFormat(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_valid(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    if bytes.len() != DIGITS + LETTERS {
        return false;
    }
    let (digits, letters) = bytes.split_at(DIGITS);
    digits.iter().all(u8::is_ascii_digit) && letters.iter().all(|&b| is_consonant(b))
}

fn is_consonant(byte: u8) -> bool {
    byte.is_ascii_uppercase() && !VOWELS.contains(&byte)
}

impl FromStr for Plate {
    type Err = WorkshopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.trim().to_uppercase())
    }
}

impl fmt::Display for Plate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Plate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Plate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
