//! Canonical account / contract addresses.
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::SeekerId;

/// Failures canonicalizing an address string.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("address missing 0x prefix: {0:?}")]
    MissingPrefix(String),

    #[error("address contains non-hex characters: {0:?}")]
    NotHex(String),
}

/// Account or contract address in canonical form.
///
/// Stored case-normalized so that two addresses compare equal exactly when
/// their canonical forms match, regardless of the casing the query layer
/// delivered. The null address `0x0` parses but never owns anything; see
/// [`Address::is_null`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    /// Canonicalize a raw address string.
    pub fn parse(raw: &str) -> Result<Self, AddressError> {
        let trimmed = raw.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .ok_or_else(|| AddressError::MissingPrefix(raw.to_owned()))?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(AddressError::NotHex(raw.to_owned()));
        }
        Ok(Self(format!("0x{}", digits.to_ascii_lowercase())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the null address (all-zero digits), which is rejected as a
    /// valid owner wherever ownership is matched.
    pub fn is_null(&self) -> bool {
        self.0[2..].bytes().all(|b| b == b'0')
    }

    /// Deterministic seeker identifier: the low 32 bits of the numeric form.
    pub fn seeker_id(&self) -> SeekerId {
        let digits = &self.0[2..];
        let tail = &digits[digits.len().saturating_sub(8)..];
        // Digits were validated as hex at parse time.
        SeekerId(u32::from_str_radix(tail, 16).unwrap_or_default())
    }
}

impl TryFrom<String> for Address {
    type Error = AddressError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
