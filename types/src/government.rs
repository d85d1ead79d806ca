//! Government and official identity types.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::keys::PublicKey;

/// A government account identifier — an ISO 3166-1 alpha-3 country code.
///
/// Stable across the system's lifetime; accounts are never deleted, only
/// suspended.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct GovernmentId(String);

impl GovernmentId {
    /// Create a new government identifier from a raw string.
    ///
    /// # Panics
    /// Panics if the string is not a 3-letter uppercase ASCII code.
    pub fn new(raw: impl Into<String>) -> Self {
        let s = raw.into();
        assert!(
            Self::is_valid_code(&s),
            "government id must be an ISO 3166-1 alpha-3 code"
        );
        Self(s)
    }

    /// Fallible constructor for untrusted input (config files, wire data).
    pub fn parse(raw: impl Into<String>) -> Option<Self> {
        let s = raw.into();
        Self::is_valid_code(&s).then_some(Self(s))
    }

    fn is_valid_code(s: &str) -> bool {
        s.len() == 3 && s.bytes().all(|b| b.is_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The canonical 3-byte wire representation.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Display for GovernmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Deserialization goes through `parse` so wire data and config files cannot
// smuggle in a malformed code.
impl<'de> Deserialize<'de> for GovernmentId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(raw.as_str()).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "invalid government id {raw:?}: expected an ISO 3166-1 alpha-3 code"
            ))
        })
    }
}

/// An identifier for an authorized government official (e.g. `"IND-treasury-1"`).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OfficialId(String);

impl OfficialId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OfficialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An authorized official: identity plus the Ed25519 key their signatures
/// are verified against.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Official {
    pub id: OfficialId,
    pub public_key: PublicKey,
}
