// Copyright 2026 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use schemars::gen::SchemaGenerator;
use schemars::schema::Schema;
use schemars::JsonSchema;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum Bytes32ParseError {
    #[error("the provided value is not valid hex: {source}")]
    MalformedHex {
        #[from]
        source: hex::FromHexError,
    },

    #[error("expected exactly 32 bytes, got {length}")]
    InvalidLength { length: usize },
}

/// Fixed 32-byte value, used for encoding short strings such as the coordinates of a
/// measure location. On the wire it is represented as a `0x`-prefixed lowercase hex string.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Bytes32([u8; 32]);

impl Bytes32 {
    pub const LEN: usize = 32;

    pub const fn new(bytes: [u8; 32]) -> Self {
        Bytes32(bytes)
    }

    pub const fn zero() -> Self {
        Bytes32([0u8; 32])
    }

    /// Encodes the provided string by copying its first 32 bytes and right-padding the
    /// remainder with zeros. An empty string produces the zero value.
    pub fn from_str_truncated(value: &str) -> Self {
        let raw = value.as_bytes();
        let len = raw.len().min(Self::LEN);

        let mut bytes = [0u8; 32];
        bytes[..len].copy_from_slice(&raw[..len]);
        Bytes32(bytes)
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn into_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Attempts to recover the string that was encoded with [`Bytes32::from_str_truncated`].
    /// Trailing zero padding is dropped and invalid utf8 sequences are replaced.
    pub fn to_string_lossy(&self) -> String {
        let end = self
            .0
            .iter()
            .rposition(|b| *b != 0)
            .map(|pos| pos + 1)
            .unwrap_or_default();
        String::from_utf8_lossy(&self.0[..end]).into_owned()
    }
}

impl From<[u8; 32]> for Bytes32 {
    fn from(bytes: [u8; 32]) -> Self {
        Bytes32(bytes)
    }
}

impl AsRef<[u8]> for Bytes32 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Display for Bytes32 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl Debug for Bytes32 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Bytes32({self})")
    }
}

impl FromStr for Bytes32 {
    type Err = Bytes32ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stripped = s.strip_prefix("0x").unwrap_or(s);
        let decoded = hex::decode(stripped)?;
        let bytes: [u8; 32] =
            decoded
                .try_into()
                .map_err(|raw: Vec<u8>| Bytes32ParseError::InvalidLength {
                    length: raw.len(),
                })?;
        Ok(Bytes32(bytes))
    }
}

impl Serialize for Bytes32 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Bytes32 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

impl JsonSchema for Bytes32 {
    fn schema_name() -> String {
        "Bytes32".to_string()
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        String::json_schema(gen)
    }
}
