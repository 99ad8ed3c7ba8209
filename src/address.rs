// Copyright 2025 Bilinear Labs - MIT License

//! 20-byte account address with EIP-55 checksum support.

use crate::errors::MerkleError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// How strictly mixed-case addresses are checked against their checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChecksumMode {
    /// Any address containing an uppercase letter must match its EIP-55 checksum.
    #[default]
    Strict,
    /// Hex digits are read case-insensitively and the checksum is ignored.
    Lenient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(alloy_primitives::Address);

impl Address {
    pub const LEN: usize = 20;

    pub fn parse(value: &str, mode: ChecksumMode) -> Result<Self, MerkleError> {
        let invalid = |reason: String| MerkleError::InvalidAddress {
            value: value.to_string(),
            reason,
        };

        // Checksummed and plain forms alike must carry the prefix.
        if !value.starts_with("0x") {
            return Err(invalid("missing 0x prefix".to_string()));
        }

        let has_upper = value[2..].bytes().any(|c| c.is_ascii_uppercase());
        let parsed = if mode == ChecksumMode::Strict && has_upper {
            alloy_primitives::Address::parse_checksummed(value, None)
                .map_err(|e| invalid(e.to_string()))?
        } else {
            alloy_primitives::Address::from_str(value).map_err(|e| invalid(e.to_string()))?
        };

        Ok(Address(parsed))
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_slice()
    }

    /// EIP-55 mixed-case form.
    pub fn to_checksum(&self) -> String {
        self.0.to_checksum(None)
    }
}

impl From<[u8; Address::LEN]> for Address {
    fn from(bytes: [u8; Address::LEN]) -> Self {
        Address(alloy_primitives::Address::from(bytes))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_checksum())
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_checksum())
    }
}
