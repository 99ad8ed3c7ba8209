// Copyright 2025 Bilinear Labs - MIT License

//! Leaf encoding. Every phase declares one record type with a fixed, ordered schema.
//! Records are packed field by field with no length prefixes or delimiters and the
//! packed bytes are hashed into a leaf.

use crate::address::{Address, ChecksumMode};
use crate::errors::MerkleError;
use crate::hasher::Hasher;
use crate::node::Node;
use alloy_primitives::U256;

/// Type tag of one packed field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// 20 raw bytes.
    Address,
    /// 32 big-endian bytes.
    Uint256,
}

impl FieldType {
    pub const fn packed_len(&self) -> usize {
        match self {
            FieldType::Address => Address::LEN,
            FieldType::Uint256 => U256::BYTES,
        }
    }
}

pub trait LeafRecord: Sized {
    /// Ordered field types. The first field is always [`FieldType::Address`].
    const SCHEMA: &'static [FieldType];

    fn from_fields(fields: &[&str], mode: ChecksumMode) -> Result<Self, MerkleError>;

    fn address(&self) -> Address;

    fn encode_packed(&self, buf: &mut Vec<u8>);

    fn packed_len() -> usize {
        Self::SCHEMA.iter().map(FieldType::packed_len).sum()
    }

    fn to_packed(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(Self::packed_len());
        self.encode_packed(&mut buf);
        buf
    }

    fn leaf<H: Hasher>(&self, hasher: &H) -> Node {
        hasher.hash(&self.to_packed())
    }
}

fn check_arity(schema: &[FieldType], fields: &[&str]) -> Result<(), MerkleError> {
    if fields.len() != schema.len() {
        return Err(MerkleError::SchemaMismatch {
            expected: schema.len(),
            found: fields.len(),
        });
    }
    Ok(())
}

/// Phase 1 record: the address alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phase1Record {
    pub address: Address,
}

impl LeafRecord for Phase1Record {
    const SCHEMA: &'static [FieldType] = &[FieldType::Address];

    fn from_fields(fields: &[&str], mode: ChecksumMode) -> Result<Self, MerkleError> {
        check_arity(Self::SCHEMA, fields)?;
        Ok(Self {
            address: Address::parse(fields[0], mode)?,
        })
    }

    fn address(&self) -> Address {
        self.address
    }

    fn encode_packed(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(self.address.as_bytes());
    }
}

/// Parses an unsigned amount: decimal, or hex when prefixed with `0x`. Signs,
/// separators and whitespace are rejected, as are values above `U256::MAX`.
pub fn parse_allotment(value: &str) -> Result<U256, MerkleError> {
    let invalid = |reason: String| MerkleError::InvalidAmount {
        value: value.to_string(),
        reason,
    };

    let (digits, radix) = match value.strip_prefix("0x") {
        Some(hex) => (hex, 16),
        None => (value, 10),
    };
    if digits.is_empty() {
        return Err(invalid("empty amount".to_string()));
    }
    // Plain digits only: no signs, separators or whitespace.
    if !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(invalid("not an unsigned integer".to_string()));
    }

    U256::from_str_radix(digits, u64::from(radix)).map_err(|e| invalid(e.to_string()))
}

/// Phase 2 record: address and allotment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phase2Record {
    pub address: Address,
    pub allotment: U256,
}

impl LeafRecord for Phase2Record {
    const SCHEMA: &'static [FieldType] = &[FieldType::Address, FieldType::Uint256];

    fn from_fields(fields: &[&str], mode: ChecksumMode) -> Result<Self, MerkleError> {
        check_arity(Self::SCHEMA, fields)?;
        Ok(Self {
            address: Address::parse(fields[0], mode)?,
            allotment: parse_allotment(fields[1])?,
        })
    }

    fn address(&self) -> Address {
        self.address
    }

    fn encode_packed(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(self.address.as_bytes());
        buf.extend_from_slice(&self.allotment.to_be_bytes::<{ U256::BYTES }>());
    }
}

/// Encodes every record into its leaf, preserving input order. Duplicates are kept.
pub fn encode_leaves<R: LeafRecord, H: Hasher>(hasher: &H, records: &[R]) -> Vec<Node> {
    records.iter().map(|record| record.leaf(hasher)).collect()
}
