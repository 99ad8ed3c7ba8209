// Copyright 2025 Bilinear Labs - MIT License

use crate::address::Address;
use crate::node::Node;

#[derive(Debug, thiserror::Error)]
pub enum MerkleError {
    #[error("Invalid address {value:?}: {reason}")]
    InvalidAddress { value: String, reason: String },

    #[error("Invalid uint256 amount {value:?}: {reason}")]
    InvalidAmount { value: String, reason: String },

    #[error("Record does not match schema: expected {expected} fields, found {found}")]
    SchemaMismatch { expected: usize, found: usize },

    #[error("Cannot build a tree without leaves")]
    EmptyTree,

    #[error("Leaf not found in tree: {0}")]
    LeafNotFound(Node),

    #[error("Leaf index out of bounds: {index}, num_leaves: {num_leaves}")]
    LeafIndexOutOfBounds { index: u64, num_leaves: u64 },

    #[error("Duplicate address: {0}")]
    DuplicateAddress(Address),

    #[error("Malformed CSV at line {line}: {reason}")]
    Csv { line: usize, reason: String },

    #[error("Error writing artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error serializing artifact: {0}")]
    Serialization(#[from] serde_json::Error),
}
