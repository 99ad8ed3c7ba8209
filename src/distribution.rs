// Copyright 2025 Bilinear Labs - MIT License

//! Assembles the published distribution: one `{leaf, proof}` entry per address plus
//! the Merkle root.

use crate::address::Address;
use crate::errors::MerkleError;
use crate::hasher::Hasher;
use crate::leaf::{encode_leaves, LeafRecord};
use crate::node::Node;
use crate::tree::MerkleTree;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::{info, warn};

/// What to do when the same address appears in more than one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// The later record replaces the entry of the earlier one. Every record still
    /// contributes a leaf to the tree.
    #[default]
    LastWins,
    /// Abort before building the tree.
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionEntry {
    pub leaf: Node,
    pub proof: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    pub merkle_root: Node,
    // Ordered by first appearance of each address.
    entries: Vec<(Address, DistributionEntry)>,
}

impl Distribution {
    pub fn entries(&self) -> &[(Address, DistributionEntry)] {
        &self.entries
    }

    pub fn get(&self, address: &Address) -> Option<&DistributionEntry> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == address)
            .map(|(_, entry)| entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Address keys first, then "merkleRoot".
impl Serialize for Distribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len() + 1))?;
        for (address, entry) in &self.entries {
            map.serialize_entry(address, entry)?;
        }
        map.serialize_entry("merkleRoot", &self.merkle_root)?;
        map.end()
    }
}

pub fn generate_distribution<R, H>(
    hasher: H,
    records: &[R],
    policy: DuplicatePolicy,
) -> Result<Distribution, MerkleError>
where
    R: LeafRecord,
    H: Hasher,
{
    if policy == DuplicatePolicy::Reject {
        let mut seen = HashSet::with_capacity(records.len());
        for record in records {
            if !seen.insert(record.address()) {
                return Err(MerkleError::DuplicateAddress(record.address()));
            }
        }
    }

    let leaves = encode_leaves(&hasher, records);

    // A leaf that appears more than once is always proven from its first position.
    let mut first_positions: HashMap<Node, u64> = HashMap::with_capacity(leaves.len());
    for (index, leaf) in leaves.iter().enumerate() {
        first_positions.entry(*leaf).or_insert(index as u64);
    }

    let tree = MerkleTree::new(hasher, leaves)?;

    let mut positions: HashMap<Address, usize> = HashMap::with_capacity(records.len());
    let mut entries: Vec<(Address, DistributionEntry)> = Vec::with_capacity(records.len());

    for (leaf, record) in tree.leaves().iter().zip(records) {
        let index = first_positions
            .get(leaf)
            .copied()
            .ok_or(MerkleError::LeafNotFound(*leaf))?;
        let proof = tree.proof_at(index)?;
        let entry = DistributionEntry {
            leaf: proof.leaf,
            proof: proof.proof,
        };
        let address = record.address();
        match positions.get(&address) {
            Some(&position) => {
                warn!(%address, "duplicate address, replacing earlier entry");
                entries[position].1 = entry;
            }
            None => {
                positions.insert(address, entries.len());
                entries.push((address, entry));
            }
        }
    }

    info!(
        root = %tree.root(),
        leaves = tree.num_leaves(),
        entries = entries.len(),
        "generated distribution"
    );

    Ok(Distribution {
        merkle_root: tree.root(),
        entries,
    })
}
