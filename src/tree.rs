// Copyright 2025 Bilinear Labs - MIT License

use crate::errors::MerkleError;
use crate::hasher::{Hasher, Keccak256Hasher};
use crate::node::Node;
use std::result::Result;
use tracing::debug;

/// Inclusion proof for one leaf. Siblings are ordered leaf-adjacent first and the root
/// itself is not part of `proof`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleProof {
    pub proof: Vec<Node>,
    pub leaf: Node,
    pub index: u64,
    pub root: Node,
}

impl MerkleProof {
    pub fn verify<H: Hasher>(&self, hasher: &H) -> bool {
        verify_proof(hasher, &self.root, &self.leaf, &self.proof)
    }
}

/// Binary Merkle tree over an ordered leaf list.
///
/// Parents hash their children in ascending byte order (sorted pairs), so proofs carry
/// no left/right information. When a level has an odd number of nodes the last one is
/// carried up to the next level unchanged and contributes no sibling to proofs.
pub struct MerkleTree<H>
where
    H: Hasher,
{
    hasher: H,
    // levels[0] holds the leaves, the last level holds only the root.
    levels: Vec<Vec<Node>>,
}

// Type alias for common configuration
pub type KeccakMerkleTree = MerkleTree<Keccak256Hasher>;

impl<H> MerkleTree<H>
where
    H: Hasher,
{
    pub fn new(hasher: H, leaves: Vec<Node>) -> Result<Self, MerkleError> {
        if leaves.is_empty() {
            return Err(MerkleError::EmptyTree);
        }

        let mut levels = vec![leaves];
        loop {
            let current = &levels[levels.len() - 1];
            if current.len() == 1 {
                break;
            }
            let next: Vec<Node> = current
                .chunks(2)
                .map(|pair| match *pair {
                    [left, right] => hasher.hash_pair(&left, &right),
                    // Odd node is carried up unchanged.
                    _ => pair[0],
                })
                .collect();
            levels.push(next);
        }

        debug!(
            num_leaves = levels[0].len(),
            depth = levels.len() - 1,
            "built merkle tree"
        );

        Ok(Self { hasher, levels })
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    pub fn root(&self) -> Node {
        // Construction guarantees a final level with exactly one node.
        self.levels[self.levels.len() - 1][0]
    }

    pub fn leaves(&self) -> &[Node] {
        &self.levels[0]
    }

    pub fn num_leaves(&self) -> u64 {
        self.levels[0].len() as u64
    }

    /// Number of hashing levels above the leaves.
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    /// Position of the first occurrence of `leaf`. With duplicate leaves the later
    /// positions are never returned.
    pub fn leaf_index(&self, leaf: &Node) -> Option<u64> {
        self.levels[0]
            .iter()
            .position(|candidate| candidate == leaf)
            .map(|index| index as u64)
    }

    pub fn proof(&self, leaf: &Node) -> Result<MerkleProof, MerkleError> {
        let index = self
            .leaf_index(leaf)
            .ok_or(MerkleError::LeafNotFound(*leaf))?;
        self.proof_at(index)
    }

    pub fn proof_at(&self, leaf_idx: u64) -> Result<MerkleProof, MerkleError> {
        if leaf_idx >= self.num_leaves() {
            return Err(MerkleError::LeafIndexOutOfBounds {
                index: leaf_idx,
                num_leaves: self.num_leaves(),
            });
        }

        let mut proof = Vec::with_capacity(self.depth());
        let mut idx = leaf_idx as usize;

        // Go up to the root taking siblings as we go. A carried-up node has no sibling.
        for level in &self.levels[..self.depth()] {
            let sibling = idx ^ 1;
            if let Some(node) = level.get(sibling) {
                proof.push(*node);
            }
            idx /= 2;
        }

        Ok(MerkleProof {
            proof,
            leaf: self.levels[0][leaf_idx as usize],
            index: leaf_idx,
            root: self.root(),
        })
    }

    pub fn verify_proof(&self, proof: &MerkleProof) -> bool {
        proof.root == self.root() && proof.verify(&self.hasher)
    }
}

/// Recomputes the root from `leaf` by sorted-pair hashing with each sibling in turn.
/// Never errors: any mismatch just yields `false`.
pub fn verify_proof<H: Hasher>(hasher: &H, root: &Node, leaf: &Node, proof: &[Node]) -> bool {
    let computed = proof
        .iter()
        .fold(*leaf, |acc, sibling| hasher.hash_pair(&acc, sibling));
    computed == *root
}
