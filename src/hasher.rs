// Copyright 2025 Bilinear Labs - MIT License

use crate::node::Node;
use alloy_primitives::keccak256;

/// Hash function shared by the leaf encoder and the tree.
pub trait Hasher {
    fn hash(&self, data: &[u8]) -> Node;

    /// Hashes two children in ascending byte order, so the parent does not depend on
    /// which side each child came from.
    fn hash_pair(&self, a: &Node, b: &Node) -> Node {
        let (left, right) = if a <= b { (a, b) } else { (b, a) };
        let mut buf = [0u8; 2 * Node::LEN];
        buf[..Node::LEN].copy_from_slice(left.as_ref());
        buf[Node::LEN..].copy_from_slice(right.as_ref());
        self.hash(&buf)
    }
}

// Implements the keccak256 hash function.
#[derive(Debug, Clone, Copy, Default)]
pub struct Keccak256Hasher;
impl Hasher for Keccak256Hasher {
    fn hash(&self, data: &[u8]) -> Node {
        Node::from(keccak256(data).0)
    }
}
