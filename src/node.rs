// Copyright 2025 Bilinear Labs - MIT License

//! Fixed size 32-byte node used for leaves, internal nodes and roots.

use rand::RngCore;
use serde::{Serialize, Serializer};
use std::fmt;

/// A 32-byte hash. Ordering is bytewise, which is what the sorted-pair rule relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Node([u8; 32]);

impl Node {
    pub const LEN: usize = 32;
    pub const ZERO: Node = Node([0; Node::LEN]);

    pub fn as_bytes(&self) -> &[u8; Node::LEN] {
        &self.0
    }

    pub fn random() -> Self {
        let mut bytes = [0u8; Node::LEN];
        rand::rng().fill_bytes(&mut bytes);
        bytes.into()
    }
}

impl From<[u8; Node::LEN]> for Node {
    fn from(bytes: [u8; Node::LEN]) -> Self {
        Node(bytes)
    }
}

impl TryFrom<&str> for Node {
    type Error = String;

    fn try_from(hex: &str) -> Result<Self, Self::Error> {
        let hex = hex.strip_prefix("0x").unwrap_or(hex);

        if hex.len() != 64 {
            return Err("Hex string must be 64 characters long".to_string());
        }

        let mut bytes = [0u8; Node::LEN];
        hex::decode_to_slice(hex, &mut bytes).map_err(|_| "Invalid hex character")?;

        Ok(Node(bytes))
    }
}

impl AsRef<[u8]> for Node {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

// Nodes are published as 0x-prefixed lowercase hex.
impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[macro_export]
macro_rules! to_node {
    ($hex:expr) => {{
        $crate::node::Node::try_from($hex).expect("Invalid node hex literal")
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node() {
        assert_eq!(
            to_node!("0x1230000000000000000000000000000000000000000000000000000000000000"),
            Node([
                0x12, 0x30, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
                0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
                0x00, 0x00, 0x00, 0x00
            ])
        );

        // Prefix is optional on input.
        assert_eq!(
            to_node!("760bde345debf3075c7fc0bcd2134e16ce5fc1a13adaa66ec6452a391f70595c"),
            to_node!("0x760bde345debf3075c7fc0bcd2134e16ce5fc1a13adaa66ec6452a391f70595c")
        );

        assert_eq!(
            format!(
                "{}",
                to_node!("0x760BDE345DEBF3075C7FC0BCD2134E16CE5FC1A13ADAA66EC6452A391F70595C")
            ),
            "0x760bde345debf3075c7fc0bcd2134e16ce5fc1a13adaa66ec6452a391f70595c"
        );
    }

    #[test]
    fn test_node_invalid_hex() {
        assert!(Node::try_from("0x1234").is_err());
        assert!(Node::try_from(
            "0xzz0bde345debf3075c7fc0bcd2134e16ce5fc1a13adaa66ec6452a391f70595c"
        )
        .is_err());
    }

    #[test]
    fn test_node_ordering_is_bytewise() {
        let low = to_node!("0x00ff000000000000000000000000000000000000000000000000000000000000");
        let high = to_node!("0x0100000000000000000000000000000000000000000000000000000000000000");
        assert!(low < high);
        assert!(Node::ZERO < low);
    }

    #[test]
    fn test_node_serializes_as_hex_string() {
        let node = to_node!("0x1230000000000000000000000000000000000000000000000000000000000000");
        assert_eq!(
            serde_json::to_string(&node).unwrap(),
            "\"0x1230000000000000000000000000000000000000000000000000000000000000\""
        );
    }
}
