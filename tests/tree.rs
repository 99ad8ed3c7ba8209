// Copyright 2025 Bilinear Labs - MIT License

use airdrop_merkle::hasher::{Hasher, Keccak256Hasher};
use airdrop_merkle::tree::{verify_proof, KeccakMerkleTree};
use airdrop_merkle::{node::Node, to_node};
use proptest::prelude::*;
use test_case::test_case;

fn sequential_leaves(n: u64) -> Vec<Node> {
    (0..n)
        .map(|i| to_node!(format!("0x{:064x}", i + 1).as_str()))
        .collect::<Vec<Node>>()
}

// Reference root computed by carrying odd nodes up, level by level.
fn reference_root(leaves: &[Node]) -> Node {
    let mut level = leaves.to_vec();
    while level.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < level.len() {
            if i + 1 < level.len() {
                next.push(Keccak256Hasher.hash_pair(&level[i], &level[i + 1]));
            } else {
                next.push(level[i]);
            }
            i += 2;
        }
        level = next;
    }
    level[0]
}

#[test]
fn test_merkle_tree_keccak_10k() {
    let leaves = sequential_leaves(10_000);
    let tree = KeccakMerkleTree::new(Keccak256Hasher, leaves.clone()).unwrap();

    assert_eq!(tree.num_leaves(), 10_000);
    assert_eq!(tree.depth(), 14);
    assert_eq!(tree.root(), reference_root(&leaves));

    // Building again yields the same root.
    let again = KeccakMerkleTree::new(Keccak256Hasher, leaves.clone()).unwrap();
    assert_eq!(again.root(), tree.root());

    // Get proofs for each leaf and verify them.
    for leaf in &leaves {
        let proof = tree.proof(leaf).unwrap();
        assert!(proof.proof.len() <= tree.depth());
        assert!(tree.verify_proof(&proof));
    }
}

#[test_case(1, 0 ; "one leaf")]
#[test_case(2, 1 ; "two leaves")]
#[test_case(3, 2 ; "three leaves")]
#[test_case(4, 2 ; "four leaves")]
#[test_case(5, 3 ; "five leaves")]
#[test_case(8, 3 ; "eight leaves")]
#[test_case(9, 4 ; "nine leaves")]
fn test_depth_and_odd_counts(n: u64, depth: usize) {
    let leaves = sequential_leaves(n);
    let tree = KeccakMerkleTree::new(Keccak256Hasher, leaves.clone()).unwrap();
    assert_eq!(tree.depth(), depth);
    assert_eq!(tree.root(), reference_root(&leaves));

    for i in 0..n {
        let proof = tree.proof_at(i).unwrap();
        assert!(verify_proof(
            &Keccak256Hasher,
            &reference_root(&leaves),
            &leaves[i as usize],
            &proof.proof
        ));
    }
}

#[test]
fn test_five_leaves_last_is_carried_twice() {
    let leaves = sequential_leaves(5);
    let tree = KeccakMerkleTree::new(Keccak256Hasher, leaves.clone()).unwrap();

    // The fifth leaf has no sibling until the top level.
    let proof = tree.proof(&leaves[4]).unwrap();
    assert_eq!(proof.proof.len(), 1);
    assert_eq!(proof.proof[0], reference_root(&leaves[..4]));
}

#[test]
fn test_bit_flip_and_unrelated_leaf_fail() {
    let leaves = sequential_leaves(7);
    let tree = KeccakMerkleTree::new(Keccak256Hasher, leaves.clone()).unwrap();
    let root = tree.root();
    let proof = tree.proof(&leaves[3]).unwrap().proof;

    for entry in 0..proof.len() {
        let mut tampered = proof.clone();
        let mut bytes = *tampered[entry].as_bytes();
        bytes[31] ^= 0x01;
        tampered[entry] = Node::from(bytes);
        assert!(!verify_proof(&Keccak256Hasher, &root, &leaves[3], &tampered));
    }

    let unrelated = to_node!("0xdeadbeef00000000000000000000000000000000000000000000000000000000");
    assert!(!verify_proof(&Keccak256Hasher, &root, &unrelated, &proof));
}

#[test]
fn test_changing_one_leaf_only_touches_its_path() {
    let mut leaves = sequential_leaves(8);
    let before = KeccakMerkleTree::new(Keccak256Hasher, leaves.clone()).unwrap();
    leaves[5] = Node::random();
    let after = KeccakMerkleTree::new(Keccak256Hasher, leaves.clone()).unwrap();

    assert_ne!(before.root(), after.root());
    // Leaf 4 sits next to leaf 5, so only its first sibling changes.
    let p_before = before.proof_at(4).unwrap().proof;
    let p_after = after.proof_at(4).unwrap().proof;
    assert_ne!(p_before[0], p_after[0]);
    assert_eq!(p_before[1..], p_after[1..]);
    // Leaf 0 lives in the other half: only the top sibling changes.
    let p_before = before.proof_at(0).unwrap().proof;
    let p_after = after.proof_at(0).unwrap().proof;
    assert_eq!(p_before[..2], p_after[..2]);
    assert_ne!(p_before[2], p_after[2]);
}

proptest! {
    #[test]
    fn prop_every_proof_verifies(raw in prop::collection::vec(any::<[u8; 32]>(), 1..64)) {
        let leaves: Vec<Node> = raw.into_iter().map(Node::from).collect();
        let tree = KeccakMerkleTree::new(Keccak256Hasher, leaves.clone()).unwrap();
        prop_assert_eq!(tree.root(), reference_root(&leaves));

        for (i, leaf) in leaves.iter().enumerate() {
            let proof = tree.proof_at(i as u64).unwrap();
            prop_assert_eq!(proof.leaf, *leaf);
            prop_assert!(verify_proof(&Keccak256Hasher, &tree.root(), leaf, &proof.proof));
        }
    }

    #[test]
    fn prop_build_is_deterministic(raw in prop::collection::vec(any::<[u8; 32]>(), 1..32)) {
        let leaves: Vec<Node> = raw.into_iter().map(Node::from).collect();
        let a = KeccakMerkleTree::new(Keccak256Hasher, leaves.clone()).unwrap();
        let b = KeccakMerkleTree::new(Keccak256Hasher, leaves).unwrap();
        prop_assert_eq!(a.root(), b.root());
    }
}
