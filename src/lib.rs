// Copyright 2025 Bilinear Labs - MIT License

/*!
Merkle root and inclusion proof generator for address-based airdrop distributions. It features:

* Typed leaf records: every phase declares a fixed, ordered schema. Records are tightly packed
  (address as 20 raw bytes, `uint256` as 32 big-endian bytes) and hashed with **keccak256**.
* Sorted pairs: every parent hashes its two children in ascending byte order, so verifying a
  proof needs no left/right information.
* Carry-up odd nodes: the last node of an odd level moves up unchanged and adds no sibling to
  proofs. Proofs for such lineages are shorter than the tree depth.

You can build a tree from leaves and get the root and proofs as follows.

```rust
use airdrop_merkle::hasher::Keccak256Hasher;
use airdrop_merkle::tree::{verify_proof, KeccakMerkleTree};
use airdrop_merkle::to_node;

let leaves = vec![
    to_node!("0x532c79f3ea0f4873946d1b14770eaa1c157255a003e73da987b858cc287b0482"),
    to_node!("0x760bde345debf3075c7fc0bcd2134e16ce5fc1a13adaa66ec6452a391f70595c"),
    to_node!("0x1230000000000000000000000000000000000000000000000000000000000000"),
];
let tree = KeccakMerkleTree::new(Keccak256Hasher, leaves.clone()).unwrap();

let proof = tree.proof(&leaves[2]).unwrap();
assert!(verify_proof(&Keccak256Hasher, &tree.root(), &leaves[2], &proof.proof));
```

A whole phase can be generated straight from CSV text. The result serializes to the published
JSON artifact: one `{leaf, proof}` entry per checksummed address plus `merkleRoot`.

```rust
use airdrop_merkle::phase::{GeneratorOptions, Phase};

let csv = "address,amount\n0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed,1000\n";
let distribution = Phase::Two
    .generate_from_csv(csv, &GeneratorOptions::default())
    .unwrap();
println!("root: {}", distribution.merkle_root);
```
*/

pub mod address;
pub mod distribution;
pub mod errors;
pub mod hasher;
pub mod ingest;
pub mod leaf;
pub mod node;
pub mod output;
pub mod phase;
pub mod tree;

pub use address::{Address, ChecksumMode};
pub use distribution::{generate_distribution, Distribution, DistributionEntry, DuplicatePolicy};
pub use errors::MerkleError;
pub use leaf::{parse_allotment, FieldType, LeafRecord, Phase1Record, Phase2Record};
pub use node::Node;
pub use phase::{GeneratorOptions, Phase};
pub use alloy_primitives::U256;

// Re-export the tree for easier access
pub use tree::{verify_proof, KeccakMerkleTree, MerkleProof, MerkleTree};
