//! Allowlist Proof Verification
//!
//! The allowlist is committed on-chain as a single 32-byte merkle root.
//! A minter proves membership by supplying the sibling hashes on the path
//! from their leaf up to the root.
//!
//! # Hashing Rules
//!
//! ```text
//! leaf   = keccak256(owner pubkey bytes)
//! parent = keccak256(min(a, b) || max(a, b))
//! ```
//!
//! Sorting each pair before hashing means a proof is just a list of
//! siblings; the verifier never needs to know left from right.
//!
//! # Wire Format
//!
//! Proofs arrive as raw bytes: `n * 32` bytes of sibling hashes, in order
//! from the leaf level upwards. Anything else is rejected as not verifying.

use crate::constants::MAX_PROOF_DEPTH;
use solana_program::{keccak::hashv, pubkey::Pubkey};

/// A 32-byte node of the allowlist tree.
pub type Node = [u8; 32];

/// Root of an empty allowlist. No proof verifies against it.
pub const EMPTY_ROOT: Node = [0u8; 32];

// =============================================================================
// HASHING
// =============================================================================

/// Hash an address into its leaf.
pub fn leaf_hash(owner: &Pubkey) -> Node {
    hashv(&[owner.as_ref()]).to_bytes()
}

/// Combine two nodes with the canonical (sorted) pair ordering.
pub fn hash_pair(a: &Node, b: &Node) -> Node {
    if a <= b {
        hashv(&[a.as_ref(), b.as_ref()]).to_bytes()
    } else {
        hashv(&[b.as_ref(), a.as_ref()]).to_bytes()
    }
}

// =============================================================================
// VERIFICATION
// =============================================================================

/// Check that `owner` is a member of the allowlist committed by `root`.
///
/// Fails closed: a proof whose length is not a multiple of 32 bytes, or
/// that is deeper than `MAX_PROOF_DEPTH`, simply does not verify.
pub fn verify(root: &Node, owner: &Pubkey, proof: &[u8]) -> bool {
    let siblings = proof.chunks_exact(32);
    if !siblings.remainder().is_empty() || siblings.len() > MAX_PROOF_DEPTH {
        return false;
    }

    let computed = siblings.fold(leaf_hash(owner), |node, sibling| {
        let mut sibling_node = [0u8; 32];
        sibling_node.copy_from_slice(sibling);
        hash_pair(&node, &sibling_node)
    });

    computed == *root
}

// =============================================================================
// TREE CONSTRUCTION (for clients and tests)
// =============================================================================

/// Hash every level of the tree, leaves first, root level last.
///
/// Adjacent nodes are paired; an odd node at the end of a level is
/// promoted unchanged to the next level.
fn build_levels(leaves: &[Node]) -> Vec<Vec<Node>> {
    let mut levels = vec![leaves.to_vec()];
    while levels.last().map_or(false, |level| level.len() > 1) {
        let next = levels
            .last()
            .map(|level| {
                level
                    .chunks(2)
                    .map(|pair| pair.get(1).map_or(pair[0], |right| hash_pair(&pair[0], right)))
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();
        levels.push(next);
    }
    levels
}

/// Compute the root committing to `leaves`.
pub fn compute_root(leaves: &[Node]) -> Node {
    build_levels(leaves)
        .last()
        .and_then(|level| level.first().copied())
        .unwrap_or(EMPTY_ROOT)
}

/// Build the proof for the leaf at `index`, or `None` if out of range.
pub fn build_proof(leaves: &[Node], index: usize) -> Option<Vec<Node>> {
    if index >= leaves.len() {
        return None;
    }

    let mut proof = Vec::new();
    let mut position = index;
    for level in build_levels(leaves).iter().filter(|level| level.len() > 1) {
        let sibling = position ^ 1;
        if let Some(node) = level.get(sibling) {
            proof.push(*node);
        }
        position /= 2;
    }
    Some(proof)
}

/// Flatten a proof into the byte layout expected by the `Mint` instruction.
pub fn encode_proof(proof: &[Node]) -> Vec<u8> {
    proof.iter().flat_map(|node| node.iter().copied()).collect()
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn allowlist(size: usize) -> (Vec<Pubkey>, Vec<Node>) {
        let owners: Vec<Pubkey> = (0..size).map(|_| Pubkey::new_unique()).collect();
        let leaves = owners.iter().map(leaf_hash).collect();
        (owners, leaves)
    }

    #[test]
    fn test_every_member_verifies() {
        for size in [1, 2, 3, 5, 8, 13] {
            let (owners, leaves) = allowlist(size);
            let root = compute_root(&leaves);
            for (index, owner) in owners.iter().enumerate() {
                let proof = build_proof(&leaves, index).unwrap();
                assert!(verify(&root, owner, &encode_proof(&proof)), "size {size} index {index}");
            }
        }
    }

    #[test]
    fn test_single_leaf_root_is_the_leaf() {
        let (owners, leaves) = allowlist(1);
        assert_eq!(compute_root(&leaves), leaves[0]);
        assert!(verify(&leaves[0], &owners[0], &[]));
    }

    #[test]
    fn test_non_member_is_rejected() {
        let (owners, leaves) = allowlist(4);
        let root = compute_root(&leaves);
        let stranger = Pubkey::new_unique();

        // Borrowing a member's proof does not help
        let proof = encode_proof(&build_proof(&leaves, 0).unwrap());
        assert!(verify(&root, &owners[0], &proof));
        assert!(!verify(&root, &stranger, &proof));
        assert!(!verify(&root, &stranger, &[]));
    }

    #[test]
    fn test_replaced_root_invalidates_old_proofs() {
        let (owners, leaves) = allowlist(3);
        let proof = encode_proof(&build_proof(&leaves, 1).unwrap());

        let (_, other_leaves) = allowlist(3);
        let new_root = compute_root(&other_leaves);
        assert!(!verify(&new_root, &owners[1], &proof));
    }

    #[test]
    fn test_pair_order_does_not_matter() {
        let a = leaf_hash(&Pubkey::new_unique());
        let b = leaf_hash(&Pubkey::new_unique());
        assert_eq!(hash_pair(&a, &b), hash_pair(&b, &a));
    }

    #[test]
    fn test_malformed_proof_fails_closed() {
        let (owners, leaves) = allowlist(2);
        let root = compute_root(&leaves);
        let mut proof = encode_proof(&build_proof(&leaves, 0).unwrap());

        // Trailing partial hash
        proof.push(0xAB);
        assert!(!verify(&root, &owners[0], &proof));

        // Too deep
        let deep = vec![0u8; 32 * (MAX_PROOF_DEPTH + 1)];
        assert!(!verify(&root, &owners[0], &deep));
    }

    #[test]
    fn test_empty_allowlist() {
        assert_eq!(compute_root(&[]), EMPTY_ROOT);
        assert!(build_proof(&[], 0).is_none());
        assert!(!verify(&EMPTY_ROOT, &Pubkey::new_unique(), &[]));
    }
}
