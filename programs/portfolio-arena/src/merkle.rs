use anchor_lang::prelude::*;
use solana_keccak_hasher::hashv;

use crate::constants::{LEAF_KIND_BET_PAYOUT, LEAF_KIND_WINNINGS};

/// What a settlement leaf pays out. The tag byte keeps battle winnings and
/// bet payouts disjoint even for the same (recipient, amount, battle).
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ClaimKind {
    Winnings,
    BetPayout,
}

impl ClaimKind {
    pub fn tag(&self) -> u8 {
        match self {
            ClaimKind::Winnings => LEAF_KIND_WINNINGS,
            ClaimKind::BetPayout => LEAF_KIND_BET_PAYOUT,
        }
    }
}

/// Compute keccak256 hash of the input
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    hashv(&[data]).0
}

/// Compute the leaf hash for a settlement entry
/// leaf = keccak256(recipient || amount || battle || kind_tag)
/// Amount is little-endian encoded.
///
/// The off-chain settlement oracle must build its tree from leaves produced
/// by this exact function; the claim instructions reconstruct the leaf from
/// the signer and reject anything else.
pub fn claim_leaf_hash(
    recipient: &Pubkey,
    amount: u64,
    battle: &Pubkey,
    kind: ClaimKind,
) -> [u8; 32] {
    let mut data = Vec::with_capacity(32 + 8 + 32 + 1); // 73 bytes
    data.extend_from_slice(recipient.as_ref());
    data.extend_from_slice(&amount.to_le_bytes());
    data.extend_from_slice(battle.as_ref());
    data.push(kind.tag());
    keccak256(&data)
}

/// Compute hash of two sibling nodes
/// The two hashes are concatenated in ascending byte order before hashing,
/// so the same parent is produced regardless of proof direction.
pub fn hash_pair(left: &[u8; 32], right: &[u8; 32]) -> [u8; 32] {
    let mut combined = Vec::with_capacity(64);
    if left <= right {
        combined.extend_from_slice(left);
        combined.extend_from_slice(right);
    } else {
        combined.extend_from_slice(right);
        combined.extend_from_slice(left);
    }
    keccak256(&combined)
}

/// Verify a Merkle proof
/// Returns true if the leaf belongs to the tree with the given root.
pub fn verify_proof(leaf: [u8; 32], proof: &[[u8; 32]], root: &[u8; 32]) -> bool {
    let mut current = leaf;

    for sibling in proof.iter() {
        current = hash_pair(&current, sibling);
    }

    current == *root
}

/// Build the root over a leaf set. An odd node at any level is promoted to
/// the next level unchanged. Used by the settlement oracle and by tests;
/// the on-chain verifier only ever walks proofs.
pub fn build_root(leaves: &[[u8; 32]]) -> [u8; 32] {
    if leaves.is_empty() {
        return [0u8; 32];
    }

    let mut level = leaves.to_vec();
    while level.len() > 1 {
        let mut next = Vec::with_capacity(level.len().div_ceil(2));
        for pair in level.chunks(2) {
            match pair {
                [left, right] => next.push(hash_pair(left, right)),
                [odd] => next.push(*odd),
                _ => unreachable!(),
            }
        }
        level = next;
    }
    level[0]
}

/// Generate the sibling path for `index` under the same pairing rule as
/// `build_root`. Promoted odd nodes contribute no sibling at that level.
pub fn build_proof(leaves: &[[u8; 32]], index: usize) -> Vec<[u8; 32]> {
    let mut proof = Vec::new();
    let mut level = leaves.to_vec();
    let mut pos = index;

    while level.len() > 1 {
        let sibling = if pos % 2 == 0 { pos + 1 } else { pos - 1 };
        if sibling < level.len() {
            proof.push(level[sibling]);
        }

        let mut next = Vec::with_capacity(level.len().div_ceil(2));
        for pair in level.chunks(2) {
            match pair {
                [left, right] => next.push(hash_pair(left, right)),
                [odd] => next.push(*odd),
                _ => unreachable!(),
            }
        }
        level = next;
        pos /= 2;
    }
    proof
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_leaves(n: usize) -> Vec<[u8; 32]> {
        (0..n)
            .map(|i| {
                claim_leaf_hash(
                    &Pubkey::new_unique(),
                    (i as u64 + 1) * 1_000,
                    &Pubkey::new_unique(),
                    if i % 2 == 0 {
                        ClaimKind::Winnings
                    } else {
                        ClaimKind::BetPayout
                    },
                )
            })
            .collect()
    }

    #[test]
    fn hash_pair_is_commutative() {
        let a = keccak256(b"a");
        let b = keccak256(b"b");
        assert_eq!(hash_pair(&a, &b), hash_pair(&b, &a));
    }

    #[test]
    fn every_leaf_proves_against_the_root() {
        for n in [1usize, 2, 3, 5, 8, 13] {
            let leaves = sample_leaves(n);
            let root = build_root(&leaves);
            for (i, leaf) in leaves.iter().enumerate() {
                let proof = build_proof(&leaves, i);
                assert!(
                    verify_proof(*leaf, &proof, &root),
                    "leaf {i} of {n} failed"
                );
            }
        }
    }

    #[test]
    fn proof_fails_against_a_different_leaf_set() {
        let leaves = sample_leaves(5);
        let proof = build_proof(&leaves, 2);

        let other_root = build_root(&sample_leaves(5));
        assert!(!verify_proof(leaves[2], &proof, &other_root));
    }

    #[test]
    fn tampered_amount_fails_verification() {
        let recipient = Pubkey::new_unique();
        let battle = Pubkey::new_unique();
        let mut leaves = sample_leaves(4);
        leaves[0] = claim_leaf_hash(&recipient, 4_000, &battle, ClaimKind::Winnings);
        let root = build_root(&leaves);
        let proof = build_proof(&leaves, 0);

        let forged = claim_leaf_hash(&recipient, 5_000, &battle, ClaimKind::Winnings);
        assert!(!verify_proof(forged, &proof, &root));
    }

    #[test]
    fn kind_tag_separates_winnings_from_bet_payouts() {
        let recipient = Pubkey::new_unique();
        let battle = Pubkey::new_unique();
        assert_ne!(
            claim_leaf_hash(&recipient, 100, &battle, ClaimKind::Winnings),
            claim_leaf_hash(&recipient, 100, &battle, ClaimKind::BetPayout),
        );
    }

    #[test]
    fn empty_leaf_set_has_zero_root() {
        assert_eq!(build_root(&[]), [0u8; 32]);
    }
}
