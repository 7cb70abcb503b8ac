use anchor_lang::prelude::*;

/// Global singleton — one per program deployment.
/// Seeds: [b"global_state"]
///
/// Holds the settlement oracle's published Merkle root. Every root is
/// expected to be cumulative: built over all still-unclaimed leaves from
/// prior epochs plus the new epoch, since claims only ever verify against
/// the current root. `root_version` lets auditors correlate claims with
/// publications.
#[account]
pub struct GlobalState {
    pub admin: Pubkey,           // sole authority for set_merkle_root
    pub merkle_root: [u8; 32],   // current settlement commitment
    pub root_version: u64,       // incremented on every publication
    pub bump: u8,
}

impl GlobalState {
    pub const SIZE: usize = 8  // discriminator
        + 32  // admin
        + 32  // merkle_root
        + 8   // root_version
        + 1;  // bump
}
