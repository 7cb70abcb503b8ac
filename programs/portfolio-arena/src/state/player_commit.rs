use anchor_lang::prelude::*;

/// Tamper-evident baseline of a player's portfolio at join time.
/// Seeds: [b"commit", battle, player]
///
/// Created once per (battle, player) — the PDA init is the uniqueness and
/// immutability guarantee. `verified` is flipped by an off-chain audit step,
/// never by the player.
#[account]
pub struct PlayerCommit {
    pub battle: Pubkey,
    pub player: Pubkey,
    pub wallet_balance_hash: [u8; 32],
    pub timestamp: i64,
    pub verified: bool,
    pub bump: u8,
}

impl PlayerCommit {
    pub const SIZE: usize = 8  // discriminator
        + 32  // battle
        + 32  // player
        + 32  // wallet_balance_hash
        + 8   // timestamp
        + 1   // verified
        + 1;  // bump
}
