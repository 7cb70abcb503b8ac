use anchor_lang::prelude::*;

use crate::state::BattleType;

#[event]
pub struct MerkleRootUpdated {
    pub merkle_root: [u8; 32],
    pub root_version: u64,
    pub admin: Pubkey,
}

#[event]
pub struct BattleCreated {
    pub battle: Pubkey,
    pub battle_id: u64,
    pub creator: Pubkey,
    pub battle_type: BattleType,
    pub stake_per_player: u64,
    pub end_time: i64,
}

#[event]
pub struct PlayerJoined {
    pub battle: Pubkey,
    pub player: Pubkey,
    pub total_players: u8,
}

#[event]
pub struct PlayerCommitted {
    pub battle: Pubkey,
    pub player: Pubkey,
    pub wallet_balance_hash: [u8; 32],
    pub timestamp: i64,
}

#[event]
pub struct BetPlaced {
    pub battle: Pubkey,
    pub bettor: Pubkey,
    pub predicted_winner: Pubkey,
    pub amount: u64,
}

#[event]
pub struct WinningsClaimed {
    pub battle: Pubkey,
    pub winner: Pubkey,
    pub amount: u64,
}

#[event]
pub struct BetWinningsClaimed {
    pub battle: Pubkey,
    pub bettor: Pubkey,
    pub amount: u64,
}

#[event]
pub struct BattleCancelled {
    pub battle: Pubkey,
    pub cancelled_by: Pubkey,
}

#[event]
pub struct StakeRefunded {
    pub battle: Pubkey,
    pub player: Pubkey,
    pub amount: u64,
}

#[event]
pub struct BetRefunded {
    pub battle: Pubkey,
    pub bettor: Pubkey,
    pub amount: u64,
}
