use anchor_lang::prelude::*;

// ===== BATTLE LIMITS =====
#[constant]
pub const MAX_PLAYERS_ONE_VS_ONE: u8 = 2;
pub const MAX_PLAYERS_FRIENDS: u8 = 6;
pub const MIN_BATTLE_DURATION_DAYS: u8 = 1;
pub const MAX_BATTLE_DURATION_DAYS: u8 = 30;

pub const SECONDS_PER_DAY: i64 = 86_400;

// ===== RECOVERY =====
// How long after end_time a filled battle must sit unsettled before anyone
// may cancel it and unlock refunds. Unfilled battles can be cancelled at
// end_time without waiting out the grace window.
pub const SETTLEMENT_GRACE_SECONDS: i64 = 30 * SECONDS_PER_DAY;

// ===== MERKLE LEAF KIND TAGS =====
pub const LEAF_KIND_WINNINGS: u8 = 0;
pub const LEAF_KIND_BET_PAYOUT: u8 = 1;
