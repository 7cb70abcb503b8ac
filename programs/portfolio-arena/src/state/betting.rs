use anchor_lang::prelude::*;

use crate::error::ArenaError;

/// Side pool for third-party bets on a 1v1 battle.
/// Seeds: [b"betting_pool", battle]
///
/// `total_pool` stays equal to `bets_on_player_a + bets_on_player_b` for the
/// life of the pool; payouts drain the escrow but are tracked separately in
/// `total_claimed` so the historical split stays auditable.
#[account]
pub struct BettingPool {
    pub battle: Pubkey,
    pub total_pool: u64,
    pub bets_on_player_a: u64,   // staked on players[0]
    pub bets_on_player_b: u64,   // staked on players[1]
    pub total_claimed: u64,      // lamports already paid or refunded out
    pub is_settled: bool,        // set once the escrow is fully drained
    pub bump: u8,
}

impl BettingPool {
    pub const SIZE: usize = 8  // discriminator
        + 32  // battle
        + 8   // total_pool
        + 8   // bets_on_player_a
        + 8   // bets_on_player_b
        + 8   // total_claimed
        + 1   // is_settled
        + 1;  // bump

    pub fn record_bet(&mut self, on_player_a: bool, amount: u64) -> Result<()> {
        self.total_pool = self
            .total_pool
            .checked_add(amount)
            .ok_or(ArenaError::MathOverflow)?;
        if on_player_a {
            self.bets_on_player_a = self
                .bets_on_player_a
                .checked_add(amount)
                .ok_or(ArenaError::MathOverflow)?;
        } else {
            self.bets_on_player_b = self
                .bets_on_player_b
                .checked_add(amount)
                .ok_or(ArenaError::MathOverflow)?;
        }
        Ok(())
    }

    /// Account for lamports leaving the betting escrow. Fails closed when the
    /// claim would drain more than was ever staked.
    pub fn record_claim(&mut self, amount: u64) -> Result<()> {
        let claimed = self
            .total_claimed
            .checked_add(amount)
            .ok_or(ArenaError::MathOverflow)?;
        require!(claimed <= self.total_pool, ArenaError::InsufficientEscrow);
        self.total_claimed = claimed;
        if self.total_claimed == self.total_pool {
            self.is_settled = true;
        }
        Ok(())
    }
}

/// One bet per (battle, bettor), enforced by PDA init.
/// Seeds: [b"bet", battle, bettor]
#[account]
pub struct Bet {
    pub bettor: Pubkey,
    pub battle: Pubkey,
    pub predicted_winner: Pubkey,
    pub amount: u64,
    pub claimed: bool,
    pub bump: u8,
}

impl Bet {
    pub const SIZE: usize = 8  // discriminator
        + 32  // bettor
        + 32  // battle
        + 32  // predicted_winner
        + 8   // amount
        + 1   // claimed
        + 1;  // bump
}

/// Proportional payout for a winning bettor: their share of the losing pool
/// plus their own stake back. Computed off-chain by the settlement oracle
/// when it builds the claim tree; on-chain the result is only checked for
/// tree membership. Lives here so the oracle and the tests share one
/// implementation.
pub fn bet_payout(stake: u64, winning_side_total: u64, losing_side_total: u64) -> Option<u64> {
    if winning_side_total == 0 {
        return None;
    }
    let share = (stake as u128)
        .checked_mul(losing_side_total as u128)?
        .checked_div(winning_side_total as u128)?;
    stake.checked_add(u64::try_from(share).ok()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> BettingPool {
        BettingPool {
            battle: Pubkey::new_unique(),
            total_pool: 0,
            bets_on_player_a: 0,
            bets_on_player_b: 0,
            total_claimed: 0,
            is_settled: false,
            bump: 255,
        }
    }

    #[test]
    fn pool_total_is_sum_of_sides() {
        let mut pool = pool();
        pool.record_bet(true, 300).unwrap();
        pool.record_bet(false, 500).unwrap();
        pool.record_bet(true, 200).unwrap();

        assert_eq!(pool.bets_on_player_a, 500);
        assert_eq!(pool.bets_on_player_b, 500);
        assert_eq!(pool.total_pool, pool.bets_on_player_a + pool.bets_on_player_b);
    }

    #[test]
    fn claims_cannot_exceed_the_pool() {
        let mut pool = pool();
        pool.record_bet(true, 600).unwrap();
        pool.record_bet(false, 400).unwrap();

        pool.record_claim(700).unwrap();
        assert!(!pool.is_settled);
        assert!(pool.record_claim(400).is_err());

        pool.record_claim(300).unwrap();
        assert!(pool.is_settled);
    }

    #[test]
    fn bet_addition_overflow_is_rejected() {
        let mut pool = pool();
        pool.record_bet(true, u64::MAX).unwrap();
        assert!(pool.record_bet(false, 1).is_err());
    }

    #[test]
    fn payout_splits_losing_pool_pro_rata() {
        // Winning side staked 600 and 400; losing side staked 500.
        assert_eq!(bet_payout(600, 1_000, 500), Some(900));
        assert_eq!(bet_payout(400, 1_000, 500), Some(600));
        // Payouts together return the full pool.
        assert_eq!(900 + 600, 1_000 + 500);
    }

    #[test]
    fn payout_with_empty_winning_side_is_none() {
        assert_eq!(bet_payout(0, 0, 500), None);
    }
}
