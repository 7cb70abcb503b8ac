use anchor_lang::prelude::*;

use crate::constants::{MAX_PLAYERS_FRIENDS, MAX_PLAYERS_ONE_VS_ONE, SETTLEMENT_GRACE_SECONDS};
use crate::error::ArenaError;

/// A staked competition between wallets over a fixed window.
/// Seeds: [b"battle", creator, battle_id_le]
///
/// Stakes live in a separate escrow PDA ([b"battle_escrow", battle]);
/// `total_pool` mirrors what that escrow still owes.
#[account]
pub struct Battle {
    pub battle_id: u64,
    pub creator: Pubkey,
    pub battle_type: BattleType,
    pub stake_per_player: u64,
    pub max_players: u8,
    pub current_players: u8,
    pub players: Vec<Pubkey>,      // ordered, unique, index 0 = creator
    pub start_time: i64,
    pub end_time: i64,
    pub is_active: bool,
    pub cancelled: bool,
    pub total_pool: u64,           // lamports still owed by the escrow
    pub claimed_mask: u8,          // bit i set once players[i] was paid or refunded
    pub bump: u8,
}

impl Battle {
    pub const MAX_PLAYERS: usize = MAX_PLAYERS_FRIENDS as usize;

    pub const SIZE: usize = 8  // discriminator
        + 8   // battle_id
        + 32  // creator
        + 1   // battle_type
        + 8   // stake_per_player
        + 1   // max_players
        + 1   // current_players
        + 4 + 32 * Self::MAX_PLAYERS  // players
        + 8   // start_time
        + 8   // end_time
        + 1   // is_active
        + 1   // cancelled
        + 8   // total_pool
        + 1   // claimed_mask
        + 1;  // bump

    pub fn is_full(&self) -> bool {
        self.current_players >= self.max_players
    }

    /// Pre-end window: joins, commits and bets are accepted strictly before
    /// end_time. At exactly end_time nothing is accepted in either
    /// direction — the battle is no longer open and not yet claimable.
    pub fn is_open(&self, now: i64) -> bool {
        now < self.end_time
    }

    /// Claim window: settlement opens strictly after end_time.
    pub fn has_ended(&self, now: i64) -> bool {
        now > self.end_time
    }

    pub fn player_index(&self, player: &Pubkey) -> Option<usize> {
        self.players.iter().position(|p| p == player)
    }

    pub fn has_player(&self, player: &Pubkey) -> bool {
        self.player_index(player).is_some()
    }

    pub fn is_claimed(&self, index: usize) -> bool {
        self.claimed_mask & (1 << index) != 0
    }

    pub fn mark_claimed(&mut self, index: usize) {
        self.claimed_mask |= 1 << index;
    }

    pub fn assert_joinable(&self, player: &Pubkey, now: i64) -> Result<()> {
        require!(self.is_active, ArenaError::BattleNotActive);
        require!(!self.is_full(), ArenaError::BattleFull);
        require!(self.is_open(now), ArenaError::BattleEnded);
        require!(!self.has_player(player), ArenaError::AlreadyJoined);
        Ok(())
    }

    pub fn assert_bettable(
        &self,
        bettor: &Pubkey,
        predicted_winner: &Pubkey,
        now: i64,
    ) -> Result<()> {
        require!(
            self.battle_type == BattleType::OneVsOne,
            ArenaError::BettingOnlyFor1v1
        );
        require!(self.is_active, ArenaError::BattleNotActive);
        require!(self.is_open(now), ArenaError::BattleEnded);
        // Betting opens only once both sides are locked in.
        require!(self.is_full(), ArenaError::BattleNotFull);
        require!(
            self.has_player(predicted_winner),
            ArenaError::InvalidPredictedWinner
        );
        require!(!self.has_player(bettor), ArenaError::ParticipantCannotBet);
        Ok(())
    }

    /// Gate for a winnings claim; returns the claimant's player index so the
    /// caller can set the claimed bit after paying out.
    pub fn winnings_claim_index(&self, winner: &Pubkey, now: i64) -> Result<usize> {
        require!(!self.cancelled, ArenaError::BattleCancelled);
        require!(self.has_ended(now), ArenaError::BattleNotEnded);
        let index = self
            .player_index(winner)
            .ok_or(ArenaError::NotParticipant)?;
        require!(!self.is_claimed(index), ArenaError::AlreadyClaimed);
        Ok(index)
    }

    /// Cancellation eligibility. Three ways in: an unfilled battle can be
    /// cancelled by anyone once it has ended, the admin can cancel any ended
    /// battle, and anyone can cancel once the settlement grace window has
    /// elapsed.
    pub fn assert_cancellable(&self, now: i64, caller_is_admin: bool) -> Result<()> {
        require!(self.is_active, ArenaError::BattleNotActive);
        require!(self.has_ended(now), ArenaError::BattleNotExpired);

        let grace_elapsed = now
            >= self
                .end_time
                .checked_add(SETTLEMENT_GRACE_SECONDS)
                .ok_or(ArenaError::MathOverflow)?;
        require!(
            !self.is_full() || caller_is_admin || grace_elapsed,
            ArenaError::BattleNotExpired
        );
        Ok(())
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum BattleType {
    OneVsOne,
    Friends,
}

impl BattleType {
    pub fn max_players(&self) -> u8 {
        match self {
            BattleType::OneVsOne => MAX_PLAYERS_ONE_VS_ONE,
            BattleType::Friends => MAX_PLAYERS_FRIENDS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    const END: i64 = 86_400;

    fn battle_with_players(players: Vec<Pubkey>, max_players: u8) -> Battle {
        let pool = 1_000 * players.len() as u64;
        Battle {
            battle_id: 1,
            creator: players[0],
            battle_type: BattleType::OneVsOne,
            stake_per_player: 1_000,
            max_players,
            current_players: players.len() as u8,
            players,
            start_time: 0,
            end_time: END,
            is_active: true,
            cancelled: false,
            total_pool: pool,
            claimed_mask: 0,
            bump: 255,
        }
    }

    fn expect_err<T: std::fmt::Debug>(result: Result<T>, expected: ArenaError) {
        assert_eq!(result.unwrap_err(), Error::from(expected));
    }

    #[test]
    fn max_players_per_type() {
        assert_eq!(BattleType::OneVsOne.max_players(), 2);
        assert_eq!(BattleType::Friends.max_players(), 6);
    }

    #[test]
    fn player_lookup_preserves_join_order() {
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        let battle = battle_with_players(vec![a, b], 2);

        assert_eq!(battle.player_index(&a), Some(0));
        assert_eq!(battle.player_index(&b), Some(1));
        assert!(!battle.has_player(&Pubkey::new_unique()));
        assert!(battle.is_full());
    }

    #[test]
    fn claimed_bits_are_per_player() {
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        let mut battle = battle_with_players(vec![a, b], 2);

        assert!(!battle.is_claimed(0));
        battle.mark_claimed(0);
        assert!(battle.is_claimed(0));
        assert!(!battle.is_claimed(1));

        battle.mark_claimed(1);
        assert!(battle.is_claimed(0) && battle.is_claimed(1));
    }

    #[test]
    fn end_time_closes_the_open_window_before_claims_start() {
        let battle = battle_with_players(vec![Pubkey::new_unique()], 2);

        // Strictly before end_time: open, not claimable.
        assert!(battle.is_open(END - 1));
        assert!(!battle.has_ended(END - 1));
        // Exactly at end_time: neither joinable nor claimable.
        assert!(!battle.is_open(END));
        assert!(!battle.has_ended(END));
        // Strictly after: claims only.
        assert!(!battle.is_open(END + 1));
        assert!(battle.has_ended(END + 1));
    }

    #[test]
    fn join_window_is_strictly_before_end_time() {
        let battle = battle_with_players(vec![Pubkey::new_unique()], 2);
        let joiner = Pubkey::new_unique();

        assert!(battle.assert_joinable(&joiner, END - 1).is_ok());
        expect_err(battle.assert_joinable(&joiner, END), ArenaError::BattleEnded);
    }

    #[test]
    fn extra_join_fails_battle_full() {
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        let battle = battle_with_players(vec![a, b], 2);

        // (max_players + 1)-th join
        expect_err(
            battle.assert_joinable(&Pubkey::new_unique(), 100),
            ArenaError::BattleFull,
        );
    }

    #[test]
    fn rejoin_fails_already_joined() {
        let a = Pubkey::new_unique();
        let battle = battle_with_players(vec![a], 2);
        expect_err(battle.assert_joinable(&a, 100), ArenaError::AlreadyJoined);
    }

    #[test]
    fn inactive_battle_rejects_joins() {
        let mut battle = battle_with_players(vec![Pubkey::new_unique()], 2);
        battle.is_active = false;
        expect_err(
            battle.assert_joinable(&Pubkey::new_unique(), 100),
            ArenaError::BattleNotActive,
        );
    }

    #[test]
    fn participants_cannot_bet_on_their_own_battle() {
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        let battle = battle_with_players(vec![a, b], 2);

        expect_err(
            battle.assert_bettable(&a, &b, 100),
            ArenaError::ParticipantCannotBet,
        );
    }

    #[test]
    fn predicted_winner_must_be_registered() {
        let battle =
            battle_with_players(vec![Pubkey::new_unique(), Pubkey::new_unique()], 2);
        let outsider = Pubkey::new_unique();

        expect_err(
            battle.assert_bettable(&outsider, &Pubkey::new_unique(), 100),
            ArenaError::InvalidPredictedWinner,
        );
    }

    #[test]
    fn betting_waits_for_a_full_battle_and_only_1v1() {
        let a = Pubkey::new_unique();
        let outsider = Pubkey::new_unique();

        let unfilled = battle_with_players(vec![a], 2);
        expect_err(
            unfilled.assert_bettable(&outsider, &a, 100),
            ArenaError::BattleNotFull,
        );

        let mut friends = battle_with_players(vec![a, Pubkey::new_unique()], 6);
        friends.battle_type = BattleType::Friends;
        expect_err(
            friends.assert_bettable(&outsider, &a, 100),
            ArenaError::BettingOnlyFor1v1,
        );

        let full = battle_with_players(vec![a, Pubkey::new_unique()], 2);
        assert!(full.assert_bettable(&outsider, &a, 100).is_ok());
        expect_err(
            full.assert_bettable(&outsider, &a, END),
            ArenaError::BattleEnded,
        );
    }

    #[test]
    fn winnings_claim_is_single_shot_per_player() {
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        let mut battle = battle_with_players(vec![a, b], 2);

        expect_err(
            battle.winnings_claim_index(&a, END - 1),
            ArenaError::BattleNotEnded,
        );

        let index = battle.winnings_claim_index(&a, END + 1).unwrap();
        assert_eq!(index, 0);
        battle.mark_claimed(index);

        expect_err(
            battle.winnings_claim_index(&a, END + 1),
            ArenaError::AlreadyClaimed,
        );
        // The other player's claim is unaffected.
        assert_eq!(battle.winnings_claim_index(&b, END + 1).unwrap(), 1);

        expect_err(
            battle.winnings_claim_index(&Pubkey::new_unique(), END + 1),
            ArenaError::NotParticipant,
        );
    }

    #[test]
    fn cancelled_battle_routes_claims_to_refunds() {
        let a = Pubkey::new_unique();
        let mut battle = battle_with_players(vec![a], 2);
        battle.cancelled = true;
        battle.is_active = false;

        expect_err(
            battle.winnings_claim_index(&a, END + 1),
            ArenaError::BattleCancelled,
        );
    }

    #[test]
    fn cancellation_gating() {
        let filled = battle_with_players(vec![Pubkey::new_unique(), Pubkey::new_unique()], 2);

        // Too early for anyone, admin included.
        expect_err(filled.assert_cancellable(END - 1, true), ArenaError::BattleNotExpired);

        // Filled battle after end: admin only until the grace window elapses.
        expect_err(filled.assert_cancellable(END + 1, false), ArenaError::BattleNotExpired);
        assert!(filled.assert_cancellable(END + 1, true).is_ok());
        assert!(filled
            .assert_cancellable(END + SETTLEMENT_GRACE_SECONDS, false)
            .is_ok());

        // Unfilled battle: anyone may cancel once it has ended.
        let unfilled = battle_with_players(vec![Pubkey::new_unique()], 2);
        assert!(unfilled.assert_cancellable(END + 1, false).is_ok());

        // Already terminal battles cannot be cancelled again.
        let mut cancelled = battle_with_players(vec![Pubkey::new_unique()], 2);
        cancelled.is_active = false;
        expect_err(
            cancelled.assert_cancellable(END + 1, true),
            ArenaError::BattleNotActive,
        );
    }
}
