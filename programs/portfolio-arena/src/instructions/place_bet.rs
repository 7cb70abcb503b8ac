use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::error::ArenaError;
use crate::events::BetPlaced;
use crate::state::{Battle, Bet, BettingPool};

// ===== ACCOUNTS =====

#[derive(Accounts)]
pub struct PlaceBet<'info> {
    #[account(
        seeds = [b"battle", battle.creator.as_ref(), battle.battle_id.to_le_bytes().as_ref()],
        bump = battle.bump,
    )]
    pub battle: Account<'info, Battle>,

    // Lazily created by the first bettor on this battle.
    #[account(
        init_if_needed,
        payer = bettor,
        seeds = [b"betting_pool", battle.key().as_ref()],
        space = BettingPool::SIZE,
        bump,
    )]
    pub betting_pool: Account<'info, BettingPool>,

    // init-only: one bet per (battle, bettor).
    #[account(
        init,
        payer = bettor,
        seeds = [b"bet", battle.key().as_ref(), bettor.key().as_ref()],
        space = Bet::SIZE,
        bump,
    )]
    pub bet: Account<'info, Bet>,

    /// CHECK: Betting escrow PDA — holds the bet SOL
    #[account(
        mut,
        seeds = [b"betting_escrow", battle.key().as_ref()],
        bump,
    )]
    pub betting_escrow: SystemAccount<'info>,

    #[account(mut)]
    pub bettor: Signer<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> PlaceBet<'info> {
    pub fn handle(
        &mut self,
        predicted_winner: Pubkey,
        amount: u64,
        bumps: &PlaceBetBumps,
    ) -> Result<()> {
        require!(amount > 0, ArenaError::InvalidBetAmount);

        let now = Clock::get()?.unix_timestamp;
        let bettor_key = self.bettor.key();
        let battle = &self.battle;

        battle.assert_bettable(&bettor_key, &predicted_winner, now)?;

        let backing_player_a = predicted_winner == battle.players[0];
        let battle_key = battle.key();

        // --- update pool totals ---
        let pool = &mut self.betting_pool;
        if pool.battle == Pubkey::default() {
            pool.battle = battle_key;
            pool.bump = bumps.betting_pool;
        }
        pool.record_bet(backing_player_a, amount)?;

        // --- init bet slip ---
        let bet = &mut self.bet;
        bet.bettor = bettor_key;
        bet.battle = battle_key;
        bet.predicted_winner = predicted_winner;
        bet.amount = amount;
        bet.claimed = false;
        bet.bump = bumps.bet;

        // --- move the stake into the betting escrow ---
        system_program::transfer(
            CpiContext::new(
                self.system_program.to_account_info(),
                system_program::Transfer {
                    from: self.bettor.to_account_info(),
                    to: self.betting_escrow.to_account_info(),
                },
            ),
            amount,
        )?;

        emit!(BetPlaced {
            battle: battle_key,
            bettor: bettor_key,
            predicted_winner,
            amount,
        });

        msg!(
            "Bet placed: {} lamports on {}",
            amount,
            if backing_player_a { "player A" } else { "player B" },
        );

        Ok(())
    }
}
