use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::error::ArenaError;
use crate::events::BetRefunded;
use crate::state::{Battle, Bet, BettingPool};

// ===== ACCOUNTS =====

#[derive(Accounts)]
pub struct RefundBet<'info> {
    #[account(
        seeds = [b"battle", battle.creator.as_ref(), battle.battle_id.to_le_bytes().as_ref()],
        bump = battle.bump,
    )]
    pub battle: Account<'info, Battle>,

    #[account(
        mut,
        seeds = [b"bet", battle.key().as_ref(), bettor.key().as_ref()],
        bump = bet.bump,
        constraint = bet.bettor == bettor.key() @ ArenaError::NotBetOwner,
        constraint = !bet.claimed @ ArenaError::AlreadyClaimed,
    )]
    pub bet: Account<'info, Bet>,

    #[account(
        mut,
        seeds = [b"betting_pool", battle.key().as_ref()],
        bump = betting_pool.bump,
    )]
    pub betting_pool: Account<'info, BettingPool>,

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

impl<'info> RefundBet<'info> {
    pub fn handle(&mut self, bumps: &RefundBetBumps) -> Result<()> {
        require!(self.battle.cancelled, ArenaError::BattleNotCancelled);

        let bettor_key = self.bettor.key();
        let battle_key = self.battle.key();
        let amount = self.bet.amount;

        self.betting_pool.record_claim(amount)?;
        self.bet.claimed = true;

        let signer_seeds: &[&[u8]] = &[
            b"betting_escrow",
            battle_key.as_ref(),
            &[bumps.betting_escrow],
        ];
        system_program::transfer(
            CpiContext::new_with_signer(
                self.system_program.to_account_info(),
                system_program::Transfer {
                    from: self.betting_escrow.to_account_info(),
                    to: self.bettor.to_account_info(),
                },
                &[signer_seeds],
            ),
            amount,
        )?;

        emit!(BetRefunded {
            battle: battle_key,
            bettor: bettor_key,
            amount,
        });

        msg!("Bet refunded: {} lamports", amount);

        Ok(())
    }
}
