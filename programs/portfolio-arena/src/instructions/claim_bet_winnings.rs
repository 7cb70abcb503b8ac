use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::error::ArenaError;
use crate::events::BetWinningsClaimed;
use crate::merkle::{claim_leaf_hash, verify_proof, ClaimKind};
use crate::state::{Battle, Bet, BettingPool, GlobalState};

// ===== ACCOUNTS =====

#[derive(Accounts)]
pub struct ClaimBetWinnings<'info> {
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

    #[account(
        seeds = [b"global_state"],
        bump = global_state.bump,
    )]
    pub global_state: Account<'info, GlobalState>,

    #[account(mut)]
    pub bettor: Signer<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> ClaimBetWinnings<'info> {
    pub fn handle(
        &mut self,
        merkle_proof: Vec<[u8; 32]>,
        amount: u64,
        leaf_hash: [u8; 32],
        bumps: &ClaimBetWinningsBumps,
    ) -> Result<()> {
        require!(amount > 0, ArenaError::InvalidClaimAmount);

        let now = Clock::get()?.unix_timestamp;
        let bettor_key = self.bettor.key();
        let battle_key = self.battle.key();

        require!(!self.battle.cancelled, ArenaError::BattleCancelled);
        require!(self.battle.has_ended(now), ArenaError::BattleNotEnded);

        let expected_leaf = claim_leaf_hash(&bettor_key, amount, &battle_key, ClaimKind::BetPayout);
        require!(leaf_hash == expected_leaf, ArenaError::LeafMismatch);
        require!(
            verify_proof(expected_leaf, &merkle_proof, &self.global_state.merkle_root),
            ArenaError::InvalidMerkleProof
        );

        // --- settle the pool's books before moving funds ---
        self.betting_pool.record_claim(amount)?;
        self.bet.claimed = true;

        // --- transfer from betting escrow (PDA signer) ---
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

        emit!(BetWinningsClaimed {
            battle: battle_key,
            bettor: bettor_key,
            amount,
        });

        msg!("Bet payout claimed: {} lamports", amount);

        Ok(())
    }
}
