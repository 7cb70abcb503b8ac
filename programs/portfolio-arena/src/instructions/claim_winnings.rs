use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::error::ArenaError;
use crate::events::WinningsClaimed;
use crate::merkle::{claim_leaf_hash, verify_proof, ClaimKind};
use crate::state::{Battle, GlobalState};

// ===== ACCOUNTS =====

#[derive(Accounts)]
pub struct ClaimWinnings<'info> {
    #[account(
        mut,
        seeds = [b"battle", battle.creator.as_ref(), battle.battle_id.to_le_bytes().as_ref()],
        bump = battle.bump,
    )]
    pub battle: Account<'info, Battle>,

    /// CHECK: Battle escrow PDA — holds the staked SOL
    #[account(
        mut,
        seeds = [b"battle_escrow", battle.key().as_ref()],
        bump,
    )]
    pub battle_escrow: SystemAccount<'info>,

    #[account(
        seeds = [b"global_state"],
        bump = global_state.bump,
    )]
    pub global_state: Account<'info, GlobalState>,

    #[account(mut)]
    pub winner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> ClaimWinnings<'info> {
    pub fn handle(
        &mut self,
        merkle_proof: Vec<[u8; 32]>,
        amount: u64,
        leaf_hash: [u8; 32],
        bumps: &ClaimWinningsBumps,
    ) -> Result<()> {
        require!(amount > 0, ArenaError::InvalidClaimAmount);

        let now = Clock::get()?.unix_timestamp;
        let winner_key = self.winner.key();
        let battle_key = self.battle.key();

        let player_index = self.battle.winnings_claim_index(&winner_key, now)?;

        // The leaf is reconstructed from the signer; a caller can never
        // present someone else's allocation.
        let expected_leaf = claim_leaf_hash(&winner_key, amount, &battle_key, ClaimKind::Winnings);
        require!(leaf_hash == expected_leaf, ArenaError::LeafMismatch);
        require!(
            verify_proof(expected_leaf, &merkle_proof, &self.global_state.merkle_root),
            ArenaError::InvalidMerkleProof
        );

        // --- settle the battle's books before moving funds ---
        let battle = &mut self.battle;
        battle.total_pool = battle
            .total_pool
            .checked_sub(amount)
            .ok_or(ArenaError::InsufficientEscrow)?;
        battle.mark_claimed(player_index);
        if battle.total_pool == 0 {
            battle.is_active = false;
        }

        // --- transfer from battle escrow (PDA signer) ---
        let signer_seeds: &[&[u8]] = &[
            b"battle_escrow",
            battle_key.as_ref(),
            &[bumps.battle_escrow],
        ];
        system_program::transfer(
            CpiContext::new_with_signer(
                self.system_program.to_account_info(),
                system_program::Transfer {
                    from: self.battle_escrow.to_account_info(),
                    to: self.winner.to_account_info(),
                },
                &[signer_seeds],
            ),
            amount,
        )?;

        emit!(WinningsClaimed {
            battle: battle_key,
            winner: winner_key,
            amount,
        });

        msg!(
            "Winnings claimed: {} lamports | {} left in pool",
            amount,
            self.battle.total_pool,
        );

        Ok(())
    }
}
