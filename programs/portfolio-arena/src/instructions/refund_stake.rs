use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::error::ArenaError;
use crate::events::StakeRefunded;
use crate::state::Battle;

// ===== ACCOUNTS =====

#[derive(Accounts)]
pub struct RefundStake<'info> {
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

    #[account(mut)]
    pub player: Signer<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> RefundStake<'info> {
    pub fn handle(&mut self, bumps: &RefundStakeBumps) -> Result<()> {
        let player_key = self.player.key();
        let battle_key = self.battle.key();

        let battle = &mut self.battle;
        require!(battle.cancelled, ArenaError::BattleNotCancelled);

        let player_index = battle
            .player_index(&player_key)
            .ok_or(ArenaError::NotParticipant)?;
        // The claimed bit doubles as the refund guard.
        require!(!battle.is_claimed(player_index), ArenaError::AlreadyClaimed);

        let amount = battle.stake_per_player;
        battle.total_pool = battle
            .total_pool
            .checked_sub(amount)
            .ok_or(ArenaError::InsufficientEscrow)?;
        battle.mark_claimed(player_index);

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
                    to: self.player.to_account_info(),
                },
                &[signer_seeds],
            ),
            amount,
        )?;

        emit!(StakeRefunded {
            battle: battle_key,
            player: player_key,
            amount,
        });

        msg!("Stake refunded: {} lamports", amount);

        Ok(())
    }
}
