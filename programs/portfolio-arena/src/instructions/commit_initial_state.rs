use anchor_lang::prelude::*;

use crate::error::ArenaError;
use crate::events::PlayerCommitted;
use crate::state::{Battle, PlayerCommit};

// ===== ACCOUNTS =====

#[derive(Accounts)]
pub struct CommitInitialState<'info> {
    #[account(
        seeds = [b"battle", battle.creator.as_ref(), battle.battle_id.to_le_bytes().as_ref()],
        bump = battle.bump,
    )]
    pub battle: Account<'info, Battle>,

    // init-only: a second commit for the same (battle, player) fails at
    // account creation, so the baseline can never be overwritten.
    #[account(
        init,
        payer = player,
        seeds = [b"commit", battle.key().as_ref(), player.key().as_ref()],
        space = PlayerCommit::SIZE,
        bump,
    )]
    pub player_commit: Account<'info, PlayerCommit>,

    #[account(mut)]
    pub player: Signer<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> CommitInitialState<'info> {
    pub fn handle(
        &mut self,
        wallet_balance_hash: [u8; 32],
        bumps: &CommitInitialStateBumps,
    ) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let player_key = self.player.key();

        require!(self.battle.is_active, ArenaError::BattleNotActive);
        require!(self.battle.is_open(now), ArenaError::BattleEnded);
        require!(
            self.battle.has_player(&player_key),
            ArenaError::NotParticipant
        );

        let commit = &mut self.player_commit;
        commit.battle = self.battle.key();
        commit.player = player_key;
        commit.wallet_balance_hash = wallet_balance_hash;
        commit.timestamp = now;
        commit.verified = false;
        commit.bump = bumps.player_commit;

        emit!(PlayerCommitted {
            battle: self.battle.key(),
            player: player_key,
            wallet_balance_hash,
            timestamp: now,
        });

        msg!("Baseline committed for player {}", player_key);

        Ok(())
    }
}
