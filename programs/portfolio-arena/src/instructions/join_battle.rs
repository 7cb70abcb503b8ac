use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::error::ArenaError;
use crate::events::PlayerJoined;
use crate::state::Battle;

// ===== ACCOUNTS =====

#[derive(Accounts)]
pub struct JoinBattle<'info> {
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

impl<'info> JoinBattle<'info> {
    pub fn handle(&mut self) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let player_key = self.player.key();

        let battle = &mut self.battle;
        battle.assert_joinable(&player_key, now)?;

        battle.players.push(player_key);
        battle.current_players = battle
            .current_players
            .checked_add(1)
            .ok_or(ArenaError::MathOverflow)?;
        battle.total_pool = battle
            .total_pool
            .checked_add(battle.stake_per_player)
            .ok_or(ArenaError::MathOverflow)?;

        let stake = battle.stake_per_player;
        system_program::transfer(
            CpiContext::new(
                self.system_program.to_account_info(),
                system_program::Transfer {
                    from: self.player.to_account_info(),
                    to: self.battle_escrow.to_account_info(),
                },
            ),
            stake,
        )?;

        emit!(PlayerJoined {
            battle: self.battle.key(),
            player: player_key,
            total_players: self.battle.current_players,
        });

        msg!(
            "Player {} joined | {}/{} slots",
            player_key,
            self.battle.current_players,
            self.battle.max_players,
        );

        Ok(())
    }
}
