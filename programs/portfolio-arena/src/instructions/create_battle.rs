use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::{MAX_BATTLE_DURATION_DAYS, MIN_BATTLE_DURATION_DAYS, SECONDS_PER_DAY};
use crate::error::ArenaError;
use crate::events::BattleCreated;
use crate::state::{Battle, BattleType};

// ===== ACCOUNTS =====

#[derive(Accounts)]
#[instruction(battle_id: u64)]
pub struct CreateBattle<'info> {
    #[account(
        init,
        payer = creator,
        seeds = [b"battle", creator.key().as_ref(), battle_id.to_le_bytes().as_ref()],
        space = Battle::SIZE,
        bump,
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
    pub creator: Signer<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> CreateBattle<'info> {
    pub fn handle(
        &mut self,
        battle_id: u64,
        battle_type: BattleType,
        stake_per_player: u64,
        duration_days: u8,
        bumps: &CreateBattleBumps,
    ) -> Result<()> {
        require!(stake_per_player > 0, ArenaError::InvalidStake);
        require!(
            (MIN_BATTLE_DURATION_DAYS..=MAX_BATTLE_DURATION_DAYS).contains(&duration_days),
            ArenaError::InvalidDuration
        );

        let now = Clock::get()?.unix_timestamp;

        // --- init battle, creator is player 0 ---
        let battle = &mut self.battle;
        battle.battle_id = battle_id;
        battle.creator = self.creator.key();
        battle.battle_type = battle_type;
        battle.stake_per_player = stake_per_player;
        battle.max_players = battle_type.max_players();
        battle.current_players = 1;
        battle.players = vec![self.creator.key()];
        battle.start_time = now;
        battle.end_time = now + duration_days as i64 * SECONDS_PER_DAY;
        battle.is_active = true;
        battle.cancelled = false;
        battle.total_pool = stake_per_player;
        battle.claimed_mask = 0;
        battle.bump = bumps.battle;

        // --- move the creator's stake into escrow ---
        system_program::transfer(
            CpiContext::new(
                self.system_program.to_account_info(),
                system_program::Transfer {
                    from: self.creator.to_account_info(),
                    to: self.battle_escrow.to_account_info(),
                },
            ),
            stake_per_player,
        )?;

        emit!(BattleCreated {
            battle: self.battle.key(),
            battle_id,
            creator: self.creator.key(),
            battle_type,
            stake_per_player,
            end_time: self.battle.end_time,
        });

        msg!(
            "Battle {} created | {} lamports per player | ends {}",
            battle_id,
            stake_per_player,
            self.battle.end_time,
        );

        Ok(())
    }
}
