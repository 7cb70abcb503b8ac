use anchor_lang::prelude::*;

use crate::events::BattleCancelled;
use crate::state::{Battle, GlobalState};

// ===== ACCOUNTS =====

#[derive(Accounts)]
pub struct CancelBattle<'info> {
    #[account(
        mut,
        seeds = [b"battle", battle.creator.as_ref(), battle.battle_id.to_le_bytes().as_ref()],
        bump = battle.bump,
    )]
    pub battle: Account<'info, Battle>,

    #[account(
        seeds = [b"global_state"],
        bump = global_state.bump,
    )]
    pub global_state: Account<'info, GlobalState>,

    pub caller: Signer<'info>,
}

impl<'info> CancelBattle<'info> {
    /// Unlock refunds for a battle the oracle never settled. Eligibility
    /// rules live in `Battle::assert_cancellable`.
    pub fn handle(&mut self) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let caller_key = self.caller.key();

        let is_admin = caller_key == self.global_state.admin;
        let battle = &mut self.battle;
        battle.assert_cancellable(now, is_admin)?;

        battle.is_active = false;
        battle.cancelled = true;

        emit!(BattleCancelled {
            battle: self.battle.key(),
            cancelled_by: caller_key,
        });

        msg!("Battle cancelled by {}", caller_key);

        Ok(())
    }
}
