use anchor_lang::prelude::*;

use crate::state::GlobalState;

// ===== ACCOUNTS =====

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = payer,
        seeds = [b"global_state"],
        space = GlobalState::SIZE,
        bump,
    )]
    pub global_state: Account<'info, GlobalState>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn handle(&mut self, admin: Pubkey, bumps: &InitializeBumps) -> Result<()> {
        let state = &mut self.global_state;
        state.admin = admin;
        state.merkle_root = [0u8; 32];
        state.root_version = 0;
        state.bump = bumps.global_state;

        msg!("Protocol initialized | admin: {}", state.admin);

        Ok(())
    }
}
