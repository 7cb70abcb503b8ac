use anchor_lang::prelude::*;

use crate::error::ArenaError;
use crate::events::MerkleRootUpdated;
use crate::state::GlobalState;

// ===== ACCOUNTS =====

#[derive(Accounts)]
pub struct SetMerkleRoot<'info> {
    #[account(
        mut,
        seeds = [b"global_state"],
        bump = global_state.bump,
        constraint = admin.key() == global_state.admin @ ArenaError::NotAdmin,
    )]
    pub global_state: Account<'info, GlobalState>,

    pub admin: Signer<'info>,
}

impl<'info> SetMerkleRoot<'info> {
    /// Publish a settlement root. The overwrite is unconditional: anything
    /// the new tree does not cover stops being claimable, so the oracle must
    /// carry every still-unclaimed leaf forward into each publication.
    pub fn handle(&mut self, merkle_root: [u8; 32]) -> Result<()> {
        let state = &mut self.global_state;
        state.merkle_root = merkle_root;
        state.root_version = state
            .root_version
            .checked_add(1)
            .ok_or(ArenaError::MathOverflow)?;

        emit!(MerkleRootUpdated {
            merkle_root,
            root_version: state.root_version,
            admin: self.admin.key(),
        });

        msg!("Merkle root v{} published", state.root_version);

        Ok(())
    }
}
