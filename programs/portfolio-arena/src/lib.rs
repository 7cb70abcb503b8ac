//! Wallet-battle wagering and Merkle settlement program.
//!
//! Besides the on-chain instructions, the crate doubles as a library for the
//! off-chain settlement oracle: `merkle::claim_leaf_hash`, `merkle::build_root`
//! and `merkle::build_proof` are the tree construction the verifier expects,
//! and `state::bet_payout` is the pro-rata arithmetic the oracle uses when it
//! allocates bet-payout leaves. The tree builders and the payout helper are
//! never called by the instruction handlers; they live here so the oracle and
//! the program can never disagree on leaf or payout construction.

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod merkle;
pub mod state;

use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod portfolio_arena {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, admin: Pubkey) -> Result<()> {
        ctx.accounts.handle(admin, &ctx.bumps)
    }

    pub fn set_merkle_root(ctx: Context<SetMerkleRoot>, merkle_root: [u8; 32]) -> Result<()> {
        ctx.accounts.handle(merkle_root)
    }

    pub fn create_battle(
        ctx: Context<CreateBattle>,
        battle_id: u64,
        battle_type: BattleType,
        stake_per_player: u64,
        duration_days: u8,
    ) -> Result<()> {
        ctx.accounts
            .handle(battle_id, battle_type, stake_per_player, duration_days, &ctx.bumps)
    }

    pub fn join_battle(ctx: Context<JoinBattle>) -> Result<()> {
        ctx.accounts.handle()
    }

    pub fn commit_initial_state(
        ctx: Context<CommitInitialState>,
        wallet_balance_hash: [u8; 32],
    ) -> Result<()> {
        ctx.accounts.handle(wallet_balance_hash, &ctx.bumps)
    }

    pub fn place_bet(
        ctx: Context<PlaceBet>,
        predicted_winner: Pubkey,
        amount: u64,
    ) -> Result<()> {
        ctx.accounts.handle(predicted_winner, amount, &ctx.bumps)
    }

    pub fn claim_winnings(
        ctx: Context<ClaimWinnings>,
        merkle_proof: Vec<[u8; 32]>,
        amount: u64,
        leaf_hash: [u8; 32],
    ) -> Result<()> {
        ctx.accounts
            .handle(merkle_proof, amount, leaf_hash, &ctx.bumps)
    }

    pub fn claim_bet_winnings(
        ctx: Context<ClaimBetWinnings>,
        merkle_proof: Vec<[u8; 32]>,
        amount: u64,
        leaf_hash: [u8; 32],
    ) -> Result<()> {
        ctx.accounts
            .handle(merkle_proof, amount, leaf_hash, &ctx.bumps)
    }

    pub fn cancel_battle(ctx: Context<CancelBattle>) -> Result<()> {
        ctx.accounts.handle()
    }

    pub fn refund_stake(ctx: Context<RefundStake>) -> Result<()> {
        ctx.accounts.handle(&ctx.bumps)
    }

    pub fn refund_bet(ctx: Context<RefundBet>) -> Result<()> {
        ctx.accounts.handle(&ctx.bumps)
    }
}
