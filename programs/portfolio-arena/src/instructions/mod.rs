#![allow(ambiguous_glob_reexports)]

pub mod cancel_battle;
pub mod claim_bet_winnings;
pub mod claim_winnings;
pub mod commit_initial_state;
pub mod create_battle;
pub mod initialize;
pub mod join_battle;
pub mod place_bet;
pub mod refund_bet;
pub mod refund_stake;
pub mod set_merkle_root;

pub use cancel_battle::*;
pub use claim_bet_winnings::*;
pub use claim_winnings::*;
pub use commit_initial_state::*;
pub use create_battle::*;
pub use initialize::*;
pub use join_battle::*;
pub use place_bet::*;
pub use refund_bet::*;
pub use refund_stake::*;
pub use set_merkle_root::*;
