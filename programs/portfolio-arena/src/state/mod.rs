pub mod battle;
pub mod betting;
pub mod global_state;
pub mod player_commit;

pub use battle::*;
pub use betting::*;
pub use global_state::*;
pub use player_commit::*;
