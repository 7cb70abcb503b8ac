use anchor_lang::prelude::*;

#[error_code]
pub enum ArenaError {
    // --- authorization ---
    #[msg("Signer is not the protocol admin")]
    NotAdmin,
    #[msg("Not a participant in this battle")]
    NotParticipant,
    #[msg("Not the owner of this bet")]
    NotBetOwner,

    // --- battle lifecycle ---
    #[msg("Battle duration must be 1-30 days")]
    InvalidDuration,
    #[msg("Stake per player must be greater than 0")]
    InvalidStake,
    #[msg("Battle is not active")]
    BattleNotActive,
    #[msg("Battle is full")]
    BattleFull,
    #[msg("Battle has ended")]
    BattleEnded,
    #[msg("Battle has not ended yet")]
    BattleNotEnded,
    #[msg("Already joined this battle")]
    AlreadyJoined,

    // --- betting ---
    #[msg("Betting is only allowed on 1v1 battles")]
    BettingOnlyFor1v1,
    #[msg("Battle is not full yet")]
    BattleNotFull,
    #[msg("Predicted winner is not a registered player")]
    InvalidPredictedWinner,
    #[msg("Battle participants cannot bet on their own battle")]
    ParticipantCannotBet,
    #[msg("Bet amount must be greater than 0")]
    InvalidBetAmount,

    // --- claims ---
    #[msg("Claim amount must be greater than 0")]
    InvalidClaimAmount,
    #[msg("Supplied leaf does not match the reconstructed claim")]
    LeafMismatch,
    #[msg("Invalid merkle proof")]
    InvalidMerkleProof,
    #[msg("Already claimed")]
    AlreadyClaimed,
    #[msg("Claim exceeds remaining escrow for this pool")]
    InsufficientEscrow,
    #[msg("Battle was cancelled — use the refund path")]
    BattleCancelled,

    // --- recovery ---
    #[msg("Battle is not yet eligible for cancellation")]
    BattleNotExpired,
    #[msg("Battle has not been cancelled")]
    BattleNotCancelled,

    // --- math ---
    #[msg("Math overflow")]
    MathOverflow,
}
