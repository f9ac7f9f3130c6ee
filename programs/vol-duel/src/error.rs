use anchor_lang::prelude::*;

#[error_code]
pub enum VolDuelError {
    // General Program Errors (0x1000 - 0x1999)
    #[msg("Unauthorized action for this account")]
    Unauthorized = 0x1000,

    // Configuration Errors (0x2000 - 0x2999)
    #[msg("Invalid configuration value")]
    InvalidConfig = 0x2000,

    // Staking Errors (0x3000 - 0x3999)
    #[msg("Stake amount must be greater than 0")]
    InvalidStake = 0x3000,

    #[msg("Round is not the current round")]
    RoundNotCurrent = 0x3001,

    #[msg("Round lock deadline has passed, no more stakes allowed")]
    RoundLocked = 0x3002,

    #[msg("Participant has already staked in this round")]
    AlreadyStaked = 0x3003,

    // Settlement Errors (0x4000 - 0x4999)
    #[msg("Round lock duration has not elapsed yet")]
    LockNotElapsed = 0x4000,

    #[msg("Round has already been settled")]
    AlreadySettled = 0x4001,

    #[msg("Verdict must be Higher or Lower")]
    InvalidVerdict = 0x4002,

    // Claim Errors (0x5000 - 0x5999)
    #[msg("Round has not been settled yet")]
    RoundNotSettled = 0x5000,

    #[msg("Caller did not participate in this round")]
    DidNotParticipate = 0x5001,

    #[msg("Payout has already been claimed")]
    AlreadyClaimed = 0x5002,

    // Account & Math Errors (0x6000 - 0x6999)
    #[msg("Remaining accounts must come in non-empty [round, prediction, vault] triples")]
    InvalidRemainingAccountsLength = 0x6000,

    #[msg("Invalid round account")]
    InvalidRoundAccount = 0x6001,

    #[msg("Invalid prediction account")]
    InvalidPredictionAccount = 0x6002,

    #[msg("Invalid vault account")]
    InvalidVaultAccount = 0x6003,

    #[msg("Failed to serialize account data")]
    SerializeError = 0x6004,

    #[msg("Account data buffer is too small")]
    AccountDataTooSmall = 0x6005,

    #[msg("Arithmetic overflow")]
    Overflow = 0x6006,

    #[msg("Arithmetic underflow")]
    Underflow = 0x6007,
}
