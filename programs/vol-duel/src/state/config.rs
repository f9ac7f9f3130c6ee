use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct Config {
    // --- Authorities ---
    pub admin: Pubkey,                // The administrator of the program.
    pub settlement_authority: Pubkey, // The only identity allowed to settle rounds.

    // --- Token & Fees ---
    pub token_mint: Pubkey,   // The SPL token staked in rounds.
    pub fee_receiver: Pubkey, // The identity whose token account receives fees.
    pub fee_rate_bps: u16,    // Fee charged on the losing pool, in basis points.

    // --- Advisory ---
    pub risk_threshold_bps: u16, // Exposed for off-chain consumers; not read by settlement or payout.

    // --- Round Defaults ---
    pub lock_duration: i64, // Default lock period copied into newly created rounds.

    // --- Global State ---
    pub current_round_id: u64, // Id of the current round (0 before the first round).

    // --- Metadata ---
    pub version: u8, // Incremented on every config update.
    pub bump: u8,    // A bump seed for PDA.
}
