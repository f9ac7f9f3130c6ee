use anchor_lang::prelude::*;

#[event]
pub struct WinningsClaimed {
    pub round_id: u64,
    pub bettor: Pubkey,
    pub amount: u64,
}
