use anchor_lang::prelude::*;

#[event]
pub struct FeeCollected {
    pub round_id: u64,
    pub receiver: Pubkey,
    pub amount: u64,
}
