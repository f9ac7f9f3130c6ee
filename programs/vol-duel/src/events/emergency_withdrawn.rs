use anchor_lang::prelude::*;

#[event]
pub struct EmergencyWithdrawn {
    pub round_id: u64,
    pub admin: Pubkey,
    pub amount: u64,
}
