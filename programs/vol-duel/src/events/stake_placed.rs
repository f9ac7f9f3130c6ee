use crate::state::Side;
use anchor_lang::prelude::*;

#[event]
pub struct StakePlaced {
    pub round_id: u64,
    pub bettor: Pubkey,
    pub side: Side,
    pub amount: u64,
    pub total_pool: u64,
}
