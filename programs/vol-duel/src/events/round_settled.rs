use crate::state::RoundResult;
use anchor_lang::prelude::*;

#[event]
pub struct RoundSettled {
    pub round_id: u64,
    pub result: RoundResult,
    pub close_time: i64,
}
