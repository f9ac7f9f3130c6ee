use anchor_lang::prelude::*;

#[event]
pub struct RoundStarted {
    pub round_id: u64,
    pub start_time: i64,
    pub lock_duration: i64,
}
