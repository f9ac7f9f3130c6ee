#![allow(unexpected_cfgs)]
#![allow(deprecated)]

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod vol_duel {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        settlement_authority: Pubkey,
        fee_receiver: Pubkey,
        token_mint: Pubkey,
        fee_rate_bps: u16,
        risk_threshold_bps: u16,
        lock_duration: i64,
    ) -> Result<()> {
        initialize::handler(
            ctx,
            settlement_authority,
            fee_receiver,
            token_mint,
            fee_rate_bps,
            risk_threshold_bps,
            lock_duration,
        )
    }

    pub fn update_config(
        ctx: Context<UpdateConfig>,
        new_admin: Option<Pubkey>,
        new_settlement_authority: Option<Pubkey>,
        new_fee_receiver: Option<Pubkey>,
        new_fee_rate_bps: Option<u16>,
        new_risk_threshold_bps: Option<u16>,
        new_lock_duration: Option<i64>,
    ) -> Result<()> {
        update_config::handler(
            ctx,
            new_admin,
            new_settlement_authority,
            new_fee_receiver,
            new_fee_rate_bps,
            new_risk_threshold_bps,
            new_lock_duration,
        )
    }

    pub fn start_round(ctx: Context<StartRound>) -> Result<()> {
        start_round::handler(ctx)
    }

    pub fn stake(ctx: Context<Stake>, amount: u64, side: Side) -> Result<()> {
        stake::handler(ctx, amount, side)
    }

    pub fn settle_round(ctx: Context<SettleRound>, verdict: RoundResult) -> Result<()> {
        settle_round::handler(ctx, verdict)
    }

    pub fn claim<'info>(ctx: Context<'_, '_, 'info, 'info, Claim<'info>>) -> Result<()> {
        claim::handler(ctx)
    }

    pub fn emergency_withdraw(ctx: Context<EmergencyWithdraw>) -> Result<()> {
        emergency_withdraw::handler(ctx)
    }
}
