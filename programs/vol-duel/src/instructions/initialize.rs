use crate::{constants::*, error::VolDuelError, events::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        init,
        payer = signer,
        space = DISCRIMINATOR_SIZE + Config::INIT_SPACE,
        seeds = [CONFIG_SEED.as_bytes()],
        bump
    )]
    pub config: Account<'info, Config>,

    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn validate(
        &self,
        settlement_authority: Pubkey,
        fee_receiver: Pubkey,
        token_mint: Pubkey,
        fee_rate_bps: u16,
        lock_duration: i64,
    ) -> Result<()> {
        require!(
            settlement_authority != Pubkey::default(),
            VolDuelError::InvalidConfig
        );

        require!(fee_receiver != Pubkey::default(), VolDuelError::InvalidConfig);

        require!(token_mint != Pubkey::default(), VolDuelError::InvalidConfig);

        require!(
            fee_rate_bps <= HUNDRED_PERCENT_BPS,
            VolDuelError::InvalidConfig
        );

        require!(lock_duration > 0, VolDuelError::InvalidConfig);

        Ok(())
    }
}

pub fn handler(
    ctx: Context<Initialize>,
    settlement_authority: Pubkey,
    fee_receiver: Pubkey,
    token_mint: Pubkey,
    fee_rate_bps: u16,
    risk_threshold_bps: u16,
    lock_duration: i64,
) -> Result<()> {
    // validate
    ctx.accounts.validate(
        settlement_authority,
        fee_receiver,
        token_mint,
        fee_rate_bps,
        lock_duration,
    )?;

    let config = &mut ctx.accounts.config;

    // set fields
    config.admin = ctx.accounts.signer.key();
    config.settlement_authority = settlement_authority;
    config.token_mint = token_mint;
    config.fee_receiver = fee_receiver;
    config.fee_rate_bps = fee_rate_bps;
    config.risk_threshold_bps = risk_threshold_bps;
    config.lock_duration = lock_duration;
    config.current_round_id = 0;
    config.version = 0;
    config.bump = ctx.bumps.config;

    // emit event
    emit!(ProtocolInitialized {
        admin: config.admin,
        settlement_authority,
        fee_receiver,
    });

    Ok(())
}
