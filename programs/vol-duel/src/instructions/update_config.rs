use crate::{constants::*, error::VolDuelError, events::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED.as_bytes()],
        bump
    )]
    pub config: Account<'info, Config>,
}

impl<'info> UpdateConfig<'info> {
    pub fn validate(
        &self,
        new_admin: Option<Pubkey>,
        new_settlement_authority: Option<Pubkey>,
        new_fee_receiver: Option<Pubkey>,
        new_fee_rate_bps: Option<u16>,
        new_lock_duration: Option<i64>,
    ) -> Result<()> {
        require!(
            self.signer.key() == self.config.admin,
            VolDuelError::Unauthorized
        );

        if let Some(new_admin) = new_admin {
            require!(new_admin != Pubkey::default(), VolDuelError::InvalidConfig);
        }

        if let Some(new_settlement_authority) = new_settlement_authority {
            require!(
                new_settlement_authority != Pubkey::default(),
                VolDuelError::InvalidConfig
            );
        }

        if let Some(new_fee_receiver) = new_fee_receiver {
            require!(
                new_fee_receiver != Pubkey::default(),
                VolDuelError::InvalidConfig
            );
        }

        if let Some(new_fee_rate_bps) = new_fee_rate_bps {
            require!(
                new_fee_rate_bps <= HUNDRED_PERCENT_BPS,
                VolDuelError::InvalidConfig
            );
        }

        if let Some(new_lock_duration) = new_lock_duration {
            require!(new_lock_duration > 0, VolDuelError::InvalidConfig);
        }

        Ok(())
    }
}

pub fn handler(
    ctx: Context<UpdateConfig>,
    new_admin: Option<Pubkey>,
    new_settlement_authority: Option<Pubkey>,
    new_fee_receiver: Option<Pubkey>,
    new_fee_rate_bps: Option<u16>,
    new_risk_threshold_bps: Option<u16>,
    new_lock_duration: Option<i64>,
) -> Result<()> {
    // validate
    ctx.accounts.validate(
        new_admin,
        new_settlement_authority,
        new_fee_receiver,
        new_fee_rate_bps,
        new_lock_duration,
    )?;

    let config = &mut ctx.accounts.config;

    // set fields; lock_duration changes only reach rounds created afterwards,
    // in-flight rounds keep their snapshot
    if let Some(new_admin) = new_admin {
        config.admin = new_admin;
    }
    if let Some(new_settlement_authority) = new_settlement_authority {
        config.settlement_authority = new_settlement_authority;
    }
    if let Some(new_fee_receiver) = new_fee_receiver {
        config.fee_receiver = new_fee_receiver;
    }
    if let Some(new_fee_rate_bps) = new_fee_rate_bps {
        config.fee_rate_bps = new_fee_rate_bps;
    }
    if let Some(new_risk_threshold_bps) = new_risk_threshold_bps {
        config.risk_threshold_bps = new_risk_threshold_bps;
    }
    if let Some(new_lock_duration) = new_lock_duration {
        config.lock_duration = new_lock_duration;
    }

    // update config version
    config.version = config
        .version
        .checked_add(1)
        .ok_or(VolDuelError::Overflow)?;

    // emit event
    emit!(ConfigUpdated {
        admin: config.admin,
        version: config.version,
    });

    Ok(())
}
