use crate::{constants::*, error::VolDuelError, events::*, state::*};
use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

#[derive(Accounts)]
pub struct StartRound<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED.as_bytes()],
        bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        init,
        payer = signer,
        space = DISCRIMINATOR_SIZE + Round::INIT_SPACE,
        // saturates so the constraint cannot panic at u64::MAX; the handler's
        // checked_add reports the overflow as an error instead
        seeds = [ROUND_SEED.as_bytes(), &config.current_round_id.saturating_add(1).to_le_bytes()],
        bump
    )]
    pub round: Account<'info, Round>,

    #[account(
        init,
        payer = signer,
        token::mint = mint,
        token::authority = round,
        seeds = [VAULT_SEED.as_bytes(), round.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(address = config.token_mint @ VolDuelError::InvalidConfig)]
    pub mint: Account<'info, Mint>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

impl<'info> StartRound<'info> {
    pub fn validate(&self) -> Result<()> {
        require!(
            self.signer.key() == self.config.admin,
            VolDuelError::Unauthorized
        );

        Ok(())
    }
}

pub fn handler(ctx: Context<StartRound>) -> Result<()> {
    // validate
    ctx.accounts.validate()?;

    let config = &mut ctx.accounts.config;
    let round = &mut ctx.accounts.round;
    let now = Clock::get()?.unix_timestamp;

    // set round fields
    round.id = config
        .current_round_id
        .checked_add(1)
        .ok_or(VolDuelError::Overflow)?;
    round.start_time = now;
    // snapshots, so later config changes never alter this round's lock window
    // or its fee basis
    round.lock_duration = config.lock_duration;
    round.fee_rate_bps = config.fee_rate_bps;
    round.vault = ctx.accounts.vault.key();
    round.settled = false;
    round.result = RoundResult::Pending;
    round.close_time = 0;
    round.total_pool = 0;
    round.total_higher_staked = 0;
    round.total_lower_staked = 0;
    round.fee_collected = false;
    round.vault_bump = ctx.bumps.vault;
    round.bump = ctx.bumps.round;

    // set config fields; older rounds stay settleable and claimable by their
    // own id, they just stop accepting stakes
    config.current_round_id = round.id;

    // emit event
    emit!(RoundStarted {
        round_id: round.id,
        start_time: round.start_time,
        lock_duration: round.lock_duration,
    });

    Ok(())
}
