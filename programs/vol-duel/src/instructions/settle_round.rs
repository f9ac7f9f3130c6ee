use crate::{constants::*, error::VolDuelError, events::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct SettleRound<'info> {
    pub signer: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED.as_bytes()],
        bump
    )]
    pub config: Account<'info, Config>,

    // any round by id, current or not; starting a newer round does not retire
    // an unsettled older one
    #[account(
        mut,
        seeds = [ROUND_SEED.as_bytes(), &round.id.to_le_bytes()],
        bump
    )]
    pub round: Account<'info, Round>,
}

impl<'info> SettleRound<'info> {
    pub fn validate(&self) -> Result<()> {
        require!(
            self.signer.key() == self.config.settlement_authority,
            VolDuelError::Unauthorized
        );

        require!(
            Clock::get()?.unix_timestamp >= self.round.lock_deadline()?,
            VolDuelError::LockNotElapsed
        );

        Ok(())
    }
}

pub fn handler(ctx: Context<SettleRound>, verdict: RoundResult) -> Result<()> {
    // validate
    ctx.accounts.validate()?;

    let round = &mut ctx.accounts.round;
    let now = Clock::get()?.unix_timestamp;

    // the single, terminal lifecycle transition
    round.apply_settlement(verdict, now)?;

    // emit event
    emit!(RoundSettled {
        round_id: round.id,
        result: round.result,
        close_time: round.close_time,
    });

    Ok(())
}
