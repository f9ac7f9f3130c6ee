use crate::{constants::*, error::VolDuelError, events::*, state::*};
use anchor_lang::prelude::*;
use anchor_spl::token::{transfer, Mint, Token, TokenAccount, Transfer};

#[derive(Accounts)]
pub struct Stake<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED.as_bytes()],
        bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [ROUND_SEED.as_bytes(), &round.id.to_le_bytes()],
        bump
    )]
    pub round: Account<'info, Round>,

    #[account(
        init_if_needed,
        payer = signer,
        space = DISCRIMINATOR_SIZE + Prediction::INIT_SPACE,
        seeds = [PREDICTION_SEED.as_bytes(), round.key().as_ref(), signer.key().as_ref()],
        bump
    )]
    pub prediction: Account<'info, Prediction>,

    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), round.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = signer
    )]
    pub bettor_token_account: Account<'info, TokenAccount>,

    #[account(address = config.token_mint @ VolDuelError::InvalidConfig)]
    pub mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> Stake<'info> {
    pub fn validate(&self, amount: u64) -> Result<()> {
        require!(amount > 0, VolDuelError::InvalidStake);

        require!(
            self.round.id == self.config.current_round_id,
            VolDuelError::RoundNotCurrent
        );

        require!(
            Clock::get()?.unix_timestamp < self.round.lock_deadline()?,
            VolDuelError::RoundLocked
        );

        // the prediction PDA is init_if_needed; a fresh account has
        // has_staked == false, a second attempt finds it set
        require!(!self.prediction.has_staked, VolDuelError::AlreadyStaked);

        Ok(())
    }
}

pub fn handler(ctx: Context<Stake>, amount: u64, side: Side) -> Result<()> {
    // validate
    ctx.accounts.validate(amount)?;

    // transfer stake from signer to the round vault
    let transfer_accounts = Transfer {
        from: ctx.accounts.bettor_token_account.to_account_info(),
        to: ctx.accounts.vault.to_account_info(),
        authority: ctx.accounts.signer.to_account_info(),
    };
    let transfer_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        transfer_accounts,
    );
    transfer(transfer_ctx, amount)?;

    let round = &mut ctx.accounts.round;
    let prediction = &mut ctx.accounts.prediction;

    // set prediction fields
    prediction.round = round.key();
    prediction.bettor = ctx.accounts.signer.key();
    prediction.has_staked = true;
    prediction.amount = amount;
    prediction.side = side;
    prediction.claimed = false;
    prediction.created_at = Clock::get()?.unix_timestamp;
    prediction.bump = ctx.bumps.prediction;

    // set round fields
    round.record_stake(side, amount)?;

    // emit event
    emit!(StakePlaced {
        round_id: round.id,
        bettor: prediction.bettor,
        side,
        amount,
        total_pool: round.total_pool,
    });

    Ok(())
}
