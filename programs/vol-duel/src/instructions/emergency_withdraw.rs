use crate::{constants::*, error::VolDuelError, events::*, state::*};
use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{transfer, Mint, Token, TokenAccount, Transfer},
};

#[derive(Accounts)]
pub struct EmergencyWithdraw<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED.as_bytes()],
        bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        seeds = [ROUND_SEED.as_bytes(), &round.id.to_le_bytes()],
        bump
    )]
    pub round: Account<'info, Round>,

    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), round.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = signer,
        associated_token::mint = mint,
        associated_token::authority = signer,
    )]
    pub admin_token_account: Account<'info, TokenAccount>,

    #[account(address = config.token_mint @ VolDuelError::InvalidConfig)]
    pub mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> EmergencyWithdraw<'info> {
    pub fn validate(&self) -> Result<()> {
        require!(
            self.signer.key() == self.config.admin,
            VolDuelError::Unauthorized
        );

        Ok(())
    }
}

/// Sweeps the round vault's entire balance to the admin. Stuck-fund recovery
/// only; deliberately skips every round-state precondition.
pub fn handler(ctx: Context<EmergencyWithdraw>) -> Result<()> {
    // validate
    ctx.accounts.validate()?;

    let round = &ctx.accounts.round;
    let amount = ctx.accounts.vault.amount;

    if amount > 0 {
        let transfer_accounts = Transfer {
            from: ctx.accounts.vault.to_account_info(),
            to: ctx.accounts.admin_token_account.to_account_info(),
            authority: round.to_account_info(),
        };
        let round_id_bytes = round.id.to_le_bytes();
        let seeds = &[ROUND_SEED.as_bytes(), round_id_bytes.as_ref(), &[round.bump]];
        let signer_seeds = &[&seeds[..]];
        let transfer_ctx = CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            transfer_accounts,
            signer_seeds,
        );
        transfer(transfer_ctx, amount)?;
    }

    // emit event
    emit!(EmergencyWithdrawn {
        round_id: round.id,
        admin: ctx.accounts.signer.key(),
        amount,
    });

    Ok(())
}
