use crate::{constants::*, error::VolDuelError, events::*, state::*, utils::*};
use anchor_lang::prelude::*;
use anchor_lang::AccountDeserialize;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{transfer, Mint, Token, TokenAccount, Transfer},
};

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED.as_bytes()],
        bump
    )]
    pub config: Account<'info, Config>,

    /// CHECK: Fee receiver pubkey from config
    #[account(address = config.fee_receiver @ VolDuelError::InvalidConfig)]
    pub fee_receiver: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = signer,
        associated_token::mint = mint,
        associated_token::authority = fee_receiver,
    )]
    pub fee_receiver_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = signer,
    )]
    pub bettor_token_account: Account<'info, TokenAccount>,

    #[account(address = config.token_mint @ VolDuelError::InvalidConfig)]
    pub mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

/// Claims payouts for a batch of settled rounds. Each round contributes a
/// `[round, prediction, vault]` triple in remaining accounts; triples are
/// processed in order and the batch is equivalent to sequential single claims.
pub fn handler<'info>(ctx: Context<'_, '_, 'info, 'info, Claim<'info>>) -> Result<()> {
    require!(
        !ctx.remaining_accounts.is_empty() && ctx.remaining_accounts.len() % 3 == 0,
        VolDuelError::InvalidRemainingAccountsLength
    );

    let config = &ctx.accounts.config;
    let claimant = ctx.accounts.signer.key();

    for chunk in ctx.remaining_accounts.chunks(3) {
        let round_ai = &chunk[0];
        let prediction_ai = &chunk[1];
        let vault_ai = &chunk[2];

        // Round PDA must be ours and self-consistent
        require_keys_eq!(
            *round_ai.owner,
            *ctx.program_id,
            VolDuelError::InvalidRoundAccount
        );
        let mut round: Round = {
            let data = round_ai.try_borrow_data()?;
            Round::try_deserialize(&mut &data[..])
                .map_err(|_| VolDuelError::InvalidRoundAccount)?
        };
        let expected_round = Pubkey::find_program_address(
            &[ROUND_SEED.as_bytes(), &round.id.to_le_bytes()],
            ctx.program_id,
        )
        .0;
        require_keys_eq!(
            *round_ai.key,
            expected_round,
            VolDuelError::InvalidRoundAccount
        );

        require_keys_eq!(*vault_ai.key, round.vault, VolDuelError::InvalidVaultAccount);

        require!(round.settled, VolDuelError::RoundNotSettled);

        // Prediction PDA for (round, claimant); an absent account means the
        // claimant never staked in this round
        let expected_prediction = Pubkey::find_program_address(
            &[
                PREDICTION_SEED.as_bytes(),
                round_ai.key.as_ref(),
                claimant.as_ref(),
            ],
            ctx.program_id,
        )
        .0;
        require_keys_eq!(
            *prediction_ai.key,
            expected_prediction,
            VolDuelError::InvalidPredictionAccount
        );
        require!(
            prediction_ai.owner == ctx.program_id && !prediction_ai.data_is_empty(),
            VolDuelError::DidNotParticipate
        );
        let mut prediction: Prediction = {
            let data = prediction_ai.try_borrow_data()?;
            Prediction::try_deserialize(&mut &data[..])
                .map_err(|_| VolDuelError::InvalidPredictionAccount)?
        };
        require!(prediction.has_staked, VolDuelError::DidNotParticipate);

        // flips claimed or fails with AlreadyClaimed; persisted below before
        // any value leaves the vault
        prediction.mark_claimed()?;

        // splits against the fee rate frozen into the round at creation, so
        // every claim of this round settles the same fee and payouts
        let split = round.payout_split()?;
        let payout = claimant_payout(prediction.amount, prediction.side, round.result, &split)?;

        // the first claim against a round, winner or loser, collects the fee
        let collect_fee = !round.fee_collected;
        round.fee_collected = true;

        // persist round and prediction state before the transfers, so a
        // reentrant call fails its own precondition checks
        write_account(round_ai, &round)?;
        write_account(prediction_ai, &prediction)?;

        let round_id_bytes = round.id.to_le_bytes();
        let seeds = &[ROUND_SEED.as_bytes(), round_id_bytes.as_ref(), &[round.bump]];
        let signer_seeds = &[&seeds[..]];

        if collect_fee {
            if split.fee > 0 {
                let transfer_accounts = Transfer {
                    from: vault_ai.clone(),
                    to: ctx.accounts.fee_receiver_token_account.to_account_info(),
                    authority: round_ai.clone(),
                };
                let transfer_ctx = CpiContext::new_with_signer(
                    ctx.accounts.token_program.to_account_info(),
                    transfer_accounts,
                    signer_seeds,
                );
                transfer(transfer_ctx, split.fee)?;
            }

            emit!(FeeCollected {
                round_id: round.id,
                receiver: config.fee_receiver,
                amount: split.fee,
            });
        }

        if payout > 0 {
            let transfer_accounts = Transfer {
                from: vault_ai.clone(),
                to: ctx.accounts.bettor_token_account.to_account_info(),
                authority: round_ai.clone(),
            };
            let transfer_ctx = CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                transfer_accounts,
                signer_seeds,
            );
            transfer(transfer_ctx, payout)?;
        }

        // emitted for losers too, with a zero amount
        emit!(WinningsClaimed {
            round_id: round.id,
            bettor: claimant,
            amount: payout,
        });
    }

    Ok(())
}

/// Serializes an account back into its data buffer, keeping the discriminator.
fn write_account<T: AnchorSerialize>(account_info: &AccountInfo, value: &T) -> Result<()> {
    let mut data = account_info.try_borrow_mut_data()?;
    let serialized = value.try_to_vec().map_err(|_| VolDuelError::SerializeError)?;
    if serialized.len() > data[DISCRIMINATOR_SIZE..].len() {
        return Err(VolDuelError::AccountDataTooSmall.into());
    }
    data[DISCRIMINATOR_SIZE..DISCRIMINATOR_SIZE + serialized.len()].copy_from_slice(&serialized);
    Ok(())
}
