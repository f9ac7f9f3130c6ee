use crate::error::VolDuelError;
use anchor_lang::prelude::*;

/// The side a participant takes on a round's volatility verdict.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum Side {
    Higher,
    Lower,
}

#[account]
#[derive(InitSpace)]
pub struct Prediction {
    // --- Identity ---
    pub round: Pubkey,  // The round this prediction belongs to.
    pub bettor: Pubkey, // The participant who staked.

    // --- Stake Info ---
    pub has_staked: bool, // Set on the first (and only) stake.
    pub amount: u64,      // The staked amount, immutable after creation.
    pub side: Side,       // The chosen side, immutable after creation.
    pub claimed: bool,    // Whether the payout has been claimed.

    // --- Metadata ---
    pub created_at: i64, // The timestamp when the stake was placed.
    pub bump: u8,        // A bump seed for PDA.
}

impl Prediction {
    /// Flips `claimed` exactly once. The caller must persist the record before
    /// moving any value out of the vault.
    pub fn mark_claimed(&mut self) -> std::result::Result<(), VolDuelError> {
        if self.claimed {
            return Err(VolDuelError::AlreadyClaimed);
        }
        self.claimed = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_claimed_is_idempotent_guard() {
        let mut prediction = Prediction {
            round: Pubkey::default(),
            bettor: Pubkey::default(),
            has_staked: true,
            amount: 1_000,
            side: Side::Higher,
            claimed: false,
            created_at: 0,
            bump: 0,
        };

        assert!(prediction.mark_claimed().is_ok());
        assert!(prediction.claimed);
        assert!(matches!(
            prediction.mark_claimed(),
            Err(VolDuelError::AlreadyClaimed)
        ));
        assert!(prediction.claimed);
    }
}
