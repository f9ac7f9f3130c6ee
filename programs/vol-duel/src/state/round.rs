use crate::error::VolDuelError;
use crate::state::Side;
use crate::utils::payout::{split_pools, PoolSplit};
use anchor_lang::prelude::*;

/// Outcome of a round. Pending until settlement, then Higher or Lower forever.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum RoundResult {
    Pending,
    Higher,
    Lower,
}

#[account]
#[derive(InitSpace)]
pub struct Round {
    // --- Identity ---
    pub id: u64,           // Unique identifier, sequential from 1 (config.current_round_id).
    pub start_time: i64,   // The timestamp when the round was created.
    pub lock_duration: i64, // Lock period snapshotted from config at creation.
    pub fee_rate_bps: u16,  // Fee rate snapshotted from config at creation.
    pub vault: Pubkey,     // The vault token account holding this round's stakes.

    // --- State ---
    pub settled: bool,             // False until settlement, then true forever.
    pub result: RoundResult,       // Pending until settled.
    pub close_time: i64,           // 0 until settled; set to the settlement timestamp.
    pub total_pool: u64,           // Sum of all stakes in this round.
    pub total_higher_staked: u64,  // Sum of stakes on the Higher side.
    pub total_lower_staked: u64,   // Sum of stakes on the Lower side.
    pub fee_collected: bool,       // Set on the first claim processed against this round.

    // --- Metadata ---
    pub vault_bump: u8, // A bump seed for the vault PDA.
    pub bump: u8,       // A bump seed for the round PDA.
}

impl Round {
    /// Timestamp at which staking closes and settlement becomes possible.
    pub fn lock_deadline(&self) -> std::result::Result<i64, VolDuelError> {
        self.start_time
            .checked_add(self.lock_duration)
            .ok_or(VolDuelError::Overflow)
    }

    /// Adds a stake to the pool accumulators. `total_pool` and the side
    /// accumulator receive the same amount, so
    /// `total_pool == total_higher_staked + total_lower_staked` is preserved.
    pub fn record_stake(
        &mut self,
        side: Side,
        amount: u64,
    ) -> std::result::Result<(), VolDuelError> {
        self.total_pool = self
            .total_pool
            .checked_add(amount)
            .ok_or(VolDuelError::Overflow)?;

        match side {
            Side::Higher => {
                self.total_higher_staked = self
                    .total_higher_staked
                    .checked_add(amount)
                    .ok_or(VolDuelError::Overflow)?;
            }
            Side::Lower => {
                self.total_lower_staked = self
                    .total_lower_staked
                    .checked_add(amount)
                    .ok_or(VolDuelError::Overflow)?;
            }
        }

        Ok(())
    }

    /// Splits this round's frozen totals using the fee rate snapshotted at
    /// creation. Config fee changes after creation never reach this round, so
    /// every claim against it settles the same fee and the same net losing
    /// pool.
    pub fn payout_split(&self) -> std::result::Result<PoolSplit, VolDuelError> {
        split_pools(
            self.total_higher_staked,
            self.total_lower_staked,
            self.result,
            self.fee_rate_bps,
        )
    }

    /// The single lifecycle transition: open -> settled. Terminal; no state
    /// mutation happens on failure.
    pub fn apply_settlement(
        &mut self,
        verdict: RoundResult,
        now: i64,
    ) -> std::result::Result<(), VolDuelError> {
        if self.settled {
            return Err(VolDuelError::AlreadySettled);
        }
        if verdict == RoundResult::Pending {
            return Err(VolDuelError::InvalidVerdict);
        }

        self.settled = true;
        self.result = verdict;
        self.close_time = now;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_round() -> Round {
        Round {
            id: 1,
            start_time: 1_700_000_000,
            lock_duration: 300,
            fee_rate_bps: 250,
            vault: Pubkey::default(),
            settled: false,
            result: RoundResult::Pending,
            close_time: 0,
            total_pool: 0,
            total_higher_staked: 0,
            total_lower_staked: 0,
            fee_collected: false,
            vault_bump: 0,
            bump: 0,
        }
    }

    #[test]
    fn test_conservation_after_every_stake() {
        let mut round = open_round();

        round.record_stake(Side::Higher, 1_000).unwrap();
        assert_eq!(
            round.total_pool,
            round.total_higher_staked + round.total_lower_staked
        );

        round.record_stake(Side::Lower, 2_000).unwrap();
        assert_eq!(
            round.total_pool,
            round.total_higher_staked + round.total_lower_staked
        );

        round.record_stake(Side::Higher, 500).unwrap();
        assert_eq!(round.total_pool, 3_500);
        assert_eq!(round.total_higher_staked, 1_500);
        assert_eq!(round.total_lower_staked, 2_000);
    }

    #[test]
    fn test_record_stake_overflow() {
        let mut round = open_round();
        round.record_stake(Side::Higher, u64::MAX).unwrap();
        assert!(matches!(
            round.record_stake(Side::Lower, 1),
            Err(VolDuelError::Overflow)
        ));
    }

    #[test]
    fn test_lock_deadline() {
        let round = open_round();
        assert_eq!(round.lock_deadline().unwrap(), 1_700_000_300);

        let mut late = open_round();
        late.start_time = i64::MAX;
        assert!(matches!(late.lock_deadline(), Err(VolDuelError::Overflow)));
    }

    #[test]
    fn test_settlement_sets_result_and_close_time() {
        let mut round = open_round();
        round.apply_settlement(RoundResult::Higher, 1_700_000_400).unwrap();

        assert!(round.settled);
        assert_eq!(round.result, RoundResult::Higher);
        assert_eq!(round.close_time, 1_700_000_400);
    }

    #[test]
    fn test_settlement_is_terminal() {
        let mut round = open_round();
        round.apply_settlement(RoundResult::Lower, 1_700_000_400).unwrap();

        assert!(matches!(
            round.apply_settlement(RoundResult::Higher, 1_700_000_500),
            Err(VolDuelError::AlreadySettled)
        ));
        assert_eq!(round.result, RoundResult::Lower);
        assert_eq!(round.close_time, 1_700_000_400);
    }

    #[test]
    fn test_fee_basis_frozen_at_round_creation() {
        use crate::utils::payout::claimant_payout;

        let mut round = open_round();
        round.fee_rate_bps = 10_000;
        round.record_stake(Side::Higher, 1_000).unwrap();
        round.record_stake(Side::Lower, 9_000).unwrap();
        round
            .apply_settlement(RoundResult::Higher, 1_700_000_400)
            .unwrap();

        // the first claim transfers the entire losing pool as the fee
        let split = round.payout_split().unwrap();
        assert_eq!(split.fee, 9_000);
        assert_eq!(split.net_losing_pool, 0);

        // a config fee-rate change between two claims of this round plays no
        // part: a later claim splits against the same frozen rate, so the
        // winner gets capital back and the vault is never overdrawn
        let later = round.payout_split().unwrap();
        assert_eq!(later, split);

        let payout = claimant_payout(1_000, Side::Higher, RoundResult::Higher, &later).unwrap();
        assert_eq!(payout, 1_000);
        assert!(split.fee + payout <= round.total_pool);
    }

    #[test]
    fn test_pending_verdict_rejected() {
        let mut round = open_round();
        assert!(matches!(
            round.apply_settlement(RoundResult::Pending, 1_700_000_400),
            Err(VolDuelError::InvalidVerdict)
        ));
        assert!(!round.settled);
        assert_eq!(round.result, RoundResult::Pending);
        assert_eq!(round.close_time, 0);
    }
}
