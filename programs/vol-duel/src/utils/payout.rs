use crate::{constants::*, error::VolDuelError, state::*};

/// Frozen pool totals of a settled round, split into the quantities the
/// pari-mutuel payout formula needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSplit {
    pub winning_total: u64,
    pub losing_total: u64,
    pub fee: u64,
    pub net_losing_pool: u64,
}

pub fn is_winning_side(side: Side, result: RoundResult) -> bool {
    matches!(
        (side, result),
        (Side::Higher, RoundResult::Higher) | (Side::Lower, RoundResult::Lower)
    )
}

/// Splits a settled round's totals into winning pool, losing pool, fee and net
/// losing pool. Pure; never reads or writes accounts.
pub fn split_pools(
    total_higher_staked: u64,
    total_lower_staked: u64,
    result: RoundResult,
    fee_rate_bps: u16,
) -> std::result::Result<PoolSplit, VolDuelError> {
    let (winning_total, losing_total) = match result {
        RoundResult::Higher => (total_higher_staked, total_lower_staked),
        RoundResult::Lower => (total_lower_staked, total_higher_staked),
        RoundResult::Pending => return Err(VolDuelError::RoundNotSettled),
    };

    // fee = floor(losing_total * fee_rate_bps / 10000); zero when the losing
    // side is empty, so single-sided rounds charge nothing.
    let fee = (losing_total as u128)
        .checked_mul(fee_rate_bps as u128)
        .ok_or(VolDuelError::Overflow)?
        .checked_div(HUNDRED_PERCENT_BPS as u128)
        .ok_or(VolDuelError::Underflow)? as u64;

    let net_losing_pool = losing_total
        .checked_sub(fee)
        .ok_or(VolDuelError::Underflow)?;

    Ok(PoolSplit {
        winning_total,
        losing_total,
        fee,
        net_losing_pool,
    })
}

/// Payout for one claimant: the stake returned plus a share of the net losing
/// pool proportional to stake over the winning-side total. Every claimant is
/// computed against the original winning total, so floor division can leave a
/// residual of at most one token unit per winner in the vault; payouts plus
/// fee never exceed the round's total pool.
pub fn claimant_payout(
    stake: u64,
    side: Side,
    result: RoundResult,
    split: &PoolSplit,
) -> std::result::Result<u64, VolDuelError> {
    if !is_winning_side(side, result) {
        return Ok(0);
    }

    if split.net_losing_pool == 0 {
        // Nothing collected from the losing side; capital comes straight back.
        return Ok(stake);
    }

    // A winner's stake is part of winning_total, so the divisor is nonzero here.
    let share = (stake as u128)
        .checked_mul(split.net_losing_pool as u128)
        .ok_or(VolDuelError::Overflow)?
        .checked_div(split.winning_total as u128)
        .ok_or(VolDuelError::Underflow)? as u64;

    stake.checked_add(share).ok_or(VolDuelError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_winning_side() {
        assert!(is_winning_side(Side::Higher, RoundResult::Higher));
        assert!(is_winning_side(Side::Lower, RoundResult::Lower));
        assert!(!is_winning_side(Side::Higher, RoundResult::Lower));
        assert!(!is_winning_side(Side::Lower, RoundResult::Higher));
        assert!(!is_winning_side(Side::Higher, RoundResult::Pending));
        assert!(!is_winning_side(Side::Lower, RoundResult::Pending));
    }

    #[test]
    fn test_split_pools_pending_rejected() {
        assert!(matches!(
            split_pools(1_000, 1_000, RoundResult::Pending, 250),
            Err(VolDuelError::RoundNotSettled)
        ));
    }

    // 250 bps fee, stakes: A 1_000 Higher, B 2_000 Lower, C 500 Higher,
    // settled Higher.
    #[test]
    fn test_two_sided_round_payouts() {
        let split = split_pools(1_500, 2_000, RoundResult::Higher, 250).unwrap();
        assert_eq!(
            split,
            PoolSplit {
                winning_total: 1_500,
                losing_total: 2_000,
                fee: 50,
                net_losing_pool: 1_950,
            }
        );

        let a = claimant_payout(1_000, Side::Higher, RoundResult::Higher, &split).unwrap();
        let b = claimant_payout(2_000, Side::Lower, RoundResult::Higher, &split).unwrap();
        let c = claimant_payout(500, Side::Higher, RoundResult::Higher, &split).unwrap();

        assert_eq!(a, 2_300);
        assert_eq!(b, 0);
        assert_eq!(c, 1_150);

        // exact conservation in this scenario: payouts + fee == total pool
        assert_eq!(a + b + c + split.fee, 3_500);
    }

    #[test]
    fn test_loser_payout_is_zero() {
        let split = split_pools(1_500, 2_000, RoundResult::Lower, 250).unwrap();
        assert_eq!(
            claimant_payout(1_500, Side::Higher, RoundResult::Lower, &split).unwrap(),
            0
        );
    }

    #[test]
    fn test_single_sided_round_returns_capital_only() {
        let split = split_pools(1_500, 0, RoundResult::Higher, 250).unwrap();
        assert_eq!(split.fee, 0);
        assert_eq!(split.net_losing_pool, 0);

        assert_eq!(
            claimant_payout(1_000, Side::Higher, RoundResult::Higher, &split).unwrap(),
            1_000
        );
        assert_eq!(
            claimant_payout(500, Side::Higher, RoundResult::Higher, &split).unwrap(),
            500
        );
    }

    #[test]
    fn test_full_fee_rate_returns_stakes_only() {
        let split = split_pools(1_000, 3_000, RoundResult::Higher, 10_000).unwrap();
        assert_eq!(split.fee, 3_000);
        assert_eq!(split.net_losing_pool, 0);
        assert_eq!(
            claimant_payout(1_000, Side::Higher, RoundResult::Higher, &split).unwrap(),
            1_000
        );
    }

    #[test]
    fn test_floor_division_residual_is_bounded() {
        // three winners of 1 each against a losing pool of 10, no fee
        let split = split_pools(3, 10, RoundResult::Higher, 0).unwrap();
        let payouts: u64 = (0..3)
            .map(|_| claimant_payout(1, Side::Higher, RoundResult::Higher, &split).unwrap())
            .sum();

        let total_pool = 13;
        assert!(payouts + split.fee <= total_pool);
        // the unclaimed residual is strictly smaller than the winner count
        assert!(total_pool - payouts - split.fee < 3);
    }

    #[test]
    fn test_large_stakes_use_wide_intermediates() {
        let stake = u64::MAX / 2;
        let split = split_pools(stake, stake, RoundResult::Higher, 100).unwrap();
        let payout = claimant_payout(stake, Side::Higher, RoundResult::Higher, &split).unwrap();
        assert_eq!(payout, stake + split.net_losing_pool);
    }
}
