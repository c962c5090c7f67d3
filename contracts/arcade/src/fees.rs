//! Basis-point fee policy. Pure arithmetic, no storage.
//!
//! All rates are expressed out of [`BASIS_POINTS`] (1000 = 100%). A payout of
//! `total` is split into the winners' net amounts and three fee cuts, each
//! `floor(total * rate / 1000)`. Floor division can leave a few units unpaid;
//! that dust stays in the pool, so only [`FeeSplit::paid`] leaves it.

use crate::error::Error;

pub const BASIS_POINTS: u32 = 1000;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FeeRates {
    pub platform: u32,
    pub game_creator: u32,
    pub tournament_creator: u32,
}

impl FeeRates {
    pub fn total(&self) -> u64 {
        self.platform as u64 + self.game_creator as u64 + self.tournament_creator as u64
    }

    /// Total take must stay strictly under 100%.
    pub fn validate(&self) -> Result<(), Error> {
        if self.total() >= BASIS_POINTS as u64 {
            return Err(Error::FeeExceeded);
        }
        Ok(())
    }

    /// Share of each listed amount that reaches the winner.
    pub fn winner_rate(&self) -> Result<u32, Error> {
        self.validate()?;
        Ok(BASIS_POINTS - self.total() as u32)
    }
}

/// Applies the "zero means base fee" rule to a proposed game-creator fee.
pub fn resolve_game_fee(base_fee: u32, proposed: u32) -> Result<u32, Error> {
    if proposed == 0 {
        return Ok(base_fee);
    }
    if proposed < base_fee {
        return Err(Error::FeeTooLow);
    }
    Ok(proposed)
}

/// `floor(amount * rate / 1000)`.
pub fn cut(amount: i128, rate: u32) -> Result<i128, Error> {
    amount
        .checked_mul(rate as i128)
        .map(|scaled| scaled / BASIS_POINTS as i128)
        .ok_or(Error::Overflow)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FeeSplit {
    pub winners: i128,
    pub game_creator: i128,
    pub tournament_creator: i128,
    pub platform: i128,
}

impl FeeSplit {
    /// `winners` is the already-summed net amount owed to winners.
    pub fn compute(total: i128, winners: i128, rates: &FeeRates) -> Result<Self, Error> {
        rates.validate()?;
        let split = FeeSplit {
            winners,
            game_creator: cut(total, rates.game_creator)?,
            tournament_creator: cut(total, rates.tournament_creator)?,
            platform: cut(total, rates.platform)?,
        };
        if split.paid()? > total {
            return Err(Error::FeeExceeded);
        }
        Ok(split)
    }

    /// Everything transferred out of the pool for this payout.
    pub fn paid(&self) -> Result<i128, Error> {
        self.winners
            .checked_add(self.game_creator)
            .and_then(|sum| sum.checked_add(self.tournament_creator))
            .and_then(|sum| sum.checked_add(self.platform))
            .ok_or(Error::Overflow)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const RATES: FeeRates = FeeRates {
        platform: 100,
        game_creator: 150,
        tournament_creator: 250,
    };

    #[test]
    fn test_resolve_game_fee() {
        assert_eq!(resolve_game_fee(100, 0), Ok(100));
        assert_eq!(resolve_game_fee(100, 150), Ok(150));
        assert_eq!(resolve_game_fee(100, 100), Ok(100));
        assert_eq!(resolve_game_fee(100, 99), Err(Error::FeeTooLow));
        assert_eq!(resolve_game_fee(0, 0), Ok(0));
    }

    #[test]
    fn test_total_fee_cap() {
        assert_eq!(RATES.winner_rate(), Ok(500));

        let at_cap = FeeRates {
            platform: 100,
            game_creator: 400,
            tournament_creator: 500,
        };
        assert_eq!(at_cap.validate(), Err(Error::FeeExceeded));
        assert_eq!(at_cap.winner_rate(), Err(Error::FeeExceeded));

        let huge = FeeRates {
            platform: u32::MAX,
            game_creator: u32::MAX,
            tournament_creator: 1,
        };
        assert_eq!(huge.validate(), Err(Error::FeeExceeded));
    }

    #[test]
    fn test_split_even_total() {
        let rates = FeeRates {
            platform: 100,
            game_creator: 150,
            tournament_creator: 150,
        };
        let rate = rates.winner_rate().unwrap();
        assert_eq!(rate, 600);

        let winners = cut(28_000, rate).unwrap() + cut(12_000, rate).unwrap();
        assert_eq!(winners, 24_000);

        let split = FeeSplit::compute(40_000, winners, &rates).unwrap();
        assert_eq!(split.platform, 4_000);
        assert_eq!(split.game_creator, 6_000);
        assert_eq!(split.tournament_creator, 6_000);
        assert_eq!(split.paid(), Ok(40_000));
    }

    #[test]
    fn test_split_rounding_dust_stays_unpaid() {
        let rate = RATES.winner_rate().unwrap();
        let winners = cut(3, rate).unwrap() + cut(4, rate).unwrap();
        assert_eq!(winners, 1 + 2);

        let split = FeeSplit::compute(7, winners, &RATES).unwrap();
        assert_eq!(split.game_creator, 1);
        assert_eq!(split.tournament_creator, 1);
        assert_eq!(split.platform, 0);
        assert_eq!(split.paid(), Ok(5));
    }

    #[test]
    fn test_split_rejects_winners_above_their_share() {
        assert_eq!(FeeSplit::compute(1_000, 501, &RATES), Err(Error::FeeExceeded));
    }

    #[test]
    fn test_cut_overflow() {
        assert_eq!(cut(i128::MAX, 2), Err(Error::Overflow));
        assert_eq!(cut(i128::MAX, 0), Ok(0));
    }
}
