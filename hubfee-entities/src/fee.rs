use std::fmt;

/// Flat delivery fee in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fee(u32);

impl Fee {
    pub const fn new(amount: u32) -> Self {
        Self(amount)
    }

    pub const fn amount(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Fee {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// All distances up to and including `max_km` cost `fee`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeeTier {
    pub max_km: f64,
    pub fee: Fee,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeeSchedule {
    tiers: Vec<FeeTier>,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FeeScheduleError {
    #[error("The fee schedule has no tiers")]
    Empty,
    #[error("Fee tiers must be strictly ascending ({prev} km is followed by {next} km)")]
    NotAscending { prev: f64, next: f64 },
    #[error("Invalid tier limit {0} km")]
    InvalidLimit(f64),
}

impl FeeSchedule {
    pub fn try_new(tiers: Vec<FeeTier>) -> Result<Self, FeeScheduleError> {
        if tiers.is_empty() {
            return Err(FeeScheduleError::Empty);
        }
        if let Some(tier) = tiers.iter().find(|t| !t.max_km.is_finite() || t.max_km < 0.0) {
            return Err(FeeScheduleError::InvalidLimit(tier.max_km));
        }
        if let Some(w) = tiers.windows(2).find(|w| w[0].max_km >= w[1].max_km) {
            return Err(FeeScheduleError::NotAscending {
                prev: w[0].max_km,
                next: w[1].max_km,
            });
        }
        Ok(Self { tiers })
    }

    /// The fee of the first tier that covers `km`.
    ///
    /// Returns `None` if the distance exceeds all tiers.
    pub fn fee_for_distance(&self, km: f64) -> Option<Fee> {
        self.tiers.iter().find(|t| km <= t.max_km).map(|t| t.fee)
    }
}

const DEFAULT_TIERS: [(f64, u32); 6] = [
    (5.0, 15),
    (10.0, 20),
    (15.0, 30),
    (20.0, 35),
    (25.0, 40),
    (40.0, 45),
];

fn default_tiers() -> Vec<FeeTier> {
    DEFAULT_TIERS
        .into_iter()
        .map(|(max_km, fee)| FeeTier {
            max_km,
            fee: Fee::new(fee),
        })
        .collect()
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            tiers: default_tiers(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fee(km: f64) -> Option<u32> {
        FeeSchedule::default().fee_for_distance(km).map(Fee::amount)
    }

    #[test]
    fn default_tier_edges_are_inclusive() {
        assert_eq!(Some(15), fee(0.0));
        assert_eq!(Some(15), fee(5.0));
        assert_eq!(Some(20), fee(5.1));
        assert_eq!(Some(20), fee(10.0));
        assert_eq!(Some(30), fee(10.1));
        assert_eq!(Some(30), fee(15.0));
        assert_eq!(Some(35), fee(15.1));
        assert_eq!(Some(35), fee(20.0));
        assert_eq!(Some(40), fee(20.1));
        assert_eq!(Some(40), fee(25.0));
        assert_eq!(Some(45), fee(25.1));
        assert_eq!(Some(45), fee(40.0));
        assert_eq!(None, fee(40.1));
        assert_eq!(None, fee(1_000.0));
    }

    #[test]
    fn default_schedule_is_valid() {
        assert_eq!(
            Ok(FeeSchedule::default()),
            FeeSchedule::try_new(default_tiers())
        );
    }

    #[test]
    fn reject_invalid_schedules() {
        assert_eq!(Err(FeeScheduleError::Empty), FeeSchedule::try_new(vec![]));
        let tier = |max_km, fee| FeeTier {
            max_km,
            fee: Fee::new(fee),
        };
        assert_eq!(
            Err(FeeScheduleError::NotAscending {
                prev: 10.0,
                next: 5.0
            }),
            FeeSchedule::try_new(vec![tier(10.0, 20), tier(5.0, 15)])
        );
        assert_eq!(
            Err(FeeScheduleError::NotAscending {
                prev: 5.0,
                next: 5.0
            }),
            FeeSchedule::try_new(vec![tier(5.0, 15), tier(5.0, 20)])
        );
        assert_eq!(
            Err(FeeScheduleError::InvalidLimit(-1.0)),
            FeeSchedule::try_new(vec![tier(-1.0, 15)])
        );
        assert!(FeeSchedule::try_new(vec![tier(f64::NAN, 15)]).is_err());
    }
}
