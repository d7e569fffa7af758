use std::sync::atomic::{AtomicI64, Ordering};

use thiserror::Error;

use super::{Amount, RideCount, TransportMode};

pub const DEFAULT_COMMERCIAL_PRICE: Amount = 50;

/// Volume discount tiers for ground and subway rides:
/// (last ride number of the tier, ground price, subway price).
/// The last tier has no upper bound
const TIERS: [(RideCount, Amount, Amount); 5] = [
    (10, 33, 38),
    (20, 32, 37),
    (30, 31, 36),
    (40, 30, 35),
    (RideCount::MAX, 29, 34),
];

/// Labels and representative ride numbers of the tiers, used for the monthly price table
const TIER_SAMPLES: [(&str, RideCount); 5] = [
    ("<=10", 1),
    ("11-20", 11),
    ("21-30", 21),
    ("31-40", 31),
    (">=41", 41),
];

/// Prices rides for every card that shares it. Only the commercial price is
/// configurable, the tier table is fixed for the life of the process
#[derive(Debug)]
pub struct FareSchedule {
    commercial_price: AtomicI64,
}

impl Default for FareSchedule {
    fn default() -> Self {
        FareSchedule {
            commercial_price: AtomicI64::new(DEFAULT_COMMERCIAL_PRICE),
        }
    }
}

impl FareSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// schedule with a custom commercial price, fails if the price is negative
    pub fn with_commercial_price(price: Amount) -> Result<Self, PriceError> {
        let schedule = Self::default();
        schedule.set_commercial_price(price)?;
        Ok(schedule)
    }

    /// price of the `ride_count`-th ride of `mode` in the current billing cycle
    pub fn ride_price(&self, ride_count: RideCount, mode: TransportMode) -> Amount {
        //ride 0 is not a real ride, it falls into the first tier as well
        let (_, ground, subway) = TIERS
            .iter()
            .find(|tier| ride_count <= tier.0)
            .unwrap_or(&TIERS[TIERS.len() - 1]);
        match mode {
            TransportMode::Ground => *ground,
            TransportMode::Subway => *subway,
            TransportMode::Commercial => self.commercial_price(),
        }
    }

    pub fn commercial_price(&self) -> Amount {
        self.commercial_price.load(Ordering::Acquire)
    }

    /// replace the commercial price for all cards using this schedule
    pub fn set_commercial_price(&self, price: Amount) -> Result<(), PriceError> {
        if price < 0 {
            return Err(PriceError::NegativePrice(price));
        }
        let previous = self.commercial_price.swap(price, Ordering::AcqRel);
        debug!("commercial price changed {} -> {}", previous, price);
        Ok(())
    }

    /// one price per tier for the given mode, for display
    pub fn monthly_prices(&self, mode: TransportMode) -> [TierPrice; 5] {
        let price = |(label, ride_count): (&'static str, RideCount)| TierPrice {
            label,
            price: self.ride_price(ride_count, mode),
        };
        [
            price(TIER_SAMPLES[0]),
            price(TIER_SAMPLES[1]),
            price(TIER_SAMPLES[2]),
            price(TIER_SAMPLES[3]),
            price(TIER_SAMPLES[4]),
        ]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TierPrice {
    pub label: &'static str,
    pub price: Amount,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceError {
    #[error("price can't be negative: {0}")]
    NegativePrice(Amount),
}
