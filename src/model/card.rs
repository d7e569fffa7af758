use std::sync::Arc;

use thiserror::Error;

use super::{fare::FareSchedule, Amount, RideCount, RideCounters, TransportMode};

/// Card is the main entity that is responsible for charging rides,
/// keep the internals private, balance and counters change only through the operations below
#[derive(Debug, Clone)]
pub struct Card {
    balance: Amount,
    rides: RideCounters,
    schedule: Arc<FareSchedule>,
}

/// Outcome of `Card::add_several`
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BulkRides {
    pub added: RideCount,
    pub cost: Amount,
    /// true only if every requested ride was added
    pub completed: bool,
}

impl Card {
    /// construct new Card with no rides taken
    pub fn new(schedule: Arc<FareSchedule>, balance: Amount) -> Result<Self, CardError> {
        Self::restore(schedule, balance, 0, 0)
    }

    /// construct a Card from previously saved state
    pub fn restore(
        schedule: Arc<FareSchedule>,
        balance: Amount,
        ground_rides: RideCount,
        subway_rides: RideCount,
    ) -> Result<Self, CardError> {
        if balance < 0 {
            return Err(CardError::NegativeBalance(balance));
        }
        Ok(Card {
            balance,
            rides: RideCounters {
                ground: ground_rides,
                subway: subway_rides,
                ..RideCounters::default()
            },
            schedule,
        })
    }

    /// current balance, never negative
    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub fn ride_count(&self, mode: TransportMode) -> RideCount {
        self.rides.get(mode)
    }

    pub fn rides(&self) -> RideCounters {
        self.rides
    }

    pub fn schedule(&self) -> &Arc<FareSchedule> {
        &self.schedule
    }

    /// price of the next ride of `mode`, nothing is charged
    pub fn next_fare(&self, mode: TransportMode) -> Amount {
        let next = self.rides.get(mode).saturating_add(1);
        self.schedule.ride_price(next, mode)
    }

    /// add funds, returns the new balance
    pub fn top_up(&mut self, amount: Amount) -> Result<Amount, CardError> {
        if amount < 0 {
            return Err(CardError::NegativeTopUp(amount));
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(CardError::BalanceOverflow(amount))?;
        Ok(self.balance)
    }

    /// charge the next ride of `mode`, returns the fare that was paid.
    /// On error neither the balance nor the counters are touched
    pub fn add_ride(&mut self, mode: TransportMode) -> Result<Amount, CardError> {
        let next = self
            .rides
            .get(mode)
            .checked_add(1)
            .ok_or(CardError::RideCountOverflow(mode))?;
        let price = self.schedule.ride_price(next, mode);
        //allow only if balance >= price
        if self.balance < price {
            return Err(CardError::InsufficientBalance {
                price,
                balance: self.balance,
            });
        }
        self.balance -= price;
        self.rides.set(mode, next);
        debug!("{:?} ride #{} charged {}", mode, next, price);
        Ok(price)
    }

    /// add up to `count` rides of the same mode, each one priced by its own ride number.
    /// Stops at the first declined ride, rides added before that are kept
    pub fn add_several(&mut self, count: RideCount, mode: TransportMode) -> BulkRides {
        let mut result = BulkRides {
            added: 0,
            cost: 0,
            completed: false,
        };
        while result.added < count {
            match self.add_ride(mode) {
                Ok(price) => {
                    result.added += 1;
                    result.cost += price;
                }
                Err(e) => {
                    debug!("stopped after {} of {} rides: {}", result.added, count, e);
                    return result;
                }
            }
        }
        result.completed = count > 0;
        result
    }

    /// start a new billing cycle, balance stays the same
    pub fn reset_rides(&mut self) {
        self.rides = RideCounters::default();
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CardError {
    #[error("balance can't be negative: {0}")]
    NegativeBalance(Amount),
    #[error("top up amount can't be negative: {0}")]
    NegativeTopUp(Amount),
    #[error("balance overflow on top up: {0}")]
    BalanceOverflow(Amount),
    #[error("ride counter overflow: {0:?}")]
    RideCountOverflow(TransportMode),
    #[error("insufficient balance: price {price}, balance {balance}")]
    InsufficientBalance { price: Amount, balance: Amount },
}
