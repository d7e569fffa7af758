use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{
    card::{BulkRides, Card, CardError},
    Amount, RideCount, RideCounters, TransportMode,
};

/// Handle to a single card used from several threads. Clones share the card and
/// every operation runs under one lock, so a charge and its counter update are
/// always seen together
#[derive(Debug, Clone)]
pub struct SharedCard {
    card: Arc<Mutex<Card>>,
}

impl From<Card> for SharedCard {
    fn from(card: Card) -> Self {
        SharedCard {
            card: Arc::new(Mutex::new(card)),
        }
    }
}

impl SharedCard {
    fn lock(&self) -> MutexGuard<'_, Card> {
        //every card operation is all-or-nothing, so the state behind a poisoned lock is still valid
        self.card.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn balance(&self) -> Amount {
        self.lock().balance()
    }

    pub fn ride_count(&self, mode: TransportMode) -> RideCount {
        self.lock().ride_count(mode)
    }

    pub fn rides(&self) -> RideCounters {
        self.lock().rides()
    }

    pub fn next_fare(&self, mode: TransportMode) -> Amount {
        self.lock().next_fare(mode)
    }

    pub fn top_up(&self, amount: Amount) -> Result<Amount, CardError> {
        self.lock().top_up(amount)
    }

    pub fn add_ride(&self, mode: TransportMode) -> Result<Amount, CardError> {
        self.lock().add_ride(mode)
    }

    /// the whole batch runs under a single lock
    pub fn add_several(&self, count: RideCount, mode: TransportMode) -> BulkRides {
        self.lock().add_several(count, mode)
    }

    pub fn reset_rides(&self) {
        self.lock().reset_rides()
    }

    /// copy of the current card state
    pub fn snapshot(&self) -> Card {
        self.lock().clone()
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, thread};

    use crate::model::{card::Card, fare::FareSchedule, TransportMode};

    use super::SharedCard;

    #[test]
    fn test_concurrent_rides() {
        let schedule = Arc::new(FareSchedule::new());
        let card: SharedCard = Card::new(schedule, 1000).expect("should succeed").into();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let card = card.clone();
                thread::spawn(move || {
                    let mut paid = 0;
                    for _ in 0..10 {
                        if let Ok(price) = card.add_ride(TransportMode::Ground) {
                            paid += price;
                        }
                    }
                    paid
                })
            })
            .collect();
        let paid: i64 = handles
            .into_iter()
            .map(|h| h.join().expect("thread should finish"))
            .sum();

        //1000 pays for 31 ground rides (10 * 33 + 10 * 32 + 10 * 31 + 30 = 990), every other ride is declined
        assert_eq!(card.ride_count(TransportMode::Ground), 31);
        assert_eq!(paid, 990);
        assert_eq!(card.balance(), 1000 - paid);
    }

    #[test]
    fn test_operations() {
        let schedule = Arc::new(FareSchedule::new());
        let card = SharedCard::from(Card::new(schedule, 0).expect("should succeed"));
        let other = card.clone();

        assert_eq!(other.top_up(100), Ok(100));
        assert_eq!(card.add_ride(TransportMode::Subway), Ok(38));
        assert_eq!(other.balance(), 62);
        assert_eq!(other.next_fare(TransportMode::Subway), 38);

        let bulk = other.add_several(2, TransportMode::Ground);
        assert_eq!((bulk.added, bulk.cost, bulk.completed), (1, 33, false));
        assert_eq!(card.rides().ground, 1);

        card.reset_rides();
        let snapshot = other.snapshot();
        assert_eq!(snapshot.balance(), 29);
        assert_eq!(snapshot.ride_count(TransportMode::Subway), 0);
        assert_eq!(snapshot.ride_count(TransportMode::Ground), 0);
    }
}
