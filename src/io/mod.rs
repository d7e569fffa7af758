use std::convert::TryInto;

use csv::{ReaderBuilder, Trim, WriterBuilder};
use thiserror::Error;

use crate::model::{
    card::{Card, CardError},
    fare::{FareSchedule, PriceError},
    input::{CardOp, OpRow},
    output::{PriceRecord, Record},
    TransportMode,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OpError {
    #[error(transparent)]
    Card(#[from] CardError),
    #[error(transparent)]
    Price(#[from] PriceError),
}

/// apply a single operation to the card
pub fn apply(card: &mut Card, op: CardOp) -> Result<(), OpError> {
    match op {
        CardOp::TopUp(amount) => {
            card.top_up(amount)?;
        }
        CardOp::Ride(mode) => {
            card.add_ride(mode)?;
        }
        CardOp::Rides(count, mode) => {
            let bulk = card.add_several(count, mode);
            if !bulk.completed {
                warn!(
                    "only {} of {} {:?} rides added, cost {}",
                    bulk.added, count, mode, bulk.cost
                );
            }
        }
        CardOp::Reset => card.reset_rides(),
        CardOp::SetCommercialPrice(price) => card.schedule().set_commercial_price(price)?,
    }
    Ok(())
}

pub fn read_csv_data<R>(reader: R, card: &mut Card)
where
    R: std::io::Read,
{
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);
    for result in reader.deserialize() {
        let row: OpRow = match result {
            Ok(row) => row,
            Err(e) => {
                warn!("can't read row: {:?}", e);
                continue;
            }
        };

        debug!("{:?}", row);
        let op: CardOp = match row.try_into() {
            Ok(op) => op,
            Err(e) => {
                warn!("can't create valid operation: {:?}", e);
                continue;
            }
        };

        if let Err(e) = apply(card, op) {
            warn!("can't process operation, reason({})", e);
            continue;
        }
    }
}

pub fn print_results(writer: impl std::io::Write, card: &Card) {
    let mut writer = WriterBuilder::new().from_writer(writer);
    let rides = card.rides();
    let record = Record {
        balance: card.balance(),
        ground_rides: rides.ground,
        subway_rides: rides.subway,
        commercial_rides: rides.commercial,
    };
    if let Err(e) = writer.serialize(record) {
        warn!("can't serialize card: {:?}", e);
    }
    if let Err(e) = writer.flush() {
        warn!("can't write results: {:?}", e);
    }
}

/// monthly price table of every transport mode
pub fn print_prices(writer: impl std::io::Write, schedule: &FareSchedule) {
    let mut writer = WriterBuilder::new().from_writer(writer);
    for mode in TransportMode::ALL.iter() {
        for tier in schedule.monthly_prices(*mode).iter() {
            let record = PriceRecord {
                mode: mode.name(),
                tier: tier.label,
                price: tier.price,
            };
            if let Err(e) = writer.serialize(record) {
                warn!("can't serialize element: {:?}", e);
            }
        }
    }
    if let Err(e) = writer.flush() {
        warn!("can't write prices: {:?}", e);
    }
}
