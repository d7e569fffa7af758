//! Prepaid transit fare card: balance and per-mode ride counters, priced by a shared
//! [`FareSchedule`](model::fare::FareSchedule) with volume discount tiers.
//!
//! A ride is charged only if the balance covers its fare, otherwise the card is left untouched.

#[macro_use]
extern crate log;

pub mod io;
pub mod model;
