use super::{Amount, RideCount};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Record {
    #[serde(rename = "balance")]
    pub balance: Amount,
    #[serde(rename = "ground")]
    pub ground_rides: RideCount,
    #[serde(rename = "subway")]
    pub subway_rides: RideCount,
    #[serde(rename = "commercial")]
    pub commercial_rides: RideCount,
}

#[derive(Debug, Serialize)]
pub struct PriceRecord {
    #[serde(rename = "mode")]
    pub mode: &'static str,
    #[serde(rename = "tier")]
    pub tier: &'static str,
    #[serde(rename = "price")]
    pub price: Amount,
}
