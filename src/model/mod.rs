use serde::Deserialize;

pub mod card;
pub mod fare;
pub mod input;
pub mod output;
pub mod shared;

/// Money in currency minor units. Signed so negative inputs can be rejected.
pub type Amount = i64;
pub type RideCount = u32;

/// Transport types a card can pay for. The set is closed, counters and the
/// tier table have one slot per variant
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Ground,
    Subway,
    Commercial,
}

impl TransportMode {
    pub const ALL: [TransportMode; 3] = [
        TransportMode::Ground,
        TransportMode::Subway,
        TransportMode::Commercial,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TransportMode::Ground => "ground",
            TransportMode::Subway => "subway",
            TransportMode::Commercial => "commercial",
        }
    }
}

/// Rides taken since the last reset, one counter per transport mode
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RideCounters {
    pub ground: RideCount,
    pub subway: RideCount,
    pub commercial: RideCount,
}

impl RideCounters {
    pub fn get(&self, mode: TransportMode) -> RideCount {
        match mode {
            TransportMode::Ground => self.ground,
            TransportMode::Subway => self.subway,
            TransportMode::Commercial => self.commercial,
        }
    }

    pub(crate) fn set(&mut self, mode: TransportMode, count: RideCount) {
        match mode {
            TransportMode::Ground => self.ground = count,
            TransportMode::Subway => self.subway = count,
            TransportMode::Commercial => self.commercial = count,
        }
    }
}
