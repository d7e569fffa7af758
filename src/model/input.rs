use std::convert::{TryFrom, TryInto};

use serde::{self, Deserialize};
use thiserror::Error;

use super::{Amount, RideCount, TransportMode};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    TopUp,
    Ride,
    Rides,
    Reset,
    Commercial,
}

#[derive(Debug, Deserialize)]
pub struct OpRow {
    #[serde(rename = "type")]
    row_type: OperationType,
    #[serde(rename = "mode")]
    mode: Option<TransportMode>,
    #[serde(rename = "amount")]
    amount: Option<Amount>,
}

/// A single operation on the card, built from a validated `OpRow`
#[derive(Debug, PartialEq, Eq)]
pub enum CardOp {
    TopUp(Amount),
    Ride(TransportMode),
    Rides(RideCount, TransportMode),
    Reset,
    SetCommercialPrice(Amount),
}

#[derive(Debug, Error, Eq, PartialEq)]
pub enum ConversionError {
    #[error("{0:?} without amount")]
    MissingAmount(OperationType),
    #[error("{0:?} without transport mode")]
    MissingMode(OperationType),
    #[error("{0:?} should not contain amount")]
    UnexpectedAmount(OperationType),
    #[error("{0:?} should not contain transport mode")]
    UnexpectedMode(OperationType),
    #[error("invalid ride count: {0}")]
    InvalidRideCount(Amount),
}

impl TryFrom<OpRow> for CardOp {
    type Error = ConversionError;

    fn try_from(value: OpRow) -> Result<Self, Self::Error> {
        let op = match (value.row_type, value.mode, value.amount) {
            (OperationType::TopUp, None, Some(amount)) => CardOp::TopUp(amount),
            (OperationType::Commercial, None, Some(amount)) => CardOp::SetCommercialPrice(amount),
            (OperationType::Ride, Some(mode), None) => CardOp::Ride(mode),
            (OperationType::Rides, Some(mode), Some(count)) => {
                let count: RideCount = count
                    .try_into()
                    .map_err(|_| ConversionError::InvalidRideCount(count))?;
                CardOp::Rides(count, mode)
            }
            (OperationType::Reset, None, None) => CardOp::Reset,

            (t @ OperationType::TopUp, Some(_), _)
            | (t @ OperationType::Commercial, Some(_), _)
            | (t @ OperationType::Reset, Some(_), _) => {
                return Err(ConversionError::UnexpectedMode(t))
            }
            (t @ OperationType::Ride, _, Some(_)) | (t @ OperationType::Reset, None, Some(_)) => {
                return Err(ConversionError::UnexpectedAmount(t))
            }
            (t @ OperationType::TopUp, None, None)
            | (t @ OperationType::Commercial, None, None)
            | (t @ OperationType::Rides, Some(_), None) => {
                return Err(ConversionError::MissingAmount(t))
            }
            (t @ OperationType::Ride, None, None) | (t @ OperationType::Rides, None, _) => {
                return Err(ConversionError::MissingMode(t))
            }
        };
        Ok(op)
    }
}

#[cfg(test)]
mod tests {
    use std::convert::TryInto;

    use crate::model::{input::ConversionError, TransportMode};

    use super::{CardOp, OpRow, OperationType};

    fn row(row_type: OperationType, mode: Option<TransportMode>, amount: Option<i64>) -> OpRow {
        OpRow {
            row_type,
            mode,
            amount,
        }
    }

    #[test]
    fn test_conversion() {
        let res: Result<CardOp, ConversionError> =
            row(OperationType::TopUp, None, Some(100)).try_into();
        assert_eq!(res, Ok(CardOp::TopUp(100)));

        let res: Result<CardOp, ConversionError> =
            row(OperationType::Ride, Some(TransportMode::Subway), None).try_into();
        assert_eq!(res, Ok(CardOp::Ride(TransportMode::Subway)));

        let res: Result<CardOp, ConversionError> =
            row(OperationType::Rides, Some(TransportMode::Ground), Some(12)).try_into();
        assert_eq!(res, Ok(CardOp::Rides(12, TransportMode::Ground)));

        let res: Result<CardOp, ConversionError> = row(OperationType::Reset, None, None).try_into();
        assert_eq!(res, Ok(CardOp::Reset));

        let res: Result<CardOp, ConversionError> =
            row(OperationType::Commercial, None, Some(40)).try_into();
        assert_eq!(res, Ok(CardOp::SetCommercialPrice(40)));

        //negative amounts pass through, the card rejects them
        let res: Result<CardOp, ConversionError> =
            row(OperationType::TopUp, None, Some(-5)).try_into();
        assert_eq!(res, Ok(CardOp::TopUp(-5)));
    }

    #[test]
    fn test_conversion_errors() {
        let res: Result<CardOp, ConversionError> = row(OperationType::TopUp, None, None).try_into();
        assert_eq!(res, Err(ConversionError::MissingAmount(OperationType::TopUp)));

        let res: Result<CardOp, ConversionError> =
            row(OperationType::Ride, Some(TransportMode::Ground), Some(3)).try_into();
        assert_eq!(res, Err(ConversionError::UnexpectedAmount(OperationType::Ride)));

        let res: Result<CardOp, ConversionError> =
            row(OperationType::Rides, None, Some(3)).try_into();
        assert_eq!(res, Err(ConversionError::MissingMode(OperationType::Rides)));

        let res: Result<CardOp, ConversionError> =
            row(OperationType::Rides, Some(TransportMode::Ground), Some(-3)).try_into();
        assert_eq!(res, Err(ConversionError::InvalidRideCount(-3)));

        let res: Result<CardOp, ConversionError> =
            row(OperationType::Reset, Some(TransportMode::Ground), None).try_into();
        assert_eq!(res, Err(ConversionError::UnexpectedMode(OperationType::Reset)));

        let res: Result<CardOp, ConversionError> =
            row(OperationType::Commercial, Some(TransportMode::Commercial), Some(1)).try_into();
        assert_eq!(
            res,
            Err(ConversionError::UnexpectedMode(OperationType::Commercial))
        );
    }
}
