//! Domain error types.
//!
//! These errors represent validation failures and data inconsistencies
//! in the domain layer. They are distinct from loading and query errors.

use super::{AirportCode, InvalidAirportCode, TimeError};

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// An airport code failed to parse
    #[error(transparent)]
    AirportCode(#[from] InvalidAirportCode),

    /// A timestamp failed to parse
    #[error(transparent)]
    Time(#[from] TimeError),

    /// Flight lands before it takes off
    #[error("flight {0} arrives before it departs")]
    ArrivalBeforeDeparture(String),

    /// Price is negative, NaN or infinite
    #[error("flight {flight_no} has invalid {field}: {value}")]
    InvalidPrice {
        flight_no: String,
        field: &'static str,
        value: f64,
    },

    /// Consecutive flights don't share an airport
    #[error("flights do not connect: arrives at {0}, next departs from {1}")]
    FlightsNotConnected(AirportCode, AirportCode),

    /// Itinerary has no flights
    #[error("itinerary must have at least one flight")]
    EmptyItinerary,
}
