//! Flight records.

use chrono::Duration;

use super::{AirportCode, DomainError, FlightTime};

/// One scheduled flight between two airports.
///
/// Fields mirror the schedule columns one-to-one. A `Flight` is immutable
/// once loaded; the route graph shares it behind an `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    /// Carrier flight number (e.g., "PV404")
    pub flight_no: String,
    /// Departure airport
    pub origin: AirportCode,
    /// Arrival airport
    pub destination: AirportCode,
    /// Scheduled departure
    pub departure: FlightTime,
    /// Scheduled arrival
    pub arrival: FlightTime,
    /// Fare without luggage
    pub base_price: f64,
    /// Price per checked bag
    pub bag_price: f64,
    /// Maximum number of checked bags on this flight
    pub bags_allowed: u32,
}

impl Flight {
    /// Check the invariants a schedule row must satisfy beyond parsing.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the flight arrives before it departs, or if either
    /// price is negative or not finite.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.arrival < self.departure {
            return Err(DomainError::ArrivalBeforeDeparture(self.flight_no.clone()));
        }

        for (field, value) in [("base_price", self.base_price), ("bag_price", self.bag_price)] {
            if !value.is_finite() || value < 0.0 {
                return Err(DomainError::InvalidPrice {
                    flight_no: self.flight_no.clone(),
                    field,
                    value,
                });
            }
        }

        Ok(())
    }

    /// Returns the time spent in the air.
    pub fn duration(&self) -> Duration {
        self.arrival.signed_duration_since(self.departure)
    }

    /// Returns the wait between landing from this flight and boarding `next`.
    ///
    /// Negative if `next` departs before this flight arrives.
    pub fn layover_until(&self, next: &Flight) -> Duration {
        next.departure.signed_duration_since(self.arrival)
    }

    /// Returns true if this flight accepts `bags` checked bags.
    pub fn allows_bags(&self, bags: u32) -> bool {
        self.bags_allowed >= bags
    }

    /// Returns the fare for one passenger travelling with `bags` bags.
    pub fn price_with_bags(&self, bags: u32) -> f64 {
        self.base_price + self.bag_price * f64::from(bags)
    }
}
