//! Itinerary types.
//!
//! An `Itinerary` is a complete, priced trip from origin to destination,
//! possibly including a return leg. Itineraries are produced by the planner's
//! scorer and are read-only afterwards.

use std::sync::Arc;

use chrono::Duration;

use super::{AirportCode, Flight, format_duration};

/// A priced, timed sequence of flights.
///
/// # Invariants
///
/// - At least one flight
/// - Consecutive flights connect (destination of one = origin of next)
/// - `bags_allowed` is the smallest `bags_allowed` of any flight
/// - `total_price` is the sum of every flight's fare with `bags_count` bags
#[derive(Debug, Clone)]
pub struct Itinerary {
    pub(crate) flights: Vec<Arc<Flight>>,
    pub(crate) origin: AirportCode,
    pub(crate) destination: AirportCode,
    pub(crate) bags_count: u32,
    pub(crate) bags_allowed: u32,
    pub(crate) total_price: f64,
    pub(crate) travel_time: Duration,
}

impl Itinerary {
    /// Returns all flights in travel order.
    pub fn flights(&self) -> &[Arc<Flight>] {
        &self.flights
    }

    /// Returns the number of flights.
    pub fn flight_count(&self) -> usize {
        self.flights.len()
    }

    /// Returns the requested origin airport.
    pub fn origin(&self) -> &AirportCode {
        &self.origin
    }

    /// Returns the requested destination airport.
    ///
    /// For a round trip this is the pivot, not the final landing airport.
    pub fn destination(&self) -> &AirportCode {
        &self.destination
    }

    /// Returns the number of bags the traveller asked for.
    pub fn bags_count(&self) -> u32 {
        self.bags_count
    }

    /// Returns the bag bottleneck: the most bags every flight would accept.
    pub fn bags_allowed(&self) -> u32 {
        self.bags_allowed
    }

    /// Returns the total fare including bags.
    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    /// Returns the time from first departure to last arrival.
    pub fn travel_time(&self) -> Duration {
        self.travel_time
    }

    /// Returns the travel time formatted as `H:MM:SS` (with days if needed).
    pub fn travel_time_display(&self) -> String {
        format_duration(self.travel_time)
    }

    /// Returns the airport where the trip starts.
    pub fn departure_airport(&self) -> &AirportCode {
        self.flights.first().map_or(&self.origin, |f| &f.origin)
    }

    /// Returns the airport where the trip ends.
    ///
    /// Equal to `origin()` for a round trip.
    pub fn arrival_airport(&self) -> &AirportCode {
        self.flights.last().map_or(&self.destination, |f| &f.destination)
    }

    /// Returns every airport visited in order, starting with the departure
    /// airport.
    pub fn airports(&self) -> Vec<AirportCode> {
        let mut airports = Vec::with_capacity(self.flights.len() + 1);
        airports.push(self.departure_airport().clone());
        airports.extend(self.flights.iter().map(|f| f.destination.clone()));
        airports
    }

    /// Returns true if the trip comes back to where it started.
    pub fn is_round_trip(&self) -> bool {
        self.arrival_airport() == self.departure_airport()
    }
}
