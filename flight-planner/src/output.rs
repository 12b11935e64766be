//! JSON output for search results.
//!
//! Field names follow the schedule file's columns so results can be read
//! back next to the input data.

use serde::Serialize;

use crate::domain::{Flight, Itinerary};

/// A flight in a result.
#[derive(Debug, Serialize)]
pub struct FlightResult {
    pub flight_no: String,
    pub origin: String,
    pub destination: String,

    /// Departure in `YYYY-MM-DDTHH:MM:SS` format
    pub departure: String,

    /// Arrival in `YYYY-MM-DDTHH:MM:SS` format
    pub arrival: String,

    pub base_price: f64,
    pub bag_price: f64,
    pub bags_allowed: u32,
}

/// An itinerary in a result.
#[derive(Debug, Serialize)]
pub struct ItineraryResult {
    /// Flights in travel order
    pub flights: Vec<FlightResult>,

    /// Most bags every flight accepts
    pub bags_allowed: u32,

    /// Bags the traveller asked for
    pub bags_count: u32,

    pub destination: String,
    pub origin: String,

    /// Fare for all flights including bags
    pub total_price: f64,

    /// First departure to last arrival, e.g. `"5:00:00"` or `"1 day, 2:30:00"`
    pub travel_time: String,
}

impl From<&Flight> for FlightResult {
    fn from(flight: &Flight) -> Self {
        Self {
            flight_no: flight.flight_no.clone(),
            origin: flight.origin.to_string(),
            destination: flight.destination.to_string(),
            departure: flight.departure.to_string(),
            arrival: flight.arrival.to_string(),
            base_price: flight.base_price,
            bag_price: flight.bag_price,
            bags_allowed: flight.bags_allowed,
        }
    }
}

impl From<&Itinerary> for ItineraryResult {
    fn from(itinerary: &Itinerary) -> Self {
        Self {
            flights: itinerary
                .flights()
                .iter()
                .map(|f| FlightResult::from(f.as_ref()))
                .collect(),
            bags_allowed: itinerary.bags_allowed(),
            bags_count: itinerary.bags_count(),
            destination: itinerary.destination().to_string(),
            origin: itinerary.origin().to_string(),
            total_price: itinerary.total_price(),
            travel_time: itinerary.travel_time_display(),
        }
    }
}

/// Render itineraries as a JSON array, keeping their order.
pub fn to_json(itineraries: &[Itinerary], pretty: bool) -> Result<String, serde_json::Error> {
    let results: Vec<ItineraryResult> = itineraries.iter().map(ItineraryResult::from).collect();
    if pretty {
        serde_json::to_string_pretty(&results)
    } else {
        serde_json::to_string(&results)
    }
}
