//! Itinerary scoring.
//!
//! Turns a raw path of graph edges into a priced, timed [`Itinerary`].

use std::sync::Arc;

use chrono::Duration;

use super::graph::{EdgeId, RouteGraph};
use crate::domain::{AirportCode, DomainError, Flight, Itinerary};

/// Score a raw path found in `graph`.
///
/// # Errors
///
/// Returns `Err` if the path is empty or its flights don't connect.
pub fn score(
    graph: &RouteGraph,
    path: &[EdgeId],
    origin: AirportCode,
    destination: AirportCode,
    bags_count: u32,
) -> Result<Itinerary, DomainError> {
    let flights = path
        .iter()
        .map(|&id| Arc::clone(graph.edge(id).flight()))
        .collect();

    score_flights(flights, origin, destination, bags_count)
}

/// Score an ordered list of flights.
///
/// # Errors
///
/// Returns `Err` if `flights` is empty or consecutive flights don't share
/// an airport.
pub fn score_flights(
    flights: Vec<Arc<Flight>>,
    origin: AirportCode,
    destination: AirportCode,
    bags_count: u32,
) -> Result<Itinerary, DomainError> {
    let bags_allowed = bag_bottleneck(&flights).ok_or(DomainError::EmptyItinerary)?;

    for pair in flights.windows(2) {
        if pair[0].destination != pair[1].origin {
            return Err(DomainError::FlightsNotConnected(
                pair[0].destination.clone(),
                pair[1].origin.clone(),
            ));
        }
    }

    Ok(Itinerary {
        total_price: total_price(&flights, bags_count),
        travel_time: travel_time(&flights),
        flights,
        origin,
        destination,
        bags_count,
        bags_allowed,
    })
}

/// Returns the smallest `bags_allowed` of any flight, or `None` if there are
/// no flights.
///
/// One flight that takes a single bag limits the whole trip to one bag.
pub fn bag_bottleneck(flights: &[Arc<Flight>]) -> Option<u32> {
    flights.iter().map(|f| f.bags_allowed).min()
}

/// Returns the sum of every flight's fare with `bags_count` bags.
pub fn total_price(flights: &[Arc<Flight>], bags_count: u32) -> f64 {
    flights.iter().map(|f| f.price_with_bags(bags_count)).sum()
}

/// Returns time in the air plus time waiting between flights.
///
/// For a connected itinerary this is the span from first departure to last
/// arrival.
pub fn travel_time(flights: &[Arc<Flight>]) -> Duration {
    let airborne: Duration = flights.iter().map(|f| f.duration()).sum();
    let waiting: Duration = flights
        .windows(2)
        .map(|pair| pair[0].layover_until(&pair[1]))
        .sum();

    airborne + waiting
}
