//! Itinerary search: the query entry point.
//!
//! Checks a request against the route graph, enumerates feasible paths,
//! scores them and ranks the result by price.

use tracing::debug;

use crate::domain::{AirportCode, Flight, Itinerary};

use super::config::SearchConfig;
use super::dfs::{self, PathQuery};
use super::graph::{NodeId, RouteGraph};
use super::rank::rank_itineraries;
use super::score::score;

/// Error from itinerary search.
///
/// All variants are detected before any path is explored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// No flight departs from or arrives at the origin
    #[error("origin airport {0} was not found in the flight data")]
    OriginNotFound(AirportCode),

    /// No flight departs from or arrives at the destination
    #[error("destination airport {0} was not found in the flight data")]
    DestinationNotFound(AirportCode),

    /// Origin and destination are the same airport
    #[error("origin and destination are both {0}")]
    SameOriginAndDestination(AirportCode),

    /// Flights leaving an airport are not in departure order
    #[error("flights departing {0} are not sorted by departure time")]
    UnsortedDepartures(AirportCode),
}

/// Request for itinerary search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Airport the traveller starts from.
    pub origin: AirportCode,

    /// Airport the traveller wants to reach.
    pub destination: AirportCode,

    /// Number of checked bags the traveller brings.
    pub bags_count: u32,

    /// Whether to include a return leg back to the origin.
    pub return_trip: bool,
}

impl SearchRequest {
    /// Create a new search request.
    pub fn new(
        origin: AirportCode,
        destination: AirportCode,
        bags_count: u32,
        return_trip: bool,
    ) -> Self {
        Self {
            origin,
            destination,
            bags_count,
            return_trip,
        }
    }

    /// Look up the request's airports in `graph`.
    ///
    /// Origin is checked before destination, so a request where both are
    /// missing reports the origin.
    ///
    /// # Errors
    ///
    /// Returns `Err` if either airport has no flights, or both are the same
    /// airport.
    pub fn resolve(&self, graph: &RouteGraph) -> Result<(NodeId, NodeId), PlanError> {
        let origin = graph
            .node_id(&self.origin)
            .ok_or_else(|| PlanError::OriginNotFound(self.origin.clone()))?;
        let destination = graph
            .node_id(&self.destination)
            .ok_or_else(|| PlanError::DestinationNotFound(self.destination.clone()))?;

        if origin == destination {
            return Err(PlanError::SameOriginAndDestination(self.origin.clone()));
        }

        Ok((origin, destination))
    }
}

/// Result of itinerary search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Found itineraries, cheapest first.
    pub itineraries: Vec<Itinerary>,

    /// Number of airports entered during search.
    pub nodes_explored: usize,
}

/// Itinerary planner over a prebuilt route graph.
///
/// The planner borrows the graph and keeps no state between calls, so the
/// same planner can answer any number of requests.
pub struct Planner<'a> {
    graph: &'a RouteGraph,
    config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(graph: &'a RouteGraph, config: &'a SearchConfig) -> Self {
        Self { graph, config }
    }

    /// Search for all itineraries matching `request`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if either airport is unknown, they are the same airport,
    /// or some airport's departures are out of order (which would make the
    /// layover pruning drop valid itineraries).
    pub fn search(&self, request: &SearchRequest) -> Result<SearchResult, PlanError> {
        let (origin, destination) = request.resolve(self.graph)?;

        if let Some(airport) = self.graph.first_unsorted_airport() {
            return Err(PlanError::UnsortedDepartures(airport));
        }

        let query = PathQuery {
            origin,
            destination,
            bags_count: request.bags_count,
            return_trip: request.return_trip,
        };
        let found = dfs::search(self.graph, self.config, &query);

        let itineraries: Vec<Itinerary> = found
            .paths
            .iter()
            .filter_map(|path| {
                match score(
                    self.graph,
                    path,
                    request.origin.clone(),
                    request.destination.clone(),
                    request.bags_count,
                ) {
                    Ok(itinerary) => Some(itinerary),
                    Err(e) => {
                        debug!(error = %e, "Discarding unscorable path");
                        None
                    }
                }
            })
            .collect();

        debug!(
            origin = %request.origin,
            destination = %request.destination,
            bags = request.bags_count,
            return_trip = request.return_trip,
            itineraries = itineraries.len(),
            nodes_explored = found.nodes_explored,
            "Search complete"
        );

        Ok(SearchResult {
            itineraries: rank_itineraries(itineraries),
            nodes_explored: found.nodes_explored,
        })
    }
}

/// Build a graph from `flights` and answer one request.
///
/// `flights` must be sorted by departure time, as the loader returns them.
///
/// # Examples
///
/// ```
/// use flight_planner::domain::{AirportCode, Flight, FlightTime};
/// use flight_planner::planner::{SearchConfig, SearchRequest, solve};
///
/// let code = |s: &str| AirportCode::parse(s).unwrap();
/// let time = |s: &str| FlightTime::parse(s).unwrap();
/// let flights = vec![Flight {
///     flight_no: "PV404".into(),
///     origin: code("DHE"),
///     destination: code("NIZ"),
///     departure: time("2021-09-01T10:00:00"),
///     arrival: time("2021-09-01T12:00:00"),
///     base_price: 100.0,
///     bag_price: 10.0,
///     bags_allowed: 2,
/// }];
///
/// let request = SearchRequest::new(code("DHE"), code("NIZ"), 1, false);
/// let itineraries = solve(&flights, &request, &SearchConfig::default()).unwrap();
/// assert_eq!(itineraries.len(), 1);
/// assert_eq!(itineraries[0].total_price(), 110.0);
/// ```
pub fn solve(
    flights: &[Flight],
    request: &SearchRequest,
    config: &SearchConfig,
) -> Result<Vec<Itinerary>, PlanError> {
    let graph = RouteGraph::build(flights);
    Planner::new(&graph, config)
        .search(request)
        .map(|result| result.itineraries)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
