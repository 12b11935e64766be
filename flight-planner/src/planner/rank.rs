//! Itinerary ranking for search results.

use crate::domain::Itinerary;

/// Rank itineraries by total price, cheapest first.
///
/// The sort is stable: itineraries with equal prices keep their input order,
/// which for planner results is depth-first discovery order.
pub fn rank_itineraries(mut itineraries: Vec<Itinerary>) -> Vec<Itinerary> {
    itineraries.sort_by(|a, b| a.total_price().total_cmp(&b.total_price()));
    itineraries
}
