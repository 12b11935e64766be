//! Itinerary planner using depth-first path enumeration.
//!
//! This module implements the core planning algorithm that answers:
//! "Which combinations of flights get me from A to B (and back), with my
//! bags, and with sensible layovers?"
//!
//! Flights are loaded into a [`RouteGraph`], every feasible path is
//! enumerated depth-first, and each path is scored into an
//! [`Itinerary`](crate::domain::Itinerary) and ranked by price.

mod config;
pub mod dfs;
mod graph;
mod rank;
mod score;
mod search;

pub use config::SearchConfig;
pub use dfs::{PathQuery, PathSearchResult, RawPath};
pub use graph::{Edge, EdgeId, Node, NodeId, RouteGraph};
pub use rank::rank_itineraries;
pub use score::{bag_bottleneck, score, score_flights, total_price, travel_time};
pub use search::{PlanError, Planner, SearchRequest, SearchResult, solve};
