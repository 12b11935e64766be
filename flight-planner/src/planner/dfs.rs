//! Depth-first enumeration of constrained flight paths.
//!
//! Finds every simple path between two airports in a [`RouteGraph`] that
//! respects the bag count and the layover window. Unlike a shortest-path
//! search nothing is discarded for being worse than another path: all
//! feasible paths are returned.
//!
//! The search relies on each node's edges being sorted by departure time:
//! once a departure is further from the previous arrival than the maximum
//! layover, every later departure is too, and the scan of that node stops.
//! On unsorted input the search still terminates but silently misses paths.

use tracing::{debug, trace};

use super::config::SearchConfig;
use super::graph::{EdgeId, NodeId, RouteGraph};
use crate::domain::Flight;

/// A path through the graph as an ordered list of edges.
pub type RawPath = Vec<EdgeId>;

/// What to search for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathQuery {
    /// Node the trip starts from.
    pub origin: NodeId,
    /// Node the trip goes to (and turns around at, for a return trip).
    pub destination: NodeId,
    /// Every flight used must allow at least this many bags.
    pub bags_count: u32,
    /// Also fly back from `destination` to `origin`.
    pub return_trip: bool,
}

/// Paths found by [`search`].
#[derive(Debug, Clone, Default)]
pub struct PathSearchResult {
    /// Paths in discovery order.
    pub paths: Vec<RawPath>,
    /// Number of nodes entered across all legs.
    pub nodes_explored: usize,
}

/// Enumerate all feasible paths for `query`.
///
/// A one-way query runs one leg search from origin to destination. A return
/// query runs a second, independent leg search from destination back to
/// origin and pairs every outbound path with every inbound path whose first
/// flight leaves after the outbound path lands. The wait at the turnaround
/// airport is not bounded by the layover window.
///
/// Results are in depth-first discovery order (outbound-major for return
/// trips), following each node's edge order.
pub fn search(graph: &RouteGraph, config: &SearchConfig, query: &PathQuery) -> PathSearchResult {
    let outbound = find_leg_paths(graph, config, query.origin, query.destination, query.bags_count);

    if !query.return_trip {
        return outbound;
    }

    let inbound = find_leg_paths(graph, config, query.destination, query.origin, query.bags_count);
    let paths = join_round_trips(graph, &outbound.paths, &inbound.paths);

    debug!(
        outbound = outbound.paths.len(),
        inbound = inbound.paths.len(),
        round_trips = paths.len(),
        "Joined return legs"
    );

    PathSearchResult {
        paths,
        nodes_explored: outbound.nodes_explored + inbound.nodes_explored,
    }
}

/// Enumerate all feasible paths of a single directed leg.
///
/// No airport appears twice in a returned path. The first flight of the leg
/// is only checked for bag capacity; every later flight must also depart
/// within the layover window after the previous one lands.
pub fn find_leg_paths(
    graph: &RouteGraph,
    config: &SearchConfig,
    from: NodeId,
    to: NodeId,
    bags_count: u32,
) -> PathSearchResult {
    let mut leg = LegSearch {
        graph,
        target: to,
        bags_count,
        config,
        max_layover: config.max_layover(),
        visited: vec![false; graph.node_count()],
        path: Vec::new(),
        result: PathSearchResult::default(),
    };

    leg.visited[from.0] = true;
    leg.visit(from);

    debug!(
        from = %graph.node(from).code(),
        to = %graph.node(to).code(),
        paths = leg.result.paths.len(),
        nodes_explored = leg.result.nodes_explored,
        "Leg search complete"
    );

    leg.result
}

/// Pair outbound and inbound legs into round trips.
///
/// An inbound leg can follow an outbound leg only if it departs strictly
/// after the outbound leg arrives.
pub fn join_round_trips(
    graph: &RouteGraph,
    outbound: &[RawPath],
    inbound: &[RawPath],
) -> Vec<RawPath> {
    let mut joined = Vec::new();

    for out in outbound {
        let Some(landed) = out.last().map(|&id| graph.edge(id).flight().arrival) else {
            continue;
        };

        for back in inbound {
            let Some(departs) = back.first().map(|&id| graph.edge(id).flight().departure) else {
                continue;
            };
            if departs <= landed {
                continue;
            }

            let mut path = Vec::with_capacity(out.len() + back.len());
            path.extend_from_slice(out);
            path.extend_from_slice(back);
            joined.push(path);
        }
    }

    joined
}

/// Mutable state of one leg search.
///
/// `visited` and `path` change only in matched push/pop pairs around each
/// recursive call, so on return from `visit` they are as they were on entry.
struct LegSearch<'g> {
    graph: &'g RouteGraph,
    target: NodeId,
    bags_count: u32,
    config: &'g SearchConfig,
    max_layover: chrono::Duration,
    visited: Vec<bool>,
    path: RawPath,
    result: PathSearchResult,
}

impl LegSearch<'_> {
    fn visit(&mut self, node: NodeId) {
        self.result.nodes_explored += 1;

        if node == self.target {
            self.result.paths.push(self.path.clone());
            return;
        }

        let graph = self.graph;
        let previous: Option<&Flight> = self
            .path
            .last()
            .map(|&id| graph.edge(id).flight().as_ref());

        trace!(
            airport = %graph.node(node).code(),
            depth = self.path.len(),
            "DFS exploring airport"
        );

        for &edge_id in graph.node(node).edges() {
            let edge = graph.edge(edge_id);
            let flight = edge.flight();

            if let Some(previous) = previous {
                let layover = previous.layover_until(flight);
                if layover > self.max_layover {
                    // Later edges depart later still.
                    break;
                }
                if !self.config.accepts_layover(layover) {
                    continue;
                }
            }

            if !flight.allows_bags(self.bags_count) {
                continue;
            }

            let next = edge.target();
            if self.visited[next.0] {
                continue;
            }

            self.visited[next.0] = true;
            self.path.push(edge_id);
            self.visit(next);
            self.path.pop();
            self.visited[next.0] = false;
        }
    }
}
