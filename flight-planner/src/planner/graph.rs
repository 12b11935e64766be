//! Route graph: a directed multigraph of airports and flights.
//!
//! Every distinct airport code becomes a node. Every flight becomes an edge
//! from its origin node to its destination node. Parallel edges are kept, so
//! two flights between the same pair of airports are two edges.
//!
//! # Departure order
//!
//! The path search stops scanning a node's edges as soon as one departs too
//! long after the traveller lands, which is only correct if each node's
//! edges are sorted by departure time. `build` keeps edges in input order and
//! does not sort them; callers hand it departure-sorted flights (the loader
//! does this) and can check the result with [`RouteGraph::is_departure_sorted`].

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{AirportCode, Flight};

/// Index of a node in a [`RouteGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// Index of an edge in a [`RouteGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub usize);

/// An airport and the flights leaving it.
#[derive(Debug, Clone)]
pub struct Node {
    code: AirportCode,
    /// Outgoing edges in insertion order.
    edges: Vec<EdgeId>,
}

impl Node {
    /// Returns the airport code.
    pub fn code(&self) -> &AirportCode {
        &self.code
    }

    /// Returns outgoing edges in insertion order.
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }
}

/// A single flight between two nodes.
#[derive(Debug, Clone)]
pub struct Edge {
    flight: Arc<Flight>,
    source: NodeId,
    target: NodeId,
}

impl Edge {
    /// Returns the flight this edge represents.
    pub fn flight(&self) -> &Arc<Flight> {
        &self.flight
    }

    /// Returns the node the flight departs from.
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Returns the node the flight arrives at.
    pub fn target(&self) -> NodeId {
        self.target
    }
}

/// Directed multigraph of airports (nodes) and flights (edges).
///
/// The graph is immutable once built and holds no per-query state, so one
/// graph can serve any number of searches.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    index: HashMap<AirportCode, NodeId>,
}

impl RouteGraph {
    /// Build a graph from flights, in input order.
    ///
    /// Nodes are created the first time an airport appears, as origin or
    /// destination. Each flight is appended to its origin's edge list. The
    /// input is neither reordered nor validated.
    pub fn build(flights: &[Flight]) -> Self {
        let mut graph = Self::default();

        for flight in flights {
            let source = graph.intern(&flight.origin);
            let target = graph.intern(&flight.destination);

            let edge_id = EdgeId(graph.edges.len());
            graph.edges.push(Edge {
                flight: Arc::new(flight.clone()),
                source,
                target,
            });
            graph.nodes[source.0].edges.push(edge_id);
        }

        graph
    }

    /// Returns the node for `code`, creating it if absent.
    fn intern(&mut self, code: &AirportCode) -> NodeId {
        if let Some(&id) = self.index.get(code) {
            return id;
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            code: code.clone(),
            edges: Vec::new(),
        });
        self.index.insert(code.clone(), id);
        id
    }

    /// Look up the node for an airport.
    ///
    /// Returns `None` if no flight departs from or arrives at `code`.
    pub fn node_id(&self, code: &AirportCode) -> Option<NodeId> {
        self.index.get(code).copied()
    }

    /// Returns the node with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this graph.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Returns the edge with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this graph.
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.0]
    }

    /// Returns all nodes in creation order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns the number of airports.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of flights.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if every node's edges are sorted by departure ascending.
    pub fn is_departure_sorted(&self) -> bool {
        self.first_unsorted_airport().is_none()
    }

    /// Returns the first airport whose outgoing flights are out of departure
    /// order, if any.
    pub fn first_unsorted_airport(&self) -> Option<AirportCode> {
        self.nodes
            .iter()
            .find(|node| {
                node.edges.windows(2).any(|pair| {
                    self.edge(pair[0]).flight.departure > self.edge(pair[1]).flight.departure
                })
            })
            .map(|node| node.code.clone())
    }
}
