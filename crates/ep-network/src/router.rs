//! Routing trait and default Dijkstra implementation.
//!
//! # Cost units
//!
//! All costs are whole **steps** (`u32`).  Edge weights are already rounded
//! up per edge, so a path cost is the sum of its edges' step counts.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ep_core::NodeId;

use crate::network::Adjacency;
use crate::{NetworkError, NetworkResult};

// ── Route ─────────────────────────────────────────────────────────────────────

/// Result of a point-to-point query.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Nodes visited in order, source and destination included.
    pub nodes: Vec<NodeId>,
    pub total_steps: u32,
}

impl Route {
    /// `true` if the source and destination are the same node.
    pub fn is_trivial(&self) -> bool {
        self.nodes.len() <= 1
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.
///
/// Implementations must be `Send + Sync` so source rows can be computed on
/// Rayon worker threads under the `parallel` feature.
pub trait Router: Send + Sync {
    /// Shortest route from `from` to `to`.  `from == to` is an empty route,
    /// not an error.
    fn route<G: Adjacency>(&self, graph: &G, from: NodeId, to: NodeId) -> NetworkResult<Route>;

    /// Cost to every node from `source`, `None` where unreachable.
    fn shortest_steps<G: Adjacency>(&self, graph: &G, source: NodeId) -> Vec<Option<u32>>;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Binary-heap Dijkstra.  All weights are non-negative by construction.
#[derive(Copy, Clone, Debug, Default)]
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn route<G: Adjacency>(&self, graph: &G, from: NodeId, to: NodeId) -> NetworkResult<Route> {
        if from == to {
            return Ok(Route { nodes: vec![from], total_steps: 0 });
        }
        let search = dijkstra(graph, from, Some(to));
        let cost = search.dist[to.index()];
        if cost == u32::MAX {
            return Err(NetworkError::NoRoute { from, to });
        }
        Ok(Route { nodes: search.path_to(to), total_steps: cost })
    }

    fn shortest_steps<G: Adjacency>(&self, graph: &G, source: NodeId) -> Vec<Option<u32>> {
        dijkstra(graph, source, None)
            .dist
            .into_iter()
            .map(|d| (d != u32::MAX).then_some(d))
            .collect()
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

struct Search {
    /// dist[v] = best known cost to v; `u32::MAX` for unreached nodes.
    dist: Vec<u32>,
    /// prev[v] = predecessor on the best path; `NodeId::INVALID` if none.
    prev: Vec<NodeId>,
}

impl Search {
    fn path_to(&self, to: NodeId) -> Vec<NodeId> {
        let mut nodes = vec![to];
        let mut cur = to;
        while self.prev[cur.index()] != NodeId::INVALID {
            cur = self.prev[cur.index()];
            nodes.push(cur);
        }
        nodes.reverse();
        nodes
    }
}

/// Single-source search.  Stops early once `target` is settled.
fn dijkstra<G: Adjacency>(graph: &G, source: NodeId, target: Option<NodeId>) -> Search {
    let n = graph.node_count();
    let mut dist = vec![u32::MAX; n];
    let mut prev = vec![NodeId::INVALID; n];

    dist[source.index()] = 0;

    // Min-heap: (cost, node). Secondary key NodeId ensures deterministic tie-breaking.
    let mut heap: BinaryHeap<Reverse<(u32, NodeId)>> = BinaryHeap::new();
    heap.push(Reverse((0, source)));

    while let Some(Reverse((cost, node))) = heap.pop() {
        // Skip stale heap entries.
        if cost > dist[node.index()] {
            continue;
        }
        if Some(node) == target {
            break;
        }

        for (neighbor, steps) in graph.arcs(node) {
            let new_cost = cost.saturating_add(steps);
            if new_cost < dist[neighbor.index()] {
                dist[neighbor.index()] = new_cost;
                prev[neighbor.index()] = node;
                heap.push(Reverse((new_cost, neighbor)));
            }
        }
    }

    Search { dist, prev }
}
