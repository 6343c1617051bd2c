//! Connectivity repair with penalty edges.
//!
//! Travel-time consumers cannot handle "no path".  Before any shortest-path
//! search, every ordered pair `(a, b)` of processing nodes with no directed
//! path gets a synthetic arc `a → b` of [`PENALTY_STEPS`].  Pairs are visited
//! in processing-node order and reachability is checked against the graph
//! *as repaired so far*, so a later pair may already be reachable through an
//! earlier penalty arc and then needs none of its own.
//!
//! The base [`RoadNetwork`] is never modified; penalty arcs live in an
//! overlay and [`RepairedNetwork`] implements [`Adjacency`] over both.

use tracing::{debug, warn};

use ep_core::NodeId;

use crate::network::{Adjacency, RoadNetwork};

/// Weight of a synthetic penalty arc, in steps.
///
/// Must exceed any genuine path cost between processing nodes so a penalised
/// pair never looks like a short real path.  It is a finite positive number,
/// distinct from the `-1` unreachable marker in travel-time output.
pub const PENALTY_STEPS: u32 = 1000;

/// How to treat disconnected processing-node pairs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RepairPolicy {
    /// Insert penalty arcs of the given weight.
    Penalty(u32),
    /// Leave the graph alone; unreachable pairs surface as `-1`.
    None,
}

impl Default for RepairPolicy {
    fn default() -> Self {
        RepairPolicy::Penalty(PENALTY_STEPS)
    }
}

/// A road network plus penalty arcs.
pub struct RepairedNetwork<'a> {
    base:    &'a RoadNetwork,
    /// extra[n] = penalty arcs leaving node n.
    extra:   Vec<Vec<(NodeId, u32)>>,
    added:   usize,
}

impl<'a> RepairedNetwork<'a> {
    /// Repair `base` so every ordered pair in `nodes` is connected.
    pub fn new(base: &'a RoadNetwork, nodes: &[NodeId], policy: RepairPolicy) -> Self {
        let mut repaired = Self { base, extra: vec![Vec::new(); base.node_count()], added: 0 };
        let RepairPolicy::Penalty(penalty) = policy else {
            return repaired;
        };

        if base.total_steps() >= penalty as u64 {
            warn!(
                penalty,
                total_steps = base.total_steps(),
                "penalty weight does not dominate every possible real path"
            );
        }

        let n = base.node_count();
        let mut seen = vec![false; n];
        for &a in nodes {
            seen.fill(false);
            repaired.mark_reachable(a, &mut seen);
            for &b in nodes {
                if a == b || seen[b.index()] {
                    continue;
                }
                debug!(from = base.label(a), to = base.label(b), penalty, "penalty arc");
                repaired.extra[a.index()].push((b, penalty));
                repaired.added += 1;
                // Everything reachable from b is now reachable from a.
                repaired.mark_reachable(b, &mut seen);
            }
        }

        if repaired.added > 0 {
            warn!(added = repaired.added, "network is disconnected; inserted penalty arcs");
        }
        repaired
    }

    /// Number of penalty arcs inserted.
    pub fn penalty_count(&self) -> usize {
        self.added
    }

    /// `(from, to, steps)` for every penalty arc.
    pub fn penalty_arcs(&self) -> impl Iterator<Item = (NodeId, NodeId, u32)> + '_ {
        self.extra.iter().enumerate().flat_map(|(from, arcs)| {
            arcs.iter().map(move |&(to, w)| (NodeId(from as u32), to, w))
        })
    }

    /// Depth-first flood from `start`, marking into `seen`.  Nodes already
    /// marked are not expanded again.
    fn mark_reachable(&self, start: NodeId, seen: &mut [bool]) {
        if seen[start.index()] {
            return;
        }
        seen[start.index()] = true;
        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            for (next, _) in self.arcs(node) {
                if !seen[next.index()] {
                    seen[next.index()] = true;
                    stack.push(next);
                }
            }
        }
    }
}

impl Adjacency for RepairedNetwork<'_> {
    fn node_count(&self) -> usize {
        self.base.node_count()
    }

    fn arcs(&self, node: NodeId) -> impl Iterator<Item = (NodeId, u32)> + '_ {
        self.base
            .arcs(node)
            .chain(self.extra[node.index()].iter().copied())
    }
}
