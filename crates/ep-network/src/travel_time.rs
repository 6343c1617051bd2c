//! Travel-time tensors between processing nodes.
//!
//! For a designated subset `Vp` of network nodes and a list of resource
//! categories, [`TravelTimeBuilder::compute`] produces
//!
//! ```text
//! tau[r][i][j]  = shortest steps from Vp[i] to Vp[j]   (or -1)
//! tau_max[r][i] = max_j tau[r][i][j]
//! ```
//!
//! after repairing the graph (see [`crate::repair`]).  Every resource
//! currently shares the same road graph, so the per-source rows are computed
//! once and copied into each resource slice.

use tracing::info;

use ep_core::{NodeId, ResourceId};

use crate::repair::{RepairPolicy, RepairedNetwork};
use crate::{NetworkResult, RoadNetwork, Router};

/// Marker for a pair with no path in the repaired graph.
pub const UNREACHABLE: i64 = -1;

// ── TravelTimes ───────────────────────────────────────────────────────────────

/// Immutable `tau` / `tau_max` result.
#[derive(Clone, Debug, PartialEq)]
pub struct TravelTimes {
    /// Resource labels, first axis.
    pub resources: Vec<ResourceId>,
    /// Processing-node labels, second and third axes.
    pub nodes: Vec<u32>,
    /// Penalty arcs inserted by the repair step.
    pub penalty_arcs: usize,
    tau:     Vec<i64>,
    tau_max: Vec<i64>,
}

impl TravelTimes {
    pub fn n_resources(&self) -> usize { self.resources.len() }
    pub fn n_nodes(&self) -> usize { self.nodes.len() }

    #[inline]
    pub fn tau(&self, r: usize, i: usize, j: usize) -> i64 {
        let n = self.nodes.len();
        self.tau[(r * n + i) * n + j]
    }

    /// `tau[r][i][..]`.
    #[inline]
    pub fn tau_row(&self, r: usize, i: usize) -> &[i64] {
        let n = self.nodes.len();
        let start = (r * n + i) * n;
        &self.tau[start..start + n]
    }

    #[inline]
    pub fn tau_max(&self, r: usize, i: usize) -> i64 {
        self.tau_max[r * self.nodes.len() + i]
    }

    /// `tau_max[r][..]`.
    pub fn tau_max_row(&self, r: usize) -> &[i64] {
        let n = self.nodes.len();
        &self.tau_max[r * n..(r + 1) * n]
    }

    /// Count of `-1` entries across all resources.
    pub fn unreachable_count(&self) -> usize {
        self.tau.iter().filter(|&&v| v == UNREACHABLE).count()
    }
}

// ── TravelTimeBuilder ─────────────────────────────────────────────────────────

/// Owns the computation of one [`TravelTimes`] result.
pub struct TravelTimeBuilder<'a, R: Router> {
    network: &'a RoadNetwork,
    router:  R,
    policy:  RepairPolicy,
}

impl<'a, R: Router> TravelTimeBuilder<'a, R> {
    pub fn new(network: &'a RoadNetwork, router: R) -> Self {
        Self { network, router, policy: RepairPolicy::default() }
    }

    /// Override the repair policy (default: penalty arcs of `PENALTY_STEPS`).
    pub fn policy(mut self, policy: RepairPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Compute `tau` and `tau_max` over `processing_nodes` (input labels).
    ///
    /// Fails with `UnknownNode` before any allocation if a label is not in
    /// the network.
    pub fn compute(
        &self,
        processing_nodes: &[u32],
        resources: &[ResourceId],
    ) -> NetworkResult<TravelTimes> {
        let vp: Vec<NodeId> = processing_nodes
            .iter()
            .map(|&l| self.network.node(l))
            .collect::<NetworkResult<_>>()?;

        let repaired = RepairedNetwork::new(self.network, &vp, self.policy);
        let rows = self.source_rows(&repaired, &vp);

        let n = vp.len();
        let mut tau = Vec::with_capacity(resources.len() * n * n);
        let mut tau_max = Vec::with_capacity(resources.len() * n);
        for _ in resources {
            for row in &rows {
                tau.extend_from_slice(row);
                tau_max.push(row.iter().copied().max().unwrap_or(UNREACHABLE));
            }
        }

        let out = TravelTimes {
            resources: resources.to_vec(),
            nodes: processing_nodes.to_vec(),
            penalty_arcs: repaired.penalty_count(),
            tau,
            tau_max,
        };
        info!(
            resources = out.n_resources(),
            nodes = n,
            penalty_arcs = out.penalty_arcs,
            unreachable = out.unreachable_count(),
            "travel times computed"
        );
        Ok(out)
    }

    fn source_rows(&self, graph: &RepairedNetwork<'_>, vp: &[NodeId]) -> Vec<Vec<i64>> {
        let row = |&src: &NodeId| -> Vec<i64> {
            let dist = self.router.shortest_steps(graph, src);
            vp.iter()
                .map(|v| dist[v.index()].map_or(UNREACHABLE, i64::from))
                .collect()
        };

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            vp.par_iter().map(row).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            vp.iter().map(row).collect()
        }
    }
}
