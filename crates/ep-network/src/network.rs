//! Road network representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing edges.
//! Given a `NodeId n`, its outgoing edges occupy the slice:
//!
//! ```text
//! edge_to[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! All edge arrays are sorted by source node and indexed by `EdgeId`, so a
//! node's outgoing edges are a contiguous memory scan in Dijkstra's inner
//! loop.
//!
//! # Node labels
//!
//! Input files name nodes with arbitrary integer labels.  The builder interns
//! each label in first-seen order and hands out dense `NodeId`s.

use rustc_hash::FxHashMap;

use ep_core::{EdgeId, NodeId};

use crate::{CategoryTable, NetworkError, NetworkResult, RoadSegment};

// ── Adjacency ─────────────────────────────────────────────────────────────────

/// Weighted out-arcs of a directed graph, weights in whole steps.
///
/// Implemented by [`RoadNetwork`] and by the repaired overlay in
/// [`crate::repair`], so the router runs unchanged on either.
pub trait Adjacency {
    fn node_count(&self) -> usize;

    /// `(neighbour, steps)` for every arc leaving `node`.
    fn arcs(&self, node: NodeId) -> impl Iterator<Item = (NodeId, u32)> + '_;
}

// ── RoadNetwork ───────────────────────────────────────────────────────────────

/// Directed road graph in CSR format.
///
/// All fields are `pub` for direct indexed access on hot paths.  Do not
/// construct directly; use [`RoadNetworkBuilder`].
pub struct RoadNetwork {
    // ── Node data ─────────────────────────────────────────────────────────
    /// Input label of each node.  Indexed by `NodeId`.
    pub node_label: Vec<u32>,

    /// CSR row pointer.  Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,

    // ── Edge data (indexed by EdgeId = position in sorted order) ──────────
    pub edge_from: Vec<NodeId>,

    pub edge_to: Vec<NodeId>,

    /// Traversal time in whole steps (≥ 1).  Used as the Dijkstra cost.
    pub edge_steps: Vec<u32>,

    label_index: FxHashMap<u32, NodeId>,
}

impl RoadNetwork {
    /// Build from declared segments.  Each segment becomes exactly one
    /// directed edge; the reverse direction must be declared separately.
    pub fn from_segments(
        segments: &[RoadSegment],
        categories: &CategoryTable,
        step_duration_s: f64,
    ) -> NetworkResult<Self> {
        let mut b = RoadNetworkBuilder::with_capacity(segments.len(), segments.len());
        for seg in segments {
            b.add_segment(seg, categories, step_duration_s)?;
        }
        Ok(b.build())
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_label.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_label.is_empty()
    }

    // ── Labels ────────────────────────────────────────────────────────────

    /// `NodeId` for an input label.
    pub fn node(&self, label: u32) -> NetworkResult<NodeId> {
        self.label_index
            .get(&label)
            .copied()
            .ok_or(NetworkError::UnknownNode(label))
    }

    #[inline]
    pub fn label(&self, node: NodeId) -> u32 {
        self.node_label[node.index()]
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `EdgeId`s of all outgoing edges from `node`.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        (start..end).map(|i| EdgeId(i as u32))
    }

    /// Sum of all edge weights: an upper bound on any simple path cost.
    pub fn total_steps(&self) -> u64 {
        self.edge_steps.iter().map(|&s| s as u64).sum()
    }
}

impl Adjacency for RoadNetwork {
    fn node_count(&self) -> usize {
        RoadNetwork::node_count(self)
    }

    fn arcs(&self, node: NodeId) -> impl Iterator<Item = (NodeId, u32)> + '_ {
        self.out_edges(node)
            .map(|e| (self.edge_to[e.index()], self.edge_steps[e.index()]))
    }
}

// ── RoadNetworkBuilder ────────────────────────────────────────────────────────

/// Construct a [`RoadNetwork`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use ep_network::{CategoryTable, RoadNetworkBuilder, RoadSegment};
///
/// let table = CategoryTable::standard();
/// let mut b = RoadNetworkBuilder::new();
/// b.add_segment(&RoadSegment::new(1, 2, "arterial"), &table, 1.0).unwrap();
/// b.add_segment(&RoadSegment::new(2, 1, "arterial"), &table, 1.0).unwrap();
/// let net = b.build();
/// assert_eq!(net.node_count(), 2);
/// assert_eq!(net.edge_count(), 2);
/// ```
pub struct RoadNetworkBuilder {
    labels:      Vec<u32>,
    label_index: FxHashMap<u32, NodeId>,
    raw_edges:   Vec<RawEdge>,
}

struct RawEdge {
    from:  NodeId,
    to:    NodeId,
    steps: u32,
}

impl RoadNetworkBuilder {
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            labels:      Vec::with_capacity(nodes),
            label_index: FxHashMap::default(),
            raw_edges:   Vec::with_capacity(edges),
        }
    }

    /// Intern `label` and return its `NodeId`.  Repeated labels return the
    /// id handed out the first time.
    pub fn add_node(&mut self, label: u32) -> NodeId {
        if let Some(&id) = self.label_index.get(&label) {
            return id;
        }
        let id = NodeId(self.labels.len() as u32);
        self.labels.push(label);
        self.label_index.insert(label, id);
        id
    }

    /// Add a **directed** edge costing `steps`.
    pub fn add_directed_edge(&mut self, from: NodeId, to: NodeId, steps: u32) {
        self.raw_edges.push(RawEdge { from, to, steps });
    }

    /// Add one declared segment, resolving its category.
    pub fn add_segment(
        &mut self,
        seg: &RoadSegment,
        categories: &CategoryTable,
        step_duration_s: f64,
    ) -> NetworkResult<()> {
        let cat = categories.get(&seg.category)?;
        let from = self.add_node(seg.from);
        let to = self.add_node(seg.to);
        self.add_directed_edge(from, to, cat.travel_steps(step_duration_s));
        Ok(())
    }

    pub fn node_count(&self) -> usize { self.labels.len() }
    pub fn edge_count(&self) -> usize { self.raw_edges.len() }

    /// Consume the builder and produce a [`RoadNetwork`].
    ///
    /// The sort is stable, so parallel edges keep their declaration order.
    pub fn build(self) -> RoadNetwork {
        let node_count = self.labels.len();
        let edge_count = self.raw_edges.len();

        let mut raw = self.raw_edges;
        raw.sort_by_key(|e| e.from.0);

        let edge_from:  Vec<NodeId> = raw.iter().map(|e| e.from).collect();
        let edge_to:    Vec<NodeId> = raw.iter().map(|e| e.to).collect();
        let edge_steps: Vec<u32>    = raw.iter().map(|e| e.steps).collect();

        let mut node_out_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, edge_count);

        RoadNetwork {
            node_label: self.labels,
            node_out_start,
            edge_from,
            edge_to,
            edge_steps,
            label_index: self.label_index,
        }
    }
}

impl Default for RoadNetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
