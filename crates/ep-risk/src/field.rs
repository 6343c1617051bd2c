//! Per-cell, per-step risk field.
//!
//! # Risk function
//!
//! For a non-shelter cell at distance `d` from a hazard of radius `r`:
//!
//! ```text
//! risk = 1 - (d / r)^2    if d <= r
//!        0                otherwise
//! ```
//!
//! # Spatial index
//!
//! Non-shelter cells are bulk-loaded into an R-tree (via `rstar`) keyed by
//! their metric position.  Each step queries the disc under the hazard and
//! writes only those cells; the matrix is pre-filled with 0, which covers
//! shelters and every cell outside the disc.

use rstar::{AABB, PointDistance, RTree, RTreeObject};
use tracing::debug;

use ep_core::{MetricPoint, Settings};

use crate::{Cell, Hazard};

/// Risk at distance `distance_m` from the centre of a hazard of `radius_m`.
#[inline]
pub fn risk_at(distance_m: f64, radius_m: f64) -> f64 {
    if distance_m > radius_m {
        return 0.0;
    }
    let q = distance_m / radius_m;
    1.0 - q * q
}

// ── R-tree cell entry ─────────────────────────────────────────────────────────

#[derive(Clone)]
struct CellEntry {
    pos: MetricPoint,
    row: usize,
}

impl RTreeObject for CellEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.pos.x, self.pos.y])
    }
}

impl PointDistance for CellEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        self.pos.distance_sq(MetricPoint::new(point[0], point[1]))
    }
}

// ── RiskMatrix ────────────────────────────────────────────────────────────────

/// Dense `risk[cell][t]` matrix, row-major by cell.
///
/// Row order matches the cell slice the field was built from.
#[derive(Clone, Debug, PartialEq)]
pub struct RiskMatrix {
    n_cells: usize,
    n_steps: usize,
    values:  Vec<f64>,
}

impl RiskMatrix {
    fn zeros(n_cells: usize, n_steps: usize) -> Self {
        Self { n_cells, n_steps, values: vec![0.0; n_cells * n_steps] }
    }

    pub fn n_cells(&self) -> usize { self.n_cells }
    pub fn n_steps(&self) -> usize { self.n_steps }

    #[inline]
    pub fn get(&self, cell: usize, t: usize) -> f64 {
        self.values[cell * self.n_steps + t]
    }

    /// All steps for one cell.
    #[inline]
    pub fn row(&self, cell: usize) -> &[f64] {
        &self.values[cell * self.n_steps..(cell + 1) * self.n_steps]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.n_cells).map(move |i| self.row(i))
    }

    #[inline]
    fn set(&mut self, cell: usize, t: usize, v: f64) {
        self.values[cell * self.n_steps + t] = v;
    }
}

// ── RiskField ─────────────────────────────────────────────────────────────────

/// Computes a [`RiskMatrix`] for a fixed set of cells.
///
/// Building the field indexes the cells once; [`compute`](Self::compute) can
/// then be called for any number of independent hazards.
pub struct RiskField<'a> {
    settings: &'a Settings,
    n_cells:  usize,
    index:    RTree<CellEntry>,
}

impl<'a> RiskField<'a> {
    pub fn new(settings: &'a Settings, cells: &[Cell]) -> Self {
        let entries: Vec<CellEntry> = cells
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.kind.is_shelter())
            .map(|(row, c)| CellEntry { pos: c.pos.to_metric(settings.unit_length_m), row })
            .collect();

        Self { settings, n_cells: cells.len(), index: RTree::bulk_load(entries) }
    }

    /// Run the hazard forward `n_steps` steps and record exposure.
    ///
    /// The hazard is taken by value: its position after the run is of no use
    /// to anyone, and a fresh state is needed for every run.
    pub fn compute(&self, mut hazard: Hazard) -> RiskMatrix {
        let n_steps = self.settings.n_steps;
        let mut m = RiskMatrix::zeros(self.n_cells, n_steps);
        let r2 = hazard.radius_m * hazard.radius_m;

        for t in 0..n_steps {
            let centre = [hazard.pos.x, hazard.pos.y];
            let mut exposed = 0usize;
            for e in self.index.locate_within_distance(centre, r2) {
                m.set(e.row, t, risk_at(e.pos.distance_m(hazard.pos), hazard.radius_m));
                exposed += 1;
            }
            debug!(step = t, centre = %hazard.pos, exposed, "risk step");
            hazard.advance(self.settings.step_duration_s);
        }

        m
    }
}
