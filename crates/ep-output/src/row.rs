//! Plain data row types written by the CSV backend.

use ep_core::{GeoCenter, GeoPoint, Settings};
use ep_network::TravelTimes;
use ep_risk::{Cell, Hazard};

/// One `tau[r][i][j]` entry, labelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TauRow {
    pub resource: u32,
    pub from:     u32,
    pub to:       u32,
    /// Steps, or `-1` if unreachable.
    pub steps:    i64,
}

/// One `tau_max[r][i]` entry, labelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TauMaxRow {
    pub resource:  u32,
    pub node:      u32,
    pub max_steps: i64,
}

/// A cell (or the hazard origin) placed on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionRow {
    /// Cell number, or `"hazard"` for the hazard origin.
    pub label: String,
    pub kind:  String,
    pub x_m:   f64,
    pub y_m:   f64,
    pub geo:   GeoPoint,
}

/// Project every cell and the hazard origin through `center`.
pub fn projection_rows(
    cells: &[Cell],
    hazard: &Hazard,
    settings: &Settings,
    center: GeoCenter,
) -> Vec<ProjectionRow> {
    let mut rows: Vec<ProjectionRow> = cells
        .iter()
        .map(|c| {
            let m = c.pos.to_metric(settings.unit_length_m);
            ProjectionRow {
                label: c.id.0.to_string(),
                kind:  c.kind.as_str().to_owned(),
                x_m:   m.x,
                y_m:   m.y,
                geo:   center.project(m),
            }
        })
        .collect();
    rows.push(ProjectionRow {
        label: "hazard".into(),
        kind:  "hazard".into(),
        x_m:   hazard.pos.x,
        y_m:   hazard.pos.y,
        geo:   center.project(hazard.pos),
    });
    rows
}

/// Flatten `tau` into one row per `(resource, from, to)`, in matrix order.
pub fn tau_rows(tt: &TravelTimes) -> Vec<TauRow> {
    let n = tt.n_nodes();
    let mut rows = Vec::with_capacity(tt.n_resources() * n * n);
    for (r, res) in tt.resources.iter().enumerate() {
        for (i, &from) in tt.nodes.iter().enumerate() {
            for (j, &to) in tt.nodes.iter().enumerate() {
                rows.push(TauRow { resource: res.0, from, to, steps: tt.tau(r, i, j) });
            }
        }
    }
    rows
}

pub fn tau_max_rows(tt: &TravelTimes) -> Vec<TauMaxRow> {
    tt.resources
        .iter()
        .enumerate()
        .flat_map(|(r, res)| {
            tt.nodes.iter().enumerate().map(move |(i, &node)| TauMaxRow {
                resource:  res.0,
                node,
                max_steps: tt.tau_max(r, i),
            })
        })
        .collect()
}
