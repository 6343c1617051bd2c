//! `ep-core`: foundational types for the `evac-prep` toolkit.
//!
//! This crate is a dependency of every other `ep-*` crate.  It intentionally
//! has no `ep-*` dependencies and a single external one (`thiserror`).
//!
//! # What lives here
//!
//! | Module    | Contents                                                    |
//! |-----------|-------------------------------------------------------------|
//! | [`ids`]   | `CellId`, `NodeId`, `EdgeId`, `ResourceId`                  |
//! | [`geo`]   | `GridPoint`, `MetricPoint`, `GeoPoint`, `GeoCenter`         |
//! | [`time`]  | `Settings`, `steps_for_secs`                                |
//! | [`error`] | `CoreError`, `CoreResult`                                   |

pub mod error;
pub mod geo;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::{GeoCenter, GeoPoint, GridPoint, MetricPoint};
pub use ids::{CellId, EdgeId, NodeId, ResourceId};
pub use time::{Settings, steps_for_secs};
