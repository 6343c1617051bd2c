//! `ep-apsp`: generic all-pairs shortest distances.
//!
//! Independent of the road network: input is a plain text graph file with
//! string labels and real weights, output a dense distance matrix.
//!
//! | Module    | Contents                                              |
//! |-----------|-------------------------------------------------------|
//! | [`graph`] | `WeightedGraph`, `parse_graph`, `load_graph`          |
//! | [`floyd`] | `DistanceMatrix`, `RowMax`                            |
//! | [`error`] | `ApspError`, `ApspResult<T>`                          |

pub mod error;
pub mod floyd;
pub mod graph;

#[cfg(test)]
mod tests;

pub use error::{ApspError, ApspResult};
pub use floyd::{DistanceMatrix, RowMax};
pub use graph::{WeightedGraph, load_graph, parse_graph};
