//! `ep-output`: artifact writers for the evac-prep toolkit.
//!
//! Two backends implement [`ArtifactWriter`]:
//!
//! | Backend           | Files created                                                      |
//! |-------------------|--------------------------------------------------------------------|
//! | [`ArrayTextWriter`] | `risk_matrix.txt`, `tau.txt`, `tau_max.txt`, `distances.txt`, `row_max.txt` |
//! | [`CsvWriter`]       | `risk.csv`, `tau.csv`, `tau_max.csv`, `distances.csv`, `row_max.csv`, `projection.csv` |
//!
//! The text backend renders literal nested arrays (`[[0.1234, ...],\n[...]]`),
//! which is the format downstream solver tooling parses.  Files are created
//! on first write, so a run only produces the artifacts it computed.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ep_output::{ArrayTextWriter, ArtifactWriter};
//!
//! let mut w = ArrayTextWriter::new(Path::new("./out"))?;
//! w.write_risk(&scenario.risk_matrix())?;
//! w.finish()?;
//! ```

pub mod array;
pub mod csv;
pub mod error;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use array::{ArrayTextWriter, format_distance};
pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use row::{ProjectionRow, TauMaxRow, TauRow, projection_rows, tau_max_rows, tau_rows};
pub use writer::ArtifactWriter;
