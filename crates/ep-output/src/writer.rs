//! The `ArtifactWriter` trait implemented by all backend writers.

use ep_apsp::DistanceMatrix;
use ep_network::TravelTimes;
use ep_risk::RiskMatrix;

use crate::OutputResult;

/// Trait implemented by the text and CSV writers.
///
/// Each method writes one complete artifact; matrices are never streamed
/// partially.
pub trait ArtifactWriter {
    fn write_risk(&mut self, risk: &RiskMatrix) -> OutputResult<()>;

    /// Write `tau` and `tau_max`.
    fn write_travel_times(&mut self, tt: &TravelTimes) -> OutputResult<()>;

    /// Write the distance matrix and its per-row finite maxima.
    fn write_distances(&mut self, d: &DistanceMatrix) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
