//! Discrete time model and run settings.
//!
//! # Design
//!
//! Time is a step counter `t = 0..n_steps`.  The mapping to seconds is
//!
//!   elapsed_secs = t * step_duration_s
//!
//! Travel durations are converted to whole steps by rounding **up**, so a
//! vehicle is never assumed to arrive before it physically could.

use crate::{CoreError, CoreResult, GeoCenter};

/// Number of whole steps needed to cover `secs` seconds (ceiling division).
///
/// Returns at least 1 for any positive duration.
#[inline]
pub fn steps_for_secs(secs: f64, step_duration_s: f64) -> u32 {
    let steps = (secs / step_duration_s).ceil();
    if steps < 1.0 { 1 } else { steps as u32 }
}

/// Immutable configuration for one computation run.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Metres per grid unit.
    pub unit_length_m: f64,
    /// Seconds represented by one step.
    pub step_duration_s: f64,
    /// Number of steps in the horizon.
    pub n_steps: usize,
    /// Geographic anchor for map projection.  Not needed by any computation.
    pub geo_center: Option<GeoCenter>,
}

impl Settings {
    /// Validate and construct.  Lengths and durations must be finite and > 0.
    pub fn new(
        unit_length_m: f64,
        step_duration_s: f64,
        n_steps: usize,
        geo_center: Option<GeoCenter>,
    ) -> CoreResult<Self> {
        positive("unit_length_m", unit_length_m)?;
        positive("step_duration_s", step_duration_s)?;
        if let Some(c) = geo_center {
            finite("geo_center.lat", c.lat)?;
            finite("geo_center.lon", c.lon)?;
        }
        Ok(Self { unit_length_m, step_duration_s, n_steps, geo_center })
    }
}

fn finite(what: &'static str, value: f64) -> CoreResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CoreError::InvalidGeometry { what, value })
    }
}

fn positive(what: &'static str, value: f64) -> CoreResult<()> {
    finite(what, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(CoreError::Config(format!("{what} must be > 0, got {value}")))
    }
}
