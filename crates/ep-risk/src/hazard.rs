//! The moving hazard.
//!
//! A hazard is a disc of fixed radius whose centre moves at constant speed
//! along one cardinal axis.  Position is kept in metres.

use std::str::FromStr;

use ep_core::MetricPoint;

use crate::{RiskError, RiskResult};

/// Convert km/h to m/s.
#[inline]
pub fn kmh_to_m_s(kmh: f64) -> f64 {
    kmh * 1000.0 / 3600.0
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// Axis and sense of hazard motion.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    PosX,
    NegX,
    PosY,
    NegY,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::PosX => "+x",
            Direction::NegX => "-x",
            Direction::PosY => "+y",
            Direction::NegY => "-y",
        }
    }

    /// Unit vector `(dx, dy)` of motion.
    #[inline]
    pub fn unit(self) -> (f64, f64) {
        match self {
            Direction::PosX => (1.0, 0.0),
            Direction::NegX => (-1.0, 0.0),
            Direction::PosY => (0.0, 1.0),
            Direction::NegY => (0.0, -1.0),
        }
    }
}

impl FromStr for Direction {
    type Err = RiskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+x" => Ok(Direction::PosX),
            "-x" => Ok(Direction::NegX),
            "+y" => Ok(Direction::PosY),
            "-y" => Ok(Direction::NegY),
            other => Err(RiskError::UnsupportedDirection(other.to_owned())),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Hazard ────────────────────────────────────────────────────────────────────

/// Current state of the hazard.  Owned by a single risk run.
#[derive(Clone, Debug, PartialEq)]
pub struct Hazard {
    /// Centre in metres.
    pub pos:       MetricPoint,
    /// Radius of influence in metres (> 0).
    pub radius_m:  f64,
    pub speed_m_s: f64,
    pub direction: Direction,
}

impl Hazard {
    /// Validate and construct.  The centre must be finite, the radius finite
    /// and > 0, the speed finite and >= 0.
    pub fn new(
        pos: MetricPoint,
        radius_m: f64,
        speed_m_s: f64,
        direction: Direction,
    ) -> RiskResult<Self> {
        if !(pos.x.is_finite() && pos.y.is_finite()) {
            return Err(geometry("x_coord", format!("centre must be finite, got {pos}")));
        }
        if !(radius_m.is_finite() && radius_m > 0.0) {
            return Err(geometry("radius_in_meters", format!("radius must be > 0, got {radius_m}")));
        }
        if !(speed_m_s.is_finite() && speed_m_s >= 0.0) {
            return Err(RiskError::InvalidField {
                section: "disaster".into(),
                key:     "velocity_in_kmh".into(),
                reason:  format!("speed must be finite and >= 0, got {speed_m_s} m/s"),
            });
        }
        Ok(Self { pos, radius_m, speed_m_s, direction })
    }

    /// Move the centre by `speed × step_duration_s` along the declared axis.
    #[inline]
    pub fn advance(&mut self, step_duration_s: f64) {
        let d = self.speed_m_s * step_duration_s;
        let (ux, uy) = self.direction.unit();
        self.pos = self.pos.offset(ux * d, uy * d);
    }
}

fn geometry(key: &str, reason: String) -> RiskError {
    RiskError::InvalidGeometry { section: "disaster".into(), key: key.into(), reason }
}
