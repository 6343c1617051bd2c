//! Road categories and their travel characteristics.
//!
//! Every edge belongs to a named category.  A category fixes the speed on
//! the segment and the segment's length; together with the step duration
//! they give the edge weight in whole steps.

use rustc_hash::FxHashMap;

use ep_core::steps_for_secs;

use crate::{NetworkError, NetworkResult};

/// Speed and segment length for one category.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RoadCategory {
    pub speed_m_s:        f64,
    pub segment_length_m: f64,
}

impl RoadCategory {
    pub fn new(speed_m_s: f64, segment_length_m: f64) -> Self {
        Self { speed_m_s, segment_length_m }
    }

    pub fn from_kmh(speed_kmh: f64, segment_length_m: f64) -> Self {
        Self::new(speed_kmh / 3.6, segment_length_m)
    }

    /// Seconds to traverse one segment.
    #[inline]
    pub fn travel_secs(&self) -> f64 {
        self.segment_length_m / self.speed_m_s
    }

    /// `ceil(travel_secs / step_duration_s)`, at least 1.
    #[inline]
    pub fn travel_steps(&self, step_duration_s: f64) -> u32 {
        steps_for_secs(self.travel_secs(), step_duration_s)
    }

    fn validate(&self, name: &str) -> NetworkResult<()> {
        let bad = |what: &str, v: f64| NetworkError::InvalidCategory {
            name:   name.to_owned(),
            reason: format!("{what} must be finite and > 0, got {v}"),
        };
        if !(self.speed_m_s.is_finite() && self.speed_m_s > 0.0) {
            return Err(bad("speed", self.speed_m_s));
        }
        if !(self.segment_length_m.is_finite() && self.segment_length_m > 0.0) {
            return Err(bad("segment length", self.segment_length_m));
        }
        Ok(())
    }
}

/// Lookup table from category name to [`RoadCategory`].
#[derive(Clone, Debug, Default)]
pub struct CategoryTable {
    entries: FxHashMap<String, RoadCategory>,
}

impl CategoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The two categories used by the reference city model.
    ///
    /// | Name       | Speed   | Segment |
    /// |------------|---------|---------|
    /// | `local`    | 36 km/h | 20 m    |
    /// | `arterial` | 72 km/h | 40 m    |
    pub fn standard() -> Self {
        let mut t = Self::new();
        t.entries.insert("local".into(), RoadCategory::from_kmh(36.0, 20.0));
        t.entries.insert("arterial".into(), RoadCategory::from_kmh(72.0, 40.0));
        t
    }

    /// Add or replace a category.  Non-positive speeds or lengths are rejected.
    pub fn insert(&mut self, name: impl Into<String>, category: RoadCategory) -> NetworkResult<()> {
        let name = name.into();
        category.validate(&name)?;
        self.entries.insert(name, category);
        Ok(())
    }

    pub fn get(&self, name: &str) -> NetworkResult<&RoadCategory> {
        self.entries
            .get(name)
            .ok_or_else(|| NetworkError::UnknownCategory(name.to_owned()))
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}
