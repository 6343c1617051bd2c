//! JSON scenario loader.
//!
//! # File format
//!
//! ```json
//! {
//!   "cells": [
//!     { "cell_number": 1, "x_coord": 0, "y_coord": 0, "type": "road" },
//!     { "cell_number": 2, "x_coord": 1, "y_coord": 0, "type": "shelter" }
//!   ],
//!   "disaster": {
//!     "x_coord": -2, "y_coord": 0, "velocity_in_kmh": 36,
//!     "direction": "+x", "radius_in_meters": 150
//!   },
//!   "setting": {
//!     "unit_length_in_meters": 50, "time_step_length_in_secs": 60,
//!     "n_time_steps": 10, "geo_center": { "lat": 41.0, "lon": 29.0 }
//!   }
//! }
//! ```
//!
//! Every numeric field except `geo_center` is required.  The whole file is
//! validated before anything is computed: a missing key is
//! [`RiskError::MissingField`], a non-numeric or non-finite coordinate is
//! [`RiskError::InvalidGeometry`].

use std::io::Read;
use std::path::Path;

use serde_json::{Map, Value};

use ep_core::{CellId, GeoCenter, GridPoint, Settings};

use crate::{Cell, CellKind, Direction, Hazard, RiskError, RiskField, RiskMatrix, RiskResult, kmh_to_m_s};

/// A validated scenario: cells, initial hazard state (metres, m/s), settings.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub cells:    Vec<Cell>,
    pub hazard:   Hazard,
    pub settings: Settings,
}

impl Scenario {
    /// Parse from any `Read` source.
    pub fn from_reader<R: Read>(reader: R) -> RiskResult<Self> {
        let root: Value = serde_json::from_reader(reader)?;
        Self::from_value(&root)
    }

    pub fn from_value(root: &Value) -> RiskResult<Self> {
        let setting  = section(root, "setting")?;
        let disaster = section(root, "disaster")?;

        let settings = parse_settings(setting)?;
        let hazard   = parse_hazard(disaster, settings.unit_length_m)?;

        let cells = match root.get("cells") {
            None => return Err(missing("<root>", "cells")),
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(i, v)| parse_cell(i, v))
                .collect::<RiskResult<Vec<_>>>()?,
            Some(_) => return Err(invalid("<root>", "cells", "expected an array")),
        };

        Ok(Self { cells, hazard, settings })
    }

    /// Compute the risk matrix for this scenario.
    pub fn risk_matrix(&self) -> RiskMatrix {
        RiskField::new(&self.settings, &self.cells).compute(self.hazard.clone())
    }
}

/// Load and validate a scenario file.
pub fn load_scenario(path: &Path) -> RiskResult<Scenario> {
    let file = std::fs::File::open(path).map_err(RiskError::Io)?;
    Scenario::from_reader(std::io::BufReader::new(file))
}

// ── Sections ──────────────────────────────────────────────────────────────────

fn parse_settings(s: &Map<String, Value>) -> RiskResult<Settings> {
    let unit_length = number(s, "setting", "unit_length_in_meters")?;
    let step_secs   = number(s, "setting", "time_step_length_in_secs")?;
    let n_steps     = count(s, "setting", "n_time_steps")?;

    let geo_center = match s.get("geo_center") {
        None | Some(Value::Null) => None,
        Some(Value::Object(c)) => Some(GeoCenter::new(
            coord(c, "setting.geo_center", "lat")?,
            coord(c, "setting.geo_center", "lon")?,
        )),
        Some(_) => return Err(invalid("setting", "geo_center", "expected an object")),
    };

    Ok(Settings::new(unit_length, step_secs, n_steps as usize, geo_center)?)
}

fn parse_hazard(d: &Map<String, Value>, unit_length_m: f64) -> RiskResult<Hazard> {
    let pos = GridPoint::new(coord(d, "disaster", "x_coord")?, coord(d, "disaster", "y_coord")?);
    let speed_kmh = number(d, "disaster", "velocity_in_kmh")?;
    let radius_m  = number(d, "disaster", "radius_in_meters")?;
    let direction: Direction = text(d, "disaster", "direction")?.parse()?;

    Hazard::new(pos.to_metric(unit_length_m), radius_m, kmh_to_m_s(speed_kmh), direction)
}

fn parse_cell(i: usize, v: &Value) -> RiskResult<Cell> {
    let name = format!("cells[{i}]");
    let Value::Object(c) = v else {
        return Err(invalid(&name, "<cell>", "expected an object"));
    };
    let id   = count(c, &name, "cell_number")?;
    let pos  = GridPoint::new(coord(c, &name, "x_coord")?, coord(c, &name, "y_coord")?);
    let kind = CellKind::parse(text(c, &name, "type")?);
    Ok(Cell::new(CellId(id), pos, kind))
}

// ── Field helpers ─────────────────────────────────────────────────────────────

fn section<'a>(root: &'a Value, name: &str) -> RiskResult<&'a Map<String, Value>> {
    match root.get(name) {
        None => Err(missing("<root>", name)),
        Some(Value::Object(m)) => Ok(m),
        Some(_) => Err(invalid("<root>", name, "expected an object")),
    }
}

/// A required finite number.  Non-numeric values are a generic invalid field.
fn number(m: &Map<String, Value>, section: &str, key: &str) -> RiskResult<f64> {
    let v = m.get(key).ok_or_else(|| missing(section, key))?;
    match v.as_f64() {
        Some(x) if x.is_finite() => Ok(x),
        _ => Err(invalid(section, key, &format!("expected a finite number, got {v}"))),
    }
}

/// A required coordinate.  Same as [`number`] but reported as geometry.
fn coord(m: &Map<String, Value>, section: &str, key: &str) -> RiskResult<f64> {
    let v = m.get(key).ok_or_else(|| missing(section, key))?;
    match v.as_f64() {
        Some(x) if x.is_finite() => Ok(x),
        _ => Err(RiskError::InvalidGeometry {
            section: section.to_owned(),
            key:     key.to_owned(),
            reason:  format!("expected a finite number, got {v}"),
        }),
    }
}

fn count(m: &Map<String, Value>, section: &str, key: &str) -> RiskResult<u32> {
    let v = m.get(key).ok_or_else(|| missing(section, key))?;
    v.as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| invalid(section, key, &format!("expected a non-negative integer, got {v}")))
}

fn text<'a>(m: &'a Map<String, Value>, section: &str, key: &str) -> RiskResult<&'a str> {
    let v = m.get(key).ok_or_else(|| missing(section, key))?;
    v.as_str()
        .ok_or_else(|| invalid(section, key, &format!("expected a string, got {v}")))
}

fn missing(section: &str, key: &str) -> RiskError {
    RiskError::MissingField { section: section.to_owned(), key: key.to_owned() }
}

fn invalid(section: &str, key: &str, reason: &str) -> RiskError {
    RiskError::InvalidField {
        section: section.to_owned(),
        key:     key.to_owned(),
        reason:  reason.to_owned(),
    }
}
