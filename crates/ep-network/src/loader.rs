//! JSON road-network loader.
//!
//! # File format
//!
//! ```json
//! {
//!   "categories": {
//!     "local":    { "speed_kmh": 36, "segment_length_m": 20 },
//!     "arterial": { "speed_kmh": 72, "segment_length_m": 40 }
//!   },
//!   "connections": [[1, 2, "arterial"], [2, 1, "arterial"]],
//!   "processing_nodes": [2],
//!   "resources": [1, 2]
//! }
//! ```
//!
//! `categories` may be omitted, in which case [`CategoryTable::standard`]
//! applies.  Connections are directed; declare both directions for a
//! two-way road.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use ep_core::ResourceId;

use crate::{CategoryTable, NetworkError, NetworkResult, RoadCategory, RoadNetwork};

/// One declared directed segment.  Deserializes from `[from, to, "category"]`
/// or from an object with the same field names.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RoadSegment {
    pub from:     u32,
    pub to:       u32,
    pub category: String,
}

impl RoadSegment {
    pub fn new(from: u32, to: u32, category: impl Into<String>) -> Self {
        Self { from, to, category: category.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
struct CategoryRecord {
    speed_kmh:        f64,
    segment_length_m: f64,
}

/// Parsed road-network file.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NetworkSpec {
    #[serde(default)]
    categories: Option<BTreeMap<String, CategoryRecord>>,
    pub connections: Vec<RoadSegment>,
    pub processing_nodes: Vec<u32>,
    pub resources: Vec<u32>,
}

impl NetworkSpec {
    pub fn from_reader<R: Read>(reader: R) -> NetworkResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Category table declared in the file, or the standard one.
    pub fn category_table(&self) -> NetworkResult<CategoryTable> {
        let Some(records) = &self.categories else {
            return Ok(CategoryTable::standard());
        };
        let mut table = CategoryTable::new();
        for (name, r) in records {
            table.insert(name.clone(), RoadCategory::from_kmh(r.speed_kmh, r.segment_length_m))?;
        }
        Ok(table)
    }

    /// Build the directed network.  An undeclared category is fatal.
    pub fn build(&self, step_duration_s: f64) -> NetworkResult<RoadNetwork> {
        RoadNetwork::from_segments(&self.connections, &self.category_table()?, step_duration_s)
    }

    pub fn resource_ids(&self) -> Vec<ResourceId> {
        self.resources.iter().map(|&r| ResourceId(r)).collect()
    }
}

/// Load a road-network file.
pub fn load_network_spec(path: &Path) -> NetworkResult<NetworkSpec> {
    let file = std::fs::File::open(path).map_err(NetworkError::Io)?;
    NetworkSpec::from_reader(std::io::BufReader::new(file))
}
