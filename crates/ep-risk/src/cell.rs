//! Grid cells.

use ep_core::{CellId, GridPoint};

/// What occupies a cell.  Only `Shelter` changes the risk computation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
    Road,
    Shelter,
    Source,
    /// Any other label found in the scenario, kept verbatim.
    Other(String),
}

impl CellKind {
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "road"    => CellKind::Road,
            "shelter" => CellKind::Shelter,
            "source"  => CellKind::Source,
            other     => CellKind::Other(other.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CellKind::Road     => "road",
            CellKind::Shelter  => "shelter",
            CellKind::Source   => "source",
            CellKind::Other(s) => s,
        }
    }

    #[inline]
    pub fn is_shelter(&self) -> bool {
        matches!(self, CellKind::Shelter)
    }
}

impl std::fmt::Display for CellKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One grid cell.  `pos` is in grid units.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub id:   CellId,
    pub pos:  GridPoint,
    pub kind: CellKind,
}

impl Cell {
    pub fn new(id: CellId, pos: GridPoint, kind: CellKind) -> Self {
        Self { id, pos, kind }
    }
}
