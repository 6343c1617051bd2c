//! Strongly typed, zero-cost identifier wrappers.
//!
//! `NodeId` and `EdgeId` are dense indices into the network's CSR arrays.
//! `CellId` and `ResourceId` are labels taken verbatim from input files; they
//! are not required to be contiguous.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID", equal to `MAX`.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Cell label from the scenario file (`cell_number`).
    pub struct CellId(u32);
}

typed_id! {
    /// Index of a road-network node in CSR order.
    pub struct NodeId(u32);
}

typed_id! {
    /// Index of a directed road-network edge.
    pub struct EdgeId(u32);
}

typed_id! {
    /// Resource category label (first axis of the travel-time tensor).
    pub struct ResourceId(u32);
}
