//! `ep-network`: road network, routing, and travel-time matrices.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`category`]    | `RoadCategory`, `CategoryTable`                            |
//! | [`network`]     | `RoadNetwork` (CSR), `RoadNetworkBuilder`, `Adjacency`     |
//! | [`router`]      | `Router` trait, `Route`, `DijkstraRouter`                  |
//! | [`repair`]      | `RepairedNetwork`, `RepairPolicy`, `PENALTY_STEPS`         |
//! | [`travel_time`] | `TravelTimeBuilder`, `TravelTimes` (`tau` / `tau_max`)     |
//! | [`loader`]      | `NetworkSpec`, `load_network_spec` (JSON)                  |
//! | [`error`]       | `NetworkError`, `NetworkResult<T>`                         |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Dijkstra source rows are computed on the Rayon pool.      |

pub mod category;
pub mod error;
pub mod loader;
pub mod network;
pub mod repair;
pub mod router;
pub mod travel_time;


pub use category::{CategoryTable, RoadCategory};
pub use error::{NetworkError, NetworkResult};
pub use loader::{NetworkSpec, RoadSegment, load_network_spec};
pub use network::{Adjacency, RoadNetwork, RoadNetworkBuilder};
pub use repair::{PENALTY_STEPS, RepairPolicy, RepairedNetwork};
pub use router::{DijkstraRouter, Route, Router};
pub use travel_time::{TravelTimeBuilder, TravelTimes, UNREACHABLE};
