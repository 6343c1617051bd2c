//! `ep-risk`: hazard motion and the cell × step risk field.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`cell`]     | `Cell`, `CellKind`                                       |
//! | [`hazard`]   | `Hazard`, `Direction`, `kmh_to_m_s`                      |
//! | [`field`]    | `RiskField` (R-tree over cells), `RiskMatrix`, `risk_at` |
//! | [`scenario`] | `Scenario`, `load_scenario` (JSON)                       |
//! | [`error`]    | `RiskError`, `RiskResult<T>`                             |

pub mod cell;
pub mod error;
pub mod field;
pub mod hazard;
pub mod scenario;


pub use cell::{Cell, CellKind};
pub use error::{RiskError, RiskResult};
pub use field::{RiskField, RiskMatrix, risk_at};
pub use hazard::{Direction, Hazard, kmh_to_m_s};
pub use scenario::{Scenario, load_scenario};
