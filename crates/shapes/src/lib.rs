//! Closed-variant shapes with area dispatch and visibility-filtered projection.
//!
//! Layout
//! - `registry`: validated construction (`create_circle`, `create_rectangle`,
//!   `ShapeBuilder`) and the area order (`compare`).
//! - `engine`: `area`, `perimeter`, `project`, `describe` over validated shapes.
//! - `types`: the data model (`Shape`, `Variant`, `VisibilityPolicy`, `Role`).
//! - `sample`: deterministic random shapes for benches and experiments.
//!
//! Everything is pure and synchronous; `Shape` is immutable and `Send + Sync`.

pub mod api;
pub mod cfg;
pub mod engine;
pub mod error;
pub mod registry;
pub mod sample;
pub mod types;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::EngineCfg;
pub use error::ShapeError;
pub use types::{FieldValue, Role, Shape, ShapeKind, Variant, Visibility, VisibilityPolicy};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::engine::{area, describe, perimeter, project, Projection};
    pub use crate::registry::{compare, create_circle, create_rectangle, ShapeBuilder};
    pub use crate::{EngineCfg, FieldValue, Role, Shape, ShapeError, ShapeKind, Visibility};
}
