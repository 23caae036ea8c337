//! Curated surface for the CLI and other in-workspace callers.
//!
//! Prefer these re-exports over reaching into submodules directly.

// Construction and ordering
pub use crate::registry::{
    compare, compare_eps, compare_with, create_circle, create_rectangle, ShapeBuilder,
};
// Measures and projection
pub use crate::engine::{
    area, describe, describe_with, field, measure, perimeter, project, Metric, Projection,
};
// Sampling
pub use crate::sample::{draw_many, draw_shape, ReplayToken, SampleCfg};
// Data model
pub use crate::cfg::{EngineCfg, DESCRIBE_PRECISION, MAX_DESCRIBE_PRECISION};
pub use crate::error::ShapeError;
pub use crate::types::{
    FieldValue, Role, Shape, ShapeKind, Variant, Visibility, VisibilityPolicy,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn shapes_are_shareable_across_threads() {
        assert_send_sync::<Shape>();
        let s = create_circle(2.0).unwrap();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let s = s.clone();
                std::thread::spawn(move || area(&s))
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), area(&s));
        }
    }
}
