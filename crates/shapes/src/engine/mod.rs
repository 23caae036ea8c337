//! Shape engine: measures and visibility-aware projection.
//!
//! - `measure` is the single dispatch point over `(Variant, Metric)`; `area`
//!   and `perimeter` are thin wrappers. No formula lives anywhere else.
//! - `project` / `field` apply `Role::can_read` to the shape's own policy.
//!
//! All functions are pure and take already validated shapes.

use std::collections::BTreeMap;
use std::f64::consts::{PI, TAU};

use crate::cfg::{EngineCfg, MAX_DESCRIBE_PRECISION};
use crate::types::{FieldValue, Role, Shape, Variant};

/// Quantity computed by `measure`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Metric {
    Area,
    Perimeter,
}

/// Role-filtered view of a shape's fields, ordered by field name.
pub type Projection = BTreeMap<String, FieldValue>;

/// Dispatch table keyed on the variant tag.
pub fn measure(shape: &Shape, metric: Metric) -> f64 {
    match (*shape.variant(), metric) {
        (Variant::Circle { radius }, Metric::Area) => PI * radius * radius,
        (Variant::Circle { radius }, Metric::Perimeter) => TAU * radius,
        (Variant::Rectangle { width, height }, Metric::Area) => width * height,
        (Variant::Rectangle { width, height }, Metric::Perimeter) => 2.0 * (width + height),
    }
}

#[inline]
pub fn area(shape: &Shape) -> f64 {
    measure(shape, Metric::Area)
}

#[inline]
pub fn perimeter(shape: &Shape) -> f64 {
    measure(shape, Metric::Perimeter)
}

/// Fields readable by `role`: public ones for `User`, all of them for `Admin`.
pub fn project(shape: &Shape, role: Role) -> Projection {
    let policy = shape.policy();
    shape
        .fields()
        .into_iter()
        .filter(|(name, _)| role.can_read(policy.get(name)))
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

/// Single-field read under the same rule as `project`.
/// `None` if the field is missing or hidden from `role`.
pub fn field(shape: &Shape, name: &str, role: Role) -> Option<FieldValue> {
    if !role.can_read(shape.policy().get(name)) {
        return None;
    }
    shape.field_value(name)
}

/// `"<kind> (area <A>)"` with `A` at the default precision.
pub fn describe(shape: &Shape) -> String {
    describe_with(shape, &EngineCfg::default())
}

pub fn describe_with(shape: &Shape, cfg: &EngineCfg) -> String {
    format!(
        "{} (area {:.*})",
        shape.kind(),
        cfg.describe_precision.min(MAX_DESCRIBE_PRECISION),
        area(shape)
    )
}
