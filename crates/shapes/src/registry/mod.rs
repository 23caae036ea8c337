//! Variant registry: validated construction and the area order.
//!
//! Purpose
//! - The only way to obtain a `Shape`. Every dimension, attribute and policy
//!   entry is checked once in `ShapeBuilder::build`; afterwards the value is
//!   immutable and the engine never re-validates.
//! - `compare` orders shapes by area alone, so two shapes of different kinds
//!   with equal area compare equal.
//!
//! Code cross-refs: `types::{Shape, Variant, VisibilityPolicy}`, `engine::area`.

use std::collections::BTreeMap;

use crate::cfg::EngineCfg;
use crate::engine::{area, measure, Metric};
use crate::error::ShapeError;
use crate::types::{FieldValue, Shape, Variant, Visibility, VisibilityPolicy};

/// Builder for a shape with optional attributes and visibility overrides.
///
/// Dimensions default to `Public`; attributes carry the visibility given in
/// `attribute`. Nothing is checked until `build`.
#[derive(Clone, Debug)]
pub struct ShapeBuilder {
    variant: Variant,
    attributes: Vec<(String, FieldValue, Visibility)>,
    overrides: Vec<(String, Visibility)>,
}

impl ShapeBuilder {
    #[inline]
    pub fn circle(radius: f64) -> Self {
        Self::from_variant(Variant::Circle { radius })
    }

    #[inline]
    pub fn rectangle(width: f64, height: f64) -> Self {
        Self::from_variant(Variant::Rectangle { width, height })
    }

    #[inline]
    pub fn from_variant(variant: Variant) -> Self {
        Self {
            variant,
            attributes: Vec::new(),
            overrides: Vec::new(),
        }
    }

    /// Attach an extra named field.
    pub fn attribute(
        mut self,
        name: impl Into<String>,
        value: impl Into<FieldValue>,
        visibility: Visibility,
    ) -> Self {
        self.attributes.push((name.into(), value.into(), visibility));
        self
    }

    /// Override the visibility of an existing field (dimension or attribute).
    pub fn visibility(mut self, field: impl Into<String>, visibility: Visibility) -> Self {
        self.overrides.push((field.into(), visibility));
        self
    }

    pub fn build(self) -> Result<Shape, ShapeError> {
        for (field, value) in self.variant.dimensions() {
            check_dimension(field, value)?;
        }
        check_measures(self.variant)?;
        let dims = self.variant.kind().dimension_names();
        let mut tags: BTreeMap<String, Visibility> = dims
            .iter()
            .map(|name| (name.to_string(), Visibility::Public))
            .collect();

        let mut attributes = BTreeMap::new();
        for (name, value, visibility) in self.attributes {
            if name.trim().is_empty() {
                return Err(reject("attribute", format!("{name:?}"), "name must be non-empty"));
            }
            if dims.contains(&name.as_str()) {
                return Err(reject(&name, &value, "name clashes with a dimension field"));
            }
            if attributes.contains_key(&name) {
                return Err(reject(&name, &value, "duplicate attribute"));
            }
            if let FieldValue::Number(x) = value {
                if !x.is_finite() {
                    return Err(reject(&name, x, "numeric attribute must be finite"));
                }
            }
            tags.insert(name.clone(), visibility);
            attributes.insert(name, value);
        }

        for (field, visibility) in self.overrides {
            match tags.get_mut(&field) {
                Some(slot) => *slot = visibility,
                None => {
                    return Err(reject(
                        "visibility",
                        &field,
                        "policy names a field the shape does not have",
                    ))
                }
            }
        }

        Ok(Shape::from_parts(
            self.variant,
            attributes,
            VisibilityPolicy::from_tags(tags),
        ))
    }
}

/// Circle with all fields public. Rejects non-finite or non-positive `radius`.
pub fn create_circle(radius: f64) -> Result<Shape, ShapeError> {
    ShapeBuilder::circle(radius).build()
}

/// Rectangle with all fields public. The first offending dimension is reported.
pub fn create_rectangle(width: f64, height: f64) -> Result<Shape, ShapeError> {
    ShapeBuilder::rectangle(width, height).build()
}

/// Sign of `area(a) - area(b)` as -1, 0 or 1.
pub fn compare(a: &Shape, b: &Shape) -> i32 {
    compare_eps(a, b, 0.0)
}

/// Like `compare`, but areas within `eps` of each other compare 0.
/// Negative or NaN `eps` is treated as 0.
pub fn compare_eps(a: &Shape, b: &Shape, eps: f64) -> i32 {
    let eps = eps.max(0.0);
    let d = area(a) - area(b);
    if d > eps {
        1
    } else if d < -eps {
        -1
    } else {
        0
    }
}

/// `compare_eps` with the tie tolerance taken from `cfg`.
#[inline]
pub fn compare_with(a: &Shape, b: &Shape, cfg: &EngineCfg) -> i32 {
    compare_eps(a, b, cfg.tie_eps)
}

fn check_dimension(field: &'static str, value: f64) -> Result<(), ShapeError> {
    if !value.is_finite() {
        return Err(reject(field, value, "must be a finite number"));
    }
    if value <= 0.0 {
        return Err(reject(field, value, "must be greater than zero"));
    }
    Ok(())
}

/// Finite dimensions can still overflow or underflow the derived measures.
fn check_measures(variant: Variant) -> Result<(), ShapeError> {
    let bare = Shape::from_parts(variant, BTreeMap::new(), VisibilityPolicy::default());
    for (field, metric) in [("area", Metric::Area), ("perimeter", Metric::Perimeter)] {
        let value = measure(&bare, metric);
        if !value.is_finite() || value <= 0.0 {
            return Err(reject(
                field,
                value,
                "dimensions give a measure outside the positive finite range",
            ));
        }
    }
    Ok(())
}

fn reject(field: &str, value: impl ToString, reason: &'static str) -> ShapeError {
    let value = value.to_string();
    tracing::debug!(field, value = %value, reason, "rejected shape parameter");
    ShapeError::invalid(field, value, reason)
}

#[cfg(test)]
mod tests;
