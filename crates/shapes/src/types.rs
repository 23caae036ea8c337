//! Shape data model: variant tags, dimensions, attributes, and visibility.
//!
//! - `ShapeKind`: the closed tag set, rendered as `circle` / `rectangle`.
//! - `Variant`: the dimensions of one concrete case.
//! - `Shape`: immutable value; only `registry::ShapeBuilder` creates one.
//! - `VisibilityPolicy`, `Role`: who may read which field.
//!
//! Invariants (established by `ShapeBuilder::build`)
//! - Every dimension is finite and `> 0`.
//! - Every field of a shape (dimension or attribute) has exactly one policy tag.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ShapeError;

/// Variant tag of a shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Circle,
    Rectangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 2] = [ShapeKind::Circle, ShapeKind::Rectangle];

    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Rectangle => "rectangle",
        }
    }

    /// Dimension field names in declaration order.
    #[inline]
    pub fn dimension_names(self) -> &'static [&'static str] {
        match self {
            ShapeKind::Circle => &["radius"],
            ShapeKind::Rectangle => &["width", "height"],
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    /// Accepts `circle`, `rectangle` and the short form `rect` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "circle" => Ok(ShapeKind::Circle),
            "rectangle" | "rect" => Ok(ShapeKind::Rectangle),
            _ => Err(ShapeError::UnknownVariant(s.to_string())),
        }
    }
}

/// Dimensions of one concrete shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Variant {
    Circle { radius: f64 },
    Rectangle { width: f64, height: f64 },
}

impl Variant {
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Variant::Circle { .. } => ShapeKind::Circle,
            Variant::Rectangle { .. } => ShapeKind::Rectangle,
        }
    }

    /// `(field name, value)` pairs, ordered as `ShapeKind::dimension_names`.
    pub fn dimensions(&self) -> Vec<(&'static str, f64)> {
        match *self {
            Variant::Circle { radius } => vec![("radius", radius)],
            Variant::Rectangle { width, height } => vec![("width", width), ("height", height)],
        }
    }
}

/// Value of a projected field.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(x) => write!(f, "{x}"),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(x: f64) -> Self {
        FieldValue::Number(x)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

/// Per-field visibility tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
}

impl FromStr for Visibility {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "public" => Ok(Visibility::Public),
            "private" => Ok(Visibility::Private),
            _ => Err(ShapeError::invalid(
                "visibility",
                s,
                "expected `public` or `private`",
            )),
        }
    }
}

/// Field name → visibility, owned by a single shape.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisibilityPolicy {
    tags: BTreeMap<String, Visibility>,
}

impl VisibilityPolicy {
    #[inline]
    pub(crate) fn from_tags(tags: BTreeMap<String, Visibility>) -> Self {
        Self { tags }
    }

    /// Tag of `field`; `None` if the shape has no such field.
    #[inline]
    pub fn get(&self, field: &str) -> Option<Visibility> {
        self.tags.get(field).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Visibility)> {
        self.tags.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Requester role for projections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Admins read every field; everyone else reads public fields only.
    /// Untagged fields count as private.
    #[inline]
    pub fn can_read(self, visibility: Option<Visibility>) -> bool {
        matches!(
            (self, visibility),
            (Role::Admin, _) | (_, Some(Visibility::Public))
        )
    }
}

impl FromStr for Role {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            _ => Err(ShapeError::invalid(
                "role",
                s,
                "expected `user` or `admin`",
            )),
        }
    }
}

/// Immutable, validated shape.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    variant: Variant,
    attributes: BTreeMap<String, FieldValue>,
    policy: VisibilityPolicy,
}

impl Shape {
    /// Callers must have validated `variant` and tagged every field in `policy`.
    #[inline]
    pub(crate) fn from_parts(
        variant: Variant,
        attributes: BTreeMap<String, FieldValue>,
        policy: VisibilityPolicy,
    ) -> Self {
        Self {
            variant,
            attributes,
            policy,
        }
    }

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.variant.kind()
    }

    #[inline]
    pub fn variant(&self) -> &Variant {
        &self.variant
    }

    #[inline]
    pub fn policy(&self) -> &VisibilityPolicy {
        &self.policy
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Every field, dimensions first, then attributes in name order.
    pub fn fields(&self) -> Vec<(&str, FieldValue)> {
        let mut out: Vec<(&str, FieldValue)> = self
            .variant
            .dimensions()
            .into_iter()
            .map(|(name, x)| (name, FieldValue::Number(x)))
            .collect();
        out.extend(self.attributes.iter().map(|(k, v)| (k.as_str(), v.clone())));
        out
    }

    /// Value of one field regardless of visibility.
    pub fn field_value(&self, name: &str) -> Option<FieldValue> {
        self.variant
            .dimensions()
            .into_iter()
            .find(|(dim, _)| *dim == name)
            .map(|(_, x)| FieldValue::Number(x))
            .or_else(|| self.attributes.get(name).cloned())
    }
}
