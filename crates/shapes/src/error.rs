//! Errors surfaced at the construction boundary.
//!
//! - `InvalidParameter`: the registry refused to build a shape (or parse a role).
//! - `UnknownVariant`: a kind tag in text form names no variant.
//!
//! Engine operations take validated `Shape`s and have no error paths.

/// Errors surfaced by the registry and by text parsing of tags.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ShapeError {
    /// A construction parameter failed validation. `value` is the offending
    /// input rendered as text.
    #[error("invalid parameter `{field}` = {value}: {reason}")]
    InvalidParameter {
        field: String,
        value: String,
        reason: &'static str,
    },
    /// A kind tag that is not one of the closed variant set.
    #[error("unknown shape variant `{0}`")]
    UnknownVariant(String),
}

impl ShapeError {
    #[inline]
    pub(crate) fn invalid(
        field: impl Into<String>,
        value: impl ToString,
        reason: &'static str,
    ) -> Self {
        ShapeError::InvalidParameter {
            field: field.into(),
            value: value.to_string(),
            reason,
        }
    }

    /// Name of the offending field, if this is an `InvalidParameter`.
    pub fn field(&self) -> Option<&str> {
        match self {
            ShapeError::InvalidParameter { field, .. } => Some(field),
            ShapeError::UnknownVariant(_) => None,
        }
    }
}
