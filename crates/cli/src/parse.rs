//! Command-line tokens for shapes and attributes.
//!
//! - Shapes: `circle:<r>`, `rectangle:<w>x<h>` (also `rect:`).
//! - Attributes: `name=value[:public|:private]`, private when unsuffixed.
//!   Values that parse as `f64` become numbers, anything else text.

use anyhow::{anyhow, Context, Result};
use shapes::api::{FieldValue, ShapeBuilder, ShapeKind, Visibility};

/// Builder for the shape named by `token`; attributes are added by the caller.
pub fn shape_builder(token: &str) -> Result<ShapeBuilder> {
    let (kind, params) = token
        .split_once(':')
        .ok_or_else(|| anyhow!("shape `{token}` must look like `circle:3` or `rectangle:3x2`"))?;
    let kind: ShapeKind = kind.parse()?;
    match kind {
        ShapeKind::Circle => Ok(ShapeBuilder::circle(number(params, "radius")?)),
        ShapeKind::Rectangle => {
            let (w, h) = params
                .split_once(['x', 'X', ','])
                .ok_or_else(|| anyhow!("rectangle `{params}` must look like `<w>x<h>`"))?;
            Ok(ShapeBuilder::rectangle(
                number(w, "width")?,
                number(h, "height")?,
            ))
        }
    }
}

/// One `name=value[:visibility]` attribute.
pub fn attribute(token: &str) -> Result<(String, FieldValue, Visibility)> {
    let (name, rest) = token
        .split_once('=')
        .ok_or_else(|| anyhow!("attribute `{token}` must look like `name=value`"))?;
    let (value, visibility) = match rest.rsplit_once(':') {
        Some((value, vis)) => match vis.parse::<Visibility>() {
            Ok(vis) => (value, vis),
            // a colon that is part of the value
            Err(_) => (rest, Visibility::Private),
        },
        None => (rest, Visibility::Private),
    };
    let value = match value.trim().parse::<f64>() {
        Ok(x) => FieldValue::Number(x),
        Err(_) => FieldValue::Text(value.to_string()),
    };
    Ok((name.trim().to_string(), value, visibility))
}

fn number(text: &str, field: &str) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .with_context(|| format!("{field} `{text}` is not a number"))
}
