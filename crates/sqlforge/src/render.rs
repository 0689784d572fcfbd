//! Type-checking and rendering of one argument against one placeholder kind.

use crate::error::{TemplateError, TemplateResult};
use crate::escape::Escape;
use crate::placeholder::PlaceholderKind;
use crate::value::{Scalar, Value};

/// Render `value` for a placeholder of `kind`, producing the literal SQL
/// fragment that replaces the token.
pub fn render(kind: PlaceholderKind, value: &Value, escaper: &dyn Escape) -> TemplateResult<String> {
    check_allowed(kind, value)?;
    match kind {
        PlaceholderKind::Int | PlaceholderKind::Float | PlaceholderKind::Mixed => {
            render_scalar_value(value, escaper)
        }
        PlaceholderKind::Array => render_array(value, escaper),
        PlaceholderKind::Identifier => render_identifier(value),
    }
}

/// Allowed argument variants per placeholder kind:
///
/// | kind | variants |
/// |---|---|
/// | `?d` | Int, Null, Bool |
/// | `?f` | Int, Float, Null |
/// | `?a` | List, Map |
/// | `?#` | String, List of strings |
/// | `?`  | Int, Float, String, Bool, Null |
fn check_allowed(kind: PlaceholderKind, value: &Value) -> TemplateResult<()> {
    let allowed = match kind {
        PlaceholderKind::Int => {
            matches!(value, Value::Int(_) | Value::Null | Value::Bool(_))
        }
        PlaceholderKind::Float => {
            matches!(value, Value::Int(_) | Value::Float(_) | Value::Null)
        }
        PlaceholderKind::Array => matches!(value, Value::List(_) | Value::Map(_)),
        PlaceholderKind::Identifier => matches!(value, Value::String(_) | Value::List(_)),
        PlaceholderKind::Mixed => !matches!(value, Value::List(_) | Value::Map(_)),
    };
    if allowed {
        Ok(())
    } else {
        Err(TemplateError::ParameterActualType {
            actual: value.kind_name(),
            parameter: kind.token(),
        })
    }
}

/// Render a scalar-variant [`Value`]. List/Map variants are already filtered
/// out by the kind check; reaching one here is an internal inconsistency.
fn render_scalar_value(value: &Value, escaper: &dyn Escape) -> TemplateResult<String> {
    match value {
        Value::Null => Ok("NULL".to_string()),
        Value::Bool(b) => Ok(if *b { "1" } else { "0" }.to_string()),
        Value::Int(i) => Ok(i.to_string()),
        Value::Float(f) => Ok(f.to_string()),
        Value::String(s) => Ok(quote_string(s, escaper)),
        other => Err(TemplateError::UnsupportedActualType {
            actual: other.kind_name(),
        }),
    }
}

fn render_scalar(scalar: &Scalar, escaper: &dyn Escape) -> String {
    match scalar {
        Scalar::Null => "NULL".to_string(),
        Scalar::Bool(b) => if *b { "1" } else { "0" }.to_string(),
        Scalar::Int(i) => i.to_string(),
        Scalar::Float(f) => f.to_string(),
        Scalar::String(s) => quote_string(s, escaper),
    }
}

fn quote_string(raw: &str, escaper: &dyn Escape) -> String {
    format!("'{}'", escaper.escape(raw))
}

/// A list renders its elements joined with `", "`; a map renders ordered
/// `` `key` = value `` pairs, keys validated as identifiers.
fn render_array(value: &Value, escaper: &dyn Escape) -> TemplateResult<String> {
    match value {
        Value::List(items) => Ok(items
            .iter()
            .map(|item| render_scalar(item, escaper))
            .collect::<Vec<_>>()
            .join(", ")),
        Value::Map(entries) => {
            let mut parts = Vec::with_capacity(entries.len());
            for (key, item) in entries {
                parts.push(format!(
                    "{} = {}",
                    quote_identifier(key)?,
                    render_scalar(item, escaper)
                ));
            }
            Ok(parts.join(", "))
        }
        other => Err(TemplateError::UnsupportedActualType {
            actual: other.kind_name(),
        }),
    }
}

fn render_identifier(value: &Value) -> TemplateResult<String> {
    match value {
        Value::String(s) => quote_identifier(s),
        Value::List(items) => {
            let mut parts = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Scalar::String(s) => parts.push(quote_identifier(s)?),
                    other => {
                        return Err(TemplateError::ParameterActualType {
                            actual: other.kind_name(),
                            parameter: PlaceholderKind::Identifier.token(),
                        });
                    }
                }
            }
            Ok(parts.join(", "))
        }
        other => Err(TemplateError::UnsupportedActualType {
            actual: other.kind_name(),
        }),
    }
}

/// Validate an identifier against `[0-9a-zA-Z$_]+` and wrap it in backticks.
fn quote_identifier(identifier: &str) -> TemplateResult<String> {
    let valid = !identifier.is_empty()
        && identifier
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '$' || c == '_');
    if !valid {
        return Err(TemplateError::WrongIdentifier {
            identifier: identifier.to_string(),
        });
    }
    Ok(format!("`{identifier}`"))
}
