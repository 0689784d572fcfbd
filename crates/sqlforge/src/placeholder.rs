//! Placeholder token extraction.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{TemplateError, TemplateResult};

/// The typed kind of a placeholder token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaceholderKind {
    /// `?d` — integer conversion
    Int,
    /// `?f` — float conversion
    Float,
    /// `?a` — value list or `key = value` set
    Array,
    /// `?#` — backtick-quoted identifier or identifier list
    Identifier,
    /// `?` — any scalar, rendered by its own type
    Mixed,
}

impl PlaceholderKind {
    /// Parse a raw placeholder token. Suffixes are case-insensitive.
    pub fn parse(raw: &str) -> TemplateResult<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "?" => Ok(PlaceholderKind::Mixed),
            "?d" => Ok(PlaceholderKind::Int),
            "?f" => Ok(PlaceholderKind::Float),
            "?a" => Ok(PlaceholderKind::Array),
            "?#" => Ok(PlaceholderKind::Identifier),
            _ => Err(TemplateError::UnknownParameterType {
                parameter: raw.to_string(),
            }),
        }
    }

    /// Canonical token text for this kind.
    pub fn token(self) -> &'static str {
        match self {
            PlaceholderKind::Int => "?d",
            PlaceholderKind::Float => "?f",
            PlaceholderKind::Array => "?a",
            PlaceholderKind::Identifier => "?#",
            PlaceholderKind::Mixed => "?",
        }
    }
}

/// One placeholder occurrence within a segment's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub kind: PlaceholderKind,
    /// Exact substring as written, kept for positional substitution
    /// (e.g. `?D` stays `?D`).
    pub raw: String,
    /// Character offset within the segment text.
    pub position: usize,
}

fn token_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)(\?[dfa#]?)([\s)}]|$)").expect("invalid built-in placeholder pattern")
    })
}

/// Extract every well-formed placeholder from a segment's text, in order.
///
/// A placeholder counts only when bounded by whitespace, `)`, `}`, or end of
/// text. The input has already passed the syntax linter, so an unparseable
/// suffix here is an internal inconsistency and surfaces as
/// [`TemplateError::UnknownParameterType`].
pub fn scan(text: &str) -> TemplateResult<Vec<Placeholder>> {
    token_pattern()
        .captures_iter(text)
        .map(|caps| {
            let m = caps.get(1).expect("token group always present");
            Ok(Placeholder {
                kind: PlaceholderKind::parse(m.as_str())?,
                raw: m.as_str().to_string(),
                position: text[..m.start()].chars().count(),
            })
        })
        .collect()
}
