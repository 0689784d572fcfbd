//! Error types for sqlforge

use thiserror::Error;

/// Result type alias for template-building operations
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Error types for template validation and rendering
///
/// Every variant is fatal to the current `build_query` call; no partial SQL
/// text is ever returned alongside an error.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template fails the global balanced-structure grammar
    #[error("Unclosed braces or quotes found. Query: \"{query}\"")]
    BracesOrQuotes { query: String },

    /// A malformed placeholder or IN/SET/assignment misuse was detected
    #[error("Syntax error near \"{excerpt}\" at position {position}. Query: \"{query}\"")]
    Syntax {
        excerpt: String,
        position: usize,
        query: String,
    },

    /// A segment's placeholder count does not match its argument slice
    #[error("Wrong arguments count. Arguments count: {args}, parameters count: {params}. Query: \"{query}\"")]
    WrongArgumentsCount {
        args: usize,
        params: usize,
        query: String,
    },

    /// Placeholder suffix outside the fixed kind set
    #[error("Unknown parameter type {parameter}.")]
    UnknownParameterType { parameter: String },

    /// Argument's runtime variant not allowed for its placeholder kind
    #[error("Unsupported type {actual} for parameter {parameter}.")]
    ParameterActualType {
        actual: &'static str,
        parameter: &'static str,
    },

    /// Identifier string fails the charset check
    #[error("Wrong identifier \"{identifier}\".")]
    WrongIdentifier { identifier: String },

    /// Scalar renderer received an unrenderable variant
    #[error("Unsupported argument type {actual}.")]
    UnsupportedActualType { actual: &'static str },
}

impl TemplateError {
    /// Check if this is a syntax error (either validation phase)
    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::BracesOrQuotes { .. } | Self::Syntax { .. })
    }

    /// Check if this is an argument type mismatch
    pub fn is_type_mismatch(&self) -> bool {
        matches!(
            self,
            Self::ParameterActualType { .. } | Self::UnsupportedActualType { .. }
        )
    }
}
