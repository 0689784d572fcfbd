//! The public facade: a configured engine with its skip marker.

use std::sync::Arc;

use uuid::Uuid;

use crate::assemble::assemble;
use crate::error::TemplateResult;
use crate::escape::{Escape, MySqlEscape};
use crate::value::Value;

/// Recognizable tag so a marker in a log or error is identifiable at a glance.
const SKIP_PREFIX: &str = "_SYSTEM_SKIP_";

/// A template engine bound to one escaper.
///
/// The skip marker is drawn from a secure random source once at construction
/// and never changes afterwards. Nothing else is mutable state, so a single
/// engine may serve concurrent callers as long as its escaper is a stateless
/// string transform.
///
/// # Example
/// ```
/// use sqlforge::{TemplateEngine, Value};
///
/// let engine = TemplateEngine::mysql();
/// let sql = engine.build_query(
///     "SELECT * FROM users WHERE id = ?d",
///     &[Value::Int(1)],
/// )?;
/// assert_eq!(sql, "SELECT * FROM users WHERE id = 1");
/// # Ok::<(), sqlforge::TemplateError>(())
/// ```
#[derive(Clone)]
pub struct TemplateEngine {
    skip: String,
    escaper: Arc<dyn Escape>,
}

impl TemplateEngine {
    /// Create an engine delegating to the given escaper.
    pub fn new(escaper: impl Escape + 'static) -> Self {
        Self {
            skip: generate_skip_marker(),
            escaper: Arc::new(escaper),
        }
    }

    /// Create an engine with the built-in MySQL escaper.
    pub fn mysql() -> Self {
        Self::new(MySqlEscape)
    }

    /// Build final SQL text from a template and positional arguments.
    ///
    /// Fails on the first validation, counting, or rendering error; no
    /// partial SQL is ever returned.
    pub fn build_query(&self, template: &str, args: &[Value]) -> TemplateResult<String> {
        tracing::debug!(template, args = args.len(), "building query");
        assemble(template, args, &self.skip, self.escaper.as_ref())
    }

    /// The sentinel that, placed among a conditional block's arguments,
    /// omits that block from the output.
    pub fn skip_marker(&self) -> &str {
        &self.skip
    }
}

impl std::fmt::Debug for TemplateEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The marker itself stays out of Debug output.
        f.debug_struct("TemplateEngine").finish_non_exhaustive()
    }
}

fn generate_skip_marker() -> String {
    // Two v4 UUIDs give 64 hex characters of CSPRNG output behind the tag.
    format!(
        "{SKIP_PREFIX}{}{}",
        Uuid::new_v4().simple(),
        Uuid::new_v4().simple()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_is_tagged_and_long() {
        let engine = TemplateEngine::mysql();
        let marker = engine.skip_marker();
        assert!(marker.starts_with(SKIP_PREFIX));
        assert_eq!(marker.len(), SKIP_PREFIX.len() + 64);
    }

    #[test]
    fn marker_is_unique_per_engine() {
        assert_ne!(
            TemplateEngine::mysql().skip_marker(),
            TemplateEngine::mysql().skip_marker()
        );
    }

    #[test]
    fn clone_shares_the_marker() {
        let engine = TemplateEngine::mysql();
        assert_eq!(engine.skip_marker(), engine.clone().skip_marker());
    }

    #[test]
    fn build_query_round_trip() {
        let engine = TemplateEngine::mysql();
        let sql = engine
            .build_query("SELECT * FROM users WHERE id = ?d", &[Value::Int(1)])
            .unwrap();
        assert_eq!(sql, "SELECT * FROM users WHERE id = 1");
    }
}
