//! # sqlforge
//!
//! An injection-safe SQL template builder: typed placeholders, conditional
//! sub-clauses, and literal value embedding with driver-delegated escaping.
//!
//! ## Features
//!
//! - **Typed placeholders**: `?d` (int), `?f` (float), `?a` (list/set),
//!   `?#` (identifier), `?` (any scalar) — each argument is type-checked
//!   before it is rendered
//! - **Strict template grammar**: balanced braces/parentheses/brackets and
//!   a placeholder-usage linter reject malformed templates up front
//! - **Conditional blocks**: a `{...}` span is dropped as a whole when the
//!   engine's skip marker appears among the arguments it would consume
//! - **Injection safety**: strings are always escaped and single-quoted,
//!   identifiers are charset-checked and backtick-quoted
//! - **Pluggable escaping**: the [`Escape`] trait seam accepts any
//!   driver-specific escaper; [`MySqlEscape`] ships as the default
//!
//! ## Example
//!
//! ```
//! use sqlforge::{TemplateEngine, Value};
//!
//! let engine = TemplateEngine::mysql();
//!
//! let sql = engine.build_query(
//!     "UPDATE users SET ?a WHERE user_id = ?d",
//!     &[Value::map([("name", "Jack"), ("email", "j@example.com")]), Value::Int(3)],
//! )?;
//! assert_eq!(
//!     sql,
//!     "UPDATE users SET `name` = 'Jack', `email` = 'j@example.com' WHERE user_id = 3",
//! );
//!
//! // A block vanishes when the skip marker lands in its argument slice.
//! let sql = engine.build_query(
//!     "SELECT name FROM users WHERE id = ?d {AND block = ?d}",
//!     &[Value::Int(1), Value::String(engine.skip_marker().to_string())],
//! )?;
//! assert_eq!(sql, "SELECT name FROM users WHERE id = 1 ");
//! # Ok::<(), sqlforge::TemplateError>(())
//! ```

pub mod assemble;
pub mod engine;
pub mod error;
pub mod escape;
pub mod params;
pub mod placeholder;
pub mod render;
pub mod segment;
pub mod validate;
pub mod value;

pub use engine::TemplateEngine;
pub use error::{TemplateError, TemplateResult};
pub use escape::{Escape, MySqlEscape};
pub use placeholder::{Placeholder, PlaceholderKind};
pub use segment::{Segment, SegmentKind};
pub use value::{Scalar, Value};
