//! The string-escaping capability the renderer delegates to.
//!
//! The core never sanitizes escaped output further, so the [`Escape`]
//! implementation must neutralize everything the target dialect treats as
//! special inside a single-quoted literal: quotes, backslashes, and control
//! characters at minimum.

/// Driver/dialect-specific string escaping.
///
/// Implementations must be stateless string transforms so a single engine
/// instance can serve concurrent callers.
pub trait Escape: Send + Sync {
    /// Escape `raw` for embedding inside a single-quoted SQL literal.
    fn escape(&self, raw: &str) -> String;
}

/// MySQL-compatible escaping, equivalent to `mysql_real_escape_string`
/// under a non-multibyte-unsafe connection charset.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlEscape;

impl Escape for MySqlEscape {
    fn escape(&self, raw: &str) -> String {
        let mut out = String::with_capacity(raw.len());
        for ch in raw.chars() {
            match ch {
                '\0' => out.push_str("\\0"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\\' => out.push_str("\\\\"),
                '\'' => out.push_str("\\'"),
                '"' => out.push_str("\\\""),
                '\x1a' => out.push_str("\\Z"),
                _ => out.push(ch),
            }
        }
        out
    }
}
