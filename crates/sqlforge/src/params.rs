//! Pairing placeholders with arguments and substituting rendered text.

use crate::error::TemplateResult;
use crate::escape::Escape;
use crate::placeholder::Placeholder;
use crate::render::render;
use crate::value::Value;

/// The literal SQL fragment replacing one placeholder token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedParam {
    /// Raw token text as it appears in the segment.
    pub raw: String,
    /// Rendered replacement text.
    pub text: String,
}

/// Render each token against the argument at the same index, preserving
/// order. The first renderer error aborts the whole build.
pub fn build_params(
    tokens: &[Placeholder],
    args: &[Value],
    escaper: &dyn Escape,
) -> TemplateResult<Vec<RenderedParam>> {
    debug_assert_eq!(tokens.len(), args.len());
    tokens
        .iter()
        .zip(args)
        .map(|(token, arg)| {
            Ok(RenderedParam {
                raw: token.raw.clone(),
                text: render(token.kind, arg, escaper)?,
            })
        })
        .collect()
}

/// Substitute rendered parameters into a segment's text.
///
/// Each parameter replaces the first occurrence of its raw token at or after
/// the end of the previous replacement, compared case-insensitively. The
/// forward cursor makes repeated identical tokens resolve positionally and
/// keeps rendered output from ever being re-matched.
pub fn substitute(text: &str, params: &[RenderedParam]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for param in params {
        // Tokens come from scanning this same text, so a miss cannot happen
        // in practice; the remaining text is kept verbatim if it does.
        let Some(at) = find_ascii_ci(text, &param.raw, cursor) else {
            continue;
        };
        out.push_str(&text[cursor..at]);
        out.push_str(&param.text);
        cursor = at + param.raw.len();
    }
    out.push_str(&text[cursor..]);
    out
}

/// Byte-wise ASCII case-insensitive search. Tokens are pure ASCII, so any
/// match position is a valid char boundary.
fn find_ascii_ci(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    let hay = haystack.as_bytes();
    let needle = needle.as_bytes();
    if needle.is_empty() || from + needle.len() > hay.len() {
        return None;
    }
    (from..=hay.len() - needle.len())
        .find(|&i| hay[i..i + needle.len()].eq_ignore_ascii_case(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(raw: &str, text: &str) -> RenderedParam {
        RenderedParam {
            raw: raw.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn substitutes_in_order() {
        let out = substitute(
            "SELECT ?# FROM t WHERE a = ?d",
            &[param("?#", "`name`"), param("?d", "5")],
        );
        assert_eq!(out, "SELECT `name` FROM t WHERE a = 5");
    }

    #[test]
    fn repeated_tokens_resolve_positionally() {
        let out = substitute(
            "WHERE a = ?d AND b = ?d",
            &[param("?d", "1"), param("?d", "2")],
        );
        assert_eq!(out, "WHERE a = 1 AND b = 2");
    }

    #[test]
    fn substitution_is_case_insensitive() {
        let out = substitute("WHERE a = ?D", &[param("?d", "7")]);
        assert_eq!(out, "WHERE a = 7");
    }

    #[test]
    fn rendered_text_is_never_rematched() {
        // The first replacement contains a token-shaped string; the second
        // parameter must land on the original second token.
        let out = substitute(
            "a = ? AND b = ?",
            &[param("?", "'?'"), param("?", "2")],
        );
        assert_eq!(out, "a = '?' AND b = 2");
    }

    #[test]
    fn bare_token_before_suffixed_token() {
        let out = substitute(
            "a = ? AND b = ?d",
            &[param("?", "'x'"), param("?d", "3")],
        );
        assert_eq!(out, "a = 'x' AND b = 3");
    }
}
