//! Whole-template grammar and placeholder-usage linting.
//!
//! Validation runs in two passes. The first is a recursive-descent scan that
//! checks the balanced-delimiter grammar over `{}`, `()`, `[]` and
//! single-quoted spans (quoted spans are opaque literals, no recursion
//! inside). The second is a rule-based linter that rejects malformed
//! placeholder shapes and `IN`/`SET`/assignment misuse before any argument
//! is looked at.

use std::iter::Peekable;
use std::str::Chars;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{TemplateError, TemplateResult};

/// Validate a template's structure and placeholder usage.
///
/// Both passes are read-only; the linter only runs once the balanced
/// grammar has been accepted.
pub fn validate(template: &str) -> TemplateResult<()> {
    if !balanced(template) {
        return Err(TemplateError::BracesOrQuotes {
            query: template.to_string(),
        });
    }
    lint(template)
}

// ── Pass 1: balanced-structure grammar ──────────────────────────────────────

fn balanced(template: &str) -> bool {
    let mut chars = template.chars().peekable();
    scan_group(&mut chars, None)
}

/// Consume text up to (and including) `closer`, recursing into nested
/// bracket groups. `None` means top level, which must consume everything.
fn scan_group(chars: &mut Peekable<Chars>, closer: Option<char>) -> bool {
    while let Some(&c) = chars.peek() {
        match c {
            '}' | ')' | ']' => {
                if Some(c) == closer {
                    chars.next();
                    return true;
                }
                // Unmatched closer at this level.
                return false;
            }
            '{' => {
                chars.next();
                if !scan_group(chars, Some('}')) {
                    return false;
                }
            }
            '(' => {
                chars.next();
                if !scan_group(chars, Some(')')) {
                    return false;
                }
            }
            '[' => {
                chars.next();
                if !scan_group(chars, Some(']')) {
                    return false;
                }
            }
            '\'' => {
                chars.next();
                if !skip_quoted(chars) {
                    return false;
                }
            }
            _ => {
                chars.next();
            }
        }
    }
    closer.is_none()
}

/// Consume an opaque single-quoted span after its opening quote.
fn skip_quoted(chars: &mut Peekable<Chars>) -> bool {
    for c in chars.by_ref() {
        if c == '\'' {
            return true;
        }
    }
    false
}

// ── Pass 2: syntax-rule linter ──────────────────────────────────────────────

fn syntax_rules() -> &'static [Regex] {
    static RULES: OnceLock<Vec<Regex>> = OnceLock::new();
    RULES.get_or_init(|| {
        [
            // Malformed placeholder shape: a placeholder with trailing
            // non-separator characters, text glued to the left of a `?`,
            // or `?` followed by an unknown suffix run.
            r"(?i)\?[dfa#]?[^\s)}]{2,}|[^\s{($]+\?[dfa#]?|\?[^dfa#\s)}]+",
            // Placeholder directly after IN; only `IN (?a)` is permitted.
            r"(?i)\bIN\s+\?[dfa#]?",
            // Parenthesized non-array placeholder after IN.
            r"(?i)\bIN\s+\(\?[df#]\)",
            // Typed non-identifier placeholder directly before IN.
            r"(?i)\?[dfa]\s+IN\b",
            // Non-array placeholder directly after SET.
            r"(?i)\bSET\s+\?[^a\s]",
            // Assignment with trailing garbage on the placeholder.
            r"(?i)`?[0-9a-z$_]+`?\s?=\s?\?(?:[dfa#][^\s)}]+|[^dfa#\s)}][^\s)}]*)",
        ]
        .iter()
        .map(|pat| Regex::new(pat).expect("invalid built-in syntax rule"))
        .collect()
    })
}

fn lint(template: &str) -> TemplateResult<()> {
    // Report the leftmost offending excerpt across all rules; ties go to
    // the earlier rule.
    let mut first: Option<regex::Match> = None;
    for rule in syntax_rules() {
        if let Some(m) = rule.find(template)
            && first.is_none_or(|f| m.start() < f.start())
        {
            first = Some(m);
        }
    }
    match first {
        Some(m) => Err(TemplateError::Syntax {
            excerpt: m.as_str().to_string(),
            position: template[..m.start()].chars().count(),
            query: template.to_string(),
        }),
        None => Ok(()),
    }
}
