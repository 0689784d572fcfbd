//! Orchestration: validation, splitting, per-segment slicing, and rendering.

use crate::error::{TemplateError, TemplateResult};
use crate::escape::Escape;
use crate::params::{build_params, substitute};
use crate::placeholder::scan;
use crate::segment::{SegmentKind, split};
use crate::value::Value;

/// Assemble a template and its positional arguments into final SQL text.
///
/// Arguments are consumed strictly left to right, one per placeholder,
/// across all segments. A conditional block whose argument slice contains
/// the skip marker is omitted from the output but still consumes its slice,
/// so later segments see the same offsets either way.
pub fn assemble(
    template: &str,
    args: &[Value],
    skip_marker: &str,
    escaper: &dyn Escape,
) -> TemplateResult<String> {
    crate::validate::validate(template)?;
    let segments = split(template)?;

    let mut out = String::with_capacity(template.len());
    let mut cursor = 0usize;
    for segment in &segments {
        let tokens = scan(segment.text)?;
        let remaining = args.len() - cursor;
        if remaining < tokens.len() {
            return Err(TemplateError::WrongArgumentsCount {
                args: remaining,
                params: tokens.len(),
                query: template.to_string(),
            });
        }
        let slice = &args[cursor..cursor + tokens.len()];
        cursor += tokens.len();

        if segment.kind == SegmentKind::ConditionalBlock
            && slice.iter().any(|arg| arg.as_str() == Some(skip_marker))
        {
            tracing::trace!(text = segment.text, tokens = tokens.len(), "block skipped");
            continue;
        }

        tracing::trace!(
            kind = ?segment.kind,
            tokens = tokens.len(),
            "rendering segment"
        );
        let rendered = build_params(&tokens, slice, escaper)?;
        out.push_str(&substitute(segment.text, &rendered));
    }

    // Leftover arguments are an error just like a shortage.
    if cursor != args.len() {
        return Err(TemplateError::WrongArgumentsCount {
            args: args.len(),
            params: cursor,
            query: template.to_string(),
        });
    }
    Ok(out)
}
