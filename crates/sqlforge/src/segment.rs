//! Splitting a validated template into plain and conditional-block segments.

use crate::error::{TemplateError, TemplateResult};

/// Whether a segment always renders or may be skipped as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Text outside any `{}` span; always rendered.
    Plain,
    /// The inner text of a top-level `{}` span; omitted when the skip
    /// marker appears among the arguments it would consume.
    ConditionalBlock,
}

/// One ordered piece of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub kind: SegmentKind,
    /// For blocks, the text between the braces (braces excluded).
    pub text: &'a str,
}

impl<'a> Segment<'a> {
    fn plain(text: &'a str) -> Self {
        Self {
            kind: SegmentKind::Plain,
            text,
        }
    }

    fn block(text: &'a str) -> Self {
        Self {
            kind: SegmentKind::ConditionalBlock,
            text,
        }
    }
}

/// Split a validated template into ordered segments.
///
/// Top-level `{...}` spans become [`SegmentKind::ConditionalBlock`] segments;
/// the text before, between, and after them becomes [`SegmentKind::Plain`]
/// segments. Whitespace-only segments are dropped entirely so they never
/// consume arguments. Blocks nest a single level only; a `{` inside a block
/// is rejected rather than mis-parsed.
pub fn split(template: &str) -> TemplateResult<Vec<Segment<'_>>> {
    let mut segments = Vec::new();
    if !template.contains('{') {
        push_if_nonblank(&mut segments, Segment::plain(template));
        return Ok(segments);
    }

    let mut rest = 0;
    let mut iter = template.char_indices();
    while let Some((at, c)) = iter.next() {
        match c {
            '{' => {
                push_if_nonblank(&mut segments, Segment::plain(&template[rest..at]));
                let content_start = at + 1;
                let mut content_end = None;
                for (inner_at, inner) in iter.by_ref() {
                    match inner {
                        '}' => {
                            content_end = Some(inner_at);
                            break;
                        }
                        '{' => {
                            return Err(TemplateError::Syntax {
                                excerpt: "{".to_string(),
                                position: template[..inner_at].chars().count(),
                                query: template.to_string(),
                            });
                        }
                        _ => {}
                    }
                }
                // The balanced-structure pass admits a brace hidden in a
                // quoted span; the splitter does not look inside quotes, so
                // surface it as an unclosed-brace failure.
                let Some(content_end) = content_end else {
                    return Err(TemplateError::BracesOrQuotes {
                        query: template.to_string(),
                    });
                };
                push_if_nonblank(
                    &mut segments,
                    Segment::block(&template[content_start..content_end]),
                );
                rest = content_end + 1;
            }
            '}' => {
                return Err(TemplateError::BracesOrQuotes {
                    query: template.to_string(),
                });
            }
            _ => {}
        }
    }
    push_if_nonblank(&mut segments, Segment::plain(&template[rest..]));
    Ok(segments)
}

fn push_if_nonblank<'a>(segments: &mut Vec<Segment<'a>>, segment: Segment<'a>) {
    if !segment.text.trim().is_empty() {
        segments.push(segment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_blocks_is_one_plain_segment() {
        let segments = split("SELECT * FROM users").unwrap();
        assert_eq!(segments, vec![Segment::plain("SELECT * FROM users")]);
    }

    #[test]
    fn block_between_plain_text() {
        let segments = split("SELECT * FROM t WHERE a = ?{ AND b = ?d} ORDER BY a").unwrap();
        assert_eq!(
            segments,
            vec![
                Segment::plain("SELECT * FROM t WHERE a = ?"),
                Segment::block(" AND b = ?d"),
                Segment::plain(" ORDER BY a"),
            ]
        );
    }

    #[test]
    fn trailing_block() {
        let segments = split("SELECT name FROM users WHERE id = ?d{ AND block = ?d}").unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[1], Segment::block(" AND block = ?d"));
    }

    #[test]
    fn multiple_blocks_stay_ordered() {
        let segments = split("a {b} c {d} e").unwrap();
        let texts: Vec<_> = segments.iter().map(|s| s.text).collect();
        assert_eq!(texts, vec!["a ", "b", " c ", "d", " e"]);
        assert_eq!(segments[1].kind, SegmentKind::ConditionalBlock);
        assert_eq!(segments[3].kind, SegmentKind::ConditionalBlock);
    }

    #[test]
    fn blank_segments_are_dropped() {
        let segments = split("{a}  {b}").unwrap();
        let texts: Vec<_> = segments.iter().map(|s| s.text).collect();
        assert_eq!(texts, vec!["a", "b"]);
    }

    #[test]
    fn empty_block_is_dropped() {
        let segments = split("SELECT 1 {} FROM t").unwrap();
        assert_eq!(segments.len(), 2);
        assert!(segments.iter().all(|s| s.kind == SegmentKind::Plain));
    }

    #[test]
    fn nested_block_is_rejected() {
        match split("a {b {c} d} e") {
            Err(TemplateError::Syntax { position, .. }) => assert_eq!(position, 5),
            other => panic!("expected syntax error, got {other:?}"),
        }
    }

    #[test]
    fn whole_whitespace_template_yields_no_segments() {
        assert!(split("   ").unwrap().is_empty());
    }
}
