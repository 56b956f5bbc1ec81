//! Inner-markup extraction for icon SVG documents.

use crate::error::{SvgError, SvgErrorKind};
use crate::lexer::{tag_name, MarkupKind, MarkupLexer, MarkupToken};

const ROOT_TAG: &str = "svg";

/// Returns the drawable markup between the root `<svg ...>` and `</svg>`.
///
/// Every direct child of the root becomes one piece, taken verbatim from
/// the source from its opening tag to its matching close, and the pieces
/// are joined with a single space. The usual one-element-per-line layout
/// collapses to `<path d="..." /> <path d="..." />`. Attributes, quoting,
/// element order and the contents of nested elements are passed through
/// unchanged; only line breaks and the indentation around them are folded.
///
/// Fails if there is no `<svg>` element, if it is never closed, or if it
/// contains another `<svg>`: the result must never contain `<svg`.
pub fn extract_inner(document: &str) -> Result<String, SvgError> {
    let mut lexer = MarkupLexer::new(document);

    let root = find_root(&mut lexer, document)?;
    if root.kind == MarkupKind::SelfClosingTag {
        return Ok(String::new());
    }

    let mut open: Vec<(&str, usize)> = Vec::new();
    let mut parts: Vec<String> = Vec::new();

    for token in lexer.by_ref() {
        let text = &document[token.span.clone()];
        match token.kind {
            MarkupKind::Error => {
                return Err(invalid_markup(text, token.span.start));
            }
            MarkupKind::OpenTag | MarkupKind::SelfClosingTag if tag_name(text) == ROOT_TAG => {
                return Err(SvgError::new(SvgErrorKind::NestedRoot, token.span.start));
            }
            MarkupKind::OpenTag => open.push((tag_name(text), token.span.start)),
            MarkupKind::CloseTag => {
                let name = tag_name(text);
                match open.pop() {
                    Some((expected, start)) if expected == name => {
                        if open.is_empty() {
                            parts.push(fold_lines(&document[start..token.span.end]));
                        }
                    }
                    Some((expected, _)) => {
                        return Err(SvgError::new(
                            SvgErrorKind::MismatchedClosingTag {
                                expected: expected.to_string(),
                                found: name.to_string(),
                            },
                            token.span.start,
                        ));
                    }
                    None if name == ROOT_TAG => return Ok(parts.join(" ")),
                    None => {
                        return Err(SvgError::new(
                            SvgErrorKind::MismatchedClosingTag {
                                expected: ROOT_TAG.to_string(),
                                found: name.to_string(),
                            },
                            token.span.start,
                        ));
                    }
                }
            }
            // Nested content is emitted with its parent.
            _ if !open.is_empty() => {}
            MarkupKind::Text => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    parts.push(fold_lines(trimmed));
                }
            }
            MarkupKind::SelfClosingTag | MarkupKind::Comment => parts.push(fold_lines(text)),
            MarkupKind::Declaration | MarkupKind::Doctype => {}
        }
    }

    match open.pop() {
        Some((tag_name, offset)) => Err(SvgError::new(
            SvgErrorKind::UnclosedTag {
                tag_name: tag_name.to_string(),
            },
            offset,
        )),
        None => Err(SvgError::new(SvgErrorKind::UnclosedRoot, root.span.start)),
    }
}

/// Skips the prolog and returns the root `<svg>` token.
fn find_root(lexer: &mut MarkupLexer<'_>, document: &str) -> Result<MarkupToken, SvgError> {
    for token in lexer.by_ref() {
        let text = &document[token.span.clone()];
        match token.kind {
            MarkupKind::OpenTag | MarkupKind::SelfClosingTag if tag_name(text) == ROOT_TAG => {
                return Ok(token);
            }
            MarkupKind::Error => return Err(invalid_markup(text, token.span.start)),
            _ => {}
        }
    }
    Err(SvgError::new(SvgErrorKind::MissingRoot, document.len()))
}

/// Removes line breaks and the indentation around them.
///
/// A break right after a tag or right before one disappears; any other
/// break (between attributes or words) becomes one space.
fn fold_lines(markup: &str) -> String {
    let trimmed = markup.trim();
    if !trimmed.contains('\n') {
        return trimmed.to_string();
    }

    let mut folded = String::with_capacity(trimmed.len());
    for line in trimmed.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if !folded.is_empty() && !folded.ends_with('>') && !line.starts_with('<') {
            folded.push(' ');
        }
        folded.push_str(line);
    }
    folded
}

fn invalid_markup(text: &str, offset: usize) -> SvgError {
    SvgError::new(
        SvgErrorKind::InvalidMarkup {
            snippet: text.chars().take(16).collect(),
        },
        offset,
    )
}
