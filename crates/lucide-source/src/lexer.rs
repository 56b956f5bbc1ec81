//! Markup lexer using logos.
//!
//! The lexer splits an SVG document into tag-level tokens. Attribute
//! contents are not tokenized further; a whole tag is one token so that it
//! can be passed through verbatim.

use logos::Logos;
use std::ops::Range;

/// A token produced by the markup lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupToken {
    /// The kind of token.
    pub kind: MarkupKind,
    /// Byte range of the token in the source.
    pub span: Range<usize>,
}

/// Token kinds for SVG markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Logos)]
pub enum MarkupKind {
    /// `<?xml ... ?>`
    #[regex(r"<\?([^?]|\?[^>])*\?>")]
    Declaration,

    /// `<!DOCTYPE ...>`
    #[regex(r"<![A-Za-z][^>]*>")]
    Doctype,

    /// `<!-- ... -->`
    #[regex(r"<!--([^-]|-[^-])*-->")]
    Comment,

    /// `<name attr="value">`
    #[regex(r#"<[A-Za-z][A-Za-z0-9_:.\-]*([^<>"'/]|"[^"]*"|'[^']*'|/[^>])*>"#, priority = 2)]
    OpenTag,

    /// `<name attr="value" />`
    #[regex(r#"<[A-Za-z][A-Za-z0-9_:.\-]*([^<>"'/]|"[^"]*"|'[^']*'|/[^>])*/>"#, priority = 3)]
    SelfClosingTag,

    /// `</name>`
    #[regex(r"</[A-Za-z][A-Za-z0-9_:.\-]*[ \t\r\n]*>")]
    CloseTag,

    /// Character data between tags.
    #[regex(r"[^<]+")]
    Text,

    /// Invalid/unknown token
    Error,
}

/// Returns the element name of a tag token's text.
///
/// `<circle cx="1"/>` and `</circle>` both yield `circle`.
pub fn tag_name(tag: &str) -> &str {
    let rest = tag
        .strip_prefix("</")
        .or_else(|| tag.strip_prefix('<'))
        .unwrap_or(tag);
    let end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '_' | ':' | '.' | '-')))
        .unwrap_or(rest.len());
    &rest[..end]
}

/// A lexer for SVG markup.
pub struct MarkupLexer<'src> {
    inner: logos::Lexer<'src, MarkupKind>,
}

impl<'src> MarkupLexer<'src> {
    /// Creates a new lexer for the given source.
    pub fn new(source: &'src str) -> Self {
        Self {
            inner: MarkupKind::lexer(source),
        }
    }
}

impl<'src> Iterator for MarkupLexer<'src> {
    type Item = MarkupToken;

    fn next(&mut self) -> Option<Self::Item> {
        let kind = match self.inner.next()? {
            Ok(kind) => kind,
            Err(()) => MarkupKind::Error,
        };
        Some(MarkupToken {
            kind,
            span: self.inner.span(),
        })
    }
}
