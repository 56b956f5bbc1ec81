//! Source error types.

use camino::Utf8PathBuf;
use thiserror::Error;

/// An error raised while reading an icon source file.
#[derive(Debug, Error)]
pub enum SourceError {
    /// A file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The file that failed.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A file that was expected to exist is absent.
    #[error("file not found: {0}")]
    NotFound(Utf8PathBuf),

    /// The SVG document has no well-formed `<svg>...</svg>` span.
    #[error("malformed SVG: {0}")]
    MalformedSvg(#[from] SvgError),

    /// A sidecar metadata file exists but cannot be parsed.
    #[error("malformed metadata in {path}: {source}")]
    MalformedMetadata {
        /// The metadata file.
        path: Utf8PathBuf,
        /// The JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// A name cannot be turned into an identifier.
    #[error("invalid identifier {name:?}: {reason}")]
    InvalidIdentifier {
        /// The offending name.
        name: String,
        /// Why it was rejected.
        reason: &'static str,
    },
}

impl SourceError {
    /// Returns true if this error means "the file does not exist".
    pub fn is_not_found(&self) -> bool {
        matches!(self, SourceError::NotFound(_))
    }
}

/// An error found while extracting the inner markup of an SVG document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at byte {offset}")]
pub struct SvgError {
    /// The kind of error.
    pub kind: SvgErrorKind,
    /// Byte offset into the document where the problem was detected.
    pub offset: usize,
}

impl SvgError {
    /// Creates a new SVG error.
    pub fn new(kind: SvgErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }
}

/// The kind of SVG extraction error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SvgErrorKind {
    /// No `<svg` opening tag in the document.
    #[error("no <svg> element found")]
    MissingRoot,

    /// The `<svg>` element is never closed.
    #[error("unclosed <svg> element")]
    UnclosedRoot,

    /// An `<svg>` element nested inside the root.
    #[error("nested <svg> element")]
    NestedRoot,

    /// A child element is never closed before `</svg>`.
    #[error("unclosed tag: <{tag_name}>")]
    UnclosedTag {
        /// The name of the unclosed tag.
        tag_name: String,
    },

    /// A closing tag does not match the open element.
    #[error("mismatched closing tag: expected </{expected}>, found </{found}>")]
    MismatchedClosingTag {
        /// The expected tag name.
        expected: String,
        /// The found tag name.
        found: String,
    },

    /// Markup the lexer could not recognise.
    #[error("invalid markup: {snippet:?}")]
    InvalidMarkup {
        /// The unrecognised text.
        snippet: String,
    },
}
