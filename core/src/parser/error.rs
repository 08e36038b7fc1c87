use crate::String;
use crate::arena::AllocError;
use crate::parser::Span;

/// Syntax error with the position of the character that triggered it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at offset {}", .span.start())]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    /// The full program text, kept for diagnostics.
    pub input: String,
}

/// Specific kinds of parse errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    /// Input ended where a character was required
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },

    /// A term cannot start with this character
    #[error("unexpected character {found:?}, expected a term")]
    UnexpectedChar { found: char },

    /// The single space between operands is missing
    #[error("expected a space, found {found:?}")]
    ExpectedSpace { found: char },

    /// Literal or index does not fit in 64 bits
    #[error("integer literal out of range")]
    IntegerOverflow,

    /// Something follows a complete top-level term
    #[error("unexpected {found:?} after the end of the term")]
    TrailingInput { found: char },

    /// Maximum nesting depth exceeded
    #[error("term nesting depth exceeds maximum of {max_depth} levels")]
    MaxDepthExceeded { max_depth: usize },

    /// The term pool ran out while building the tree
    #[error(transparent)]
    Alloc(#[from] AllocError),
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span, input: &str) -> Self {
        Self {
            kind,
            span,
            input: input.into(),
        }
    }

    /// Short identifier for the kind of error, for diagnostics.
    pub fn code(&self) -> &'static str {
        match self.kind {
            ParseErrorKind::UnexpectedEof { .. } => "P001",
            ParseErrorKind::UnexpectedChar { .. } => "P002",
            ParseErrorKind::ExpectedSpace { .. } => "P003",
            ParseErrorKind::IntegerOverflow => "P004",
            ParseErrorKind::TrailingInput { .. } => "P005",
            ParseErrorKind::MaxDepthExceeded { .. } => "P006",
            ParseErrorKind::Alloc(_) => "A001",
        }
    }

    /// Help text suggesting how to fix the input, if there is one.
    pub fn help(&self) -> Option<&'static str> {
        match self.kind {
            ParseErrorKind::UnexpectedEof { .. } => Some("the term is incomplete"),
            ParseErrorKind::UnexpectedChar { .. } => {
                Some("a term starts with one of `$ @ \\ + ? -` or a digit")
            }
            ParseErrorKind::ExpectedSpace { .. } => {
                Some("operands are separated by exactly one space")
            }
            ParseErrorKind::TrailingInput { .. } => Some("remove the extra input"),
            ParseErrorKind::MaxDepthExceeded { .. } => Some("reduce nesting"),
            ParseErrorKind::Alloc(_) => Some("raise the term pool capacity"),
            ParseErrorKind::IntegerOverflow => None,
        }
    }
}
