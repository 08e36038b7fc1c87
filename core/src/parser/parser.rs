//! Recursive descent over a forward-only character cursor.
//!
//! Grammar, in prefix notation:
//!
//! ```text
//! term := '$' integer                  variable (de Bruijn index)
//!       | integer | '-' integer        numeric literal
//!       | '@' SP term SP term          application
//!       | '\' SP term                  abstraction
//!       | '+' SP term SP term          addition
//!       | '?' SP term SP term SP term  conditional
//! SP   := exactly one space
//! ```
//!
//! The cursor never backtracks and looks at most one character ahead.

use crate::arena::Arena;
use crate::parser::{ParseError, ParseErrorKind, Span};
use crate::term::Term;

/// Default limit on term nesting, see [`parse_with_max_depth`].
///
/// Fits a 2 MiB thread stack in a debug build.
pub const DEFAULT_MAX_DEPTH: usize = 1_000;

/// Parse the first term of `source`, ignoring anything after it.
pub fn parse<'a>(arena: &'a Arena, source: &str) -> Result<&'a Term<'a>, ParseError> {
    parse_with_max_depth(arena, source, DEFAULT_MAX_DEPTH)
}

/// Parse the first term of `source` with a custom nesting limit.
///
/// Every operator nests one level, so `max_depth` also bounds the native
/// stack the parser (and a later render) needs.
pub fn parse_with_max_depth<'a>(
    arena: &'a Arena,
    source: &str,
    max_depth: usize,
) -> Result<&'a Term<'a>, ParseError> {
    Parser::new(arena, source)
        .with_max_depth(max_depth)
        .parse_term()
}

/// Parse `source` as exactly one term; trailing input is an error.
pub fn parse_complete<'a>(
    arena: &'a Arena,
    source: &str,
    max_depth: usize,
) -> Result<&'a Term<'a>, ParseError> {
    let mut parser = Parser::new(arena, source).with_max_depth(max_depth);
    let term = parser.parse_term()?;
    parser.finish()?;
    Ok(term)
}

pub struct Parser<'a, 's> {
    arena: &'a Arena,
    source: &'s str,
    /// Byte offset of the next unread character.
    pos: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a, 's> Parser<'a, 's> {
    pub fn new(arena: &'a Arena, source: &'s str) -> Self {
        Self {
            arena,
            source,
            pos: 0,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Byte offset of the next unread character.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Check that the whole input has been consumed.
    pub fn finish(&self) -> Result<(), ParseError> {
        match self.peek() {
            None => Ok(()),
            Some(found) => Err(self.error_here(ParseErrorKind::TrailingInput { found })),
        }
    }

    pub fn parse_term(&mut self) -> Result<&'a Term<'a>, ParseError> {
        if self.depth >= self.max_depth {
            return Err(self.error_here(ParseErrorKind::MaxDepthExceeded {
                max_depth: self.max_depth,
            }));
        }

        self.depth += 1;
        let result = self.parse_term_inner();
        self.depth -= 1;

        if self.depth == 0 {
            if let Ok(term) = &result {
                tracing::debug!(nodes = term.size(), consumed = self.pos, "Parsed term");
            }
        }
        result
    }

    fn parse_term_inner(&mut self) -> Result<&'a Term<'a>, ParseError> {
        let start = self.pos;
        let term = match self.peek() {
            None => {
                return Err(self.error_here(ParseErrorKind::UnexpectedEof { expected: "a term" }));
            }
            Some('$') => {
                self.pop("a variable")?;
                Term::Var(self.parse_index(start)?)
            }
            Some('-') => {
                self.pop("a number")?;
                let magnitude = self.parse_int(start)?;
                Term::Num(self.negate(magnitude, start)?)
            }
            Some(c) if c.is_ascii_digit() => {
                let value = self.parse_int(start)?;
                Term::Num(self.to_i64(value, start)?)
            }
            Some('@') => {
                let (fun, arg) = self.parse_binary()?;
                Term::App(fun, arg)
            }
            Some('+') => {
                let (left, right) = self.parse_binary()?;
                Term::Add(left, right)
            }
            Some('\\') => {
                self.pop("an abstraction")?;
                self.space()?;
                Term::Lam(self.parse_term()?)
            }
            Some('?') => {
                self.pop("a conditional")?;
                self.space()?;
                let cond = self.parse_term()?;
                self.space()?;
                let then_branch = self.parse_term()?;
                self.space()?;
                let else_branch = self.parse_term()?;
                Term::If {
                    cond,
                    then_branch,
                    else_branch,
                }
            }
            Some(found) => {
                return Err(self.error_here(ParseErrorKind::UnexpectedChar { found }));
            }
        };
        self.arena
            .alloc_term(term)
            .map_err(|e| self.error(e.into(), Span::new(start, self.pos)))
    }

    /// Operator character, then two space-separated operands.
    fn parse_binary(&mut self) -> Result<(&'a Term<'a>, &'a Term<'a>), ParseError> {
        self.pop("an operator")?;
        self.space()?;
        let left = self.parse_term()?;
        self.space()?;
        let right = self.parse_term()?;
        Ok((left, right))
    }

    /// Unsigned decimal digits. No digits at all reads as zero.
    fn parse_int(&mut self, start: usize) -> Result<u64, ParseError> {
        let mut value: u64 = 0;
        while let Some(c) = self.peek().filter(char::is_ascii_digit) {
            self.pos += 1;
            let digit = u64::from(c as u8 - b'0');
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(digit))
                .ok_or_else(|| self.overflow(start))?;
        }
        Ok(value)
    }

    fn parse_index(&mut self, start: usize) -> Result<usize, ParseError> {
        let value = self.parse_int(start)?;
        usize::try_from(value).map_err(|_| self.overflow(start))
    }

    fn to_i64(&self, magnitude: u64, start: usize) -> Result<i64, ParseError> {
        i64::try_from(magnitude).map_err(|_| self.overflow(start))
    }

    /// `-9223372036854775808` is representable even though its magnitude
    /// is not, so negate in the unsigned domain.
    fn negate(&self, magnitude: u64, start: usize) -> Result<i64, ParseError> {
        0i64.checked_sub_unsigned(magnitude)
            .ok_or_else(|| self.overflow(start))
    }

    fn space(&mut self) -> Result<(), ParseError> {
        match self.pop("a space")? {
            ' ' => Ok(()),
            found => Err(self.error(
                ParseErrorKind::ExpectedSpace { found },
                Span::new(self.pos - found.len_utf8(), self.pos),
            )),
        }
    }

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn pop(&mut self, expected: &'static str) -> Result<char, ParseError> {
        match self.peek() {
            Some(c) => {
                self.pos += c.len_utf8();
                Ok(c)
            }
            None => Err(self.error_here(ParseErrorKind::UnexpectedEof { expected })),
        }
    }

    fn overflow(&self, start: usize) -> ParseError {
        self.error(ParseErrorKind::IntegerOverflow, Span::new(start, self.pos))
    }

    /// Error pointing at the next unread character (or the end of input).
    fn error_here(&self, kind: ParseErrorKind) -> ParseError {
        let end = self.peek().map_or(self.pos, |c| self.pos + c.len_utf8());
        self.error(kind, Span::new(self.pos, end))
    }

    fn error(&self, kind: ParseErrorKind, span: Span) -> ParseError {
        ParseError::new(kind, span, self.source)
    }
}
