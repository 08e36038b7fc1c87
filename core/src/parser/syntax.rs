// Source positions shared by the parser and the error renderer.

use core::ops::Range;

/// Byte range into the program text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span(pub Range<usize>);

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self(start..end)
    }

    /// Zero-width span at `offset`, used for end-of-input errors.
    pub fn point(offset: usize) -> Self {
        Self(offset..offset)
    }

    pub fn start(&self) -> usize {
        self.0.start
    }

    pub fn str_of<'a>(&self, source: &'a str) -> &'a str {
        &source[self.0.start..self.0.end]
    }
}
