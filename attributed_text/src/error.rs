// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::ops::Range;

use crate::TextStorage;

/// Error returned when an attribute range does not fit the text it is applied to.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    range: Range<usize>,
    len: usize,
    boundary: Option<BoundaryInfo>,
}

#[expect(
    clippy::len_without_is_empty,
    reason = "`Error::len` reports the length of the text at the time of failure."
)]
impl Error {
    /// The category of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The start byte index of the rejected range.
    pub fn start(&self) -> usize {
        self.range.start
    }

    /// The end byte index (exclusive) of the rejected range.
    pub fn end(&self) -> usize {
        self.range.end
    }

    /// The length in bytes of the text the range was checked against.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Details about the offending endpoint for [`ErrorKind::NotOnCharBoundary`].
    pub fn boundary(&self) -> Option<BoundaryInfo> {
        self.boundary
    }

    /// Checks that `range` is ordered, in bounds and aligned to UTF-8 boundaries of `text`.
    pub(crate) fn check<T: TextStorage + ?Sized>(
        text: &T,
        range: &Range<usize>,
    ) -> Result<(), Self> {
        let len = text.len();
        let fail = |kind, boundary| Self {
            kind,
            range: range.clone(),
            len,
            boundary,
        };
        if range.start > range.end {
            return Err(fail(ErrorKind::InvalidRange, None));
        }
        if range.end > len {
            return Err(fail(ErrorKind::InvalidBounds, None));
        }
        for (which, index) in [(Endpoint::Start, range.start), (Endpoint::End, range.end)] {
            if !text.is_char_boundary(index) {
                let (char_start, char_end) = enclosing_char(text, index);
                let info = BoundaryInfo {
                    which,
                    index,
                    char_start,
                    char_end,
                };
                return Err(fail(ErrorKind::NotOnCharBoundary, Some(info)));
            }
        }
        Ok(())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Range { start, end } = self.range;
        match (self.kind, self.boundary) {
            (ErrorKind::InvalidBounds, _) => {
                write!(f, "range {start}..{end} out of bounds for len {}", self.len)
            }
            (ErrorKind::InvalidRange, _) => {
                write!(f, "invalid range {start}..{end}: start > end")
            }
            (ErrorKind::NotOnCharBoundary, Some(b)) => write!(
                f,
                "range {start}..{end}: {} index {} not on UTF-8 boundary (char {}..{})",
                b.which, b.index, b.char_start, b.char_end
            ),
            (ErrorKind::NotOnCharBoundary, None) => {
                write!(f, "range {start}..{end} not on UTF-8 boundary")
            }
        }
    }
}

impl core::error::Error for Error {}

/// The category of an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The range reaches past the end of the text.
    InvalidBounds,
    /// The range had `start > end`.
    InvalidRange,
    /// An endpoint splits a UTF-8 encoded character.
    NotOnCharBoundary,
}

/// Identifies which endpoint of a range failed boundary validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// The `start` endpoint of the range.
    Start,
    /// The `end` endpoint of the range.
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "start",
            Self::End => "end",
        })
    }
}

/// Details about an index that was not on a UTF-8 character boundary.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoundaryInfo {
    /// Which endpoint was invalid.
    pub which: Endpoint,
    /// The offending byte index.
    pub index: usize,
    /// The start byte index of the enclosing character.
    pub char_start: usize,
    /// The end byte index (exclusive) of the enclosing character.
    pub char_end: usize,
}

/// Byte span of the character containing `index`. A UTF-8 sequence is at most 4 bytes.
fn enclosing_char<T: TextStorage + ?Sized>(text: &T, index: usize) -> (usize, usize) {
    let start = (index.saturating_sub(3)..=index)
        .rev()
        .find(|&i| text.is_char_boundary(i))
        .unwrap_or(index);
    let end = (index..=(index + 3).min(text.len()))
        .find(|&i| text.is_char_boundary(i))
        .unwrap_or(index);
    (start, end)
}
