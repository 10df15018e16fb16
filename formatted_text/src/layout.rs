// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::kurbo::Rect;

/// Line geometry of a laid out [`CompiledText`](crate::CompiledText).
///
/// This is the subset of a native text layout that region reconstruction needs. Offsets
/// are byte offsets into the compiled text. Coordinates are in device pixels, relative to
/// the content box of the surface the text is drawn on.
pub trait TextLayout {
    /// Number of lines.
    fn line_count(&self) -> usize;

    /// The line containing `offset`.
    ///
    /// An offset at a wrap point belongs to the line that starts there.
    fn line_for_offset(&self, offset: usize) -> usize;

    /// Bounding box of `line`. Only the vertical extent is used.
    fn line_bounds(&self, line: usize) -> Rect;

    /// Offset of the first character of `line`.
    fn line_start(&self, line: usize) -> usize;

    /// Offset just past the last visible character of `line`, excluding trailing whitespace.
    fn line_visible_end(&self, line: usize) -> usize;

    /// Horizontal position of the primary caret at `offset`.
    fn primary_horizontal(&self, offset: usize) -> f64;

    /// Horizontal position of the secondary caret at `offset`.
    ///
    /// This differs from the primary position only at direction boundaries in mixed
    /// direction text.
    fn secondary_horizontal(&self, offset: usize) -> f64;
}

impl<L: TextLayout + ?Sized> TextLayout for &L {
    fn line_count(&self) -> usize {
        (**self).line_count()
    }

    fn line_for_offset(&self, offset: usize) -> usize {
        (**self).line_for_offset(offset)
    }

    fn line_bounds(&self, line: usize) -> Rect {
        (**self).line_bounds(line)
    }

    fn line_start(&self, line: usize) -> usize {
        (**self).line_start(line)
    }

    fn line_visible_end(&self, line: usize) -> usize {
        (**self).line_visible_end(line)
    }

    fn primary_horizontal(&self, offset: usize) -> f64 {
        (**self).primary_horizontal(offset)
    }

    fn secondary_horizontal(&self, offset: usize) -> f64 {
        (**self).secondary_horizontal(offset)
    }
}
