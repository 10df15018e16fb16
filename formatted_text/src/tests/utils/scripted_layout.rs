// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::ops::Range;
use std::vec::Vec;

use peniko::kurbo::Rect;

use crate::TextLayout;

struct ScriptedLine {
    text_range: Range<usize>,
    visible_end: usize,
    bounds: Rect,
}

/// A [`TextLayout`] that reports exactly the geometry it was given.
///
/// Caret positions are looked up by byte offset; offsets without a position report `0.0`.
pub(crate) struct ScriptedLayout {
    lines: Vec<ScriptedLine>,
    primary: Vec<f64>,
    secondary: Vec<f64>,
}

impl ScriptedLayout {
    /// A layout with the same primary and secondary caret position for every offset.
    pub(crate) fn new(positions: &[f64]) -> Self {
        Self {
            lines: Vec::new(),
            primary: positions.to_vec(),
            secondary: positions.to_vec(),
        }
    }

    /// Overrides the secondary caret positions.
    pub(crate) fn with_secondary(mut self, positions: &[f64]) -> Self {
        self.secondary = positions.to_vec();
        self
    }

    /// Adds a line spanning `text_range`, drawn between `top` and `bottom`.
    pub(crate) fn line(
        mut self,
        text_range: Range<usize>,
        visible_end: usize,
        top: f64,
        bottom: f64,
    ) -> Self {
        self.lines.push(ScriptedLine {
            text_range,
            visible_end,
            bounds: Rect::new(0.0, top, 1000.0, bottom),
        });
        self
    }
}

impl TextLayout for ScriptedLayout {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_for_offset(&self, offset: usize) -> usize {
        self.lines
            .partition_point(|line| line.text_range.start <= offset)
            .saturating_sub(1)
    }

    fn line_bounds(&self, line: usize) -> Rect {
        self.lines[line].bounds
    }

    fn line_start(&self, line: usize) -> usize {
        self.lines[line].text_range.start
    }

    fn line_visible_end(&self, line: usize) -> usize {
        self.lines[line].visible_end
    }

    fn primary_horizontal(&self, offset: usize) -> f64 {
        self.primary.get(offset).copied().unwrap_or(0.0)
    }

    fn secondary_horizontal(&self, offset: usize) -> f64 {
        self.secondary.get(offset).copied().unwrap_or(0.0)
    }
}
