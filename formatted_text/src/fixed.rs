// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A fixed-advance layout engine.

use alloc::vec::Vec;
use core::ops::Range;

use peniko::kurbo::Rect;

use crate::{CompiledText, TextAlignment, TextAttribute, TextLayout};

/// Paragraph direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left.
    Rtl,
}

/// Metrics for [`FixedAdvanceLayout`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedMetrics {
    /// Horizontal advance of every character, in pixels.
    pub advance: f64,
    /// Height of a line before line height attributes are applied, in pixels.
    pub line_height: f64,
    /// Paragraph direction.
    pub direction: Direction,
}

impl Default for FixedMetrics {
    fn default() -> Self {
        Self {
            advance: 10.0,
            line_height: 20.0,
            direction: Direction::Ltr,
        }
    }
}

impl FixedMetrics {
    /// Sets the paragraph direction.
    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
struct LineData {
    text_range: Range<usize>,
    visible_end: usize,
    /// Number of visible characters.
    columns: usize,
    top: f64,
    height: f64,
    /// Left edge of the visible content.
    offset: f64,
}

/// A [`TextLayout`] where every character has the same advance.
///
/// Lines break at `\n` and wrap greedily after whitespace, breaking inside a word only when
/// the word alone does not fit. Trailing whitespace hangs past the edge. Every line is as
/// tall as the base line height scaled by the largest line height attribute touching it.
#[derive(Clone, Debug)]
pub struct FixedAdvanceLayout<'a> {
    text: &'a str,
    lines: Vec<LineData>,
    metrics: FixedMetrics,
    width: f64,
}

impl<'a> FixedAdvanceLayout<'a> {
    /// Lays out `compiled` within `width` pixels.
    pub fn new(compiled: &'a CompiledText, width: f64, metrics: FixedMetrics) -> Self {
        let text = compiled.as_str();
        let mut layout = Self {
            text,
            lines: Vec::new(),
            metrics,
            width,
        };
        for text_range in break_lines(text, max_columns(width, metrics.advance)) {
            layout.push_line(compiled, text_range);
        }
        layout
    }

    /// The layout width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// The total height of all lines.
    pub fn height(&self) -> f64 {
        self.lines.last().map_or(0.0, |line| line.top + line.height)
    }

    fn push_line(&mut self, compiled: &CompiledText, text_range: Range<usize>) {
        let visible_end = text_range.start + self.text[text_range.clone()].trim_end().len();
        let columns = self.text[text_range.start..visible_end].chars().count();

        let scale = compiled
            .attributed()
            .attributes_for_range(text_range.clone())
            .filter_map(|span| match span.attribute {
                TextAttribute::LineHeight(factor) if factor > 0.0 => Some(f64::from(factor)),
                _ => None,
            })
            .reduce(f64::max)
            .unwrap_or(1.0);

        let slack = (self.width - columns as f64 * self.metrics.advance).max(0.0);
        let offset = match (compiled.alignment(), self.metrics.direction) {
            (TextAlignment::Start, Direction::Ltr) | (TextAlignment::End, Direction::Rtl) => 0.0,
            (TextAlignment::Center, _) => slack / 2.0,
            (TextAlignment::Start, Direction::Rtl) | (TextAlignment::End, Direction::Ltr) => slack,
        };

        let line = LineData {
            text_range,
            visible_end,
            columns,
            top: self.height(),
            height: self.metrics.line_height * scale,
            offset,
        };
        self.lines.push(line);
    }

    fn line(&self, line: usize) -> Option<&LineData> {
        self.lines.get(line)
    }

    fn horizontal(&self, offset: usize) -> f64 {
        let Some(line) = self.line(self.line_for_offset(offset)) else {
            return 0.0;
        };
        let end = offset.clamp(line.text_range.start, line.visible_end);
        let column = self
            .text
            .get(line.text_range.start..end)
            .map_or(0, |prefix| prefix.chars().count());
        let advance = column as f64 * self.metrics.advance;
        match self.metrics.direction {
            Direction::Ltr => line.offset + advance,
            Direction::Rtl => line.offset + line.columns as f64 * self.metrics.advance - advance,
        }
    }
}

impl TextLayout for FixedAdvanceLayout<'_> {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_for_offset(&self, offset: usize) -> usize {
        self.lines
            .partition_point(|line| line.text_range.start <= offset)
            .saturating_sub(1)
    }

    fn line_bounds(&self, line: usize) -> Rect {
        self.line(line).map_or(Rect::ZERO, |line| {
            Rect::new(0.0, line.top, self.width, line.top + line.height)
        })
    }

    fn line_start(&self, line: usize) -> usize {
        self.line(line).map_or(0, |line| line.text_range.start)
    }

    fn line_visible_end(&self, line: usize) -> usize {
        self.line(line).map_or(0, |line| line.visible_end)
    }

    fn primary_horizontal(&self, offset: usize) -> f64 {
        self.horizontal(offset)
    }

    fn secondary_horizontal(&self, offset: usize) -> f64 {
        self.horizontal(offset)
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "The quotient is finite, positive and floored by the cast."
)]
fn max_columns(width: f64, advance: f64) -> usize {
    if advance > 0.0 && width.is_finite() && width >= advance {
        (width / advance) as usize
    } else {
        1
    }
}

#[derive(Clone, Default)]
struct BreakerState {
    line_start: usize,
    /// Characters on the current line, including hanging whitespace.
    columns: usize,
    /// Where the line could end, and how many columns it would hold then.
    break_opportunity: Option<(usize, usize)>,
}

fn break_lines(text: &str, max_columns: usize) -> Vec<Range<usize>> {
    let mut lines = Vec::new();
    let mut state = BreakerState::default();
    for (ix, ch) in text.char_indices() {
        let next = ix + ch.len_utf8();
        if ch == '\n' {
            lines.push(state.line_start..next);
            state = BreakerState {
                line_start: next,
                ..BreakerState::default()
            };
            continue;
        }
        if ch.is_whitespace() {
            state.columns += 1;
            state.break_opportunity = Some((next, state.columns));
            continue;
        }
        if state.columns >= max_columns {
            if let Some((offset, columns)) = state.break_opportunity.take() {
                lines.push(state.line_start..offset);
                state.line_start = offset;
                state.columns -= columns;
            } else {
                // The word alone is too wide.
                lines.push(state.line_start..ix);
                state.line_start = ix;
                state.columns = 0;
            }
        }
        state.columns += 1;
    }
    lines.push(state.line_start..text.len());
    lines
}
