// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::kurbo::{Insets, Point, Rect};
use smallvec::SmallVec;

/// The screen area a span occupies: one rectangle per line it is drawn on.
///
/// Rectangles are ordered by line, then left to right. A region may be inflated to make a more forgiving hit
/// target; it remembers how much so that [`Region::deflate`] can recover the tight bounds.
#[derive(Clone, Debug, PartialEq)]
pub struct Region {
    rects: SmallVec<[Rect; 2]>,
    inflation: Insets,
}

impl Default for Region {
    fn default() -> Self {
        Self {
            rects: SmallVec::new(),
            inflation: Insets::ZERO,
        }
    }
}

impl Region {
    /// Creates a region from per-line rectangles, top line first.
    pub fn from_rects(rects: impl IntoIterator<Item = Rect>) -> Self {
        Self {
            rects: rects.into_iter().collect(),
            inflation: Insets::ZERO,
        }
    }

    /// The rectangles of this region.
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    /// Returns `true` if the region has no rectangles.
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// The insets this region has been inflated by.
    pub fn inflation(&self) -> Insets {
        self.inflation
    }

    /// The smallest rectangle containing the whole region.
    pub fn bounds(&self) -> Option<Rect> {
        self.rects.iter().copied().reduce(|a, b| a.union(b))
    }

    /// Returns `true` if any rectangle of the region contains `point`.
    pub fn contains(&self, point: Point) -> bool {
        self.rects.iter().any(|rect| rect.contains(point))
    }

    /// Grows the region by `amount` in every direction.
    ///
    /// Every rectangle widens on both sides. Only rectangles on the top line move up and only
    /// those on the bottom line move down, so adjacent lines do not start to overlap.
    #[must_use]
    pub fn inflate(self, amount: f64) -> Self {
        self.inflate_by(Insets::uniform(amount))
    }

    /// Undoes every inflation applied so far.
    #[must_use]
    pub fn deflate(self) -> Self {
        let inflation = self.inflation;
        self.inflate_by(Insets::new(
            -inflation.x0,
            -inflation.y0,
            -inflation.x1,
            -inflation.y1,
        ))
    }

    fn inflate_by(mut self, insets: Insets) -> Self {
        let top = self.rects.iter().map(|rect| rect.y0).reduce(f64::min);
        let bottom = self.rects.iter().map(|rect| rect.y1).reduce(f64::max);
        for rect in &mut self.rects {
            rect.x0 -= insets.x0;
            rect.x1 += insets.x1;
            if Some(rect.y0) == top {
                rect.y0 -= insets.y0;
            }
            if Some(rect.y1) == bottom {
                rect.y1 += insets.y1;
            }
        }
        self.inflation = Insets::new(
            self.inflation.x0 + insets.x0,
            self.inflation.y0 + insets.y0,
            self.inflation.x1 + insets.x1,
            self.inflation.y1 + insets.y1,
        );
        self
    }
}
