// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::ops::Range;

use attributed_text::AttributedText;
use peniko::kurbo::{Insets, Rect, Size, Vec2};
use smallvec::SmallVec;

use crate::{CompiledText, FormattedText, Region, TextAttribute, TextLayout};

/// Rectangles this narrow or narrower are dropped as rounding noise.
pub const MIN_RECT_WIDTH: f64 = 1.0;

/// Margin added around every reconstructed region to make a comfortable hit target.
pub const REGION_INFLATION: f64 = 10.0;

/// The surface a layout is drawn on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceGeometry {
    /// Size of the surface in device pixels.
    pub size: Size,
    /// Content padding in device-independent units.
    pub padding: Insets,
    /// Device pixels per device-independent unit.
    pub scale: f64,
}

impl Default for SurfaceGeometry {
    fn default() -> Self {
        Self {
            size: Size::ZERO,
            padding: Insets::ZERO,
            scale: 1.0,
        }
    }
}

impl SurfaceGeometry {
    /// A surface of `size` with no padding at scale 1.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Sets the content padding.
    #[must_use]
    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the scale factor.
    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Offset from the surface origin to the content box, in device pixels.
    pub fn content_offset(&self) -> Vec2 {
        Vec2::new(self.padding.x0 * self.scale, self.padding.y0 * self.scale)
    }

    fn is_drawable(&self) -> bool {
        self.size.width > 0.0 && self.size.height > 0.0
    }
}

/// Attaches to every span of `text` the region it occupies in `layout`.
///
/// `compiled` must be the result of compiling `text`, and `layout` a layout of it.
///
/// The compiled text is walked run by run between attribute transitions. Each run is widened
/// to the full extent of the attributes touching it, so a styled run the layout engine
/// treats as one stays one region. A span receives the rectangles of every run it overlaps,
/// merged into a single region.
///
/// Nothing happens when the surface has no area, the compiled text is empty, or there is no
/// layout. Calling this again with the same inputs produces the same regions.
pub fn reconstruct<L: TextLayout + ?Sized>(
    layout: Option<&L>,
    compiled: &CompiledText,
    text: &mut FormattedText,
    surface: &SurfaceGeometry,
) {
    if !surface.is_drawable() {
        log::debug!("surface size {:?} has no area; regions left as is", surface.size);
        return;
    }
    let len = compiled.len();
    if len == 0 {
        log::debug!("compiled text is empty; regions left as is");
        return;
    }
    let Some(layout) = layout else {
        log::debug!("no layout available; regions left as is");
        return;
    };

    let offset = surface.content_offset();
    let attributed = compiled.attributed();
    let span_ranges = compiled.span_ranges();
    // Distinct run extents covering each span, in text order.
    let mut extents: Vec<SmallVec<[Range<usize>; 1]>> = vec![SmallVec::new(); span_ranges.len()];
    let mut start = 0;
    while start < len {
        let next = attributed.next_transition(start, len);
        let extent = run_extent(attributed, start..next);
        log::trace!("run {:?} extends to {extent:?}", start..next);

        for (index, range) in span_ranges.iter().enumerate() {
            let Some(range) = range else {
                continue;
            };
            if range.start < next && start < range.end && !extents[index].contains(&extent) {
                extents[index].push(extent.clone());
            }
        }
        start = next;
    }

    for (index, extents) in extents.iter().enumerate() {
        if extents.is_empty() {
            continue;
        }
        let mut rects: SmallVec<[Rect; 2]> = extents
            .iter()
            .flat_map(|extent| run_rects(layout, extent.clone(), offset))
            .collect();
        rects.sort_by(|a, b| a.y0.total_cmp(&b.y0).then(a.x0.total_cmp(&b.x0)));
        rects.dedup();
        if let Some(span) = text.get_mut(index) {
            span.set_region(Region::from_rects(rects).inflate(REGION_INFLATION));
        }
    }
}

/// The full extent of the attributes touching `range`, or `range` itself if there are none.
fn run_extent(
    attributed: &AttributedText<String, TextAttribute>,
    range: Range<usize>,
) -> Range<usize> {
    attributed
        .attributes_for_range(range.clone())
        .map(|span| span.range.clone())
        .reduce(|a, b| a.start.min(b.start)..a.end.max(b.end))
        .unwrap_or(range)
}

/// One rectangle per line crossed by `run`, in surface coordinates.
fn run_rects<L: TextLayout + ?Sized>(
    layout: &L,
    run: Range<usize>,
    offset: Vec2,
) -> SmallVec<[Rect; 2]> {
    let mut rects = SmallVec::new();
    if layout.line_count() == 0 {
        return rects;
    }
    let first_line = layout.line_for_offset(run.start);
    let last_line = layout.line_for_offset(run.end);
    for line in first_line..=last_line {
        let bounds = layout.line_bounds(line);
        let start = if line == first_line {
            run.start
        } else {
            layout.line_start(line)
        };
        let end = if line == last_line {
            run.end
        } else {
            layout.line_visible_end(line)
        };

        let mut x0 = layout.primary_horizontal(start);
        let mut x1 = layout.secondary_horizontal(end);
        // Right-to-left runs end left of where they start.
        if x0 > x1 {
            core::mem::swap(&mut x0, &mut x1);
        }
        if x1 - x0 > MIN_RECT_WIDTH {
            rects.push(Rect::new(x0, bounds.y0, x1, bounds.y1) + offset);
        }
    }
    rects
}
