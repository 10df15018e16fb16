// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use peniko::Color;
use peniko::kurbo::Point;

use crate::{FontDescriptor, Region, TextTransform};

bitflags::bitflags! {
    /// Lines drawn along a run of text.
    ///
    /// The empty set is an explicit "no decorations" and is distinct from leaving
    /// [`Span::text_decorations`] unset.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct TextDecorations: u8 {
        /// A line below the text.
        const UNDERLINE = 1 << 0;
        /// A line through the middle of the text.
        const STRIKETHROUGH = 1 << 1;
    }
}

/// One contiguous styled run of text.
///
/// Fields left as `None` inherit from the [`DocumentDefaults`] when the text is compiled.
/// Compilation never modifies the span itself.
///
/// [`DocumentDefaults`]: crate::DocumentDefaults
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Span {
    /// The text content. `None` and empty spans are skipped entirely.
    pub text: Option<String>,
    /// Foreground color.
    pub text_color: Option<Color>,
    /// Background color. There is no document default for it.
    pub background_color: Option<Color>,
    /// Relative line height. Negative values count as unset.
    pub line_height: Option<f32>,
    /// Character spacing in device-independent points. Negative values count as unset.
    pub character_spacing: Option<f32>,
    /// Font. A default descriptor inherits the document font.
    pub font: FontDescriptor,
    /// Case transform. [`TextTransform::Default`] inherits the document transform.
    pub text_transform: TextTransform,
    /// Decorations, if explicitly set on this span.
    pub text_decorations: Option<TextDecorations>,
    region: Option<Region>,
}

impl Span {
    /// Creates an unstyled span with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Sets the foreground color.
    #[must_use]
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    /// Sets the background color.
    #[must_use]
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Sets the relative line height.
    #[must_use]
    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = Some(line_height);
        self
    }

    /// Sets the character spacing.
    #[must_use]
    pub fn with_character_spacing(mut self, spacing: f32) -> Self {
        self.character_spacing = Some(spacing);
        self
    }

    /// Sets the font.
    #[must_use]
    pub fn with_font(mut self, font: FontDescriptor) -> Self {
        self.font = font;
        self
    }

    /// Sets the text transform.
    #[must_use]
    pub fn with_text_transform(mut self, transform: TextTransform) -> Self {
        self.text_transform = transform;
        self
    }

    /// Explicitly sets the decorations, including to the empty set.
    #[must_use]
    pub fn with_text_decorations(mut self, decorations: TextDecorations) -> Self {
        self.text_decorations = Some(decorations);
        self
    }

    /// The line height, if set to a non-negative value.
    pub fn line_height(&self) -> Option<f32> {
        self.line_height.filter(|value| *value >= 0.0)
    }

    /// The character spacing, if set to a non-negative value.
    pub fn character_spacing(&self) -> Option<f32> {
        self.character_spacing.filter(|value| *value >= 0.0)
    }

    /// The area this span covered in the last reconstructed layout.
    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    pub(crate) fn set_region(&mut self, region: Region) {
        self.region = Some(region);
    }
}

/// An ordered sequence of spans forming one block of text.
///
/// Span order determines both rendering order and compiled offsets.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormattedText {
    spans: Vec<Span>,
}

impl FormattedText {
    /// Creates an empty block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a span.
    pub fn push(&mut self, span: Span) {
        self.spans.push(span);
    }

    /// The spans, in order.
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Mutable access to the span at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Span> {
        self.spans.get_mut(index)
    }

    /// Returns the number of spans.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Returns `true` if there are no spans.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Iterates over the spans in order.
    pub fn iter(&self) -> core::slice::Iter<'_, Span> {
        self.spans.iter()
    }

    /// Returns the index of the first span whose region contains `point`.
    ///
    /// Spans without a region never match, so this only finds anything after
    /// [`reconstruct`](crate::reconstruct) has run.
    pub fn span_at(&self, point: Point) -> Option<usize> {
        self.spans
            .iter()
            .position(|span| span.region().is_some_and(|region| region.contains(point)))
    }
}

impl From<Vec<Span>> for FormattedText {
    fn from(spans: Vec<Span>) -> Self {
        Self { spans }
    }
}

impl FromIterator<Span> for FormattedText {
    fn from_iter<I: IntoIterator<Item = Span>>(iter: I) -> Self {
        Self {
            spans: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a FormattedText {
    type Item = &'a Span;
    type IntoIter = core::slice::Iter<'a, Span>;

    fn into_iter(self) -> Self::IntoIter {
        self.spans.iter()
    }
}
