// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;

use attributed_text::AttributedText;
use smallvec::SmallVec;

use crate::{
    AttributeRange, DisplayMetrics, DocumentDefaults, EM_COEFFICIENT, FontDescriptor,
    FontResolver, FontRun, FormattedText, Span, TextAlignment, TextAttribute, TextDecorations,
    transform_text,
};

/// The renderable form of a [`FormattedText`].
///
/// Holds the concatenated, transformed text, the attribute ranges applied over it, and the
/// byte range each span occupies.
#[derive(Debug)]
pub struct CompiledText {
    attributed: AttributedText<String, TextAttribute>,
    span_ranges: Vec<Option<Range<usize>>>,
    alignment: TextAlignment,
}

impl CompiledText {
    /// The compiled text.
    pub fn as_str(&self) -> &str {
        self.attributed.as_str()
    }

    /// Length of the compiled text in bytes.
    pub fn len(&self) -> usize {
        self.attributed.len()
    }

    /// Returns `true` if no span contributed any text.
    pub fn is_empty(&self) -> bool {
        self.attributed.is_empty()
    }

    /// Line alignment from the document defaults.
    pub fn alignment(&self) -> TextAlignment {
        self.alignment
    }

    /// The underlying attributed text.
    pub fn attributed(&self) -> &AttributedText<String, TextAttribute> {
        &self.attributed
    }

    /// All attribute ranges, in span order and, within a span, in a fixed kind order.
    pub fn attributes(&self) -> impl ExactSizeIterator<Item = AttributeRange> + '_ {
        self.attributed
            .attributes_iter()
            .map(|span| AttributeRange {
                attribute: span.attribute.clone(),
                start: span.range.start,
                end: span.range.end,
            })
    }

    /// The byte range of the span at `index`, or `None` if that span was skipped.
    pub fn span_range(&self, index: usize) -> Option<Range<usize>> {
        self.span_ranges.get(index).cloned().flatten()
    }

    /// The byte range of every span, indexed like the source spans.
    pub fn span_ranges(&self) -> &[Option<Range<usize>>] {
        &self.span_ranges
    }

    /// Resolves every font attribute to a native font.
    pub fn resolve_fonts<R: FontResolver>(
        &self,
        resolver: &mut R,
        metrics: &DisplayMetrics,
    ) -> Vec<FontRun<R::Font>> {
        self.attributed
            .attributes_iter()
            .filter_map(|span| match &span.attribute {
                TextAttribute::Font(font) => Some(FontRun {
                    range: span.range.clone(),
                    font: resolver.resolve(font),
                    pixel_size: font.pixel_size(metrics),
                }),
                _ => None,
            })
            .collect()
    }

    #[cfg(test)]
    pub(crate) fn from_parts(
        attributed: AttributedText<String, TextAttribute>,
        span_ranges: Vec<Option<Range<usize>>>,
    ) -> Self {
        Self {
            attributed,
            span_ranges,
            alignment: TextAlignment::Start,
        }
    }
}

/// Compiles `text` into a single attributed string.
///
/// Spans without text, or whose transformed text is empty, contribute no characters and no
/// attributes. Offsets are measured on the transformed text, so they stay correct when a
/// case mapping changes the byte length.
pub fn compile(text: &FormattedText, defaults: &DocumentDefaults) -> CompiledText {
    let pieces: Vec<Option<Cow<'_, str>>> = text
        .iter()
        .map(|span| {
            let transform = span.text_transform.resolve(defaults.text_transform);
            transform_text(span.text.as_deref(), transform).filter(|piece| !piece.is_empty())
        })
        .collect();

    let mut buffer = String::with_capacity(pieces.iter().flatten().map(|piece| piece.len()).sum());
    for piece in pieces.iter().flatten() {
        buffer.push_str(piece);
    }

    let mut attributed = AttributedText::new(buffer);
    let mut span_ranges = Vec::with_capacity(pieces.len());
    let mut cursor = 0;
    for (index, (span, piece)) in text.iter().zip(&pieces).enumerate() {
        let Some(piece) = piece else {
            log::trace!("span {index} has no text; skipping");
            span_ranges.push(None);
            continue;
        };
        let range = cursor..cursor + piece.len();
        cursor = range.end;

        for attribute in resolve_attributes(span, defaults) {
            let flags = attribute.flags();
            let applied = attributed.apply_attribute(range.clone(), attribute, flags);
            debug_assert!(
                applied.is_ok(),
                "span {index} produced an invalid range {range:?}: {applied:?}"
            );
        }
        span_ranges.push(Some(range));
    }

    CompiledText {
        attributed,
        span_ranges,
        alignment: defaults.horizontal_alignment,
    }
}

/// Resolves the attributes of one span, in a fixed kind order.
fn resolve_attributes(span: &Span, defaults: &DocumentDefaults) -> SmallVec<[TextAttribute; 4]> {
    let mut attributes = SmallVec::new();

    if let Some(color) = span.text_color.or(defaults.color) {
        attributes.push(TextAttribute::Foreground(color));
    }
    if let Some(color) = span.background_color {
        attributes.push(TextAttribute::Background(color));
    }
    if let Some(line_height) = span.line_height() {
        attributes.push(TextAttribute::LineHeight(line_height));
    }
    if let Some(spacing) = span
        .character_spacing()
        .or_else(|| defaults.character_spacing())
    {
        attributes.push(TextAttribute::LetterSpacing(spacing * EM_COEFFICIENT));
    }
    if let Some(font) = resolve_font(&span.font, defaults.font.as_ref()) {
        attributes.push(TextAttribute::Font(font));
    }

    let decorations = span.text_decorations.unwrap_or(defaults.text_decorations);
    if decorations.contains(TextDecorations::STRIKETHROUGH) {
        attributes.push(TextAttribute::Strikethrough);
    }
    if decorations.contains(TextDecorations::UNDERLINE) {
        attributes.push(TextAttribute::Underline);
    }

    attributes
}

fn resolve_font(font: &FontDescriptor, fallback: Option<&FontDescriptor>) -> Option<FontDescriptor> {
    let resolved = if font.is_default() {
        fallback?.clone()
    } else {
        font.clone()
            .with_fallback_size(fallback.and_then(FontDescriptor::size))
    };
    (!resolved.is_default()).then_some(resolved)
}
