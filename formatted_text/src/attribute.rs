// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use attributed_text::SpanFlags;
use peniko::Color;

use crate::{FontDescriptor, to_argb};

/// Converts character spacing in device-independent points to em.
pub const EM_COEFFICIENT: f32 = 0.0624;

/// A styled property applied over a range of compiled text.
#[derive(Clone, Debug, PartialEq)]
pub enum TextAttribute {
    /// Foreground color.
    Foreground(Color),
    /// Background color.
    Background(Color),
    /// Line height, relative to the font's natural height.
    LineHeight(f32),
    /// Letter spacing in em.
    LetterSpacing(f32),
    /// Font.
    Font(FontDescriptor),
    /// Strikethrough decoration.
    Strikethrough,
    /// Underline decoration.
    Underline,
}

/// The kind of a [`TextAttribute`], without its value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    /// See [`TextAttribute::Foreground`].
    Foreground,
    /// See [`TextAttribute::Background`].
    Background,
    /// See [`TextAttribute::LineHeight`].
    LineHeight,
    /// See [`TextAttribute::LetterSpacing`].
    LetterSpacing,
    /// See [`TextAttribute::Font`].
    Font,
    /// See [`TextAttribute::Strikethrough`].
    Strikethrough,
    /// See [`TextAttribute::Underline`].
    Underline,
}

impl TextAttribute {
    /// The kind of this attribute.
    pub fn kind(&self) -> AttributeKind {
        match self {
            Self::Foreground(_) => AttributeKind::Foreground,
            Self::Background(_) => AttributeKind::Background,
            Self::LineHeight(_) => AttributeKind::LineHeight,
            Self::LetterSpacing(_) => AttributeKind::LetterSpacing,
            Self::Font(_) => AttributeKind::Font,
            Self::Strikethrough => AttributeKind::Strikethrough,
            Self::Underline => AttributeKind::Underline,
        }
    }

    /// The overlap policy this attribute is applied with.
    ///
    /// Paint and line height do not extend into text appended after them; metric-affecting
    /// attributes and decorations do.
    pub fn flags(&self) -> SpanFlags {
        match self.kind() {
            AttributeKind::Foreground | AttributeKind::Background | AttributeKind::LineHeight => {
                SpanFlags::INCLUSIVE_EXCLUSIVE
            }
            AttributeKind::LetterSpacing
            | AttributeKind::Font
            | AttributeKind::Strikethrough
            | AttributeKind::Underline => SpanFlags::INCLUSIVE_INCLUSIVE,
        }
    }

    /// The color as `0xAARRGGBB`, for the color kinds.
    pub fn argb(&self) -> Option<u32> {
        match self {
            Self::Foreground(color) | Self::Background(color) => Some(to_argb(*color)),
            _ => None,
        }
    }
}

/// A [`TextAttribute`] together with the byte range it covers.
#[derive(Clone, Debug, PartialEq)]
pub struct AttributeRange {
    /// The attribute.
    pub attribute: TextAttribute,
    /// Start byte offset.
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl AttributeRange {
    /// The kind of the attribute.
    pub fn kind(&self) -> AttributeKind {
        self.attribute.kind()
    }

    /// The covered byte range.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}
