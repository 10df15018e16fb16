// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;

use crate::{FontDescriptor, TextDecorations, TextTransform};

/// Horizontal alignment of lines within the layout width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAlignment {
    /// Aligned to the leading edge for the paragraph direction.
    #[default]
    Start,
    /// Centered.
    Center,
    /// Aligned to the trailing edge for the paragraph direction.
    End,
}

/// Fallback values for span fields that are left unset.
///
/// These are supplied once per [`compile`](crate::compile) call. Every unset span field
/// resolves to exactly one of them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocumentDefaults {
    /// Character spacing in device-independent points.
    pub character_spacing: Option<f32>,
    /// Line alignment, carried through to the compiled text.
    pub horizontal_alignment: TextAlignment,
    /// Font for spans with a default font descriptor.
    pub font: Option<FontDescriptor>,
    /// Foreground color.
    pub color: Option<Color>,
    /// Case transform for spans with [`TextTransform::Default`].
    pub text_transform: TextTransform,
    /// Decorations for spans that do not set their own.
    pub text_decorations: TextDecorations,
}

impl DocumentDefaults {
    /// Sets the default character spacing.
    #[must_use]
    pub fn with_character_spacing(mut self, spacing: f32) -> Self {
        self.character_spacing = Some(spacing);
        self
    }

    /// Sets the line alignment.
    #[must_use]
    pub fn with_horizontal_alignment(mut self, alignment: TextAlignment) -> Self {
        self.horizontal_alignment = alignment;
        self
    }

    /// Sets the default font.
    #[must_use]
    pub fn with_font(mut self, font: FontDescriptor) -> Self {
        self.font = Some(font);
        self
    }

    /// Sets the default foreground color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the default text transform.
    #[must_use]
    pub fn with_text_transform(mut self, transform: TextTransform) -> Self {
        self.text_transform = transform;
        self
    }

    /// Sets the default decorations.
    #[must_use]
    pub fn with_text_decorations(mut self, decorations: TextDecorations) -> Self {
        self.text_decorations = decorations;
        self
    }

    pub(crate) fn character_spacing(&self) -> Option<f32> {
        self.character_spacing.filter(|value| *value >= 0.0)
    }
}
