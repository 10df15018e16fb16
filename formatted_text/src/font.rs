// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use core::ops::Range;

bitflags::bitflags! {
    /// Weight and slant flags of a [`FontDescriptor`].
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct FontAttributes: u8 {
        /// Bold weight.
        const BOLD = 1 << 0;
        /// Italic slant.
        const ITALIC = 1 << 1;
    }
}

/// A platform-independent font request.
#[derive(Clone, Debug, PartialEq)]
pub struct FontDescriptor {
    /// Family name, or `None` for the platform default family.
    pub family: Option<Arc<str>>,
    /// Size in device-independent units, or `None` for the default size.
    pub size: Option<f32>,
    /// Weight and slant.
    pub attributes: FontAttributes,
    /// Whether the size follows the user's font scale preference.
    pub auto_scaling: bool,
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self {
            family: None,
            size: None,
            attributes: FontAttributes::empty(),
            auto_scaling: true,
        }
    }
}

impl FontDescriptor {
    /// A descriptor for `family` at the default size.
    pub fn family(family: impl Into<Arc<str>>) -> Self {
        Self {
            family: Some(family.into()),
            ..Self::default()
        }
    }

    /// A descriptor for the default family at `size`.
    pub fn of_size(size: f32) -> Self {
        Self {
            size: Some(size),
            ..Self::default()
        }
    }

    /// Sets the size.
    #[must_use]
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets the weight and slant flags.
    #[must_use]
    pub fn with_attributes(mut self, attributes: FontAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Enables or disables font scaling.
    #[must_use]
    pub fn with_auto_scaling(mut self, auto_scaling: bool) -> Self {
        self.auto_scaling = auto_scaling;
        self
    }

    /// The size, if set to a positive value.
    pub fn size(&self) -> Option<f32> {
        self.size.filter(|size| *size > 0.0)
    }

    /// Returns `true` if this descriptor requests nothing beyond the platform default font.
    ///
    /// The scaling flag does not participate.
    pub fn is_default(&self) -> bool {
        self.family.is_none() && self.size().is_none() && self.attributes.is_empty()
    }

    /// Fills in the size from `fallback` when this descriptor has none.
    #[must_use]
    pub fn with_fallback_size(mut self, fallback: Option<f32>) -> Self {
        if self.size().is_none() {
            self.size = fallback;
        }
        self
    }

    /// The size in device pixels.
    ///
    /// Scaled fonts use the scaled density, others the plain density.
    pub fn pixel_size(&self, metrics: &DisplayMetrics) -> Option<f32> {
        let density = if self.auto_scaling {
            metrics.scaled_density
        } else {
            metrics.density
        };
        self.size().map(|size| size * density)
    }
}

/// Conversion factors from device-independent units to device pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayMetrics {
    /// Pixels per device-independent unit.
    pub density: f32,
    /// Pixels per device-independent unit for scalable text.
    pub scaled_density: f32,
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self {
            density: 1.0,
            scaled_density: 1.0,
        }
    }
}

impl DisplayMetrics {
    /// Metrics with the same factor for scaled and unscaled sizes.
    pub fn new(density: f32) -> Self {
        Self {
            density,
            scaled_density: density,
        }
    }

    /// Sets the factor for scalable text.
    #[must_use]
    pub fn with_scaled_density(mut self, scaled_density: f32) -> Self {
        self.scaled_density = scaled_density;
        self
    }
}

/// Maps font descriptors to native font handles.
pub trait FontResolver {
    /// The native font handle.
    type Font;

    /// Resolves `font` to a handle.
    fn resolve(&mut self, font: &FontDescriptor) -> Self::Font;
}

/// A resolved font applied to a byte range of compiled text.
#[derive(Clone, Debug, PartialEq)]
pub struct FontRun<F> {
    /// The byte range in the compiled text.
    pub range: Range<usize>,
    /// The native font handle.
    pub font: F,
    /// The size in device pixels, if the descriptor has one.
    pub pixel_size: Option<f32>,
}
