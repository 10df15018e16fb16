// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small builders shared by the tests.

use peniko::Color;
use peniko::kurbo::Size;

use crate::{CompiledText, DocumentDefaults, FormattedText, Span, SurfaceGeometry, compile};

/// A span with `text` in `color`.
pub(crate) fn colored(text: &str, color: Color) -> Span {
    Span::new(text).with_text_color(color)
}

/// Compiles `text` with default document settings.
pub(crate) fn compile_default(text: &FormattedText) -> CompiledText {
    compile(text, &DocumentDefaults::default())
}

/// An unpadded surface at scale 1.
pub(crate) fn surface(width: f64, height: f64) -> SurfaceGeometry {
    SurfaceGeometry::new(Size::new(width, height))
}
