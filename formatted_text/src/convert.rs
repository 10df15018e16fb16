// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;

/// Packs `color` as 8-bit sRGB `0xAARRGGBB`.
pub fn to_argb(color: Color) -> u32 {
    let rgba = color.to_rgba8();
    u32::from_be_bytes([rgba.a, rgba.r, rgba.g, rgba.b])
}
