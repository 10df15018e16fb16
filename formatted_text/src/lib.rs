// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Formatted text: an ordered list of styled [`Span`]s, compiled to [`attributed_text`] and
//! mapped back from a rendered layout to per-span hit regions.
//!
//! The flow has two halves:
//!
//! 1. [`compile`] resolves every span against the [`DocumentDefaults`], applies its text
//!    transform and concatenates the results into a [`CompiledText`]: a single string plus
//!    one attribute range per styled property per span.
//! 2. A layout engine (anything implementing [`TextLayout`]) lays the compiled string out.
//!    [`reconstruct`] then walks the attribute runs of the compiled text, asks the layout
//!    where each run landed line by line, and attaches the resulting [`Region`] to every
//!    span the run covers. [`FormattedText::span_at`] uses those regions for hit testing.
//!
//! [`FixedAdvanceLayout`] is a small deterministic layout engine for use where no native
//! text stack is available.
//!
//! ## Indices
//!
//! All offsets are **byte indices** into the compiled UTF-8 string.
//!
//! ## Example
//!
//! ```
//! use formatted_text::{
//!     DocumentDefaults, FixedAdvanceLayout, FixedMetrics, FormattedText, Span,
//!     SurfaceGeometry, compile, reconstruct,
//! };
//! use peniko::color::palette::css;
//! use peniko::kurbo::{Point, Size};
//!
//! let mut text = FormattedText::from_iter([
//!     Span::new("Hello, ").with_text_color(css::RED),
//!     Span::new("world").with_text_color(css::BLUE),
//! ]);
//! let compiled = compile(&text, &DocumentDefaults::default());
//! assert_eq!(compiled.as_str(), "Hello, world");
//!
//! let layout = FixedAdvanceLayout::new(&compiled, 400.0, FixedMetrics::default());
//! let surface = SurfaceGeometry::new(Size::new(400.0, 100.0));
//! reconstruct(Some(&layout), &compiled, &mut text, &surface);
//!
//! assert_eq!(text.span_at(Point::new(5.0, 5.0)), Some(0));
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): Get floating point functions from the standard library.
//! - `libm`: Use floating point implementations from [libm].
//!
//! At least one of `std` and `libm` is required; `std` overrides `libm`.
//!
//! [libm]: https://crates.io/crates/libm

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("formatted_text requires either the `std` or `libm` feature to be enabled");

extern crate alloc;

mod attribute;
mod compile;
mod convert;
mod defaults;
mod fixed;
mod font;
mod layout;
mod reconstruct;
mod region;
mod span;
mod transform;

#[cfg(test)]
mod tests;

pub use attributed_text;
pub use peniko;

pub use attribute::{AttributeKind, AttributeRange, EM_COEFFICIENT, TextAttribute};
pub use compile::{CompiledText, compile};
pub use convert::to_argb;
pub use defaults::{DocumentDefaults, TextAlignment};
pub use fixed::{Direction, FixedAdvanceLayout, FixedMetrics};
pub use font::{DisplayMetrics, FontAttributes, FontDescriptor, FontResolver, FontRun};
pub use layout::TextLayout;
pub use reconstruct::{MIN_RECT_WIDTH, REGION_INFLATION, SurfaceGeometry, reconstruct};
pub use region::Region;
pub use span::{FormattedText, Span, TextDecorations};
pub use transform::{TextTransform, transform_text};
