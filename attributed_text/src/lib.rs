// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attributed Text is a styled-string container: a block of UTF-8 text plus attributes
//! applied to byte ranges of it.
//!
//! Every attribute span carries a [`SpanFlags`] overlap policy describing how it grows
//! when text is appended at its endpoints. Spans are kept in insertion order and may
//! overlap freely; [`AttributedText::attributes_for_range`] and
//! [`AttributedText::next_transition`] let callers walk the text run by run.
//!
//! ```
//! use attributed_text::{AttributedText, SpanFlags};
//!
//! let mut text = AttributedText::new(String::from("Hello"));
//! text.apply_attribute(0..5, "bold", SpanFlags::INCLUSIVE_INCLUSIVE).unwrap();
//! text.push_str(" world");
//!
//! assert_eq!(text.next_transition(0, text.len()), text.len());
//! assert_eq!(text.attributes_at(8).next(), Some(&"bold"));
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
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
#![no_std]

extern crate alloc;

mod attributed_text;
mod error;
mod span_flags;
mod text_storage;

pub use crate::attributed_text::{AttributeSpan, AttributedText};
pub use crate::error::{BoundaryInfo, Endpoint, Error, ErrorKind};
pub use crate::span_flags::{Boundary, SpanFlags};
pub use crate::text_storage::{AppendableStorage, TextStorage};
