// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt::Debug;
use core::ops::Range;

use crate::{AppendableStorage, Error, SpanFlags, TextStorage};

/// An attribute applied to a byte range, along with its overlap policy.
#[derive(Clone, Debug, PartialEq)]
pub struct AttributeSpan<Attr> {
    /// The byte range covered by the attribute.
    pub range: Range<usize>,
    /// The attribute value.
    pub attribute: Attr,
    /// How the range reacts to text inserted at its endpoints.
    pub flags: SpanFlags,
}

impl<Attr> AttributeSpan<Attr> {
    /// Returns `true` if this span touches `query`.
    ///
    /// Ranges that merely abut do not touch unless one of them is empty.
    pub fn touches(&self, query: &Range<usize>) -> bool {
        let range = &self.range;
        if range.start > query.end || range.end < query.start {
            return false;
        }
        if !range.is_empty() && !query.is_empty() {
            return range.start != query.end && range.end != query.start;
        }
        true
    }
}

/// A block of text with attributes applied to ranges within the text.
#[derive(Debug)]
pub struct AttributedText<T: Debug + TextStorage, Attr: Debug> {
    text: T,
    attributes: Vec<AttributeSpan<Attr>>,
}

impl<T: Debug + TextStorage, Attr: Debug> AttributedText<T, Attr> {
    /// Create an `AttributedText` with no attributes applied.
    pub fn new(text: T) -> Self {
        Self {
            text,
            attributes: Vec::default(),
        }
    }

    /// Borrow the underlying text storage.
    pub fn text(&self) -> &T {
        &self.text
    }

    /// Returns the length of the underlying text, in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the underlying text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Borrow the underlying text as `&str` when the storage is contiguous.
    pub fn as_str(&self) -> &str
    where
        T: AsRef<str>,
    {
        self.text.as_ref()
    }

    /// Apply an `attribute` to a `range` within the text.
    pub fn apply_attribute(
        &mut self,
        range: Range<usize>,
        attribute: Attr,
        flags: SpanFlags,
    ) -> Result<(), Error> {
        Error::check(&self.text, &range)?;
        self.attributes.push(AttributeSpan {
            range,
            attribute,
            flags,
        });
        Ok(())
    }

    /// Append `text`, growing the attributes whose flags include the old end of the text.
    pub fn push_str(&mut self, text: &str)
    where
        T: AppendableStorage,
    {
        let old_len = self.text.len();
        self.text.append(text);
        let new_len = self.text.len();
        for span in &mut self.attributes {
            if span.range.start == old_len && !span.flags.extends_at_start() {
                span.range.start = new_len;
            }
            if span.range.end == old_len && span.flags.extends_at_end() {
                span.range.end = new_len;
            }
            if span.range.end < span.range.start {
                span.range.end = span.range.start;
            }
        }
    }

    /// Iterate over all attribute spans.
    ///
    /// Spans are yielded in the order they were applied.
    pub fn attributes_iter(&self) -> impl ExactSizeIterator<Item = &AttributeSpan<Attr>> {
        self.attributes.iter()
    }

    /// Get an iterator over the attributes that apply at the given `index`.
    ///
    /// This doesn't handle conflicting attributes, it just reports everything.
    pub fn attributes_at(&self, index: usize) -> impl Iterator<Item = &Attr> {
        self.attributes
            .iter()
            .filter(move |span| span.range.contains(&index))
            .map(|span| &span.attribute)
    }

    /// Get an iterator over the attribute spans touching the given `range`.
    ///
    /// Spans keep their full ranges, which may extend past `range` on either side.
    pub fn attributes_for_range(
        &self,
        range: Range<usize>,
    ) -> impl Iterator<Item = &AttributeSpan<Attr>> {
        self.attributes
            .iter()
            .filter(move |span| span.touches(&range))
    }

    /// Returns the first offset after `start` where an attribute begins or ends.
    ///
    /// Returns `limit` when there is no such offset before it.
    pub fn next_transition(&self, start: usize, limit: usize) -> usize {
        self.attributes
            .iter()
            .flat_map(|span| [span.range.start, span.range.end])
            .filter(|&offset| offset > start && offset < limit)
            .min()
            .unwrap_or(limit)
    }

    /// Returns the number of attribute spans applied to the text.
    pub fn attributes_len(&self) -> usize {
        self.attributes.len()
    }

    /// Remove all applied attribute spans.
    pub fn clear_attributes(&mut self) {
        self.attributes.clear();
    }
}
