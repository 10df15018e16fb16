// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How one endpoint of an attribute span behaves when text is inserted exactly at it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// Text inserted at this endpoint becomes part of the span.
    Inclusive,
    /// Text inserted at this endpoint stays outside of the span.
    Exclusive,
}

/// The overlap policy of an attribute span.
///
/// This mirrors the "span mark/point" flags of native styled strings: each endpoint is
/// independently inclusive or exclusive. The policy does not change which byte offsets an
/// attribute covers today, only how the span grows when the text around it grows.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SpanFlags {
    /// Behavior at the start offset.
    pub start: Boundary,
    /// Behavior at the end offset.
    pub end: Boundary,
}

impl SpanFlags {
    /// Grows with text inserted at the start, but not at the end.
    pub const INCLUSIVE_EXCLUSIVE: Self = Self::new(Boundary::Inclusive, Boundary::Exclusive);
    /// Grows with text inserted at either endpoint.
    pub const INCLUSIVE_INCLUSIVE: Self = Self::new(Boundary::Inclusive, Boundary::Inclusive);
    /// Never grows with text inserted at an endpoint.
    pub const EXCLUSIVE_EXCLUSIVE: Self = Self::new(Boundary::Exclusive, Boundary::Exclusive);
    /// Grows with text inserted at the end, but not at the start.
    pub const EXCLUSIVE_INCLUSIVE: Self = Self::new(Boundary::Exclusive, Boundary::Inclusive);

    /// Creates a policy from its two endpoints.
    #[must_use]
    pub const fn new(start: Boundary, end: Boundary) -> Self {
        Self { start, end }
    }

    /// Returns `true` if text appended at the end offset joins the span.
    #[must_use]
    pub const fn extends_at_end(self) -> bool {
        matches!(self.end, Boundary::Inclusive)
    }

    /// Returns `true` if text inserted at the start offset joins the span.
    #[must_use]
    pub const fn extends_at_start(self) -> bool {
        matches!(self.start, Boundary::Inclusive)
    }
}

impl Default for SpanFlags {
    fn default() -> Self {
        Self::EXCLUSIVE_EXCLUSIVE
    }
}
