// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::borrow::Cow;

/// Case transform applied to span text before it is concatenated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextTransform {
    /// Leave the text as is.
    None,
    /// Inherit the document transform.
    #[default]
    Default,
    /// Map to upper case.
    Uppercase,
    /// Map to lower case.
    Lowercase,
}

impl TextTransform {
    /// Resolves [`TextTransform::Default`] against `fallback`.
    ///
    /// A `Default` fallback resolves to [`TextTransform::None`].
    #[must_use]
    pub fn resolve(self, fallback: Self) -> Self {
        match (self, fallback) {
            (Self::Default, Self::Default) => Self::None,
            (Self::Default, fallback) => fallback,
            (transform, _) => transform,
        }
    }

    /// Applies the transform to `text`.
    ///
    /// Case mapping is the locale-independent Unicode mapping, so the result is the same on
    /// every platform. It may change the byte length of the text (`"ﬁ"` uppercases to `"FI"`).
    pub fn apply(self, text: &str) -> Cow<'_, str> {
        match self {
            Self::Uppercase => Cow::Owned(text.to_uppercase()),
            Self::Lowercase => Cow::Owned(text.to_lowercase()),
            Self::None | Self::Default => Cow::Borrowed(text),
        }
    }
}

/// Applies `transform` to optional span text; missing text stays missing.
pub fn transform_text(text: Option<&str>, transform: TextTransform) -> Option<Cow<'_, str>> {
    text.map(|text| transform.apply(text))
}

#[cfg(test)]
mod tests {
    use super::{TextTransform, transform_text};

    #[test]
    fn default_resolves_through_fallback() {
        assert_eq!(
            TextTransform::Default.resolve(TextTransform::Uppercase),
            TextTransform::Uppercase
        );
        assert_eq!(
            TextTransform::Default.resolve(TextTransform::Default),
            TextTransform::None
        );
        assert_eq!(
            TextTransform::Lowercase.resolve(TextTransform::Uppercase),
            TextTransform::Lowercase
        );
    }

    #[test]
    fn missing_text_stays_missing() {
        assert!(transform_text(None, TextTransform::Uppercase).is_none());
        assert_eq!(
            transform_text(Some("MiXeD"), TextTransform::Lowercase).as_deref(),
            Some("mixed")
        );
        assert_eq!(
            transform_text(Some("MiXeD"), TextTransform::None).as_deref(),
            Some("MiXeD")
        );
    }

    #[test]
    fn uppercase_can_change_length() {
        let upper = TextTransform::Uppercase.apply("ﬁne");
        assert_eq!(upper, "FINE");
        assert_eq!("ﬁne".len(), 5);
        assert_eq!(upper.len(), 4);
    }
}
