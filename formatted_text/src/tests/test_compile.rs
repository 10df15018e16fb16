// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::ops::Range;
use std::string::String;
use std::sync::Arc;
use std::vec::Vec;

use attributed_text::SpanFlags;
use peniko::color::palette::css;

use crate::{
    AttributeKind, DisplayMetrics, DocumentDefaults, EM_COEFFICIENT, FontAttributes,
    FontDescriptor, FontResolver, FormattedText, Span, TextAttribute, TextDecorations,
    TextTransform, compile,
};

use super::utils::{colored, compile_default};

fn ranges_of(compiled: &crate::CompiledText, kind: AttributeKind) -> Vec<Range<usize>> {
    compiled
        .attributes()
        .filter(|attribute| attribute.kind() == kind)
        .map(|attribute| attribute.range())
        .collect()
}

#[test]
fn spans_concatenate_in_order() {
    let text = FormattedText::from_iter([colored("AB", css::RED), colored("CD", css::BLUE)]);
    let compiled = compile_default(&text);

    assert_eq!(compiled.as_str(), "ABCD");
    let attributes: Vec<_> = compiled
        .attributes()
        .map(|attribute| (attribute.attribute.argb(), attribute.range()))
        .collect();
    assert_eq!(
        attributes,
        [(Some(0xFFFF_0000), 0..2), (Some(0xFF00_00FF), 2..4)]
    );
    assert_eq!(compiled.span_ranges(), [Some(0..2), Some(2..4)]);
}

#[test]
fn empty_span_is_skipped() {
    let text = FormattedText::from_iter([
        Span::new("AB").with_line_height(1.5),
        Span::new("").with_line_height(12.0),
        Span::new("CD").with_line_height(2.0),
    ]);
    let compiled = compile_default(&text);

    assert_eq!(compiled.as_str(), "ABCD");
    assert_eq!(ranges_of(&compiled, AttributeKind::LineHeight), [0..2, 2..4]);
    assert_eq!(compiled.span_range(1), None);
    assert_eq!(compiled.span_range(2), Some(2..4));
}

#[test]
fn span_without_text_contributes_nothing() {
    let missing = Span::default().with_text_color(css::GREEN);
    assert!(missing.text.is_none());
    let text = FormattedText::from_iter([missing, colored("AB", css::RED)]);
    let compiled = compile_default(&text);

    assert_eq!(compiled.as_str(), "AB");
    assert_eq!(compiled.attributes().len(), 1);
    assert_eq!(compiled.span_ranges(), [None, Some(0..2)]);
}

#[test]
fn no_spans_compile_to_nothing() {
    let compiled = compile_default(&FormattedText::new());

    assert!(compiled.is_empty());
    assert_eq!(compiled.attributes().len(), 0);
    assert!(compiled.span_ranges().is_empty());
    assert_eq!(compiled.span_range(0), None);
}

#[test]
fn document_color_fills_unset_spans() {
    let text = FormattedText::from_iter([
        Span::new("AB"),
        colored("CD", css::BLUE).with_background_color(css::YELLOW),
    ]);
    let defaults = DocumentDefaults::default().with_color(css::RED);
    let compiled = compile(&text, &defaults);

    let colors: Vec<_> = compiled
        .attributes()
        .filter_map(|attribute| Some((attribute.kind(), attribute.attribute.argb()?)))
        .collect();
    assert_eq!(
        colors,
        [
            (AttributeKind::Foreground, 0xFFFF_0000),
            (AttributeKind::Foreground, 0xFF00_00FF),
            (AttributeKind::Background, 0xFFFF_FF00),
        ]
    );
    // Backgrounds have no document default.
    assert_eq!(ranges_of(&compiled, AttributeKind::Background), [2..4]);
}

#[test]
fn character_spacing_is_converted_to_em() {
    let text = FormattedText::from_iter([
        Span::new("AB").with_character_spacing(10.0),
        Span::new("CD"),
        Span::new("EF").with_character_spacing(-1.0),
    ]);

    let compiled = compile_default(&text);
    let spacing: Vec<_> = compiled
        .attributes()
        .filter_map(|attribute| match attribute.attribute {
            TextAttribute::LetterSpacing(em) => Some((em, attribute.range())),
            _ => None,
        })
        .collect();
    assert_eq!(spacing, [(10.0 * EM_COEFFICIENT, 0..2)]);

    let defaults = DocumentDefaults::default().with_character_spacing(5.0);
    let compiled = compile(&text, &defaults);
    let spacing: Vec<_> = compiled
        .attributes()
        .filter_map(|attribute| match attribute.attribute {
            TextAttribute::LetterSpacing(em) => Some(em),
            _ => None,
        })
        .collect();
    assert_eq!(
        spacing,
        [
            10.0 * EM_COEFFICIENT,
            5.0 * EM_COEFFICIENT,
            5.0 * EM_COEFFICIENT
        ]
    );
}

#[test]
fn fonts_fall_back_to_the_document_font() {
    let serif = FontDescriptor::family("Serif");
    let text = FormattedText::from_iter([
        Span::new("AB"),
        Span::new("CD").with_font(serif.clone()),
        Span::new("EF").with_font(FontDescriptor::of_size(20.0)),
    ]);

    // Without a document font, only the explicit fonts are emitted.
    let compiled = compile_default(&text);
    assert_eq!(ranges_of(&compiled, AttributeKind::Font), [2..4, 4..6]);

    let body = FontDescriptor::family("Sans").with_size(14.0);
    let defaults = DocumentDefaults::default().with_font(body.clone());
    let compiled = compile(&text, &defaults);
    let fonts: Vec<_> = compiled
        .attributes()
        .filter_map(|attribute| match attribute.attribute {
            TextAttribute::Font(font) => Some(font),
            _ => None,
        })
        .collect();
    assert_eq!(
        fonts,
        [
            body,
            serif.with_size(14.0),
            FontDescriptor::of_size(20.0),
        ]
    );
}

#[test]
fn decorations_distinguish_unset_from_none() {
    let text = FormattedText::from_iter([
        Span::new("AB"),
        Span::new("CD").with_text_decorations(TextDecorations::empty()),
        Span::new("EF").with_text_decorations(TextDecorations::all()),
    ]);
    let defaults = DocumentDefaults::default().with_text_decorations(TextDecorations::UNDERLINE);
    let compiled = compile(&text, &defaults);

    let decorations: Vec<_> = compiled
        .attributes()
        .map(|attribute| (attribute.kind(), attribute.range()))
        .collect();
    assert_eq!(
        decorations,
        [
            (AttributeKind::Underline, 0..2),
            (AttributeKind::Strikethrough, 4..6),
            (AttributeKind::Underline, 4..6),
        ]
    );
}

#[test]
fn transforms_resolve_against_the_document() {
    let text = FormattedText::from_iter([
        Span::new("ab"),
        Span::new("Cd").with_text_transform(TextTransform::Lowercase),
        Span::new("ef").with_text_transform(TextTransform::None),
    ]);
    let defaults = DocumentDefaults::default().with_text_transform(TextTransform::Uppercase);

    assert_eq!(compile(&text, &defaults).as_str(), "ABcdef");
    assert_eq!(compile_default(&text).as_str(), "abcdef");
    // Compiling never touches the spans.
    assert_eq!(text.spans()[0].text.as_deref(), Some("ab"));
}

#[test]
fn length_changing_transform_keeps_ranges_aligned() {
    let text = FormattedText::from_iter([
        colored("ﬁ", css::RED).with_text_transform(TextTransform::Uppercase),
        colored("x", css::BLUE),
    ]);
    let compiled = compile_default(&text);

    assert_eq!(compiled.as_str(), "FIx");
    assert_eq!(
        ranges_of(&compiled, AttributeKind::Foreground),
        [0..2, 2..3]
    );
    let blue = compiled.span_range(1).unwrap();
    assert_eq!(&compiled.as_str()[blue], "x");
}

#[test]
fn attribute_kinds_use_their_overlap_policy() {
    let span = colored("AB", css::RED)
        .with_background_color(css::WHITE)
        .with_line_height(1.2)
        .with_character_spacing(1.0)
        .with_font(FontDescriptor::family("Mono"))
        .with_text_decorations(TextDecorations::all());
    let compiled = compile_default(&FormattedText::from_iter([span]));

    let flags: Vec<_> = compiled
        .attributed()
        .attributes_iter()
        .map(|span| (span.attribute.kind(), span.flags))
        .collect();
    assert_eq!(
        flags,
        [
            (AttributeKind::Foreground, SpanFlags::INCLUSIVE_EXCLUSIVE),
            (AttributeKind::Background, SpanFlags::INCLUSIVE_EXCLUSIVE),
            (AttributeKind::LineHeight, SpanFlags::INCLUSIVE_EXCLUSIVE),
            (AttributeKind::LetterSpacing, SpanFlags::INCLUSIVE_INCLUSIVE),
            (AttributeKind::Font, SpanFlags::INCLUSIVE_INCLUSIVE),
            (AttributeKind::Strikethrough, SpanFlags::INCLUSIVE_INCLUSIVE),
            (AttributeKind::Underline, SpanFlags::INCLUSIVE_INCLUSIVE),
        ]
    );
}

#[derive(Default)]
struct RecordingResolver {
    requests: Vec<Option<Arc<str>>>,
}

impl FontResolver for RecordingResolver {
    type Font = String;

    fn resolve(&mut self, font: &FontDescriptor) -> String {
        self.requests.push(font.family.clone());
        let mut name = String::from(font.family.as_deref().unwrap_or("default"));
        if font.attributes.contains(FontAttributes::BOLD) {
            name.push_str(" Bold");
        }
        name
    }
}

#[test]
fn fonts_resolve_with_scaled_or_plain_density() {
    let text = FormattedText::from_iter([
        Span::new("AB").with_font(
            FontDescriptor::family("Serif")
                .with_size(10.0)
                .with_attributes(FontAttributes::BOLD),
        ),
        Span::new("CD"),
        Span::new("EF").with_font(FontDescriptor::of_size(10.0).with_auto_scaling(false)),
    ]);
    let compiled = compile_default(&text);
    let metrics = DisplayMetrics::new(1.5).with_scaled_density(2.0);

    let mut resolver = RecordingResolver::default();
    let runs = compiled.resolve_fonts(&mut resolver, &metrics);

    let serif: Arc<str> = Arc::from("Serif");
    assert_eq!(resolver.requests, [Some(serif), None]);
    let summary: Vec<_> = runs
        .iter()
        .map(|run| (run.range.clone(), run.font.as_str(), run.pixel_size))
        .collect();
    assert_eq!(
        summary,
        [
            (0..2, "Serif Bold", Some(20.0)),
            (4..6, "default", Some(15.0)),
        ]
    );
}
