use crate::PresentationStyle::{Emoji, Text};
use crate::{
    emoji_category_of, has_property, script_of, EmojiSegmentationCategory, EmojiSegmenter,
    PresentationStyle, Property, Range, RunSegmenter, Script, ScriptSegmenter, Segmenter,
    UNICODE_VERSION,
};

fn scalars(text: &str) -> Vec<u32> {
    text.chars().map(|c| c as u32).collect()
}

fn runs(text: &str) -> Vec<(usize, usize, Script, PresentationStyle)> {
    let buffer = scalars(text);
    RunSegmenter::new(&buffer)
        .map(|run| (run.start, run.end, run.script, run.presentation))
        .collect()
}

fn script_runs(text: &str) -> Vec<(usize, usize, Script)> {
    let buffer = scalars(text);
    ScriptSegmenter::new(&buffer)
        .map(|run| (run.start, run.end, run.script))
        .collect()
}

fn presentation_runs(text: &str) -> Vec<(usize, usize, PresentationStyle)> {
    let buffer = scalars(text);
    EmojiSegmenter::new(&buffer)
        .map(|run| (run.start, run.end, run.presentation))
        .collect()
}

#[test]
fn empty_input() {
    let mut segmenter = RunSegmenter::new(&[]);
    assert_eq!(segmenter.consume(), None);
    assert_eq!(segmenter.consume(), None);
    let range = Range::default();
    assert_eq!(range.start, 0);
    assert_eq!(range.end, 0);
    assert_eq!(range.script, Script::Invalid);
    assert_eq!(range.presentation, Text);
}

#[test]
fn emoji_adopts_surrounding_latin() {
    assert_eq!(
        runs("A\u{1F600}"),
        [(0, 1, Script::Latin, Text), (1, 2, Script::Latin, Emoji)]
    );
    assert_eq!(
        runs("AB\u{1F600}CD"),
        [
            (0, 2, Script::Latin, Text),
            (2, 3, Script::Latin, Emoji),
            (3, 5, Script::Latin, Text),
        ]
    );
}

#[test]
fn arabic_then_hangul() {
    assert_eq!(
        runs("نص키스의"),
        [(0, 2, Script::Arabic, Text), (2, 5, Script::Hangul, Text)]
    );
}

#[test]
fn emoji_runs_inherit_preceding_script() {
    assert_eq!(
        runs("百家姓ऋषियों🌱🌲🌳🌴百家姓🌱🌲"),
        [
            (0, 3, Script::Han, Text),
            (3, 9, Script::Devanagari, Text),
            (9, 13, Script::Devanagari, Emoji),
            (13, 16, Script::Han, Text),
            (16, 18, Script::Han, Emoji),
        ]
    );
}

#[test]
fn vs15_forces_text_presentation() {
    assert_eq!(runs("\u{1F600}\u{FE0E}"), [(0, 2, Script::Common, Text)]);
}

#[test]
fn vs16_forces_emoji_presentation() {
    // U+270C victory hand is a text-default modifier base
    assert_eq!(runs("\u{270C}"), [(0, 1, Script::Common, Text)]);
    assert_eq!(runs("\u{270C}\u{FE0F}"), [(0, 2, Script::Common, Emoji)]);
    assert_eq!(runs("\u{270C}\u{1F3FD}"), [(0, 2, Script::Common, Emoji)]);
}

#[test]
fn subdivision_flags_form_one_emoji_run() {
    // England, Scotland and Wales tag sequences back to back
    let flags = "\u{1F3F4}\u{E0067}\u{E0062}\u{E0065}\u{E006E}\u{E0067}\u{E007F}\
                 \u{1F3F4}\u{E0067}\u{E0062}\u{E0073}\u{E0063}\u{E0074}\u{E007F}\
                 \u{1F3F4}\u{E0067}\u{E0062}\u{E0077}\u{E006C}\u{E0073}\u{E007F}";
    assert_eq!(runs(flags), [(0, 21, Script::Common, Emoji)]);
}

#[test]
fn zwj_sequences_split_on_trailing_zwj() {
    let text = "👩\u{200D}👩\u{200D}👧\u{200D}👦abcd👩\u{200D}👩\u{200D}efg";
    assert_eq!(
        runs(text),
        [
            (0, 7, Script::Latin, Emoji),
            (7, 11, Script::Latin, Text),
            (11, 14, Script::Latin, Emoji),
            (14, 18, Script::Latin, Text),
        ]
    );
}

#[test]
fn lone_zwj_belongs_to_the_following_run() {
    assert_eq!(
        runs("👩\u{200D}x"),
        [(0, 1, Script::Latin, Emoji), (1, 3, Script::Latin, Text)]
    );
}

#[test]
fn flag_pairs() {
    assert_eq!(runs("🇺🇸🇩🇪"), [(0, 4, Script::Common, Emoji)]);
    // a third regional indicator starts a new pair and stays text
    assert_eq!(
        runs("🇺🇸🇺"),
        [(0, 2, Script::Common, Emoji), (2, 3, Script::Common, Text)]
    );
}

#[test]
fn keycap_sequences() {
    assert_eq!(runs("#\u{FE0F}\u{20E3}"), [(0, 3, Script::Common, Emoji)]);
    assert_eq!(runs("1\u{20E3}"), [(0, 2, Script::Common, Emoji)]);
    assert_eq!(runs("#"), [(0, 1, Script::Common, Text)]);
    assert_eq!(runs("1234"), [(0, 4, Script::Common, Text)]);
}

#[test]
fn enclosing_circle_backslash_binds_to_its_base() {
    // U+2708 airplane is text-default; the enclosing mark forces emoji
    assert_eq!(runs("\u{2708}"), [(0, 1, Script::Common, Text)]);
    assert_eq!(runs("\u{2708}\u{20E0}"), [(0, 2, Script::Common, Emoji)]);
}

#[test]
fn modifier_sequences() {
    assert_eq!(runs("👍🏽"), [(0, 2, Script::Common, Emoji)]);
    // a lone modifier base with emoji presentation still renders emoji
    assert_eq!(runs("👍"), [(0, 1, Script::Common, Emoji)]);
}

#[test]
fn script_inheritance() {
    assert_eq!(
        script_runs("aم"),
        [(0, 1, Script::Latin), (1, 2, Script::Arabic)]
    );
    // leading common codepoints join the first concrete script
    assert_eq!(script_runs("  م"), [(0, 3, Script::Arabic)]);
    // trailing common codepoints join the preceding run
    assert_eq!(
        script_runs("م. a"),
        [(0, 3, Script::Arabic), (3, 4, Script::Latin)]
    );
    // combining marks stay with their base
    assert_eq!(script_runs("e\u{0301}x"), [(0, 3, Script::Latin)]);
    assert_eq!(
        script_runs("م\u{0301}A"),
        [(0, 2, Script::Arabic), (2, 3, Script::Latin)]
    );
}

#[test]
fn common_only_input() {
    assert_eq!(script_runs("... !"), [(0, 5, Script::Common)]);
    assert_eq!(runs("... !"), [(0, 5, Script::Common, Text)]);
}

#[test]
fn presentation_runs_are_maximal() {
    assert_eq!(
        presentation_runs("ab🌱🌲cd"),
        [(0, 2, Text), (2, 4, Emoji), (4, 6, Text)]
    );
    assert_eq!(presentation_runs("🌱🌲🌳"), [(0, 3, Emoji)]);
}

#[test]
fn surrogates_classify_as_unknown() {
    assert_eq!(script_of(0xD800), Script::Unknown);
    assert_eq!(emoji_category_of(0xDFFF), EmojiSegmentationCategory::Invalid);
    let buffer = [0xD800, 0x0041];
    let collected: Vec<Range> = RunSegmenter::new(&buffer).collect();
    assert_eq!(
        collected,
        [
            Range {
                start: 0,
                end: 1,
                script: Script::Unknown,
                presentation: Text
            },
            Range {
                start: 1,
                end: 2,
                script: Script::Latin,
                presentation: Text
            },
        ]
    );
}

#[test]
fn out_of_range_scalars_are_clamped() {
    assert_eq!(script_of(0x110000), Script::Unknown);
    assert_eq!(script_of(u32::MAX), Script::Unknown);
    assert_eq!(
        emoji_category_of(0x110000),
        EmojiSegmentationCategory::Invalid
    );
    assert!(!has_property(0x110000, Property::Emoji));
}

#[test]
fn property_lookups() {
    assert!(has_property(0x1F600, Property::Emoji));
    assert!(has_property(0x1F600, Property::EmojiPresentation));
    assert!(has_property(0x1F600, Property::ExtendedPictographic));
    assert!(has_property(0x270C, Property::Emoji));
    assert!(!has_property(0x270C, Property::EmojiPresentation));
    assert!(has_property(0x270C, Property::EmojiModifierBase));
    assert!(has_property(0x1F3FB, Property::EmojiModifier));
    assert!(has_property(0x2764, Property::ExtendedPictographic));
    assert!(!has_property(0x0041, Property::Emoji));
}

#[test]
fn emoji_categories() {
    use EmojiSegmentationCategory::*;
    assert_eq!(emoji_category_of(0x0023), KeyCapBase);
    assert_eq!(emoji_category_of(0x0035), KeyCapBase);
    assert_eq!(emoji_category_of(0x200D), ZWJ);
    assert_eq!(emoji_category_of(0xFE0E), VS15);
    assert_eq!(emoji_category_of(0xFE0F), VS16);
    assert_eq!(emoji_category_of(0x20E3), CombiningEnclosingKeyCap);
    assert_eq!(emoji_category_of(0x20E0), CombiningEnclosingCircleBackslash);
    assert_eq!(emoji_category_of(0x1F3F4), TagBase);
    assert_eq!(emoji_category_of(0xE0067), TagSequence);
    assert_eq!(emoji_category_of(0xE007F), TagTerm);
    assert_eq!(emoji_category_of(0x1F1E6), RegionalIndicator);
    assert_eq!(emoji_category_of(0x1F469), EmojiModifierBase);
    assert_eq!(emoji_category_of(0x1F3FB), EmojiModifier);
    assert_eq!(emoji_category_of(0x1F600), EmojiEmojiPresentation);
    assert_eq!(emoji_category_of(0x2764), EmojiTextPresentation);
    assert_eq!(emoji_category_of(0x0041), Invalid);
}

#[test]
fn stable_category_identifiers() {
    use EmojiSegmentationCategory as C;
    assert_eq!(C::Invalid as i8, -1);
    assert_eq!(C::Emoji as i8, 0);
    assert_eq!(C::EmojiVSBase as i8, 5);
    assert_eq!(C::ZWJ as i8, 10);
    assert_eq!(C::TagTerm as i8, 15);
    assert_eq!(PresentationStyle::Text as u8, 0);
    assert_eq!(PresentationStyle::Emoji as u8, 1);
}

#[test]
fn table_version_is_recorded() {
    assert_eq!(UNICODE_VERSION, (15, 0, 0));
}

fn check_invariants(buffer: &[u32]) {
    let first: Vec<Range> = RunSegmenter::new(buffer).collect();
    let second: Vec<Range> = RunSegmenter::new(buffer).collect();
    assert_eq!(first, second);

    let mut expected_start = 0;
    for run in &first {
        assert_eq!(run.start, expected_start);
        assert!(run.end > run.start);
        assert_ne!(run.script, Script::Invalid);
        assert_ne!(run.script, Script::Inherited);
        expected_start = run.end;
    }
    assert_eq!(expected_start, buffer.len());

    for window in first.windows(2) {
        assert!(
            window[0].script != window[1].script
                || window[0].presentation != window[1].presentation,
            "adjacent runs {:?} and {:?} should have merged",
            window[0],
            window[1]
        );
    }

    let has_concrete = buffer
        .iter()
        .any(|&cp| !matches!(script_of(cp), Script::Common | Script::Inherited));
    if has_concrete {
        assert!(first.iter().all(|run| run.script != Script::Common));
    }

    let mut segmenter = RunSegmenter::new(buffer);
    while segmenter.consume().is_some() {}
    assert_eq!(segmenter.consume(), None);
}

#[test]
fn universal_invariants() {
    let corpus = [
        "",
        "hello world",
        "نص키스의",
        "百家姓ऋषियों🌱🌲🌳🌴百家姓🌱🌲",
        "👩\u{200D}👩\u{200D}👧\u{200D}👦abcd👩\u{200D}👩\u{200D}efg",
        "\u{1F600}\u{FE0E}",
        "#\u{FE0F}\u{20E3}42",
        "🇺🇸🇺مabあア한中",
        "e\u{0301}\u{200D}\u{FE0F}",
        "\u{200D}",
        "\u{FE0F}",
        "... !",
    ];
    for text in corpus {
        check_invariants(&scalars(text));
    }
    check_invariants(&[0xD800, 0xDFFF, 0x41]);
    check_invariants(&[0x10FFFF, 0x1F600]);
}

#[test]
fn table_agrees_with_unicode_script() {
    use unicode_script::UnicodeScript;
    for c in [
        'A', 'ß', 'Ω', 'я', 'א', 'م', 'क', '中', 'あ', 'ア', '한', 'ก', ' ', '!', '\u{300}',
        '\u{200D}',
    ] {
        assert_eq!(
            script_of(c as u32).name(),
            c.script().full_name(),
            "script mismatch for {c:?}"
        );
    }
}
