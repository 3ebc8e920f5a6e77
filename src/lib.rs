#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

#[allow(warnings)]
mod emoji_data;
#[allow(warnings)]
mod script_data;

mod emoji;
mod run;
mod script;
#[cfg(test)]
mod test;

pub use emoji::{EmojiSegmentationCategory, EmojiSegmenter, PresentationRun, PresentationStyle};
pub use run::{Range, RunSegmenter};
pub use script::{Script, ScriptRun, ScriptSegmenter};
pub use script_data::UNICODE_VERSION;

/// Largest valid Unicode scalar value.
pub const MAX_CODEPOINT: u32 = 0x10FFFF;

/// A lazy boundary producer over a borrowed scalar buffer.
///
/// Each call to [`consume`](Segmenter::consume) yields the next maximal run
/// and advances past it, or reports exhaustion with `None`. Calls after
/// exhaustion keep returning `None`. Every implementation also implements
/// [`Iterator`] over its run type.
pub trait Segmenter {
    type Run;

    fn consume(&mut self) -> Option<Self::Run>;
}

/// Boolean codepoint properties from the UCD emoji data, for use with
/// [`has_property`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Emoji,
    EmojiPresentation,
    EmojiModifier,
    EmojiModifierBase,
    ExtendedPictographic,
}

/// Looks up the script of a scalar value.
///
/// Total over all inputs: unassigned codepoints, surrogates and values above
/// [`MAX_CODEPOINT`] answer [`Script::Unknown`].
#[inline]
pub fn script_of(cp: u32) -> Script {
    match find_range(script_data::SCRIPT_RANGES, cp) {
        Some(&(_, _, script)) => script,
        None => Script::Unknown,
    }
}

/// Looks up the emoji segmentation category of a scalar value.
///
/// Total over all inputs: non-emoji codepoints, surrogates and values above
/// [`MAX_CODEPOINT`] answer [`EmojiSegmentationCategory::Invalid`].
pub fn emoji_category_of(cp: u32) -> EmojiSegmentationCategory {
    use EmojiSegmentationCategory::*;
    match cp {
        0x20E3 => CombiningEnclosingKeyCap,
        0x20E0 => CombiningEnclosingCircleBackslash,
        0x200D => ZWJ,
        0xFE0E => VS15,
        0xFE0F => VS16,
        0x1F3F4 => TagBase,
        0xE0020..=0xE007E => TagSequence,
        0xE007F => TagTerm,
        0x0023 | 0x002A | 0x0030..=0x0039 => KeyCapBase,
        0x1F1E6..=0x1F1FF => RegionalIndicator,
        _ if has_property(cp, Property::EmojiModifierBase) => EmojiModifierBase,
        _ if has_property(cp, Property::EmojiModifier) => EmojiModifier,
        _ if has_property(cp, Property::EmojiPresentation) => EmojiEmojiPresentation,
        _ if has_property(cp, Property::Emoji) => EmojiTextPresentation,
        _ => Invalid,
    }
}

/// Tests a boolean emoji property of a scalar value.
///
/// Total over all inputs; surrogates and values above [`MAX_CODEPOINT`]
/// carry no properties.
#[inline]
pub fn has_property(cp: u32, property: Property) -> bool {
    let ranges: &[(u32, u32)] = match property {
        Property::Emoji => emoji_data::EMOJI,
        Property::EmojiPresentation => emoji_data::EMOJI_PRESENTATION,
        Property::EmojiModifier => emoji_data::EMOJI_MODIFIER,
        Property::EmojiModifierBase => emoji_data::EMOJI_MODIFIER_BASE,
        Property::ExtendedPictographic => emoji_data::EXTENDED_PICTOGRAPHIC,
    };
    ranges
        .binary_search_by(|&(first, last)| range_cmp(first, last, cp))
        .is_ok()
}

/// Binary search over a table of sorted, disjoint inclusive ranges keyed by
/// their first two fields.
fn find_range<T>(ranges: &'static [(u32, u32, T)], cp: u32) -> Option<&'static (u32, u32, T)> {
    ranges
        .binary_search_by(|&(first, last, _)| range_cmp(first, last, cp))
        .ok()
        .map(|index| &ranges[index])
}

#[inline]
fn range_cmp(first: u32, last: u32, cp: u32) -> std::cmp::Ordering {
    if last < cp {
        std::cmp::Ordering::Less
    } else if first > cp {
        std::cmp::Ordering::Greater
    } else {
        std::cmp::Ordering::Equal
    }
}
