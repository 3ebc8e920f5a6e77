use crate::{has_property, Property, Segmenter};

/// Rendering mode of a run: monochrome glyphs or color emoji.
///
/// The discriminants are stable interop identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum PresentationStyle {
    #[default]
    Text = 0,
    Emoji = 1,
}

/// Classification of a scalar for emoji presentation scanning, derived from
/// the UCD emoji data.
///
/// The discriminants are stable interop identifiers and must not change when
/// the tables are regenerated. `EmojiVSBase` is reserved: the classification
/// in [`emoji_category_of`](crate::emoji_category_of) resolves every
/// variation-selector-eligible base to one of the more specific categories
/// first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum EmojiSegmentationCategory {
    Invalid = -1,
    Emoji = 0,
    EmojiTextPresentation = 1,
    EmojiEmojiPresentation = 2,
    EmojiModifierBase = 3,
    EmojiModifier = 4,
    EmojiVSBase = 5,
    RegionalIndicator = 6,
    KeyCapBase = 7,
    CombiningEnclosingKeyCap = 8,
    CombiningEnclosingCircleBackslash = 9,
    ZWJ = 10,
    VS15 = 11,
    VS16 = 12,
    TagBase = 13,
    TagSequence = 14,
    TagTerm = 15,
}

/// A maximal run of codepoints sharing one presentation style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentationRun {
    pub start: usize,
    pub end: usize,
    pub presentation: PresentationStyle,
}

/// Lazy producer of maximal presentation runs over a scalar buffer.
///
/// Scanning works in units: a unit is either a single scalar with its
/// default presentation, or one of the UTS #51 sequences (presentation
/// sequence, modifier sequence, keycap sequence, flag pair, tag sequence,
/// enclosing-mark sequence) optionally chained through ZWJ. Consecutive
/// units with the same presentation coalesce into one run.
#[derive(Debug, Clone)]
pub struct EmojiSegmenter<'a> {
    buffer: &'a [u32],
    cursor: usize,
    /// Unit scanned past the current run while probing for its end.
    pending: Option<(usize, PresentationStyle)>,
}

impl<'a> EmojiSegmenter<'a> {
    pub fn new(buffer: &'a [u32]) -> Self {
        EmojiSegmenter {
            buffer,
            cursor: 0,
            pending: None,
        }
    }

    /// Category of the scalar at `pos`; positions past the end read as
    /// `Invalid` so lookahead needs no bounds checks.
    fn category(&self, pos: usize) -> EmojiSegmentationCategory {
        self.buffer
            .get(pos)
            .map_or(EmojiSegmentationCategory::Invalid, |&cp| {
                crate::emoji_category_of(cp)
            })
    }

    /// Scans one unit at `pos`: a single element plus any ZWJ-chained
    /// continuation. A ZWJ not followed by an emoji-capable element is left
    /// for the next unit, so a trailing lone ZWJ never extends an emoji run.
    fn scan_unit(&self, pos: usize) -> (usize, PresentationStyle) {
        let (mut end, style) = self.scan_element(pos);
        if style == PresentationStyle::Emoji {
            while self.category(end) == EmojiSegmentationCategory::ZWJ {
                let (joined_end, joined_style) = self.scan_element(end + 1);
                if joined_style != PresentationStyle::Emoji {
                    break;
                }
                end = joined_end;
            }
        }
        (end, style)
    }

    /// Scans one sequence element at `pos` and resolves its presentation.
    fn scan_element(&self, pos: usize) -> (usize, PresentationStyle) {
        use EmojiSegmentationCategory::*;
        use PresentationStyle::{Emoji as EmojiStyle, Text};

        match self.category(pos) {
            KeyCapBase => match self.category(pos + 1) {
                VS16 if self.category(pos + 2) == CombiningEnclosingKeyCap => (pos + 3, EmojiStyle),
                CombiningEnclosingKeyCap => (pos + 2, EmojiStyle),
                VS16 => (pos + 2, EmojiStyle),
                VS15 => (pos + 2, Text),
                _ => (pos + 1, Text),
            },
            RegionalIndicator => {
                // A pair forms a flag; a lone indicator renders as text.
                if self.category(pos + 1) == RegionalIndicator {
                    (pos + 2, EmojiStyle)
                } else {
                    (pos + 1, Text)
                }
            }
            TagBase => {
                let mut tail = pos + 1;
                while self.category(tail) == TagSequence {
                    tail += 1;
                }
                if tail > pos + 1 && self.category(tail) == TagTerm {
                    (tail + 1, EmojiStyle)
                } else {
                    // Ill-formed tag sequence: the base stands alone.
                    self.scan_pictographic(pos)
                }
            }
            EmojiModifierBase if self.category(pos + 1) == EmojiModifier => (pos + 2, EmojiStyle),
            Emoji | EmojiTextPresentation | EmojiEmojiPresentation | EmojiModifierBase
            | EmojiModifier | EmojiVSBase => self.scan_pictographic(pos),
            _ => (pos + 1, Text),
        }
    }

    /// Scans a pictographic base at `pos`: a variation selector or an
    /// enclosing combining mark binds to it, otherwise the scalar keeps its
    /// default presentation (`Emoji` iff the `Emoji_Presentation` property
    /// is set).
    fn scan_pictographic(&self, pos: usize) -> (usize, PresentationStyle) {
        use EmojiSegmentationCategory::*;
        match self.category(pos + 1) {
            VS16 => (pos + 2, PresentationStyle::Emoji),
            VS15 => (pos + 2, PresentationStyle::Text),
            CombiningEnclosingCircleBackslash => (pos + 2, PresentationStyle::Emoji),
            _ => {
                let style = if has_property(self.buffer[pos], Property::EmojiPresentation) {
                    PresentationStyle::Emoji
                } else {
                    PresentationStyle::Text
                };
                (pos + 1, style)
            }
        }
    }
}

impl Segmenter for EmojiSegmenter<'_> {
    type Run = PresentationRun;

    fn consume(&mut self) -> Option<PresentationRun> {
        if self.cursor >= self.buffer.len() {
            return None;
        }
        let start = self.cursor;
        let (mut end, presentation) = match self.pending.take() {
            Some(unit) => unit,
            None => self.scan_unit(start),
        };
        while end < self.buffer.len() {
            let unit = self.scan_unit(end);
            if unit.1 != presentation {
                self.pending = Some(unit);
                break;
            }
            end = unit.0;
        }
        self.cursor = end;
        Some(PresentationRun {
            start,
            end,
            presentation,
        })
    }
}

impl Iterator for EmojiSegmenter<'_> {
    type Item = PresentationRun;

    fn next(&mut self) -> Option<PresentationRun> {
        self.consume()
    }
}
