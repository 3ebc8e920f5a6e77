use crate::emoji::{EmojiSegmenter, PresentationRun};
use crate::script::{ScriptRun, ScriptSegmenter};
use crate::{PresentationStyle, Script, Segmenter};

/// One segmented run: a maximal range of the input buffer with uniform
/// script and presentation style.
///
/// Successive ranges emitted for one buffer are contiguous and cover the
/// buffer exactly once. A freshly constructed (default) range reads
/// `(0, 0, Script::Invalid, PresentationStyle::Text)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub start: usize,
    pub end: usize,
    pub script: Script,
    pub presentation: PresentationStyle,
}

impl Default for Range {
    fn default() -> Self {
        Range {
            start: 0,
            end: 0,
            script: Script::Invalid,
            presentation: PresentationStyle::Text,
        }
    }
}

/// Merges the script and emoji boundary streams into a single run sequence.
///
/// Both sub-segmenters are advanced in lockstep; each emitted range ends at
/// the nearest sub-run boundary. The exception is a script change strictly
/// inside an `Emoji` presentation run: an emoji cluster (a ZWJ sequence may
/// mix scripts) is never split, so the script change is deferred until the
/// emoji run ends and the whole cluster reports the script in effect at its
/// first scalar.
#[derive(Debug, Clone)]
pub struct RunSegmenter<'a> {
    buffer: &'a [u32],
    cursor: usize,
    scripts: ScriptSegmenter<'a>,
    emoji: EmojiSegmenter<'a>,
    script_run: Option<ScriptRun>,
    emoji_run: Option<PresentationRun>,
}

impl<'a> RunSegmenter<'a> {
    pub fn new(buffer: &'a [u32]) -> Self {
        RunSegmenter {
            buffer,
            cursor: 0,
            scripts: ScriptSegmenter::new(buffer),
            emoji: EmojiSegmenter::new(buffer),
            script_run: None,
            emoji_run: None,
        }
    }

    /// Pulls sub-runs until both cover the split cursor.
    ///
    /// The sub-segmenters partition the buffer, so while the cursor is in
    /// bounds this always succeeds.
    fn current_runs(&mut self) -> Option<(ScriptRun, PresentationRun)> {
        loop {
            match self.script_run {
                Some(run) if run.end > self.cursor => break,
                _ => self.script_run = Some(self.scripts.consume()?),
            }
        }
        loop {
            match self.emoji_run {
                Some(run) if run.end > self.cursor => break,
                _ => self.emoji_run = Some(self.emoji.consume()?),
            }
        }
        match (self.script_run, self.emoji_run) {
            (Some(script_run), Some(emoji_run)) => Some((script_run, emoji_run)),
            _ => None,
        }
    }
}

impl Segmenter for RunSegmenter<'_> {
    type Run = Range;

    fn consume(&mut self) -> Option<Range> {
        if self.cursor >= self.buffer.len() {
            return None;
        }
        let start = self.cursor;
        let mut script = Script::Invalid;
        let mut presentation = PresentationStyle::Text;
        let mut end = start;
        while self.cursor < self.buffer.len() {
            let (script_run, emoji_run) = self.current_runs()?;
            // Defer script boundaries that fall inside an emoji cluster.
            let segment_end = if emoji_run.presentation == PresentationStyle::Emoji {
                emoji_run.end
            } else {
                script_run.end.min(emoji_run.end)
            };
            if end == start {
                script = script_run.script;
                presentation = emoji_run.presentation;
            } else if script_run.script != script || emoji_run.presentation != presentation {
                break;
            }
            end = segment_end;
            self.cursor = segment_end;
        }
        Some(Range {
            start,
            end,
            script,
            presentation,
        })
    }
}

impl Iterator for RunSegmenter<'_> {
    type Item = Range;

    fn next(&mut self) -> Option<Range> {
        self.consume()
    }
}
