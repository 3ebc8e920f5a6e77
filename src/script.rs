use crate::{script_of, Segmenter};

/// Writing system of a codepoint, identified by its ISO 15924 name.
///
/// `Common` and `Inherited` are placeholder scripts that only occur as
/// *inputs* to run segmentation: `Common` marks script-less codepoints
/// (spaces, ASCII punctuation, most symbols and emoji) and `Inherited` marks
/// combining marks and variation selectors that take the script of the
/// preceding base. Emitted runs never carry `Inherited`, and carry `Common`
/// only when the whole input consists of placeholder codepoints.
///
/// `Unknown` covers unassigned codepoints and surrogates; `Invalid` is the
/// sentinel read from a [`Range`](crate::Range) that was never written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    Invalid,
    Common,
    Inherited,
    Unknown,
    Arabic,
    Armenian,
    Avestan,
    Balinese,
    Bamum,
    Batak,
    Bengali,
    Bopomofo,
    Brahmi,
    Braille,
    Buginese,
    Buhid,
    CanadianAboriginal,
    Carian,
    Chakma,
    Cham,
    Cherokee,
    Coptic,
    Cuneiform,
    Cypriot,
    Cyrillic,
    Deseret,
    Devanagari,
    Ethiopic,
    Georgian,
    Glagolitic,
    Gothic,
    Greek,
    Gujarati,
    Gurmukhi,
    Han,
    Hangul,
    Hanunoo,
    Hebrew,
    Hiragana,
    ImperialAramaic,
    InscriptionalPahlavi,
    InscriptionalParthian,
    Javanese,
    Kaithi,
    Kannada,
    Katakana,
    KayahLi,
    Kharoshthi,
    Khmer,
    Lao,
    Latin,
    Lepcha,
    Limbu,
    LinearB,
    Lisu,
    Lycian,
    Lydian,
    Malayalam,
    Mandaic,
    MeeteiMayek,
    Mongolian,
    Myanmar,
    NewTaiLue,
    Nko,
    Ogham,
    OlChiki,
    OldItalic,
    OldPersian,
    OldSouthArabian,
    OldTurkic,
    Oriya,
    Osmanya,
    PhagsPa,
    Phoenician,
    Rejang,
    Runic,
    Samaritan,
    Saurashtra,
    Shavian,
    Sinhala,
    Sundanese,
    SylotiNagri,
    Syriac,
    Tagalog,
    Tagbanwa,
    TaiLe,
    TaiTham,
    TaiViet,
    Tamil,
    Telugu,
    Thaana,
    Thai,
    Tibetan,
    Tifinagh,
    Ugaritic,
    Vai,
    Yi,
}

impl Script {
    /// Stable name of the script as used in the UCD `Scripts.txt` property
    /// file, mirroring ISO 15924.
    pub fn name(self) -> &'static str {
        match self {
            Script::Invalid => "Invalid",
            Script::Common => "Common",
            Script::Inherited => "Inherited",
            Script::Unknown => "Unknown",
            Script::Arabic => "Arabic",
            Script::Armenian => "Armenian",
            Script::Avestan => "Avestan",
            Script::Balinese => "Balinese",
            Script::Bamum => "Bamum",
            Script::Batak => "Batak",
            Script::Bengali => "Bengali",
            Script::Bopomofo => "Bopomofo",
            Script::Brahmi => "Brahmi",
            Script::Braille => "Braille",
            Script::Buginese => "Buginese",
            Script::Buhid => "Buhid",
            Script::CanadianAboriginal => "Canadian_Aboriginal",
            Script::Carian => "Carian",
            Script::Chakma => "Chakma",
            Script::Cham => "Cham",
            Script::Cherokee => "Cherokee",
            Script::Coptic => "Coptic",
            Script::Cuneiform => "Cuneiform",
            Script::Cypriot => "Cypriot",
            Script::Cyrillic => "Cyrillic",
            Script::Deseret => "Deseret",
            Script::Devanagari => "Devanagari",
            Script::Ethiopic => "Ethiopic",
            Script::Georgian => "Georgian",
            Script::Glagolitic => "Glagolitic",
            Script::Gothic => "Gothic",
            Script::Greek => "Greek",
            Script::Gujarati => "Gujarati",
            Script::Gurmukhi => "Gurmukhi",
            Script::Han => "Han",
            Script::Hangul => "Hangul",
            Script::Hanunoo => "Hanunoo",
            Script::Hebrew => "Hebrew",
            Script::Hiragana => "Hiragana",
            Script::ImperialAramaic => "Imperial_Aramaic",
            Script::InscriptionalPahlavi => "Inscriptional_Pahlavi",
            Script::InscriptionalParthian => "Inscriptional_Parthian",
            Script::Javanese => "Javanese",
            Script::Kaithi => "Kaithi",
            Script::Kannada => "Kannada",
            Script::Katakana => "Katakana",
            Script::KayahLi => "Kayah_Li",
            Script::Kharoshthi => "Kharoshthi",
            Script::Khmer => "Khmer",
            Script::Lao => "Lao",
            Script::Latin => "Latin",
            Script::Lepcha => "Lepcha",
            Script::Limbu => "Limbu",
            Script::LinearB => "Linear_B",
            Script::Lisu => "Lisu",
            Script::Lycian => "Lycian",
            Script::Lydian => "Lydian",
            Script::Malayalam => "Malayalam",
            Script::Mandaic => "Mandaic",
            Script::MeeteiMayek => "Meetei_Mayek",
            Script::Mongolian => "Mongolian",
            Script::Myanmar => "Myanmar",
            Script::NewTaiLue => "New_Tai_Lue",
            Script::Nko => "Nko",
            Script::Ogham => "Ogham",
            Script::OlChiki => "Ol_Chiki",
            Script::OldItalic => "Old_Italic",
            Script::OldPersian => "Old_Persian",
            Script::OldSouthArabian => "Old_South_Arabian",
            Script::OldTurkic => "Old_Turkic",
            Script::Oriya => "Oriya",
            Script::Osmanya => "Osmanya",
            Script::PhagsPa => "Phags_Pa",
            Script::Phoenician => "Phoenician",
            Script::Rejang => "Rejang",
            Script::Runic => "Runic",
            Script::Samaritan => "Samaritan",
            Script::Saurashtra => "Saurashtra",
            Script::Shavian => "Shavian",
            Script::Sinhala => "Sinhala",
            Script::Sundanese => "Sundanese",
            Script::SylotiNagri => "Syloti_Nagri",
            Script::Syriac => "Syriac",
            Script::Tagalog => "Tagalog",
            Script::Tagbanwa => "Tagbanwa",
            Script::TaiLe => "Tai_Le",
            Script::TaiTham => "Tai_Tham",
            Script::TaiViet => "Tai_Viet",
            Script::Tamil => "Tamil",
            Script::Telugu => "Telugu",
            Script::Thaana => "Thaana",
            Script::Thai => "Thai",
            Script::Tibetan => "Tibetan",
            Script::Tifinagh => "Tifinagh",
            Script::Ugaritic => "Ugaritic",
            Script::Vai => "Vai",
            Script::Yi => "Yi",
        }
    }
}

impl std::fmt::Display for Script {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A maximal run of codepoints classifiable under a single script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptRun {
    pub start: usize,
    pub end: usize,
    pub script: Script,
}

/// Lazy producer of maximal script runs over a scalar buffer.
///
/// Codepoints of the placeholder scripts `Common` and `Inherited` are always
/// absorbed into the current run. The first concrete script encountered
/// upgrades the run's resolved script retroactively; a *different* concrete
/// script closes the run. A run that never sees a concrete script reports
/// `Script::Common`.
#[derive(Debug, Clone)]
pub struct ScriptSegmenter<'a> {
    buffer: &'a [u32],
    cursor: usize,
}

impl<'a> ScriptSegmenter<'a> {
    pub fn new(buffer: &'a [u32]) -> Self {
        ScriptSegmenter { buffer, cursor: 0 }
    }
}

impl Segmenter for ScriptSegmenter<'_> {
    type Run = ScriptRun;

    fn consume(&mut self) -> Option<ScriptRun> {
        if self.cursor >= self.buffer.len() {
            return None;
        }
        let start = self.cursor;
        let mut resolved = Script::Common;
        while self.cursor < self.buffer.len() {
            match script_of(self.buffer[self.cursor]) {
                Script::Common | Script::Inherited => {}
                script if resolved == Script::Common => resolved = script,
                script if script != resolved => break,
                _ => {}
            }
            self.cursor += 1;
        }
        Some(ScriptRun {
            start,
            end: self.cursor,
            script: resolved,
        })
    }
}

impl Iterator for ScriptSegmenter<'_> {
    type Item = ScriptRun;

    fn next(&mut self) -> Option<ScriptRun> {
        self.consume()
    }
}
