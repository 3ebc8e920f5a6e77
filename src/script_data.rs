//! Generated by `cargo xtask gen-tables`, do not edit by hand.
//! This file contains the UCD Script property as sorted inclusive codepoint
//! ranges; codepoints not covered by any range are Unknown.
//! It was generated from UCD 15.0.0

use crate::script::Script as S;

/// Version of the UCD used to generate the property lookup tables
pub const UNICODE_VERSION: (u8, u8, u8) = (15, 0, 0);

pub(crate) static SCRIPT_RANGES: &[(u32, u32, S)] = &[
    (0x000000, 0x000040, S::Common),
    (0x000041, 0x00005A, S::Latin),
    (0x00005B, 0x000060, S::Common),
    (0x000061, 0x00007A, S::Latin),
    (0x00007B, 0x0000A9, S::Common),
    (0x0000AA, 0x0000AA, S::Latin),
    (0x0000AB, 0x0000B9, S::Common),
    (0x0000BA, 0x0000BA, S::Latin),
    (0x0000BB, 0x0000BF, S::Common),
    (0x0000C0, 0x0000D6, S::Latin),
    (0x0000D7, 0x0000D7, S::Common),
    (0x0000D8, 0x0000F6, S::Latin),
    (0x0000F7, 0x0000F7, S::Common),
    (0x0000F8, 0x0002B8, S::Latin),
    (0x0002B9, 0x0002DF, S::Common),
    (0x0002E0, 0x0002E4, S::Latin),
    (0x0002E5, 0x0002E9, S::Common),
    (0x0002EA, 0x0002EB, S::Bopomofo),
    (0x0002EC, 0x0002FF, S::Common),
    (0x000300, 0x00036F, S::Inherited),
    (0x000370, 0x000373, S::Greek),
    (0x000374, 0x000374, S::Common),
    (0x000375, 0x000377, S::Greek),
    (0x00037A, 0x00037D, S::Greek),
    (0x00037E, 0x00037E, S::Common),
    (0x00037F, 0x00037F, S::Greek),
    (0x000384, 0x000384, S::Greek),
    (0x000385, 0x000385, S::Common),
    (0x000386, 0x000386, S::Greek),
    (0x000387, 0x000387, S::Common),
    (0x000388, 0x0003E1, S::Greek),
    (0x0003E2, 0x0003EF, S::Coptic),
    (0x0003F0, 0x0003FF, S::Greek),
    (0x000400, 0x000484, S::Cyrillic),
    (0x000485, 0x000486, S::Inherited),
    (0x000487, 0x00052F, S::Cyrillic),
    (0x000531, 0x000588, S::Armenian),
    (0x000589, 0x000589, S::Common),
    (0x00058A, 0x00058F, S::Armenian),
    (0x000591, 0x0005F4, S::Hebrew),
    (0x000600, 0x000604, S::Arabic),
    (0x000605, 0x000605, S::Common),
    (0x000606, 0x00060B, S::Arabic),
    (0x00060C, 0x00060C, S::Common),
    (0x00060D, 0x00061A, S::Arabic),
    (0x00061B, 0x00061B, S::Common),
    (0x00061C, 0x00061E, S::Arabic),
    (0x00061F, 0x00061F, S::Common),
    (0x000620, 0x00063F, S::Arabic),
    (0x000640, 0x000640, S::Common),
    (0x000641, 0x00064A, S::Arabic),
    (0x00064B, 0x000655, S::Inherited),
    (0x000656, 0x00066F, S::Arabic),
    (0x000670, 0x000670, S::Inherited),
    (0x000671, 0x0006DC, S::Arabic),
    (0x0006DD, 0x0006DD, S::Common),
    (0x0006DE, 0x0006FF, S::Arabic),
    (0x000700, 0x00074F, S::Syriac),
    (0x000750, 0x00077F, S::Arabic),
    (0x000780, 0x0007BF, S::Thaana),
    (0x0007C0, 0x0007FF, S::Nko),
    (0x000800, 0x00083F, S::Samaritan),
    (0x000840, 0x00085F, S::Mandaic),
    (0x000860, 0x00086F, S::Syriac),
    (0x000870, 0x0008E1, S::Arabic),
    (0x0008E2, 0x0008E2, S::Common),
    (0x0008E3, 0x0008FF, S::Arabic),
    (0x000900, 0x000950, S::Devanagari),
    (0x000951, 0x000954, S::Inherited),
    (0x000955, 0x000963, S::Devanagari),
    (0x000964, 0x000965, S::Common),
    (0x000966, 0x00097F, S::Devanagari),
    (0x000980, 0x0009FF, S::Bengali),
    (0x000A00, 0x000A7F, S::Gurmukhi),
    (0x000A80, 0x000AFF, S::Gujarati),
    (0x000B00, 0x000B7F, S::Oriya),
    (0x000B80, 0x000BFF, S::Tamil),
    (0x000C00, 0x000C7F, S::Telugu),
    (0x000C80, 0x000CFF, S::Kannada),
    (0x000D00, 0x000D7F, S::Malayalam),
    (0x000D80, 0x000DFF, S::Sinhala),
    (0x000E01, 0x000E3A, S::Thai),
    (0x000E3F, 0x000E3F, S::Common),
    (0x000E40, 0x000E5B, S::Thai),
    (0x000E81, 0x000EDF, S::Lao),
    (0x000F00, 0x000FD4, S::Tibetan),
    (0x000FD5, 0x000FD8, S::Common),
    (0x000FD9, 0x000FDA, S::Tibetan),
    (0x001000, 0x00109F, S::Myanmar),
    (0x0010A0, 0x0010FA, S::Georgian),
    (0x0010FB, 0x0010FB, S::Common),
    (0x0010FC, 0x0010FF, S::Georgian),
    (0x001100, 0x0011FF, S::Hangul),
    (0x001200, 0x00139F, S::Ethiopic),
    (0x0013A0, 0x0013FD, S::Cherokee),
    (0x001400, 0x00167F, S::CanadianAboriginal),
    (0x001680, 0x00169C, S::Ogham),
    (0x0016A0, 0x0016EA, S::Runic),
    (0x0016EB, 0x0016ED, S::Common),
    (0x0016EE, 0x0016F8, S::Runic),
    (0x001700, 0x00171F, S::Tagalog),
    (0x001720, 0x001734, S::Hanunoo),
    (0x001735, 0x001736, S::Common),
    (0x001740, 0x00175F, S::Buhid),
    (0x001760, 0x00177F, S::Tagbanwa),
    (0x001780, 0x0017FF, S::Khmer),
    (0x001800, 0x001801, S::Mongolian),
    (0x001802, 0x001803, S::Common),
    (0x001804, 0x001804, S::Mongolian),
    (0x001805, 0x001805, S::Common),
    (0x001806, 0x0018AF, S::Mongolian),
    (0x0018B0, 0x0018FF, S::CanadianAboriginal),
    (0x001900, 0x00194F, S::Limbu),
    (0x001950, 0x00197F, S::TaiLe),
    (0x001980, 0x0019DF, S::NewTaiLue),
    (0x0019E0, 0x0019FF, S::Khmer),
    (0x001A00, 0x001A1F, S::Buginese),
    (0x001A20, 0x001AAF, S::TaiTham),
    (0x001AB0, 0x001AFF, S::Inherited),
    (0x001B00, 0x001B7F, S::Balinese),
    (0x001B80, 0x001BBF, S::Sundanese),
    (0x001BC0, 0x001BFF, S::Batak),
    (0x001C00, 0x001C4F, S::Lepcha),
    (0x001C50, 0x001C7F, S::OlChiki),
    (0x001C80, 0x001C8F, S::Cyrillic),
    (0x001C90, 0x001CBF, S::Georgian),
    (0x001CC0, 0x001CC7, S::Sundanese),
    (0x001CD0, 0x001CD2, S::Inherited),
    (0x001CD3, 0x001CD3, S::Common),
    (0x001CD4, 0x001CE0, S::Inherited),
    (0x001CE1, 0x001CE1, S::Common),
    (0x001CE2, 0x001CE8, S::Inherited),
    (0x001CE9, 0x001CEC, S::Common),
    (0x001CED, 0x001CED, S::Inherited),
    (0x001CEE, 0x001CF3, S::Common),
    (0x001CF4, 0x001CF4, S::Inherited),
    (0x001CF5, 0x001CF7, S::Common),
    (0x001CF8, 0x001CF9, S::Inherited),
    (0x001CFA, 0x001CFA, S::Common),
    (0x001D00, 0x001D25, S::Latin),
    (0x001D26, 0x001D2A, S::Greek),
    (0x001D2B, 0x001D2B, S::Cyrillic),
    (0x001D2C, 0x001D5C, S::Latin),
    (0x001D5D, 0x001D61, S::Greek),
    (0x001D62, 0x001D65, S::Latin),
    (0x001D66, 0x001D6A, S::Greek),
    (0x001D6B, 0x001D77, S::Latin),
    (0x001D78, 0x001D78, S::Cyrillic),
    (0x001D79, 0x001DBE, S::Latin),
    (0x001DBF, 0x001DBF, S::Greek),
    (0x001DC0, 0x001DFF, S::Inherited),
    (0x001E00, 0x001EFF, S::Latin),
    (0x001F00, 0x001FFE, S::Greek),
    (0x002000, 0x00200B, S::Common),
    (0x00200C, 0x00200D, S::Inherited),
    (0x00200E, 0x002064, S::Common),
    (0x002066, 0x002070, S::Common),
    (0x002071, 0x002071, S::Latin),
    (0x002074, 0x00207E, S::Common),
    (0x00207F, 0x00207F, S::Latin),
    (0x002080, 0x00208E, S::Common),
    (0x002090, 0x00209C, S::Latin),
    (0x0020A0, 0x0020C0, S::Common),
    (0x0020D0, 0x0020FF, S::Inherited),
    (0x002100, 0x002125, S::Common),
    (0x002126, 0x002126, S::Greek),
    (0x002127, 0x002129, S::Common),
    (0x00212A, 0x00212B, S::Latin),
    (0x00212C, 0x002131, S::Common),
    (0x002132, 0x002132, S::Latin),
    (0x002133, 0x00214D, S::Common),
    (0x00214E, 0x00214E, S::Latin),
    (0x00214F, 0x00215F, S::Common),
    (0x002160, 0x002188, S::Latin),
    (0x002189, 0x00218B, S::Common),
    (0x002190, 0x002426, S::Common),
    (0x002440, 0x00244A, S::Common),
    (0x002460, 0x0027FF, S::Common),
    (0x002800, 0x0028FF, S::Braille),
    (0x002900, 0x002BFF, S::Common),
    (0x002C00, 0x002C5F, S::Glagolitic),
    (0x002C60, 0x002C7F, S::Latin),
    (0x002C80, 0x002CFF, S::Coptic),
    (0x002D00, 0x002D2F, S::Georgian),
    (0x002D30, 0x002D7F, S::Tifinagh),
    (0x002D80, 0x002DDF, S::Ethiopic),
    (0x002DE0, 0x002DFF, S::Cyrillic),
    (0x002E00, 0x002E5D, S::Common),
    (0x002E80, 0x002FD5, S::Han),
    (0x002FF0, 0x002FFB, S::Common),
    (0x003000, 0x003004, S::Common),
    (0x003005, 0x003005, S::Han),
    (0x003006, 0x003006, S::Common),
    (0x003007, 0x003007, S::Han),
    (0x003008, 0x003020, S::Common),
    (0x003021, 0x003029, S::Han),
    (0x00302A, 0x00302D, S::Inherited),
    (0x00302E, 0x00302F, S::Hangul),
    (0x003030, 0x003037, S::Common),
    (0x003038, 0x00303B, S::Han),
    (0x00303C, 0x00303F, S::Common),
    (0x003041, 0x003096, S::Hiragana),
    (0x003099, 0x00309A, S::Inherited),
    (0x00309B, 0x00309C, S::Common),
    (0x00309D, 0x00309F, S::Hiragana),
    (0x0030A0, 0x0030A0, S::Common),
    (0x0030A1, 0x0030FA, S::Katakana),
    (0x0030FB, 0x0030FC, S::Common),
    (0x0030FD, 0x0030FF, S::Katakana),
    (0x003105, 0x00312F, S::Bopomofo),
    (0x003131, 0x00318E, S::Hangul),
    (0x003190, 0x00319F, S::Common),
    (0x0031A0, 0x0031BF, S::Bopomofo),
    (0x0031C0, 0x0031E3, S::Common),
    (0x0031F0, 0x0031FF, S::Katakana),
    (0x003200, 0x00321E, S::Hangul),
    (0x003220, 0x00325F, S::Common),
    (0x003260, 0x00327E, S::Hangul),
    (0x00327F, 0x0032CF, S::Common),
    (0x0032D0, 0x0032FE, S::Katakana),
    (0x0032FF, 0x0032FF, S::Common),
    (0x003300, 0x003357, S::Katakana),
    (0x003358, 0x0033FF, S::Common),
    (0x003400, 0x004DBF, S::Han),
    (0x004DC0, 0x004DFF, S::Common),
    (0x004E00, 0x009FFF, S::Han),
    (0x00A000, 0x00A4CF, S::Yi),
    (0x00A4D0, 0x00A4FF, S::Lisu),
    (0x00A500, 0x00A63F, S::Vai),
    (0x00A640, 0x00A69F, S::Cyrillic),
    (0x00A6A0, 0x00A6FF, S::Bamum),
    (0x00A700, 0x00A721, S::Common),
    (0x00A722, 0x00A787, S::Latin),
    (0x00A788, 0x00A78A, S::Common),
    (0x00A78B, 0x00A7FF, S::Latin),
    (0x00A800, 0x00A82C, S::SylotiNagri),
    (0x00A830, 0x00A839, S::Common),
    (0x00A840, 0x00A87F, S::PhagsPa),
    (0x00A880, 0x00A8DF, S::Saurashtra),
    (0x00A8E0, 0x00A8FF, S::Devanagari),
    (0x00A900, 0x00A92D, S::KayahLi),
    (0x00A92E, 0x00A92E, S::Common),
    (0x00A92F, 0x00A92F, S::KayahLi),
    (0x00A930, 0x00A95F, S::Rejang),
    (0x00A960, 0x00A97F, S::Hangul),
    (0x00A980, 0x00A9DF, S::Javanese),
    (0x00A9E0, 0x00A9FF, S::Myanmar),
    (0x00AA00, 0x00AA5F, S::Cham),
    (0x00AA60, 0x00AA7F, S::Myanmar),
    (0x00AA80, 0x00AADF, S::TaiViet),
    (0x00AAE0, 0x00AAF6, S::MeeteiMayek),
    (0x00AB01, 0x00AB2E, S::Ethiopic),
    (0x00AB30, 0x00AB5A, S::Latin),
    (0x00AB5B, 0x00AB5B, S::Common),
    (0x00AB5C, 0x00AB64, S::Latin),
    (0x00AB65, 0x00AB65, S::Greek),
    (0x00AB66, 0x00AB69, S::Latin),
    (0x00AB6A, 0x00AB6B, S::Common),
    (0x00AB70, 0x00ABBF, S::Cherokee),
    (0x00ABC0, 0x00ABFF, S::MeeteiMayek),
    (0x00AC00, 0x00D7A3, S::Hangul),
    (0x00D7B0, 0x00D7FF, S::Hangul),
    (0x00F900, 0x00FAFF, S::Han),
    (0x00FB00, 0x00FB06, S::Latin),
    (0x00FB13, 0x00FB17, S::Armenian),
    (0x00FB1D, 0x00FB4F, S::Hebrew),
    (0x00FB50, 0x00FD3D, S::Arabic),
    (0x00FD3E, 0x00FD3F, S::Common),
    (0x00FD40, 0x00FDFF, S::Arabic),
    (0x00FE00, 0x00FE0F, S::Inherited),
    (0x00FE10, 0x00FE19, S::Common),
    (0x00FE20, 0x00FE2D, S::Inherited),
    (0x00FE2E, 0x00FE2F, S::Cyrillic),
    (0x00FE30, 0x00FE6B, S::Common),
    (0x00FE70, 0x00FEFC, S::Arabic),
    (0x00FEFF, 0x00FEFF, S::Common),
    (0x00FF01, 0x00FF20, S::Common),
    (0x00FF21, 0x00FF3A, S::Latin),
    (0x00FF3B, 0x00FF40, S::Common),
    (0x00FF41, 0x00FF5A, S::Latin),
    (0x00FF5B, 0x00FF65, S::Common),
    (0x00FF66, 0x00FF6F, S::Katakana),
    (0x00FF70, 0x00FF70, S::Common),
    (0x00FF71, 0x00FF9D, S::Katakana),
    (0x00FF9E, 0x00FF9F, S::Common),
    (0x00FFA0, 0x00FFDC, S::Hangul),
    (0x00FFE0, 0x00FFEE, S::Common),
    (0x010000, 0x0100FA, S::LinearB),
    (0x010100, 0x01013F, S::Common),
    (0x010140, 0x01018E, S::Greek),
    (0x010190, 0x01019C, S::Common),
    (0x0101A0, 0x0101A0, S::Greek),
    (0x0101D0, 0x0101FC, S::Common),
    (0x0101FD, 0x0101FD, S::Inherited),
    (0x010280, 0x01029C, S::Lycian),
    (0x0102A0, 0x0102D0, S::Carian),
    (0x010300, 0x01032F, S::OldItalic),
    (0x010330, 0x01034A, S::Gothic),
    (0x010380, 0x01039F, S::Ugaritic),
    (0x0103A0, 0x0103D5, S::OldPersian),
    (0x010400, 0x01044F, S::Deseret),
    (0x010450, 0x01047F, S::Shavian),
    (0x010480, 0x0104AF, S::Osmanya),
    (0x010800, 0x01083F, S::Cypriot),
    (0x010840, 0x01085F, S::ImperialAramaic),
    (0x010900, 0x01091F, S::Phoenician),
    (0x010920, 0x01093F, S::Lydian),
    (0x010A00, 0x010A5F, S::Kharoshthi),
    (0x010A60, 0x010A7F, S::OldSouthArabian),
    (0x010B00, 0x010B3F, S::Avestan),
    (0x010B40, 0x010B5F, S::InscriptionalParthian),
    (0x010B60, 0x010B7F, S::InscriptionalPahlavi),
    (0x010C00, 0x010C4F, S::OldTurkic),
    (0x011000, 0x01107F, S::Brahmi),
    (0x011080, 0x0110CF, S::Kaithi),
    (0x011100, 0x01114F, S::Chakma),
    (0x012000, 0x0123FF, S::Cuneiform),
    (0x012400, 0x01247F, S::Cuneiform),
    (0x016800, 0x016A38, S::Bamum),
    (0x01B000, 0x01B000, S::Katakana),
    (0x01B001, 0x01B11F, S::Hiragana),
    (0x01D000, 0x01D0F5, S::Common),
    (0x01D100, 0x01D166, S::Common),
    (0x01D167, 0x01D169, S::Inherited),
    (0x01D16A, 0x01D17A, S::Common),
    (0x01D17B, 0x01D182, S::Inherited),
    (0x01D183, 0x01D184, S::Common),
    (0x01D185, 0x01D18B, S::Inherited),
    (0x01D18C, 0x01D1A9, S::Common),
    (0x01D1AA, 0x01D1AD, S::Inherited),
    (0x01D1AE, 0x01D1EA, S::Common),
    (0x01D400, 0x01D7FF, S::Common),
    (0x01F000, 0x01F02B, S::Common),
    (0x01F030, 0x01F093, S::Common),
    (0x01F0A0, 0x01F0F5, S::Common),
    (0x01F100, 0x01F1FF, S::Common),
    (0x01F200, 0x01F200, S::Hiragana),
    (0x01F201, 0x01F2FF, S::Common),
    (0x01F300, 0x01F6FF, S::Common),
    (0x01F700, 0x01F8FF, S::Common),
    (0x01F900, 0x01FBFF, S::Common),
    (0x020000, 0x02A6DF, S::Han),
    (0x02A700, 0x02EBEF, S::Han),
    (0x02F800, 0x02FA1F, S::Han),
    (0x030000, 0x03134F, S::Han),
    (0x0E0001, 0x0E0001, S::Common),
    (0x0E0020, 0x0E007F, S::Common),
    (0x0E0100, 0x0E01EF, S::Inherited),
];
