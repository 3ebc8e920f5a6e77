use std::collections::BTreeSet;
use std::ops::RangeInclusive;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use proc_macro2::TokenStream;
use quote::{format_ident, quote, ToTokens};
use xshell::Shell;

use crate::flags::GenTables;
use crate::reformat;

const NUM_CODEPOINTS: usize = 0x110000;

/// UCD script property values mapped to the `Script` variants of the
/// runtime crate. Scripts missing from this list are reported once and left
/// out of the table, so their codepoints classify as `Unknown`.
const SCRIPTS: &[(&str, &str)] = &[
    ("Common", "Common"),
    ("Inherited", "Inherited"),
    ("Arabic", "Arabic"),
    ("Armenian", "Armenian"),
    ("Avestan", "Avestan"),
    ("Balinese", "Balinese"),
    ("Bamum", "Bamum"),
    ("Batak", "Batak"),
    ("Bengali", "Bengali"),
    ("Bopomofo", "Bopomofo"),
    ("Brahmi", "Brahmi"),
    ("Braille", "Braille"),
    ("Buginese", "Buginese"),
    ("Buhid", "Buhid"),
    ("Canadian_Aboriginal", "CanadianAboriginal"),
    ("Carian", "Carian"),
    ("Chakma", "Chakma"),
    ("Cham", "Cham"),
    ("Cherokee", "Cherokee"),
    ("Coptic", "Coptic"),
    ("Cuneiform", "Cuneiform"),
    ("Cypriot", "Cypriot"),
    ("Cyrillic", "Cyrillic"),
    ("Deseret", "Deseret"),
    ("Devanagari", "Devanagari"),
    ("Ethiopic", "Ethiopic"),
    ("Georgian", "Georgian"),
    ("Glagolitic", "Glagolitic"),
    ("Gothic", "Gothic"),
    ("Greek", "Greek"),
    ("Gujarati", "Gujarati"),
    ("Gurmukhi", "Gurmukhi"),
    ("Han", "Han"),
    ("Hangul", "Hangul"),
    ("Hanunoo", "Hanunoo"),
    ("Hebrew", "Hebrew"),
    ("Hiragana", "Hiragana"),
    ("Imperial_Aramaic", "ImperialAramaic"),
    ("Inscriptional_Pahlavi", "InscriptionalPahlavi"),
    ("Inscriptional_Parthian", "InscriptionalParthian"),
    ("Javanese", "Javanese"),
    ("Kaithi", "Kaithi"),
    ("Kannada", "Kannada"),
    ("Katakana", "Katakana"),
    ("Kayah_Li", "KayahLi"),
    ("Kharoshthi", "Kharoshthi"),
    ("Khmer", "Khmer"),
    ("Lao", "Lao"),
    ("Latin", "Latin"),
    ("Lepcha", "Lepcha"),
    ("Limbu", "Limbu"),
    ("Linear_B", "LinearB"),
    ("Lisu", "Lisu"),
    ("Lycian", "Lycian"),
    ("Lydian", "Lydian"),
    ("Malayalam", "Malayalam"),
    ("Mandaic", "Mandaic"),
    ("Meetei_Mayek", "MeeteiMayek"),
    ("Mongolian", "Mongolian"),
    ("Myanmar", "Myanmar"),
    ("New_Tai_Lue", "NewTaiLue"),
    ("Nko", "Nko"),
    ("Ogham", "Ogham"),
    ("Ol_Chiki", "OlChiki"),
    ("Old_Italic", "OldItalic"),
    ("Old_Persian", "OldPersian"),
    ("Old_South_Arabian", "OldSouthArabian"),
    ("Old_Turkic", "OldTurkic"),
    ("Oriya", "Oriya"),
    ("Osmanya", "Osmanya"),
    ("Phags_Pa", "PhagsPa"),
    ("Phoenician", "Phoenician"),
    ("Rejang", "Rejang"),
    ("Runic", "Runic"),
    ("Samaritan", "Samaritan"),
    ("Saurashtra", "Saurashtra"),
    ("Shavian", "Shavian"),
    ("Sinhala", "Sinhala"),
    ("Sundanese", "Sundanese"),
    ("Syloti_Nagri", "SylotiNagri"),
    ("Syriac", "Syriac"),
    ("Tagalog", "Tagalog"),
    ("Tagbanwa", "Tagbanwa"),
    ("Tai_Le", "TaiLe"),
    ("Tai_Tham", "TaiTham"),
    ("Tai_Viet", "TaiViet"),
    ("Tamil", "Tamil"),
    ("Telugu", "Telugu"),
    ("Thaana", "Thaana"),
    ("Thai", "Thai"),
    ("Tibetan", "Tibetan"),
    ("Tifinagh", "Tifinagh"),
    ("Ugaritic", "Ugaritic"),
    ("Vai", "Vai"),
    ("Yi", "Yi"),
];

/// Boolean properties kept from `emoji-data.txt`, in emission order.
const EMOJI_PROPERTIES: &[(&str, &str)] = &[
    ("Emoji", "EMOJI"),
    ("Emoji_Presentation", "EMOJI_PRESENTATION"),
    ("Emoji_Modifier", "EMOJI_MODIFIER"),
    ("Emoji_Modifier_Base", "EMOJI_MODIFIER_BASE"),
    ("Extended_Pictographic", "EXTENDED_PICTOGRAPHIC"),
];

fn retrieve_file(version: &str, file: &str) -> Result<String> {
    let url = format!("http://unicode.org/Public/{version}/ucd/{file}.txt");
    println!("downloading {url}...");
    ureq::get(&url)
        .call()?
        .into_string()
        .context("download failed")
}

fn parse_codepoint(s: &str) -> Result<u32> {
    u32::from_str_radix(s, 16).context("failed to parse codepoint")
}

fn parse_codepoints(s: &str) -> Result<RangeInclusive<u32>> {
    let (start, end) = match s.split_once("..") {
        Some(range) => range,
        None => (s, s),
    };
    Ok(parse_codepoint(start)?..=parse_codepoint(end)?)
}

fn parse_data_line(mut line: &str) -> Option<(&str, &str)> {
    line = line.trim();
    if line.starts_with('#') || line.is_empty() {
        return None;
    }
    let line = line.split_once('#').map_or(line, |(line, _comment)| line);
    let (codepoints, value) = line.split_once(';')?;
    Some((codepoints.trim(), value.trim()))
}

struct RawUnicodeData {
    /// Contents of Scripts.txt used to retrieve the Script property
    scripts: String,
    /// Contents of emoji-data.txt used to retrieve the emoji properties
    emoji_data: String,
}

impl RawUnicodeData {
    fn new(version: &str) -> Result<RawUnicodeData> {
        let data = RawUnicodeData {
            scripts: retrieve_file(version, "Scripts")?,
            emoji_data: retrieve_file(version, "emoji/emoji-data")?,
        };
        Ok(data)
    }

    /// Expands Scripts.txt into one slot per codepoint and compresses the
    /// result back into sorted ranges of enum variant names.
    fn script_ranges(&self) -> Result<Vec<(u32, u32, &'static str)>> {
        println!("collecting script assignments...");
        let mut table: Vec<Option<&'static str>> = vec![None; NUM_CODEPOINTS];
        let mut unhandled = BTreeSet::new();
        for line in self.scripts.lines() {
            let Some((codepoints, script)) = parse_data_line(line) else { continue };
            let codepoints = parse_codepoints(codepoints)?;
            match SCRIPTS.iter().find(|(ucd_name, _)| *ucd_name == script) {
                Some(&(_, variant)) => {
                    for cp in codepoints {
                        table[cp as usize] = Some(variant);
                    }
                }
                None => {
                    if unhandled.insert(script.to_owned()) {
                        println!("skipping script without a variant: {script}");
                    }
                }
            }
        }
        Ok(compress(&table))
    }

    /// Collects the kept boolean properties from emoji-data.txt as sorted
    /// ranges, one table per property.
    fn emoji_ranges(&self) -> Result<Vec<Vec<(u32, u32, ())>>> {
        println!("collecting emoji properties...");
        let mut tables = vec![vec![None; NUM_CODEPOINTS]; EMOJI_PROPERTIES.len()];
        for line in self.emoji_data.lines() {
            let Some((codepoints, property)) = parse_data_line(line) else { continue };
            let Some(index) = EMOJI_PROPERTIES
                .iter()
                .position(|(ucd_name, _)| *ucd_name == property)
            else {
                continue;
            };
            let codepoints = parse_codepoints(codepoints)?;
            if codepoints.is_empty() {
                bail!("invalid emoji data line {line}");
            }
            for cp in codepoints {
                tables[index][cp as usize] = Some(());
            }
        }
        Ok(tables.iter().map(|table| compress(table)).collect())
    }
}

/// Merges adjacent codepoints with the same value into inclusive ranges.
fn compress<T: Copy + PartialEq>(table: &[Option<T>]) -> Vec<(u32, u32, T)> {
    let mut ranges: Vec<(u32, u32, T)> = Vec::new();
    for (cp, value) in table.iter().enumerate() {
        let Some(value) = *value else { continue };
        let cp = cp as u32;
        match ranges.last_mut() {
            Some((_, last, range_value)) if *last + 1 == cp && *range_value == value => *last = cp,
            _ => ranges.push((cp, cp, value)),
        }
    }
    ranges
}

/// Formats a codepoint the way the checked-in tables spell it. Literal
/// tokens always print in decimal, so hex spellings are parsed from strings.
fn hex(value: u32) -> TokenStream {
    TokenStream::from_str(&format!("0x{value:06X}")).unwrap()
}

fn emit_script_table(ranges: &[(u32, u32, &'static str)], version: &str) -> Result<TokenStream> {
    let mut res = TokenStream::new();
    let version_components: Result<Vec<_>, _> =
        version.trim().split('.').map(u8::from_str).collect();
    let Ok([major, minor, patch]) = version_components.as_deref() else {
        bail!("Invalid version {version}")
    };
    quote! {
        use crate::script::Script as S;

        /// Version of the UCD used to generate the property lookup tables
        pub const UNICODE_VERSION: (u8, u8, u8) = (#major, #minor, #patch);
    }
    .to_tokens(&mut res);
    let entries = ranges.iter().map(|&(start, end, variant)| {
        let start = hex(start);
        let end = hex(end);
        let variant = format_ident!("{variant}");
        quote! { (#start, #end, S::#variant) }
    });
    quote! {
        pub(crate) static SCRIPT_RANGES: &[(u32, u32, S)] = &[#(#entries),*];
    }
    .to_tokens(&mut res);
    Ok(res)
}

fn emit_emoji_tables(tables: &[Vec<(u32, u32, ())>]) -> TokenStream {
    let mut res = TokenStream::new();
    for ((ucd_name, static_name), ranges) in EMOJI_PROPERTIES.iter().zip(tables) {
        let doc = format!(" {ucd_name}=Yes");
        let static_name = format_ident!("{static_name}");
        let entries = ranges.iter().map(|&(start, end, _)| {
            let start = hex(start);
            let end = hex(end);
            quote! { (#start, #end) }
        });
        quote! {
            #[doc = #doc]
            pub(crate) static #static_name: &[(u32, u32)] = &[#(#entries),*];
        }
        .to_tokens(&mut res);
    }
    res
}

impl GenTables {
    pub fn run(self, sh: &Shell) -> Result<()> {
        let version = self.unicode_version;
        println!("generating tables for Unicode {version}");
        let raw_data = RawUnicodeData::new(&version)?;
        let script_ranges = raw_data.script_ranges()?;
        println!("compressed scripts into {} ranges", script_ranges.len());
        let emoji_ranges = raw_data.emoji_ranges()?;
        println!("generating script_data.rs...");
        let table = emit_script_table(&script_ranges, &version)?;
        let table = reformat(sh, table.to_string());
        let table = format!("//! Generated by `cargo xtask gen-tables`, do not edit by hand.\n//! This file contains the UCD Script property as sorted inclusive codepoint\n//! ranges; codepoints not covered by any range are Unknown.\n//! It was generated from UCD {version}\n\n{table}");
        sh.write_file("src/script_data.rs", table)?;
        println!("generating emoji_data.rs...");
        let emoji_tables = emit_emoji_tables(&emoji_ranges);
        let emoji_tables = reformat(sh, emoji_tables.to_string());
        let emoji_tables = format!("//! Generated by `cargo xtask gen-tables`, do not edit by hand.\n//! This file contains the boolean emoji properties from the UCD\n//! `emoji/emoji-data.txt` file as sorted inclusive codepoint ranges.\n//! It was generated from UCD {version}\n\n{emoji_tables}");
        sh.write_file("src/emoji_data.rs", emoji_tables)?;
        Ok(())
    }
}
