//! Character sets used for names stored in save files.
//!
//! The Game Boy games (generations 1 and 2) share one character set, with a
//! handful of extra glyphs in generation 2. The GBA games use an unrelated one,
//! and Japanese GBA cartridges swap its accented letters for kana.

use crate::format::Generation;

/// Glyph for bytes that have no mapping in the character set.
pub const PLACEHOLDER: char = '\u{FFFD}';

pub const GB_TERMINATOR: u8 = 0x50;
pub const GBA_TERMINATOR: u8 = 0xFF;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PokeChar {
    /// Printable character
    Print(char),
    /// One byte that prints as several characters, such as the `'s` contraction
    Ligature(&'static str),
    /// String terminator
    Term,
    Unmapped,
}

impl PokeChar {
    fn push_to(self, out: &mut String) {
        match self {
            PokeChar::Print(ch) => out.push(ch),
            PokeChar::Ligature(text) => out.push_str(text),
            PokeChar::Unmapped => out.push(PLACEHOLDER),
            PokeChar::Term => (),
        }
    }
}

use PokeChar::{Ligature as L, Print as P};

pub fn decode_byte(value: u8, generation: Generation) -> PokeChar {
    match generation {
        Generation::One | Generation::Two => decode_gb_byte(value, generation),
        Generation::Three => decode_gba_byte(value),
    }
}

/// Decodes a fixed-width text field, stopping at the first terminator.
pub fn decode_text(text_data: &[u8], generation: Generation) -> String {
    decode_with(text_data, |byte| decode_byte(byte, generation))
}

/// Decodes a name written by a Japanese GBA cartridge.
pub fn decode_japanese_gba_text(text_data: &[u8]) -> String {
    decode_with(text_data, decode_japanese_gba_byte)
}

fn decode_with(text_data: &[u8], decode: impl Fn(u8) -> PokeChar) -> String {
    let mut out_text = String::with_capacity(text_data.len());
    for byte in text_data {
        let decoded = decode(*byte);
        if decoded == PokeChar::Term {
            break;
        }
        decoded.push_to(&mut out_text);
    }

    out_text
}

fn decode_gb_byte(value: u8, generation: Generation) -> PokeChar {
    match value {
        GB_TERMINATOR => PokeChar::Term,
        0x7F => P(' '),
        0x80..=0x99 => P(char::from(b'A' + (value - 0x80))),
        0x9A => P('('),
        0x9B => P(')'),
        0x9C => P(':'),
        0x9D => P(';'),
        0x9E => P('['),
        0x9F => P(']'),
        0xA0..=0xB9 => P(char::from(b'a' + (value - 0xA0))),
        0xBA => P('é'),
        0xBB => L("'d"),
        0xBC => L("'l"),
        0xBD => L("'s"),
        0xBE => L("'t"),
        0xBF => L("'v"),
        0xC0..=0xC5 if generation == Generation::Two => match value {
            0xC0 => P('Ä'),
            0xC1 => P('Ö'),
            0xC2 => P('Ü'),
            0xC3 => P('ä'),
            0xC4 => P('ö'),
            _ => P('ü'),
        },
        0xE0 => P('\''),
        0xE1 => L("PK"),
        0xE2 => L("MN"),
        0xE3 => P('-'),
        0xE4 => L("'r"),
        0xE5 => L("'m"),
        0xE6 => P('?'),
        0xE7 => P('!'),
        0xE8 => P('.'),
        0xEF => P('♂'),
        0xF0 => P('¥'),
        0xF1 => P('×'),
        0xF2 => P('.'),
        0xF3 => P('/'),
        0xF4 => P(','),
        0xF5 => P('♀'),
        0xF6..=0xFF => P(char::from(b'0' + (value - 0xF6))),
        _ => PokeChar::Unmapped,
    }
}

fn decode_gba_byte(value: u8) -> PokeChar {
    match value {
        0x00 => P(' '),
        0x01 => P('À'),
        0x02 => P('Á'),
        0x03 => P('Â'),
        0x04 => P('Ç'),
        0x05 => P('È'),
        0x06 => P('É'),
        0x07 => P('Ê'),
        0x08 => P('Ë'),
        0x09 => P('Ì'),
        0x0B => P('Î'),
        0x0C => P('Ï'),
        0x0D => P('Ò'),
        0x0E => P('Ó'),
        0x0F => P('Ô'),
        0x10 => P('Œ'),
        0x11 => P('Ù'),
        0x12 => P('Ú'),
        0x13 => P('Û'),
        0x14 => P('Ñ'),
        0x15 => P('ß'),
        0x16 => P('à'),
        0x17 => P('á'),
        0x19 => P('ç'),
        0x1A => P('è'),
        0x1B => P('é'),
        0x1C => P('ê'),
        0x1D => P('ë'),
        0x1E => P('ì'),
        0x20 => P('î'),
        0x21 => P('ï'),
        0x22 => P('ò'),
        0x23 => P('ó'),
        0x24 => P('ô'),
        0x25 => P('œ'),
        0x26 => P('ù'),
        0x27 => P('ú'),
        0x28 => P('û'),
        0x29 => P('ñ'),
        0x2A => P('º'),
        0x2B => P('ª'),
        0x2D => P('&'),
        0x2E => P('+'),
        0x35 => P('='),
        0x36 => P(';'),
        0x51 => P('¿'),
        0x52 => P('¡'),
        0x5A => P('Í'),
        0x5B => P('%'),
        0x5C => P('('),
        0x5D => P(')'),
        0x68 => P('â'),
        0x6F => P('í'),
        0x85 => P('<'),
        0x86 => P('>'),
        0xA1..=0xAA => P(char::from(b'0' + (value - 0xA1))),
        0xAB => P('!'),
        0xAC => P('?'),
        0xAD => P('.'),
        0xAE => P('-'),
        0xAF => P('·'),
        0xB0 => P('…'),
        0xB1 => P('“'),
        0xB2 => P('”'),
        0xB3 => P('‘'),
        0xB4 => P('’'),
        0xB5 => P('♂'),
        0xB6 => P('♀'),
        0xB7 => P('$'),
        0xB8 => P(','),
        0xB9 => P('×'),
        0xBA => P('/'),
        0xBB..=0xD4 => P(char::from(b'A' + (value - 0xBB))),
        0xD5..=0xEE => P(char::from(b'a' + (value - 0xD5))),
        0xEF => P('▶'),
        0xF0 => P(':'),
        GBA_TERMINATOR => PokeChar::Term,
        _ => PokeChar::Unmapped,
    }
}

// Gojūon order, then small kana, voiced kana and the small tsu.
const HIRAGANA: &str = "あいうえおかきくけこさしすせそたちつてとなにぬねのはひふへほまみむめもやゆよらりるれろわをん\
    ぁぃぅぇぉゃゅょがぎぐげござじずぜぞだぢづでどばびぶべぼぱぴぷぺぽっ";
const KATAKANA: &str = "アイウエオカキクケコサシスセソタチツテトナニヌネノハヒフヘホマミムメモヤユヨラリルレロワヲン\
    ァィゥェォャュョガギグゲゴザジズゼゾダヂヅデドバビブベボパピプペポッ";

fn kana(table: &str, index: u8) -> PokeChar {
    table
        .chars()
        .nth(usize::from(index))
        .map_or(PokeChar::Unmapped, P)
}

fn decode_japanese_gba_byte(value: u8) -> PokeChar {
    match value {
        0x00 => P('\u{3000}'),
        0x01..=0x50 => kana(HIRAGANA, value - 0x01),
        0x51..=0xA0 => kana(KATAKANA, value - 0x51),
        0xAB => P('！'),
        0xAC => P('？'),
        0xAD => P('。'),
        0xAE => P('ー'),
        0xAF => P('・'),
        0xB0 => P('‥'),
        0xB1 => P('『'),
        0xB2 => P('』'),
        0xB3 => P('「'),
        0xB4 => P('」'),
        0xB7 => P('円'),
        0xB8 => P('.'),
        // Digits, Latin letters and the remaining symbols match the Western set
        _ => decode_gba_byte(value),
    }
}
