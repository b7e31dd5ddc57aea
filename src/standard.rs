//! Metrics for the built-in Helvetica faces. These are two of the 14 standard PDF
//! fonts, so they never need to be embedded and reports can be generated without any
//! font files on disk. Text is written with `WinAnsiEncoding`.

use crate::units::Pt;

/// Advance widths (1/1000 em) for printable ASCII, `' '` through `'~'`
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// One of the two standard faces the reports use
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
}

impl StandardFont {
    /// The PostScript name written into the font dictionary
    pub fn base_font(&self) -> &'static [u8] {
        match self {
            StandardFont::Helvetica => b"Helvetica",
            StandardFont::HelveticaBold => b"Helvetica-Bold",
        }
    }

    fn table(&self) -> &'static [u16; 95] {
        match self {
            StandardFont::Helvetica => &HELVETICA,
            StandardFont::HelveticaBold => &HELVETICA_BOLD,
        }
    }

    /// Width of a single WinAnsi code in 1/1000 em
    fn code_width(&self, code: u8) -> u16 {
        match code {
            0x20..=0x7e => self.table()[(code - 0x20) as usize],
            // bullet
            0x95 => 350,
            // en and em dash
            0x96 => 556,
            0x97 => 1000,
            // curly quotes
            0x91 | 0x92 => self.table()[(b'\'' - 0x20) as usize],
            0x93 | 0x94 => self.table()[(b'"' - 0x20) as usize],
            0xa0 => self.table()[0],
            // latin-1 letters take the width of a lowercase letter
            _ => 556,
        }
    }

    /// Calculate the width of a string at the given size
    pub fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        let units: u32 = text
            .chars()
            .map(|ch| self.code_width(encode_char(ch)) as u32)
            .sum();
        size * (units as f32 / 1000.0)
    }

    /// Encode a string as WinAnsi bytes, substituting `?` for anything the encoding
    /// cannot represent
    pub fn encode(&self, text: &str) -> Vec<u8> {
        text.chars().map(encode_char).collect()
    }
}

fn encode_char(ch: char) -> u8 {
    match ch {
        ' '..='~' => ch as u8,
        '\t' => b' ',
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201C}' => 0x93,
        '\u{201D}' => 0x94,
        '\u{00A0}'..='\u{00FF}' => ch as u32 as u8,
        _ => b'?',
    }
}
