//! Built-in 5×7 bitmap font for the social preview card.
//!
//! Every glyph is five column bytes; bit 0 is the top row. The table covers
//! ASCII 0x20..=0x7E (95 printable characters), index = byte - 0x20.
//! Glyphs sit in a 6×8 cell: one blank column and one blank row of spacing.
//! Text is drawn at integer scales, so a line of `n` characters at scale `s`
//! is exactly `n * 6s - s` pixels wide.

pub const GLYPH_COLUMNS: u32 = 5;
pub const GLYPH_ROWS: u32 = 7;
pub const CELL_WIDTH: u32 = 6;
pub const CELL_HEIGHT: u32 = 8;

const ELLIPSIS: &str = "...";

#[rustfmt::skip]
static FONT_5X7: [[u8; 5]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // sp
    [0x00, 0x00, 0x5F, 0x00, 0x00], // !
    [0x00, 0x07, 0x00, 0x07, 0x00], // "
    [0x14, 0x7F, 0x14, 0x7F, 0x14], // #
    [0x24, 0x2A, 0x7F, 0x2A, 0x12], // $
    [0x23, 0x13, 0x08, 0x64, 0x62], // %
    [0x36, 0x49, 0x55, 0x22, 0x50], // &
    [0x00, 0x05, 0x03, 0x00, 0x00], // '
    [0x00, 0x1C, 0x22, 0x41, 0x00], // (
    [0x00, 0x41, 0x22, 0x1C, 0x00], // )
    [0x08, 0x2A, 0x1C, 0x2A, 0x08], // *
    [0x08, 0x08, 0x3E, 0x08, 0x08], // +
    [0x00, 0x50, 0x30, 0x00, 0x00], // ,
    [0x08, 0x08, 0x08, 0x08, 0x08], // -
    [0x00, 0x60, 0x60, 0x00, 0x00], // .
    [0x20, 0x10, 0x08, 0x04, 0x02], // /
    [0x3E, 0x51, 0x49, 0x45, 0x3E], // 0
    [0x00, 0x42, 0x7F, 0x40, 0x00], // 1
    [0x42, 0x61, 0x51, 0x49, 0x46], // 2
    [0x21, 0x41, 0x45, 0x4B, 0x31], // 3
    [0x18, 0x14, 0x12, 0x7F, 0x10], // 4
    [0x27, 0x45, 0x45, 0x45, 0x39], // 5
    [0x3C, 0x4A, 0x49, 0x49, 0x30], // 6
    [0x01, 0x71, 0x09, 0x05, 0x03], // 7
    [0x36, 0x49, 0x49, 0x49, 0x36], // 8
    [0x06, 0x49, 0x49, 0x29, 0x1E], // 9
    [0x00, 0x36, 0x36, 0x00, 0x00], // :
    [0x00, 0x56, 0x36, 0x00, 0x00], // ;
    [0x08, 0x14, 0x22, 0x41, 0x00], // <
    [0x14, 0x14, 0x14, 0x14, 0x14], // =
    [0x00, 0x41, 0x22, 0x14, 0x08], // >
    [0x02, 0x01, 0x51, 0x09, 0x06], // ?
    [0x32, 0x49, 0x79, 0x41, 0x3E], // @
    [0x7E, 0x11, 0x11, 0x11, 0x7E], // A
    [0x7F, 0x49, 0x49, 0x49, 0x36], // B
    [0x3E, 0x41, 0x41, 0x41, 0x22], // C
    [0x7F, 0x41, 0x41, 0x22, 0x1C], // D
    [0x7F, 0x49, 0x49, 0x49, 0x41], // E
    [0x7F, 0x09, 0x09, 0x09, 0x01], // F
    [0x3E, 0x41, 0x49, 0x49, 0x7A], // G
    [0x7F, 0x08, 0x08, 0x08, 0x7F], // H
    [0x00, 0x41, 0x7F, 0x41, 0x00], // I
    [0x20, 0x40, 0x41, 0x3F, 0x01], // J
    [0x7F, 0x08, 0x14, 0x22, 0x41], // K
    [0x7F, 0x40, 0x40, 0x40, 0x40], // L
    [0x7F, 0x02, 0x0C, 0x02, 0x7F], // M
    [0x7F, 0x04, 0x08, 0x10, 0x7F], // N
    [0x3E, 0x41, 0x41, 0x41, 0x3E], // O
    [0x7F, 0x09, 0x09, 0x09, 0x06], // P
    [0x3E, 0x41, 0x51, 0x21, 0x5E], // Q
    [0x7F, 0x09, 0x19, 0x29, 0x46], // R
    [0x46, 0x49, 0x49, 0x49, 0x31], // S
    [0x01, 0x01, 0x7F, 0x01, 0x01], // T
    [0x3F, 0x40, 0x40, 0x40, 0x3F], // U
    [0x1F, 0x20, 0x40, 0x20, 0x1F], // V
    [0x3F, 0x40, 0x38, 0x40, 0x3F], // W
    [0x63, 0x14, 0x08, 0x14, 0x63], // X
    [0x07, 0x08, 0x70, 0x08, 0x07], // Y
    [0x61, 0x51, 0x49, 0x45, 0x43], // Z
    [0x00, 0x7F, 0x41, 0x41, 0x00], // [
    [0x02, 0x04, 0x08, 0x10, 0x20], // backslash
    [0x00, 0x41, 0x41, 0x7F, 0x00], // ]
    [0x04, 0x02, 0x01, 0x02, 0x04], // ^
    [0x40, 0x40, 0x40, 0x40, 0x40], // _
    [0x00, 0x01, 0x02, 0x04, 0x00], // `
    [0x20, 0x54, 0x54, 0x54, 0x78], // a
    [0x7F, 0x48, 0x44, 0x44, 0x38], // b
    [0x38, 0x44, 0x44, 0x44, 0x20], // c
    [0x38, 0x44, 0x44, 0x48, 0x7F], // d
    [0x38, 0x54, 0x54, 0x54, 0x18], // e
    [0x08, 0x7E, 0x09, 0x01, 0x02], // f
    [0x0C, 0x52, 0x52, 0x52, 0x3E], // g
    [0x7F, 0x08, 0x04, 0x04, 0x78], // h
    [0x00, 0x44, 0x7D, 0x40, 0x00], // i
    [0x20, 0x40, 0x44, 0x3D, 0x00], // j
    [0x7F, 0x10, 0x28, 0x44, 0x00], // k
    [0x00, 0x41, 0x7F, 0x40, 0x00], // l
    [0x7C, 0x04, 0x18, 0x04, 0x78], // m
    [0x7C, 0x08, 0x04, 0x04, 0x78], // n
    [0x38, 0x44, 0x44, 0x44, 0x38], // o
    [0x7C, 0x14, 0x14, 0x14, 0x08], // p
    [0x08, 0x14, 0x14, 0x18, 0x7C], // q
    [0x7C, 0x08, 0x04, 0x04, 0x08], // r
    [0x48, 0x54, 0x54, 0x54, 0x20], // s
    [0x04, 0x3F, 0x44, 0x40, 0x20], // t
    [0x3C, 0x40, 0x40, 0x20, 0x7C], // u
    [0x1C, 0x20, 0x40, 0x20, 0x1C], // v
    [0x3C, 0x40, 0x30, 0x40, 0x3C], // w
    [0x44, 0x28, 0x10, 0x28, 0x44], // x
    [0x0C, 0x50, 0x50, 0x50, 0x3C], // y
    [0x44, 0x64, 0x54, 0x4C, 0x44], // z
    [0x00, 0x08, 0x36, 0x41, 0x00], // {
    [0x00, 0x00, 0x7F, 0x00, 0x00], // |
    [0x00, 0x41, 0x36, 0x08, 0x00], // }
    [0x08, 0x04, 0x08, 0x10, 0x08], // ~
];

/// Column bytes for a printable ASCII byte; anything else draws as `?`.
pub fn glyph(byte: u8) -> &'static [u8; 5] {
    match byte {
        0x20..=0x7E => &FONT_5X7[(byte - 0x20) as usize],
        _ => &FONT_5X7[(b'?' - 0x20) as usize],
    }
}

/// Reduces text to the font's character set.
///
/// Typographic dashes, quotes and spaces map to their ASCII forms, `…` becomes
/// `...`, other control characters become spaces, and everything else becomes `?`.
/// The result is always printable ASCII, so byte offsets are char offsets.
pub fn fold_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            ' '..='~' => out.push(c),
            '\u{2010}'..='\u{2015}' | '\u{2212}' => out.push('-'),
            '\u{2018}' | '\u{2019}' | '\u{201B}' | '\u{2032}' => out.push('\''),
            '\u{201C}' | '\u{201D}' | '\u{201F}' | '\u{2033}' => out.push('"'),
            '\u{2026}' => out.push_str(ELLIPSIS),
            '\u{00A0}' | '\u{2000}'..='\u{200A}' | '\u{202F}' => out.push(' '),
            c if c.is_control() => out.push(' '),
            _ => out.push('?'),
        }
    }
    out
}

/// Size and weight of one run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub scale: u32,
    /// Bold doubles each column one pixel to the right.
    pub bold: bool,
}

impl TextStyle {
    pub const fn new(scale: u32, bold: bool) -> Self {
        Self { scale, bold }
    }

    pub fn advance(&self) -> u32 {
        CELL_WIDTH * self.scale
    }

    /// Height of the inked glyph area.
    pub fn glyph_height(&self) -> u32 {
        GLYPH_ROWS * self.scale
    }

    /// Baseline-to-baseline distance, roughly 1.2× the cell height.
    pub fn line_height(&self) -> u32 {
        CELL_HEIGHT * self.scale + 2 * self.scale
    }

    /// Pixel width of `text` (already folded), without trailing spacing.
    pub fn measure(&self, text: &str) -> u32 {
        let n = text.len() as u32;
        if n == 0 {
            return 0;
        }
        n * self.advance() - self.scale + u32::from(self.bold)
    }

    /// Characters that fit within `max_width` pixels.
    pub fn max_chars(&self, max_width: u32) -> usize {
        ((max_width + self.scale) / self.advance()) as usize
    }
}

/// Shortens a folded single line to `max_chars`, ending it with `...` when cut.
/// Separators left dangling before the marker are dropped.
pub fn ellipsize(text: &str, max_chars: usize) -> String {
    if text.len() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    format!("{}{ELLIPSIS}", text[..keep].trim_end_matches([' ', ',', ';']))
}

/// Greedy word wrap of folded text into at most `max_lines` lines of
/// `max_chars` characters. Words longer than a line are split; text beyond
/// the last line is cut and the last line ends in `...`.
pub fn wrap(text: &str, max_chars: usize, max_lines: usize) -> Vec<String> {
    let max_chars = max_chars.max(ELLIPSIS.len() + 1);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut rest = word;
        while !rest.is_empty() {
            let needed = if current.is_empty() {
                rest.len()
            } else {
                current.len() + 1 + rest.len()
            };
            if needed <= max_chars {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(rest);
                rest = "";
            } else if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            } else {
                let (head, tail) = rest.split_at(max_chars);
                lines.push(head.to_string());
                rest = tail;
            }
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    if max_lines > 0 && lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.pop() {
            // Force the marker even when the kept line is short.
            let padded = format!("{last}{}", " ".repeat(max_chars));
            lines.push(ellipsize(&padded, max_chars));
        }
    }
    lines
}
