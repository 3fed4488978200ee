//! Single-byte text encoding for the standard PDF fonts.
//!
//! The fonts are declared with `WinAnsiEncoding`, which agrees with Latin-1 on
//! 0x20..=0x7E and 0xA0..=0xFF. Anything else is dropped, not transliterated,
//! so output for the same input stays byte-identical.

/// Whether `c` can be written as a single byte in the document's text encoding.
pub fn is_representable(c: char) -> bool {
    matches!(c as u32, 0x20..=0x7E | 0xA0..=0xFF)
}

/// Keeps representable characters and line breaks; tabs become spaces,
/// carriage returns and every other character are dropped.
pub fn to_single_byte_text(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            '\n' => Some('\n'),
            '\t' => Some(' '),
            c if is_representable(c) => Some(c),
            _ => None,
        })
        .collect()
}

/// Encodes one line of text as document string bytes, dropping anything
/// outside the single-byte range.
pub fn encode_line(text: &str) -> Vec<u8> {
    text.chars()
        .filter(|c| is_representable(*c))
        .map(|c| c as u32 as u8)
        .collect()
}

/// Upper-cases `text` one character at a time. A character whose capital form
/// falls outside the single-byte range (`ÿ`, `µ`) is kept as written.
pub fn uppercase_single_byte(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        let upper = c.to_uppercase();
        if upper.clone().all(is_representable) {
            out.extend(upper);
        } else {
            out.push(c);
        }
    }
    out
}
