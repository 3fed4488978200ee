//! Static font-metric tables for the two standard PDF fonts the renderer uses.
//!
//! Widths are the Adobe AFM advance widths in 1/1000 em. The standard 14 fonts
//! need no embedding, so these tables are the only glyph data the renderer carries.
//! Tables cover ASCII 0x20..=0x7E (95 printable characters, index = code - 0x20)
//! and the Latin-1 upper half 0xA0..=0xFF (96 characters, index = code - 0xA0).
//! Anything else falls back to `average_width`.

use serde::{Deserialize, Serialize};

/// Millimetres per PDF point.
pub const MM_PER_PT: f32 = 25.4 / 72.0;

// ────────────────────────────────────────────────────────────────────────────
// Font enum
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Font {
    /// Body and contact text.
    Helvetica,
    /// Name heading.
    HelveticaBold,
}

impl Font {
    /// Name used in the page resource dictionary.
    pub fn resource_name(&self) -> &'static str {
        match self {
            Font::Helvetica => "F1",
            Font::HelveticaBold => "F2",
        }
    }

    /// PostScript name of the standard Type1 font.
    pub fn base_font(&self) -> &'static str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
        }
    }

    pub fn metrics(&self) -> &'static FontMetricTable {
        match self {
            Font::Helvetica => &HELVETICA_TABLE,
            Font::HelveticaBold => &HELVETICA_BOLD_TABLE,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Width slot layout:
/// ```text
/// [0]=sp  [1]=!   [2]="   [3]=#   [4]=$   [5]=%   [6]=&   [7]='
/// [8]=(   [9]=)   [10]=*  [11]=+  [12]=,  [13]=-  [14]=.  [15]=/
/// [16..25]=0-9
/// [26]=:  [27]=;  [28]=<  [29]==  [30]=>  [31]=?  [32]=@
/// [33..58]=A-Z
/// [59]=[  [60]=\  [61]=]  [62]=^  [63]=_  [64]=`
/// [65..90]=a-z
/// [91]={  [92]=|  [93]=}  [94]=~
/// ```
pub struct FontMetricTable {
    widths: [u16; 95],
    /// 0xA0..=0xFF in code order, starting at no-break space.
    upper_widths: [u16; 96],
    /// Fallback width for characters outside both ranges.
    pub average_width: u16,
}

impl FontMetricTable {
    pub fn char_width(&self, c: char) -> u16 {
        match c as usize {
            code @ 0x20..=0x7E => self.widths[code - 0x20],
            code @ 0xA0..=0xFF => self.upper_widths[code - 0xA0],
            _ => self.average_width,
        }
    }

    fn char_mm(&self, c: char, size_pt: f32) -> f32 {
        self.char_width(c) as f32 * size_pt / 1000.0 * MM_PER_PT
    }

    /// Width of `s` in 1/1000 em.
    pub fn measure_units(&self, s: &str) -> u32 {
        s.chars().map(|c| self.char_width(c) as u32).sum()
    }

    /// Width of `s` in millimetres at `size_pt`.
    pub fn measure_mm(&self, s: &str, size_pt: f32) -> f32 {
        self.measure_units(s) as f32 * size_pt / 1000.0 * MM_PER_PT
    }

    /// Greedy wrap of a single paragraph (no `\n`) into lines no wider than
    /// `max_width_mm`, breaking at the last space that fits.
    ///
    /// Leading indentation and runs of spaces inside a line are kept; the space
    /// a line breaks on is dropped and trailing spaces are trimmed. A word wider
    /// than a full line is broken by character. An empty or whitespace-only
    /// paragraph yields one empty line.
    pub fn wrap_paragraph(&self, paragraph: &str, size_pt: f32, max_width_mm: f32) -> Vec<String> {
        let mut lines = Vec::new();
        let mut current = String::new();
        let mut current_width = 0.0_f32;

        for c in paragraph.chars() {
            let c_w = self.char_mm(c, size_pt);

            if !current.is_empty() && current_width + c_w > max_width_mm {
                if c == ' ' {
                    lines.push(current.trim_end().to_string());
                    current.clear();
                    current_width = 0.0;
                    continue;
                }

                // Move the partial word after the last break point to a new line.
                if let Some(sep) = current
                    .rfind(' ')
                    .filter(|&sep| !current[..sep].trim().is_empty())
                {
                    let rest = current.split_off(sep + 1);
                    lines.push(current.trim_end().to_string());
                    current_width = self.measure_mm(&rest, size_pt);
                    current = rest;
                }

                if !current.is_empty() && current_width + c_w > max_width_mm {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0.0;
                }
            }

            current.push(c);
            current_width += c_w;
        }

        let last = current.trim_end();
        if !last.is_empty() || lines.is_empty() {
            lines.push(last.to_string());
        }
        lines
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables
// ────────────────────────────────────────────────────────────────────────────

static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0    1    2    3    4    5    6    7    8    9
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
        // :    ;    <    =    >    ?    @
        278, 278, 584, 584, 584, 556, 1015,
        // A    B    C    D    E    F    G    H    I    J    K    L    M
        667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
        // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
        // [    \    ]    ^    _    `
        278, 278, 278, 469, 556, 333,
        // a    b    c    d    e    f    g    h    i    j    k    l    m
        556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
        // n    o    p    q    r    s    t    u    v    w    x    y    z
        556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
        // {    |    }    ~
        334, 260, 334, 584,
    ],
    #[rustfmt::skip]
    upper_widths: [
        // nbsp ¡    ¢    £    ¤    ¥    ¦    §    ¨    ©    ª    «    ¬    shy  ®    ¯
        278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
        // °    ±    ²    ³    ´    µ    ¶    ·    ¸    ¹    º    »    ¼    ½    ¾    ¿
        400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
        // À    Á    Â    Ã    Ä    Å    Æ    Ç    È    É    Ê    Ë    Ì    Í    Î    Ï
        667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
        // Ð    Ñ    Ò    Ó    Ô    Õ    Ö    ×    Ø    Ù    Ú    Û    Ü    Ý    Þ    ß
        722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
        // à    á    â    ã    ä    å    æ    ç    è    é    ê    ë    ì    í    î    ï
        556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
        // ð    ñ    ò    ó    ô    õ    ö    ÷    ø    ù    ú    û    ü    ý    þ    ÿ
        556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
    ],
    average_width: 556,
};

static HELVETICA_BOLD_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0    1    2    3    4    5    6    7    8    9
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
        // :    ;    <    =    >    ?    @
        333, 333, 584, 584, 584, 611, 975,
        // A    B    C    D    E    F    G    H    I    J    K    L    M
        722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
        // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
        // [    \    ]    ^    _    `
        333, 278, 333, 584, 556, 333,
        // a    b    c    d    e    f    g    h    i    j    k    l    m
        556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
        // n    o    p    q    r    s    t    u    v    w    x    y    z
        611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
        // {    |    }    ~
        389, 280, 389, 584,
    ],
    #[rustfmt::skip]
    upper_widths: [
        // nbsp ¡    ¢    £    ¤    ¥    ¦    §    ¨    ©    ª    «    ¬    shy  ®    ¯
        278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333,
        // °    ±    ²    ³    ´    µ    ¶    ·    ¸    ¹    º    »    ¼    ½    ¾    ¿
        400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611,
        // À    Á    Â    Ã    Ä    Å    Æ    Ç    È    É    Ê    Ë    Ì    Í    Î    Ï
        722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
        // Ð    Ñ    Ò    Ó    Ô    Õ    Ö    ×    Ø    Ù    Ú    Û    Ü    Ý    Þ    ß
        722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
        // à    á    â    ã    ä    å    æ    ç    è    é    ê    ë    ì    í    î    ï
        556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278,
        // ð    ñ    ò    ó    ô    õ    ö    ÷    ø    ù    ú    û    ü    ý    þ    ÿ
        611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556,
    ],
    average_width: 611,
};

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_empty_is_zero() {
        assert_eq!(Font::Helvetica.metrics().measure_units(""), 0);
    }

    #[test]
    fn test_measure_units_ascii() {
        // R(722) + u(556) + s(500) + t(278)
        assert_eq!(Font::Helvetica.metrics().measure_units("Rust"), 2056);
    }

    #[test]
    fn test_bold_is_wider_than_regular() {
        let text = "Jane Doe, Certified Welder";
        assert!(
            Font::HelveticaBold.metrics().measure_units(text)
                > Font::Helvetica.metrics().measure_units(text)
        );
    }

    #[test]
    fn test_upper_half_uses_afm_widths() {
        let regular = Font::Helvetica.metrics();
        assert_eq!(regular.char_width('Æ'), 1000);
        assert_eq!(regular.char_width('é'), 556);
        assert_eq!(regular.char_width('\u{A0}'), 278);
        assert_eq!(regular.char_width('ÿ'), 500);

        let bold = Font::HelveticaBold.metrics();
        assert_eq!(bold.char_width('Æ'), 1000);
        assert_eq!(bold.char_width('É'), 667);
        assert_eq!(bold.char_width('ü'), 611);
    }

    #[test]
    fn test_outside_single_byte_range_falls_back_to_average() {
        let metrics = Font::Helvetica.metrics();
        assert_eq!(metrics.char_width('\u{85}'), metrics.average_width);
        assert_eq!(metrics.char_width('李'), metrics.average_width);
    }

    #[test]
    fn test_measure_mm_scales_with_size() {
        let metrics = Font::Helvetica.metrics();
        // 1000 units at 72pt is exactly one inch.
        let w = metrics.measure_mm("MMMMMM", 72.0) / 6.0 / 0.833;
        assert!((w - 25.4).abs() < 0.1, "got {w}");
    }

    #[test]
    fn test_wrap_short_paragraph_is_one_line() {
        let lines = Font::Helvetica.metrics().wrap_paragraph("Skilled welder", 12.0, 188.0);
        assert_eq!(lines, vec!["Skilled welder"]);
    }

    #[test]
    fn test_wrap_empty_paragraph_is_one_blank_line() {
        let lines = Font::Helvetica.metrics().wrap_paragraph("   ", 12.0, 188.0);
        assert_eq!(lines, vec![String::new()]);
    }

    #[test]
    fn test_wrap_long_paragraph_respects_width() {
        let metrics = Font::Helvetica.metrics();
        let text = "Performed welder tasks including installation, maintenance, and repairs. "
            .repeat(4);
        let lines = metrics.wrap_paragraph(&text, 12.0, 100.0);
        assert!(lines.len() > 2);
        for line in &lines {
            assert!(metrics.measure_mm(line, 12.0) <= 100.0, "line too wide: {line}");
            assert!(!line.starts_with(' ') && !line.ends_with(' '));
        }
        // No words lost or reordered.
        let rejoined = lines.join(" ");
        assert_eq!(rejoined, text.split_whitespace().collect::<Vec<_>>().join(" "));
    }

    #[test]
    fn test_wrap_breaks_overlong_word_by_character() {
        let metrics = Font::Helvetica.metrics();
        let word = "W".repeat(60);
        let lines = metrics.wrap_paragraph(&format!("A {word} B"), 12.0, 50.0);
        assert!(lines.len() >= 3);
        assert_eq!(lines[0], "A");
        assert_eq!(lines.concat().replace(' ', ""), format!("A{word}B"));
        for line in &lines {
            assert!(metrics.measure_mm(line, 12.0) <= 50.0);
        }
    }

    #[test]
    fn test_wrap_keeps_leading_indentation() {
        let lines = Font::Helvetica.metrics().wrap_paragraph("    - Led crew of four", 12.0, 188.0);
        assert_eq!(lines, vec!["    - Led crew of four"]);
    }

    #[test]
    fn test_wrap_keeps_repeated_spaces_within_a_line() {
        let lines = Font::Helvetica.metrics().wrap_paragraph("Tools:   MIG,  TIG", 12.0, 188.0);
        assert_eq!(lines, vec!["Tools:   MIG,  TIG"]);
    }

    #[test]
    fn test_wrap_indented_paragraph_breaks_after_indent() {
        let metrics = Font::Helvetica.metrics();
        let text = format!("  {}", "maintenance ".repeat(12));
        let lines = metrics.wrap_paragraph(&text, 12.0, 80.0);
        assert!(lines.len() > 1);
        assert!(lines[0].starts_with("  maintenance"));
        for line in &lines[1..] {
            assert!(line.starts_with("maintenance"), "unexpected indent: {line:?}");
        }
        for line in &lines {
            assert!(metrics.measure_mm(line, 12.0) <= 80.0);
        }
    }
}
