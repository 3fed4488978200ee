//! Page layout — positions the photo, heading, contact line, and body text.
//!
//! Coordinates are millimetres from the top-left corner of an A4 page. The
//! layout is a single forward pass over a cursor: content that would cross the
//! bottom break line starts a new page transparently.
//!
//! Text placement never depends on whether a photo is present; the photo box
//! is reserved in every layout and only the `Photo` op is conditional.

use crate::render::encoding::uppercase_single_byte;
use crate::render::font_metrics::{Font, MM_PER_PT};
use crate::render::theme::Rgb;

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;
/// Left, top, and right margin.
pub const MARGIN_MM: f32 = 10.0;
/// Distance from the bottom edge at which a new page starts.
pub const BREAK_MARGIN_MM: f32 = 15.0;
/// Horizontal padding inside a text cell.
pub const CELL_PADDING_MM: f32 = 1.0;

pub const PHOTO_BOX: Rect = Rect {
    x: 15.0,
    y: 20.0,
    width: 35.0,
    height: 35.0,
};

/// Left edge of the heading block; clears the photo box.
pub const HEADING_X_MM: f32 = 60.0;
pub const HEADING_Y_MM: f32 = 25.0;
pub const HEADING_SIZE_PT: f32 = 20.0;
pub const HEADING_LINE_MM: f32 = 10.0;

pub const CONTACT_SIZE_PT: f32 = 12.0;
pub const CONTACT_LINE_MM: f32 = 8.0;

pub const BODY_GAP_MM: f32 = 10.0;
pub const BODY_SIZE_PT: f32 = 12.0;
pub const BODY_LINE_MM: f32 = 7.0;

/// Smallest size a heading or contact line shrinks to before it is clipped.
pub const MIN_FIT_SIZE_PT: f32 = 8.0;

// ────────────────────────────────────────────────────────────────────────────
// Output types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[cfg(test)]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// One positioned line of text. `text` is already single-byte safe.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub x: f32,
    /// Baseline, measured from the top of the page.
    pub baseline: f32,
    /// Top of the line cell the text sits in.
    pub top: f32,
    pub font: Font,
    pub size_pt: f32,
    pub color: Rgb,
    pub text: String,
}

impl TextRun {
    #[cfg(test)]
    pub fn width(&self) -> f32 {
        self.font.metrics().measure_mm(&self.text, self.size_pt)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text(TextRun),
    Photo(Rect),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaidOutPage {
    pub ops: Vec<DrawOp>,
}

impl LaidOutPage {
    #[cfg(test)]
    pub fn text_runs(&self) -> impl Iterator<Item = &TextRun> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text(run) => Some(run),
            DrawOp::Photo(_) => None,
        })
    }

    pub fn has_photo(&self) -> bool {
        self.ops.iter().any(|op| matches!(op, DrawOp::Photo(_)))
    }
}

/// Everything the layout needs. Strings must already be single-byte safe.
#[derive(Debug, Clone)]
pub struct LayoutInput<'a> {
    pub name: &'a str,
    pub contact_line: Option<&'a str>,
    pub body: &'a str,
    pub heading_color: Rgb,
    pub include_photo: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Cursor
// ────────────────────────────────────────────────────────────────────────────

struct Cursor {
    pages: Vec<LaidOutPage>,
    y: f32,
}

impl Cursor {
    fn new() -> Self {
        Self {
            pages: vec![LaidOutPage::default()],
            y: MARGIN_MM,
        }
    }

    fn break_line() -> f32 {
        PAGE_HEIGHT_MM - BREAK_MARGIN_MM
    }

    fn push(&mut self, op: DrawOp) {
        if let Some(page) = self.pages.last_mut() {
            page.ops.push(op);
        }
    }

    /// Starts a new page if a line of `height` would cross the break line.
    fn ensure_room(&mut self, height: f32) {
        if self.y + height > Self::break_line() && self.y > MARGIN_MM {
            self.pages.push(LaidOutPage::default());
            self.y = MARGIN_MM;
        }
    }

    /// Places one line of text in a cell starting at `x`, then moves to the next line.
    /// Empty text still consumes the line height.
    fn line(&mut self, x: f32, height: f32, font: Font, size_pt: f32, color: Rgb, text: String) {
        self.ensure_room(height);
        if !text.is_empty() {
            let top = self.y;
            self.push(DrawOp::Text(TextRun {
                x: x + CELL_PADDING_MM,
                baseline: baseline_in_cell(top, height, size_pt),
                top,
                font,
                size_pt,
                color,
                text,
            }));
        }
        self.y += height;
    }
}

/// Vertically centres the glyphs in the cell: baseline sits 0.3 em below the middle.
fn baseline_in_cell(top: f32, height: f32, size_pt: f32) -> f32 {
    top + height / 2.0 + 0.3 * size_pt * MM_PER_PT
}

// ────────────────────────────────────────────────────────────────────────────
// Layout
// ────────────────────────────────────────────────────────────────────────────

/// Lays out the whole document.
///
/// Steps:
/// 1. Photo box (only when `include_photo`)
/// 2. Upper-cased name in bold at the heading position, template color
/// 3. Contact line under it, body font, neutral color (only when present)
/// 4. Body text wrapped across the full content width, below the photo box
pub fn lay_out(input: &LayoutInput<'_>) -> Vec<LaidOutPage> {
    let mut cursor = Cursor::new();

    if input.include_photo {
        cursor.push(DrawOp::Photo(PHOTO_BOX));
    }

    let block_width = PAGE_WIDTH_MM - MARGIN_MM - HEADING_X_MM;
    cursor.y = HEADING_Y_MM;

    let heading = uppercase_single_byte(input.name);
    let (size, heading) = fit_line(&heading, Font::HelveticaBold, HEADING_SIZE_PT, block_width);
    cursor.line(
        HEADING_X_MM,
        HEADING_LINE_MM,
        Font::HelveticaBold,
        size,
        input.heading_color,
        heading,
    );

    if let Some(contact) = input.contact_line.filter(|c| !c.trim().is_empty()) {
        let (size, contact) = fit_line(contact, Font::Helvetica, CONTACT_SIZE_PT, block_width);
        cursor.line(
            HEADING_X_MM,
            CONTACT_LINE_MM,
            Font::Helvetica,
            size,
            Rgb::NEUTRAL,
            contact,
        );
    }

    cursor.y = (cursor.y + BODY_GAP_MM).max(PHOTO_BOX.bottom());

    let body_width = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
    for line in wrap_body(input.body, body_width) {
        cursor.line(
            MARGIN_MM,
            BODY_LINE_MM,
            Font::Helvetica,
            BODY_SIZE_PT,
            Rgb::NEUTRAL,
            line,
        );
    }

    cursor.pages
}

/// Splits the body on `\n` and wraps each paragraph to the cell's inner width.
/// A single trailing newline does not produce an extra blank line.
pub fn wrap_body(body: &str, cell_width: f32) -> Vec<String> {
    let metrics = Font::Helvetica.metrics();
    let inner = cell_width - 2.0 * CELL_PADDING_MM;
    let body = body.strip_suffix('\n').unwrap_or(body);
    if body.is_empty() {
        return Vec::new();
    }
    body.split('\n')
        .flat_map(|paragraph| metrics.wrap_paragraph(paragraph, BODY_SIZE_PT, inner))
        .collect()
}

/// Shrinks `text` to fit one cell of `cell_width`, down to `MIN_FIT_SIZE_PT`;
/// past that the text is clipped at the last character that fits.
pub fn fit_line(text: &str, font: Font, preferred_pt: f32, cell_width: f32) -> (f32, String) {
    let metrics = font.metrics();
    let inner = cell_width - 2.0 * CELL_PADDING_MM;

    let width = metrics.measure_mm(text, preferred_pt);
    if width <= inner {
        return (preferred_pt, text.to_string());
    }

    let scaled = (preferred_pt * inner / width * 10.0).floor() / 10.0;
    if scaled >= MIN_FIT_SIZE_PT {
        return (scaled, text.to_string());
    }

    let mut clipped = String::new();
    let mut clipped_width = 0.0_f32;
    for c in text.chars() {
        let c_w = metrics.measure_mm(c.encode_utf8(&mut [0u8; 4]), MIN_FIT_SIZE_PT);
        if clipped_width + c_w > inner {
            break;
        }
        clipped.push(c);
        clipped_width += c_w;
    }
    (MIN_FIT_SIZE_PT, clipped.trim_end().to_string())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn input<'a>(name: &'a str, contact: Option<&'a str>, body: &'a str) -> LayoutInput<'a> {
        LayoutInput {
            name,
            contact_line: contact,
            body,
            heading_color: Rgb::ACCENT_BLUE,
            include_photo: false,
        }
    }

    fn all_runs(pages: &[LaidOutPage]) -> Vec<&TextRun> {
        pages.iter().flat_map(|p| p.text_runs()).collect()
    }

    fn overlaps(run: &TextRun, line_height: f32, rect: &Rect) -> bool {
        let run_right = run.x + run.width();
        let run_bottom = run.top + line_height;
        run.x < rect.right() && run_right > rect.x && run.top < rect.bottom() && run_bottom > rect.y
    }

    #[test]
    fn test_heading_is_uppercased_bold_and_colored() {
        let pages = lay_out(&input("Jane Doe", None, ""));
        let runs = all_runs(&pages);
        assert_eq!(runs.len(), 1);
        let heading = runs[0];
        assert_eq!(heading.text, "JANE DOE");
        assert_eq!(heading.font, Font::HelveticaBold);
        assert_eq!(heading.size_pt, HEADING_SIZE_PT);
        assert_eq!(heading.color, Rgb::ACCENT_BLUE);
        assert_eq!(heading.x, HEADING_X_MM + CELL_PADDING_MM);
        assert_eq!(heading.top, HEADING_Y_MM);
    }

    #[test]
    fn test_contact_line_follows_heading_in_neutral_body_font() {
        let pages = lay_out(&input("Jane Doe", Some("Tulsa | 555-0100"), ""));
        let runs = all_runs(&pages);
        assert_eq!(runs.len(), 2);
        let contact = runs[1];
        assert_eq!(contact.text, "Tulsa | 555-0100");
        assert_eq!(contact.font, Font::Helvetica);
        assert_eq!(contact.color, Rgb::NEUTRAL);
        assert_eq!(contact.x, runs[0].x);
        assert_eq!(contact.top, HEADING_Y_MM + HEADING_LINE_MM);
    }

    #[test]
    fn test_blank_contact_line_is_skipped() {
        let pages = lay_out(&input("Jane Doe", Some("  "), ""));
        assert_eq!(all_runs(&pages).len(), 1);
    }

    #[test]
    fn test_empty_name_renders_no_heading_text() {
        let pages = lay_out(&input("", None, "Body line"));
        let runs = all_runs(&pages);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text, "Body line");
    }

    #[test]
    fn test_body_starts_below_photo_box_and_spans_content_width() {
        let pages = lay_out(&input("Jane Doe", Some("Tulsa"), "First\nSecond"));
        let runs = all_runs(&pages);
        let body: Vec<_> = runs.iter().filter(|r| r.font == Font::Helvetica).skip(1).collect();
        assert_eq!(body.len(), 2);
        assert_eq!(body[0].top, PHOTO_BOX.bottom());
        assert_eq!(body[0].x, MARGIN_MM + CELL_PADDING_MM);
        assert_eq!(body[1].top, body[0].top + BODY_LINE_MM);
    }

    #[test]
    fn test_blank_body_lines_keep_their_height() {
        let pages = lay_out(&input("", None, "A\n\nB"));
        let runs = all_runs(&pages);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[1].top - runs[0].top, 2.0 * BODY_LINE_MM);
    }

    #[test]
    fn test_text_never_overlaps_photo_box() {
        let body = "Reliable Welder with 5-10 years of experience in welder work. ".repeat(10);
        let mut layout = input("Jane Doe", Some("Tulsa | 555-0100 | jane@example.com"), &body);
        layout.include_photo = true;
        let pages = lay_out(&layout);
        assert!(pages[0].has_photo());
        for run in pages[0].text_runs() {
            let line_height = match run.font {
                Font::HelveticaBold => HEADING_LINE_MM,
                Font::Helvetica => BODY_LINE_MM.min(CONTACT_LINE_MM),
            };
            assert!(!overlaps(run, line_height, &PHOTO_BOX), "{run:?} overlaps photo");
        }
    }

    #[test]
    fn test_photo_does_not_move_text() {
        let body = "EXPERIENCE\n- Shipyard welding\n- Pipe fitting";
        let without = lay_out(&input("Jane Doe", Some("Tulsa"), body));
        let mut with_photo = input("Jane Doe", Some("Tulsa"), body);
        with_photo.include_photo = true;
        let with = lay_out(&with_photo);

        assert_eq!(with.len(), without.len());
        let runs_with: Vec<_> = all_runs(&with).into_iter().cloned().collect();
        let runs_without: Vec<_> = all_runs(&without).into_iter().cloned().collect();
        assert_eq!(runs_with, runs_without);
        assert_eq!(with[0].ops[0], DrawOp::Photo(PHOTO_BOX));
        assert!(!without[0].has_photo());
    }

    #[test]
    fn test_long_body_breaks_onto_new_pages_within_bounds() {
        let body = (1..=80)
            .map(|i| format!("- Completed job number {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let pages = lay_out(&input("Jane Doe", None, &body));
        assert!(pages.len() >= 2);
        for page in &pages {
            for run in page.text_runs() {
                assert!(run.top >= MARGIN_MM);
                assert!(run.top + BODY_LINE_MM <= PAGE_HEIGHT_MM - BREAK_MARGIN_MM + 1e-3);
                assert!(run.x + run.width() <= PAGE_WIDTH_MM - MARGIN_MM);
            }
        }
        // Continuation pages start at the top margin.
        assert_eq!(pages[1].text_runs().next().unwrap().top, MARGIN_MM);
        assert_eq!(all_runs(&pages).len(), 81);
    }

    #[test]
    fn test_long_name_shrinks_to_fit() {
        let name = "Maximiliana Alejandra Fernandez-Rodriguez de la Cruz";
        let pages = lay_out(&input(name, None, ""));
        let heading = all_runs(&pages)[0].clone();
        assert!(heading.size_pt < HEADING_SIZE_PT);
        assert!(heading.size_pt >= MIN_FIT_SIZE_PT);
        assert_eq!(heading.text, name.to_uppercase());
        assert!(heading.x + heading.width() <= PAGE_WIDTH_MM - MARGIN_MM);
    }

    #[test]
    fn test_heading_keeps_letters_without_single_byte_capital() {
        let pages = lay_out(&input("José ÿµ", None, ""));
        let heading = all_runs(&pages)[0].clone();
        assert_eq!(heading.text, "JOSÉ ÿµ");
        assert!(heading.text.chars().all(crate::render::encoding::is_representable));
    }

    #[test]
    fn test_body_indentation_is_preserved() {
        let pages = lay_out(&input("", None, "SKILLS
   - Rigging"));
        let runs = all_runs(&pages);
        assert_eq!(runs[1].text, "   - Rigging");
    }

    #[test]
    fn test_fit_line_clips_when_min_size_too_large() {
        let text = "W".repeat(200);
        let (size, clipped) = fit_line(&text, Font::HelveticaBold, HEADING_SIZE_PT, 140.0);
        assert_eq!(size, MIN_FIT_SIZE_PT);
        assert!(clipped.len() < text.len());
        assert!(
            Font::HelveticaBold.metrics().measure_mm(&clipped, size)
                <= 140.0 - 2.0 * CELL_PADDING_MM
        );
    }

    #[test]
    fn test_wrap_body_ignores_single_trailing_newline() {
        assert_eq!(wrap_body("A\nB\n", 190.0), vec!["A", "B"]);
        assert_eq!(wrap_body("A\n\n", 190.0), vec!["A", ""]);
        assert!(wrap_body("", 190.0).is_empty());
    }
}
