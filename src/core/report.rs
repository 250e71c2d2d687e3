//! Report formatter: shapes an aggregate result into a renderable document.
//!
//! Layout is fixed: letter page, header paragraphs, a spacer, then a
//! four-column table (3:1:1:1) with a single rule under the column titles.

use crate::models::report::{AggregateResult, ReportRow};
use serde::Serialize;

/// Points per centimetre.
pub const CM: f32 = 72.0 / 2.54;

/// Average Helvetica glyph advance as a fraction of the font size, used to
/// decide where text wraps.
const AVG_CHAR_WIDTH: f32 = 0.55;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PageSetup {
    pub width: f32,
    pub height: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
}

impl PageSetup {
    pub const LETTER: PageSetup = PageSetup {
        width: 612.0,
        height: 792.0,
        margin_left: 40.0,
        margin_right: 40.0,
        margin_top: 40.0,
        margin_bottom: 28.0,
    };

    pub fn frame_width(&self) -> f32 {
        self.width - self.margin_left - self.margin_right
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VAlign {
    Top,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HAlign {
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TableStyle {
    pub col_widths: [f32; 4],
    pub valign: VAlign,
    pub halign: HAlign,
    /// Stroke width of the rule drawn below the column-title row.
    pub header_rule: f32,
    pub padding_x: f32,
    pub padding_y: f32,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            col_widths: [6.0 * CM, 2.0 * CM, 2.0 * CM, 2.0 * CM],
            valign: VAlign::Top,
            halign: HAlign::Left,
            header_rule: 1.0,
            padding_x: 6.0,
            padding_y: 3.0,
        }
    }
}

/// A piece of text already broken into the lines it will occupy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextBlock {
    pub text: String,
    pub lines: Vec<String>,
}

impl TextBlock {
    pub fn wrapped(text: &str, max_chars: usize) -> Self {
        let lines: Vec<String> = textwrap::wrap(text, max_chars.max(1))
            .into_iter()
            .map(|l| l.into_owned())
            .collect();

        Self {
            text: text.to_string(),
            lines: if lines.is_empty() {
                vec![String::new()]
            } else {
                lines
            },
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// Everything the PDF renderer needs, with no renderer types in it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportDocument {
    pub page: PageSetup,
    pub font_size: f32,
    pub leading: f32,
    pub header_lines: Vec<TextBlock>,
    /// Vertical gap between the header paragraphs and the table.
    pub spacer: f32,
    pub style: TableStyle,
    /// Column titles first, then the event rows, then the total row.
    pub rows: Vec<ReportRow>,
    pub cells: Vec<[TextBlock; 4]>,
    pub hours_total: f64,
}

impl ReportDocument {
    pub fn header_row(&self) -> Option<&ReportRow> {
        self.rows.first()
    }

    pub fn total_row(&self) -> Option<&ReportRow> {
        self.rows.last()
    }

    /// Rows between the column titles and the total.
    pub fn event_rows(&self) -> &[ReportRow] {
        if self.rows.len() < 2 {
            return &[];
        }
        &self.rows[1..self.rows.len() - 1]
    }
}

fn chars_for(width: f32, font_size: f32) -> usize {
    (width / (font_size * AVG_CHAR_WIDTH)).floor() as usize
}

/// Shape the aggregate result and header lines into a document.
pub fn format_report(
    result: &AggregateResult,
    headers: &[String],
    column_titles: &ReportRow,
) -> ReportDocument {
    let page = PageSetup::LETTER;
    let style = TableStyle::default();
    let font_size = 10.0;

    let header_chars = chars_for(page.frame_width(), font_size);
    let header_lines = headers
        .iter()
        .map(|h| TextBlock::wrapped(h, header_chars))
        .collect();

    let rows = result.table(column_titles);
    let col_chars: Vec<usize> = style
        .col_widths
        .iter()
        .map(|w| chars_for(w - 2.0 * style.padding_x, font_size))
        .collect();

    let cells = rows
        .iter()
        .map(|r| {
            let c = r.cells();
            [
                TextBlock::wrapped(c[0], col_chars[0]),
                TextBlock::wrapped(c[1], col_chars[1]),
                TextBlock::wrapped(c[2], col_chars[2]),
                TextBlock::wrapped(c[3], col_chars[3]),
            ]
        })
        .collect();

    ReportDocument {
        page,
        font_size,
        leading: font_size * 1.2,
        header_lines,
        spacer: if headers.is_empty() { 0.0 } else { 0.5 * CM },
        style,
        rows,
        cells,
        hours_total: result.breakdown.hours_total,
    }
}
