use crate::core::report::ReportDocument;
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str, TextStr};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Renders a [`ReportDocument`] with pdf-writer: header paragraphs, spacer,
/// then the table, flowing onto new pages as needed.
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,

    next_id: i32,
    font_id: Ref,
}

impl PdfManager {
    pub fn new(page_w: f32, page_h: f32) -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let next_id = 4;

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w,
            page_h,

            next_id,
            font_id,
        }
    }

    /// Generate a fresh unique Ref
    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Create a new page and its content object
    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        page.resources().fonts().pair(Name(b"F1"), self.font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    /// Write the stream of the current page
    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    pub fn page_count(&self) -> usize {
        self.page_refs.len()
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        if text.is_empty() {
            return;
        }
        let bytes = to_win_ansi(text);
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&bytes));
        content.end_text();
    }

    fn draw_rule(&self, content: &mut Content, x1: f32, x2: f32, y: f32, width: f32) {
        content.save_state();
        content.set_line_width(width);
        content.set_stroke_gray(0.0);
        content.move_to(x1, y);
        content.line_to(x2, y);
        content.stroke();
        content.restore_state();
    }

    pub fn write_document(&mut self, doc: &ReportDocument) {
        let page = doc.page;
        let style = doc.style;
        let left = page.margin_left;
        let top = page.height - page.margin_top;
        let bottom = page.margin_bottom;
        let table_w: f32 = style.col_widths.iter().sum();

        let mut content = self.new_page();
        let mut y = top;

        for block in &doc.header_lines {
            for line in &block.lines {
                if y - doc.leading < bottom {
                    self.finalize_page(content);
                    content = self.new_page();
                    y = top;
                }
                self.draw_text(&mut content, left, y - doc.font_size, doc.font_size, line);
                y -= doc.leading;
            }
        }
        y -= doc.spacer;

        for (i, row) in doc.cells.iter().enumerate() {
            let lines = row.iter().map(|c| c.line_count()).max().unwrap_or(1);
            let row_h = lines as f32 * doc.leading + 2.0 * style.padding_y;

            if y - row_h < bottom && y < top {
                self.finalize_page(content);
                content = self.new_page();
                y = top;
            }

            // top aligned, left aligned
            let mut x = left;
            for (col, cell) in row.iter().enumerate() {
                let mut ty = y - style.padding_y - doc.font_size;
                for line in &cell.lines {
                    self.draw_text(&mut content, x + style.padding_x, ty, doc.font_size, line);
                    ty -= doc.leading;
                }
                x += style.col_widths[col];
            }

            y -= row_h;

            if i == 0 {
                self.draw_rule(&mut content, left, left + table_w, y, style.header_rule);
            }
        }

        self.finalize_page(content);

        if let Some(title) = doc.header_lines.first() {
            let info_id = self.fresh_ref();
            self.pdf
                .document_info(info_id)
                .title(TextStr(&title.text))
                .producer(TextStr(concat!("calreport ", env!("CARGO_PKG_VERSION"))));
        }
    }

    pub fn finish(mut self) -> Vec<u8> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();
        self.pdf.finish()
    }

    pub fn save(self, path: &Path) -> std::io::Result<()> {
        let bytes = self.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

/// Encode for the WinAnsi Helvetica font; unmappable characters become `?`.
fn to_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20}'..='\u{7e}' | '\u{a0}'..='\u{ff}' => c as u8,
            '€' => 0x80,
            '–' => 0x96,
            '—' => 0x97,
            _ => b'?',
        })
        .collect()
}
