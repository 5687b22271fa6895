//! Single-page PDF writer built on lopdf.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use super::brand::BrandProfile;
use super::template::{Line, LineStyle};
use crate::error::{Error, Result};

const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;
const MARGIN: f32 = 72.0;

/// Syntactically minimal empty one-page document, used when nothing else can be drawn.
pub const MINIMAL_PDF: &[u8] = b"%PDF-1.4\n\
1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n\
2 0 obj\n<< /Type /Pages /Kids [3 0 R] /Count 1 >>\nendobj\n\
3 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 595 842] >>\nendobj\n\
trailer\n<< /Root 1 0 R >>\n%%EOF\n";

#[derive(Debug, Clone)]
pub struct PageStyle {
    pub font: String,
    pub heading_size: f32,
    pub body_size: f32,
    pub heading_color: (f32, f32, f32),
}

impl Default for PageStyle {
    fn default() -> Self {
        PageStyle {
            font: "Helvetica".to_string(),
            heading_size: 16.0,
            body_size: 12.0,
            heading_color: (0.0, 0.0, 0.0),
        }
    }
}

impl PageStyle {
    pub fn from_brand(brand: &BrandProfile) -> Self {
        PageStyle {
            font: brand.font.clone(),
            heading_size: brand.dimensione_titolo,
            body_size: brand.dimensione_testo,
            heading_color: brand.rgb().unwrap_or((0.0, 0.0, 0.0)),
        }
    }
}

fn bold_variant(font: &str) -> &str {
    match font {
        "Helvetica" => "Helvetica-Bold",
        "Times-Roman" => "Times-Bold",
        "Courier" => "Courier-Bold",
        other => other,
    }
}

/// Encode text for a standard Type1 font with WinAnsiEncoding.
/// Characters outside the code page become `?`.
pub fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '€' => 0x80,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '–' => 0x96,
            '—' => 0x97,
            c if (c as u32) < 0x80 => c as u8,
            c if (0xA0..=0xFF).contains(&(c as u32)) => c as u32 as u8,
            _ => b'?',
        })
        .collect()
}

fn text_ops(ops: &mut Vec<Operation>, font_key: &str, size: f32, y: f32, text: &str) {
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new("Tf", vec![font_key.into(), size.into()]));
    ops.push(Operation::new("Td", vec![MARGIN.into(), y.into()]));
    ops.push(Operation::new("Tj", vec![Object::string_literal(win_ansi(text))]));
    ops.push(Operation::new("ET", vec![]));
}

fn page_content(lines: &[Line], style: &PageStyle) -> Content {
    let mut operations = Vec::new();
    let mut y = PAGE_HEIGHT - MARGIN;
    let (r, g, b) = style.heading_color;

    for (i, line) in lines.iter().enumerate() {
        if y < MARGIN {
            log::warn!("quote layout overflows the page, {} line(s) dropped", lines.len() - i);
            break;
        }
        match line.style {
            LineStyle::Blank => {
                y -= style.body_size;
            }
            LineStyle::Heading => {
                operations.push(Operation::new("rg", vec![r.into(), g.into(), b.into()]));
                text_ops(&mut operations, "F2", style.heading_size, y, &line.text);
                y -= style.heading_size * 1.8;
            }
            LineStyle::Body => {
                operations.push(Operation::new("rg", vec![0.0_f32.into(), 0.0_f32.into(), 0.0_f32.into()]));
                text_ops(&mut operations, "F1", style.body_size, y, &line.text);
                y -= style.body_size * 1.6;
            }
        }
    }

    Content { operations }
}

/// Draw `lines` top to bottom on a single A4 page.
pub fn draw_lines(lines: &[Line], style: &PageStyle) -> Result<Vec<u8>> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => Object::Name(style.font.clone().into_bytes()),
        "Encoding" => "WinAnsiEncoding",
    });
    let bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => Object::Name(bold_variant(&style.font).as_bytes().to_vec()),
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => regular_id,
            "F2" => bold_id,
        },
    });

    let content = page_content(lines, style);
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| Error::Render(format!("failed to serialize PDF: {e}")))?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_ansi_maps_euro_and_latin1() {
        assert_eq!(win_ansi("€ è"), vec![0x80, b' ', 0xE8]);
        assert_eq!(win_ansi("ok"), b"ok".to_vec());
        assert_eq!(win_ansi("日"), vec![b'?']);
    }

    #[test]
    fn bold_variants() {
        assert_eq!(bold_variant("Helvetica"), "Helvetica-Bold");
        assert_eq!(bold_variant("Symbol"), "Symbol");
    }

    #[test]
    fn drawn_document_is_a_loadable_pdf() {
        let lines = vec![Line::heading("Preventivo per ACME"), Line::body("Data: 2024-01-15")];
        let bytes = draw_lines(&lines, &PageStyle::default()).unwrap();

        assert!(bytes.starts_with(b"%PDF-1.5"));
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn each_line_is_its_own_text_object() {
        let lines = vec![Line::heading("a"), Line::body("b"), Line::body("c")];
        let content = page_content(&lines, &PageStyle::default());
        let text_objects = content
            .operations
            .iter()
            .filter(|op| op.operator == "BT")
            .count();
        assert_eq!(text_objects, 3);
    }

    #[test]
    fn overflowing_lines_are_dropped() {
        let lines: Vec<Line> = (0..200).map(|i| Line::body(format!("riga {i}"))).collect();
        let content = page_content(&lines, &PageStyle::default());
        let drawn = content.operations.iter().filter(|op| op.operator == "Tj").count();
        assert!(drawn > 0 && drawn < 200);
    }

    #[test]
    fn minimal_pdf_has_header_and_trailer() {
        assert!(MINIMAL_PDF.starts_with(b"%PDF-"));
        assert!(MINIMAL_PDF.ends_with(b"%%EOF\n"));
    }
}
