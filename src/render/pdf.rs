//! Fixed-page PDF writer.
//!
//! Serializes a draw-command list into a self-contained PDF 1.4 file using
//! the base-14 fonts (Helvetica, Helvetica-Bold, Courier) and one
//! Flate-compressed content stream per page. Text is emitted in WinAnsi
//! encoding; characters outside Latin-1 degrade to `?`, a limitation of the
//! base-font model this writer targets.

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use log::debug;

use crate::error::{Error, Result};
use crate::model::{DrawKind, FontSpec, LayoutResult};

use super::ExportOptions;

/// Millimetre-to-point conversion factor.
const MM_TO_PT: f32 = 72.0 / 25.4;

/// Object ids of the three base fonts (regular, bold, monospace).
const FONT_OBJECTS: [(u32, &str); 3] = [
    (3, "Helvetica"),
    (4, "Helvetica-Bold"),
    (5, "Courier"),
];

/// Serialize a layout result into PDF bytes.
pub fn to_pdf(layout: &LayoutResult, _options: &ExportOptions) -> Result<Vec<u8>> {
    let geometry = layout.geometry;
    let page_count = layout.page_count.max(1) as usize;
    let page_width = geometry.width * MM_TO_PT;
    let page_height = geometry.height * MM_TO_PT;

    // Object layout: 1 catalog, 2 page tree, 3-5 fonts, then one page
    // object and one content stream per page.
    let total_objects = 5 + page_count * 2;
    let mut offsets = vec![0usize; total_objects + 1];
    let mut out: Vec<u8> = Vec::new();

    out.extend_from_slice(b"%PDF-1.4\n");
    out.extend_from_slice(&[b'%', 0xE2, 0xE3, 0xCF, 0xD3, b'\n']);

    let begin = |out: &mut Vec<u8>, offsets: &mut [usize], id: usize| {
        offsets[id] = out.len();
        out.extend_from_slice(format!("{} 0 obj\n", id).as_bytes());
    };

    begin(&mut out, &mut offsets, 1);
    out.extend_from_slice(b"<< /Type /Catalog /Pages 2 0 R >>\nendobj\n");

    let kids: Vec<String> = (0..page_count)
        .map(|i| format!("{} 0 R", 6 + i * 2))
        .collect();
    begin(&mut out, &mut offsets, 2);
    out.extend_from_slice(
        format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>\nendobj\n",
            kids.join(" "),
            page_count
        )
        .as_bytes(),
    );

    for (id, base_font) in FONT_OBJECTS {
        begin(&mut out, &mut offsets, id as usize);
        out.extend_from_slice(
            format!(
                "<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>\nendobj\n",
                base_font
            )
            .as_bytes(),
        );
    }

    for page in 0..page_count {
        let page_id = 6 + page * 2;
        let content_id = page_id + 1;

        begin(&mut out, &mut offsets, page_id);
        out.extend_from_slice(
            format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.2} {:.2}] \
                 /Resources << /Font << /F1 3 0 R /F2 4 0 R /F3 5 0 R >> >> \
                 /Contents {} 0 R >>\nendobj\n",
                page_width, page_height, content_id
            )
            .as_bytes(),
        );

        let stream = page_stream(layout, page as u32, page_height);
        let compressed = compress(&stream)?;

        begin(&mut out, &mut offsets, content_id);
        out.extend_from_slice(
            format!(
                "<< /Length {} /Filter /FlateDecode >>\nstream\n",
                compressed.len()
            )
            .as_bytes(),
        );
        out.extend_from_slice(&compressed);
        out.extend_from_slice(b"\nendstream\nendobj\n");
    }

    let xref_offset = out.len();
    out.extend_from_slice(format!("xref\n0 {}\n", total_objects + 1).as_bytes());
    out.extend_from_slice(b"0000000000 65535 f \n");
    for id in 1..=total_objects {
        out.extend_from_slice(format!("{:010} 00000 n \n", offsets[id]).as_bytes());
    }
    out.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            total_objects + 1,
            xref_offset
        )
        .as_bytes(),
    );

    debug!(
        "pdf writer: {} pages, {} bytes",
        page_count,
        out.len()
    );
    Ok(out)
}

/// Build the uncompressed content stream for one page.
fn page_stream(layout: &LayoutResult, page: u32, page_height: f32) -> Vec<u8> {
    let mut stream: Vec<u8> = Vec::new();

    for cmd in layout.page_commands(page) {
        let x = cmd.x * MM_TO_PT;
        // PDF origin is bottom-left; layout coordinates are top-down.
        let y = page_height - cmd.y * MM_TO_PT;

        match &cmd.kind {
            DrawKind::Text { content, font } => {
                stream.extend_from_slice(
                    format!(
                        "BT /{} {:.2} Tf {:.2} {:.2} Td (",
                        font_resource(font),
                        font.size,
                        x,
                        y
                    )
                    .as_bytes(),
                );
                encode_text(content, &mut stream);
                stream.extend_from_slice(b") Tj ET\n");
            }
            DrawKind::Rule { width } => {
                let x2 = x + width * MM_TO_PT;
                stream.extend_from_slice(
                    format!(
                        "q 0.78 G 0.75 w {:.2} {:.2} m {:.2} {:.2} l S Q\n",
                        x, y, x2, y
                    )
                    .as_bytes(),
                );
            }
        }
    }

    stream
}

fn font_resource(font: &FontSpec) -> &'static str {
    if font.monospace {
        "F3"
    } else if font.bold {
        "F2"
    } else {
        "F1"
    }
}

/// Write a PDF literal string body: parentheses and backslashes escaped,
/// Latin-1 bytes passed through, anything wider replaced with `?`.
fn encode_text(text: &str, out: &mut Vec<u8>) {
    for c in text.chars() {
        match c {
            '(' => out.extend_from_slice(b"\\("),
            ')' => out.extend_from_slice(b"\\)"),
            '\\' => out.extend_from_slice(b"\\\\"),
            c if (c as u32) <= 0xFF => out.push(c as u32 as u8),
            _ => out.push(b'?'),
        }
    }
}

fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(data)
        .map_err(|e| Error::Render(format!("content stream compression failed: {}", e)))?;
    encoder
        .finish()
        .map_err(|e| Error::Render(format!("content stream compression failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::layout_document;
    use crate::model::SourceDocument;

    fn render(content: &str) -> Vec<u8> {
        let doc = SourceDocument::new("t", content);
        let layout = layout_document(&doc).unwrap();
        to_pdf(&layout, &ExportOptions::default()).unwrap()
    }

    #[test]
    fn test_header_and_trailer() {
        let bytes = render("# Hello\n\nworld");
        assert!(bytes.starts_with(b"%PDF-1.4"));
        assert!(bytes.ends_with(b"%%EOF\n"));
    }

    #[test]
    fn test_one_page_object_per_page() {
        let content = vec!["paragraph line"; 200].join("\n");
        let doc = SourceDocument::new("t", &content);
        let layout = layout_document(&doc).unwrap();
        assert!(layout.page_count > 1);

        let bytes = to_pdf(&layout, &ExportOptions::default()).unwrap();
        let text = String::from_utf8_lossy(&bytes);
        let page_objects = text.matches("/Type /Page ").count();
        assert_eq!(page_objects, layout.page_count as usize);
        assert!(text.contains(&format!("/Count {}", layout.page_count)));
    }

    #[test]
    fn test_empty_document_still_one_page() {
        let bytes = render("");
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Count 1"));
    }

    #[test]
    fn test_streams_are_flate_compressed() {
        let bytes = render("some body text");
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Filter /FlateDecode"));
    }

    #[test]
    fn test_encode_text_escapes() {
        let mut out = Vec::new();
        encode_text(r"a(b)c\d", &mut out);
        assert_eq!(out, b"a\\(b\\)c\\\\d");

        let mut out = Vec::new();
        encode_text("caf\u{e9} \u{4e16}", &mut out);
        assert_eq!(out, b"caf\xe9 ?");
    }

    #[test]
    fn test_font_resources() {
        assert_eq!(font_resource(&FontSpec::body(11.0)), "F1");
        assert_eq!(font_resource(&FontSpec::bold(16.0)), "F2");
        let mono = FontSpec {
            size: 10.0,
            bold: false,
            monospace: true,
        };
        assert_eq!(font_resource(&mono), "F3");
    }
}
