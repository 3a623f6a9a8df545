//! Reflowable DOCX writer.
//!
//! Serializes a flow document into a minimal OOXML wordprocessing package: a
//! ZIP container holding the document part, a small style sheet, core
//! properties, and the relationship plumbing. Each flow block becomes one
//! `<w:p>` paragraph; run properties mirror the bold/italic/monospace flags
//! of the inline runs. Flow output has no drawing primitive, so rules render
//! as a separator glyph sequence rather than a graphical line.

use std::io::{Cursor, Write};

use chrono::Utc;
use log::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::Result;
use crate::model::{FlowBlock, FlowDocument, FlowKind, InlineRun};

use super::ExportOptions;

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
  <Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>
  <Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>
</Types>"#;

const ROOT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>
</Relationships>"#;

const DOCUMENT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#;

const STYLES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:style w:type="paragraph" w:styleId="Title">
    <w:name w:val="Title"/>
    <w:rPr><w:b/><w:sz w:val="36"/></w:rPr>
  </w:style>
  <w:style w:type="paragraph" w:styleId="Heading1">
    <w:name w:val="heading 1"/>
    <w:rPr><w:b/><w:sz w:val="32"/></w:rPr>
  </w:style>
  <w:style w:type="paragraph" w:styleId="Heading2">
    <w:name w:val="heading 2"/>
    <w:rPr><w:b/><w:sz w:val="28"/></w:rPr>
  </w:style>
  <w:style w:type="paragraph" w:styleId="Heading3">
    <w:name w:val="heading 3"/>
    <w:rPr><w:b/><w:sz w:val="24"/></w:rPr>
  </w:style>
</w:styles>"#;

/// Serialize a flow document into DOCX bytes.
pub fn to_docx(flow: &FlowDocument, options: &ExportOptions) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let deflated = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file("[Content_Types].xml", deflated)?;
    zip.write_all(CONTENT_TYPES_XML.as_bytes())?;

    zip.start_file("_rels/.rels", deflated)?;
    zip.write_all(ROOT_RELS_XML.as_bytes())?;

    zip.start_file("docProps/core.xml", deflated)?;
    zip.write_all(core_properties(flow).as_bytes())?;

    zip.start_file("word/_rels/document.xml.rels", deflated)?;
    zip.write_all(DOCUMENT_RELS_XML.as_bytes())?;

    zip.start_file("word/styles.xml", deflated)?;
    zip.write_all(STYLES_XML.as_bytes())?;

    zip.start_file("word/document.xml", deflated)?;
    zip.write_all(document_xml(flow, options).as_bytes())?;

    let cursor = zip.finish()?;
    let bytes = cursor.into_inner();
    debug!(
        "docx writer: {} blocks, {} bytes",
        flow.block_count(),
        bytes.len()
    );
    Ok(bytes)
}

fn core_properties(flow: &FlowDocument) -> String {
    let title = flow
        .blocks
        .first()
        .filter(|b| b.kind == FlowKind::Title)
        .map(|b| b.plain_text())
        .unwrap_or_else(|| "Untitled".to_string());
    let stamp = Utc::now().format("%Y-%m-%dT%H:%M:%SZ");

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <dc:title>{}</dc:title>
  <dcterms:created xsi:type="dcterms:W3CDTF">{}</dcterms:created>
  <dcterms:modified xsi:type="dcterms:W3CDTF">{}</dcterms:modified>
</cp:coreProperties>"#,
        escape_xml(&title),
        stamp,
        stamp
    )
}

fn document_xml(flow: &FlowDocument, options: &ExportOptions) -> String {
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push('\n');
    xml.push_str(
        r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>"#,
    );

    for block in &flow.blocks {
        write_block(&mut xml, block, options);
    }

    xml.push_str("</w:body></w:document>");
    xml
}

fn write_block(xml: &mut String, block: &FlowBlock, options: &ExportOptions) {
    match block.kind {
        FlowKind::Title => styled_paragraph(xml, "Title", &block.runs, options),
        FlowKind::Heading1 => styled_paragraph(xml, "Heading1", &block.runs, options),
        FlowKind::Heading2 => styled_paragraph(xml, "Heading2", &block.runs, options),
        FlowKind::Heading3 => styled_paragraph(xml, "Heading3", &block.runs, options),
        FlowKind::Quote => {
            // Quotes render indented and italicized by convention.
            xml.push_str(r#"<w:p><w:pPr><w:ind w:left="720"/></w:pPr>"#);
            for run in &block.runs {
                write_run(xml, run, true, options);
            }
            xml.push_str("</w:p>");
        }
        FlowKind::ListItem => {
            xml.push_str(r#"<w:p><w:pPr><w:ind w:left="720" w:hanging="360"/></w:pPr>"#);
            write_run(
                xml,
                &InlineRun::plain(format!("{} ", options.list_marker)),
                false,
                options,
            );
            for run in &block.runs {
                write_run(xml, run, false, options);
            }
            xml.push_str("</w:p>");
        }
        FlowKind::Rule => {
            let glyphs = "\u{2500}".repeat(options.rule_width);
            xml.push_str("<w:p>");
            write_run(xml, &InlineRun::plain(glyphs), false, options);
            xml.push_str("</w:p>");
        }
        FlowKind::Blank => xml.push_str("<w:p/>"),
        FlowKind::Paragraph => {
            xml.push_str("<w:p>");
            for run in &block.runs {
                write_run(xml, run, false, options);
            }
            xml.push_str("</w:p>");
        }
    }
}

fn styled_paragraph(xml: &mut String, style_id: &str, runs: &[InlineRun], options: &ExportOptions) {
    xml.push_str(&format!(
        r#"<w:p><w:pPr><w:pStyle w:val="{}"/></w:pPr>"#,
        style_id
    ));
    for run in runs {
        write_run(xml, run, false, options);
    }
    xml.push_str("</w:p>");
}

fn write_run(xml: &mut String, run: &InlineRun, force_italic: bool, options: &ExportOptions) {
    xml.push_str("<w:r>");

    let italic = run.italic || force_italic;
    if run.bold || italic || run.monospace {
        xml.push_str("<w:rPr>");
        if run.bold {
            xml.push_str("<w:b/>");
        }
        if italic {
            xml.push_str("<w:i/>");
        }
        if run.monospace {
            // Half-point units; inline code drops below the body size.
            let half_points = (options.monospace_size * 2.0).round() as u32;
            xml.push_str(&format!(
                r#"<w:rFonts w:ascii="Courier New" w:hAnsi="Courier New"/><w:sz w:val="{}"/>"#,
                half_points
            ));
        }
        xml.push_str("</w:rPr>");
    }

    xml.push_str(r#"<w:t xml:space="preserve">"#);
    xml.push_str(&escape_xml(&run.text));
    xml.push_str("</w:t></w:r>");
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
