//! End-to-end tests for the export coordinator and format writers.

use std::io::{Cursor, Read};

use mdexport::{
    export, export_docx, export_markdown, export_pdf, ExportFormat, ExportOptions, Exporter,
    SourceDocument,
};

#[test]
fn markdown_passthrough_is_byte_identical() {
    let content = "# Title\n\nbody with **bold**\n- item\n";
    let doc = SourceDocument::new("Note", content);

    let artifact = export_markdown(&doc).unwrap();
    assert_eq!(artifact.file_name, "Note.md");
    assert_eq!(artifact.mime_type, "text/markdown");
    assert_eq!(artifact.bytes, content.as_bytes());
}

#[test]
fn empty_untitled_document_exports_minimal_artifacts() {
    let doc = SourceDocument::new("", "");

    let md = export_markdown(&doc).unwrap();
    assert_eq!(md.file_name, "document.md");
    assert!(md.bytes.is_empty());

    let pdf = export_pdf(&doc).unwrap();
    assert_eq!(pdf.file_name, "document.pdf");
    assert!(pdf.bytes.starts_with(b"%PDF-"));

    let docx = export_docx(&doc).unwrap();
    assert_eq!(docx.file_name, "document.docx");
    let xml = read_document_part(&docx.bytes);
    assert!(xml.contains(">Untitled<"));
}

#[test]
fn pdf_artifact_is_well_formed() {
    let doc = SourceDocument::new("Report", "# Section\n\nSome text.\n---\n> quote");
    let artifact = export_pdf(&doc).unwrap();

    assert_eq!(artifact.mime_type, "application/pdf");
    assert!(artifact.bytes.starts_with(b"%PDF-1.4"));
    assert!(artifact.bytes.ends_with(b"%%EOF\n"));
}

#[test]
fn docx_artifact_contains_styled_content() {
    let doc = SourceDocument::new("Note", "## Sub\n\n**bold** and *italic* and `code`");
    let artifact = export_docx(&doc).unwrap();

    assert_eq!(
        artifact.mime_type,
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    );

    let xml = read_document_part(&artifact.bytes);
    assert!(xml.contains(r#"<w:pStyle w:val="Heading2"/>"#));
    assert!(xml.contains("<w:b/>"));
    assert!(xml.contains("<w:i/>"));
    assert!(xml.contains(">bold<"));
    assert!(xml.contains(">italic<"));
    assert!(xml.contains(">code<"));
}

#[test]
fn flow_and_layout_paths_keep_styling_asymmetry() {
    // The flow path preserves emphasis; the layout path flattens it.
    let doc = SourceDocument::new("t", "**loud** text");

    let docx_xml = read_document_part(&export_docx(&doc).unwrap().bytes);
    assert!(docx_xml.contains("<w:b/>"));

    let layout = mdexport::layout_document(&doc).unwrap();
    match &layout.commands[0].kind {
        mdexport::DrawKind::Text { content, .. } => assert_eq!(content, "loud text"),
        _ => panic!("expected text command"),
    }
}

#[test]
fn artifact_save_to_writes_full_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let doc = SourceDocument::new("Saved", "# Hi");

    let artifact = export(&doc, ExportFormat::Pdf, &ExportOptions::default()).unwrap();
    let path = artifact.save_to(dir.path()).unwrap();

    assert_eq!(path.file_name().unwrap(), "Saved.pdf");
    let written = std::fs::read(&path).unwrap();
    assert_eq!(written, artifact.bytes);
}

#[test]
fn exporter_options_reach_the_writers() {
    let doc = SourceDocument::new("t", "- item\n---");
    let artifact = Exporter::new()
        .with_list_marker('>')
        .with_rule_width(10)
        .export(&doc, ExportFormat::Docx)
        .unwrap();

    let xml = read_document_part(&artifact.bytes);
    assert!(xml.contains("&gt; "));
    assert!(xml.contains(&"\u{2500}".repeat(10)));
    assert!(!xml.contains(&"\u{2500}".repeat(11)));
}

#[test]
fn concurrent_exports_share_no_state() {
    let doc = SourceDocument::new("t", "# Hi\n\nWorld");
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let doc = doc.clone();
            std::thread::spawn(move || export_pdf(&doc).unwrap().bytes)
        })
        .collect();

    let outputs: Vec<Vec<u8>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for bytes in &outputs[1..] {
        assert_eq!(bytes, &outputs[0]);
    }
}

fn read_document_part(bytes: &[u8]) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
    let mut file = archive.by_name("word/document.xml").unwrap();
    let mut xml = String::new();
    file.read_to_string(&mut xml).unwrap();
    xml
}
