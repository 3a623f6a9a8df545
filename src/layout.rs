//! Paginated layout engine.
//!
//! Consumes classified lines, maintains a vertical cursor over A4-like pages,
//! wraps text against the content width through a [`TextMeasurer`], and emits
//! page-relative draw commands with explicit page breaks.
//!
//! The page-break decision is evaluated immediately before drawing each
//! wrapped sub-line, never for a block as a whole, so a multi-line block can
//! split across a page boundary. This path also flattens inline emphasis to
//! plain text before wrapping; per-run styled layout would require switching
//! fonts mid-line inside the measurer and is intentionally not supported.

use log::debug;

use crate::error::Result;
use crate::model::{DrawCommand, FontSpec, LayoutResult, PageGeometry, SourceDocument};
use crate::parser::{classify, plain_text, LineKind, LineRecord};

/// Point-to-millimetre conversion factor.
const PT_TO_MM: f32 = 25.4 / 72.0;

/// Body font size in points.
const BODY_SIZE: f32 = 11.0;

/// Text-measurement capability supplied by the host rendering surface.
///
/// Wraps a string to a maximum width for a given font, returning the wrapped
/// sub-lines in order. Implementations backed by a real glyph source may
/// fail, which aborts the whole layout pass.
pub trait TextMeasurer {
    /// Wrap `text` so every sub-line fits within `max_width` millimetres.
    fn wrap(&self, text: &str, font: &FontSpec, max_width: f32) -> Result<Vec<String>>;
}

/// Deterministic measurer using approximate per-character advance widths.
///
/// Good enough for the simplified text-layout model this engine targets;
/// hosts with access to real font metrics can substitute their own
/// [`TextMeasurer`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinMeasurer;

impl BuiltinMeasurer {
    fn advance(c: char, font: &FontSpec) -> f32 {
        let factor = if font.monospace {
            0.6
        } else {
            match c {
                'i' | 'l' | 'j' | '!' | '|' | '\'' | '.' | ',' | ':' | ';' => 0.28,
                ' ' => 0.28,
                'm' | 'w' | 'M' | 'W' => 0.85,
                c if c.is_ascii_uppercase() => 0.67,
                _ => 0.5,
            }
        };
        let weight = if font.bold { 1.05 } else { 1.0 };
        font.size * factor * weight * PT_TO_MM
    }

    fn width(text: &str, font: &FontSpec) -> f32 {
        text.chars().map(|c| Self::advance(c, font)).sum()
    }
}

impl TextMeasurer for BuiltinMeasurer {
    fn wrap(&self, text: &str, font: &FontSpec, max_width: f32) -> Result<Vec<String>> {
        if text.is_empty() {
            return Ok(vec![String::new()]);
        }

        let mut lines = Vec::new();
        let mut current = String::new();

        for word in text.split(' ') {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current, word)
            };

            if Self::width(&candidate, font) <= max_width {
                current = candidate;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }

            // A single word wider than the column is hard-broken.
            if Self::width(word, font) > max_width {
                let mut piece = String::new();
                for c in word.chars() {
                    piece.push(c);
                    if Self::width(&piece, font) > max_width && piece.chars().count() > 1 {
                        piece.pop();
                        lines.push(std::mem::take(&mut piece));
                        piece.push(c);
                    }
                }
                current = piece;
            } else {
                current = word.to_string();
            }
        }

        if !current.is_empty() || lines.is_empty() {
            lines.push(current);
        }

        Ok(lines)
    }
}

/// Layout engine internal state: current page and vertical drawing position.
///
/// Mutated monotonically during one pass and never shared across exports.
struct PageCursor {
    page: u32,
    y: f32,
}

impl PageCursor {
    fn new(geometry: &PageGeometry) -> Self {
        Self {
            page: 0,
            y: geometry.top_offset,
        }
    }

    /// Break to a new page if the cursor has passed the bottom content bound.
    /// Called immediately before drawing a wrapped sub-line.
    fn break_if_needed(&mut self, geometry: &PageGeometry) {
        if self.y > geometry.bottom_limit {
            self.page += 1;
            self.y = geometry.top_offset;
            debug!("page break -> page {}", self.page);
        }
    }
}

/// Paginated layout engine over a text-measurement capability.
pub struct LayoutEngine<M: TextMeasurer = BuiltinMeasurer> {
    geometry: PageGeometry,
    measurer: M,
}

impl LayoutEngine<BuiltinMeasurer> {
    /// Create an engine with the builtin measurer.
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            measurer: BuiltinMeasurer,
        }
    }
}

impl Default for LayoutEngine<BuiltinMeasurer> {
    fn default() -> Self {
        Self::new(PageGeometry::a4())
    }
}

impl<M: TextMeasurer> LayoutEngine<M> {
    /// Create an engine with a host-supplied measurer.
    pub fn with_measurer(geometry: PageGeometry, measurer: M) -> Self {
        Self { geometry, measurer }
    }

    /// The geometry this engine lays out against.
    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Run one layout pass over the document.
    ///
    /// State is constructed fresh per call; concurrent calls share nothing.
    pub fn layout(&self, doc: &SourceDocument) -> Result<LayoutResult> {
        let geometry = self.geometry;
        let mut cursor = PageCursor::new(&geometry);
        let mut commands = Vec::new();

        for record in classify(&doc.content) {
            self.layout_line(&record, &mut cursor, &mut commands)?;
        }

        debug!(
            "layout pass: {} commands over {} pages",
            commands.len(),
            cursor.page + 1
        );

        Ok(LayoutResult {
            commands,
            page_count: cursor.page + 1,
            geometry,
        })
    }

    fn layout_line(
        &self,
        record: &LineRecord,
        cursor: &mut PageCursor,
        commands: &mut Vec<DrawCommand>,
    ) -> Result<()> {
        let geometry = &self.geometry;

        match record.kind {
            LineKind::Heading1 => {
                self.heading(&record.text, 4.0, 16.0, 8.0, cursor, commands)?;
            }
            LineKind::Heading2 => {
                self.heading(&record.text, 3.0, 14.0, 7.0, cursor, commands)?;
            }
            LineKind::Heading3 => {
                self.heading(&record.text, 2.0, 12.0, 6.0, cursor, commands)?;
            }
            LineKind::Blank => {
                cursor.y += 4.0;
            }
            LineKind::Rule => {
                cursor.y += 2.0;
                commands.push(DrawCommand::rule(
                    cursor.page,
                    geometry.margin,
                    cursor.y,
                    geometry.content_width(),
                ));
                cursor.y += 4.0;
            }
            LineKind::Paragraph | LineKind::Quote | LineKind::ListItem => {
                // Emphasis markers are reduced to their inner text: the
                // fixed-layout path does not carry per-run styling.
                let flat = plain_text(&record.text);
                let font = FontSpec::body(BODY_SIZE);
                for sub in self.measurer.wrap(&flat, &font, geometry.content_width())? {
                    cursor.break_if_needed(geometry);
                    commands.push(DrawCommand::text(
                        cursor.page,
                        geometry.margin,
                        cursor.y,
                        sub,
                        font,
                    ));
                    cursor.y += 6.0;
                }
            }
        }

        Ok(())
    }

    fn heading(
        &self,
        text: &str,
        pre_advance: f32,
        size: f32,
        line_height: f32,
        cursor: &mut PageCursor,
        commands: &mut Vec<DrawCommand>,
    ) -> Result<()> {
        let geometry = &self.geometry;
        let font = FontSpec::bold(size);
        cursor.y += pre_advance;
        for sub in self.measurer.wrap(text, &font, geometry.content_width())? {
            cursor.break_if_needed(geometry);
            commands.push(DrawCommand::text(
                cursor.page,
                geometry.margin,
                cursor.y,
                sub,
                font,
            ));
            cursor.y += line_height;
        }
        Ok(())
    }
}

/// Lay out a document with the builtin measurer and default A4 geometry.
pub fn layout_document(doc: &SourceDocument) -> Result<LayoutResult> {
    LayoutEngine::default().layout(doc)
}
