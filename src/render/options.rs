//! Export options.

use crate::model::PageGeometry;

/// Options shared by the export paths and their writers.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Page geometry for the fixed-layout path.
    pub geometry: PageGeometry,

    /// Bullet glyph the flow writer places before list items.
    pub list_marker: char,

    /// Number of separator glyphs the flow writer uses for a rule.
    pub rule_width: usize,

    /// Point size for monospace runs in flow output (body text is 11 pt;
    /// inline code is rendered slightly smaller in a fixed-width face).
    pub monospace_size: f32,
}

impl ExportOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page geometry.
    pub fn with_geometry(mut self, geometry: PageGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Set the list bullet glyph.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.list_marker = marker;
        self
    }

    /// Set the rule glyph count.
    pub fn with_rule_width(mut self, width: usize) -> Self {
        self.rule_width = width;
        self
    }

    /// Set the monospace point size.
    pub fn with_monospace_size(mut self, size: f32) -> Self {
        self.monospace_size = size;
        self
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            geometry: PageGeometry::a4(),
            list_marker: '\u{2022}',
            rule_width: 50,
            monospace_size: 10.0,
        }
    }
}
