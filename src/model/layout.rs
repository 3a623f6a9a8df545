//! Fixed-layout types: page geometry, fonts, and draw commands.

use serde::{Deserialize, Serialize};

/// Page geometry for the paginated layout engine, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    /// Page width.
    pub width: f32,

    /// Page height.
    pub height: f32,

    /// Left and right margin.
    pub margin: f32,

    /// Vertical position of the first baseline on a page.
    pub top_offset: f32,

    /// Largest vertical offset a line may be drawn at before a page break.
    pub bottom_limit: f32,
}

impl PageGeometry {
    /// A4 portrait with 15 mm side margins.
    pub fn a4() -> Self {
        Self {
            width: 210.0,
            height: 297.0,
            margin: 15.0,
            top_offset: 20.0,
            bottom_limit: 280.0,
        }
    }

    /// Width available for text between the margins.
    pub fn content_width(&self) -> f32 {
        self.width - self.margin * 2.0
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}

/// Font selection for measurement and drawing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    /// Point size.
    pub size: f32,

    /// Bold weight.
    pub bold: bool,

    /// Fixed-width face.
    pub monospace: bool,
}

impl FontSpec {
    /// Regular body font at the given size.
    pub fn body(size: f32) -> Self {
        Self {
            size,
            bold: false,
            monospace: false,
        }
    }

    /// Bold font at the given size.
    pub fn bold(size: f32) -> Self {
        Self {
            size,
            bold: true,
            monospace: false,
        }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::body(11.0)
    }
}

/// Payload of a draw command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DrawKind {
    /// Place a single line of text at the command position.
    Text {
        /// Text content, already wrapped to the content width.
        content: String,
        /// Font to draw with.
        font: FontSpec,
    },

    /// Stroke a horizontal separator starting at the command position.
    Rule {
        /// Stroke length.
        width: f32,
    },
}

/// One page-relative drawing instruction emitted by the layout engine.
///
/// Commands are ordered by emission sequence, which is always non-decreasing
/// in `(page, y)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawCommand {
    /// Zero-based page index.
    pub page: u32,

    /// Horizontal position from the left page edge.
    pub x: f32,

    /// Vertical position from the top page edge.
    pub y: f32,

    /// What to draw.
    pub kind: DrawKind,
}

impl DrawCommand {
    /// Create a text command.
    pub fn text(page: u32, x: f32, y: f32, content: impl Into<String>, font: FontSpec) -> Self {
        Self {
            page,
            x,
            y,
            kind: DrawKind::Text {
                content: content.into(),
                font,
            },
        }
    }

    /// Create a rule command.
    pub fn rule(page: u32, x: f32, y: f32, width: f32) -> Self {
        Self {
            page,
            x,
            y,
            kind: DrawKind::Rule { width },
        }
    }

    /// Check if this is a text command.
    pub fn is_text(&self) -> bool {
        matches!(self.kind, DrawKind::Text { .. })
    }
}

/// Output of one paginated layout pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutResult {
    /// Draw commands in emission order.
    pub commands: Vec<DrawCommand>,

    /// Total number of pages (always at least 1).
    pub page_count: u32,

    /// The geometry the commands were laid out against.
    pub geometry: PageGeometry,
}

impl LayoutResult {
    /// Commands on a single page, in emission order.
    pub fn page_commands(&self, page: u32) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(move |c| c.page == page)
    }
}
