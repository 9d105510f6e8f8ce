//! Styling structures and cascading style resolution for headers and cells
//!
//! Every attribute of a header or row cell resolves through three tiers:
//! the cell's own override, the table-level default, and a hard default.
//! A tier counts as present whenever it holds `Some`, so `Some(0.0)` or
//! `Some(false)` overrides win over lower tiers.

use crate::constants::*;

/// RGB color representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Create a new RGB color (values should be 0.0-1.0)
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }

    /// Black color
    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// White color
    pub fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    /// Gray color
    pub fn gray(level: f32) -> Self {
        let l = level.clamp(0.0, 1.0);
        Self::rgb(l, l, l)
    }

    /// Light gray
    pub fn light_gray() -> Self {
        Self::gray(0.8)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// Horizontal text alignment within a column
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Border style of a cell.
///
/// Only `None` versus anything else is observed when drawing borders.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BorderStyle {
    None,
    #[default]
    Solid,
    Dashed,
    Dotted,
}

/// Optional styling for a header or row cell, plus its text.
///
/// The same shape is used for table-level defaults, where `text` is ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellSpec {
    pub text: Option<String>,
    pub align: Option<Alignment>,
    pub color: Option<Color>,
    pub font: Option<String>,
    pub font_size: Option<f32>,
    pub italic: Option<bool>,
    pub border_color: Option<Color>,
    pub border_width: Option<f32>,
    pub border_style: Option<BorderStyle>,
    pub allow_wrap: Option<bool>,
    pub empty_color: Option<Color>,
    pub empty_font_size: Option<f32>,
    pub empty_italic: Option<bool>,
    pub empty_text: Option<String>,
}

impl CellSpec {
    /// Create a cell with text content
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    /// Create a cell without text, rendered with the empty-variant style
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_align(mut self, align: Alignment) -> Self {
        self.align = Some(align);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_font<S: Into<String>>(mut self, font: S) -> Self {
        self.font = Some(font.into());
        self
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Render the text with a sheared (fake italic) transform
    pub fn italic(mut self) -> Self {
        self.italic = Some(true);
        self
    }

    pub fn with_border(mut self, width: f32, color: Color) -> Self {
        self.border_width = Some(width);
        self.border_color = Some(color);
        self
    }

    pub fn with_border_style(mut self, style: BorderStyle) -> Self {
        self.border_style = Some(style);
        self
    }

    /// Allow the text to wrap inside the column instead of being clipped
    pub fn with_wrap(mut self, allow: bool) -> Self {
        self.allow_wrap = Some(allow);
        self
    }

    pub fn with_empty_text<S: Into<String>>(mut self, text: S) -> Self {
        self.empty_text = Some(text.into());
        self
    }

    pub fn with_empty_color(mut self, color: Color) -> Self {
        self.empty_color = Some(color);
        self
    }

    pub fn with_empty_font_size(mut self, size: f32) -> Self {
        self.empty_font_size = Some(size);
        self
    }

    pub fn with_empty_italic(mut self, italic: bool) -> Self {
        self.empty_italic = Some(italic);
        self
    }
}

/// Hard defaults, the last tier of style resolution
#[derive(Debug, Clone, PartialEq)]
pub struct StyleDefaults {
    pub align: Alignment,
    pub color: Color,
    pub font: String,
    pub font_size: f32,
    pub italic: bool,
    pub border_color: Color,
    pub border_width: f32,
    pub border_style: BorderStyle,
    pub allow_wrap: bool,
    pub empty_color: Color,
    pub empty_font_size: f32,
    pub empty_italic: bool,
    pub empty_text: String,
}

impl StyleDefaults {
    /// Hard defaults for column headers (bold, darker border)
    pub fn header() -> Self {
        Self {
            align: Alignment::Left,
            color: Color::black(),
            font: DEFAULT_BOLD_FONT.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            italic: false,
            border_color: Color::black(),
            border_width: DEFAULT_BORDER_WIDTH,
            border_style: BorderStyle::Solid,
            allow_wrap: false,
            empty_color: Color::gray(0.5),
            empty_font_size: DEFAULT_FONT_SIZE,
            empty_italic: true,
            empty_text: DEFAULT_EMPTY_TEXT.to_string(),
        }
    }

    /// Hard defaults for row cells
    pub fn cell() -> Self {
        Self {
            font: DEFAULT_FONT.to_string(),
            border_color: Color::light_gray(),
            border_width: DEFAULT_BORDER_WIDTH / 2.0,
            empty_color: Color::gray(0.6),
            ..Self::header()
        }
    }
}

/// Concrete style for a single header or row render
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub text: String,
    /// True when the empty variant was substituted
    pub is_empty: bool,
    pub align: Alignment,
    pub color: Color,
    pub font: String,
    pub font_size: f32,
    pub italic: bool,
    pub border_color: Color,
    pub border_width: f32,
    pub border_style: BorderStyle,
    pub allow_wrap: bool,
}

/// Table-level header and cell defaults, fixed at construction
#[derive(Debug, Clone, PartialEq)]
pub struct TableStyleDefaults {
    header: CellSpec,
    cell: CellSpec,
    header_fallback: StyleDefaults,
    cell_fallback: StyleDefaults,
}

impl TableStyleDefaults {
    pub fn new(header: CellSpec, cell: CellSpec) -> Self {
        Self {
            header,
            cell,
            header_fallback: StyleDefaults::header(),
            cell_fallback: StyleDefaults::cell(),
        }
    }

    /// Table-level header layer
    pub fn header(&self) -> &CellSpec {
        &self.header
    }

    /// Table-level cell layer
    pub fn cell(&self) -> &CellSpec {
        &self.cell
    }

    pub fn resolve_header(&self, spec: &CellSpec) -> ResolvedStyle {
        resolve(spec, &self.header, &self.header_fallback)
    }

    pub fn resolve_cell(&self, spec: &CellSpec) -> ResolvedStyle {
        resolve(spec, &self.cell, &self.cell_fallback)
    }
}

impl Default for TableStyleDefaults {
    fn default() -> Self {
        Self::new(CellSpec::default(), CellSpec::default())
    }
}

fn layered<T: Clone>(cell: &Option<T>, table: &Option<T>, fallback: &T) -> T {
    cell.as_ref().or(table.as_ref()).unwrap_or(fallback).clone()
}

/// Resolve a cell against its table-level layer and hard defaults.
///
/// Text that is absent or zero-length switches color, font size, italic and
/// text over to their empty variants.
pub fn resolve(spec: &CellSpec, table: &CellSpec, fallback: &StyleDefaults) -> ResolvedStyle {
    let present = spec.text.as_deref().filter(|text| !text.is_empty());

    let (text, color, font_size, italic) = match present {
        Some(text) => (
            text.to_string(),
            layered(&spec.color, &table.color, &fallback.color),
            layered(&spec.font_size, &table.font_size, &fallback.font_size),
            layered(&spec.italic, &table.italic, &fallback.italic),
        ),
        None => (
            layered(&spec.empty_text, &table.empty_text, &fallback.empty_text),
            layered(&spec.empty_color, &table.empty_color, &fallback.empty_color),
            layered(
                &spec.empty_font_size,
                &table.empty_font_size,
                &fallback.empty_font_size,
            ),
            layered(&spec.empty_italic, &table.empty_italic, &fallback.empty_italic),
        ),
    };

    ResolvedStyle {
        text,
        is_empty: present.is_none(),
        align: layered(&spec.align, &table.align, &fallback.align),
        color,
        font: layered(&spec.font, &table.font, &fallback.font),
        font_size,
        italic,
        border_color: layered(&spec.border_color, &table.border_color, &fallback.border_color),
        border_width: layered(&spec.border_width, &table.border_width, &fallback.border_width),
        border_style: layered(&spec.border_style, &table.border_style, &fallback.border_style),
        allow_wrap: layered(&spec.allow_wrap, &table.allow_wrap, &fallback.allow_wrap),
    }
}
