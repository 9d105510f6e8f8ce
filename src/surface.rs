//! The drawing surface contract the layout engine and footer render onto
//!
//! Coordinates are top-down: `y` grows toward the bottom of the page, and a
//! surface keeps an implicit cursor that text drawing advances.

use crate::Result;
use crate::constants::ITALIC_SKEW_DEGREES;
use crate::style::{Alignment, Color};

/// A point in top-down page coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Page margins in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    /// Create uniform margins
    pub fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Create margins with vertical and horizontal values
    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self {
            top: vertical,
            bottom: vertical,
            left: horizontal,
            right: horizontal,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(crate::constants::DEFAULT_MARGIN)
    }
}

/// 2D affine transform `[a b c d e f]`, mapping `(x, y)` to
/// `(a*x + c*y + e, b*x + d*y + f)` in top-down coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
        }
    }

    /// Horizontal shear that leaves the line at `anchor_y` in place
    pub fn skew_x(skew: f32, anchor_y: f32) -> Self {
        Self {
            c: skew,
            e: -skew * anchor_y,
            ..Self::identity()
        }
    }

    /// Shear used in place of an italic font variant
    pub fn italic(anchor_y: f32) -> Self {
        Self::skew_x(ITALIC_SKEW_DEGREES.to_radians().tan(), anchor_y)
    }

    pub fn apply(&self, point: Point) -> Point {
        Point::new(
            self.a * point.x + self.c * point.y + self.e,
            self.b * point.x + self.d * point.y + self.f,
        )
    }
}

/// Options for a single text draw
#[derive(Debug, Clone, PartialEq)]
pub struct TextOptions {
    pub align: Alignment,
    /// Box width for alignment and wrapping, the rest of the line when `None`
    pub width: Option<f32>,
    /// Clip to as many lines as fit in this height
    pub height: Option<f32>,
    /// Extra spacing after each line
    pub line_gap: f32,
    /// Wrap words onto further lines inside `width`
    pub line_break: bool,
    /// Replace clipped text with a trailing ellipsis
    pub ellipsis: bool,
    /// Keep the cursor on this line so the next draw continues after it
    pub continued: bool,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            align: Alignment::Left,
            width: None,
            height: None,
            line_gap: 0.0,
            line_break: true,
            ellipsis: false,
            continued: false,
        }
    }
}

/// Passed to listeners whenever a surface creates a page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageEvent {
    /// Zero-based index of the new page in the buffered range
    pub page_index: usize,
    /// One-based page counter, incremented for every created page
    pub page_number: usize,
}

/// Receives page-created notifications from a surface.
///
/// Listeners run synchronously inside [`Surface::add_page`] with the new page
/// active, and may draw on it.
pub trait PageListener {
    fn on_page_added(&mut self, surface: &mut dyn Surface, event: &PageEvent) -> Result<()>;
}

/// A paginated drawing surface.
pub trait Surface {
    /// Index of the active page
    fn page_index(&self) -> usize;

    /// Number of buffered pages
    fn page_count(&self) -> usize;

    /// Implicit cursor position
    fn cursor(&self) -> Point;

    fn set_cursor(&mut self, position: Point);

    /// Page width and height in points
    fn page_size(&self) -> (f32, f32);

    fn margins(&self) -> Margins;

    /// Document title, if any
    fn title(&self) -> Option<&str>;

    fn content_width(&self) -> f32 {
        let margins = self.margins();
        self.page_size().0 - margins.left - margins.right
    }

    fn content_height(&self) -> f32 {
        let margins = self.margins();
        self.page_size().1 - margins.top - margins.bottom
    }

    /// Make an already buffered page the active one
    fn switch_to_page(&mut self, index: usize) -> Result<()>;

    /// Append a page, make it active, move the cursor to its top-left
    /// content corner and notify listeners
    fn add_page(&mut self) -> Result<()>;

    fn add_page_listener(&mut self, listener: Box<dyn PageListener>);

    fn set_fill_color(&mut self, color: Color);

    fn set_font(&mut self, font: &str);

    fn set_font_size(&mut self, size: f32);

    /// Apply `transform` to draws until the matching [`Surface::pop_transform`]
    fn push_transform(&mut self, transform: Transform) -> Result<()>;

    fn pop_transform(&mut self) -> Result<()>;

    /// Draw text at `at`, or at the implicit cursor when `None`.
    ///
    /// The cursor is moved below the drawn text afterwards, unless
    /// `options.continued` is set.
    fn draw_text(&mut self, text: &str, at: Option<Point>, options: &TextOptions) -> Result<()>;

    fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: Color) -> Result<()>;

    /// Advance the implicit cursor downward
    fn move_down(&mut self, amount: f32);

    /// Whether content of `upcoming_height` needs to start on a later page
    fn needs_page_break(&self, page: usize, page_count: usize, upcoming_height: f32) -> bool;

    /// Keep flowing content out of the lowest `height` points of the content
    /// area. Repeated reservations keep the largest.
    fn reserve_bottom(&mut self, height: f32);

    /// Height `text` would take if drawn now with `options` in the current font
    fn text_height(&self, text: &str, options: &TextOptions) -> f32;
}
