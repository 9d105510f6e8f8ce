//! Constants for page dimensions, layout ratios and hard style defaults

/// Standard A4 page width in points
pub const A4_WIDTH: f32 = 595.0;

/// Standard A4 page height in points
pub const A4_HEIGHT: f32 = 842.0;

/// US Letter page width in points
pub const LETTER_WIDTH: f32 = 612.0;

/// US Letter page height in points
pub const LETTER_HEIGHT: f32 = 792.0;

/// Default page margin in points
pub const DEFAULT_MARGIN: f32 = 50.0;

/// Default character width ratio for text estimation
/// (average character width as a fraction of font size)
pub const DEFAULT_CHAR_WIDTH_RATIO: f32 = 0.5;

/// Header line gap as a multiple of the resolved font size
pub const HEADER_LINE_GAP_RATIO: f32 = 1.2;

/// Row line gap as a multiple of the resolved font size
pub const ROW_LINE_GAP_RATIO: f32 = 1.07;

/// Header border offset above the cursor, as a multiple of font size
pub const HEADER_BORDER_OFFSET_RATIO: f32 = 0.85;

/// Row border offset above the cursor, as a multiple of font size
pub const ROW_BORDER_OFFSET_RATIO: f32 = 0.7;

/// Shear angle used to fake italics, in degrees
pub const ITALIC_SKEW_DEGREES: f32 = -15.0;

/// Vertical distance between stacked footer lines in points
pub const FOOTER_LINE_HEIGHT: f32 = 9.0;

/// Default footer font size in points
pub const FOOTER_FONT_SIZE: f32 = 8.0;

/// Space left below a rendered table in points
pub const TABLE_BOTTOM_MARGIN: f32 = 20.0;

/// Default font size in points
pub const DEFAULT_FONT_SIZE: f32 = 10.0;

/// Default border width in points
pub const DEFAULT_BORDER_WIDTH: f32 = 1.0;

/// Default regular font
pub const DEFAULT_FONT: &str = "Helvetica";

/// Default bold font, used for headers and footer labels
pub const DEFAULT_BOLD_FONT: &str = "Helvetica-Bold";

/// Placeholder drawn in place of missing cell text
pub const DEFAULT_EMPTY_TEXT: &str = "-";
