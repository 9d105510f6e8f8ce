//! Column width resolution and layout cursor tracking

use crate::surface::Point;
use crate::table::ColumnSpec;
use tracing::trace;

/// How a column's width is derived from its `ColumnSpec`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    /// The only column of the table, always spans the content width
    Full,
    /// No explicit width, content width split evenly
    Equal,
    /// Share of the content width, in `[0, 1)`
    Fraction(f32),
    /// Width in points
    Absolute(f32),
}

impl ColumnWidth {
    /// Classify a column's width setting.
    ///
    /// A single-column table ignores any explicit width. A width of exactly
    /// `1.0` is one absolute point, not the whole content width. Fractions
    /// are not bounded: shares summing past 1 overflow the page.
    pub fn classify(column_count: usize, width: Option<f32>) -> Self {
        match width {
            _ if column_count == 1 => Self::Full,
            None => Self::Equal,
            Some(w) if (0.0..1.0).contains(&w) => Self::Fraction(w),
            Some(w) => Self::Absolute(w),
        }
    }

    /// Width in points for a table with the given content width
    pub fn resolve(self, content_width: f32, column_count: usize) -> f32 {
        match self {
            Self::Full => content_width,
            Self::Equal => content_width / column_count.max(1) as f32,
            Self::Fraction(share) => content_width * share,
            Self::Absolute(width) => width,
        }
    }
}

/// Resolve one column's width in points
pub fn resolve_column_width(column_count: usize, width: Option<f32>, content_width: f32) -> f32 {
    ColumnWidth::classify(column_count, width).resolve(content_width, column_count)
}

/// Resolve every column's width in points, in column order
pub fn resolve_column_widths(columns: &[ColumnSpec], content_width: f32) -> Vec<f32> {
    let widths: Vec<f32> = columns
        .iter()
        .map(|column| resolve_column_width(columns.len(), column.width, content_width))
        .collect();
    trace!("Resolved column widths: {:?}", widths);
    widths
}

/// Page and position tracked by the engine across a render pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutCursor {
    pub page: usize,
    pub position: Point,
}

impl LayoutCursor {
    pub fn new(page: usize, position: Point) -> Self {
        Self { page, position }
    }

    /// Whether this cursor sits further down the document than `other`
    pub fn is_below(&self, other: &LayoutCursor) -> bool {
        self.page > other.page || (self.page == other.page && self.position.y > other.position.y)
    }
}
