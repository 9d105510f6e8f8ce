//! Shared PDF content operations and text measurement

use crate::constants::*;
use crate::font::FontMetrics;
use crate::style::Color;
use lopdf::{Object, content::Operation};

/// Set the fill color used by text
pub fn set_fill_color(color: Color) -> Operation {
    Operation::new("rg", vec![color.r.into(), color.g.into(), color.b.into()])
}

/// Set stroke color and width for line drawing
pub fn set_stroke_style(color: Color, width: f32) -> Vec<Operation> {
    vec![
        Operation::new("RG", vec![color.r.into(), color.g.into(), color.b.into()]),
        Operation::new("w", vec![width.into()]),
    ]
}

/// Stroke a straight line between two points in PDF space
pub fn draw_line(start: (f32, f32), end: (f32, f32), color: Color, width: f32) -> Vec<Operation> {
    let mut operations = vec![Operation::new("q", vec![])];
    operations.extend(set_stroke_style(color, width));
    operations.extend([
        Operation::new("m", vec![start.0.into(), start.1.into()]),
        Operation::new("l", vec![end.0.into(), end.1.into()]),
        Operation::new("S", vec![]),
        Operation::new("Q", vec![]),
    ]);
    operations
}

/// Show a single line of text with its baseline origin at `(x, y)` in PDF space
pub fn draw_text_line(
    font_key: &str,
    font_size: f32,
    color: Color,
    x: f32,
    y: f32,
    text: &str,
) -> Vec<Operation> {
    vec![
        Operation::new("BT", vec![]),
        Operation::new(
            "Tf",
            vec![Object::Name(font_key.as_bytes().to_vec()), font_size.into()],
        ),
        set_fill_color(color),
        Operation::new("Td", vec![x.into(), y.into()]),
        Operation::new("Tj", vec![Object::string_literal(text)]),
        Operation::new("ET", vec![]),
    ]
}

/// Save graphics state and concatenate a PDF-space matrix
pub fn push_matrix(matrix: [f32; 6]) -> Vec<Operation> {
    vec![
        Operation::new("q", vec![]),
        Operation::new("cm", matrix.iter().map(|&v| v.into()).collect()),
    ]
}

/// Restore the graphics state saved by [`push_matrix`]
pub fn pop_matrix() -> Operation {
    Operation::new("Q", vec![])
}

/// Estimate text width based on character count and font size
pub fn estimate_text_width(text: &str, font_size: f32) -> f32 {
    let char_count = text.chars().count() as f32;
    char_count * font_size * DEFAULT_CHAR_WIDTH_RATIO
}

/// Measure text with font metrics when available, otherwise estimate
pub fn measure_text(text: &str, font_size: f32, metrics: Option<&dyn FontMetrics>) -> f32 {
    match metrics {
        Some(metrics) => metrics.text_width(text, font_size),
        None => estimate_text_width(text, font_size),
    }
}
