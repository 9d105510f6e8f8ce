//! Page footers, drawn by a surface every time it creates a page

use crate::Result;
use crate::constants::*;
use crate::style::{Alignment, Color};
use crate::surface::{PageEvent, PageListener, Point, Surface, TextOptions};
use tracing::{instrument, trace};

/// One line of footer content
#[derive(Debug, Clone, PartialEq)]
pub enum FooterLine {
    /// Plain text
    Text(String),
    /// Bold label immediately followed by a regular-weight value
    LabelValue { label: String, value: String },
}

impl FooterLine {
    pub fn text<S: Into<String>>(text: S) -> Self {
        Self::Text(text.into())
    }

    pub fn label_value<L: Into<String>, V: Into<String>>(label: L, value: V) -> Self {
        Self::LabelValue {
            label: label.into(),
            value: value.into(),
        }
    }
}

impl From<&str> for FooterLine {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for FooterLine {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Page label: `"{title} - {page}"`, or just the page number without a title
pub fn pagination_label(title: Option<&str>, page_number: usize) -> String {
    match title.filter(|title| !title.is_empty()) {
        Some(title) => format!("{title} - {page_number}"),
        None => page_number.to_string(),
    }
}

/// Page state captured once per footer render
#[derive(Debug, Clone, PartialEq)]
struct FooterFrame {
    left: f32,
    top: f32,
    content_width: f32,
    content_height: f32,
    page_number: usize,
    title: Option<String>,
}

impl FooterFrame {
    fn capture<S: Surface + ?Sized>(surface: &S, page_number: usize) -> Self {
        let margins = surface.margins();
        Self {
            left: margins.left,
            top: margins.top,
            content_width: surface.content_width(),
            content_height: surface.content_height(),
            page_number,
            title: surface.title().map(str::to_string),
        }
    }

    /// Top of the line `slot` places above the bottom margin (slot 0 is lowest)
    fn line_y(&self, slot: usize, line_height: f32) -> f32 {
        self.top + self.content_height - (slot + 1) as f32 * line_height
    }
}

/// Renders footer lines and an optional page label at the bottom of a page.
///
/// Lines stack upward from the bottom margin, the last one lowest. Register
/// it on a surface before the first page is added so every page gets one.
#[derive(Debug, Clone)]
pub struct FooterRenderer {
    data: Vec<FooterLine>,
    pagination: bool,
    font: String,
    bold_font: String,
    font_size: f32,
    line_height: f32,
    color: Color,
}

impl FooterRenderer {
    pub fn new(data: Vec<FooterLine>) -> Self {
        Self {
            data,
            pagination: true,
            font: DEFAULT_FONT.to_string(),
            bold_font: DEFAULT_BOLD_FONT.to_string(),
            font_size: FOOTER_FONT_SIZE,
            line_height: FOOTER_LINE_HEIGHT,
            color: Color::black(),
        }
    }

    /// Enable or disable the page label (enabled by default)
    pub fn with_pagination(mut self, enabled: bool) -> Self {
        self.pagination = enabled;
        self
    }

    pub fn with_fonts<R: Into<String>, B: Into<String>>(mut self, regular: R, bold: B) -> Self {
        self.font = regular.into();
        self.bold_font = bold.into();
        self
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn data(&self) -> &[FooterLine] {
        &self.data
    }

    pub fn pagination(&self) -> bool {
        self.pagination
    }

    /// Height of the slots this footer fills above the bottom margin. The
    /// page label shares the lowest slot with the last line.
    pub fn reserved_height(&self) -> f32 {
        let slots = self.data.len().max(usize::from(self.pagination));
        slots as f32 * self.line_height
    }

    /// Attach to `surface` as a page listener and keep flowing content out
    /// of the footer's slots
    pub fn register<S: Surface + ?Sized>(self, surface: &mut S) {
        surface.reserve_bottom(self.reserved_height());
        surface.add_page_listener(Box::new(self));
    }

    /// Draw the footer on the active page. The surface cursor is left where
    /// it was.
    #[instrument(skip(self, surface))]
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, page_number: usize) -> Result<()> {
        let frame = FooterFrame::capture(surface, page_number);
        let saved = surface.cursor();

        surface.set_fill_color(self.color);
        surface.set_font_size(self.font_size);

        for (slot, line) in self.data.iter().rev().enumerate() {
            let at = Point::new(frame.left, frame.line_y(slot, self.line_height));
            self.render_line(surface, line, at, frame.content_width)?;
        }

        if self.pagination {
            let label = pagination_label(frame.title.as_deref(), frame.page_number);
            trace!("Page label {:?}", label);
            surface.set_font(&self.font);
            surface.draw_text(
                &label,
                Some(Point::new(frame.left, frame.line_y(0, self.line_height))),
                &TextOptions {
                    align: Alignment::Right,
                    width: Some(frame.content_width),
                    line_break: false,
                    ..Default::default()
                },
            )?;
        }

        surface.set_cursor(saved);
        Ok(())
    }

    fn render_line<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        line: &FooterLine,
        at: Point,
        width: f32,
    ) -> Result<()> {
        let options = TextOptions {
            width: Some(width),
            line_break: false,
            ..Default::default()
        };

        match line {
            FooterLine::Text(text) => {
                surface.set_font(&self.font);
                surface.draw_text(text, Some(at), &options)
            }
            FooterLine::LabelValue { label, value } => {
                surface.set_font(&self.bold_font);
                surface.draw_text(
                    label,
                    Some(at),
                    &TextOptions {
                        continued: true,
                        ..options.clone()
                    },
                )?;
                surface.set_font(&self.font);
                surface.draw_text(value, None, &options)
            }
        }
    }
}

impl PageListener for FooterRenderer {
    fn on_page_added(&mut self, surface: &mut dyn Surface, event: &PageEvent) -> Result<()> {
        self.render(surface, event.page_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{DrawCall, RecordingSurface};

    fn text_calls_on_last_page(surface: &RecordingSurface) -> Vec<&DrawCall> {
        let last_added = surface
            .calls
            .iter()
            .rposition(|call| matches!(call, DrawCall::PageAdded { .. }))
            .unwrap();
        surface.calls[last_added..]
            .iter()
            .filter(|call| matches!(call, DrawCall::Text { .. }))
            .collect()
    }

    #[test]
    fn test_pagination_label() {
        assert_eq!(pagination_label(Some("Report"), 3), "Report - 3");
        assert_eq!(pagination_label(None, 3), "3");
        assert_eq!(pagination_label(Some(""), 12), "12");
    }

    #[test]
    fn test_footer_stacks_bottom_up_with_page_label() {
        let mut surface = RecordingSurface::blank().with_title("Report");
        FooterRenderer::new(vec![
            "Generated 2024-01-01".into(),
            FooterLine::label_value("Total", "42"),
        ])
        .register(&mut surface);
        for _ in 0..3 {
            surface.add_page().unwrap();
        }

        let calls = text_calls_on_last_page(&surface);
        let summary: Vec<(&str, Point, &str)> = calls
            .iter()
            .map(|call| match call {
                DrawCall::Text {
                    text,
                    position,
                    font,
                    ..
                } => (text.as_str(), *position, font.as_str()),
                _ => unreachable!(),
            })
            .collect();

        // Content bottom is 842 - 50 = 792, lines are 9pt apart
        assert_eq!(
            summary,
            vec![
                ("Total", Point::new(50.0, 783.0), DEFAULT_BOLD_FONT),
                ("42", Point::new(70.0, 783.0), DEFAULT_FONT),
                ("Generated 2024-01-01", Point::new(50.0, 774.0), DEFAULT_FONT),
                ("Report - 3", Point::new(50.0, 783.0), DEFAULT_FONT),
            ]
        );

        match calls[3] {
            DrawCall::Text { options, .. } => {
                assert_eq!(options.align, Alignment::Right);
                assert_eq!(options.width, Some(surface.content_width()));
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_reserved_height_counts_label_slot() {
        let footer = FooterRenderer::new(vec!["a".into(), FooterLine::label_value("b", "c")]);
        assert_eq!(footer.data().len(), 2);
        assert!(footer.pagination());
        assert_eq!(footer.reserved_height(), 2.0 * FOOTER_LINE_HEIGHT);

        let label_only = FooterRenderer::new(Vec::new());
        assert_eq!(label_only.reserved_height(), FOOTER_LINE_HEIGHT);
        let nothing = label_only.with_pagination(false);
        assert!(!nothing.pagination());
        assert_eq!(nothing.reserved_height(), 0.0);
    }

    #[test]
    fn test_register_reserves_footer_slots() {
        let mut surface = RecordingSurface::blank();
        FooterRenderer::new(vec!["a".into(), "b".into(), "c".into()]).register(&mut surface);
        assert_eq!(surface.reserved_bottom, 3.0 * FOOTER_LINE_HEIGHT);

        // Content may end exactly where the footer slots begin
        let footer_top = surface.margins().top + surface.content_height() - 27.0;
        surface.add_page().unwrap();
        surface.set_cursor(Point::new(50.0, footer_top - 10.0));
        assert!(!surface.needs_page_break(0, 1, 10.0));
        assert!(surface.needs_page_break(0, 1, 11.0));
    }

    #[test]
    fn test_footer_fires_once_per_page() {
        let mut surface = RecordingSurface::blank();
        FooterRenderer::new(Vec::new()).register(&mut surface);
        for _ in 0..4 {
            surface.add_page().unwrap();
        }
        assert_eq!(surface.texts(), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_pagination_can_be_disabled() {
        let mut surface = RecordingSurface::blank().with_title("Report");
        FooterRenderer::new(vec!["only line".into()])
            .with_pagination(false)
            .register(&mut surface);
        surface.add_page().unwrap();
        assert_eq!(surface.texts(), vec!["only line"]);
    }

    #[test]
    fn test_footer_leaves_cursor_in_place() {
        let mut surface = RecordingSurface::blank();
        FooterRenderer::new(vec!["a".into(), FooterLine::label_value("b", "c")])
            .register(&mut surface);
        surface.add_page().unwrap();

        let margins = surface.margins();
        assert_eq!(surface.cursor(), Point::new(margins.left, margins.top));
    }

    #[test]
    fn test_render_directly_with_explicit_page_number() {
        let mut surface = RecordingSurface::new();
        let footer = FooterRenderer::new(Vec::new()).with_color(Color::gray(0.4));
        footer.render(&mut surface, 7).unwrap();

        match &surface.calls[0] {
            DrawCall::Text { text, color, .. } => {
                assert_eq!(text, "7");
                assert_eq!(*color, Color::gray(0.4));
            }
            _ => unreachable!(),
        }
    }
}
