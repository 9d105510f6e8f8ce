//! Recording surface for unit tests

use crate::Result;
use crate::constants::{A4_HEIGHT, A4_WIDTH};
use crate::drawing_utils::estimate_text_width;
use crate::error::RenderError;
use crate::text::wrap_text;
use crate::style::Color;
use crate::surface::{
    Margins, PageEvent, PageListener, Point, Surface, TextOptions, Transform,
};
use std::cell::{Cell, RefCell};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Text {
        page: usize,
        text: String,
        at: Option<Point>,
        /// Where the text actually started
        position: Point,
        options: TextOptions,
        font: String,
        font_size: f32,
        color: Color,
        transforms: Vec<Transform>,
    },
    Line {
        page: usize,
        from: Point,
        to: Point,
        width: f32,
        color: Color,
    },
    PageAdded {
        page_number: usize,
    },
    SwitchPage {
        index: usize,
    },
}

/// Surface that records every call. Text draws advance the cursor by one
/// line (font size plus line gap) per wrapped line.
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
    pages: usize,
    current: usize,
    created: usize,
    cursor: Point,
    line_origin: Option<f32>,
    margins: Margins,
    title: Option<String>,
    font: String,
    font_size: f32,
    color: Color,
    transforms: Vec<Transform>,
    listeners: Vec<Box<dyn PageListener>>,
    queries: Cell<usize>,
    /// `upcoming_height` of every page-break query
    pub queried_heights: RefCell<Vec<f32>>,
    forced_breaks: HashSet<usize>,
    pub reserved_bottom: f32,
}

impl RecordingSurface {
    /// A4 surface with one page already in place
    pub fn new() -> Self {
        Self {
            pages: 1,
            created: 1,
            ..Self::blank()
        }
    }

    /// A4 surface without any page
    pub fn blank() -> Self {
        let margins = Margins::default();
        Self {
            calls: Vec::new(),
            pages: 0,
            current: 0,
            created: 0,
            cursor: Point::new(margins.left, margins.top),
            line_origin: None,
            margins,
            title: None,
            font: String::new(),
            font_size: 12.0,
            color: Color::black(),
            transforms: Vec::new(),
            listeners: Vec::new(),
            queries: Cell::new(0),
            queried_heights: RefCell::new(Vec::new()),
            forced_breaks: HashSet::new(),
            reserved_bottom: 0.0,
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Answer `true` to the page-break queries with these zero-based indices
    pub fn break_on_queries<I: IntoIterator<Item = usize>>(mut self, queries: I) -> Self {
        self.forced_breaks.extend(queries);
        self
    }

    /// Text of every draw, in order
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn page_index(&self) -> usize {
        self.current
    }

    fn page_count(&self) -> usize {
        self.pages
    }

    fn cursor(&self) -> Point {
        self.cursor
    }

    fn set_cursor(&mut self, position: Point) {
        self.cursor = position;
        self.line_origin = None;
    }

    fn page_size(&self) -> (f32, f32) {
        (A4_WIDTH, A4_HEIGHT)
    }

    fn margins(&self) -> Margins {
        self.margins
    }

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn switch_to_page(&mut self, index: usize) -> Result<()> {
        if index >= self.pages {
            return Err(RenderError::PageNotFound {
                index,
                count: self.pages,
            });
        }
        self.calls.push(DrawCall::SwitchPage { index });
        self.current = index;
        Ok(())
    }

    fn add_page(&mut self) -> Result<()> {
        self.pages += 1;
        self.created += 1;
        self.current = self.pages - 1;
        self.set_cursor(Point::new(self.margins.left, self.margins.top));
        self.calls.push(DrawCall::PageAdded {
            page_number: self.created,
        });

        let event = PageEvent {
            page_index: self.current,
            page_number: self.created,
        };
        let mut listeners = std::mem::take(&mut self.listeners);
        let notified = listeners
            .iter_mut()
            .try_for_each(|listener| listener.on_page_added(self, &event));
        self.listeners = listeners;
        notified
    }

    fn add_page_listener(&mut self, listener: Box<dyn PageListener>) {
        self.listeners.push(listener);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.color = color;
    }

    fn set_font(&mut self, font: &str) {
        self.font = font.to_string();
    }

    fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    fn push_transform(&mut self, transform: Transform) -> Result<()> {
        self.transforms.push(transform);
        Ok(())
    }

    fn pop_transform(&mut self) -> Result<()> {
        self.transforms.pop();
        Ok(())
    }

    fn draw_text(&mut self, text: &str, at: Option<Point>, options: &TextOptions) -> Result<()> {
        if let Some(point) = at {
            self.set_cursor(point);
        }
        let position = self.cursor;
        let origin_x = self.line_origin.take().unwrap_or(position.x);

        self.calls.push(DrawCall::Text {
            page: self.current,
            text: text.to_string(),
            at,
            position,
            options: options.clone(),
            font: self.font.clone(),
            font_size: self.font_size,
            color: self.color,
            transforms: self.transforms.clone(),
        });

        if options.continued {
            self.line_origin = Some(origin_x);
            self.cursor.x += estimate_text_width(text, self.font_size);
        } else {
            self.cursor = Point::new(origin_x, position.y + self.text_height(text, options));
        }
        Ok(())
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: Color) -> Result<()> {
        self.calls.push(DrawCall::Line {
            page: self.current,
            from,
            to,
            width,
            color,
        });
        Ok(())
    }

    fn move_down(&mut self, amount: f32) {
        self.cursor.y += amount;
    }

    fn needs_page_break(&self, _page: usize, _page_count: usize, upcoming_height: f32) -> bool {
        let query = self.queries.get();
        self.queries.set(query + 1);
        self.queried_heights.borrow_mut().push(upcoming_height);
        self.forced_breaks.contains(&query)
            || self.cursor.y + upcoming_height
                > A4_HEIGHT - self.margins.bottom - self.reserved_bottom
    }

    fn reserve_bottom(&mut self, height: f32) {
        self.reserved_bottom = self.reserved_bottom.max(height);
    }

    fn text_height(&self, text: &str, options: &TextOptions) -> f32 {
        let lines = match (options.line_break, options.width) {
            (true, Some(width)) => {
                wrap_text(text, width, |s| estimate_text_width(s, self.font_size)).len()
            }
            _ => 1,
        };
        lines as f32 * (self.font_size + options.line_gap)
    }
}
