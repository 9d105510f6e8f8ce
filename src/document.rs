//! A [`Surface`] that buffers page content and builds a lopdf [`Document`]

use crate::Result;
use crate::constants::*;
use crate::drawing_utils::{draw_line, draw_text_line, measure_text, pop_matrix, push_matrix};
use crate::error::RenderError;
use crate::font::FontMetrics;
use crate::style::{Alignment, Color};
use crate::surface::{
    Margins, PageEvent, PageListener, Point, Surface, TextOptions, Transform,
};
use crate::text::{fit_with_ellipsis, wrap_text};
use lopdf::{
    Dictionary, Document, Object, Stream,
    content::{Content, Operation},
    dictionary,
};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;
use tracing::{debug, instrument, trace, warn};

/// Page geometry and metadata for a [`LopdfSurface`]
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceConfig {
    pub page_width: f32,
    pub page_height: f32,
    pub margins: Margins,
    pub title: Option<String>,
    /// Space above the bottom margin that content never flows into,
    /// typically the height of the footer
    pub reserved_bottom: f32,
}

impl SurfaceConfig {
    pub fn a4() -> Self {
        Self {
            page_width: A4_WIDTH,
            page_height: A4_HEIGHT,
            margins: Margins::default(),
            title: None,
            reserved_bottom: 0.0,
        }
    }

    pub fn letter() -> Self {
        Self {
            page_width: LETTER_WIDTH,
            page_height: LETTER_HEIGHT,
            ..Self::a4()
        }
    }

    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    pub fn with_reserved_bottom(mut self, height: f32) -> Self {
        self.reserved_bottom = height;
        self
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self::a4()
    }
}

/// Drawing surface backed by lopdf.
///
/// Content for every page is buffered as operations until [`LopdfSurface::finish`]
/// assembles the document. Fonts are standard Type1 fonts referenced by base
/// name (`"Helvetica"`, `"Times-Italic"`, ...).
pub struct LopdfSurface {
    config: SurfaceConfig,
    pages: Vec<Vec<Operation>>,
    current: Option<usize>,
    pages_created: usize,
    cursor: Point,
    line_origin: Option<f32>,
    fill_color: Color,
    font: String,
    font_size: f32,
    transform_depth: usize,
    /// Base font name to resource key
    fonts: BTreeMap<String, String>,
    metrics: Option<Box<dyn FontMetrics>>,
    listeners: Vec<Box<dyn PageListener>>,
}

impl LopdfSurface {
    /// Create a surface without pages. Register listeners, then call
    /// [`Surface::add_page`].
    pub fn new(config: SurfaceConfig) -> Self {
        let cursor = Point::new(config.margins.left, config.margins.top);
        Self {
            config,
            pages: Vec::new(),
            current: None,
            pages_created: 0,
            cursor,
            line_origin: None,
            fill_color: Color::black(),
            font: DEFAULT_FONT.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            transform_depth: 0,
            fonts: BTreeMap::new(),
            metrics: None,
            listeners: Vec::new(),
        }
    }

    /// Measure text with real font metrics instead of the width estimate
    pub fn with_font_metrics(mut self, metrics: Box<dyn FontMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    /// Buffered operations of a page
    pub fn page_operations(&self, index: usize) -> Option<&[Operation]> {
        self.pages.get(index).map(Vec::as_slice)
    }

    fn page_mut(&mut self) -> Result<&mut Vec<Operation>> {
        let index = self.current.ok_or(RenderError::NoActivePage)?;
        Ok(&mut self.pages[index])
    }

    fn font_key(&mut self) -> String {
        let next = format!("F{}", self.fonts.len() + 1);
        self.fonts.entry(self.font.clone()).or_insert(next).clone()
    }

    fn measure(&self, text: &str) -> f32 {
        measure_text(text, self.font_size, self.metrics.as_deref())
    }

    /// Box width for a draw at the cursor, the rest of the line by default
    fn box_width(&self, options: &TextOptions) -> f32 {
        options
            .width
            .unwrap_or(self.config.page_width - self.config.margins.right - self.cursor.x)
    }

    /// Lines `text` breaks into under `options` at the cursor
    fn layout_lines(&self, text: &str, options: &TextOptions) -> Vec<String> {
        let width = self.box_width(options);
        let mut lines = if options.line_break {
            wrap_text(text, width, |s| self.measure(s))
        } else if options.ellipsis {
            vec![fit_with_ellipsis(text, width, |s| self.measure(s))]
        } else {
            vec![text.replace('\n', " ")]
        };
        if let Some(height) = options.height {
            let line_height = self.font_size + options.line_gap;
            let fitting = (height / line_height).floor().max(1.0) as usize;
            lines.truncate(fitting);
        }
        lines
    }

    /// Convert a top-down point to PDF user space
    fn to_pdf(&self, point: Point) -> (f32, f32) {
        (point.x, self.config.page_height - point.y)
    }

    /// Conjugate a top-down transform by the y flip into PDF user space
    fn pdf_matrix(&self, t: Transform) -> [f32; 6] {
        let h = self.config.page_height;
        [t.a, -t.b, -t.c, t.d, t.c * h + t.e, h - t.d * h - t.f]
    }

    /// Assemble the buffered pages into a document
    #[instrument(skip(self), fields(pages = self.pages.len()))]
    pub fn finish(self) -> Result<Document> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let mut font_dict = Dictionary::new();
        for (base_font, key) in &self.fonts {
            let font_id = doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => base_font.as_str(),
                "Encoding" => "WinAnsiEncoding",
            });
            font_dict.set(key.as_str(), font_id);
        }
        let resources_id = doc.add_object(dictionary! { "Font" => font_dict });

        let media_box: Vec<Object> = vec![
            0.into(),
            0.into(),
            self.config.page_width.into(),
            self.config.page_height.into(),
        ];

        let mut kids: Vec<Object> = Vec::with_capacity(self.pages.len());
        for operations in self.pages {
            let content = Content { operations };
            let content_id = doc.add_object(Stream::new(Dictionary::new(), content.encode()?));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => media_box.clone(),
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        if let Some(title) = &self.config.title {
            let info_id = doc.add_object(dictionary! {
                "Title" => Object::string_literal(title.as_str()),
            });
            doc.trailer.set("Info", info_id);
        }

        debug!("Assembled document with {} pages", count);
        Ok(doc)
    }

    /// Assemble the document and write it to `path`
    pub fn save<P: AsRef<Path>>(self, path: P) -> Result<()> {
        let mut doc = self.finish()?;
        doc.save(path)?;
        Ok(())
    }

    /// Assemble the document and write it to `target`
    pub fn save_to<W: Write>(self, target: &mut W) -> Result<()> {
        let mut doc = self.finish()?;
        doc.save_to(target)?;
        Ok(())
    }
}

impl Surface for LopdfSurface {
    fn page_index(&self) -> usize {
        self.current.unwrap_or(0)
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn cursor(&self) -> Point {
        self.cursor
    }

    fn set_cursor(&mut self, position: Point) {
        self.cursor = position;
        self.line_origin = None;
    }

    fn page_size(&self) -> (f32, f32) {
        (self.config.page_width, self.config.page_height)
    }

    fn margins(&self) -> Margins {
        self.config.margins
    }

    fn title(&self) -> Option<&str> {
        self.config.title.as_deref()
    }

    fn switch_to_page(&mut self, index: usize) -> Result<()> {
        if index >= self.pages.len() {
            return Err(RenderError::PageNotFound {
                index,
                count: self.pages.len(),
            });
        }
        trace!("Switching to page {}", index);
        self.current = Some(index);
        self.line_origin = None;
        Ok(())
    }

    fn add_page(&mut self) -> Result<()> {
        self.pages.push(Vec::new());
        self.pages_created += 1;
        let page_index = self.pages.len() - 1;
        self.current = Some(page_index);
        self.set_cursor(Point::new(self.config.margins.left, self.config.margins.top));

        let event = PageEvent {
            page_index,
            page_number: self.pages_created,
        };
        debug!("Added page {}", event.page_number);

        let mut listeners = std::mem::take(&mut self.listeners);
        let notified = listeners
            .iter_mut()
            .try_for_each(|listener| listener.on_page_added(self, &event));
        // Keep listeners registered while notifying
        listeners.append(&mut self.listeners);
        self.listeners = listeners;
        notified
    }

    fn add_page_listener(&mut self, listener: Box<dyn PageListener>) {
        self.listeners.push(listener);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn set_font(&mut self, font: &str) {
        self.font = font.to_string();
    }

    fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    fn push_transform(&mut self, transform: Transform) -> Result<()> {
        let matrix = self.pdf_matrix(transform);
        self.page_mut()?.extend(push_matrix(matrix));
        self.transform_depth += 1;
        Ok(())
    }

    fn pop_transform(&mut self) -> Result<()> {
        if self.transform_depth == 0 {
            warn!("pop_transform called without a pushed transform");
            return Ok(());
        }
        self.page_mut()?.push(pop_matrix());
        self.transform_depth -= 1;
        Ok(())
    }

    fn draw_text(&mut self, text: &str, at: Option<Point>, options: &TextOptions) -> Result<()> {
        if self.current.is_none() {
            return Err(RenderError::NoActivePage);
        }
        if let Some(point) = at {
            self.set_cursor(point);
        }

        let origin = self.cursor;
        let line_start = self.line_origin.take().unwrap_or(origin.x);
        let width = self.box_width(options);
        let line_height = self.font_size + options.line_gap;
        let lines = self.layout_lines(text, options);

        let font_key = self.font_key();
        let mut operations = Vec::new();
        let mut y = origin.y;
        let mut end_x = origin.x;
        for line in &lines {
            let line_width = self.measure(line);
            let x = match options.align {
                Alignment::Left => origin.x,
                Alignment::Center => origin.x + (width - line_width) / 2.0,
                Alignment::Right => origin.x + width - line_width,
            };
            let (pdf_x, pdf_y) = self.to_pdf(Point::new(x, y + self.font_size));
            operations.extend(draw_text_line(
                &font_key,
                self.font_size,
                self.fill_color,
                pdf_x,
                pdf_y,
                line,
            ));
            end_x = x + line_width;
            y += line_height;
        }
        trace!("Drew {} lines of text at {:?}", lines.len(), origin);
        self.page_mut()?.extend(operations);

        if options.continued {
            self.line_origin = Some(line_start);
            self.cursor = Point::new(end_x, y - line_height);
        } else {
            self.cursor = Point::new(line_start, y);
        }
        Ok(())
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: Color) -> Result<()> {
        let (start, end) = (self.to_pdf(from), self.to_pdf(to));
        self.page_mut()?.extend(draw_line(start, end, color, width));
        Ok(())
    }

    fn move_down(&mut self, amount: f32) {
        self.cursor.y += amount;
    }

    fn needs_page_break(&self, page: usize, page_count: usize, upcoming_height: f32) -> bool {
        let limit =
            self.config.page_height - self.config.margins.bottom - self.config.reserved_bottom;
        let needed = self.cursor.y + upcoming_height > limit;
        if needed {
            trace!(
                "Page {} of {} full at y={} (+{})",
                page, page_count, self.cursor.y, upcoming_height
            );
        }
        needed
    }

    fn reserve_bottom(&mut self, height: f32) {
        if height > self.config.reserved_bottom {
            debug!("Reserving {}pt above the bottom margin", height);
            self.config.reserved_bottom = height;
        }
    }

    fn text_height(&self, text: &str, options: &TextOptions) -> f32 {
        let lines = self.layout_lines(text, options).len().max(1);
        lines as f32 * (self.font_size + options.line_gap)
    }
}
