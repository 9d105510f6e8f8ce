//! Column table rendering onto a surface

use crate::Result;
use crate::constants::*;
use crate::layout::{LayoutCursor, resolve_column_widths};
use crate::style::{BorderStyle, CellSpec, ResolvedStyle};
use crate::surface::{Point, Surface, TextOptions, Transform};
use crate::table::{ColumnSpec, ColumnTable};
use tracing::{debug, instrument, trace};

impl ColumnTable {
    /// Draw the table at the surface's current vertical position.
    ///
    /// Columns are drawn one after another, each starting again from the
    /// starting page and y. Rows that do not fit continue on the next page
    /// below a repeated header. Afterwards the surface cursor sits below the
    /// deepest column plus the table's bottom margin.
    #[instrument(skip(self, surface), fields(columns = self.columns.len()))]
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<()> {
        let starting_page = surface.page_index();
        let starting_position = Point::new(surface.margins().left, surface.cursor().y);
        let widths = resolve_column_widths(&self.columns, surface.content_width());

        debug!(
            "Rendering {} columns from page {} at {:?}",
            self.columns.len(),
            starting_page,
            starting_position
        );

        let mut cursor = LayoutCursor::new(starting_page, starting_position);
        let mut deepest = cursor;

        for (index, (column, width)) in self.columns.iter().zip(widths).enumerate() {
            cursor.page = starting_page;
            cursor.position.y = starting_position.y;
            surface.switch_to_page(starting_page)?;
            trace!(
                "Column {} at x={} width={} ({} rows)",
                index,
                cursor.position.x,
                width,
                column.rows.len()
            );

            self.render_header(surface, column, cursor.position, width)?;
            for row in &column.rows {
                self.render_row(surface, column, row, &mut cursor, width)?;
            }

            let end = LayoutCursor::new(cursor.page, surface.cursor());
            if end.is_below(&deepest) {
                deepest = end;
            }
            cursor.position.x += width;
        }

        if deepest.page != surface.page_index() {
            surface.switch_to_page(deepest.page)?;
        }
        surface.set_cursor(Point::new(starting_position.x, deepest.position.y));
        surface.move_down(self.bottom_margin);

        Ok(())
    }

    fn render_header<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        column: &ColumnSpec,
        at: Point,
        width: f32,
    ) -> Result<()> {
        let style = self.defaults.resolve_header(&column.header);
        let line_gap = style.font_size * HEADER_LINE_GAP_RATIO;
        trace!("Header {:?} at {:?}", style.text, at);

        let options = text_options(&style, width, line_gap);
        draw_styled_text(surface, &style, Some(at), &options)?;

        let y = surface.cursor().y - style.font_size * HEADER_BORDER_OFFSET_RATIO;
        surface.stroke_line(
            Point::new(at.x, y),
            Point::new(at.x + width, y),
            style.border_width,
            style.border_color,
        )
    }

    fn render_row<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        column: &ColumnSpec,
        row: &CellSpec,
        cursor: &mut LayoutCursor,
        width: f32,
    ) -> Result<()> {
        let style = self.defaults.resolve_cell(row);
        let line_gap = style.font_size * ROW_LINE_GAP_RATIO;
        let options = text_options(&style, width, line_gap);

        // Wrapped rows ask for all of their lines
        surface.set_font(&style.font);
        surface.set_font_size(style.font_size);
        let upcoming = surface.text_height(&style.text, &options);

        if surface.needs_page_break(cursor.page, surface.page_count(), upcoming) {
            cursor.page += 1;
            if cursor.page < surface.page_count() {
                surface.switch_to_page(cursor.page)?;
            } else {
                surface.add_page()?;
            }
            cursor.position.y = surface.margins().top;
            debug!("Column continues on page {}", cursor.page);

            self.render_header(surface, column, cursor.position, width)?;
        }

        // Rows flow from wherever the previous draw left the surface cursor
        draw_styled_text(surface, &style, None, &options)?;

        if style.border_style == BorderStyle::None {
            return Ok(());
        }
        let y = surface.cursor().y - style.font_size * ROW_BORDER_OFFSET_RATIO;
        surface.stroke_line(
            Point::new(cursor.position.x, y),
            Point::new(cursor.position.x + width, y),
            style.border_width,
            style.border_color,
        )
    }
}

fn text_options(style: &ResolvedStyle, width: f32, line_gap: f32) -> TextOptions {
    TextOptions {
        align: style.align,
        width: Some(width),
        height: (!style.allow_wrap).then_some(line_gap),
        line_gap,
        line_break: style.allow_wrap,
        ellipsis: !style.allow_wrap,
        continued: false,
    }
}

fn draw_styled_text<S: Surface + ?Sized>(
    surface: &mut S,
    style: &ResolvedStyle,
    at: Option<Point>,
    options: &TextOptions,
) -> Result<()> {
    surface.set_fill_color(style.color);
    surface.set_font(&style.font);
    surface.set_font_size(style.font_size);

    if !style.italic {
        return surface.draw_text(&style.text, at, options);
    }

    let anchor_y = at.map_or_else(|| surface.cursor().y, |point| point.y);
    surface.push_transform(Transform::italic(anchor_y))?;
    let drawn = surface.draw_text(&style.text, at, options);
    surface.pop_transform()?;
    drawn
}
