//! Column-oriented table layout and page footers for paginated documents
//!
//! Tables are described column by column: each column has a header and a
//! list of row cells. Rendering walks the columns left to right from a common
//! vertical origin, asks the surface before every row whether a new page is
//! needed, and repeats the column header at the top of each continuation
//! page. Footers hook into the surface's page-created notification and are
//! drawn on every new page.
//!
//! Drawing goes through the [`Surface`] trait; [`LopdfSurface`] implements it
//! on top of lopdf.

mod drawing;
mod drawing_utils;
pub mod constants;
pub mod document;
pub mod error;
pub mod font;
pub mod footer;
pub mod layout;
pub mod style;
pub mod surface;
pub mod table;
pub mod text;

#[cfg(test)]
mod testing;

pub use document::{LopdfSurface, SurfaceConfig};
pub use error::{RenderError, Result};
#[cfg(feature = "ttf-parser")]
pub use font::TtfFontMetrics;
pub use font::FontMetrics;
pub use footer::{FooterLine, FooterRenderer};
pub use layout::{ColumnWidth, LayoutCursor};
pub use style::{Alignment, BorderStyle, CellSpec, Color, TableStyleDefaults};
pub use surface::{Margins, PageEvent, PageListener, Point, Surface, TextOptions, Transform};
pub use table::{ColumnSpec, ColumnTable, TableOptions};

/// Extension trait adding table and footer drawing to any [`Surface`]
pub trait ColumnTableDrawing {
    /// Draw a column table at the current cursor position
    fn draw_column_table(&mut self, table: &ColumnTable) -> Result<()>;

    /// Draw `footer` on every page created from now on
    fn add_footer(&mut self, footer: FooterRenderer);
}

impl<S: Surface + ?Sized> ColumnTableDrawing for S {
    fn draw_column_table(&mut self, table: &ColumnTable) -> Result<()> {
        table.render(self)
    }

    fn add_footer(&mut self, footer: FooterRenderer) {
        footer.register(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingSurface;

    #[test]
    fn test_extension_trait_renders_and_registers() {
        let mut surface = RecordingSurface::blank().with_title("Ledger");
        surface.add_footer(FooterRenderer::new(vec!["footer".into()]));
        surface.add_page().unwrap();

        let table = ColumnTable::new(vec![
            ColumnSpec::new(CellSpec::new("Name")).with_rows(["Ada", "Grace"]),
        ]);
        surface.draw_column_table(&table).unwrap();

        assert_eq!(
            surface.texts(),
            vec!["footer", "Ledger - 1", "Name", "Ada", "Grace"]
        );
    }
}
