//! Multi-page column report with a footer and repeated headers

use lopdf_columns::{
    Alignment, BorderStyle, CellSpec, Color, ColumnSpec, ColumnTable, ColumnTableDrawing,
    FooterLine, FooterRenderer, LopdfSurface, Margins, Surface, SurfaceConfig, TableOptions,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging with debug level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .init();

    let config = SurfaceConfig::a4()
        .with_title("Quarterly Inventory")
        .with_margins(Margins::symmetric(50.0, 40.0));
    let mut surface = LopdfSurface::new(config);

    // Register before the first page so every page gets a footer. Rows stay
    // clear of the footer lines.
    surface.add_footer(FooterRenderer::new(vec![
        FooterLine::text("Generated by lopdf-columns"),
        FooterLine::label_value("Warehouse: ", "North"),
    ]));
    surface.add_page()?;

    let skus: Vec<String> = (1..=90).map(|i| format!("SKU-{i:04}")).collect();
    let quantities: Vec<CellSpec> = (1..=90)
        .map(|i| match i % 7 {
            0 => CellSpec::empty(),
            _ => CellSpec::new(format!("{}", i * 13 % 250)).with_align(Alignment::Right),
        })
        .collect();
    let notes: Vec<CellSpec> = (1..=90)
        .map(|i| {
            if i % 10 == 0 {
                CellSpec::new("Reorder scheduled for next week, supplier confirmed")
                    .italic()
                    .with_color(Color::rgb(0.7, 0.1, 0.1))
            } else {
                CellSpec::new("").with_border_style(BorderStyle::None)
            }
        })
        .collect();

    let table = ColumnTable::with_options(
        vec![
            ColumnSpec::new(CellSpec::new("SKU"))
                .with_rows(skus)
                .with_width(0.25),
            ColumnSpec {
                header: CellSpec::new("Quantity").with_align(Alignment::Right),
                rows: quantities,
                width: Some(0.2),
            },
            ColumnSpec {
                header: CellSpec::new("Notes"),
                rows: notes,
                width: Some(0.55),
            },
        ],
        TableOptions {
            header: CellSpec::default().with_color(Color::rgb(0.1, 0.2, 0.5)),
            cell: CellSpec::default().with_empty_text("n/a"),
            bottom_margin: Some(24.0),
        },
    );

    surface.draw_column_table(&table)?;
    println!(
        "Table ended on page {} at y={:.1}",
        surface.page_index() + 1,
        surface.cursor().y
    );

    surface.save("multi_page_column_table.pdf")?;
    println!("Saved multi_page_column_table.pdf");
    Ok(())
}
