//! PDF export service implementation

use anyhow::{Context, Result};
use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference, Point, Rgb,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::models::shift::ExportColor;
use crate::services::export::{RosterTable, PAGE_HEIGHT_MM, PAGE_MARGIN_MM, PAGE_WIDTH_MM};

const HEADER_ROW_MM: f32 = 8.0;
const BODY_ROW_MM: f32 = 7.0;
const HEADER_FILL: ExportColor = ExportColor::new(0.88, 0.89, 0.92);
const GRID_LINE: ExportColor = ExportColor::new(0.65, 0.65, 0.65);
const TITLE_TEXT: ExportColor = ExportColor::new(0.1, 0.1, 0.1);

/// Export options
pub struct PdfExportOptions {
    /// Page size (width, height) in mm
    pub page_size: (f32, f32),
}

impl Default for PdfExportOptions {
    fn default() -> Self {
        Self {
            // A4 Landscape
            page_size: (PAGE_WIDTH_MM, PAGE_HEIGHT_MM),
        }
    }
}

/// Service for rendering a roster table model to a PDF document
pub struct RosterPdfService;

impl RosterPdfService {
    /// Render the table to `path`. Continuation pages repeat the header
    /// row when the nurse list outgrows one page.
    pub fn export(table: &RosterTable, path: &Path, options: &PdfExportOptions) -> Result<()> {
        let (page_width, page_height) = options.page_size;
        let (doc, page1, layer1) = PdfDocument::new(
            &table.title,
            Mm(page_width),
            Mm(page_height),
            "Layer 1",
        );

        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .context("Failed to add font")?;
        let font_bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .context("Failed to add bold font")?;

        let mut layer = doc.get_page(page1).get_layer(layer1);

        Self::draw_text(
            &layer,
            &font_bold,
            16.0,
            page_width / 2.0,
            page_height - 12.0,
            &table.title,
            TITLE_TEXT,
            true,
        );

        let mut y = page_height - 22.0;
        Self::draw_header_row(&layer, table, &font_bold, y);
        y -= HEADER_ROW_MM;

        for row in &table.rows {
            if y - BODY_ROW_MM < PAGE_MARGIN_MM {
                let (new_page, new_layer) =
                    doc.add_page(Mm(page_width), Mm(page_height), "Layer 1");
                layer = doc.get_page(new_page).get_layer(new_layer);
                y = page_height - PAGE_MARGIN_MM;
                Self::draw_header_row(&layer, table, &font_bold, y);
                y -= HEADER_ROW_MM;
            }

            let mut x = PAGE_MARGIN_MM;
            for (col, cell) in row.iter().enumerate() {
                let width = if col == 0 {
                    table.name_column_width
                } else {
                    table.day_column_width
                };

                if let Some(fill) = cell.fill {
                    Self::fill_rect(&layer, x, y - BODY_ROW_MM, width, BODY_ROW_MM, fill);
                }
                Self::stroke_rect(&layer, x, y - BODY_ROW_MM, width, BODY_ROW_MM);

                if !cell.text.is_empty() {
                    if col == 0 {
                        let name = Self::truncate(&cell.text, 30);
                        Self::draw_text(
                            &layer,
                            &font,
                            8.0,
                            x + 1.5,
                            y - BODY_ROW_MM + 2.2,
                            &name,
                            cell.text_color,
                            false,
                        );
                    } else {
                        Self::draw_text(
                            &layer,
                            &font,
                            7.0,
                            x + width / 2.0,
                            y - BODY_ROW_MM + 2.2,
                            &cell.text,
                            cell.text_color,
                            true,
                        );
                    }
                }

                x += width;
            }
            y -= BODY_ROW_MM;
        }

        let file = File::create(path).context("Failed to create PDF file")?;
        let mut writer = BufWriter::new(file);
        doc.save(&mut writer).context("Failed to save PDF")?;

        Ok(())
    }

    fn draw_header_row(
        layer: &PdfLayerReference,
        table: &RosterTable,
        font_bold: &IndirectFontRef,
        y: f32,
    ) {
        let mut x = PAGE_MARGIN_MM;
        for (col, label) in table.headers.iter().enumerate() {
            let width = if col == 0 {
                table.name_column_width
            } else {
                table.day_column_width
            };

            Self::fill_rect(layer, x, y - HEADER_ROW_MM, width, HEADER_ROW_MM, HEADER_FILL);
            Self::stroke_rect(layer, x, y - HEADER_ROW_MM, width, HEADER_ROW_MM);

            if col == 0 {
                Self::draw_text(
                    layer,
                    font_bold,
                    8.0,
                    x + 1.5,
                    y - HEADER_ROW_MM + 2.6,
                    label,
                    TITLE_TEXT,
                    false,
                );
            } else {
                Self::draw_text(
                    layer,
                    font_bold,
                    7.0,
                    x + width / 2.0,
                    y - HEADER_ROW_MM + 2.6,
                    label,
                    TITLE_TEXT,
                    true,
                );
            }

            x += width;
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_text(
        layer: &PdfLayerReference,
        font: &IndirectFontRef,
        size: f32,
        x: f32,
        y: f32,
        text: &str,
        color: ExportColor,
        centered: bool,
    ) {
        layer.begin_text_section();
        layer.set_font(font, size);
        layer.set_fill_color(printpdf::Color::Rgb(Rgb::new(
            color.r, color.g, color.b, None,
        )));

        let position = if centered {
            // Approximate centering based on character count
            let approx_width = text.len() as f32 * size * 0.17;
            (Mm(x - approx_width / 2.0), Mm(y))
        } else {
            (Mm(x), Mm(y))
        };

        layer.set_text_cursor(position.0, position.1);
        layer.write_text(text, font);
        layer.end_text_section();
    }

    fn fill_rect(
        layer: &PdfLayerReference,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: ExportColor,
    ) {
        layer.set_fill_color(printpdf::Color::Rgb(Rgb::new(
            color.r, color.g, color.b, None,
        )));
        layer.add_polygon(printpdf::Polygon {
            rings: vec![Self::rect_points(x, y, width, height)],
            mode: printpdf::path::PaintMode::Fill,
            winding_order: printpdf::path::WindingOrder::NonZero,
        });
    }

    fn stroke_rect(layer: &PdfLayerReference, x: f32, y: f32, width: f32, height: f32) {
        layer.set_outline_color(printpdf::Color::Rgb(Rgb::new(
            GRID_LINE.r,
            GRID_LINE.g,
            GRID_LINE.b,
            None,
        )));
        layer.set_outline_thickness(0.4);
        layer.add_polygon(printpdf::Polygon {
            rings: vec![Self::rect_points(x, y, width, height)],
            mode: printpdf::path::PaintMode::Stroke,
            winding_order: printpdf::path::WindingOrder::NonZero,
        });
    }

    fn rect_points(x: f32, y: f32, width: f32, height: f32) -> Vec<(Point, bool)> {
        vec![
            (Point::new(Mm(x), Mm(y)), false),
            (Point::new(Mm(x + width), Mm(y)), false),
            (Point::new(Mm(x + width), Mm(y + height)), false),
            (Point::new(Mm(x), Mm(y + height)), false),
        ]
    }

    fn truncate(text: &str, max_chars: usize) -> String {
        if text.chars().count() > max_chars {
            let prefix: String = text.chars().take(max_chars.saturating_sub(3)).collect();
            format!("{}...", prefix)
        } else {
            text.to_string()
        }
    }
}
