//! Header band: display name on the left, icon-annotated bio rows on the right.

use std::io::Cursor;
use std::path::Path;

use docx_rs::{Paragraph, Pic, Run, Table, TableCell, TableLayoutType, TableRow, WidthType};
use image::ImageFormat;
use indexmap::IndexMap;
use tracing::warn;

use crate::layout::PageConfig;
use crate::models::Profile;
use crate::render::style;

/// Name run sizes in half-points: each word leads with a 21pt letter and
/// continues at 19pt.
const NAME_LEAD_SIZE: usize = 42;
const NAME_TRAIL_SIZE: usize = 38;

/// Builds the two-column header table: name cell and nested bio grid.
pub fn heading_table(profile: &Profile, page: &PageConfig, icons_dir: &Path) -> Table {
    let (name_width, bio_width) = page.header_columns();

    let name_cell = style::hide_borders(
        TableCell::new()
            .add_paragraph(name_paragraph(&profile.name))
            .width(name_width, WidthType::Dxa),
    );

    // A cell whose last child is a table needs a trailing empty paragraph.
    let bio_cell = style::hide_borders(
        TableCell::new()
            .add_table(bio_table(&profile.bio_data, page, icons_dir))
            .add_paragraph(Paragraph::new())
            .width(bio_width, WidthType::Dxa),
    );

    Table::new(vec![TableRow::new(vec![name_cell, bio_cell])])
        .set_grid(vec![name_width, bio_width])
        .layout(TableLayoutType::Fixed)
}

/// Renders the display name uppercased, one oversized leading letter per word.
fn name_paragraph(name: &str) -> Paragraph {
    let mut paragraph = Paragraph::new();
    for (i, word) in name.to_uppercase().split_whitespace().enumerate() {
        if i > 0 {
            paragraph = paragraph.add_run(Run::new().add_text(" "));
        }
        let mut chars = word.chars();
        if let Some(lead) = chars.next() {
            paragraph = paragraph.add_run(
                Run::new()
                    .add_text(lead.to_string())
                    .size(NAME_LEAD_SIZE),
            );
        }
        let trail: String = chars.collect();
        if !trail.is_empty() {
            paragraph = paragraph.add_run(Run::new().add_text(trail).size(NAME_TRAIL_SIZE));
        }
    }
    paragraph
}

/// Builds the nested two-column bio grid: one row per bio entry, icon cell on
/// the left and the entry text on the right.
fn bio_table(bio_data: &IndexMap<String, String>, page: &PageConfig, icons_dir: &Path) -> Table {
    let (icon_width, text_width) = page.bio_columns();

    let rows = bio_data
        .iter()
        .map(|(key, value)| {
            let mut icon_paragraph = Paragraph::new();
            if let Some(pic) = load_icon(icons_dir, key, page.icon_size_emu) {
                icon_paragraph = icon_paragraph.add_run(Run::new().add_image(pic));
            }

            let icon_cell = style::hide_borders(
                TableCell::new()
                    .add_paragraph(icon_paragraph)
                    .width(icon_width, WidthType::Dxa),
            );
            let text_cell = style::hide_borders(
                TableCell::new()
                    .add_paragraph(Paragraph::new().add_run(Run::new().add_text(value.as_str())))
                    .width(text_width, WidthType::Dxa),
            );
            TableRow::new(vec![icon_cell, text_cell])
        })
        .collect();

    Table::new(rows)
        .set_grid(vec![icon_width, text_width])
        .margins(style::flush_margins())
        .layout(TableLayoutType::Fixed)
}

/// Loads `icons_dir/<key>.png` and scales it to a square icon.
///
/// This is the single recoverable failure in the pipeline: a missing or
/// undecodable icon logs a diagnostic and the bio row renders without an image.
fn load_icon(icons_dir: &Path, key: &str, size_emu: u32) -> Option<Pic> {
    let path = icons_dir.join(format!("{key}.png"));

    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!("{key} icon is not defined at {}: {err}", path.display());
            return None;
        }
    };

    // Re-encode through `image` so any readable raster file embeds as clean PNG.
    let decoded = match image::load_from_memory(&bytes) {
        Ok(img) => img,
        Err(err) => {
            warn!("{key} icon at {} is not a readable image: {err}", path.display());
            return None;
        }
    };
    let mut png = Vec::new();
    if let Err(err) = decoded.write_to(&mut Cursor::new(&mut png), ImageFormat::Png) {
        warn!("{key} icon at {} could not be re-encoded: {err}", path.display());
        return None;
    }

    Some(Pic::new(&png).size(size_emu, size_emu))
}
