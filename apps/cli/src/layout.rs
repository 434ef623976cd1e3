//! Page geometry and column bookkeeping for the two-column resume grid.
//!
//! All horizontal measurements are in twips (1/20 pt, 1440 per inch), the unit
//! the document format uses for table grids and margins. Embedded images are
//! sized in EMU (914400 per inch). `PageConfig` carries the page dimensions and
//! the split ratios; the renderer asks it for concrete column widths so the
//! header, bio, and body tables always partition the same content width.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub const TWIPS_PER_INCH: usize = 1440;
pub const EMU_PER_CM: f32 = 360_000.0;

/// Converts inches to twips, rounding to the nearest twip.
pub fn inches_to_twips(inches: f32) -> usize {
    (inches * TWIPS_PER_INCH as f32).round() as usize
}

/// Converts centimeters to EMU (used for embedded image sizes).
pub fn cm_to_emu(cm: f32) -> u32 {
    (cm * EMU_PER_CM).round() as u32
}

// ────────────────────────────────────────────────────────────────────────────
// Font family enum
// ────────────────────────────────────────────────────────────────────────────

/// Supported document font families, selectable from the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum FontFamily {
    /// Default word-processor body font.
    Calibri,
    /// Serif companion to Calibri.
    Cambria,
    /// Ubiquitous sans-serif.
    Arial,
    /// Classic old-style serif.
    Garamond,
}

impl FontFamily {
    /// The font name as it appears in the document's run properties.
    pub fn ascii_name(&self) -> &'static str {
        match self {
            FontFamily::Calibri => "Calibri",
            FontFamily::Cambria => "Cambria",
            FontFamily::Arial => "Arial",
            FontFamily::Garamond => "Garamond",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Page configuration
// ────────────────────────────────────────────────────────────────────────────

/// Layout parameters for a single resume page.
///
/// `header_split` is the fraction of the content width given to the name column
/// in the header band; `body_split` is the fraction given to the section-label
/// column in the body grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    pub font: FontFamily,
    /// Page width in twips.
    pub page_width: usize,
    /// Page height in twips.
    pub page_height: usize,
    /// Uniform page margin in twips.
    pub margin: usize,
    pub header_split: f32,
    pub body_split: f32,
    /// Width of the icon column inside the bio sub-grid, in twips.
    pub icon_column: usize,
    /// Edge length of a bio icon, in EMU (icons render square).
    pub icon_size_emu: u32,
}

/// Returns the default page config for the given font family.
///
/// Assumes: US letter (8.5" × 11"), 1.0" margins all sides → 6.5" content width.
pub fn default_page_config(font: FontFamily) -> PageConfig {
    PageConfig {
        font,
        page_width: inches_to_twips(8.5),
        page_height: inches_to_twips(11.0),
        margin: inches_to_twips(1.0),
        header_split: 1.0 / 3.0,
        body_split: 0.22,
        icon_column: inches_to_twips(0.3),
        icon_size_emu: cm_to_emu(0.5),
    }
}

impl PageConfig {
    /// Usable width between the page margins, in twips.
    pub fn content_width(&self) -> usize {
        self.page_width - 2 * self.margin
    }

    /// `(name_column, bio_column)` widths for the header band.
    pub fn header_columns(&self) -> (usize, usize) {
        let content = self.content_width();
        let name = (content as f32 * self.header_split).round() as usize;
        (name, content - name)
    }

    /// `(icon_column, text_column)` widths for the bio sub-grid.
    ///
    /// The sub-grid lives inside the header's bio column, so the two widths sum
    /// to that column's width.
    pub fn bio_columns(&self) -> (usize, usize) {
        let (_, bio) = self.header_columns();
        (self.icon_column, bio - self.icon_column)
    }

    /// `(label_column, content_column)` widths for the body grid.
    pub fn body_columns(&self) -> (usize, usize) {
        let content = self.content_width();
        let label = (content as f32 * self.body_split).round() as usize;
        (label, content - label)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
