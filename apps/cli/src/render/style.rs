//! Run, border, and spacer styling shared across the resume tables.
//!
//! The grid reads as borderless: cell borders are not removed but painted
//! white at minimum weight. The only visible strokes are the heavy rule under
//! the header band and the vertical accent to the right of each section label.

use docx_rs::{
    BorderType, LineSpacing, LineSpacingType, Paragraph, Run, Table, TableCell, TableCellBorder,
    TableCellBorderPosition, TableCellMargins, TableLayoutType, TableRow, WidthType,
};

/// Gray used for section labels and regular entry text.
pub const LABEL_GRAY: &str = "696969";

const BORDER_WHITE: &str = "FFFFFF";
const BORDER_BLACK: &str = "000000";

/// Emphasized run size in half-points (12pt).
pub const EMPHASIS_SIZE: usize = 24;

/// Border weights in eighths of a point.
const HIDDEN_BORDER_SIZE: usize = 2;
const RULE_BORDER_SIZE: usize = 12;
const ACCENT_BORDER_SIZE: usize = 5;

fn white_border(position: TableCellBorderPosition) -> TableCellBorder {
    TableCellBorder::new(position)
        .border_type(BorderType::Single)
        .size(HIDDEN_BORDER_SIZE)
        .color(BORDER_WHITE)
}

/// Paints all four borders of a cell white.
pub fn hide_borders(cell: TableCell) -> TableCell {
    [
        TableCellBorderPosition::Top,
        TableCellBorderPosition::Bottom,
        TableCellBorderPosition::Left,
        TableCellBorderPosition::Right,
    ]
    .into_iter()
    .fold(cell, |cell, position| cell.set_border(white_border(position)))
}

/// Hides all borders except the right edge, which becomes the medium vertical
/// accent next to each section label.
pub fn accent_right_borders(cell: TableCell) -> TableCell {
    [
        TableCellBorderPosition::Top,
        TableCellBorderPosition::Bottom,
        TableCellBorderPosition::Left,
    ]
    .into_iter()
    .fold(cell, |cell, position| cell.set_border(white_border(position)))
    .set_border(
        TableCellBorder::new(TableCellBorderPosition::Right)
            .border_type(BorderType::Single)
            .size(ACCENT_BORDER_SIZE)
            .color(BORDER_BLACK),
    )
}

/// Regular entry text: gray, default size.
pub fn gray_run(text: &str) -> Run {
    Run::new().add_text(text).color(LABEL_GRAY)
}

/// Emphasized entry text: bold at 12pt.
pub fn bold_run(text: &str) -> Run {
    Run::new().add_text(text).bold().size(EMPHASIS_SIZE)
}

/// Section label text: bold, 12pt, gray.
pub fn label_run(text: &str) -> Run {
    Run::new()
        .add_text(text)
        .bold()
        .size(EMPHASIS_SIZE)
        .color(LABEL_GRAY)
}

/// Zeroed cell margins for nested tables, so inner grids sit flush with their
/// container cell.
pub fn flush_margins() -> TableCellMargins {
    TableCellMargins::new().margin(0, 0, 0, 0)
}

/// The near-zero-height paragraph separating the header band from the rule.
pub fn spacer_paragraph() -> Paragraph {
    // 57 twips ≈ 0.1cm of exact line height
    Paragraph::new().line_spacing(LineSpacing::new().line_rule(LineSpacingType::Exact).line(57))
}

/// An empty single-cell row used to open vertical space between groups.
pub fn spacer_row(width: usize) -> TableRow {
    let cell = hide_borders(
        TableCell::new()
            .add_paragraph(Paragraph::new())
            .width(width, WidthType::Dxa),
    );
    TableRow::new(vec![cell])
}

/// The one-cell table whose heavy top border draws the horizontal rule under
/// the header band.
pub fn rule_table(width: usize) -> Table {
    let cell = [
        TableCellBorderPosition::Bottom,
        TableCellBorderPosition::Left,
        TableCellBorderPosition::Right,
    ]
    .into_iter()
    .fold(
        TableCell::new()
            .add_paragraph(Paragraph::new())
            .width(width, WidthType::Dxa),
        |cell, position| cell.set_border(white_border(position)),
    )
    .set_border(
        TableCellBorder::new(TableCellBorderPosition::Top)
            .border_type(BorderType::Single)
            .size(RULE_BORDER_SIZE)
            .color(BORDER_BLACK),
    );

    Table::new(vec![TableRow::new(vec![cell])])
        .set_grid(vec![width])
        .layout(TableLayoutType::Fixed)
}

/// Number of cells in a table row (test helper used across render modules).
#[cfg(test)]
pub fn row_cell_count(table: &Table, row: usize) -> usize {
    match &table.rows[row] {
        docx_rs::TableChild::TableRow(row) => row.cells.len(),
    }
}
