//! Body grid: the nested tables carrying the section data.
//!
//! # Nesting levels
//! - Level 0: two columns, one row per top-level section. Left cell is the
//!   title-cased section label with a vertical accent border; right cell holds
//!   a level-1 table.
//! - Level 1: single column, one row per group inside the section, plus spacer
//!   rows that open vertical space between groups.
//! - Level 2: single column, the actual entry rows (one gray row for a
//!   single-line group, one row per labeled entry otherwise).

use docx_rs::{Paragraph, Run, Table, TableCell, TableLayoutType, TableRow, WidthType};
use indexmap::IndexMap;

use crate::layout::PageConfig;
use crate::models::{is_emphasized, GroupBody, Section};
use crate::render::style;

/// Builds the level-0 body table from the profile's section map.
pub fn body_table(data: &IndexMap<String, Section>, page: &PageConfig) -> Table {
    let (label_width, content_width) = page.body_columns();

    let rows = data
        .iter()
        .map(|(label, section)| section_row(label, section, label_width, content_width))
        .collect();

    Table::new(rows)
        .set_grid(vec![label_width, content_width])
        .layout(TableLayoutType::Fixed)
}

fn section_row(
    label: &str,
    section: &Section,
    label_width: usize,
    content_width: usize,
) -> TableRow {
    let label_cell = style::accent_right_borders(
        TableCell::new()
            .add_paragraph(Paragraph::new().add_run(style::label_run(&title_case(label))))
            .width(label_width, WidthType::Dxa),
    );

    let content_cell = style::hide_borders(
        TableCell::new()
            .add_table(group_table(section, content_width))
            .add_paragraph(Paragraph::new())
            .width(content_width, WidthType::Dxa),
    );

    TableRow::new(vec![label_cell, content_cell])
}

/// Builds the level-1 table for one section.
///
/// Spacer placement: every labeled-entries group is followed by a spacer row;
/// a run of single-line groups gets one trailing spacer after the last group.
fn group_table(section: &Section, width: usize) -> Table {
    let mut rows = Vec::new();
    let last = section.len().saturating_sub(1);

    for (i, body) in section.values().enumerate() {
        let cell = style::hide_borders(
            TableCell::new()
                .add_table(entries_table(body, width))
                .add_paragraph(Paragraph::new()),
        );
        rows.push(TableRow::new(vec![cell]));

        match body {
            GroupBody::Entries(_) => rows.push(style::spacer_row(width)),
            GroupBody::Line(_) if i == last => rows.push(style::spacer_row(width)),
            GroupBody::Line(_) => {}
        }
    }

    Table::new(rows)
        .set_grid(vec![width])
        .margins(style::flush_margins())
        .layout(TableLayoutType::Fixed)
}

/// Builds the level-2 table holding the entry rows of one group.
fn entries_table(body: &GroupBody, width: usize) -> Table {
    let rows = match body {
        GroupBody::Line(text) => vec![entry_row(style::gray_run(text), width)],
        GroupBody::Entries(entries) => entries
            .iter()
            .map(|(label, value)| {
                let run = if is_emphasized(label) {
                    style::bold_run(value)
                } else {
                    style::gray_run(value)
                };
                entry_row(run, width)
            })
            .collect(),
    };

    Table::new(rows)
        .set_grid(vec![width])
        .margins(style::flush_margins())
        .layout(TableLayoutType::Fixed)
}

fn entry_row(run: Run, width: usize) -> TableRow {
    let cell = style::hide_borders(
        TableCell::new()
            .add_paragraph(Paragraph::new().add_run(run))
            .width(width, WidthType::Dxa),
    );
    TableRow::new(vec![cell])
}

/// Capitalizes the first letter of each word and lowercases the rest.
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{default_page_config, FontFamily};
    use indexmap::indexmap;

    fn make_page_config() -> PageConfig {
        default_page_config(FontFamily::Calibri)
    }

    fn make_entries(pairs: &[(&str, &str)]) -> GroupBody {
        GroupBody::Entries(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    // ── title_case ──────────────────────────────────────────────────────────

    #[test]
    fn test_title_case_basic() {
        assert_eq!(title_case("skills"), "Skills");
        assert_eq!(title_case("work experience"), "Work Experience");
        assert_eq!(title_case("MY SKILLS"), "My Skills");
    }

    #[test]
    fn test_title_case_empty() {
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("   "), "");
    }

    // ── entries_table ───────────────────────────────────────────────────────

    #[test]
    fn test_entries_table_line_is_single_row() {
        let table = entries_table(&GroupBody::Line("one liner".to_string()), 7000);
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn test_entries_table_one_row_per_entry() {
        let body = make_entries(&[("role_bold_value", "Engineer"), ("dates", "2020 - 2024")]);
        let table = entries_table(&body, 7000);
        assert_eq!(table.rows.len(), 2);
    }

    // ── group_table spacer placement ────────────────────────────────────────

    #[test]
    fn test_group_table_spacer_after_each_entries_group() {
        let section: Section = indexmap! {
            "acme".to_string() => make_entries(&[("role_bold_value", "Engineer")]),
            "globex".to_string() => make_entries(&[("role_bold_value", "Lead")]),
        };
        // 2 group rows + 2 spacer rows
        let table = group_table(&section, 7000);
        assert_eq!(table.rows.len(), 4);
    }

    #[test]
    fn test_group_table_lines_get_one_trailing_spacer() {
        let section: Section = indexmap! {
            "a".to_string() => GroupBody::Line("Rust".to_string()),
            "b".to_string() => GroupBody::Line("C".to_string()),
            "c".to_string() => GroupBody::Line("Python".to_string()),
        };
        // 3 line rows + 1 trailing spacer
        let table = group_table(&section, 7000);
        assert_eq!(table.rows.len(), 4);
    }

    #[test]
    fn test_group_table_mixed_groups() {
        let section: Section = indexmap! {
            "summary".to_string() => GroupBody::Line("Systems work".to_string()),
            "acme".to_string() => make_entries(&[("role_bold_value", "Engineer")]),
        };
        // line row (no spacer: not last), entries row + spacer
        let table = group_table(&section, 7000);
        assert_eq!(table.rows.len(), 3);
    }

    #[test]
    fn test_group_table_trailing_line_gets_spacer() {
        let section: Section = indexmap! {
            "acme".to_string() => make_entries(&[("role_bold_value", "Engineer")]),
            "summary".to_string() => GroupBody::Line("Systems work".to_string()),
        };
        // entries row + spacer, then last line row + trailing spacer
        let table = group_table(&section, 7000);
        assert_eq!(table.rows.len(), 4);
    }

    // ── body_table ──────────────────────────────────────────────────────────

    #[test]
    fn test_body_table_one_row_per_section() {
        let page = make_page_config();
        let data: IndexMap<String, Section> = indexmap! {
            "skills".to_string() => indexmap! {
                "languages".to_string() => GroupBody::Line("Rust".to_string()),
            },
            "experience".to_string() => indexmap! {
                "acme".to_string() => make_entries(&[("role_bold_value", "Engineer")]),
            },
        };
        let table = body_table(&data, &page);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(style::row_cell_count(&table, 0), 2);
    }

    #[test]
    fn test_body_table_empty_data() {
        let page = make_page_config();
        let table = body_table(&IndexMap::new(), &page);
        assert!(table.rows.is_empty());
    }
}
