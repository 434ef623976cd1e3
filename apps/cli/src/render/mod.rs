//! Document assembly: header band, rule, body grid, and file output.

pub mod header;
pub mod sections;
pub mod style;

use std::fs::File;
use std::path::Path;

use docx_rs::{Docx, PageMargin, RunFonts};

use crate::errors::AppError;
use crate::layout::PageConfig;
use crate::models::Profile;

/// Assembles the complete resume document for a profile.
pub fn build_document(profile: &Profile, page: &PageConfig, icons_dir: &Path) -> Docx {
    let margin = page.margin as i32;

    Docx::new()
        .default_fonts(RunFonts::new().ascii(page.font.ascii_name()))
        .page_size(page.page_width as u32, page.page_height as u32)
        .page_margin(
            PageMargin::new()
                .top(margin)
                .bottom(margin)
                .left(margin)
                .right(margin),
        )
        .add_table(header::heading_table(profile, page, icons_dir))
        .add_paragraph(style::spacer_paragraph())
        .add_table(style::rule_table(page.content_width()))
        .add_table(sections::body_table(&profile.data, page))
}

/// Writes the assembled document to disk.
pub fn save_document(mut document: Docx, path: &Path) -> Result<(), AppError> {
    let file = File::create(path)?;
    document
        .build()
        .pack(file)
        .map_err(docx_rs::DocxError::from)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{default_page_config, FontFamily};
    use indexmap::{indexmap, IndexMap};

    use crate::models::GroupBody;

    fn make_profile() -> Profile {
        Profile {
            name: "Jane Doe".to_string(),
            bio_data: indexmap! {
                "email".to_string() => "jane@example.com".to_string(),
            },
            data: indexmap! {
                "skills".to_string() => indexmap! {
                    "languages".to_string() => GroupBody::Entries(indexmap! {
                        "group_bold_value".to_string() => "Systems Programming".to_string(),
                        "detail".to_string() => "Rust, C".to_string(),
                    }),
                    "summary".to_string() => GroupBody::Line("Across the stack".to_string()),
                },
            },
        }
    }

    #[test]
    fn test_build_document_without_icons_dir() {
        let page = default_page_config(FontFamily::Calibri);
        // Builds even when the icons directory does not exist.
        let _ = build_document(&make_profile(), &page, Path::new("no-such-icons"));
    }

    #[test]
    fn test_save_document_writes_zip_container() {
        let page = default_page_config(FontFamily::Calibri);
        let document = build_document(&make_profile(), &page, Path::new("no-such-icons"));

        let dir = tempfile::tempdir().expect("temp dir");
        let out = dir.path().join("resume.docx");
        save_document(document, &out).expect("save should succeed");

        let bytes = std::fs::read(&out).expect("output should exist");
        assert!(
            bytes.starts_with(b"PK"),
            "document should be a ZIP container"
        );
        assert!(bytes.len() > 1000, "document should not be trivially small");
    }

    #[test]
    fn test_save_document_empty_data_section() {
        let page = default_page_config(FontFamily::Calibri);
        let profile = Profile {
            name: "Jane Doe".to_string(),
            bio_data: IndexMap::new(),
            data: IndexMap::new(),
        };
        let document = build_document(&profile, &page, Path::new("no-such-icons"));

        let dir = tempfile::tempdir().expect("temp dir");
        let out = dir.path().join("resume.docx");
        save_document(document, &out).expect("empty profile still renders a document");
    }

    #[test]
    fn test_save_document_bad_path_is_io_error() {
        let page = default_page_config(FontFamily::Calibri);
        let document = build_document(&make_profile(), &page, Path::new("no-such-icons"));
        let err = save_document(document, Path::new("no/such/dir/resume.docx"))
            .expect_err("unwritable path must fail");
        assert!(matches!(err, AppError::Io(_)), "got {err:?}");
    }
}
