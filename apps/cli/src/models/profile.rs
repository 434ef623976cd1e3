//! Input profile data model.
//!
//! A profile has three fields: a display name, a bio mapping (key → line, where
//! the key doubles as the icon identifier), and a nested data mapping of
//! sections. Map ordering is meaningful (sections and entries render in the
//! order they appear in the JSON file), so all maps are `IndexMap`.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Entry labels containing this marker render emphasized (bold).
pub const BOLD_MARKER: &str = "bold_value";

/// A top-level resume section: ordered groups of either single lines or
/// labeled entry maps.
pub type Section = IndexMap<String, GroupBody>;

/// The value side of a group inside a section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GroupBody {
    /// A single-line entry rendered as one gray row.
    Line(String),
    /// Labeled entries; labels carrying [`BOLD_MARKER`] render bold.
    Entries(IndexMap<String, String>),
}

/// The full input record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub bio_data: IndexMap<String, String>,
    pub data: IndexMap<String, Section>,
}

/// Returns true if an entry label requests emphasized rendering.
pub fn is_emphasized(label: &str) -> bool {
    label.contains(BOLD_MARKER)
}

impl Profile {
    /// Loads and validates a profile from a JSON file.
    ///
    /// Malformed input (missing file, bad JSON, wrong shapes) is fatal and
    /// propagates as an error.
    pub fn load(path: &Path) -> Result<Profile, AppError> {
        let raw = fs::read_to_string(path)?;
        let profile: Profile = serde_json::from_str(&raw)?;
        profile.validate()?;
        Ok(profile)
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.name.split_whitespace().next().is_none() {
            return Err(AppError::Validation(
                "profile name must contain at least one word".to_string(),
            ));
        }
        Ok(())
    }
}
