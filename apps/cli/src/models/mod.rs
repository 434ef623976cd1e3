pub mod profile;

pub use profile::{is_emphasized, GroupBody, Profile, Section};
