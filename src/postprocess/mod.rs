//! Post-processing of generation gateway output
//!
//! - `redaction`: banned-name replacement, applied unconditionally
//! - `metadata`: title / audio tag / image prompt markers
//! - `attributes`: style attributes from influence analysis text

pub mod attributes;
pub mod metadata;
pub mod redaction;

pub use attributes::extract_style_attributes;
pub use metadata::extract_metadata;
pub use redaction::{sanitize, Redactor};
