//! Detection implementation submodule.
//!
//! This module contains the internal implementation details for working out
//! which catalog entry describes the running server. It provides:
//!
//! - `extract_version_token`: Regex-based token extraction from the host descriptor
//! - `parse_dotted` / `parse_display_name`: numeric triple parsing
//! - `match_catalog`: ordered matching of a host report against the catalog

mod matcher;
mod parser;

pub(crate) use matcher::match_catalog;
pub(crate) use parser::{extract_version_token, parse_display_name, parse_dotted};
