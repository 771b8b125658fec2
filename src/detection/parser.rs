//! Version token extraction and numeric triple parsing.

use crate::{ResolveError, ResolveOptions, VersionParts};
use regex::Regex;

/// Display name of the catalog's sentinel entry.
pub(crate) const UNKNOWN_NAME: &str = "UNKNOWN";

/// Extract the version token from a host descriptor.
///
/// The token is the shortest text between the configured label and
/// terminator, so `This server is running Paper version git-Paper-196 (MC: 1.20.4)`
/// yields `1.20.4` with the default options.
///
/// # Returns
///
/// The trimmed token, or `Err(ResolveError::MissingVersionToken)` if the
/// descriptor lacks either delimiter.
pub(crate) fn extract_version_token<'a>(
    descriptor: &'a str,
    options: &ResolveOptions,
) -> Result<&'a str, ResolveError> {
    let pattern = format!(
        "(?s){}(.*?){}",
        regex::escape(&options.label),
        regex::escape(&options.terminator)
    );
    let re = Regex::new(&pattern).expect("Escaped delimiters form a valid regex");

    re.captures(descriptor)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .ok_or_else(|| ResolveError::MissingVersionToken {
            descriptor: descriptor.to_string(),
            label: options.label.clone(),
            terminator: options.terminator.clone(),
        })
}

/// Parse up to three `separator`-delimited components into a triple.
///
/// Components beyond the third are ignored and missing trailing components
/// default to `0`. Every component that is read must be a non-negative
/// integer; `original` is only used for error reporting.
pub(crate) fn parse_components(
    input: &str,
    separator: char,
    original: &str,
) -> Result<VersionParts, ResolveError> {
    let mut parts = [0i32; 3];
    for (slot, component) in parts.iter_mut().zip(input.split(separator)) {
        let invalid = || ResolveError::InvalidComponent {
            input: original.to_string(),
            component: component.to_string(),
        };
        if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        *slot = component.parse().map_err(|_| invalid())?;
    }
    Ok(VersionParts::new(parts[0], parts[1], parts[2]))
}

/// Parse a dotted host version token such as `1.18.2`.
pub(crate) fn parse_dotted(token: &str) -> Result<VersionParts, ResolveError> {
    parse_components(token, '.', token)
}

/// Derive the numeric triple of a catalog display name.
///
/// The `v` prefix and the `R` internal-release marker are stripped before
/// splitting on `_`, so `v1_17_1` is `(1, 17, 1)`, `v1_18` is `(1, 18, 0)`
/// and `v1_8_R3` is `(1, 8, 3)`. The sentinel name yields
/// [`VersionParts::UNKNOWN`].
pub(crate) fn parse_display_name(name: &str) -> Result<VersionParts, ResolveError> {
    if name == UNKNOWN_NAME {
        return Ok(VersionParts::UNKNOWN);
    }
    let stripped = name.replace(['v', 'R'], "");
    parse_components(&stripped, '_', name)
}
