//! Ordered matching of a host report against the catalog.

use crate::ServerVersion;

/// Which matching rule selected a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub(crate) enum MatchRule {
    /// Candidate name plus the release suffix.
    ReleaseSuffix,
    /// Candidate name as is.
    ExactName,
    /// The host's implementation id equals an entry's display name.
    ImplementationId,
}

/// Find the catalog entry for a host report.
///
/// Rules are tried in [`MatchRule`] order and the first hit wins. The
/// unknown sentinel never matches.
pub(crate) fn match_catalog(
    candidate: &str,
    release_suffix: &str,
    implementation_id: &str,
) -> Option<(ServerVersion, MatchRule)> {
    let with_suffix = format!("{candidate}{release_suffix}");
    let attempts = [
        (with_suffix.as_str(), MatchRule::ReleaseSuffix),
        (candidate, MatchRule::ExactName),
        (implementation_id, MatchRule::ImplementationId),
    ];

    for (name, rule) in attempts {
        if let Some(version) = ServerVersion::from_name(name).filter(|v| !v.is_unknown()) {
            return Some((version, rule));
        }
    }
    None
}
