//! Catalog and synthetic version entries behind one interface.

use crate::{ServerVersion, VersionParts};
use std::fmt;

/// A server version built at runtime for a host the catalog does not know.
///
/// It is its own parent, and its implementation id is whatever the host
/// reported.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SyntheticVersion {
    name: String,
    resolved_id: String,
    parts: VersionParts,
}

impl SyntheticVersion {
    /// Build a synthetic entry for `parts`.
    ///
    /// The name is `v<major>_<minor>` when the patch is zero and
    /// `v<major>_<minor>_<patch>` otherwise.
    ///
    /// ```rust
    /// use server_version::{SyntheticVersion, VersionParts};
    ///
    /// let version = SyntheticVersion::new(VersionParts::new(1, 99, 2), "v1_99_R1");
    /// assert_eq!(version.name(), "v1_99_2");
    ///
    /// let version = SyntheticVersion::new(VersionParts::new(1, 99, 0), "v1_99_R1");
    /// assert_eq!(version.name(), "v1_99");
    /// ```
    pub fn new(parts: VersionParts, resolved_id: impl Into<String>) -> Self {
        let name = if parts.patch == 0 {
            format!("v{}_{}", parts.major, parts.minor)
        } else {
            format!("v{}_{}_{}", parts.major, parts.minor, parts.patch)
        };
        Self {
            name,
            resolved_id: resolved_id.into(),
            parts,
        }
    }

    /// Rendered display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Implementation id reported by the host.
    pub fn resolved_id(&self) -> &str {
        &self.resolved_id
    }

    /// Triple parsed from the host descriptor.
    pub fn version_parts(&self) -> VersionParts {
        self.parts
    }
}

/// A resolved server version: either a catalog entry or a synthetic one.
///
/// # Example
///
/// ```rust
/// use server_version::{ServerVersion, VersionEntry, VersionParts};
///
/// let entry = VersionEntry::from(ServerVersion::v1_18_1);
/// assert_eq!(entry.name(), "v1_18_1");
/// assert_eq!(entry.resolved_id(), "v1_18_R1");
/// assert_eq!(entry.parent(), VersionEntry::Known(ServerVersion::v1_18));
/// assert_eq!(entry.version_parts(), VersionParts::new(1, 18, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VersionEntry {
    /// An entry of the static catalog.
    Known(ServerVersion),
    /// An entry built for a version missing from the catalog.
    Synthetic(SyntheticVersion),
}

impl VersionEntry {
    /// Display name of the entry.
    pub fn name(&self) -> &str {
        match self {
            Self::Known(version) => version.display_name(),
            Self::Synthetic(version) => version.name(),
        }
    }

    /// Implementation id of the entry's group representative.
    pub fn resolved_id(&self) -> &str {
        match self {
            Self::Known(version) => version.resolved_id(),
            Self::Synthetic(version) => version.resolved_id(),
        }
    }

    /// The group representative; synthetic entries are their own parent.
    pub fn parent(&self) -> VersionEntry {
        match self {
            Self::Known(version) => Self::Known(version.parent()),
            Self::Synthetic(_) => self.clone(),
        }
    }

    /// The entry's numeric triple.
    pub fn version_parts(&self) -> VersionParts {
        match self {
            Self::Known(version) => version.version_parts(),
            Self::Synthetic(version) => version.version_parts(),
        }
    }

    /// The catalog variant, if this is a known entry.
    pub fn known(&self) -> Option<ServerVersion> {
        match self {
            Self::Known(version) => Some(*version),
            Self::Synthetic(_) => None,
        }
    }

    /// Whether this entry was built at runtime.
    pub fn is_synthetic(&self) -> bool {
        matches!(self, Self::Synthetic(_))
    }

    /// Whether this is the catalog's unknown sentinel.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Known(ServerVersion::Unknown))
    }
}

impl From<ServerVersion> for VersionEntry {
    fn from(version: ServerVersion) -> Self {
        Self::Known(version)
    }
}

impl From<SyntheticVersion> for VersionEntry {
    fn from(version: SyntheticVersion) -> Self {
        Self::Synthetic(version)
    }
}

impl PartialEq<ServerVersion> for VersionEntry {
    fn eq(&self, other: &ServerVersion) -> bool {
        self.known() == Some(*other)
    }
}

impl fmt::Display for VersionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
