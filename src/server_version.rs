//! Catalog of known server versions.

use crate::detection::parse_display_name;
use crate::VersionParts;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// A known server version.
///
/// Each variant is named after its display name, which is also its string
/// form (`ServerVersion::v1_17_1.to_string() == "v1_17_1"`). Several display
/// names can share one internal implementation id: patch releases that
/// reuse their minor release's NMS package point at it as their parent.
///
/// The legacy variants (`v1_8_R3` through `v1_16_R3`) are named after their
/// NMS package directly. Their numeric triple drops the `R` marker, so
/// `v1_8_R3` reports `(1, 8, 3)`.
///
/// # Example
///
/// ```rust
/// use server_version::{ServerVersion, VersionParts};
///
/// let version = ServerVersion::v1_17_1;
/// assert_eq!(version.parent(), ServerVersion::v1_17);
/// assert_eq!(version.resolved_id(), "v1_17_R1");
/// assert_eq!(version.version_parts(), VersionParts::new(1, 17, 1));
/// ```
#[allow(non_camel_case_types)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::Display,
)]
#[non_exhaustive]
pub enum ServerVersion {
    /// Sentinel for an unrecognised server. Reports `(-1, -1, -1)`.
    #[strum(serialize = "UNKNOWN")]
    #[serde(rename = "UNKNOWN")]
    Unknown,
    v1_8_R3,
    v1_9_R1,
    v1_9_R2,
    v1_10_R1,
    v1_11_R1,
    v1_12_R1,
    v1_13_R1,
    v1_13_R2,
    v1_14_R1,
    v1_15_R1,
    v1_16_R1,
    v1_16_R2,
    v1_16_R3,
    v1_17,
    v1_17_1,
    v1_18,
    v1_18_1,
    v1_18_2,
    v1_19,
    v1_19_1,
    v1_19_2,
    v1_19_3,
    v1_19_4,
    v1_20,
    v1_20_1,
    v1_20_2,
    v1_20_3,
    v1_20_4,
    v1_20_5,
    v1_20_6,
    v1_21,
    v1_21_1,
}

impl ServerVersion {
    /// The catalog display name, e.g. `"v1_18_2"`.
    pub fn display_name(&self) -> &'static str {
        self.into()
    }

    /// Look up a catalog entry by its exact display name.
    ///
    /// ```rust
    /// use server_version::ServerVersion;
    ///
    /// assert_eq!(ServerVersion::from_name("v1_18_2"), Some(ServerVersion::v1_18_2));
    /// assert_eq!(ServerVersion::from_name("1.18.2"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }

    /// The group representative of this entry.
    ///
    /// Entries that reuse another release's implementation return that
    /// release; everything else is its own parent. A parent's parent is
    /// always itself.
    pub fn parent(&self) -> Self {
        match self {
            Self::v1_17_1 => Self::v1_17,
            Self::v1_18_1 => Self::v1_18,
            Self::v1_19_1 | Self::v1_19_2 => Self::v1_19,
            Self::v1_20_1 => Self::v1_20,
            Self::v1_20_4 => Self::v1_20_3,
            Self::v1_20_6 => Self::v1_20_5,
            Self::v1_21_1 => Self::v1_21,
            other => *other,
        }
    }

    /// The internal (NMS) implementation id, taken from the parent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use server_version::ServerVersion;
    ///
    /// assert_eq!(ServerVersion::v1_17.resolved_id(), "v1_17_R1");
    /// assert_eq!(ServerVersion::v1_17_1.resolved_id(), "v1_17_R1");
    /// assert_eq!(ServerVersion::v1_16_R3.resolved_id(), "v1_16_R3");
    /// ```
    pub fn resolved_id(&self) -> &'static str {
        self.parent().own_resolved_id()
    }

    /// The numeric triple derived from the display name.
    ///
    /// # Panics
    ///
    /// Never for the shipped catalog; every display name is checked by the
    /// catalog tests.
    pub fn version_parts(&self) -> VersionParts {
        parse_display_name(self.display_name()).expect("Catalog display names are numeric")
    }

    /// Whether this is the [`ServerVersion::Unknown`] sentinel.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Whether this entry is named after its NMS package (1.16.5 and older).
    pub fn is_legacy(&self) -> bool {
        !self.is_unknown() && self.display_name().contains("_R")
    }

    /// Iterator over the catalog in definition order, sentinel first.
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }

    fn own_resolved_id(&self) -> &'static str {
        match self {
            Self::v1_17 => "v1_17_R1",
            Self::v1_18 => "v1_18_R1",
            Self::v1_18_2 => "v1_18_R2",
            Self::v1_19 => "v1_19_R1",
            Self::v1_19_3 => "v1_19_R2",
            Self::v1_19_4 => "v1_19_R3",
            Self::v1_20 => "v1_20_R1",
            Self::v1_20_2 => "v1_20_R2",
            Self::v1_20_3 => "v1_20_R3",
            Self::v1_20_5 => "v1_20_R4",
            Self::v1_21 => "v1_21_R1",
            other => other.display_name(),
        }
    }
}
