//! Numeric version triples and the ordering relations between them.

use crate::ResolveError;
use semver::Version;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A `(major, minor, patch)` version triple.
///
/// Triples order lexicographically: major first, then minor, then patch.
/// The [`VersionParts::UNKNOWN`] sentinel `(-1, -1, -1)` sorts below every
/// real version, but comparisons against it carry no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionParts {
    /// Major component.
    pub major: i32,
    /// Minor component.
    pub minor: i32,
    /// Patch component, `0` when the version has no third component.
    pub patch: i32,
}

impl VersionParts {
    /// Sentinel triple reported by the unknown catalog entry.
    pub const UNKNOWN: Self = Self::new(-1, -1, -1);

    /// Create a triple from its components.
    pub const fn new(major: i32, minor: i32, patch: i32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Whether this is the [`VersionParts::UNKNOWN`] sentinel.
    pub fn is_unknown(&self) -> bool {
        *self == Self::UNKNOWN
    }

    /// Convert to a [`semver::Version`].
    ///
    /// Returns `None` if any component is negative, which is only the case
    /// for the unknown sentinel.
    pub fn to_semver(&self) -> Option<Version> {
        let major = u64::try_from(self.major).ok()?;
        let minor = u64::try_from(self.minor).ok()?;
        let patch = u64::try_from(self.patch).ok()?;
        Some(Version::new(major, minor, patch))
    }
}

impl Ord for VersionParts {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
    }
}

impl PartialOrd for VersionParts {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for VersionParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl TryFrom<&Version> for VersionParts {
    type Error = ResolveError;

    /// Pre-release and build metadata are ignored.
    fn try_from(version: &Version) -> Result<Self, Self::Error> {
        let component = |value: u64| {
            i32::try_from(value).map_err(|_| ResolveError::InvalidComponent {
                input: version.to_string(),
                component: value.to_string(),
            })
        };
        Ok(Self::new(
            component(version.major)?,
            component(version.minor)?,
            component(version.patch)?,
        ))
    }
}

/// Ordering relation of the current version against a reference version.
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
    strum::Display,
)]
pub enum Comparison {
    /// Same major, minor and patch.
    Equal,
    /// Older than, or equal to, the reference.
    EqualOrOlder,
    /// Strictly older than the reference.
    Older,
    /// Newer than, or equal to, the reference.
    EqualOrNewer,
    /// Strictly newer than the reference.
    Newer,
}

impl Comparison {
    /// Evaluate this relation for `current` against `target`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use server_version::{Comparison, VersionParts};
    ///
    /// let current = VersionParts::new(2, 0, 0);
    /// let target = VersionParts::new(1, 99, 99);
    /// assert!(Comparison::Newer.holds(current, target));
    /// assert!(!Comparison::EqualOrOlder.holds(current, target));
    /// ```
    pub fn holds(self, current: VersionParts, target: VersionParts) -> bool {
        let ordering = current.cmp(&target);
        match self {
            Self::Equal => ordering == Ordering::Equal,
            Self::EqualOrOlder => ordering != Ordering::Greater,
            Self::Older => ordering == Ordering::Less,
            Self::EqualOrNewer => ordering != Ordering::Less,
            Self::Newer => ordering == Ordering::Greater,
        }
    }

    /// Iterator over every relation.
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as strum::IntoEnumIterator>::iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holds(kind: Comparison, current: (i32, i32, i32), target: (i32, i32, i32)) -> bool {
        kind.holds(
            VersionParts::new(current.0, current.1, current.2),
            VersionParts::new(target.0, target.1, target.2),
        )
    }

    #[test]
    fn test_equal_triples() {
        let v = (1, 17, 1);
        assert!(holds(Comparison::Equal, v, v));
        assert!(holds(Comparison::EqualOrOlder, v, v));
        assert!(holds(Comparison::EqualOrNewer, v, v));
        assert!(!holds(Comparison::Older, v, v));
        assert!(!holds(Comparison::Newer, v, v));
    }

    #[test]
    fn test_major_short_circuits() {
        assert!(holds(Comparison::Newer, (2, 0, 0), (1, 99, 99)));
        assert!(holds(Comparison::EqualOrNewer, (2, 0, 0), (1, 99, 99)));
        assert!(!holds(Comparison::Older, (2, 0, 0), (1, 99, 99)));
        assert!(holds(Comparison::Older, (1, 99, 99), (2, 0, 0)));
    }

    #[test]
    fn test_minor_decides_when_major_equal() {
        assert!(holds(Comparison::Newer, (1, 18, 0), (1, 17, 9)));
        assert!(holds(Comparison::Older, (1, 17, 9), (1, 18, 0)));
        assert!(!holds(Comparison::EqualOrOlder, (1, 18, 0), (1, 17, 9)));
    }

    #[test]
    fn test_patch_tie_break() {
        let current = (1, 17, 5);
        let target = (1, 17, 3);
        assert!(holds(Comparison::Newer, current, target));
        assert!(holds(Comparison::EqualOrNewer, current, target));
        assert!(!holds(Comparison::Older, current, target));
        assert!(!holds(Comparison::EqualOrOlder, current, target));
        assert!(!holds(Comparison::Equal, current, target));
    }

    #[test]
    fn test_relations_are_consistent() {
        let samples = [(1, 8, 3), (1, 17, 0), (1, 17, 1), (1, 18, 2), (2, 0, 0)];
        for a in samples {
            for b in samples {
                let older = holds(Comparison::Older, a, b);
                let equal = holds(Comparison::Equal, a, b);
                let newer = holds(Comparison::Newer, a, b);
                assert_eq!(
                    [older, equal, newer].iter().filter(|x| **x).count(),
                    1,
                    "{a:?} vs {b:?}"
                );
                assert_eq!(holds(Comparison::EqualOrOlder, a, b), older || equal);
                assert_eq!(holds(Comparison::EqualOrNewer, a, b), newer || equal);
            }
        }
    }

    #[test]
    fn test_unknown_sorts_lowest() {
        assert!(VersionParts::UNKNOWN < VersionParts::new(0, 0, 0));
        assert!(VersionParts::UNKNOWN.is_unknown());
        assert!(!VersionParts::new(1, 17, 0).is_unknown());
    }

    #[test]
    fn test_display() {
        assert_eq!(VersionParts::new(1, 18, 2).to_string(), "1.18.2");
        assert_eq!(Comparison::EqualOrNewer.to_string(), "EqualOrNewer");
    }

    #[test]
    fn test_semver_conversion() {
        let parts = VersionParts::new(1, 20, 4);
        assert_eq!(parts.to_semver(), Some(Version::new(1, 20, 4)));
        assert_eq!(VersionParts::UNKNOWN.to_semver(), None);

        let version = Version::parse("1.19.3-pre1").unwrap();
        assert_eq!(
            VersionParts::try_from(&version).unwrap(),
            VersionParts::new(1, 19, 3)
        );

        let huge = Version::new(u64::MAX, 0, 0);
        assert!(matches!(
            VersionParts::try_from(&huge),
            Err(ResolveError::InvalidComponent { .. })
        ));
    }

    #[test]
    fn test_all_relations() {
        assert_eq!(Comparison::all().count(), 5);
    }

    #[test]
    fn test_serde_round_trip() {
        let parts = VersionParts::new(1, 17, 1);
        let json = serde_json::to_string(&parts).unwrap();
        assert_eq!(json, r#"{"major":1,"minor":17,"patch":1}"#);
        let back: VersionParts = serde_json::from_str(&json).unwrap();
        assert_eq!(back, parts);
    }
}
