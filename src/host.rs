//! The host server the resolver asks for version information.

use std::sync::Arc;

/// Package prefix of the CraftBukkit server implementation classes.
pub const CRAFTBUKKIT_PACKAGE_PREFIX: &str = "org.bukkit.craftbukkit.";

/// Source of the raw version information of the running server.
///
/// Both calls are expected to be cheap in-memory reads whose answers do not
/// change while the process runs.
///
/// The resolver holds its cache lock while calling these methods, so an
/// implementation must not call back into the [`VersionResolver`](crate::VersionResolver)
/// that queries it; doing so deadlocks.
pub trait Host {
    /// One-line version descriptor, e.g. `git-Paper-196 (MC: 1.20.4)`.
    fn version_string(&self) -> String;

    /// Opaque implementation (NMS) id, e.g. `v1_20_R3`.
    fn implementation_id(&self) -> String;
}

impl<H: Host + ?Sized> Host for &H {
    fn version_string(&self) -> String {
        (**self).version_string()
    }

    fn implementation_id(&self) -> String {
        (**self).implementation_id()
    }
}

impl<H: Host + ?Sized> Host for Arc<H> {
    fn version_string(&self) -> String {
        (**self).version_string()
    }

    fn implementation_id(&self) -> String {
        (**self).implementation_id()
    }
}

/// A host that reports fixed strings.
///
/// # Example
///
/// ```rust
/// use server_version::{Host, StaticHost};
///
/// let host = StaticHost::from_package(
///     "git-Spigot-123 (MC: 1.17.1)",
///     "org.bukkit.craftbukkit.v1_17_R1",
/// );
/// assert_eq!(host.implementation_id(), "v1_17_R1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticHost {
    version: String,
    implementation_id: String,
}

impl StaticHost {
    /// Create a host reporting `version` and `implementation_id` verbatim.
    pub fn new(version: impl Into<String>, implementation_id: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            implementation_id: implementation_id.into(),
        }
    }

    /// Build a host from the fully qualified server implementation package.
    ///
    /// A package outside the CraftBukkit namespace is used verbatim.
    pub fn from_package(version: impl Into<String>, package: &str) -> Self {
        let implementation_id = implementation_id_from_package(package).unwrap_or(package);
        Self::new(version, implementation_id)
    }
}

impl Host for StaticHost {
    fn version_string(&self) -> String {
        self.version.clone()
    }

    fn implementation_id(&self) -> String {
        self.implementation_id.clone()
    }
}

/// Extract the implementation id from a CraftBukkit package name.
///
/// ```rust
/// use server_version::implementation_id_from_package;
///
/// assert_eq!(
///     implementation_id_from_package("org.bukkit.craftbukkit.v1_16_R3"),
///     Some("v1_16_R3")
/// );
/// assert_eq!(implementation_id_from_package("org.bukkit.craftbukkit"), None);
/// ```
pub fn implementation_id_from_package(package: &str) -> Option<&str> {
    package
        .strip_prefix(CRAFTBUKKIT_PACKAGE_PREFIX)
        .filter(|id| !id.is_empty())
}
