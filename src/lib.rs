//! # server-version
//!
//! Server version detection and ordered comparison for Minecraft servers.
//!
//! This crate works out which known server version the host is running,
//! from the host's version descriptor and its NMS implementation id, and
//! answers "is the server older/newer than X" questions against a static
//! catalog of versions.
//!
//! ## Features
//!
//! - `ServerVersion` enum cataloguing known versions and their NMS ids
//! - `VersionEntry` unifying catalog entries with synthetic ones built for
//!   versions the catalog does not know yet
//! - `VersionResolver` resolving the current version once and caching it
//! - `Comparison` relations over `(major, minor, patch)` triples
//!
//! ## Example
//!
//! ```rust
//! use server_version::{ServerVersion, StaticHost, VersionResolver};
//!
//! let host = StaticHost::from_package(
//!     "git-Spigot-21fe707-e1ebe52 (MC: 1.17.1)",
//!     "org.bukkit.craftbukkit.v1_17_R1",
//! );
//! let resolver = VersionResolver::new(host);
//!
//! let current = resolver.current().unwrap();
//! assert_eq!(current, ServerVersion::v1_17_1);
//! assert_eq!(current.resolved_id(), "v1_17_R1");
//!
//! if resolver.is_equal_or_newer(ServerVersion::v1_17).unwrap() {
//!     println!("{} supports the 1.17 API", current);
//! }
//! ```

mod detection;
mod entry;
mod error;
mod host;
mod options;
mod resolver;
mod server_version;
mod version_parts;

pub use entry::{SyntheticVersion, VersionEntry};
pub use error::ResolveError;
pub use host::{implementation_id_from_package, Host, StaticHost, CRAFTBUKKIT_PACKAGE_PREFIX};
pub use options::ResolveOptions;
pub use resolver::{resolve, VersionResolver};
pub use server_version::ServerVersion;
pub use version_parts::{Comparison, VersionParts};
