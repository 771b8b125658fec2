//! Resolution of the running server's version, cached per resolver.

use crate::detection::{extract_version_token, match_catalog, parse_dotted};
use crate::{
    Comparison, Host, ResolveError, ResolveOptions, SyntheticVersion, VersionEntry,
};
use parking_lot::Mutex;
use tracing::{debug, info, warn};

/// Resolve the host's version without caching.
///
/// # Resolution Process
///
/// 1. Extract the version token from the host descriptor
/// 2. Parse the token into a numeric triple
/// 3. Match against the catalog: candidate name with the release suffix,
///    then the bare candidate name, then the host's implementation id
/// 4. Build a synthetic entry if nothing matched
///
/// # Errors
///
/// - `MissingVersionToken` if the descriptor lacks the delimiters
/// - `InvalidComponent` if the token is not dotted non-negative integers
///
/// # Example
///
/// ```rust
/// use server_version::{resolve, ResolveOptions, ServerVersion, StaticHost};
///
/// let host = StaticHost::new("git-Spigot-3e4a (MC: 1.18.2)", "v1_18_R2");
/// let entry = resolve(&host, &ResolveOptions::default()).unwrap();
/// assert_eq!(entry, ServerVersion::v1_18_2);
/// ```
pub fn resolve<H: Host + ?Sized>(
    host: &H,
    options: &ResolveOptions,
) -> Result<VersionEntry, ResolveError> {
    let descriptor = host.version_string();
    let token = extract_version_token(&descriptor, options)?;
    let parts = parse_dotted(token)?;
    let candidate = options.candidate_name(token);
    let implementation_id = host.implementation_id();
    debug!(%descriptor, token, %candidate, %implementation_id, "resolving server version");

    if let Some((version, rule)) =
        match_catalog(&candidate, &options.release_suffix, &implementation_id)
    {
        debug!(%version, %rule, "matched catalog entry");
        return Ok(VersionEntry::Known(version));
    }

    warn!(
        %parts,
        %implementation_id,
        "server version not in catalog, using synthetic entry"
    );
    Ok(VersionEntry::Synthetic(SyntheticVersion::new(
        parts,
        implementation_id,
    )))
}

/// Resolves the running server's version once and serves it from a cache.
///
/// The first successful call queries the host and commits the result.
/// Every later call returns that value without asking the host again.
/// Concurrent first callers serialize on an internal lock, so exactly one
/// resolution is committed and all callers observe it. A failed resolution
/// is not cached.
///
/// # Example
///
/// ```rust
/// use server_version::{ServerVersion, StaticHost, VersionResolver};
///
/// let resolver = VersionResolver::new(StaticHost::new(
///     "git-Paper-196 (MC: 1.20.4)",
///     "v1_20_R3",
/// ));
///
/// assert_eq!(resolver.current().unwrap(), ServerVersion::v1_20_4);
/// assert_eq!(resolver.current_parent().unwrap(), ServerVersion::v1_20_3);
/// assert!(resolver.is_newer(ServerVersion::v1_19_4).unwrap());
/// assert!(resolver.is_equal_or_older(ServerVersion::v1_20_4).unwrap());
/// ```
#[derive(Debug)]
pub struct VersionResolver<H> {
    host: H,
    options: ResolveOptions,
    current: Mutex<Option<VersionEntry>>,
}

impl<H: Host> VersionResolver<H> {
    /// Create a resolver with the default options.
    pub fn new(host: H) -> Self {
        Self::with_options(host, ResolveOptions::default())
    }

    /// Create a resolver with custom descriptor options.
    pub fn with_options(host: H, options: ResolveOptions) -> Self {
        Self {
            host,
            options,
            current: Mutex::new(None),
        }
    }

    /// The host this resolver queries.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The options used to read the host descriptor.
    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }

    /// The server's version, or its group representative if `want_parent`.
    pub fn current_version(&self, want_parent: bool) -> Result<VersionEntry, ResolveError> {
        let mut current = self.current.lock();
        let entry = match current.as_ref() {
            Some(entry) => entry.clone(),
            None => {
                let entry = resolve(&self.host, &self.options)?;
                info!(
                    version = %entry,
                    resolved_id = entry.resolved_id(),
                    synthetic = entry.is_synthetic(),
                    "resolved server version"
                );
                *current = Some(entry.clone());
                entry
            }
        };

        Ok(if want_parent { entry.parent() } else { entry })
    }

    /// The server's exact version entry.
    pub fn current(&self) -> Result<VersionEntry, ResolveError> {
        self.current_version(false)
    }

    /// The group representative of the server's version.
    pub fn current_parent(&self) -> Result<VersionEntry, ResolveError> {
        self.current_version(true)
    }

    /// The cached entry, if resolution has already happened.
    pub fn cached(&self) -> Option<VersionEntry> {
        self.current.lock().clone()
    }

    /// Drop the cached entry so the next call queries the host again.
    ///
    /// Intended for tests; production code resolves once per process.
    pub fn reset(&self) {
        *self.current.lock() = None;
    }

    /// Check the server's version against `reference`.
    ///
    /// Comparing against [`ServerVersion::Unknown`](crate::ServerVersion::Unknown)
    /// yields an answer, but not a meaningful one.
    pub fn compare(
        &self,
        kind: Comparison,
        reference: impl Into<VersionEntry>,
    ) -> Result<bool, ResolveError> {
        let reference = reference.into();
        let current = self.current()?.version_parts();
        let target = reference.version_parts();
        if current.is_unknown() || target.is_unknown() {
            warn!(%kind, %reference, "comparing against the unknown version sentinel");
        }
        Ok(kind.holds(current, target))
    }

    /// Whether the server runs exactly `reference`.
    pub fn is_equal(&self, reference: impl Into<VersionEntry>) -> Result<bool, ResolveError> {
        self.compare(Comparison::Equal, reference)
    }

    /// Whether the server is strictly newer than `reference`.
    pub fn is_newer(&self, reference: impl Into<VersionEntry>) -> Result<bool, ResolveError> {
        self.compare(Comparison::Newer, reference)
    }

    /// Whether the server is `reference` or newer.
    pub fn is_equal_or_newer(
        &self,
        reference: impl Into<VersionEntry>,
    ) -> Result<bool, ResolveError> {
        self.compare(Comparison::EqualOrNewer, reference)
    }

    /// Whether the server is strictly older than `reference`.
    pub fn is_older(&self, reference: impl Into<VersionEntry>) -> Result<bool, ResolveError> {
        self.compare(Comparison::Older, reference)
    }

    /// Whether the server is `reference` or older.
    pub fn is_equal_or_older(
        &self,
        reference: impl Into<VersionEntry>,
    ) -> Result<bool, ResolveError> {
        self.compare(Comparison::EqualOrOlder, reference)
    }
}
