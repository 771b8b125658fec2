//! Resolver options configuration.
//!
//! This module provides the [`ResolveOptions`] struct for configuring how
//! the host descriptor is read and matched against the catalog.

/// Configuration options for version resolution.
///
/// # Default Behavior
///
/// The defaults read Bukkit-style descriptors such as
/// `git-Spigot-21fe707-e1ebe52 (MC: 1.17.1)`: the version token sits
/// between `MC: ` and `)`, and catalog names are tried with the `_R1`
/// release suffix before the bare name.
///
/// # Example
///
/// ```rust
/// use server_version::ResolveOptions;
///
/// // Default Bukkit descriptor format
/// let opts = ResolveOptions::default();
/// assert_eq!(opts.label, "MC: ");
///
/// // A host that reports `Minecraft [1.20.4]`
/// let opts = ResolveOptions {
///     label: "Minecraft [".to_string(),
///     terminator: "]".to_string(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Text immediately preceding the version token.
    ///
    /// Default: `"MC: "`
    pub label: String,

    /// Text immediately following the version token.
    ///
    /// Default: `")"`
    pub terminator: String,

    /// Suffix appended to the candidate name for the first match attempt.
    ///
    /// Default: `"_R1"`
    pub release_suffix: String,

    /// Prefix that turns a dotted token into a candidate display name.
    ///
    /// Default: `"v"`
    pub name_prefix: String,
}

impl ResolveOptions {
    /// Candidate display name for a dotted token: `1.18.2` becomes `v1_18_2`.
    pub fn candidate_name(&self, token: &str) -> String {
        format!("{}{}", self.name_prefix, token.replace('.', "_"))
    }
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            label: "MC: ".to_string(),
            terminator: ")".to_string(),
            release_suffix: "_R1".to_string(),
            name_prefix: "v".to_string(),
        }
    }
}
