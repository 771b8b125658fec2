//! Integration tests for server version resolution.
//!
//! These tests drive the public API with descriptors in the formats real
//! Bukkit-family servers report.

use server_version::{
    resolve, Comparison, Host, ResolveError, ResolveOptions, ServerVersion, StaticHost,
    VersionEntry, VersionParts, VersionResolver,
};
use std::sync::Arc;

#[test]
fn test_resolve_known_descriptors() {
    let cases = [
        ("git-Spigot-21fe707-e1ebe52 (MC: 1.17.1)", "v1_17_R1", ServerVersion::v1_17_1),
        ("git-Paper-196 (MC: 1.20.4)", "v1_20_R3", ServerVersion::v1_20_4),
        ("git-Purpur-1632 (MC: 1.19)", "v1_19_R1", ServerVersion::v1_19),
        ("git-Spigot-7754231-2c9e4f1 (MC: 1.16.5)", "v1_16_R3", ServerVersion::v1_16_R3),
        ("git-Spigot-f09662d-be557e6 (MC: 1.8.8)", "v1_8_R3", ServerVersion::v1_8_R3),
    ];

    for (descriptor, implementation_id, expected) in cases {
        let entry = resolve(
            &StaticHost::new(descriptor, implementation_id),
            &ResolveOptions::default(),
        )
        .unwrap();
        assert_eq!(entry, expected, "descriptor {descriptor}");
        assert_eq!(entry.resolved_id(), implementation_id);
    }
}

#[test]
fn test_parts_come_from_entry_name() {
    // 1.8.8 resolves through the implementation id, so the triple is the
    // catalog entry's, not the descriptor's.
    let host = StaticHost::new("git-Spigot (MC: 1.8.8)", "v1_8_R3");
    let resolver = VersionResolver::new(host);
    let entry = resolver.current().unwrap();
    assert_eq!(entry.version_parts(), VersionParts::new(1, 8, 3));
}

#[test]
fn test_parent_of_patch_release() {
    let host = StaticHost::new("git-Spigot (MC: 1.18.1)", "v1_18_R1");
    let resolver = VersionResolver::new(host);

    let parent = resolver.current_parent().unwrap();
    assert_eq!(parent, ServerVersion::v1_18);
    assert_eq!(parent.version_parts(), VersionParts::new(1, 18, 0));
    assert_eq!(parent.resolved_id(), "v1_18_R1");
}

#[test]
fn test_unknown_release_is_synthesized() {
    let host = StaticHost::from_package(
        "git-Paper-1 (MC: 1.99.2)",
        "org.bukkit.craftbukkit.v1_99_R1",
    );
    let resolver = VersionResolver::new(host);
    let entry = resolver.current().unwrap();

    assert!(matches!(entry, VersionEntry::Synthetic(_)));
    assert_eq!(entry.name(), "v1_99_2");
    assert_eq!(entry.version_parts(), VersionParts::new(1, 99, 2));
    assert_eq!(entry.resolved_id(), "v1_99_R1");
    assert_eq!(entry.parent(), entry);
    assert!(resolver.is_newer(ServerVersion::v1_21_1).unwrap());
}

#[test]
fn test_custom_descriptor_format() {
    let options = ResolveOptions {
        label: "Minecraft [".to_string(),
        terminator: "]".to_string(),
        ..Default::default()
    };
    let resolver =
        VersionResolver::with_options(StaticHost::new("Minecraft [1.19.4]", "v1_19_R3"), options);
    assert_eq!(resolver.current().unwrap(), ServerVersion::v1_19_4);
}

#[test]
fn test_malformed_descriptor_fails_loudly() {
    let resolver = VersionResolver::new(StaticHost::new("CraftBukkit version unknown", ""));
    let err = resolver.current().unwrap_err();
    assert!(matches!(err, ResolveError::MissingVersionToken { .. }));
    assert_eq!(err.description(), "Host descriptor has no version token");
    assert!(resolver.cached().is_none());
}

#[test]
fn test_shared_resolver_across_threads() {
    let resolver = Arc::new(VersionResolver::new(StaticHost::new(
        "git-Paper (MC: 1.20.6)",
        "v1_20_R4",
    )));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let resolver = Arc::clone(&resolver);
            std::thread::spawn(move || resolver.current_parent().unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), ServerVersion::v1_20_5);
    }
    assert_eq!(resolver.cached(), Some(VersionEntry::Known(ServerVersion::v1_20_6)));
}

#[test]
fn test_every_relation_against_catalog() {
    let resolver = VersionResolver::new(StaticHost::new("(MC: 1.18.2)", "v1_18_R2"));
    let current = resolver.current().unwrap().version_parts();

    for reference in ServerVersion::all().filter(|v| !v.is_unknown()) {
        for kind in Comparison::all() {
            assert_eq!(
                resolver.compare(kind, reference).unwrap(),
                kind.holds(current, reference.version_parts()),
                "{kind} against {reference}"
            );
        }
    }
}

#[test]
fn test_host_trait_object() {
    let host: Arc<dyn Host + Send + Sync> =
        Arc::new(StaticHost::new("(MC: 1.21)", "v1_21_R1"));
    let resolver = VersionResolver::new(host);
    assert_eq!(resolver.current().unwrap(), ServerVersion::v1_21);
    assert!(resolver.is_equal_or_newer(ServerVersion::v1_20_6).unwrap());
}

#[test]
fn test_exact_name_preferred_over_implementation_id() {
    let host = StaticHost::new("git-Spigot (MC: 1.18.2)", "v1_16_R3");
    let entry = resolve(&host, &ResolveOptions::default()).unwrap();
    assert_eq!(entry, ServerVersion::v1_18_2);
}

#[test]
fn test_explicit_zero_patch_is_synthesized() {
    // `1.17.0` builds the candidate `v1_17_0`, which is not a catalog name.
    let host = StaticHost::new("git-Spigot (MC: 1.17.0)", "v1_17_R1");
    let entry = resolve(&host, &ResolveOptions::default()).unwrap();

    assert!(entry.is_synthetic());
    assert_eq!(entry.name(), "v1_17");
    assert_ne!(entry, ServerVersion::v1_17);
    assert_eq!(entry.version_parts(), ServerVersion::v1_17.version_parts());
    assert!(Comparison::Equal.holds(
        entry.version_parts(),
        ServerVersion::v1_17.version_parts()
    ));
}
