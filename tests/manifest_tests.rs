// Host-side checks that the wasm package keeps its dependency list lean.
// Math and collection crates belong to folio-core only.

static MANIFEST: &str = include_str!("../Cargo.toml");

fn section<'a>(manifest: &'a str, header: &str) -> &'a str {
    let start = manifest
        .find(header)
        .map(|i| i + header.len())
        .unwrap_or(manifest.len());
    let rest = &manifest[start..];
    let end = rest.find("\n[").unwrap_or(rest.len());
    &rest[..end]
}

#[test]
fn root_package_does_not_pull_core_only_crates() {
    let deps = section(MANIFEST, "\n[dependencies]");
    assert!(!deps.is_empty());
    for line in deps.lines().map(str::trim_start) {
        assert!(!line.starts_with("glam"), "root depends on glam: {line}");
        assert!(!line.starts_with("smallvec"), "root depends on smallvec: {line}");
    }
}

#[test]
fn unused_web_sys_features_stay_off() {
    for feature in ["\"Performance\"", "\"DomRect\""] {
        assert!(!MANIFEST.contains(feature), "{feature} is enabled");
    }
}
