//! Exposes the workspace `VERSION` file as `ECG_CLASSIFY_VERSION`.

use std::path::Path;

fn main() {
    let version_path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .expect("crate lives two levels below the workspace root")
        .join("VERSION");
    println!("cargo:rerun-if-changed={}", version_path.display());

    let version = std::fs::read_to_string(&version_path)
        .unwrap_or_else(|error| panic!("cannot read {}: {error}", version_path.display()));
    let version = version.trim();
    assert!(
        !version.is_empty() && version.chars().all(|c| c.is_ascii_alphanumeric() || ".-+".contains(c)),
        "VERSION must hold a single non-empty version token, got {version:?}"
    );

    println!("cargo:rustc-env=ECG_CLASSIFY_VERSION={version}");
}
