//! Conformance tests that run YAML fixtures against daymatch
//!
//! Run with: cargo test -p daymatch-test --test conformance --features daymatch-test/fixtures

#![cfg(feature = "fixtures")]

use daymatch_test::fixture::Fixture;
use std::fs;
use std::path::{Path, PathBuf};

/// The fixtures directory at the workspace root.
fn fixtures_dir() -> PathBuf {
    // ext/test -> ext -> workspace root
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(Path::parent)
        .expect("could not find workspace root")
        .join("fixtures")
}

/// Load and run all fixtures in a directory.
fn run_fixtures_in_dir(dir: &Path) {
    assert!(dir.exists(), "fixtures directory does not exist: {}", dir.display());

    let mut ran = 0;
    for entry in fs::read_dir(dir).expect("read dir") {
        let path = entry.expect("dir entry").path();

        if path.extension().is_some_and(|e| e == "yaml" || e == "yml") {
            println!("Running fixture: {}", path.display());

            let yaml = fs::read_to_string(&path).expect("read yaml");
            let fixtures = Fixture::from_yaml_multi(&yaml).unwrap_or_else(|e| {
                panic!("Failed to parse {}: {}", path.display(), e);
            });

            for fixture in fixtures {
                println!("  Running: {}", fixture.name);
                fixture.run_and_assert();
                ran += 1;
            }
        }
    }
    assert!(ran > 0, "no fixtures found in {}", dir.display());
}

#[test]
fn test_flags() {
    run_fixtures_in_dir(&fixtures_dir().join("01_flags"));
}

#[test]
fn test_days_of_week() {
    run_fixtures_in_dir(&fixtures_dir().join("02_days_of_week"));
}

#[test]
fn test_config() {
    run_fixtures_in_dir(&fixtures_dir().join("03_config"));
}
