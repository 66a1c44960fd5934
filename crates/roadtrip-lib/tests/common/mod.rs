//! Shared fixture helpers for integration tests.

use std::path::PathBuf;

use roadtrip_lib::{load_atlas, Atlas, DatasetPaths};

/// Path to the fixtures directory holding the three sample datasets.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

pub fn fixture_paths() -> DatasetPaths {
    DatasetPaths::in_dir(&fixtures_dir())
}

pub fn fixture_atlas() -> Atlas {
    load_atlas(&fixture_paths()).expect("fixture datasets load")
}
