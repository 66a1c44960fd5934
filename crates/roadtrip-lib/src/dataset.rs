use std::env;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use crate::error::{Error, Result};

/// Default filename for the land-border listing.
pub const BORDERS_FILENAME: &str = "borders.txt";
/// Default filename for the capital distance CSV.
pub const CAPITALS_FILENAME: &str = "capdist.csv";
/// Default filename for the country name TSV.
pub const STATE_NAMES_FILENAME: &str = "state_name.tsv";

/// Environment variable naming the directory that holds the three datasets.
pub const DATA_DIR_ENV: &str = "ROADTRIP_DATA_DIR";

/// Paths to the three input datasets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    pub borders: PathBuf,
    pub capitals: PathBuf,
    pub state_names: PathBuf,
}

impl DatasetPaths {
    /// Use the default filenames inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            borders: dir.join(BORDERS_FILENAME),
            capitals: dir.join(CAPITALS_FILENAME),
            state_names: dir.join(STATE_NAMES_FILENAME),
        }
    }

    /// Fail with [`Error::DatasetNotFound`] for the first missing file.
    pub fn ensure_exists(&self) -> Result<()> {
        for path in [&self.borders, &self.capitals, &self.state_names] {
            if !path.is_file() {
                return Err(Error::DatasetNotFound { path: path.clone() });
            }
        }
        Ok(())
    }

    fn all_present(&self) -> bool {
        self.ensure_exists().is_ok()
    }
}

/// Resolve the platform-specific data directory for the datasets.
pub fn default_data_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("org", "roadtrip", "roadtrip").ok_or(Error::DataDirUnavailable)?;
    Ok(dirs.data_dir().to_path_buf())
}

/// Resolve the directory holding the datasets.
///
/// The resolution order is:
/// 1. Explicit `target` argument when provided.
/// 2. `ROADTRIP_DATA_DIR` environment variable.
/// 3. The platform data directory, when it holds all three files.
/// 4. The current working directory.
pub fn resolve_data_dir(target: Option<&Path>) -> PathBuf {
    if let Some(explicit) = target {
        return explicit.to_path_buf();
    }

    if let Some(env_path) = env::var_os(DATA_DIR_ENV) {
        return PathBuf::from(env_path);
    }

    if let Ok(dir) = default_data_dir() {
        if DatasetPaths::in_dir(&dir).all_present() {
            return dir;
        }
        debug!(dir = %dir.display(), "platform data directory lacks datasets");
    }

    PathBuf::from(".")
}

/// Resolve the dataset paths and check that all three files exist.
pub fn resolve_dataset(target: Option<&Path>) -> Result<DatasetPaths> {
    let paths = DatasetPaths::in_dir(&resolve_data_dir(target));
    paths.ensure_exists()?;
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn in_dir_uses_default_filenames() {
        let paths = DatasetPaths::in_dir(Path::new("/data"));
        assert_eq!(paths.borders, Path::new("/data/borders.txt"));
        assert_eq!(paths.capitals, Path::new("/data/capdist.csv"));
        assert_eq!(paths.state_names, Path::new("/data/state_name.tsv"));
    }

    #[test]
    fn explicit_target_wins() {
        assert_eq!(
            resolve_data_dir(Some(Path::new("/explicit"))),
            PathBuf::from("/explicit")
        );
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().expect("create temp dir");
        fs::write(dir.path().join(BORDERS_FILENAME), "").expect("write borders");
        fs::write(dir.path().join(CAPITALS_FILENAME), "").expect("write capdist");

        let err = resolve_dataset(Some(dir.path())).expect_err("state names missing");
        match err {
            Error::DatasetNotFound { path } => {
                assert_eq!(path, dir.path().join(STATE_NAMES_FILENAME));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn complete_directory_resolves() {
        let dir = tempfile::tempdir().expect("create temp dir");
        for name in [BORDERS_FILENAME, CAPITALS_FILENAME, STATE_NAMES_FILENAME] {
            fs::write(dir.path().join(name), "").expect("write dataset file");
        }
        let paths = resolve_dataset(Some(dir.path())).expect("all files present");
        assert_eq!(paths, DatasetPaths::in_dir(dir.path()));
    }
}
