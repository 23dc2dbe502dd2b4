//! Locations of the project's source, cache, and output directories

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    constants::{ARTIFACTS_DIR, CACHE_DIR, DEPLOYMENTS_DIR, SOURCES_DIR, TESTS_DIR},
    errors::ConfigError,
};

/// The directory layout of the project, all paths relative to the
/// project root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectPaths {
    /// The directory containing the Solidity sources
    pub sources: PathBuf,
    /// The directory containing the contract test suites
    pub tests: PathBuf,
    /// The directory containing the compilation cache
    pub cache: PathBuf,
    /// The directory compilation artifacts are written to
    pub artifacts: PathBuf,
    /// The directory per-network deployments files are written to
    pub deployments: PathBuf,
}

impl Default for ProjectPaths {
    fn default() -> Self {
        ProjectPaths {
            sources: PathBuf::from(SOURCES_DIR),
            tests: PathBuf::from(TESTS_DIR),
            cache: PathBuf::from(CACHE_DIR),
            artifacts: PathBuf::from(ARTIFACTS_DIR),
            deployments: PathBuf::from(DEPLOYMENTS_DIR),
        }
    }
}

impl ProjectPaths {
    /// Resolve each directory against the given project root
    pub fn rooted(&self, root: &Path) -> ProjectPaths {
        ProjectPaths {
            sources: root.join(&self.sources),
            tests: root.join(&self.tests),
            cache: root.join(&self.cache),
            artifacts: root.join(&self.artifacts),
            deployments: root.join(&self.deployments),
        }
    }

    /// Validate that every directory is set
    pub fn validate(&self) -> Result<(), ConfigError> {
        let entries = [
            ("sources", &self.sources),
            ("tests", &self.tests),
            ("cache", &self.cache),
            ("artifacts", &self.artifacts),
            ("deployments", &self.deployments),
        ];

        for (field, path) in entries {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "path {} must be non-empty",
                    field
                )));
            }
        }

        Ok(())
    }
}
