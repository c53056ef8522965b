//! The serialized model bundle and its loader

use crate::encoder::ProductEncoder;
use crate::error::{ForecastError, Result};
use crate::regressor::LinearRegressor;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::OnceLock;

/// Fixed relative path of the artifact file, matching what the trainer writes
pub const ARTIFACT_FILE: &str = "production_ai_brain.json";

static ARTIFACT_CACHE: OnceLock<ModelArtifact> = OnceLock::new();

/// The trained bundle produced by the external training process.
///
/// One feature schema is canonical: `["Year", "Month_Num", "Product_ID"]`,
/// with the month map derived from the calendar rather than persisted here.
/// Artifacts written against the year-less schema are rejected by the
/// regressor's schema check at prediction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Trained regressor
    pub regressor: LinearRegressor,
    /// Product identity encoder fitted at training time
    pub encoder: ProductEncoder,
    /// Last calendar year covered by the training data
    pub last_year: i32,
}

impl ModelArtifact {
    /// Load an artifact from a file path.
    ///
    /// A missing file is a distinct, fatal condition: the error names the
    /// path and the remedial action. There is no degraded mode.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ForecastError::MissingArtifact {
                path: path.display().to_string(),
            });
        }

        let file = File::open(path)?;
        let artifact = serde_json::from_reader(BufReader::new(file))?;
        Ok(artifact)
    }

    /// Write the artifact to a file path
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load the artifact from [`ARTIFACT_FILE`] once per process.
    ///
    /// The first successful load is cached for the process's lifetime;
    /// every later call returns the identical object without touching disk.
    /// The cached artifact is read-only after load, so sharing it across
    /// interactive sessions needs no locking. A failed load is not cached.
    pub fn load_cached() -> Result<&'static ModelArtifact> {
        if let Some(artifact) = ARTIFACT_CACHE.get() {
            return Ok(artifact);
        }

        let artifact = Self::load(ARTIFACT_FILE)?;
        Ok(ARTIFACT_CACHE.get_or_init(|| artifact))
    }

    /// Year the default forecast targets: one past the training data
    pub fn default_forecast_year(&self) -> i32 {
        self.last_year + 1
    }
}
