//! # Production Forecast
//!
//! A Rust library for rendering monthly production-quantity forecasts for
//! clothing products from a pre-trained regression artifact.
//!
//! ## Features
//!
//! - Serialized model artifact (regressor + product encoder + metadata)
//!   loaded once per process and cached for its lifetime
//! - Batch forecast over the full trained product vocabulary for a chosen
//!   month and year
//! - Terminal report views: metric tiles, horizontal bar chart, detail
//!   table, CSV export
//!
//! The artifact is produced by an external training process; this crate
//! performs no training and no feature engineering beyond encoding lookups.
//!
//! ## Quick Start
//!
//! ```no_run
//! use production_forecast::{engine, report, ModelArtifact};
//!
//! # fn run() -> production_forecast::Result<()> {
//! // Load the trained bundle (cached for the process's lifetime)
//! let artifact = ModelArtifact::load_cached()?;
//!
//! // Forecast every trained product for March of the default target year
//! let outcome = engine::forecast(artifact, "March", artifact.default_forecast_year())?;
//!
//! // Render the full report to stdout
//! report::render_report(&mut std::io::stdout(), &outcome)?;
//! # Ok(())
//! # }
//! ```

pub mod artifact;
pub mod calendar;
pub mod encoder;
pub mod engine;
pub mod error;
pub mod regressor;
pub mod report;

// Re-export commonly used types
pub use crate::artifact::{ModelArtifact, ARTIFACT_FILE};
pub use crate::encoder::ProductEncoder;
pub use crate::engine::{forecast, ForecastOutcome, ProductForecast};
pub use crate::error::{ForecastError, Result};
pub use crate::regressor::LinearRegressor;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
