use std::env;
use std::path::PathBuf;

use crate::shared::constants::{ENV_DATASET_PATH, ENV_REPORT_REGIONS};

#[derive(Debug, Clone)]
pub struct Config {
    pub data: DataConfig,
    pub report: ReportConfig,
}

/// Where the hierarchy is loaded from
#[derive(Debug, Clone, Default)]
pub struct DataConfig {
    /// Alternate dataset file. `None` means the embedded dataset is used.
    pub dataset_path: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Print statistics for every region after the summary
    pub include_regions: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            data: DataConfig::from_env()?,
            report: ReportConfig::from_env()?,
        })
    }
}

impl DataConfig {
    pub fn from_env() -> Result<Self, String> {
        let dataset_path = env::var(ENV_DATASET_PATH)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Ok(Self { dataset_path })
    }
}

impl ReportConfig {
    const DEFAULT_INCLUDE_REGIONS: bool = true;

    pub fn from_env() -> Result<Self, String> {
        let include_regions = env::var(ENV_REPORT_REGIONS)
            .unwrap_or_else(|_| Self::DEFAULT_INCLUDE_REGIONS.to_string())
            .trim()
            .parse::<bool>()
            .map_err(|_| format!("{} must be 'true' or 'false'", ENV_REPORT_REGIONS))?;

        Ok(Self { include_regions })
    }
}
