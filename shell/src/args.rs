use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use food_finder_core::domain::common::{
    CatalogConfig, DEFAULT_API_URL, ExportConfig, FoodFinderConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "food-finder",
    version,
    about = "Search the food catalog and download food images"
)]
pub struct Args {
    /// Base URL of the food catalog API
    #[arg(long, env = "FOOD_FINDER_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Quiet period after typing before suggestions are fetched
    #[arg(long, env = "FOOD_FINDER_DEBOUNCE_MS", default_value_t = 200)]
    pub debounce_ms: u64,

    #[arg(long, env = "FOOD_FINDER_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Where downloaded images are written
    #[arg(long, env = "FOOD_FINDER_DOWNLOAD_DIR", default_value = ".")]
    pub download_dir: PathBuf,

    /// Used when RUST_LOG is not set
    #[arg(long, env = "FOOD_FINDER_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    #[arg(long, env = "FOOD_FINDER_LOG_JSON")]
    pub log_json: bool,
}

impl From<Args> for FoodFinderConfig {
    fn from(args: Args) -> Self {
        Self {
            catalog: CatalogConfig {
                base_url: args.api_url,
                timeout: Duration::from_secs(args.timeout_secs),
            },
            export: ExportConfig {
                download_dir: args.download_dir,
            },
            debounce: Duration::from_millis(args.debounce_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_map_to_config() {
        let args = Args::try_parse_from([
            "food-finder",
            "--api-url",
            "http://localhost:8080",
            "--debounce-ms",
            "350",
            "--timeout-secs",
            "5",
            "--download-dir",
            "/tmp/food",
        ])
        .unwrap();

        let config = FoodFinderConfig::from(args);
        assert_eq!(config.catalog.base_url, "http://localhost:8080");
        assert_eq!(config.catalog.timeout, Duration::from_secs(5));
        assert_eq!(config.debounce, Duration::from_millis(350));
        assert_eq!(config.export.download_dir, PathBuf::from("/tmp/food"));
    }

    #[test]
    fn test_rejects_non_numeric_debounce() {
        assert!(Args::try_parse_from(["food-finder", "--debounce-ms", "soon"]).is_err());
    }
}
