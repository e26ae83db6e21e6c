use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::domain::common::entities::app_errors::CoreError;

pub mod entities;

pub const DEFAULT_API_URL: &str = "https://food-generator-server.herokuapp.com";
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(200);
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, Debug)]
pub struct FoodFinderConfig {
    pub catalog: CatalogConfig,
    pub export: ExportConfig,
    /// Quiet period after the last keystroke before a list query fires.
    pub debounce: Duration,
}

#[derive(Clone, Debug)]
pub struct CatalogConfig {
    pub base_url: String,
    pub timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct ExportConfig {
    pub download_dir: PathBuf,
}

impl Default for FoodFinderConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            export: ExportConfig::default(),
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            download_dir: PathBuf::from("."),
        }
    }
}

impl CatalogConfig {
    /// Parses the base URL, rejecting anything that is not http(s).
    pub fn validate(&self) -> Result<Url, CoreError> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| CoreError::InvalidConfig(format!("api url {}: {}", self.base_url, e)))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(CoreError::InvalidConfig(format!(
                "unsupported api url scheme: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_config_is_valid() {
        let url = CatalogConfig::default().validate().unwrap();
        assert_eq!(url.host_str(), Some("food-generator-server.herokuapp.com"));
    }

    #[test]
    fn test_validate_rejects_garbage_and_other_schemes() {
        let garbage = CatalogConfig {
            base_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            garbage.validate(),
            Err(CoreError::InvalidConfig(_))
        ));

        let ftp = CatalogConfig {
            base_url: "ftp://example.com".to_string(),
            ..Default::default()
        };
        assert!(matches!(ftp.validate(), Err(CoreError::InvalidConfig(_))));
    }
}
