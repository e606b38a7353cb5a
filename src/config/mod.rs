#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_bind_address, validate_one_of, validate_path, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5000";
pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_STATIC_DIR: &str = "./static";

pub const CACHE_MODES: &[&str] = &["reload", "startup"];
pub const LOG_FORMATS: &[&str] = &["compact", "json"];

/// 合併命令列參數與配置檔後的最終執行設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    pub bind_address: String,
    pub data_dir: String,
    pub static_dir: String,
    pub cache_mode: String,
    pub log_format: String,
    pub verbose: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            data_dir: DEFAULT_DATA_DIR.to_string(),
            static_dir: DEFAULT_STATIC_DIR.to_string(),
            cache_mode: "reload".to_string(),
            log_format: "compact".to_string(),
            verbose: false,
        }
    }
}

impl ConfigProvider for ServerSettings {
    fn bind_address(&self) -> &str {
        &self.bind_address
    }

    fn data_dir(&self) -> &str {
        &self.data_dir
    }

    fn static_dir(&self) -> &str {
        &self.static_dir
    }

    fn cache_mode(&self) -> &str {
        &self.cache_mode
    }

    fn log_format(&self) -> &str {
        &self.log_format
    }
}

impl Validate for ServerSettings {
    fn validate(&self) -> Result<()> {
        validate_bind_address("bind_address", &self.bind_address)?;
        validate_path("data_dir", &self.data_dir)?;
        validate_path("static_dir", &self.static_dir)?;
        validate_one_of("cache_mode", &self.cache_mode, CACHE_MODES)?;
        validate_one_of("log_format", &self.log_format, LOG_FORMATS)?;
        Ok(())
    }
}
