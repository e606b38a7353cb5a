use crate::config::{ServerSettings, CACHE_MODES, LOG_FORMATS};
use crate::utils::error::{GuideError, Result};
use crate::utils::validation::{validate_bind_address, validate_one_of, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub server: Option<ServerSection>,
    pub data: Option<DataSection>,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSection {
    pub bind: Option<String>,
    pub static_dir: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataSection {
    pub dir: Option<String>,
    pub cache_mode: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    pub format: Option<String>,
    pub verbose: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| GuideError::ConfigError {
            message: format!("Cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| GuideError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_DIR})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| GuideError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證有設定的欄位
    pub fn validate_config(&self) -> Result<()> {
        if let Some(server) = &self.server {
            if let Some(bind) = &server.bind {
                validate_bind_address("server.bind", bind)?;
            }
            if let Some(static_dir) = &server.static_dir {
                validate_path("server.static_dir", static_dir)?;
            }
        }

        if let Some(data) = &self.data {
            if let Some(dir) = &data.dir {
                validate_path("data.dir", dir)?;
            }
            if let Some(mode) = &data.cache_mode {
                validate_one_of("data.cache_mode", mode, CACHE_MODES)?;
            }
        }

        if let Some(format) = self.logging.as_ref().and_then(|l| l.format.as_ref()) {
            validate_one_of("logging.format", format, LOG_FORMATS)?;
        }

        Ok(())
    }

    /// 以預設值補齊未設定的欄位
    pub fn into_settings(self) -> ServerSettings {
        let mut settings = ServerSettings::default();

        if let Some(server) = self.server {
            if let Some(bind) = server.bind {
                settings.bind_address = bind;
            }
            if let Some(static_dir) = server.static_dir {
                settings.static_dir = static_dir;
            }
        }
        if let Some(data) = self.data {
            if let Some(dir) = data.dir {
                settings.data_dir = dir;
            }
            if let Some(mode) = data.cache_mode {
                settings.cache_mode = mode;
            }
        }
        if let Some(logging) = self.logging {
            if let Some(format) = logging.format {
                settings.log_format = format;
            }
            settings.verbose = logging.verbose.unwrap_or(false);
        }

        settings
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConfigProvider;

    #[test]
    fn test_parse_full_config() {
        let config = TomlConfig::from_toml_str(
            r#"
[server]
bind = "0.0.0.0:8080"
static_dir = "/srv/static"

[data]
dir = "/srv/data"
cache_mode = "startup"

[logging]
format = "json"
verbose = true
"#,
        )
        .unwrap();
        assert!(config.validate().is_ok());

        let settings = config.into_settings();
        assert_eq!(settings.bind_address, "0.0.0.0:8080");
        assert_eq!(settings.static_dir, "/srv/static");
        assert_eq!(settings.data_dir, "/srv/data");
        assert!(settings.preload_enabled());
        assert_eq!(settings.log_format, "json");
        assert!(settings.verbose);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.into_settings(), ServerSettings::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("MEDI_GUIDE_TEST_DATA_DIR", "/from/env");
        let config = TomlConfig::from_toml_str(
            r#"
[data]
dir = "${MEDI_GUIDE_TEST_DATA_DIR}"
"#,
        )
        .unwrap();
        assert_eq!(config.into_settings().data_dir, "/from/env");
    }

    #[test]
    fn test_unset_env_var_left_as_is() {
        let config = TomlConfig::from_toml_str(
            r#"
[data]
dir = "${MEDI_GUIDE_SURELY_UNSET_VAR}"
"#,
        )
        .unwrap();
        assert_eq!(
            config.into_settings().data_dir,
            "${MEDI_GUIDE_SURELY_UNSET_VAR}"
        );
    }

    #[test]
    fn test_invalid_values_rejected() {
        let config = TomlConfig::from_toml_str(
            r#"
[data]
cache_mode = "sometimes"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str(
            r#"
[server]
bind = "nowhere"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_error() {
        let err = TomlConfig::from_toml_str("[server\nbind = ").unwrap_err();
        assert!(matches!(err, GuideError::ConfigValidationError { .. }));
    }
}
