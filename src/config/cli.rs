use crate::config::toml_config::TomlConfig;
use crate::config::ServerSettings;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "medi-guide")]
#[command(about = "Symptom-to-specialist and first aid lookup server")]
pub struct CliConfig {
    #[arg(long, help = "Socket address to listen on [default: 127.0.0.1:5000]")]
    pub bind: Option<String>,

    #[arg(long, help = "Directory holding medical_db.json and first_aid_db.json [default: ./data]")]
    pub data_dir: Option<String>,

    #[arg(long, help = "Directory served at / [default: ./static]")]
    pub static_dir: Option<String>,

    #[arg(long, help = "reload: read data on every request, startup: load once [default: reload]")]
    pub cache_mode: Option<String>,

    #[arg(long, help = "compact or json [default: compact]")]
    pub log_format: Option<String>,

    #[arg(long, help = "TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 合併設定：命令列參數 > TOML 檔案 > 預設值
    pub fn resolve(&self) -> Result<ServerSettings> {
        let mut settings = match &self.config {
            Some(path) => {
                let file_config = TomlConfig::from_file(path)?;
                file_config.validate()?;
                tracing::debug!("Loaded configuration file {}", path);
                file_config.into_settings()
            }
            None => ServerSettings::default(),
        };

        if let Some(bind) = &self.bind {
            settings.bind_address = bind.clone();
        }
        if let Some(data_dir) = &self.data_dir {
            settings.data_dir = data_dir.clone();
        }
        if let Some(static_dir) = &self.static_dir {
            settings.static_dir = static_dir.clone();
        }
        if let Some(cache_mode) = &self.cache_mode {
            settings.cache_mode = cache_mode.clone();
        }
        if let Some(log_format) = &self.log_format {
            settings.log_format = log_format.clone();
        }
        settings.verbose |= self.verbose;

        Ok(settings)
    }
}
