pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::reference::{CachedReferenceStore, JsonReferenceStore};
pub use crate::adapters::storage::LocalStorage;
pub use crate::config::ServerSettings;
pub use crate::core::service::LookupService;
pub use crate::utils::error::{GuideError, Result};
