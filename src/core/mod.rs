pub mod resolver;
pub mod search;
pub mod service;

pub use crate::domain::model::{FirstAidResult, RecommendationResult};
pub use crate::domain::ports::{ConfigProvider, ReferenceStore, Storage};
pub use crate::utils::error::Result;
