use crate::domain::model::{FirstAidTable, SymptomTable};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn bind_address(&self) -> &str;
    fn data_dir(&self) -> &str;
    fn static_dir(&self) -> &str;
    fn cache_mode(&self) -> &str;
    fn log_format(&self) -> &str;

    /// `startup` 模式：啟動時載入一次資料表
    fn preload_enabled(&self) -> bool {
        self.cache_mode() == "startup"
    }
}

/// 兩張參考資料表的唯讀存取
#[async_trait]
pub trait ReferenceStore: Send + Sync {
    async fn symptom_table(&self) -> Result<Arc<SymptomTable>>;
    async fn first_aid_table(&self) -> Result<Arc<FirstAidTable>>;
}
