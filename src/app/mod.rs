use crate::adapters::http::{create_router, AppState};
use crate::adapters::reference::{CachedReferenceStore, JsonReferenceStore};
use crate::adapters::storage::LocalStorage;
use crate::core::service::LookupService;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use axum::Router;

/// 依 `cache_mode` 選擇參考資料來源並建立查詢服務
///
/// `startup` 模式在此讀取一次資料表，資料缺失或格式錯誤會在伺服器開始監聽前失敗。
/// `reload` 模式要到第一個請求才會讀取。
pub async fn build_lookup_service<C: ConfigProvider>(config: &C) -> Result<LookupService> {
    let source = JsonReferenceStore::new(LocalStorage::new(config.data_dir()));

    if config.preload_enabled() {
        let cached = CachedReferenceStore::preload(&source).await?;
        Ok(LookupService::new(cached))
    } else {
        tracing::info!(
            "📂 Reference data is read from {} on every request",
            config.data_dir()
        );
        Ok(LookupService::new(source))
    }
}

pub async fn build_app<C: ConfigProvider>(config: &C) -> Result<Router> {
    let service = build_lookup_service(config).await?;
    Ok(create_router(AppState { service }, config.static_dir()))
}
