use crate::domain::model::{FirstAidTable, MedicalDb, SymptomTable};
use crate::domain::ports::{ReferenceStore, Storage};
use crate::utils::error::{GuideError, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::sync::Arc;

pub const MEDICAL_DB_FILE: &str = "medical_db.json";
pub const FIRST_AID_DB_FILE: &str = "first_aid_db.json";

/// 每次呼叫都重新讀取 JSON 檔案
pub struct JsonReferenceStore<S: Storage> {
    storage: S,
}

impl<S: Storage> JsonReferenceStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    async fn load_json<T: DeserializeOwned>(&self, file: &str) -> Result<T> {
        let bytes = self
            .storage
            .read_file(file)
            .await
            .map_err(|e| GuideError::data_unavailable(file, e))?;
        serde_json::from_slice(&bytes).map_err(|e| GuideError::data_unavailable(file, e))
    }
}

#[async_trait]
impl<S: Storage> ReferenceStore for JsonReferenceStore<S> {
    async fn symptom_table(&self) -> Result<Arc<SymptomTable>> {
        let db: MedicalDb = self.load_json(MEDICAL_DB_FILE).await?;
        tracing::debug!("Loaded {} symptom categories", db.symptoms.len());
        Ok(Arc::new(db.symptoms))
    }

    async fn first_aid_table(&self) -> Result<Arc<FirstAidTable>> {
        let table: FirstAidTable = self.load_json(FIRST_AID_DB_FILE).await?;
        tracing::debug!("Loaded {} first aid topics", table.len());
        Ok(Arc::new(table))
    }
}

/// 啟動時載入一次，之後以唯讀方式共用的資料表
#[derive(Debug, Clone)]
pub struct CachedReferenceStore {
    symptoms: Arc<SymptomTable>,
    first_aid: Arc<FirstAidTable>,
}

impl CachedReferenceStore {
    pub async fn preload<R: ReferenceStore + ?Sized>(source: &R) -> Result<Self> {
        let symptoms = source.symptom_table().await?;
        let first_aid = source.first_aid_table().await?;
        tracing::info!(
            "📚 Cached {} symptom categories and {} first aid topics",
            symptoms.len(),
            first_aid.len()
        );
        Ok(Self {
            symptoms,
            first_aid,
        })
    }

    pub fn from_tables(symptoms: SymptomTable, first_aid: FirstAidTable) -> Self {
        Self {
            symptoms: Arc::new(symptoms),
            first_aid: Arc::new(first_aid),
        }
    }
}

#[async_trait]
impl ReferenceStore for CachedReferenceStore {
    async fn symptom_table(&self) -> Result<Arc<SymptomTable>> {
        Ok(Arc::clone(&self.symptoms))
    }

    async fn first_aid_table(&self) -> Result<Arc<FirstAidTable>> {
        Ok(Arc::clone(&self.first_aid))
    }
}
