use crate::core::{resolver, search};
use crate::domain::model::{FirstAidResult, RecommendationResult};
use crate::domain::ports::ReferenceStore;
use crate::utils::error::Result;
use std::sync::Arc;

/// 以注入的參考資料來源執行兩種查詢
#[derive(Clone)]
pub struct LookupService {
    store: Arc<dyn ReferenceStore>,
}

impl LookupService {
    pub fn new<R: ReferenceStore + 'static>(store: R) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub async fn check_symptoms(&self, symptoms: &[String]) -> Result<Vec<RecommendationResult>> {
        let table = self.store.symptom_table().await?;
        let recommendations = resolver::resolve(&table, symptoms);
        tracing::debug!(
            "Resolved {} symptoms against {} categories",
            recommendations.len(),
            table.len()
        );
        Ok(recommendations)
    }

    pub async fn search_first_aid(&self, query: &str) -> Result<Vec<FirstAidResult>> {
        let table = self.store.first_aid_table().await?;
        let results = search::search(&table, query);
        tracing::debug!("First aid query '{}' matched {} topics", query, results.len());
        Ok(results)
    }
}
