use crate::domain::model::{RecommendationResult, SpecialistEntry, SymptomTable};

pub const DEFAULT_SPECIALIST: &str = "General Practitioner";
pub const DEFAULT_DESCRIPTION: &str =
    "Please consult with a general practitioner for proper evaluation.";
pub const DEFAULT_URGENCY: &str = "normal";

/// 將每個症狀對應到專科醫師，依輸入順序每個症狀一筆結果
///
/// 症狀轉為小寫後，必須完全等於某分類關鍵字清單中的一項。
/// 分類依資料表順序比對，第一個命中者為準；沒有命中時回傳家庭醫師。
pub fn resolve<S: AsRef<str>>(table: &SymptomTable, symptoms: &[S]) -> Vec<RecommendationResult> {
    symptoms
        .iter()
        .map(|symptom| resolve_one(table, symptom.as_ref()))
        .collect()
}

fn resolve_one(table: &SymptomTable, symptom: &str) -> RecommendationResult {
    let normalized = symptom.to_lowercase();

    match find_category(table, &normalized) {
        Some((category, entry)) => {
            tracing::debug!("Symptom '{}' matched category '{}'", symptom, category);
            RecommendationResult {
                symptom: symptom.to_string(),
                specialist: entry.specialist.clone(),
                description: entry.description.clone(),
                urgency: entry.urgency.clone(),
            }
        }
        None => {
            tracing::debug!("Symptom '{}' matched no category, using default", symptom);
            RecommendationResult {
                symptom: symptom.to_string(),
                specialist: DEFAULT_SPECIALIST.to_string(),
                description: DEFAULT_DESCRIPTION.to_string(),
                urgency: DEFAULT_URGENCY.to_string(),
            }
        }
    }
}

fn find_category<'a>(
    table: &'a SymptomTable,
    normalized: &str,
) -> Option<(&'a str, &'a SpecialistEntry)> {
    table
        .iter()
        .find(|(_, entry)| entry.keywords.iter().any(|keyword| keyword == normalized))
}
