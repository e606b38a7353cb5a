use crate::domain::model::{FirstAidEntry, FirstAidResult, FirstAidTable};

/// 在主題名稱與步驟中做不分大小寫的子字串搜尋
///
/// 空白查詢不回傳任何結果；每個主題最多出現一次，依資料表順序排列。
pub fn search(table: &FirstAidTable, query: &str) -> Vec<FirstAidResult> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    table
        .iter()
        .filter(|(topic, entry)| matches(topic, entry, &needle))
        .map(|(topic, entry)| FirstAidResult {
            topic: topic.to_string(),
            steps: entry.steps.clone(),
            warning: entry.warning.clone(),
        })
        .collect()
}

fn matches(topic: &str, entry: &FirstAidEntry, needle: &str) -> bool {
    topic.to_lowercase().contains(needle)
        || entry
            .steps
            .iter()
            .any(|step| step.to_lowercase().contains(needle))
}
