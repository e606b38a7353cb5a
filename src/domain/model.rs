use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

fn default_urgency() -> String {
    "normal".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialistEntry {
    pub keywords: Vec<String>,
    pub specialist: String,
    pub description: String,
    #[serde(default = "default_urgency")]
    pub urgency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FirstAidEntry {
    pub steps: Vec<String>,
    #[serde(default)]
    pub warning: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub symptom: String,
    pub specialist: String,
    pub description: String,
    pub urgency: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirstAidResult {
    pub topic: String,
    pub steps: Vec<String>,
    pub warning: String,
}

/// 依來源順序保存的字串鍵表格
///
/// 查詢時以第一個命中者為準，所以迭代順序就是行為的一部分。
/// 重複的鍵保留第一次出現的位置，值以最後一次為準。
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedTable<T> {
    entries: Vec<(String, T)>,
    // 鍵 -> entries 位置
    index: HashMap<String, usize>,
}

impl<T> OrderedTable<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    pub fn insert(&mut self, key: String, value: T) {
        match self.index.get(&key) {
            Some(&pos) => self.entries[pos].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.index.get(key).map(|&pos| &self.entries[pos].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for OrderedTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, T> FromIterator<(K, T)> for OrderedTable<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (key, value) in iter {
            table.insert(key.into(), value);
        }
        table
    }
}

struct OrderedTableVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for OrderedTableVisitor<T> {
    type Value = OrderedTable<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of named entries")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut table = OrderedTable::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, T>()? {
            table.insert(key, value);
        }
        Ok(table)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for OrderedTable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OrderedTableVisitor(PhantomData))
    }
}

pub type SymptomTable = OrderedTable<SpecialistEntry>;
pub type FirstAidTable = OrderedTable<FirstAidEntry>;

/// `medical_db.json` 的檔案結構
#[derive(Debug, Clone, Deserialize)]
pub struct MedicalDb {
    pub symptoms: SymptomTable,
}
