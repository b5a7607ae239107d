use serde::{Deserialize, Serialize};

/// Параметры запроса списка (`?search=&perPage=&page=&type=`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(rename = "perPage")]
    pub per_page: u32,
    pub page: u32,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl ListParams {
    pub fn new(per_page: u32) -> Self {
        Self {
            search: None,
            per_page,
            page: 1,
            kind: None,
        }
    }

    /// Пустая строка поиска не отправляется
    pub fn with_search(mut self, search: &str) -> Self {
        let search = search.trim();
        self.search = if search.is_empty() {
            None
        } else {
            Some(search.to_string())
        };
        self
    }

    pub fn with_kind(mut self, kind: &str) -> Self {
        self.kind = Some(kind.to_string());
        self
    }
}
