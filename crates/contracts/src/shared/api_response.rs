use serde::{Deserialize, Serialize};

/// Обёртка ответа REST API: все эндпоинты панели отдают `{ "data": ... }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

/// Ошибки валидации от сервера, сгруппированные по ключу поля (`"title.en"`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerFieldErrors(pub std::collections::HashMap<String, Vec<String>>);

impl ServerFieldErrors {
    /// Первое сообщение для поля, если оно есть
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwraps_data_envelope() {
        let resp: ApiResponse<Vec<i64>> = serde_json::from_str(r#"{"data":[1,2,3]}"#).unwrap();
        assert_eq!(resp.data, vec![1, 2, 3]);
    }

    #[test]
    fn first_server_error_for_field() {
        let errors: ServerFieldErrors =
            serde_json::from_str(r#"{"title.en":["The title has already been taken."]}"#).unwrap();
        assert_eq!(
            errors.first("title.en"),
            Some("The title has already been taken.")
        );
        assert_eq!(errors.first("keywords"), None);
        assert!(!errors.is_empty());
    }
}
