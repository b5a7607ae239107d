use serde::{Deserialize, Serialize};

/// Почтовый адрес внутри записи адреса клиента
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressDetails {
    #[serde(default)]
    pub address: Option<String>,
}

/// Сохранённый адрес клиента
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserAddress {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub address: Option<AddressDetails>,
    /// `[lat, lng]`
    #[serde(default)]
    pub location: Vec<f64>,
}

impl UserAddress {
    /// Строка адреса без заголовка
    pub fn street(&self) -> Option<&str> {
        self.address
            .as_ref()
            .and_then(|a| a.address.as_deref())
            .filter(|s| !s.trim().is_empty())
    }

    /// Подпись в списке: заголовок, иначе сам адрес
    pub fn display_label(&self) -> String {
        self.title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .or_else(|| self.street())
            .unwrap_or_default()
            .to_string()
    }

    pub fn lat(&self) -> Option<f64> {
        self.location.first().copied()
    }

    pub fn lng(&self) -> Option<f64> {
        self.location.get(1).copied()
    }
}

/// Вариант для поиска адреса с подгрузкой
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressOption {
    pub label: String,
    pub value: i64,
    pub key: i64,
}

impl From<&UserAddress> for AddressOption {
    fn from(a: &UserAddress) -> Self {
        Self {
            label: a.display_label(),
            value: a.id,
            key: a.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_prefers_title() {
        let a: UserAddress = serde_json::from_str(
            r#"{"id":7,"title":"Home","address":{"address":"12 Baker St"},"location":[51.52,-0.15]}"#,
        )
        .unwrap();
        assert_eq!(a.display_label(), "Home");
        assert_eq!(a.lat(), Some(51.52));
        assert_eq!(a.lng(), Some(-0.15));

        let opt = AddressOption::from(&a);
        assert_eq!(opt.value, 7);
        assert_eq!(opt.key, 7);
    }

    #[test]
    fn test_label_falls_back_to_street() {
        let a: UserAddress =
            serde_json::from_str(r#"{"id":8,"title":"","address":{"address":"1 Main Rd"}}"#).unwrap();
        assert_eq!(a.display_label(), "1 Main Rd");
        assert_eq!(a.lat(), None);
    }
}
