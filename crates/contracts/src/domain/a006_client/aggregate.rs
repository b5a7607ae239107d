use serde::{Deserialize, Serialize};

/// Клиент кассы (покупатель)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub uuid: String,
    #[serde(default)]
    pub firstname: Option<String>,
    #[serde(default)]
    pub lastname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl Client {
    /// «Имя Фамилия», иначе email, иначе uuid
    pub fn display_name(&self) -> String {
        let name = [self.firstname.as_deref(), self.lastname.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if !name.is_empty() {
            return name;
        }
        self.email.clone().unwrap_or_else(|| self.uuid.clone())
    }
}

/// Новый адрес клиента, добавляемый с кассы
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewUserAddress {
    pub user_id: String,
    pub title: String,
    pub address: String,
    pub location: Vec<f64>,
    pub active: u8,
}

impl NewUserAddress {
    /// Адрес из полей формы; координаты пустые, если хотя бы одна не число
    pub fn from_input(user_id: &str, title: &str, address: &str, lat: &str, lng: &str) -> Self {
        let location = match (lat.trim().parse::<f64>(), lng.trim().parse::<f64>()) {
            (Ok(lat), Ok(lng)) => vec![lat, lng],
            _ => Vec::new(),
        };
        Self {
            user_id: user_id.to_string(),
            title: title.trim().to_string(),
            address: address.trim().to_string(),
            location,
            active: 1,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.user_id.trim().is_empty() {
            return Err("Please select a client".into());
        }
        if self.address.trim().is_empty() {
            return Err("Address is required".into());
        }
        if self.location.len() != 2 {
            return Err("Latitude and longitude are required".into());
        }
        let (lat, lng) = (self.location[0], self.location[1]);
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err("Coordinates are out of range".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_fallbacks() {
        let mut c = Client {
            id: 1,
            uuid: "u-1".into(),
            firstname: Some("Ada".into()),
            lastname: Some("Lovelace".into()),
            email: Some("ada@example.com".into()),
        };
        assert_eq!(c.display_name(), "Ada Lovelace");
        c.firstname = None;
        c.lastname = Some(" ".into());
        assert_eq!(c.display_name(), "ada@example.com");
        c.email = None;
        assert_eq!(c.display_name(), "u-1");
    }

    #[test]
    fn test_new_address_validation() {
        let mut a = NewUserAddress {
            user_id: "u-1".into(),
            title: "Work".into(),
            address: "5 Fleet St".into(),
            location: vec![51.5, -0.1],
            active: 1,
        };
        assert!(a.validate().is_ok());
        a.location = vec![95.0, 0.0];
        assert!(a.validate().is_err());
        a.location.clear();
        assert_eq!(a.validate().unwrap_err(), "Latitude and longitude are required");
        a.user_id.clear();
        assert_eq!(a.validate().unwrap_err(), "Please select a client");
    }

    #[test]
    fn test_from_input_parses_coordinates() {
        let a = NewUserAddress::from_input("u-1", " Home ", "1 Main St", "40.7", " -74.0 ");
        assert_eq!(a.title, "Home");
        assert_eq!(a.location, vec![40.7, -74.0]);
        assert_eq!(a.active, 1);

        let a = NewUserAddress::from_input("u-1", "", "1 Main St", "40.7", "east");
        assert!(a.location.is_empty());
        assert_eq!(a.validate().unwrap_err(), "Latitude and longitude are required");
    }
}
