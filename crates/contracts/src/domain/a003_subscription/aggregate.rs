use serde::{Deserialize, Serialize};

/// Тариф подписки продавца
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub price: f64,
    /// Срок в месяцах
    #[serde(default)]
    pub month: u32,
    #[serde(default = "default_active", deserialize_with = "bool_or_int")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// API отдаёт флаг то как `true`, то как `1`
fn bool_or_int<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Int(i) => i != 0,
    })
}

impl Subscription {
    /// Является ли тариф текущим для магазина с активной подпиской `active_id`
    pub fn is_current(&self, active_id: Option<i64>) -> bool {
        active_id == Some(self.id)
    }

    pub fn price_label(&self, currency_symbol: &str) -> String {
        format!("{}{:.2}", currency_symbol, self.price)
    }
}

/// Подписка магазина: запись о покупке тарифа
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopSubscription {
    pub id: i64,
    #[serde(default)]
    pub expired_at: Option<String>,
    #[serde(default)]
    pub subscription: Option<Subscription>,
}

/// Ответ на покупку тарифа
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachSubscriptionResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_flag_accepts_int_and_bool() {
        let list: Vec<Subscription> = serde_json::from_str(
            r#"[
                {"id":1,"type":"Basic","price":9.99,"month":1,"active":1},
                {"id":2,"type":"Pro","price":19.0,"month":3,"active":false},
                {"id":3,"type":"Trial"}
            ]"#,
        )
        .unwrap();
        assert!(list[0].active);
        assert!(!list[1].active);
        assert!(list[2].active);
        assert_eq!(list[2].month, 0);
    }

    #[test]
    fn test_is_current() {
        let s = Subscription {
            id: 2,
            kind: "Pro".into(),
            price: 19.0,
            month: 3,
            active: true,
        };
        assert!(s.is_current(Some(2)));
        assert!(!s.is_current(Some(1)));
        assert!(!s.is_current(None));
        assert_eq!(s.price_label("$"), "$19.00");
    }
}
