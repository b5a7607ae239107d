use crate::domain::a003_subscription::aggregate::ShopSubscription;
use crate::domain::a005_pos_cart::delivery_schedule::ClosedDateSet;
use crate::domain::common::Translation;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

crate::uuid_id! {
    /// UUID магазина
    ShopId
}

// ============================================================================
// Aggregate
// ============================================================================

/// Выходной день магазина в формате `{ "day": "YYYY-MM-DD" }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopClosedDate {
    pub day: String,
}

/// Магазин (для кассы и кабинета продавца)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shop {
    pub id: i64,
    pub uuid: ShopId,

    #[serde(default)]
    pub translation: Option<Translation>,

    /// Стоимость доставки
    #[serde(default)]
    pub price: f64,

    #[serde(default)]
    pub shop_closed_date: Vec<ShopClosedDate>,

    /// Текущая подписка продавца
    #[serde(default)]
    pub subscription: Option<ShopSubscription>,
}

impl Shop {
    pub fn title(&self) -> &str {
        self.translation.as_ref().map(|t| t.title.as_str()).unwrap_or("")
    }

    /// Выходные дни для календаря доставки
    pub fn closed_dates(&self) -> ClosedDateSet {
        ClosedDateSet::from_days(self.shop_closed_date.iter().map(|d| d.day.as_str()))
    }

    /// ID активного тарифа продавца
    pub fn active_subscription_id(&self) -> Option<i64> {
        self.subscription
            .as_ref()
            .and_then(|s| s.subscription.as_ref())
            .map(|s| s.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const SHOP_JSON: &str = r#"{
        "id": 3,
        "uuid": "6f1c2d5e-8a4b-4c3d-9e2f-1a2b3c4d5e6f",
        "translation": { "locale": "en", "title": "Corner Bakery" },
        "price": 2.5,
        "shop_closed_date": [ { "day": "2024-03-10" }, { "day": "oops" } ],
        "subscription": { "id": 1, "subscription": { "id": 4, "type": "Pro", "price": 20.0, "month": 1 } }
    }"#;

    #[test]
    fn test_closed_dates_from_payload() {
        let shop: Shop = serde_json::from_str(SHOP_JSON).unwrap();
        let closed = shop.closed_dates();
        assert_eq!(closed.len(), 1);
        assert!(closed.contains(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()));
        assert_eq!(shop.title(), "Corner Bakery");
        assert_eq!(shop.active_subscription_id(), Some(4));
    }

    #[test]
    fn test_minimal_payload() {
        let shop: Shop =
            serde_json::from_str(r#"{"id":1,"uuid":"6f1c2d5e-8a4b-4c3d-9e2f-1a2b3c4d5e6f"}"#).unwrap();
        assert!(shop.closed_dates().is_empty());
        assert_eq!(shop.title(), "");
        assert_eq!(shop.active_subscription_id(), None);
    }
}
