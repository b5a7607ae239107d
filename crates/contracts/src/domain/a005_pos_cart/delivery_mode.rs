use serde::{Deserialize, Serialize};

// ============================================================================
// Delivery mode
// ============================================================================

/// Способ получения заказа на кассе
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMode {
    DineIn,
    Delivery,
    Pickup,
}

impl DeliveryMode {
    /// Порядок вариантов в выпадающем списке
    pub const ALL: [DeliveryMode; 3] = [
        DeliveryMode::DineIn,
        DeliveryMode::Delivery,
        DeliveryMode::Pickup,
    ];

    /// Значение на проводе
    pub fn value(&self) -> &'static str {
        match self {
            DeliveryMode::DineIn => "dine_in",
            DeliveryMode::Delivery => "delivery",
            DeliveryMode::Pickup => "pickup",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DeliveryMode::DineIn => "Dine in",
            DeliveryMode::Delivery => "Delivery",
            DeliveryMode::Pickup => "Pickup",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.value() == value)
    }

    /// Требуются ли адрес, дата и время доставки
    pub fn requires_delivery_details(&self) -> bool {
        matches!(self, DeliveryMode::Delivery)
    }

    /// Стоимость доставки для режима: цена магазина только для доставки
    pub fn fee_for(&self, shop_delivery_price: f64) -> f64 {
        if self.requires_delivery_details() {
            shop_delivery_price
        } else {
            0.0
        }
    }
}

// ============================================================================
// Display
// ============================================================================

impl std::fmt::Display for DeliveryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_round_trip() {
        for mode in DeliveryMode::ALL {
            assert_eq!(DeliveryMode::from_value(mode.value()), Some(mode));
        }
        assert_eq!(DeliveryMode::from_value("courier"), None);
    }

    #[test]
    fn test_serde_matches_value() {
        let json = serde_json::to_string(&DeliveryMode::DineIn).unwrap();
        assert_eq!(json, "\"dine_in\"");
        let mode: DeliveryMode = serde_json::from_str("\"pickup\"").unwrap();
        assert_eq!(mode, DeliveryMode::Pickup);
    }

    #[test]
    fn test_only_delivery_requires_details_and_fee() {
        assert!(DeliveryMode::Delivery.requires_delivery_details());
        assert!(!DeliveryMode::Pickup.requires_delivery_details());
        assert!(!DeliveryMode::DineIn.requires_delivery_details());
        assert_eq!(DeliveryMode::Delivery.fee_for(4.5), 4.5);
        assert_eq!(DeliveryMode::Pickup.fee_for(4.5), 0.0);
    }
}
