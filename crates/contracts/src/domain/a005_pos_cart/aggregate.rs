use super::delivery_mode::DeliveryMode;
use super::delivery_schedule::{self, ClosedDateSet, DATE_FORMAT, TIME_FORMAT};
use crate::domain::a001_shop::aggregate::ShopId;
use crate::domain::a004_user_address::aggregate::UserAddress;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Адрес доставки в теле заказа
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryAddressBody {
    pub address: String,
    pub active: u8,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl From<&UserAddress> for DeliveryAddressBody {
    fn from(a: &UserAddress) -> Self {
        Self {
            address: a.street().unwrap_or_default().to_string(),
            active: 1,
            lat: a.lat(),
            lng: a.lng(),
        }
    }
}

/// Выбранное значение select'а с подписью
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledValue {
    pub value: String,
    pub label: String,
}

/// Ошибка изменения полей доставки
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryFieldError {
    #[error("delivery details are only used for the delivery mode")]
    NotDeliveryMode,
    #[error("date {0} is not available for delivery")]
    DateUnavailable(NaiveDate),
    #[error("choose a delivery date first")]
    DateNotChosen,
    #[error("time {0} is not available for the chosen date")]
    TimeUnavailable(NaiveTime),
}

/// Поля, обязательные для оформления доставки
pub const FIELD_DELIVERY: &str = "delivery";
pub const FIELD_DELIVERY_ADDRESS: &str = "deliveryAddress";
pub const FIELD_DELIVERY_DATE: &str = "delivery_date";
pub const FIELD_DELIVERY_TIME: &str = "delivery_time";

// ============================================================================
// Aggregate
// ============================================================================

/// Корзина кассы (одна вкладка-«пакет»)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartBag {
    pub bag_id: u32,
    #[serde(default)]
    pub shop: Option<ShopId>,
    #[serde(default, rename = "userUuid")]
    pub user_uuid: Option<String>,
    #[serde(default)]
    pub deliveries: Option<DeliveryMode>,
    #[serde(default)]
    pub delivery_fee: f64,
    #[serde(default)]
    pub address: Option<DeliveryAddressBody>,
    #[serde(default, rename = "deliveryAddress")]
    pub delivery_address: Option<LabeledValue>,
    #[serde(default, with = "opt_date")]
    pub delivery_date: Option<NaiveDate>,
    #[serde(default, with = "opt_time")]
    pub delivery_time: Option<NaiveTime>,
}

impl CartBag {
    pub fn new(bag_id: u32) -> Self {
        Self {
            bag_id,
            ..Default::default()
        }
    }

    /// Сменить способ получения
    ///
    /// Любая смена режима сбрасывает адрес, подпись адреса, дату и время:
    /// возврат к прежнему режиму ничего не восстанавливает. Повторный выбор
    /// того же режима ничего не меняет.
    pub fn set_delivery_mode(&mut self, mode: Option<DeliveryMode>, shop_delivery_price: f64) {
        if self.deliveries == mode {
            return;
        }
        self.deliveries = mode;
        self.delivery_fee = mode.map(|m| m.fee_for(shop_delivery_price)).unwrap_or(0.0);
        self.clear_delivery_details();
    }

    fn clear_delivery_details(&mut self) {
        self.address = None;
        self.delivery_address = None;
        self.delivery_date = None;
        self.delivery_time = None;
    }

    pub fn is_delivery(&self) -> bool {
        self.deliveries
            .map(|m| m.requires_delivery_details())
            .unwrap_or(false)
    }

    /// Выбрать адрес клиента; `None` очищает адрес
    pub fn select_address(&mut self, address: Option<&UserAddress>) {
        match address {
            Some(a) => {
                let label = a.display_label();
                self.address = Some(DeliveryAddressBody::from(a));
                self.delivery_address = Some(LabeledValue {
                    value: label.clone(),
                    label,
                });
            }
            None => self.address = None,
        }
    }

    /// Выбрать дату доставки
    ///
    /// Если ранее выбранное время становится недоступным для новой даты,
    /// время сбрасывается.
    pub fn set_delivery_date(
        &mut self,
        date: NaiveDate,
        closed: &ClosedDateSet,
        now: NaiveDateTime,
    ) -> Result<(), DeliveryFieldError> {
        if !self.is_delivery() {
            return Err(DeliveryFieldError::NotDeliveryMode);
        }
        if delivery_schedule::is_date_disabled(date, closed, now) {
            return Err(DeliveryFieldError::DateUnavailable(date));
        }
        self.delivery_date = Some(date);
        if let Some(time) = self.delivery_time {
            if !delivery_schedule::is_time_selectable(Some(date), time, now) {
                self.delivery_time = None;
            }
        }
        Ok(())
    }

    /// Выбрать время доставки (только после выбора даты)
    pub fn set_delivery_time(
        &mut self,
        time: NaiveTime,
        now: NaiveDateTime,
    ) -> Result<(), DeliveryFieldError> {
        if !self.is_delivery() {
            return Err(DeliveryFieldError::NotDeliveryMode);
        }
        let date = self.delivery_date.ok_or(DeliveryFieldError::DateNotChosen)?;
        if !delivery_schedule::is_time_selectable(Some(date), time, now) {
            return Err(DeliveryFieldError::TimeUnavailable(time));
        }
        self.delivery_time = Some(time);
        Ok(())
    }

    /// Незаполненные обязательные поля блока доставки
    pub fn missing_delivery_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.deliveries.is_none() {
            missing.push(FIELD_DELIVERY);
            return missing;
        }
        if self.is_delivery() {
            if self.address.is_none() || self.delivery_address.is_none() {
                missing.push(FIELD_DELIVERY_ADDRESS);
            }
            if self.delivery_date.is_none() {
                missing.push(FIELD_DELIVERY_DATE);
            }
            if self.delivery_time.is_none() {
                missing.push(FIELD_DELIVERY_TIME);
            }
        }
        missing
    }

    /// Пересчитать стоимость доставки по цене (нового) магазина
    pub fn refresh_delivery_fee(&mut self, shop_delivery_price: f64) {
        self.delivery_fee = self
            .deliveries
            .map(|m| m.fee_for(shop_delivery_price))
            .unwrap_or(0.0);
    }

    /// Перепроверить выбранные дату и время по новым выходным магазина
    ///
    /// Ставшая недоступной дата сбрасывается вместе со временем; время,
    /// которое уже нельзя выбрать, сбрасывается само. Возвращает `true`,
    /// если что-то было сброшено.
    pub fn revalidate_schedule(&mut self, closed: &ClosedDateSet, now: NaiveDateTime) -> bool {
        let Some(date) = self.delivery_date else {
            return false;
        };
        if delivery_schedule::is_date_disabled(date, closed, now) {
            self.delivery_date = None;
            self.delivery_time = None;
            return true;
        }
        match self.delivery_time {
            Some(time) if !delivery_schedule::is_time_selectable(Some(date), time, now) => {
                self.delivery_time = None;
                true
            }
            _ => false,
        }
    }

    /// Магазин корзины сменился: стоимость и расписание следуют за ним
    pub fn apply_shop_schedule(
        &mut self,
        shop_delivery_price: f64,
        closed: &ClosedDateSet,
        now: NaiveDateTime,
    ) -> bool {
        self.refresh_delivery_fee(shop_delivery_price);
        self.revalidate_schedule(closed, now)
    }
}

mod opt_date {
    use super::DATE_FORMAT;
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(d) => s.serialize_str(&d.format(DATE_FORMAT).to_string()),
            None => s.serialize_none(),
        }
    }

    /// Пустая или некорректная строка читается как «не выбрано»
    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw: Option<String> = Option::deserialize(d)?;
        Ok(raw.as_deref().and_then(crate::domain::a005_pos_cart::delivery_schedule::parse_day))
    }
}

mod opt_time {
    use super::TIME_FORMAT;
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<NaiveTime>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(t) => s.serialize_str(&t.format(TIME_FORMAT).to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveTime>, D::Error> {
        let raw: Option<String> = Option::deserialize(d)?;
        Ok(raw.as_deref().and_then(crate::domain::a005_pos_cart::delivery_schedule::parse_time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a005_pos_cart::delivery_schedule::{parse_day, parse_time};

    fn now() -> NaiveDateTime {
        NaiveDateTime::parse_from_str("2024-03-09T15:30:00", "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    fn home() -> UserAddress {
        serde_json::from_str(
            r#"{"id":7,"title":"Home","address":{"address":"12 Baker St"},"location":[51.52,-0.15]}"#,
        )
        .unwrap()
    }

    fn filled_delivery_bag() -> CartBag {
        let mut bag = CartBag::new(0);
        bag.set_delivery_mode(Some(DeliveryMode::Delivery), 3.0);
        bag.select_address(Some(&home()));
        bag.set_delivery_date(parse_day("2024-03-10").unwrap(), &ClosedDateSet::new(), now())
            .unwrap();
        bag.set_delivery_time(parse_time("10:00:00").unwrap(), now()).unwrap();
        bag
    }

    #[test]
    fn test_mode_round_trip_clears_details() {
        let mut bag = filled_delivery_bag();
        assert!(bag.missing_delivery_fields().is_empty());
        assert_eq!(bag.delivery_fee, 3.0);

        bag.set_delivery_mode(Some(DeliveryMode::Pickup), 3.0);
        assert_eq!(bag.address, None);
        assert_eq!(bag.delivery_address, None);
        assert_eq!(bag.delivery_fee, 0.0);

        bag.set_delivery_mode(Some(DeliveryMode::Delivery), 3.0);
        assert_eq!(bag.address, None);
        assert_eq!(bag.delivery_address, None);
        assert_eq!(bag.delivery_date, None);
        assert_eq!(bag.delivery_time, None);
        assert_eq!(
            bag.missing_delivery_fields(),
            vec![FIELD_DELIVERY_ADDRESS, FIELD_DELIVERY_DATE, FIELD_DELIVERY_TIME]
        );
    }

    #[test]
    fn test_same_mode_keeps_details() {
        let mut bag = filled_delivery_bag();
        bag.set_delivery_mode(Some(DeliveryMode::Delivery), 3.0);
        assert!(bag.missing_delivery_fields().is_empty());
    }

    #[test]
    fn test_unset_and_pickup_requirements() {
        let mut bag = CartBag::new(1);
        assert_eq!(bag.missing_delivery_fields(), vec![FIELD_DELIVERY]);
        bag.set_delivery_mode(Some(DeliveryMode::DineIn), 3.0);
        assert!(bag.missing_delivery_fields().is_empty());
    }

    #[test]
    fn test_select_and_clear_address() {
        let mut bag = CartBag::new(0);
        bag.set_delivery_mode(Some(DeliveryMode::Delivery), 0.0);
        bag.select_address(Some(&home()));
        let body = bag.address.clone().unwrap();
        assert_eq!(body.address, "12 Baker St");
        assert_eq!(body.active, 1);
        assert_eq!(body.lat, Some(51.52));
        assert_eq!(bag.delivery_address.as_ref().unwrap().label, "Home");

        bag.select_address(None);
        assert_eq!(bag.address, None);
        assert!(bag.missing_delivery_fields().contains(&FIELD_DELIVERY_ADDRESS));
    }

    #[test]
    fn test_date_rules_enforced() {
        let mut bag = CartBag::new(0);
        let closed = ClosedDateSet::from_days(["2024-03-10"]);
        let date = parse_day("2024-03-10").unwrap();

        assert_eq!(
            bag.set_delivery_date(date, &closed, now()),
            Err(DeliveryFieldError::NotDeliveryMode)
        );

        bag.set_delivery_mode(Some(DeliveryMode::Delivery), 0.0);
        assert_eq!(
            bag.set_delivery_date(date, &closed, now()),
            Err(DeliveryFieldError::DateUnavailable(date))
        );
        let past = parse_day("2024-03-08").unwrap();
        assert!(bag.set_delivery_date(past, &closed, now()).is_err());
        assert!(bag.set_delivery_date(parse_day("2024-03-09").unwrap(), &closed, now()).is_ok());
    }

    #[test]
    fn test_time_requires_date_and_lead_time() {
        let mut bag = CartBag::new(0);
        bag.set_delivery_mode(Some(DeliveryMode::Delivery), 0.0);
        let t = parse_time("16:00:00").unwrap();
        assert_eq!(bag.set_delivery_time(t, now()), Err(DeliveryFieldError::DateNotChosen));

        bag.set_delivery_date(parse_day("2024-03-09").unwrap(), &ClosedDateSet::new(), now())
            .unwrap();
        let early = parse_time("15:45:00").unwrap();
        assert_eq!(
            bag.set_delivery_time(early, now()),
            Err(DeliveryFieldError::TimeUnavailable(early))
        );
        assert!(bag.set_delivery_time(t, now()).is_ok());
    }

    #[test]
    fn test_switching_to_today_drops_blocked_time() {
        let mut bag = filled_delivery_bag();
        assert_eq!(bag.delivery_time, parse_time("10:00:00"));
        bag.set_delivery_date(parse_day("2024-03-09").unwrap(), &ClosedDateSet::new(), now())
            .unwrap();
        assert_eq!(bag.delivery_time, None);
        assert_eq!(bag.delivery_date, parse_day("2024-03-09"));
    }

    #[test]
    fn test_fee_follows_shop_loaded_after_mode() {
        let mut bag = CartBag::new(0);
        bag.set_delivery_mode(Some(DeliveryMode::Delivery), 0.0);
        assert_eq!(bag.delivery_fee, 0.0);

        bag.refresh_delivery_fee(4.5);
        assert_eq!(bag.delivery_fee, 4.5);

        bag.set_delivery_mode(Some(DeliveryMode::Pickup), 4.5);
        bag.refresh_delivery_fee(7.0);
        assert_eq!(bag.delivery_fee, 0.0);
    }

    #[test]
    fn test_new_closed_day_drops_chosen_date() {
        let mut bag = filled_delivery_bag();
        let closed = ClosedDateSet::from_days(["2024-03-10"]);
        assert!(delivery_schedule::is_date_disabled(bag.delivery_date.unwrap(), &closed, now()));

        assert!(bag.revalidate_schedule(&closed, now()));
        assert_eq!(bag.delivery_date, None);
        assert_eq!(bag.delivery_time, None);
        assert_eq!(
            bag.missing_delivery_fields(),
            vec![FIELD_DELIVERY_DATE, FIELD_DELIVERY_TIME]
        );
        assert!(!bag.revalidate_schedule(&closed, now()));
    }

    #[test]
    fn test_revalidate_keeps_open_date_and_drops_passed_time() {
        let mut bag = filled_delivery_bag();
        let closed = ClosedDateSet::from_days(["2024-03-11"]);
        assert!(!bag.revalidate_schedule(&closed, now()));
        assert!(bag.missing_delivery_fields().is_empty());

        // next morning 10:00 is already inside the lead time
        let later = NaiveDateTime::parse_from_str("2024-03-10T10:15:00", "%Y-%m-%dT%H:%M:%S").unwrap();
        assert!(bag.revalidate_schedule(&closed, later));
        assert_eq!(bag.delivery_date, parse_day("2024-03-10"));
        assert_eq!(bag.delivery_time, None);
    }

    #[test]
    fn test_shop_replacement_updates_fee_and_schedule() {
        let mut bag = filled_delivery_bag();
        let first = ClosedDateSet::new();
        assert!(!bag.apply_shop_schedule(3.0, &first, now()));
        assert_eq!(bag.delivery_fee, 3.0);
        assert!(bag.missing_delivery_fields().is_empty());

        let second = ClosedDateSet::from_days(["2024-03-10", "2024-03-12"]);
        assert!(bag.apply_shop_schedule(5.25, &second, now()));
        assert_eq!(bag.delivery_fee, 5.25);
        assert_eq!(bag.delivery_date, None);
        assert_eq!(bag.deliveries, Some(DeliveryMode::Delivery));
        assert!(bag.address.is_some());
    }

    #[test]
    fn test_wire_format() {
        let bag = filled_delivery_bag();
        let json = serde_json::to_value(&bag).unwrap();
        assert_eq!(json["deliveries"], "delivery");
        assert_eq!(json["delivery_date"], "2024-03-10");
        assert_eq!(json["delivery_time"], "10:00:00");
        assert_eq!(json["deliveryAddress"]["label"], "Home");

        let back: CartBag = serde_json::from_value(json).unwrap();
        assert_eq!(back, bag);

        let empty: CartBag =
            serde_json::from_str(r#"{"bag_id":2,"delivery_date":"","delivery_time":null}"#).unwrap();
        assert_eq!(empty.delivery_date, None);
        assert_eq!(empty.delivery_time, None);
    }
}
