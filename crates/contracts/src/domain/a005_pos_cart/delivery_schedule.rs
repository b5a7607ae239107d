//! Ограничения календаря доставки
//!
//! Чистые функции без состояния: какие даты можно выбрать в календаре
//! доставки и какие часы заблокированы в выборе времени. Текущее время
//! передаётся параметром, вызывающий код читает часы сам при каждой оценке.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use std::collections::BTreeSet;

/// Формат даты доставки на проводе (`2024-03-10`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Формат времени доставки на проводе (`15:30:00`)
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Минимальный запас до доставки «на сегодня», в часах
pub const LEAD_TIME_HOURS: u32 = 1;

const HOURS_PER_DAY: u32 = 24;

// ============================================================================
// Closed dates
// ============================================================================

/// Выходные дни магазина (календарные дни без времени)
///
/// Заменяется целиком при смене активного магазина.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClosedDateSet(BTreeSet<NaiveDate>);

impl ClosedDateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Собрать набор из строк `YYYY-MM-DD`; нераспознанные строки пропускаются
    pub fn from_days<I, S>(days: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        days.into_iter()
            .filter_map(|day| parse_day(day.as_ref()))
            .collect()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.0.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<NaiveDate> for ClosedDateSet {
    fn from_iter<T: IntoIterator<Item = NaiveDate>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Разобрать дату `YYYY-MM-DD`
pub fn parse_day(day: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(day.trim(), DATE_FORMAT).ok()
}

/// Разобрать время `HH:MM:SS`
pub fn parse_time(time: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(time.trim(), TIME_FORMAT).ok()
}

// ============================================================================
// Date availability
// ============================================================================

/// Заблокирована ли дата в календаре доставки
///
/// Выходной магазина блокируется всегда, независимо от `now`. Иначе
/// блокируются все дни до вчерашнего включительно; сегодня доступен.
pub fn is_date_disabled(candidate: NaiveDate, closed: &ClosedDateSet, now: NaiveDateTime) -> bool {
    if closed.contains(candidate) {
        return true;
    }
    candidate < now.date()
}

// ============================================================================
// Hour availability
// ============================================================================

/// Набор заблокированных часов (0–23) для выбора времени
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HourMask(BTreeSet<u32>);

impl HourMask {
    /// Без ограничений: доступны все 24 часа
    pub fn none() -> Self {
        Self::default()
    }

    /// Заблокировать все часы строго раньше `first_allowed`
    pub fn before(first_allowed: u32) -> Self {
        Self((0..first_allowed.min(HOURS_PER_DAY)).collect())
    }

    pub fn is_blocked(&self, hour: u32) -> bool {
        self.0.contains(&hour)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Заблокированные часы по возрастанию
    pub fn hours(&self) -> Vec<u32> {
        self.0.iter().copied().collect()
    }

    /// Доступные часы по возрастанию
    pub fn allowed(&self) -> impl Iterator<Item = u32> + '_ {
        (0..HOURS_PER_DAY).filter(move |hour| !self.is_blocked(*hour))
    }
}

/// Заблокированные часы для выбранной даты доставки
///
/// Если выбран сегодняшний день, доступны часы начиная со следующего
/// полного часа после `now`. Для любого другого дня (или без даты)
/// ограничений нет.
pub fn disabled_hours(selected: Option<NaiveDate>, now: NaiveDateTime) -> HourMask {
    match selected {
        Some(day) if day == now.date() => HourMask::before(now.hour() + LEAD_TIME_HOURS),
        _ => HourMask::none(),
    }
}

/// Ограничения выбора времени: часы по маске, минуты и секунды свободны
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisabledTime {
    pub hours: HourMask,
    pub minutes: Vec<u32>,
    pub seconds: Vec<u32>,
}

pub fn disabled_time(selected: Option<NaiveDate>, now: NaiveDateTime) -> DisabledTime {
    DisabledTime {
        hours: disabled_hours(selected, now),
        minutes: Vec::new(),
        seconds: Vec::new(),
    }
}

/// Можно ли выбрать время `time` на дату `selected`
pub fn is_time_selectable(selected: Option<NaiveDate>, time: NaiveTime, now: NaiveDateTime) -> bool {
    !disabled_hours(selected, now).is_blocked(time.hour())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        parse_day(s).unwrap()
    }

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    #[test]
    fn test_closed_dates_scenario() {
        let closed = ClosedDateSet::from_days(["2024-03-10"]);
        let now = at("2024-03-09T15:00:00");

        assert!(is_date_disabled(day("2024-03-10"), &closed, now));
        assert!(is_date_disabled(day("2024-03-08"), &closed, now));
        assert!(!is_date_disabled(day("2024-03-09"), &closed, now));
        assert!(!is_date_disabled(day("2024-03-11"), &closed, now));
    }

    #[test]
    fn test_closed_date_disabled_regardless_of_now() {
        let closed = ClosedDateSet::from_days(["2024-03-10", "2023-12-31"]);
        for now in [
            at("2023-01-01T00:00:00"),
            at("2024-03-10T08:00:00"),
            at("2025-06-01T23:59:59"),
        ] {
            for closed_day in closed.iter() {
                assert!(is_date_disabled(closed_day, &closed, now));
            }
        }
    }

    #[test]
    fn test_past_dates_disabled_today_enabled() {
        let closed = ClosedDateSet::new();
        let now = at("2024-03-09T00:00:00");
        assert!(is_date_disabled(day("2024-03-08"), &closed, now));
        assert!(is_date_disabled(day("2024-02-29"), &closed, now));
        assert!(!is_date_disabled(day("2024-03-09"), &closed, now));

        let late = at("2024-03-09T23:59:59");
        assert!(!is_date_disabled(day("2024-03-09"), &closed, late));
        assert!(!is_date_disabled(day("2024-03-10"), &closed, late));
    }

    #[test]
    fn test_today_closed_is_disabled() {
        let closed = ClosedDateSet::from_days(["2024-03-09"]);
        assert!(is_date_disabled(day("2024-03-09"), &closed, at("2024-03-09T10:00:00")));
    }

    #[test]
    fn test_malformed_closed_days_ignored() {
        let closed = ClosedDateSet::from_days(["2024-03-10", "", "10/03/2024", "2024-13-01", " 2024-03-12 "]);
        assert_eq!(closed.len(), 2);
        assert!(closed.contains(day("2024-03-12")));
        assert!(ClosedDateSet::from_days(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_disabled_hours_today() {
        let now = at("2024-03-09T15:30:00");
        let mask = disabled_hours(Some(day("2024-03-09")), now);
        assert_eq!(mask.hours(), (0..=15).collect::<Vec<_>>());
        assert_eq!(mask.allowed().collect::<Vec<_>>(), (16..=23).collect::<Vec<_>>());
    }

    #[test]
    fn test_disabled_hours_last_hour_blocks_all() {
        let now = at("2024-03-09T23:05:00");
        let mask = disabled_hours(Some(day("2024-03-09")), now);
        assert_eq!(mask.hours(), (0..=23).collect::<Vec<_>>());
        assert_eq!(mask.allowed().count(), 0);
        assert_eq!(mask.len(), 24);
    }

    #[test]
    fn test_disabled_hours_midnight() {
        let now = at("2024-03-09T00:00:00");
        let mask = disabled_hours(Some(day("2024-03-09")), now);
        assert_eq!(mask.hours(), vec![0]);
    }

    #[test]
    fn test_disabled_hours_other_days_empty() {
        let now = at("2024-03-09T15:30:00");
        assert!(disabled_hours(Some(day("2024-03-10")), now).is_empty());
        assert!(disabled_hours(Some(day("2024-04-01")), now).is_empty());
        assert!(disabled_hours(Some(day("2024-03-08")), now).is_empty());
        assert!(disabled_hours(None, now).is_empty());
        assert_eq!(disabled_hours(None, now).allowed().count(), 24);
    }

    #[test]
    fn test_minutes_and_seconds_never_restricted() {
        let now = at("2024-03-09T15:30:00");
        let restriction = disabled_time(Some(day("2024-03-09")), now);
        assert_eq!(restriction.hours.len(), 16);
        assert!(restriction.minutes.is_empty());
        assert!(restriction.seconds.is_empty());
    }

    #[test]
    fn test_time_selectable() {
        let now = at("2024-03-09T15:30:00");
        let today = Some(day("2024-03-09"));
        assert!(!is_time_selectable(today, parse_time("15:59:00").unwrap(), now));
        assert!(is_time_selectable(today, parse_time("16:00:00").unwrap(), now));
        assert!(is_time_selectable(Some(day("2024-03-10")), parse_time("00:15:00").unwrap(), now));
    }
}
