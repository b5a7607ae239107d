use chrono::{NaiveTime, Timelike};
use contracts::domain::a005_pos_cart::delivery_schedule::DisabledTime;
use leptos::prelude::*;

/// Hour (if picked), minute and second of the current value
fn time_parts(value: Option<NaiveTime>) -> (Option<u32>, u32, u32) {
    match value {
        Some(t) => (Some(t.hour()), t.minute(), t.second()),
        None => (None, 0, 0),
    }
}

/// Hour / minute / second selects with per-hour disabling.
///
/// Emits a time only once an hour is picked; minutes and seconds default
/// to zero.
#[component]
pub fn TimePicker(
    #[prop(into)] value: Signal<Option<NaiveTime>>,
    #[prop(into)] disabled_time: Signal<DisabledTime>,
    #[prop(into)] disabled: Signal<bool>,
    on_change: Callback<NaiveTime>,
) -> impl IntoView {
    let hour = move || value.get().map(|t| t.hour());
    let minute = move || value.get().map(|t| t.minute()).unwrap_or(0);
    let second = move || value.get().map(|t| t.second()).unwrap_or(0);

    // handlers read the current value without subscribing
    let parts_untracked = move || time_parts(value.get_untracked());

    let emit = move |h: Option<u32>, m: u32, s: u32| {
        if let Some(t) = h.and_then(|h| NaiveTime::from_hms_opt(h, m, s)) {
            on_change.run(t);
        }
    };

    let parse = |raw: String| raw.parse::<u32>().ok();

    view! {
        <div class="time-picker">
            <select
                class="time-picker__part"
                disabled=move || disabled.get()
                prop:value=move || hour().map(|h| h.to_string()).unwrap_or_default()
                on:change=move |ev| {
                    let (_, m, s) = parts_untracked();
                    emit(parse(event_target_value(&ev)), m, s)
                }
            >
                <option value="" disabled=true>{"HH"}</option>
                {move || {
                    let restriction = disabled_time.get();
                    (0..24u32)
                        .map(|h| {
                            view! {
                                <option value=h.to_string() disabled=restriction.hours.is_blocked(h)>
                                    {format!("{:02}", h)}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
            <span>":"</span>
            <select
                class="time-picker__part"
                disabled=move || disabled.get() || hour().is_none()
                prop:value=move || minute().to_string()
                on:change=move |ev| {
                    let (h, _, s) = parts_untracked();
                    emit(h, parse(event_target_value(&ev)).unwrap_or(0), s)
                }
            >
                {move || {
                    let restriction = disabled_time.get();
                    (0..60u32)
                        .map(|m| view! {
                            <option value=m.to_string() disabled=restriction.minutes.contains(&m)>
                                {format!("{:02}", m)}
                            </option>
                        })
                        .collect_view()
                }}
            </select>
            <span>":"</span>
            <select
                class="time-picker__part"
                disabled=move || disabled.get() || hour().is_none()
                prop:value=move || second().to_string()
                on:change=move |ev| {
                    let (h, m, _) = parts_untracked();
                    emit(h, m, parse(event_target_value(&ev)).unwrap_or(0))
                }
            >
                {move || {
                    let restriction = disabled_time.get();
                    (0..60u32)
                        .map(|s| view! {
                            <option value=s.to_string() disabled=restriction.seconds.contains(&s)>
                                {format!("{:02}", s)}
                            </option>
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_parts() {
        assert_eq!(time_parts(None), (None, 0, 0));
        let t = NaiveTime::from_hms_opt(16, 5, 30).unwrap();
        assert_eq!(time_parts(Some(t)), (Some(16), 5, 30));
    }
}
