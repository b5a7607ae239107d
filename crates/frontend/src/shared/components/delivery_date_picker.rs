use crate::shared::date_utils::{month_grid, month_start, month_title, now_local, shift_month};
use crate::shared::icons::icon;
use chrono::NaiveDate;
use contracts::domain::a005_pos_cart::delivery_schedule::DATE_FORMAT;
use leptos::prelude::*;

const WEEKDAYS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// Calendar dropdown where each day can be disabled by a predicate.
///
/// The native `<input type="date">` only knows min/max, so closed shop
/// days need their own grid.
#[component]
pub fn DeliveryDatePicker(
    /// Selected date
    #[prop(into)]
    value: Signal<Option<NaiveDate>>,
    /// Returns true for days that cannot be picked
    is_disabled: Callback<NaiveDate, bool>,
    /// Called with the picked day
    on_change: Callback<NaiveDate>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let shown_month = RwSignal::new(month_start(
        value.get_untracked().unwrap_or_else(|| now_local().date()),
    ));
    let placeholder = placeholder.unwrap_or_else(|| "Delivery date".to_string());

    let label = move || {
        value
            .get()
            .map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_else(|| placeholder.clone())
    };

    view! {
        <div class="date-picker">
            <button
                class="date-picker__input w-100"
                class:date-picker__input--empty=move || value.get().is_none()
                on:click=move |_| open.update(|o| *o = !*o)
            >
                {label}
            </button>
            <Show when=move || open.get()>
                <div class="date-picker__dropdown">
                    <div class="date-picker__header">
                        <button
                            class="button button--icon"
                            on:click=move |_| shown_month.update(|m| *m = shift_month(*m, -1))
                        >
                            {icon("chevron-left")}
                        </button>
                        <span class="date-picker__title">{move || month_title(shown_month.get())}</span>
                        <button
                            class="button button--icon"
                            on:click=move |_| shown_month.update(|m| *m = shift_month(*m, 1))
                        >
                            {icon("chevron-right")}
                        </button>
                    </div>
                    <div class="date-picker__grid">
                        {WEEKDAYS.iter().map(|w| view! { <span class="date-picker__weekday">{*w}</span> }).collect_view()}
                        {move || {
                            month_grid(shown_month.get())
                                .into_iter()
                                .map(|cell| match cell {
                                    Some(day) => {
                                        let disabled = is_disabled.run(day);
                                        view! {
                                            <button
                                                class="date-picker__day"
                                                class:date-picker__day--selected=move || value.get() == Some(day)
                                                disabled=disabled
                                                on:click=move |_| {
                                                    on_change.run(day);
                                                    open.set(false);
                                                }
                                            >
                                                {day.format("%-d").to_string()}
                                            </button>
                                        }
                                        .into_any()
                                    }
                                    None => view! { <span class="date-picker__day date-picker__day--blank"></span> }.into_any(),
                                })
                                .collect_view()
                        }}
                    </div>
                </div>
            </Show>
        </div>
    }
}
