use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::future::Future;

/// Delay between the last keystroke and the search request.
pub const DEBOUNCE_MS: u32 = 800;

#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

/// Search-as-you-type select.
///
/// `fetch_options` runs for the typed text once typing pauses; only the
/// answer for the latest text is shown. Opening the dropdown with an
/// empty box runs an initial search.
#[component]
pub fn DebounceSelect<F, Fut>(
    fetch_options: F,
    /// Label of the current selection
    #[prop(into)]
    selected: Signal<Option<String>>,
    on_select: Callback<Option<SelectOption>>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] allow_clear: bool,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView
where
    F: Fn(String) -> Fut + Copy + Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<SelectOption>, String>> + 'static,
{
    let text = RwSignal::new(String::new());
    let options = RwSignal::new(Vec::<SelectOption>::new());
    let open = RwSignal::new(false);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    // bumps on every keystroke; stale answers are dropped
    let generation = RwSignal::new(0u64);

    let search = move |query: String, wait: bool| {
        generation.update(|g| *g += 1);
        let this_generation = generation.get_untracked();
        wasm_bindgen_futures::spawn_local(async move {
            if wait {
                TimeoutFuture::new(DEBOUNCE_MS).await;
                if generation.get_untracked() != this_generation {
                    return;
                }
            }
            loading.set(true);
            let result = fetch_options(query).await;
            if generation.get_untracked() != this_generation {
                return;
            }
            loading.set(false);
            match result {
                Ok(list) => {
                    options.set(list);
                    error.set(None);
                }
                Err(e) => {
                    log::error!("option search failed: {}", e);
                    options.set(Vec::new());
                    error.set(Some(e));
                }
            }
        });
    };

    let placeholder = placeholder.unwrap_or_default();

    view! {
        <div class="debounce-select">
            <div class="debounce-select__control">
                <input
                    type="text"
                    class="debounce-select__input"
                    autocomplete="none"
                    placeholder=move || selected.get().unwrap_or_else(|| placeholder.clone())
                    class:debounce-select__input--has-value=move || selected.get().is_some()
                    disabled=move || disabled.get()
                    prop:value=move || text.get()
                    on:focus=move |_| {
                        open.set(true);
                        if options.get_untracked().is_empty() {
                            search(text.get_untracked(), false);
                        }
                    }
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        text.set(value.clone());
                        open.set(true);
                        search(value, true);
                    }
                />
                <Show when=move || allow_clear && selected.get().is_some()>
                    <button
                        class="button button--icon"
                        on:click=move |_| {
                            text.set(String::new());
                            on_select.run(None);
                        }
                    >
                        {icon("x")}
                    </button>
                </Show>
            </div>
            <Show when=move || open.get()>
                <div class="debounce-select__dropdown">
                    {move || loading.get().then(|| view! { <div class="debounce-select__loading">{"Loading..."}</div> })}
                    {move || error.get().map(|e| view! { <div class="debounce-select__error">{e}</div> })}
                    {move || {
                        let list = options.get();
                        if list.is_empty() && !loading.get() {
                            return view! { <div class="debounce-select__empty">{"No data"}</div> }.into_any();
                        }
                        list.into_iter()
                            .map(|opt| {
                                let label = opt.label.clone();
                                view! {
                                    <div
                                        class="debounce-select__option"
                                        on:mousedown=move |_| {
                                            text.set(String::new());
                                            open.set(false);
                                            on_select.run(Some(opt.clone()));
                                        }
                                    >
                                        {label}
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                    <div class="debounce-select__close" on:mousedown=move |_| open.set(false)>
                        {"Close"}
                    </div>
                </div>
            </Show>
        </div>
    }
}
