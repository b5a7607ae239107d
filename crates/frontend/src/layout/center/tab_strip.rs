use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Header row with one button per opened tab.
#[component]
pub fn TabStrip() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="tabs__strip">
            <button class="button button--icon" on:click=move |_| ctx.toggle_left()>
                {icon("menu")}
            </button>
            <For
                each=move || ctx.opened.get()
                key=|tab| (tab.key.clone(), tab.title.clone())
                children=move |tab| {
                    let key_for_active = tab.key.clone();
                    let key_for_click = tab.key.clone();
                    let key_for_close = tab.key.clone();
                    view! {
                        <div
                            class="tabs__header"
                            class:tabs__header--active=move || {
                                ctx.active.get().as_deref() == Some(key_for_active.as_str())
                            }
                            on:click=move |_| ctx.activate_tab(&key_for_click)
                        >
                            <span>{tab.title}</span>
                            <button
                                class="button button--icon tabs__close"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    ctx.close_tab(&key_for_close);
                                }
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
