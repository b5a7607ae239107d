//! TabPage - контейнер контента одного таба

use super::registry::render_tab_content;
use crate::layout::global_context::{AppGlobalContext, Tab};
use leptos::prelude::*;

/// Рендерит страницу таба один раз; неактивные табы только скрываются,
/// поэтому состояние формы переживает переключение.
#[component]
pub fn TabPage(tab: Tab, tabs_store: AppGlobalContext) -> impl IntoView {
    let key = tab.key;
    let content = render_tab_content(&key, tabs_store);
    log::debug!("tab page mounted: '{}'", key);

    let key_for_hidden = key.clone();
    let hidden = move || {
        tabs_store
            .active
            .with(|active| active.as_deref() != Some(key_for_hidden.as_str()))
    };

    view! {
        <div class="tabs__item" class:tabs__item--hidden=hidden data-tab-key=key>
            {content}
        </div>
    }
}
