//! Tab content registry - единственный источник правды для маппинга tab.key → View

use super::tab_labels::TabRoute;
use crate::domain::a002_category::ui::details::ShopCategoryDetails;
use crate::domain::a002_category::ui::list::ShopCategoryList;
use crate::domain::a003_subscription::ui::list::SellerSubscriptions;
use crate::domain::a005_pos_cart::ui::pos_page::PosPage;
use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let tab_key = key.to_string();
    match TabRoute::parse(key) {
        Some(TabRoute::PosSystem) => view! { <PosPage /> }.into_any(),
        Some(TabRoute::ShopCategories) => view! { <ShopCategoryList tab_key=tab_key /> }.into_any(),
        Some(TabRoute::ShopCategoryForm(mode)) => {
            let key_for_close = tab_key.clone();
            view! {
                <ShopCategoryDetails
                    mode=mode
                    on_saved=std::rc::Rc::new(move |_: ()| {
                        tabs_store.request_refetch(super::tab_keys::SHOP_CATEGORIES);
                        tabs_store.close_tab(&key_for_close);
                    })
                />
            }
            .into_any()
        }
        Some(TabRoute::SellerSubscriptions) => {
            view! { <SellerSubscriptions tab_key=tab_key /> }.into_any()
        }
        None => {
            log::warn!("no page registered for tab key '{}'", key);
            view! { <div class="warning-box">{format!("Unknown page: {}", key)}</div> }.into_any()
        }
    }
}
