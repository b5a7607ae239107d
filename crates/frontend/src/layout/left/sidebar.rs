//! Sidebar with grouped menu items

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_keys;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "pos",
            label: "POS",
            icon: "cart",
            items: vec![(
                tab_keys::POS_SYSTEM,
                tab_label_for_key(tab_keys::POS_SYSTEM),
                "cart",
            )],
        },
        MenuGroup {
            id: "catalog",
            label: "Catalog",
            icon: "list",
            items: vec![
                (
                    tab_keys::SHOP_CATEGORIES,
                    tab_label_for_key(tab_keys::SHOP_CATEGORIES),
                    "list",
                ),
                (
                    tab_keys::SHOP_CATEGORY_NEW,
                    tab_label_for_key(tab_keys::SHOP_CATEGORY_NEW),
                    "plus",
                ),
            ],
        },
        MenuGroup {
            id: "seller",
            label: "Seller",
            icon: "store",
            items: vec![(
                tab_keys::SELLER_SUBSCRIPTIONS,
                tab_label_for_key(tab_keys::SELLER_SUBSCRIPTIONS),
                "credit-card",
            )],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                view! {
                    <div class="app-sidebar__group" data-group=group.id>
                        <div class="app-sidebar__item app-sidebar__item--group">
                            {icon(group.icon)}
                            <span>{group.label}</span>
                        </div>
                        {group.items.into_iter().map(|(id, label, item_icon)| {
                            view! {
                                <div
                                    class="app-sidebar__item"
                                    class:app-sidebar__item--active=move || {
                                        ctx.active.get().as_deref() == Some(id)
                                    }
                                    style:padding-left="28px"
                                    on:click=move |_| ctx.open_tab(id, label)
                                >
                                    {icon(item_icon)}
                                    <span>{label}</span>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
