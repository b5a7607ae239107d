use crate::domain::a002_category::ui::details::fetch_shop_categories;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{tab_label_for_key, TabRoute};
use crate::shared::icons::icon;
use contracts::domain::a002_category::aggregate::{CategoryFormMode, CategoryId, ShopCategory};
use leptos::prelude::*;
use thaw::*;

#[derive(Clone, Debug)]
pub struct ShopCategoryRow {
    pub uuid: CategoryId,
    pub title: String,
    pub keywords: String,
    pub position: i64,
    pub active: bool,
    pub is_parent: bool,
}

impl From<ShopCategory> for ShopCategoryRow {
    fn from(c: ShopCategory) -> Self {
        Self {
            uuid: c.uuid,
            title: c.title().to_string(),
            keywords: c.keywords.clone().unwrap_or_default(),
            position: c.input,
            active: c.active,
            is_parent: c.parent_id.is_none(),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ShopCategoryList(tab_key: String) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let items = RwSignal::new(Vec::<ShopCategoryRow>::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    let open_form = move |mode: CategoryFormMode| {
        let key = TabRoute::category_form_key(mode);
        ctx.open_tab(&key, tab_label_for_key(&key));
    };

    let key = tab_key.clone();
    Effect::new(move |_| {
        if !ctx.needs_refetch(&key) {
            return;
        }
        let key = key.clone();
        loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_shop_categories("").await {
                Ok(list) => {
                    items.set(list.into_iter().map(Into::into).collect());
                    error.set(None);
                }
                Err(e) => {
                    log::error!("failed to load categories: {}", e);
                    error.set(Some(e.message));
                }
            }
            loading.set(false);
            ctx.disable_refetch(&key);
        });
    });

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Shop categories"}</h1>
                </div>
                <div class="header__actions">
                    <Space>
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| open_form(CategoryFormMode::Create)>
                            {icon("plus")}
                            {"Add category"}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| ctx.request_refetch(&tab_key)
                            disabled=Signal::derive(move || loading.get())
                            loading=Signal::derive(move || loading.get())
                        >
                            {icon("refresh")}
                            {"Refresh"}
                        </Button>
                    </Space>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Name"}</th>
                            <th class="table__header-cell">{"Keywords"}</th>
                            <th class="table__header-cell">{"Position"}</th>
                            <th class="table__header-cell">{"Active"}</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|row| {
                            let uuid = row.uuid;
                            let is_parent = row.is_parent;
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.title}</td>
                                    <td class="table__cell">{row.keywords}</td>
                                    <td class="table__cell">{row.position}</td>
                                    <td class="table__cell">
                                        {if row.active {
                                            view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Yes"</Badge> }.into_any()
                                        } else {
                                            view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Subtle>"No"</Badge> }.into_any()
                                        }}
                                    </td>
                                    <td class="table__cell table__cell--actions">
                                        <Button
                                            appearance=ButtonAppearance::Subtle
                                            size=ButtonSize::Small
                                            attr:title="Edit"
                                            on_click=move |_| open_form(CategoryFormMode::Edit { uuid, is_parent })
                                        >
                                            {icon("edit")}
                                        </Button>
                                        <Button
                                            appearance=ButtonAppearance::Subtle
                                            size=ButtonSize::Small
                                            attr:title="Clone"
                                            on_click=move |_| open_form(CategoryFormMode::Duplicate { uuid })
                                        >
                                            {icon("copy")}
                                        </Button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
