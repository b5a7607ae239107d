use crate::domain::a001_shop::api::fetch_my_shop;
use crate::domain::a003_subscription::api::fetch_subscriptions;
use crate::domain::a003_subscription::ui::purchase_modal::PurchaseModal;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::state::pos_store::PosStore;
use contracts::domain::a003_subscription::aggregate::Subscription;
use leptos::prelude::*;
use thaw::*;

/// Every column but the last gets a right border
fn column_class(index: usize, count: usize) -> &'static str {
    if index + 1 == count {
        "pricing-column"
    } else {
        "pricing-column border-right"
    }
}

#[component]
pub fn SellerSubscriptions(tab_key: String) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let store = use_context::<PosStore>().expect("PosStore not found in context");
    let data = RwSignal::new(Vec::<Subscription>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let modal = RwSignal::new(None::<Subscription>);

    if store.my_shop.get_untracked().is_none() {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_my_shop().await {
                Ok(shop) => store.my_shop.set(Some(shop)),
                Err(e) => log::warn!("seller shop not loaded: {}", e),
            }
        });
    }

    let key = tab_key.clone();
    Effect::new(move |_| {
        if !ctx.needs_refetch(&key) {
            return;
        }
        let key = key.clone();
        loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_subscriptions().await {
                Ok(list) => {
                    log::debug!("{} subscriptions loaded", list.len());
                    data.set(list);
                    error.set(None);
                }
                Err(e) => {
                    log::error!("failed to load subscriptions: {}", e);
                    error.set(Some(e.message));
                }
            }
            loading.set(false);
            ctx.disable_refetch(&key);
        });
    });

    let active_id = move || {
        store
            .my_shop
            .with(|shop| shop.as_ref().and_then(|s| s.active_subscription_id()))
    };

    let after_purchase = Callback::new(move |_| {
        modal.set(None);
        // the seller's shop carries the new active plan
        store.my_shop.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            if let Ok(shop) = fetch_my_shop().await {
                store.my_shop.set(Some(shop));
            }
        });
        ctx.request_refetch(&tab_key);
    });

    view! {
        <Card class="page h-100">
            <Show
                when=move || !loading.get()
                fallback=|| view! { <Spinner size=SpinnerSize::Large /> }
            >
                <div class="text-center mb-4">
                    <h2 class="font-weight-semibold">{"Pick a base plan"}</h2>
                </div>

                {move || error.get().map(|e| view! {
                    <div class="warning-box">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">{e}</span>
                    </div>
                })}

                <div class="pricing-row">
                    {move || {
                        let list = data.get();
                        if list.is_empty() {
                            return view! {
                                <div class="text-center w-100">
                                    <p>{"No subscriptions available"}</p>
                                </div>
                            }
                            .into_any();
                        }
                        let count = list.len();
                        list.into_iter()
                            .enumerate()
                            .map(|(i, plan)| {
                                let is_active = plan.is_current(active_id());
                                let title = plan.kind.clone();
                                let price = plan.price_label("$");
                                view! {
                                    <div class=column_class(i, count)>
                                        <Show when=move || is_active>
                                            <div class="ribbon">
                                                <Badge appearance=BadgeAppearance::Filled color=BadgeColor::Danger>
                                                    {"Active"}
                                                </Badge>
                                            </div>
                                        </Show>
                                        <div class="p-3">
                                            <h2 class="text-center font-weight-semibold mt-4">{title}</h2>
                                            <p class="text-center">{price}</p>
                                            <div class="mt-3 text-center">
                                                <Button
                                                    appearance=ButtonAppearance::Secondary
                                                    on_click=move |_| modal.set(Some(plan.clone()))
                                                >
                                                    {"Purchase"}
                                                </Button>
                                            </div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </div>
            </Show>

            {move || modal.get().map(|plan| view! {
                <PurchaseModal
                    subscription=plan
                    on_purchased=after_purchase
                    on_close=Callback::new(move |_| modal.set(None))
                />
            })}
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_column_has_no_border() {
        assert_eq!(column_class(0, 3), "pricing-column border-right");
        assert_eq!(column_class(1, 3), "pricing-column border-right");
        assert_eq!(column_class(2, 3), "pricing-column");
        assert_eq!(column_class(0, 1), "pricing-column");
    }
}
