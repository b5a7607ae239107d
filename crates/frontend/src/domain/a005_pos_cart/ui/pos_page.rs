use super::delivery_info::DeliveryInfo;
use crate::domain::a001_shop::api::search_shops;
use crate::domain::a006_client::api::client_options;
use crate::shared::components::debounce_select::{DebounceSelect, SelectOption};
use crate::shared::icons::icon;
use crate::shared::state::pos_store::PosStore;
use contracts::domain::a001_shop::aggregate::ShopId;
use contracts::domain::a005_pos_cart::aggregate::CartBag;
use contracts::domain::common::AggregateId;
use leptos::ev;
use leptos::prelude::*;
use thaw::*;
use std::collections::HashMap;

fn field_label(field: &str) -> &'static str {
    use contracts::domain::a005_pos_cart::aggregate::*;
    match field {
        FIELD_DELIVERY => "delivery type",
        FIELD_DELIVERY_ADDRESS => "address",
        FIELD_DELIVERY_DATE => "delivery date",
        FIELD_DELIVERY_TIME => "delivery time",
        _ => "field",
    }
}

#[component]
pub fn PosPage() -> impl IntoView {
    let store = use_context::<PosStore>().expect("PosStore not found in context");
    // client names per bag, the cart itself only keeps the uuid
    let client_labels = RwSignal::new(HashMap::<u32, String>::new());
    let notice = RwSignal::new(None::<Result<String, String>>);

    let add_bag = move |_: ev::MouseEvent| {
        let next = store
            .bags
            .with_untracked(|bags| bags.iter().map(|b| b.bag_id).max().map_or(0, |m| m + 1));
        store.bags.update(|bags| bags.push(CartBag::new(next)));
        store.current_bag.set(next);
        notice.set(None);
    };

    let select_shop = Callback::new(move |opt: Option<SelectOption>| {
        let shop = opt.and_then(|o| ShopId::from_string(&o.value).ok());
        store.update_cart(|bag| bag.shop = shop);
    });

    let select_client = Callback::new(move |opt: Option<SelectOption>| {
        let bag_id = store.current_bag.get_untracked();
        client_labels.update(|labels| match &opt {
            Some(o) => {
                labels.insert(bag_id, o.label.clone());
            }
            None => {
                labels.remove(&bag_id);
            }
        });
        store.update_cart(|bag| bag.user_uuid = opt.map(|o| o.value));
    });

    let check_order = move |_: ev::MouseEvent| {
        let missing = store.cart_untracked().missing_delivery_fields();
        if missing.is_empty() {
            notice.set(Some(Ok("Delivery details are complete".to_string())));
        } else {
            let names: Vec<&str> = missing.into_iter().map(field_label).collect();
            notice.set(Some(Err(format!("Please fill in: {}", names.join(", ")))));
        }
    };

    view! {
        <div class="page pos-page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"POS system"}</h1>
                </div>
                <div class="header__actions">
                    <Button appearance=ButtonAppearance::Secondary on_click=add_bag>
                        {icon("plus")}
                        {"New bag"}
                    </Button>
                </div>
            </div>

            <Space class="pos-page__bags">
                {view! {
                <For
                    each=move || store.bags.get()
                    key=|bag| bag.bag_id
                    children=move |bag| {
                        let id = bag.bag_id;
                        view! {
                            <Button
                                appearance=move || {
                                    if store.current_bag.get() == id {
                                        ButtonAppearance::Primary
                                    } else {
                                        ButtonAppearance::Secondary
                                    }
                                }
                                on_click=move |_| {
                                    store.current_bag.set(id);
                                    notice.set(None);
                                }
                            >
                                {format!("Bag {}", id + 1)}
                            </Button>
                        }
                    }
                />
                }.into_any()}
            </Space>

            <Card>
                <div class="form-group">
                    <label>{"Shop"}</label>
                    <DebounceSelect
                        fetch_options=search_shops
                        selected=Signal::derive(move || {
                            store.cart().shop?;
                            store.current_shop.with(|s| s.as_ref().map(|s| s.title().to_string()))
                        })
                        on_select=select_shop
                        placeholder="Select shop"
                    />
                </div>
                <div class="form-group">
                    <label>{"Client"}</label>
                    <DebounceSelect
                        fetch_options=client_options
                        selected=Signal::derive(move || {
                            let id = store.current_bag.get();
                            client_labels.with(|labels| labels.get(&id).cloned())
                        })
                        on_select=select_client
                        placeholder="Select client"
                        allow_clear=true
                    />
                </div>
            </Card>

            <DeliveryInfo />

            <div class="pos-page__summary">
                <span>{"Delivery fee: "}</span>
                <strong>{move || format!("{:.2}", store.cart().delivery_fee)}</strong>
            </div>

            {move || notice.get().map(|n| match n {
                Ok(text) => view! { <MessageBar intent=MessageBarIntent::Success>{text}</MessageBar> }.into_any(),
                Err(text) => view! { <MessageBar intent=MessageBarIntent::Warning>{text}</MessageBar> }.into_any(),
            })}

            <div class="details-actions">
                <Button appearance=ButtonAppearance::Primary on_click=check_order>
                    {icon("cart")}
                    {"Proceed"}
                </Button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a005_pos_cart::aggregate::{FIELD_DELIVERY, FIELD_DELIVERY_TIME};

    #[test]
    fn test_field_labels() {
        assert_eq!(field_label(FIELD_DELIVERY), "delivery type");
        assert_eq!(field_label(FIELD_DELIVERY_TIME), "delivery time");
        assert_eq!(field_label("other"), "field");
    }
}
