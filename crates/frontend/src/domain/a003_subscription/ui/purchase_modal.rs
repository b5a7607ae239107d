use crate::domain::a003_subscription::api::attach_subscription;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a003_subscription::aggregate::Subscription;
use leptos::ev;
use leptos::prelude::*;
use thaw::*;

/// Confirmation dialog for buying a plan
#[component]
pub fn PurchaseModal(
    subscription: Subscription,
    /// Called after the plan was attached
    on_purchased: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let id = subscription.id;

    let purchase = move |_: ev::MouseEvent| {
        loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = attach_subscription(id).await;
            loading.set(false);
            match result {
                Ok(resp) => {
                    log::info!(
                        "subscription {} attached: {}",
                        id,
                        resp.message.unwrap_or_default()
                    );
                    on_purchased.run(());
                }
                Err(e) => {
                    log::error!("failed to attach subscription {}: {}", id, e);
                    error.set(Some(e.message));
                }
            }
        });
    };

    view! {
        <Modal title="Purchase subscription" on_close=on_close>
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
            <p>
                {format!(
                    "{} for {} month(s): {}",
                    subscription.kind,
                    subscription.month,
                    subscription.price_label("$"),
                )}
            </p>
            <Flex class="details-actions" gap=FlexGap::Small>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=purchase
                    disabled=Signal::derive(move || loading.get())
                    loading=Signal::derive(move || loading.get())
                >
                    {icon("credit-card")}
                    {move || if loading.get() { "Processing..." } else { "Purchase" }}
                </Button>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                    {icon("cancel")}
                    {"Cancel"}
                </Button>
            </Flex>
        </Modal>
    }
}
