use crate::app_shell::MainLayout;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::state::pos_store::PosStore;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Tabs + per-tab refetch flags for the whole app.
    provide_context(AppGlobalContext::new());

    // POS bags and the shop data the cashier works with.
    provide_context(PosStore::new());

    view! {
        <ConfigProvider>
            <MainLayout />
        </ConfigProvider>
    }
}
