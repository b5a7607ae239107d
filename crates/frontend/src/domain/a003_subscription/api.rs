use crate::shared::api_utils::{api_url, get_data, post_json, ApiError};
use contracts::domain::a003_subscription::aggregate::{AttachSubscriptionResponse, Subscription};

pub async fn fetch_subscriptions() -> Result<Vec<Subscription>, ApiError> {
    get_data(&api_url("seller/subscriptions")).await
}

/// Купить тариф для магазина продавца
pub async fn attach_subscription(id: i64) -> Result<AttachSubscriptionResponse, ApiError> {
    post_json(
        &api_url(&format!("seller/subscriptions/{}/attach", id)),
        &serde_json::json!({}),
    )
    .await
}
