use crate::shared::api_utils::{api_url, get_data, post_json, put_json, with_query, ApiError};
use contracts::domain::a002_category::aggregate::{
    category_path, CategoryId, CategoryPayload, ShopCategory, SHOP_CATEGORY_TYPE,
};
use contracts::domain::common::AggregateId;
use contracts::shared::list_params::ListParams;

pub async fn fetch_by_uuid(uuid: CategoryId) -> Result<ShopCategory, ApiError> {
    get_data(&api_url(&format!("admin/categories/{}", uuid.as_string()))).await
}

/// Категории магазина для выбора родителя (до 100 штук)
pub async fn fetch_shop_categories(search: &str) -> Result<Vec<ShopCategory>, ApiError> {
    let params = ListParams::new(100)
        .with_search(search)
        .with_kind(SHOP_CATEGORY_TYPE);
    let url = with_query(&api_url("admin/categories"), &params)?;
    get_data(&url).await
}

pub async fn create(payload: &CategoryPayload) -> Result<ShopCategory, ApiError> {
    post_json(&api_url("admin/categories"), payload).await
}

pub async fn update(uuid: CategoryId, payload: &CategoryPayload) -> Result<ShopCategory, ApiError> {
    put_json(&api_url(&format!("admin/{}", category_path(&uuid))), payload).await
}
