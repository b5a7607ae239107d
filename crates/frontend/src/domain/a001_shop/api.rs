use crate::shared::api_utils::{api_url, get_data, with_query, ApiError};
use crate::shared::components::debounce_select::SelectOption;
use contracts::domain::a001_shop::aggregate::{Shop, ShopId};
use contracts::domain::common::AggregateId;
use contracts::shared::list_params::ListParams;

/// Магазин по uuid, вместе с выходными днями
pub async fn fetch_shop(uuid: ShopId) -> Result<Shop, ApiError> {
    get_data(&api_url(&format!("admin/shops/{}", uuid.as_string()))).await
}

/// Магазин текущего продавца
pub async fn fetch_my_shop() -> Result<Shop, ApiError> {
    get_data(&api_url("seller/shops")).await
}

/// Поиск магазинов для select'а кассы
pub async fn search_shops(search: String) -> Result<Vec<SelectOption>, String> {
    let params = ListParams::new(10).with_search(&search);
    let url = with_query(&api_url("admin/shops/search"), &params).map_err(|e| e.to_string())?;
    let shops: Vec<Shop> = get_data(&url).await.map_err(|e| e.to_string())?;
    Ok(shops
        .iter()
        .map(|s| SelectOption {
            label: s.title().to_string(),
            value: s.uuid.as_string(),
        })
        .collect())
}
