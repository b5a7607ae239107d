use crate::shared::api_utils::{api_url, get_data, post_json, with_query, ApiError};
use crate::shared::components::debounce_select::SelectOption;
use contracts::domain::a004_user_address::aggregate::{AddressOption, UserAddress};
use contracts::domain::a006_client::aggregate::NewUserAddress;
use contracts::shared::list_params::ListParams;

/// Адреса клиентов по строке поиска (10 на страницу)
pub async fn search_addresses(search: &str) -> Result<Vec<UserAddress>, ApiError> {
    let params = ListParams::new(10).with_search(search);
    let url = with_query(&api_url("admin/user-addresses"), &params)?;
    get_data(&url).await
}

/// Варианты для `DebounceSelect`; значение — id адреса
pub fn to_select_options(addresses: &[UserAddress]) -> Vec<SelectOption> {
    addresses
        .iter()
        .map(AddressOption::from)
        .map(|o| SelectOption {
            label: o.label,
            value: o.value.to_string(),
        })
        .collect()
}

pub async fn create_address(body: &NewUserAddress) -> Result<UserAddress, ApiError> {
    post_json(&api_url("admin/user-addresses"), body).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_use_address_id() {
        let addresses: Vec<UserAddress> = serde_json::from_str(
            r#"[{"id":7,"title":"Home"},{"id":9,"title":"","address":{"address":"1 Main Rd"}}]"#,
        )
        .unwrap();
        let options = to_select_options(&addresses);
        assert_eq!(options[0].value, "7");
        assert_eq!(options[0].label, "Home");
        assert_eq!(options[1].label, "1 Main Rd");
    }
}
