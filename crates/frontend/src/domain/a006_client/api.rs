use crate::shared::api_utils::{api_url, get_data, with_query};
use crate::shared::components::debounce_select::SelectOption;
use contracts::domain::a006_client::aggregate::Client;
use contracts::shared::list_params::ListParams;

/// Поиск клиентов для кассы; значение варианта — uuid клиента
pub async fn client_options(search: String) -> Result<Vec<SelectOption>, String> {
    let params = ListParams::new(10).with_search(&search);
    let url = with_query(&api_url("admin/users/search"), &params).map_err(|e| e.to_string())?;
    let clients: Vec<Client> = get_data(&url).await.map_err(|e| e.to_string())?;
    Ok(clients
        .iter()
        .map(|c| SelectOption {
            label: c.display_name(),
            value: c.uuid.clone(),
        })
        .collect())
}
