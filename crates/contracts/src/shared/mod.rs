pub mod api_response;
pub mod list_params;
