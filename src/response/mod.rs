pub mod api_response;
pub mod http_helpers;
