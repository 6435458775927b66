pub mod api_errors;
pub mod blackcat;
pub mod http;
