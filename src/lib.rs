pub mod adapters;
pub mod config;
pub mod domain;
pub mod services;

use {crate::domain::provider::PixProvider, std::sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn PixProvider>,
}
