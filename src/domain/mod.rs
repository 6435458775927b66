pub mod charge;
pub mod error;
pub mod id;
pub mod money;
pub mod provider;
