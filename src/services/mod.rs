pub mod checkout;
pub mod session;
pub mod watcher;
