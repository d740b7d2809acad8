pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod telemetry;

pub use bootstrap::build_account_service;
pub use domain::account;
