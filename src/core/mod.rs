pub mod config;
pub mod fixtures;
pub mod tz;

pub use config::AppConfig;
