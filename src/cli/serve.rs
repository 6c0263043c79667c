use anyhow::Result;

use crate::api;
use crate::core::AppConfig;

pub async fn run(
    host: String,
    port: String,
    events: Option<String>,
    timezone: Option<String>,
) -> Result<()> {
    let mut config = AppConfig::default();
    if let Some(path) = events {
        config.events_path = Some(path);
    }
    if let Some(timezone) = timezone {
        config.timezone = timezone;
    }
    api::serve(host, port, config).await
}
