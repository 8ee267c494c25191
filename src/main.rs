use crate::app_config::AppConfig;
use ecobee_cloud::{EcobeeClient, Selection};
use tracing::info;

mod app_config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let client = EcobeeClient::new(config.client_config())?;

    if let Some(refresh_token) = config.refresh_token() {
        let token = client.refresh_token(refresh_token).await?;
        client.set_token(token.access_token).await?;
        info!("✅  Refreshed the access token, the new refresh token is '{}'", token.refresh_token);
    } else if client.token().await.is_none() {
        let grant = client.generate_pin(config.pin().scope()).await?;
        info!(
            "🔑 Add PIN '{}' under 'My Apps' in the ecobee portal within {} minutes",
            grant.ecobee_pin, grant.expires_in
        );

        let token = client.wait_for_pin(&grant.code, config.pin().wait_options()).await?;
        info!("✅  Authorized, the refresh token is '{}'", token.refresh_token);
    }

    let revisions = client.poll_thermostats(&Selection::registered()).await?;
    info!("✅  Found {} thermostats", revisions.len());

    for (identifier, revision) in &revisions {
        info!(
            thermostat_id = %identifier,
            connected = revision.is_connected(),
            "🌡️ '{}' last changed at {}",
            revision.name,
            revision.revisions.thermostat
        );
    }

    Ok(())
}
