//! Backend entry-point: loads configuration, prepares the database and mail
//! relay, then serves the complaint endpoints.

mod server;

use actix_web::web;
use color_eyre::eyre::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use complaints::config::AppConfig;
use complaints::inbound::http::health::HealthState;
use complaints::outbound::mail::SmtpNotifier;
use complaints::outbound::persistence::{DbPool, run_migrations};

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = AppConfig::load().wrap_err("loading configuration")?;
    info!(
        bind_addr = %config.bind_addr,
        mail_server = %config.mail.server,
        mail_tls = config.mail.use_tls,
        "configuration loaded"
    );

    run_migrations(&config.database_url)
        .await
        .wrap_err("applying database migrations")?;
    let pool = DbPool::new(config.pool_config())
        .await
        .wrap_err("building database pool")?;
    let notifier =
        SmtpNotifier::new(config.notifier_config()).wrap_err("configuring mail relay")?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(
        health_state.clone(),
        ServerConfig::new(config.bind_addr, pool, notifier),
    )?;
    info!(bind_addr = %config.bind_addr, "server listening");

    server.await?;
    health_state.mark_unhealthy();
    Ok(())
}
