use dotenvy::dotenv;
use tracing_subscriber::{fmt, EnvFilter};

use daanveer_host::HostConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,daanveer_host=debug"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    let config = HostConfig::from_env()?;
    tracing::debug!(?config, "Loaded host config");

    if let Err(e) = daanveer_host::serve(config).await {
        let e = anyhow::Error::from(e);
        tracing::error!("{:#}", e);
        return Err(e);
    }
    Ok(())
}
