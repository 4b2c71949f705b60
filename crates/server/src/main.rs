//! C-CDA Records Server binary
//!
//! Loads configuration (file, then `CCDA_SERVER__*` environment) and serves
//! the records directory over HTTP.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ServerConfig::load()?;

    server::start_server(config).await?;

    Ok(())
}
