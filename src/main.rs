use std::sync::Arc;

use shipdesk::config::AppConfig;
use shipdesk::db::Database;
use shipdesk::gateway::{self, state::AppState};
use shipdesk::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = std::env::args().nth(1).unwrap_or_else(|| "dev".to_string());
    let config = AppConfig::load(&env);

    let _guard = logging::init_logging(&config);
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        env = %env,
        "starting shipdesk"
    );

    let db = Database::connect(&config.database_url).await?;
    db.health_check().await?;

    let state = Arc::new(AppState::new(db.pool().clone(), &config)?);
    gateway::serve(&config.gateway, state).await?;

    Ok(())
}
