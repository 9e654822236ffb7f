//! Apply the schema in `migrations/` once, then exit. Run at deploy time.

use textai::config::DatabaseConfig;
use textai::db;
use textai::server::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    init_tracing(&log_level)?;

    let database = DatabaseConfig::from_env().map_err(|e| anyhow::anyhow!("config: {}", e))?;
    let pool = db::create_pool(&database).await?;
    db::run_migrations(&pool).await?;

    tracing::info!(db = %database.name, "migrations applied");
    Ok(())
}
