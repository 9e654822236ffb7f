//! Database layer: pool, migrations and queries for MySQL.

mod pool;
mod repositories;

pub use pool::{create_pool, create_pool_from_url, run_migrations, DbPool};
pub use repositories::*;
