use crate::config::DatabaseConfig;
use sqlx::{
    ConnectOptions, PgPool,
    postgres::{PgConnectOptions, PgPoolOptions},
};
use std::str::FromStr;

pub async fn init_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    connect(
        &config.url(),
        config.max_connections(),
        config.log_statements(),
    )
    .await
}

/// Connects a pool to `database_url`. Statements are logged under the
/// `sqlx::query` target only when `log_statements` is set.
pub async fn connect(
    database_url: &str,
    max_connections: u32,
    log_statements: bool,
) -> Result<PgPool, sqlx::Error> {
    let mut options = PgConnectOptions::from_str(database_url)?;
    if !log_statements {
        options = options.disable_statement_logging();
    }

    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
