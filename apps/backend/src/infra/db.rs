use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbOwner, DbProfile};
use crate::error::AppError;

/// Open a connection pool for the given profile and owner.
/// This function does NOT run any migrations.
pub async fn connect_db(
    profile: DbProfile,
    owner: DbOwner,
) -> Result<DatabaseConnection, AppError> {
    let in_memory = profile == DbProfile::InMemory;
    let database_url = db_url(profile, owner)?;

    let mut opt = ConnectOptions::new(database_url);
    opt.acquire_timeout(Duration::from_secs(5));
    if in_memory {
        // every pooled connection would get its own empty database
        opt.min_connections(1).max_connections(1);
    }

    let conn = Database::connect(opt).await?;
    Ok(conn)
}

/// Connect and bring the schema up to date.
///
/// Postgres migrates through a short-lived owner connection and then hands
/// back an app-credential pool. SQLite profiles migrate and serve through the
/// same pool.
pub async fn bootstrap_db(profile: DbProfile) -> Result<DatabaseConnection, AppError> {
    if profile.is_sqlite() {
        let conn = connect_db(profile, DbOwner::App).await?;
        migrate(&conn, MigrationCommand::Up).await?;
        info!("db.bootstrap sqlite ready");
        return Ok(conn);
    }

    let owner = connect_db(profile.clone(), DbOwner::Owner).await?;
    migrate(&owner, MigrationCommand::Up).await?;
    owner.close().await?;

    let conn = connect_db(profile, DbOwner::App).await?;
    info!("db.bootstrap postgres ready");
    Ok(conn)
}
