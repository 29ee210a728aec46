use fleetdesk::config::db::DbProfile;
use fleetdesk::infra::state::build_state;
use fleetdesk::AppState;
use sea_orm::DatabaseConnection;

/// Migrated in-memory SQLite state, private to the calling test.
pub async fn fresh_state() -> AppState {
    build_state()
        .with_db(DbProfile::InMemory)
        .build()
        .await
        .expect("in-memory state should build")
}

pub fn db_of(state: &AppState) -> &DatabaseConnection {
    state.db().expect("state should carry a database")
}
