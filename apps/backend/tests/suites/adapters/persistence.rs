use fleetdesk::config::db::DbProfile;
use fleetdesk::errors::domain::{ConflictKind, DomainError};
use fleetdesk::infra::state::build_state;
use fleetdesk::repos::airlines;
use fleetdesk::services::airlines::AirlineService;
use time::macros::datetime;
use time::UtcOffset;

use crate::support::{db_of, factory, fresh_state};

#[tokio::test]
async fn file_database_survives_a_state_rebuild() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("fleet.db").to_string_lossy().into_owned();

    let airline_id = {
        let state = build_state()
            .with_db(DbProfile::SqliteFile { file: file.clone() })
            .build()
            .await
            .unwrap();
        let airline = factory::airline(db_of(&state), "Test Air", "TA").await;
        db_of(&state).clone().close().await.unwrap();
        airline.id
    };

    // second bootstrap re-runs migrations as a no-op
    let state = build_state()
        .with_db(DbProfile::SqliteFile { file })
        .build()
        .await
        .unwrap();
    let airline = AirlineService::new()
        .get(db_of(&state), airline_id)
        .await
        .unwrap();
    assert_eq!(airline.name, "Test Air");
}

#[tokio::test]
async fn offset_timestamps_are_stored_as_utc_whole_seconds() {
    let state = fresh_state().await;
    let db = db_of(&state);
    let ta = factory::airline(db, "Test Air", "TA").await;
    let craft = factory::aircraft(db, ta.id, "A320", 180).await;

    let local = datetime!(2024-01-01 12:00:00.750 +02:00);
    let flight = factory::flight(db, &craft, 100, ("AAA", "BBB"), local).await;

    assert_eq!(flight.departure, datetime!(2024-01-01 10:00 UTC));
    assert_eq!(flight.departure.offset(), UtcOffset::UTC);
    assert_eq!(flight.departure.nanosecond(), 0);

    let stored = fleetdesk::repos::flights::find_flight(db, flight.id)
        .await
        .unwrap()
        .expect("flight stored");
    assert_eq!(stored, flight);
}

#[tokio::test]
async fn schema_refuses_deleting_a_referenced_airline() {
    let state = fresh_state().await;
    let db = db_of(&state);
    let ta = factory::airline(db, "Test Air", "TA").await;
    factory::aircraft(db, ta.id, "A320", 180).await;

    // bypasses the service pre-check; the foreign key has the final say
    let err = airlines::delete_airline(db, ta.id).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::HasDependents, _)
    ));

    let err = AirlineService::new().delete(db, ta.id).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::HasDependents, _)
    ));
}
