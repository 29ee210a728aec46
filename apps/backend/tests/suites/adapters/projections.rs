use fleetdesk::repos::projections;
use time::macros::datetime;

use crate::support::{db_of, factory, fresh_state};

#[tokio::test]
async fn each_airline_appears_once_with_all_its_aircraft() {
    let state = fresh_state().await;
    let db = db_of(&state);
    let ta = factory::airline(db, "Test Air", "TA").await;
    let empty = factory::airline(db, "Grounded", "GD").await;
    let ids = [
        factory::aircraft(db, ta.id, "A320", 180).await.id,
        factory::aircraft(db, ta.id, "A321", 220).await.id,
        factory::aircraft(db, ta.id, "E190", 100).await.id,
    ];

    let complete = projections::airlines_with_aircraft(db).await.unwrap();
    assert_eq!(complete.len(), 2);

    let first = &complete[0];
    assert_eq!(first.id, ta.id);
    assert_eq!(
        first.aircraft.iter().map(|a| a.id).collect::<Vec<_>>(),
        ids.to_vec()
    );

    let second = &complete[1];
    assert_eq!(second.id, empty.id);
    assert!(second.aircraft.is_empty());
}

#[tokio::test]
async fn aircraft_carries_its_reduced_airline() {
    let state = fresh_state().await;
    let db = db_of(&state);
    let ta = factory::airline(db, "Test Air", "TA").await;
    let craft = factory::aircraft(db, ta.id, "A320", 180).await;

    let view = projections::aircraft_with_airline(db, craft.id)
        .await
        .unwrap()
        .expect("aircraft exists");
    assert_eq!(view.airline.name, "Test Air");
    assert_eq!(view.airline.iata_code, "TA");
    assert_eq!(view.airline_id, ta.id);

    assert!(projections::aircraft_with_airline(db, craft.id + 1)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn expanded_flight_nests_roster_and_aircraft_airline() {
    let state = fresh_state().await;
    let db = db_of(&state);
    let ta = factory::airline(db, "Test Air", "TA").await;
    let craft = factory::aircraft(db, ta.id, "A320", 180).await;
    let spare = factory::aircraft(db, ta.id, "E190", 100).await;
    let flight = factory::flight(db, &craft, 100, ("AAA", "BBB"), datetime!(2024-01-01 10:00 UTC)).await;

    let detail = projections::flight_expanded(db, flight.id)
        .await
        .unwrap()
        .expect("flight exists");
    assert_eq!(detail.flight_number, 100);
    assert_eq!(detail.airline.name, "Test Air");
    assert_eq!(
        detail.airline.aircraft.iter().map(|a| a.id).collect::<Vec<_>>(),
        vec![craft.id, spare.id]
    );
    assert_eq!(detail.aircraft.id, craft.id);
    assert_eq!(detail.aircraft.airline.iata_code, "TA");

    assert!(projections::flight_expanded(db, flight.id + 1)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn expanded_listing_has_unique_flights() {
    let state = fresh_state().await;
    let db = db_of(&state);
    let ta = factory::airline(db, "Test Air", "TA").await;
    let sw = factory::airline(db, "Skyways", "SW").await;
    let a = factory::aircraft(db, ta.id, "A320", 180).await;
    factory::aircraft(db, ta.id, "A321", 220).await;
    let b = factory::aircraft(db, sw.id, "E190", 100).await;

    let day = datetime!(2024-01-01 10:00 UTC);
    let f1 = factory::flight(db, &a, 1, ("AAA", "BBB"), day).await;
    let f2 = factory::flight(db, &a, 2, ("BBB", "AAA"), day).await;
    let f3 = factory::flight(db, &b, 3, ("CCC", "DDD"), day).await;

    let all = projections::flights_expanded(db).await.unwrap();
    assert_eq!(
        all.iter().map(|f| f.id).collect::<Vec<_>>(),
        vec![f1.id, f2.id, f3.id]
    );
    assert_eq!(all[0].airline.aircraft.len(), 2);
    assert_eq!(all[2].airline.aircraft.len(), 1);
    assert_eq!(all[2].aircraft.airline.name, "Skyways");
}
