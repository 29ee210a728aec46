use fleetdesk::db::txn::with_txn;
use fleetdesk::db::txn_policy::{current, TxnPolicy};
use fleetdesk::error::AppError;
use fleetdesk::query::{AirlineFilter, Page};
use fleetdesk::services::airlines::{AirlineInput, AirlineService};

use crate::support::{db_of, fresh_state};

fn input(name: &str, iata_code: &str) -> AirlineInput {
    AirlineInput {
        name: name.into(),
        iata_code: iata_code.into(),
    }
}

#[tokio::test]
async fn default_policy_commits_successful_work() {
    assert_eq!(current(), TxnPolicy::CommitOnOk);
    let state = fresh_state().await;

    let created = with_txn(None, &state, |txn| {
        Box::pin(async move {
            AirlineService::new()
                .create(txn, input("Test Air", "TA"))
                .await
                .map_err(AppError::from)
        })
    })
    .await
    .unwrap();

    let stored = AirlineService::new()
        .get(db_of(&state), created.id)
        .await
        .unwrap();
    assert_eq!(stored, created);
}

#[tokio::test]
async fn failing_work_is_rolled_back() {
    let state = fresh_state().await;

    let result: Result<(), AppError> = with_txn(None, &state, |txn| {
        Box::pin(async move {
            AirlineService::new()
                .create(txn, input("Test Air", "TA"))
                .await
                .map_err(AppError::from)?;
            // second write fails validation after the first succeeded
            AirlineService::new()
                .create(txn, input(" ", "XX"))
                .await
                .map_err(AppError::from)?;
            Ok::<(), AppError>(())
        })
    })
    .await;
    assert!(result.is_err());

    let all = AirlineService::new()
        .list(db_of(&state), &AirlineFilter::default(), Page::default())
        .await
        .unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn missing_database_is_an_error_not_a_panic() {
    let state = fleetdesk::AppState::without_db();

    let result = with_txn(None, &state, |_txn| Box::pin(async { Ok::<(), AppError>(()) })).await;
    assert!(result.is_err());
}
