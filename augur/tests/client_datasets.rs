mod helpers;

use std::time::Duration;

use augur::{Ack, AugurError, Dataset, DatasetPage, Period};
use augur_mock::MockTransport;

use crate::helpers::{builder, client};

fn dataset(name: &str) -> Dataset {
    Dataset {
        name: name.to_string(),
        period: Period::Week,
        horizon: 1,
    }
}

#[tokio::test]
async fn insert_is_forwarded() {
    let mock = MockTransport::builder().returns_insert_dataset_ok().build();
    let augur = client(mock.clone());

    augur.insert_dataset(&dataset("Ds1")).await.unwrap();
    assert_eq!(mock.calls().insert_dataset(), 1);
}

#[tokio::test]
async fn insert_rejects_invalid_dataset_before_any_call() {
    let mock = MockTransport::builder().returns_insert_dataset_ok().build();
    let augur = client(mock.clone());

    let err = augur
        .insert_dataset(&Dataset {
            name: "Ds1".to_string(),
            period: Period::Week,
            horizon: 0,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AugurError::InvalidArg(_)));
    assert_eq!(mock.calls().total(), 0);
}

#[tokio::test]
async fn insert_surfaces_the_service_code() {
    let mock = MockTransport::builder()
        .with_insert_dataset_fn(|_| Ok(Ack::failure("ServiceFailure")))
        .build();
    let augur = client(mock);

    let err = augur.insert_dataset(&dataset("Ds1")).await.unwrap_err();
    assert_eq!(err, AugurError::ServiceFailure);
}

fn page(names: &[&str], continuation: Option<&str>) -> DatasetPage {
    DatasetPage {
        datasets: names.iter().map(|n| dataset(n)).collect(),
        continuation: continuation.map(str::to_owned),
        error_code: None,
    }
}

#[tokio::test]
async fn list_concatenates_pages_in_order() {
    let mock = MockTransport::builder()
        .dataset_pages(vec![
            page(&["A", "B"], Some("c1")),
            page(&["C"], Some("c2")),
            page(&["D", "E"], None),
        ])
        .build();
    let augur = client(mock.clone());

    let datasets = augur.list_datasets().await.unwrap();
    let listed: Vec<&str> = datasets.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(listed, ["A", "B", "C", "D", "E"]);
    assert_eq!(mock.calls().list_datasets(), 3);
}

#[tokio::test]
async fn list_treats_empty_string_cursor_as_exhausted() {
    let mock = MockTransport::builder()
        .dataset_pages(vec![page(&["A"], Some(""))])
        .build();
    let augur = client(mock.clone());

    let datasets = augur.list_datasets().await.unwrap();
    assert_eq!(datasets.len(), 1);
    assert_eq!(mock.calls().list_datasets(), 1);
}

#[tokio::test]
async fn empty_account_lists_nothing() {
    let mock = MockTransport::builder()
        .dataset_pages(vec![page(&[], None)])
        .build();
    let augur = client(mock);

    assert!(augur.list_datasets().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_aborts_on_a_failing_page() {
    let mut poisoned = page(&["C"], None);
    poisoned.error_code = Some("AuthenticationFailed".to_string());
    let mock = MockTransport::builder()
        .dataset_pages(vec![page(&["A", "B"], Some("c1")), poisoned])
        .build();
    let augur = client(mock.clone());

    let err = augur.list_datasets().await.unwrap_err();
    assert_eq!(err, AugurError::AuthenticationFailed);
    assert_eq!(mock.calls().list_datasets(), 2);
}

#[tokio::test]
async fn delete_validates_the_name_first() {
    let mock = MockTransport::builder().returns_delete_dataset_ok().build();
    let augur = client(mock.clone());

    assert!(augur.delete_dataset("no spaces").await.is_err());
    assert_eq!(mock.calls().total(), 0);

    augur.delete_dataset("Ds1").await.unwrap();
    assert_eq!(mock.calls().delete_dataset(), 1);
}

#[tokio::test(start_paused = true)]
async fn delete_and_wait_probes_until_not_found() {
    let mock = MockTransport::builder()
        .returns_delete_dataset_ok()
        .series_listing_codes(vec![None, None, Some("DatasetNotFound".to_string())])
        .build();
    let augur = client(mock.clone());

    let start = tokio::time::Instant::now();
    augur.delete_dataset_and_wait("Ds1").await.unwrap();

    assert_eq!(mock.calls().delete_dataset(), 1);
    assert_eq!(mock.calls().list_time_series(), 3);
    // one probe immediately, then one 30s sleep before each retry
    assert_eq!(start.elapsed(), Duration::from_secs(60));
}

#[tokio::test(start_paused = true)]
async fn delete_and_wait_aborts_on_any_other_code() {
    let mock = MockTransport::builder()
        .returns_delete_dataset_ok()
        .series_listing_codes(vec![None, Some("ServiceFailure".to_string())])
        .build();
    let augur = client(mock.clone());

    let err = augur.delete_dataset_and_wait("Ds1").await.unwrap_err();
    assert_eq!(err, AugurError::ServiceFailure);
    assert_eq!(mock.calls().list_time_series(), 2);
}

#[tokio::test(start_paused = true)]
async fn delete_and_wait_honors_the_deadline() {
    let mock = MockTransport::builder()
        .returns_delete_dataset_ok()
        .series_listing_codes(vec![None])
        .build();
    let augur = builder(mock)
        .wait_timeout(Duration::from_secs(45))
        .build()
        .unwrap();

    let err = augur.delete_dataset_and_wait("Ds1").await.unwrap_err();
    assert_eq!(
        err,
        AugurError::Cancelled {
            waited: Duration::from_secs(45)
        }
    );
}
