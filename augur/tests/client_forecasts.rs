mod helpers;

use std::time::Duration;

use augur::{AugurError, ForecastPage, ForecastSeries, ForecastValue};
use augur_mock::MockTransport;

use crate::helpers::{at, builder, client, names};

fn forecast(name: &str) -> ForecastSeries {
    ForecastSeries {
        name: name.to_string(),
        values: vec![ForecastValue {
            time: at(100),
            value: 1.0,
            accuracy: 0.9,
        }],
    }
}

#[tokio::test(start_paused = true)]
async fn polls_immediately_and_sleeps_between_attempts() {
    let mock = MockTransport::builder()
        .status_sequence(vec![false, false, false, true])
        .returns_forecasts(vec![forecast("A")])
        .build();
    let augur = client(mock.clone());

    let start = tokio::time::Instant::now();
    let result = augur.get_forecasts("Ds1", &names(&["A"])).await.unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(mock.calls().forecast_status(), 4);
    assert_eq!(mock.calls().forecasts(), 1);
    // first poll is immediate, each retry waits one poll interval
    assert_eq!(start.elapsed(), Duration::from_secs(30));
}

#[tokio::test(start_paused = true)]
async fn ready_at_once_never_sleeps() {
    let mock = MockTransport::builder()
        .status_sequence(vec![true])
        .returns_forecasts(vec![forecast("A")])
        .build();
    let augur = client(mock.clone());

    let start = tokio::time::Instant::now();
    augur.get_forecasts("Ds1", &names(&["A"])).await.unwrap();

    assert_eq!(mock.calls().forecast_status(), 1);
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test]
async fn a_status_code_aborts_before_any_fetch() {
    let mock = MockTransport::builder()
        .status_code("AuthenticationFailed")
        .returns_forecasts(vec![forecast("A")])
        .build();
    let augur = client(mock.clone());

    let err = augur
        .get_forecasts("Ds1", &names(&["A"]))
        .await
        .unwrap_err();
    assert_eq!(err, AugurError::AuthenticationFailed);
    assert_eq!(mock.calls().forecasts(), 0);
}

#[tokio::test]
async fn fetches_in_windows_and_returns_request_order() {
    let requested: Vec<String> = (0..120).map(|i| format!("n{i}")).collect();
    // serve from a store listed in reverse to prove reordering
    let mut available: Vec<ForecastSeries> =
        requested.iter().map(|n| forecast(n)).collect();
    available.reverse();

    let mock = MockTransport::builder()
        .status_sequence(vec![true])
        .returns_forecasts(available)
        .build();
    let augur = client(mock.clone());

    let result = augur.get_forecasts("Ds1", &requested).await.unwrap();

    assert_eq!(mock.calls().forecasts(), 2);
    let listed: Vec<&str> = result.iter().map(|f| f.name.as_str()).collect();
    let expected: Vec<&str> = requested.iter().map(String::as_str).collect();
    assert_eq!(listed, expected);
}

#[tokio::test]
async fn names_unknown_to_the_service_are_dropped() {
    let mock = MockTransport::builder()
        .status_sequence(vec![true])
        .returns_forecasts(vec![forecast("A"), forecast("C")])
        .build();
    let augur = client(mock);

    let result = augur
        .get_forecasts("Ds1", &names(&["A", "B", "C"]))
        .await
        .unwrap();
    let listed: Vec<&str> = result.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(listed, ["A", "C"]);
}

#[tokio::test]
async fn a_failing_fetch_batch_aborts() {
    let mock = MockTransport::builder()
        .status_sequence(vec![true])
        .with_forecasts_fn(|_dataset, _names| {
            Ok(ForecastPage {
                series: vec![],
                error_code: Some("ServiceFailure".to_string()),
            })
        })
        .build();
    let augur = client(mock);

    let err = augur
        .get_forecasts("Ds1", &names(&["A"]))
        .await
        .unwrap_err();
    assert_eq!(err, AugurError::ServiceFailure);
}

#[tokio::test(start_paused = true)]
async fn the_wait_deadline_cancels_an_endless_poll() {
    let mock = MockTransport::builder()
        .status_sequence(vec![false])
        .build();
    let augur = builder(mock.clone())
        .wait_timeout(Duration::from_secs(25))
        .build()
        .unwrap();

    let err = augur
        .get_forecasts("Ds1", &names(&["A"]))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        AugurError::Cancelled {
            waited: Duration::from_secs(25)
        }
    );
    assert_eq!(mock.calls().forecasts(), 0);
}

#[tokio::test]
async fn duplicate_names_are_rejected_before_polling() {
    let mock = MockTransport::builder()
        .status_sequence(vec![true])
        .returns_forecasts(vec![forecast("A")])
        .build();
    let augur = client(mock.clone());

    let err = augur
        .get_forecasts("Ds1", &names(&["A", "A"]))
        .await
        .unwrap_err();
    assert!(matches!(err, AugurError::InvalidArg(_)));
    assert_eq!(mock.calls().total(), 0);
}

#[tokio::test]
async fn trigger_reports_readiness_and_maps_codes() {
    let mock = MockTransport::builder()
        .status_sequence(vec![false, true])
        .build();
    let augur = client(mock.clone());

    assert!(!augur.trigger_forecasts("Ds1").await.unwrap());
    assert!(augur.trigger_forecasts("Ds1").await.unwrap());
    assert_eq!(mock.calls().forecast_status(), 2);

    let failing = MockTransport::builder()
        .status_code("DatasetNotFound")
        .build();
    let augur = client(failing);
    assert_eq!(
        augur.trigger_forecasts("Ds1").await.unwrap_err(),
        AugurError::DatasetNotFound
    );
}
