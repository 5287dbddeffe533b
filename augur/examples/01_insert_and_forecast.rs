//! End-to-end walkthrough against the scriptable mock transport: insert a
//! dataset, upload a few series, and fetch forecasts.
//!
//! Swap the mock for a real `AugurTransport` implementation to talk to
//! the live service.

use augur::{Augur, AugurError, Dataset, ForecastSeries, ForecastValue, Period, TimeSeries, TimeValue};
use augur_mock::MockTransport;
use chrono::DateTime;

fn observed(name: &str, count: usize) -> TimeSeries {
    let values = (0..count)
        .map(|i| TimeValue {
            time: DateTime::from_timestamp(i as i64 * 86_400, 0).unwrap(),
            value: (i % 7) as f64,
        })
        .collect();
    TimeSeries::new(name, values)
}

fn canned_forecast(name: &str) -> ForecastSeries {
    ForecastSeries {
        name: name.to_string(),
        values: vec![ForecastValue {
            time: DateTime::from_timestamp(30 * 86_400, 0).unwrap(),
            value: 4.5,
            accuracy: 0.82,
        }],
    }
}

#[tokio::main]
async fn main() -> Result<(), AugurError> {
    let mock = MockTransport::builder()
        .returns_insert_dataset_ok()
        .returns_upsert_ok()
        .status_sequence(vec![true])
        .returns_forecasts(vec![canned_forecast("sku1"), canned_forecast("sku2")])
        .build();

    let client = Augur::builder()
        .transport(mock.clone())
        .identity("ZGVtby1rZXk=")
        .build()?;

    client
        .insert_dataset(&Dataset {
            name: "demo".to_string(),
            period: Period::Day,
            horizon: 30,
        })
        .await?;

    let series = vec![observed("sku1", 90), observed("sku2", 90)];
    client.upsert_time_series("demo", &series, true).await?;

    let names = vec!["sku1".to_string(), "sku2".to_string()];
    let forecasts = client.get_forecasts("demo", &names).await?;

    for forecast in &forecasts {
        println!(
            "{}: {} point(s), first value {:.2} (accuracy {:.0}%)",
            forecast.name,
            forecast.values.len(),
            forecast.values[0].value,
            forecast.values[0].accuracy * 100.0
        );
    }
    println!("transport calls: {}", mock.calls().total());

    Ok(())
}
