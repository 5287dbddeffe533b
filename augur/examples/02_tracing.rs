//! Span-per-operation tracing. Run with the `tracing` feature:
//!
//! ```sh
//! RUST_LOG=augur=trace cargo run --example 02_tracing --features tracing
//! ```

use augur::{Augur, AugurError, Dataset, DatasetPage, Period};
use augur_mock::MockTransport;

#[tokio::main]
async fn main() -> Result<(), AugurError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mock = MockTransport::builder()
        .returns_insert_dataset_ok()
        .dataset_pages(vec![DatasetPage {
            datasets: vec![Dataset {
                name: "demo".to_string(),
                period: Period::Week,
                horizon: 8,
            }],
            continuation: None,
            error_code: None,
        }])
        .build();

    let client = Augur::builder()
        .transport(mock)
        .identity("ZGVtby1rZXk=")
        .build()?;

    client
        .insert_dataset(&Dataset {
            name: "demo".to_string(),
            period: Period::Week,
            horizon: 8,
        })
        .await?;

    let datasets = client.list_datasets().await?;
    println!("{} dataset(s)", datasets.len());

    Ok(())
}
