#![allow(dead_code)]

use std::sync::Arc;

use augur::{Augur, AugurBuilder, TimeSeries, TimeValue};
use augur_mock::MockTransport;
use chrono::{DateTime, Utc};

pub fn at(hours: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(hours * 3600, 0).unwrap()
}

pub fn tv(hours: i64) -> TimeValue {
    TimeValue {
        time: at(hours),
        value: hours as f64,
    }
}

pub fn series_with_values(name: &str, count: usize) -> TimeSeries {
    TimeSeries::new(name, (0..count as i64).map(tv).collect())
}

pub fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

pub fn client(mock: Arc<MockTransport>) -> Augur {
    builder(mock).build().unwrap()
}

pub fn builder(mock: Arc<MockTransport>) -> AugurBuilder {
    Augur::builder().transport(mock).identity("dGVzdC1rZXk=")
}
