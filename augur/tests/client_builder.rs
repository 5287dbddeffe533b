mod helpers;

use std::time::Duration;

use augur::{Augur, AugurError};
use augur_mock::MockTransport;

#[test]
fn build_requires_a_transport() {
    let err = Augur::builder().identity("key").build().unwrap_err();
    assert!(matches!(err, AugurError::InvalidArg(_)));
}

#[test]
fn build_requires_an_identity() {
    let mock = MockTransport::builder().build();
    let err = Augur::builder().transport(mock).build().unwrap_err();
    assert!(matches!(err, AugurError::InvalidArg(_)));

    let mock = MockTransport::builder().build();
    let err = Augur::builder()
        .transport(mock)
        .identity("")
        .build()
        .unwrap_err();
    assert!(matches!(err, AugurError::InvalidArg(_)));
}

#[test]
fn build_rejects_zero_batch_sizes() {
    let mock = MockTransport::builder().build();
    let err = helpers::builder(mock).slice_len(0).build().unwrap_err();
    assert!(matches!(err, AugurError::InvalidArg(_)));
}

#[test]
fn defaults_match_the_service_limits() {
    let mock = MockTransport::builder().build();
    let augur = helpers::client(mock);
    let cfg = augur.config();

    assert_eq!(cfg.slice_len, 100);
    assert_eq!(cfg.mid_slice_len, 10);
    assert_eq!(cfg.delete_slice_len, 10);
    assert_eq!(cfg.fetch_slice_len, 100);
    assert_eq!(cfg.poll_interval, Duration::from_secs(10));
    assert_eq!(cfg.deletion_poll_interval, Duration::from_secs(30));
    assert_eq!(cfg.wait_timeout, None);
}

#[test]
fn overrides_stick() {
    let mock = MockTransport::builder().build();
    let augur = helpers::builder(mock)
        .slice_len(7)
        .mid_slice_len(3)
        .delete_slice_len(4)
        .fetch_slice_len(9)
        .poll_interval(Duration::from_millis(250))
        .deletion_poll_interval(Duration::from_secs(5))
        .wait_timeout(Duration::from_secs(120))
        .build()
        .unwrap();

    let cfg = augur.config();
    assert_eq!(cfg.slice_len, 7);
    assert_eq!(cfg.mid_slice_len, 3);
    assert_eq!(cfg.delete_slice_len, 4);
    assert_eq!(cfg.fetch_slice_len, 9);
    assert_eq!(cfg.poll_interval, Duration::from_millis(250));
    assert_eq!(cfg.deletion_poll_interval, Duration::from_secs(5));
    assert_eq!(cfg.wait_timeout, Some(Duration::from_secs(120)));
}
