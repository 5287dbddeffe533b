//! augur-core
//!
//! Core types, traits, and validation shared across the augur workspace.
//!
//! - `types`: domain objects (datasets, time-series, forecasts) and the
//!   response envelopes returned by the transport.
//! - `transport`: the [`AugurTransport`] trait, the narrow contract a wire
//!   implementation has to satisfy.
//! - `validate`: the client-side validation gate mirroring the service's
//!   structural constraints.
//! - `error`: the [`AugurError`] taxonomy and the mapping from
//!   service-reported code strings to failures.
//! - `config`: immutable per-client batching and polling configuration.
//! - `limits`: the service's hard collection limits as named constants.
//!
//! Async runtime (Tokio)
//! ---------------------
//! This crate only declares `async` contracts and has no runtime coupling of
//! its own, but the `augur` client crate drives them with Tokio sleeps and
//! timeouts, so transport implementations are expected to run under a
//! Tokio 1.x runtime.
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod limits;
pub mod transport;
pub mod types;
pub mod validate;

pub use config::AugurConfig;
pub use error::{AugurError, check_code};
pub use transport::AugurTransport;
pub use types::*;
