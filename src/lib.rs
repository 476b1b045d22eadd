#![deny(
    clippy::expect_used,
    clippy::panic,
    clippy::print_stdout,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]

//! Validating client for the ProPublica Congress API.
//!
//! Every query is gated by pure predicates encoding the API's per-endpoint
//! business rules (valid congress ranges, chamber-specific historical
//! cutoffs, closed sub-resource vocabularies, identifier shapes, pagination
//! granularity) before any network call is made. Validated queries are
//! rendered into endpoint paths and delegated to a pluggable transport.

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod transport;
pub mod types;
pub mod validators;

pub use client::Client;
pub use config::Config;
pub use endpoint::{Endpoint, RequestOptions};
pub use error::Error;
pub use transport::{HttpTransport, Transport, TransportError};
