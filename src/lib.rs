//! Blocking Rust client for the FCC public data API (`data.fcc.gov`).
//!
//! Public API layers:
//! - [`ApiClient`]: one method per API operation, returning [`Lookup`].
//! - [`Transport`]/[`BlockingTransport`]: request descriptors and their
//!   execution over HTTP.
//! - [`envelope`]: pure per-endpoint reshaping of decoded responses.
//! - [`ClientError`]: error type for construction and transport failures.
//!
//! ```no_run
//! use fcc_client::ApiClient;
//!
//! let client = ApiClient::new()?;
//! if let Some(block) = client.find_census_block(37.4, -122.1).found() {
//!     println!("{}", block["County"]["name"]);
//! }
//! # Ok::<(), fcc_client::ClientError>(())
//! ```

mod blocking_transport;
mod client;
mod endpoint;
pub mod envelope;
mod error;
mod lookup;
mod transport;

/// Blocking HTTP transport backed by `reqwest`.
pub use blocking_transport::BlockingTransport;
/// Typed FCC API client.
pub use client::{ApiClient, DEFAULT_BASE_URL};
/// Catalog of wrapped endpoints.
pub use endpoint::Endpoint;
/// Generic JSON record returned by most operations.
pub use envelope::Record;
/// Error type for construction and transport failures.
pub use error::ClientError;
/// Three-way operation result.
pub use lookup::Lookup;
/// Request descriptors and the transport seam.
pub use transport::{HttpMethod, ParamValue, Params, Transport, TransportRequest, encode_params};
