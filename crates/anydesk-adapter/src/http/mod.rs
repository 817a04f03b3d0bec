/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod clients;
pub mod error;
pub mod request;
pub mod sessions;
pub mod signature;
pub mod system;

pub use error::{AnydeskError, Result};
pub use request::{QueryParams, RequestBuilder, ResourcePath, Segment, SignedRequest};
pub use signature::{AuthorizationHeader, RequestSigner};

pub use client::{AnydeskClient, ClientConfig, Credentials, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
