/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public AnyDesk adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

//! Client for the AnyDesk REST API.
//!
//! Every request carries an `Authorization: AD <license>:<timestamp>:<token>`
//! header where the token is a base64 HMAC-SHA1 over the method, the
//! path+query, the timestamp and the SHA-1 of the body.

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{HmacSigner, body_hash};

// Re-export commonly used types from http
pub use http::{
    AnydeskClient,
    AnydeskError,
    ClientConfig,
    Credentials,
    RequestSigner,
    Result,
};

// Re-export all types
pub use types::*;
