/*
[INPUT]:  API key material
[OUTPUT]: HMAC-SHA1 signer and body hashing helpers
[POS]:    Auth layer - module wiring
[UPDATE]: When adding new signing primitives
*/

pub mod signer;

pub use signer::{HmacSigner, body_hash};
