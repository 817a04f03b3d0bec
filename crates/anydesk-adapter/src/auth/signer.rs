/*
[INPUT]:  API key bytes, message bytes and request body bytes
[OUTPUT]: Base64 HMAC-SHA1 tokens and base64 SHA-1 body hashes
[POS]:    Auth layer - cryptographic primitives for request authentication
[UPDATE]: When changing the digest algorithm or token encoding
*/

use std::fmt;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use hmac::digest::InvalidLength;
use hmac::{Hmac, Mac};
use sha1::{Digest, Sha1};

type HmacSha1 = Hmac<Sha1>;

/// HMAC-SHA1 signer keyed with the license API key
#[derive(Clone)]
pub struct HmacSigner {
    mac: HmacSha1,
}

impl HmacSigner {
    /// Create a signer from the raw API key
    pub fn new(api_key: &str) -> Result<Self, InvalidLength> {
        let mac = HmacSha1::new_from_slice(api_key.as_bytes())?;
        Ok(Self { mac })
    }

    /// Sign a message and return the raw 20-byte MAC
    pub fn sign(&self, message: &[u8]) -> Vec<u8> {
        let mut mac = self.mac.clone();
        mac.update(message);
        mac.finalize().into_bytes().to_vec()
    }

    /// Sign a message and return the base64 token
    pub fn token(&self, message: &[u8]) -> String {
        BASE64.encode(self.sign(message))
    }

    /// Verify a base64 token against a message in constant time
    pub fn verify(&self, message: &[u8], token: &str) -> bool {
        let Ok(expected) = BASE64.decode(token) else {
            return false;
        };
        let mut mac = self.mac.clone();
        mac.update(message);
        mac.verify_slice(&expected).is_ok()
    }
}

impl fmt::Debug for HmacSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HmacSigner").finish_non_exhaustive()
    }
}

/// Base64 SHA-1 digest of a request body; an empty body hashes the empty sequence
pub fn body_hash(body: &[u8]) -> String {
    BASE64.encode(Sha1::digest(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_hash() {
        assert_eq!(body_hash(b""), "2jmj7l5rSw0yVb/vlWAYkK/YBwk=");
    }

    #[test]
    fn test_body_hash_of_json() {
        // sha1("abc") = a9993e364706816aba3e25717850c26c9cd0d89d
        assert_eq!(body_hash(b"abc"), "qZk+NkcGgWq6PiVxeFDCbJzQ2J0=");
    }

    #[test]
    fn test_hmac_sha1_rfc2202_vector() {
        // RFC 2202 test case 2
        let signer = HmacSigner::new("Jefe").unwrap();
        let mac = signer.sign(b"what do ya want for nothing?");
        let hex: String = mac.iter().map(|b| format!("{b:02x}")).collect();
        assert_eq!(hex, "effcdf6ae5eb2fa2d27416d5f184df9c259a7c79");
    }

    #[test]
    fn test_token_is_deterministic_and_verifies() {
        let signer = HmacSigner::new("secret").unwrap();
        let a = signer.token(b"GET\n/auth\n1\nx");
        let b = signer.token(b"GET\n/auth\n1\nx");
        assert_eq!(a, b);
        assert_eq!(BASE64.decode(&a).unwrap().len(), 20);
        assert!(signer.verify(b"GET\n/auth\n1\nx", &a));
        assert!(!signer.verify(b"GET\n/auth\n2\nx", &a));
        assert!(!signer.verify(b"GET\n/auth\n1\nx", "not base64!"));
    }

    #[test]
    fn test_debug_hides_key() {
        let signer = HmacSigner::new("super-secret").unwrap();
        assert!(!format!("{signer:?}").contains("super-secret"));
    }
}
