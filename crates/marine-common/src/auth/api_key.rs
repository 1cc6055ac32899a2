//! Shared-secret key issuance

use rand::RngCore;
use serde::Serialize;
use sha2::{Digest, Sha256};

const KEY_PREFIX: &str = "ykp_";
const KEY_BYTES: usize = 24;

/// Freshly minted key plus the digest an operator can store instead of it
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKey {
    #[serde(rename = "apiKey")]
    pub raw: String,
    pub sha256: String,
}

/// Lower-case hex SHA-256 of `input`
pub fn sha256_hex(input: &str) -> String {
    hex::encode(Sha256::digest(input.as_bytes()))
}

/// Generate a new random key. The key is not persisted anywhere.
pub fn generate_api_key() -> ApiKey {
    let mut bytes = [0u8; KEY_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    let raw = format!("{KEY_PREFIX}{}", hex::encode(bytes));
    let sha256 = sha256_hex(&raw);
    ApiKey { raw, sha256 }
}
