//! Access gate primitives: caller credentials, whitelist checks, key issuance

mod api_key;
mod whitelist;

pub use api_key::{generate_api_key, sha256_hex, ApiKey};
pub use whitelist::{is_keygen_address_allowed, normalize_ip, Credentials, Whitelist};
