//! Whitelist membership
//!
//! A caller is trusted when it presents an accepted shared-secret key (plain,
//! or matching a stored SHA-256 digest) or comes from an accepted address.
//! The check is pure: no logging, no side effects.

use std::collections::HashSet;

use super::api_key::sha256_hex;
use crate::config::AccessConfig;

const IPV4_MAPPED_PREFIX: &str = "::ffff:";

/// Strip the IPv4-mapped IPv6 prefix, e.g. `::ffff:10.0.0.1` -> `10.0.0.1`
pub fn normalize_ip(ip: &str) -> &str {
    ip.strip_prefix(IPV4_MAPPED_PREFIX).unwrap_or(ip)
}

/// True when `address` (raw or normalized) is in `allowed`
fn address_in(allowed: &HashSet<String>, address: &str) -> bool {
    allowed.contains(address) || allowed.contains(normalize_ip(address))
}

/// Credential-bearing fields of a request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub key: Option<String>,
    pub address: Option<String>,
}

impl Credentials {
    /// Build credentials from raw header values.
    ///
    /// `x-api-key` wins over `Authorization`; the latter only counts when it
    /// uses the Bearer scheme (case-insensitive). Keys are trimmed and empty
    /// keys are treated as absent.
    pub fn from_headers(
        api_key: Option<&str>,
        authorization: Option<&str>,
        address: Option<String>,
    ) -> Self {
        let key = api_key
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .or_else(|| authorization.and_then(bearer_token))
            .map(String::from);
        Self { key, address }
    }
}

fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, rest) = header.split_at_checked(6)?;
    if !scheme.eq_ignore_ascii_case("bearer") || !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some(rest.trim()).filter(|token| !token.is_empty())
}

/// Accepted keys, key digests and addresses
#[derive(Debug, Clone, Default)]
pub struct Whitelist {
    keys: HashSet<String>,
    key_hashes: HashSet<String>,
    ips: HashSet<String>,
}

impl Whitelist {
    pub fn new<K, H, I>(keys: K, key_hashes: H, ips: I) -> Self
    where
        K: IntoIterator<Item = String>,
        H: IntoIterator<Item = String>,
        I: IntoIterator<Item = String>,
    {
        Self {
            keys: keys.into_iter().collect(),
            key_hashes: key_hashes
                .into_iter()
                .map(|hash| hash.to_ascii_lowercase())
                .collect(),
            ips: ips.into_iter().collect(),
        }
    }

    pub fn from_config(config: &AccessConfig) -> Self {
        Self::new(
            config.whitelist_keys.iter().cloned(),
            config.whitelist_key_hashes.iter().cloned(),
            config.whitelist_ips.iter().cloned(),
        )
    }

    /// Nothing configured: nobody is trusted
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty() && self.key_hashes.is_empty() && self.ips.is_empty()
    }

    pub fn is_whitelisted(&self, credentials: &Credentials) -> bool {
        if self.is_empty() {
            return false;
        }

        if let Some(key) = credentials.key.as_deref() {
            if self.keys.contains(key) {
                return true;
            }
            if !self.key_hashes.is_empty() && self.key_hashes.contains(&sha256_hex(key)) {
                return true;
            }
        }

        credentials
            .address
            .as_deref()
            .is_some_and(|address| address_in(&self.ips, address))
    }
}

/// Key issuance is limited to peers on an explicit allow-list; an empty list
/// disables it entirely.
pub fn is_keygen_address_allowed(allowed: &[String], peer_address: &str) -> bool {
    if allowed.is_empty() {
        return false;
    }
    let normalized = normalize_ip(peer_address);
    allowed
        .iter()
        .any(|entry| entry == peer_address || entry == normalized)
}
