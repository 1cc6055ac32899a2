//! Caller identification
//!
//! Resolves who is calling: the socket peer, the proxy-reported client
//! address, and any API key presented in the headers.

use std::net::SocketAddr;

use axum::{
    async_trait,
    extract::{ConnectInfo, FromRef, FromRequestParts},
    http::{header, request::Parts, Extensions, HeaderMap},
};
use marine_common::Credentials;

use crate::response::ApiError;
use crate::state::AppState;

/// Header carrying an API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Header set by reverse proxies
pub const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";

/// Address of the socket peer, when the server was started with connect info
pub fn peer_address(extensions: &Extensions) -> Option<String> {
    extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
}

/// Leftmost `X-Forwarded-For` entry
pub fn forwarded_for(headers: &HeaderMap) -> Option<String> {
    headers
        .get(FORWARDED_FOR_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

/// Client address as the application sees it
///
/// With `trust_proxy` the forwarded address wins over the socket peer.
pub fn client_address(
    headers: &HeaderMap,
    extensions: &Extensions,
    trust_proxy: bool,
) -> Option<String> {
    let forwarded = if trust_proxy { forwarded_for(headers) } else { None };
    forwarded.or_else(|| peer_address(extensions))
}

/// Credentials presented by the request
pub fn credentials(headers: &HeaderMap, extensions: &Extensions, trust_proxy: bool) -> Credentials {
    Credentials::from_headers(
        headers.get(API_KEY_HEADER).and_then(|v| v.to_str().ok()),
        headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok()),
        client_address(headers, extensions, trust_proxy),
    )
}

/// Caller addresses for the current request
///
/// `address` is the proxy-aware client address and `peer` the raw socket
/// address. Either may be absent when the router runs without connect info.
#[derive(Debug, Clone, Default)]
pub struct Caller {
    pub address: Option<String>,
    pub peer: Option<String>,
}

impl Caller {
    /// Address recorded with stored messages
    pub fn origin(&self) -> &str {
        self.address.as_deref().unwrap_or("")
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);
        let trust_proxy = state.config().access.trust_proxy;

        Ok(Self {
            address: client_address(&parts.headers, &parts.extensions, trust_proxy),
            peer: peer_address(&parts.extensions),
        })
    }
}
