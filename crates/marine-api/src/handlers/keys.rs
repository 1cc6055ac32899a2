//! API key issuance

use axum::{extract::State, Json};
use marine_common::{generate_api_key, is_keygen_address_allowed, ApiKey};
use marine_core::DomainError;
use tracing::{info, warn};

use crate::extractors::Caller;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Mint a new API key
///
/// POST /api/admin/keys
///
/// Only socket peers on the keygen allow-list may call this; forwarded
/// addresses are ignored. The key is returned once and never stored.
pub async fn create_key(
    State(state): State<AppState>,
    caller: Caller,
) -> ApiResult<Created<Json<ApiKey>>> {
    let allowed_ips = &state.config().access.keygen_allowed_ips;
    let allowed = caller
        .peer
        .as_deref()
        .is_some_and(|peer| is_keygen_address_allowed(allowed_ips, peer));

    if !allowed {
        warn!(peer = ?caller.peer, "Key generation refused for address");
        return Err(DomainError::KeygenAddressDenied.into());
    }

    let key = generate_api_key();
    info!(peer = ?caller.peer, "Issued new API key");
    Ok(Created(Json(key)))
}
