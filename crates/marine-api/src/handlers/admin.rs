//! Admin handlers
//!
//! Listing management and the engagement inbox. Every route here sits behind
//! the whitelist gate.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use marine_service::dto::{
    CreateListingRequest, DeletedResponse, InboxCommentsResponse, InboxMessagesResponse,
    InboxQuery, ListingEnvelope, ListingsResponse, UpdateListingRequest,
};
use marine_service::{EngagementService, ListingService};

use crate::extractors::ValidatedJson;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// All listings in storage order
///
/// GET /api/admin/listings
pub async fn list_listings(State(state): State<AppState>) -> ApiResult<Json<ListingsResponse>> {
    let service = ListingService::new(state.service_context());
    let response = service.list_all()?;
    Ok(Json(response))
}

/// Create a listing
///
/// POST /api/admin/listings
pub async fn create_listing(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateListingRequest>,
) -> ApiResult<Created<Json<ListingEnvelope>>> {
    let listing = state
        .run_blocking(move |ctx| ListingService::new(ctx).create(request))
        .await?;
    Ok(Created(Json(ListingEnvelope { listing })))
}

/// GET /api/admin/listings/:id
pub async fn get_listing(
    State(state): State<AppState>,
    Path(listing_id): Path<String>,
) -> ApiResult<Json<ListingEnvelope>> {
    let service = ListingService::new(state.service_context());
    let listing = service.get(&listing_id)?;
    Ok(Json(ListingEnvelope { listing }))
}

/// Partial update
///
/// PATCH /api/admin/listings/:id
pub async fn update_listing(
    State(state): State<AppState>,
    Path(listing_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateListingRequest>,
) -> ApiResult<Json<ListingEnvelope>> {
    let listing = state
        .run_blocking(move |ctx| ListingService::new(ctx).update(&listing_id, request))
        .await?;
    Ok(Json(ListingEnvelope { listing }))
}

/// Delete a listing together with its engagement records
///
/// DELETE /api/admin/listings/:id
pub async fn delete_listing(
    State(state): State<AppState>,
    Path(listing_id): Path<String>,
) -> ApiResult<Json<DeletedResponse>> {
    state
        .run_blocking(move |ctx| ListingService::new(ctx).delete(&listing_id))
        .await?;
    Ok(Json(DeletedResponse { deleted: true }))
}

/// GET /api/admin/messages
pub async fn list_messages(
    State(state): State<AppState>,
    Query(query): Query<InboxQuery>,
) -> ApiResult<Json<InboxMessagesResponse>> {
    let service = EngagementService::new(state.service_context());
    let response = service.list_messages(query.listing_filter())?;
    Ok(Json(response))
}

/// GET /api/admin/comments
pub async fn list_comments(
    State(state): State<AppState>,
    Query(query): Query<InboxQuery>,
) -> ApiResult<Json<InboxCommentsResponse>> {
    let service = EngagementService::new(state.service_context());
    let response = service.list_comments(query.listing_filter())?;
    Ok(Json(response))
}
