//! Public catalogue handlers
//!
//! Browsing plus the anonymous engagement endpoints: messages, comments and
//! follows.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use marine_service::dto::{
    CommentEnvelope, FollowRequest, FollowResponse, ListingDetailResponse, ListingQuery,
    ListingsResponse, MessageAccepted, SubmitCommentRequest, SubmitMessageRequest,
    UnfollowResponse,
};
use marine_service::{EngagementService, ListingService};

use crate::extractors::{Caller, JsonBody};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Browse listings
///
/// GET /api/public/listings
pub async fn list_listings(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> ApiResult<Json<ListingsResponse>> {
    let service = ListingService::new(state.service_context());
    let response = service.list_public(&query)?;
    Ok(Json(response))
}

/// Listing detail with its comments
///
/// GET /api/public/listings/:id
pub async fn get_listing(
    State(state): State<AppState>,
    Path(listing_id): Path<String>,
) -> ApiResult<Json<ListingDetailResponse>> {
    let service = ListingService::new(state.service_context());
    let response = service.get_public(&listing_id)?;
    Ok(Json(response))
}

/// Send a private message to the listing owner
///
/// POST /api/public/listings/:id/messages
pub async fn submit_message(
    State(state): State<AppState>,
    caller: Caller,
    Path(listing_id): Path<String>,
    JsonBody(request): JsonBody<SubmitMessageRequest>,
) -> ApiResult<Created<Json<MessageAccepted>>> {
    let origin = caller.origin().to_string();
    let response = state
        .run_blocking(move |ctx| {
            EngagementService::new(ctx).submit_message(&listing_id, request, &origin)
        })
        .await?;
    Ok(Created(Json(response)))
}

/// Post a public comment
///
/// POST /api/public/listings/:id/comments
pub async fn submit_comment(
    State(state): State<AppState>,
    Path(listing_id): Path<String>,
    JsonBody(request): JsonBody<SubmitCommentRequest>,
) -> ApiResult<Created<Json<CommentEnvelope>>> {
    let comment = state
        .run_blocking(move |ctx| EngagementService::new(ctx).submit_comment(&listing_id, request))
        .await?;
    Ok(Created(Json(CommentEnvelope { comment })))
}

/// Follow a listing; repeating it is not an error
///
/// POST /api/public/listings/:id/follow
pub async fn follow_listing(
    State(state): State<AppState>,
    Path(listing_id): Path<String>,
    JsonBody(request): JsonBody<FollowRequest>,
) -> ApiResult<(StatusCode, Json<FollowResponse>)> {
    let response = state
        .run_blocking(move |ctx| EngagementService::new(ctx).follow(&listing_id, request))
        .await?;
    let status = if response.followed {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(response)))
}

/// Stop following a listing
///
/// DELETE /api/public/listings/:id/follow
pub async fn unfollow_listing(
    State(state): State<AppState>,
    Path(listing_id): Path<String>,
    JsonBody(request): JsonBody<FollowRequest>,
) -> ApiResult<Json<UnfollowResponse>> {
    state
        .run_blocking(move |ctx| EngagementService::new(ctx).unfollow(&listing_id, request))
        .await?;
    Ok(Json(UnfollowResponse { unfollowed: true }))
}
