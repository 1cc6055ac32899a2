//! Listing service
//!
//! Handles listing creation, partial updates, cascading deletes, and the
//! public and admin catalogue queries.

use marine_core::{CascadeSummary, DomainError, Listing, RecordId, Segment, DEFAULT_LISTING_STATUS};
use tracing::{info, instrument};

use crate::dto::{
    CommentResponse, CreateListingRequest, ListingDetailResponse, ListingQuery, ListingResponse,
    ListingSort, ListingsResponse, UpdateListingRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Trimmed text, empty when absent or null
fn text(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

fn order(listings: &mut [ListingResponse], sort: ListingSort) {
    match sort {
        ListingSort::Recent => listings.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
        ListingSort::Interest => listings.sort_by(|a, b| {
            b.interest_score
                .cmp(&a.interest_score)
                .then_with(|| b.updated_at.cmp(&a.updated_at))
        }),
    }
}

/// Listing service
pub struct ListingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ListingService<'a> {
    /// Create a new ListingService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a listing from admin input
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub fn create(&self, request: CreateListingRequest) -> ServiceResult<ListingResponse> {
        let title = request.title.trim();
        if title.is_empty() {
            return Err(DomainError::MissingField("title").into());
        }

        let mut listing = Listing::new(title.to_string());
        listing.segment = Segment::normalize(request.segment.as_deref().unwrap_or_default());
        listing.location = text(request.location);
        listing.year = request.year.and_then(|year| year.non_zero());
        listing.status = Some(text(request.status))
            .filter(|status| !status.is_empty())
            .unwrap_or_else(|| DEFAULT_LISTING_STATUS.to_string());
        listing.cover_image = text(request.cover_image);
        listing.video_url = text(request.video_url);
        listing.highlights = request.highlights.into_inner();
        listing.gallery = request.gallery.into_inner();
        listing.description = text(request.description);

        let response = ListingResponse::from(&listing);
        self.ctx.store().write(|db| {
            db.listings.push(listing);
            Ok::<_, DomainError>(())
        })?;

        info!(listing_id = %response.id, segment = %response.segment, "Listing created");
        Ok(response)
    }

    /// Apply every field present in `request`; absent fields stay as they are
    #[instrument(skip(self, request))]
    pub fn update(&self, id: &str, request: UpdateListingRequest) -> ServiceResult<ListingResponse> {
        let id = RecordId::from(id);

        let response = self.ctx.store().write(|db| {
            let listing = db
                .find_listing_mut(&id)
                .ok_or_else(|| DomainError::ListingNotFound(id.clone()))?;

            if let Some(title) = request.title {
                let title = text(title);
                if title.is_empty() {
                    return Err(DomainError::MissingField("title"));
                }
                listing.title = title;
            }
            if let Some(segment) = request.segment {
                listing.segment = Segment::normalize(segment.as_deref().unwrap_or_default());
            }
            if let Some(location) = request.location {
                listing.location = text(location);
            }
            if let Some(year) = request.year {
                listing.year = year.0;
            }
            if let Some(status) = request.status {
                listing.status = text(status);
            }
            if let Some(cover_image) = request.cover_image {
                listing.cover_image = text(cover_image);
            }
            if let Some(video_url) = request.video_url {
                listing.video_url = text(video_url);
            }
            if let Some(highlights) = request.highlights {
                listing.highlights = highlights.into_inner();
            }
            if let Some(gallery) = request.gallery {
                listing.gallery = gallery.into_inner();
            }
            if let Some(description) = request.description {
                listing.description = text(description);
            }
            listing.touch();

            Ok(ListingResponse::from(&*listing))
        })?;

        info!(listing_id = %id, "Listing updated");
        Ok(response)
    }

    /// Delete a listing with all of its messages, comments and follows
    #[instrument(skip(self))]
    pub fn delete(&self, id: &str) -> ServiceResult<CascadeSummary> {
        let id = RecordId::from(id);

        let summary = self.ctx.store().write(|db| {
            db.remove_listing_cascade(&id)
                .map(|(_, summary)| summary)
                .ok_or_else(|| DomainError::ListingNotFound(id.clone()))
        })?;

        info!(
            listing_id = %id,
            messages = summary.messages,
            comments = summary.comments,
            follows = summary.follows,
            "Listing deleted"
        );
        Ok(summary)
    }

    /// Single listing view
    #[instrument(skip(self))]
    pub fn get(&self, id: &str) -> ServiceResult<ListingResponse> {
        let id = RecordId::from(id);
        let listing = self
            .ctx
            .store()
            .read(|db| db.find_listing(&id).map(ListingResponse::from));
        listing.ok_or_else(|| DomainError::ListingNotFound(id).into())
    }

    /// Public detail: listing plus its comments, newest first
    #[instrument(skip(self))]
    pub fn get_public(&self, id: &str) -> ServiceResult<ListingDetailResponse> {
        let id = RecordId::from(id);

        let detail = self.ctx.store().read(|db| {
            let listing = db.find_listing(&id)?;
            let mut comments: Vec<CommentResponse> = db
                .comments
                .iter()
                .filter(|comment| comment.listing_id == id)
                .map(CommentResponse::from)
                .collect();
            comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));

            Some(ListingDetailResponse {
                listing: ListingResponse::from(listing),
                comments,
            })
        });

        detail.ok_or_else(|| DomainError::ListingNotFound(id).into())
    }

    /// Public catalogue with segment and text filters
    #[instrument(skip(self))]
    pub fn list_public(&self, query: &ListingQuery) -> ServiceResult<ListingsResponse> {
        // An unknown segment token matches nothing
        let segment = query.segment_filter().map(|token| Segment::from_token(&token));
        let needle = query.search_needle();

        let mut listings: Vec<ListingResponse> = self.ctx.store().read(|db| {
            db.listings
                .iter()
                .filter(|listing| segment.map_or(true, |wanted| wanted == Some(listing.segment)))
                .filter(|listing| {
                    needle
                        .as_deref()
                        .map_or(true, |needle| listing.matches_search(needle))
                })
                .map(ListingResponse::from)
                .collect()
        });

        order(&mut listings, query.sort_order());
        Ok(ListingsResponse::new(listings))
    }

    /// Every listing in storage order
    #[instrument(skip(self))]
    pub fn list_all(&self) -> ServiceResult<ListingsResponse> {
        let listings = self
            .ctx
            .store()
            .read(|db| db.listings.iter().map(ListingResponse::from).collect());
        Ok(ListingsResponse::new(listings))
    }
}
