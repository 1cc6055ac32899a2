//! Engagement service
//!
//! Messages, comments and follows left on a listing, plus the admin inbox
//! views over them.

use marine_core::{Comment, DomainError, Follow, Listing, Message, RecordId};
use tokio::runtime::Handle;
use tracing::{info, instrument, warn};

use crate::dto::{
    CommentResponse, FollowRequest, FollowResponse, InboxComment, InboxCommentsResponse,
    InboxMessage, InboxMessagesResponse, MessageAccepted, SubmitCommentRequest,
    SubmitMessageRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

const MESSAGE_ACCEPTED: &str = "Message received. We will get back to you shortly.";

/// Trimmed copy of a required field; blank is rejected
fn required(value: &str, field: &'static str) -> Result<String, DomainError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DomainError::MissingField(field));
    }
    Ok(value.to_string())
}

/// Engagement service
pub struct EngagementService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EngagementService<'a> {
    /// Create a new EngagementService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Store a private message and notify the owner in the background.
    ///
    /// `origin` is the caller address recorded with the message.
    #[instrument(skip(self, request))]
    pub fn submit_message(
        &self,
        listing_id: &str,
        request: SubmitMessageRequest,
        origin: &str,
    ) -> ServiceResult<MessageAccepted> {
        let listing_id = RecordId::from(listing_id);

        let (listing, message) = self.ctx.store().write(|db| {
            if db.find_listing(&listing_id).is_none() {
                return Err(DomainError::ListingNotFound(listing_id.clone()));
            }

            let message = Message::new(
                listing_id.clone(),
                required(&request.name, "name")?,
                required(&request.email, "email")?,
                request.phone.as_deref().map(str::trim).unwrap_or_default().to_string(),
                required(&request.message, "message")?,
                origin.to_string(),
            );
            db.messages.push(message.clone());

            let listing = db
                .find_listing_mut(&listing_id)
                .ok_or_else(|| DomainError::ListingNotFound(listing_id.clone()))?;
            listing.record_message();

            Ok((listing.clone(), message))
        })?;

        info!(listing_id = %listing_id, message_id = %message.id, "Message received");

        let id = message.id.to_string();
        self.dispatch_notification(listing, message);

        Ok(MessageAccepted {
            message: MESSAGE_ACCEPTED.to_string(),
            id,
        })
    }

    /// Fire-and-forget; a failed delivery is logged and dropped
    fn dispatch_notification(&self, listing: Listing, message: Message) {
        let notifier = self.ctx.notifier();

        let Ok(runtime) = Handle::try_current() else {
            warn!(message_id = %message.id, "No async runtime, notification skipped");
            return;
        };

        runtime.spawn(async move {
            if let Err(e) = notifier.notify_new_message(&listing, &message).await {
                warn!(error = %e, message_id = %message.id, "Message notification failed");
            }
        });
    }

    /// Add a public comment
    #[instrument(skip(self, request))]
    pub fn submit_comment(
        &self,
        listing_id: &str,
        request: SubmitCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let listing_id = RecordId::from(listing_id);

        let comment = self.ctx.store().write(|db| {
            let listing = db
                .find_listing_mut(&listing_id)
                .ok_or_else(|| DomainError::ListingNotFound(listing_id.clone()))?;

            let comment = Comment::new(
                listing_id.clone(),
                required(&request.name, "name")?,
                required(&request.message, "message")?,
            );
            listing.record_comment();
            db.comments.push(comment.clone());

            Ok::<_, DomainError>(comment)
        })?;

        info!(listing_id = %listing_id, comment_id = %comment.id, "Comment added");
        Ok(CommentResponse::from(comment))
    }

    /// Subscribe an email to a listing; following twice is not an error
    #[instrument(skip(self, request))]
    pub fn follow(&self, listing_id: &str, request: FollowRequest) -> ServiceResult<FollowResponse> {
        let listing_id = RecordId::from(listing_id);

        let response = self.ctx.store().write(|db| {
            if db.find_listing(&listing_id).is_none() {
                return Err(DomainError::ListingNotFound(listing_id.clone()));
            }
            let email = Follow::normalize_email(&required(&request.email, "email")?);

            if db.find_follow(&listing_id, &email).is_some() {
                return Ok(FollowResponse::already_following());
            }

            db.follows.push(Follow::new(listing_id.clone(), &email));
            if let Some(listing) = db.find_listing_mut(&listing_id) {
                listing.record_follow();
            }
            Ok(FollowResponse::followed())
        })?;

        if response.followed {
            info!(listing_id = %listing_id, "Listing followed");
        }
        Ok(response)
    }

    /// Remove a follow; the counter never drops below zero
    #[instrument(skip(self, request))]
    pub fn unfollow(&self, listing_id: &str, request: FollowRequest) -> ServiceResult<()> {
        let listing_id = RecordId::from(listing_id);

        self.ctx.store().write(|db| {
            if db.find_listing(&listing_id).is_none() {
                return Err(DomainError::ListingNotFound(listing_id.clone()));
            }
            let email = Follow::normalize_email(&required(&request.email, "email")?);

            let index = db
                .find_follow(&listing_id, &email)
                .ok_or(DomainError::FollowNotFound)?;
            db.follows.remove(index);
            if let Some(listing) = db.find_listing_mut(&listing_id) {
                listing.release_follow();
            }
            Ok(())
        })?;

        info!(listing_id = %listing_id, "Listing unfollowed");
        Ok(())
    }

    /// Admin inbox: messages, newest first
    #[instrument(skip(self))]
    pub fn list_messages(&self, listing_id: Option<&str>) -> ServiceResult<InboxMessagesResponse> {
        let mut messages: Vec<InboxMessage> = self.ctx.store().read(|db| {
            db.messages
                .iter()
                .filter(|message| listing_id.map_or(true, |id| message.listing_id == id))
                .map(|message| InboxMessage::joined(message, db.listing_title(&message.listing_id)))
                .collect()
        });
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(InboxMessagesResponse {
            count: messages.len(),
            messages,
        })
    }

    /// Admin inbox: comments, newest first
    #[instrument(skip(self))]
    pub fn list_comments(&self, listing_id: Option<&str>) -> ServiceResult<InboxCommentsResponse> {
        let mut comments: Vec<InboxComment> = self.ctx.store().read(|db| {
            db.comments
                .iter()
                .filter(|comment| listing_id.map_or(true, |id| comment.listing_id == id))
                .map(|comment| InboxComment::joined(comment, db.listing_title(&comment.listing_id)))
                .collect()
        });
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(InboxCommentsResponse {
            count: comments.len(),
            comments,
        })
    }
}
