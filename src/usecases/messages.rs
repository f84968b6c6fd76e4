use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::entities::streams::StreamName;
use crate::models::conversations::Conversation;
use crate::models::events::ServerEvent;
use crate::models::messages::Message;
use crate::repositories::{messages, streams};

const MAX_MESSAGE_LENGTH: usize = 2000;

/// Persists a message and pushes it to the receiver's room. The room only
/// ever sees the enriched record after the insert has been acknowledged by
/// the database; a receiver with no live connection simply picks the row up
/// on their next fetch.
pub async fn send<C: Context>(
    ctx: &C,
    sender_id: i64,
    receiver_id: i64,
    content: &str,
) -> ServiceResult<Message> {
    let content = content.trim();
    if content.is_empty() || content.len() > MAX_MESSAGE_LENGTH {
        return Err(AppError::MessagesInvalidLength);
    }

    let message_id = messages::create(ctx, sender_id, receiver_id, content).await?;
    let message = Message::from(messages::fetch_one(ctx, message_id).await?);
    streams::broadcast_event(
        ctx,
        StreamName::User(receiver_id),
        &ServerEvent::Message {
            message: message.clone(),
        },
    )
    .await?;
    Ok(message)
}

/// Opening a transcript is also the read transition: everything the partner
/// sent the viewer is flagged read after the rows are loaded, so the
/// response still shows which messages were unread at open time.
pub async fn open_transcript<C: Context>(
    ctx: &C,
    viewer_id: i64,
    partner_id: i64,
) -> ServiceResult<Vec<Message>> {
    let rows = match messages::fetch_transcript(ctx, viewer_id, partner_id).await {
        Ok(rows) => rows,
        Err(e) => return unexpected(e),
    };
    mark_read(ctx, viewer_id, partner_id).await?;
    Ok(rows.into_iter().map(Message::from).collect())
}

pub async fn fetch_conversations<C: Context>(
    ctx: &C,
    viewer_id: i64,
) -> ServiceResult<Vec<Conversation>> {
    match messages::fetch_conversations(ctx, viewer_id).await {
        Ok(rows) => Ok(rows
            .into_iter()
            .map(|entry| Conversation::from_entry(viewer_id, entry))
            .collect()),
        Err(e) => unexpected(e),
    }
}

/// The single read-marking path for both transports (HTTP PUT and the
/// socket event). Notifies the partner's live UI only when at least one row
/// actually changed, which also keeps the operation idempotent.
pub async fn mark_read<C: Context>(ctx: &C, reader_id: i64, partner_id: i64) -> ServiceResult<u64> {
    let updated = messages::mark_read(ctx, partner_id, reader_id).await?;
    if updated > 0 {
        streams::broadcast_event(
            ctx,
            StreamName::User(partner_id),
            &ServerEvent::MessagesRead { reader_id },
        )
        .await?;
    }
    Ok(updated)
}
