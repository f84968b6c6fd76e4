use crate::api::RequestContext;
use crate::entities::streams::StreamName;
use crate::events::EventResult;
use crate::models::connections::Connection;
use crate::models::events::{ServerEvent, TypingArgs};
use crate::repositories::streams;

/// Forwarded to the receiver's room verbatim, never persisted.
pub async fn handle(ctx: &RequestContext, conn: &mut Connection, args: TypingArgs) -> EventResult {
    conn.require_identity()?;
    streams::broadcast_event(
        ctx,
        StreamName::User(args.receiver_id),
        &ServerEvent::Typing {
            sender_id: args.sender_id,
            receiver_id: args.receiver_id,
            is_typing: args.is_typing,
        },
    )
    .await?;
    Ok(())
}
