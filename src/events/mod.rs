pub mod join;
pub mod mark_read;
pub mod message;
pub mod typing;

use crate::api::RequestContext;
use crate::common::error::ServiceResult;
use crate::models::connections::Connection;
use crate::models::events::ClientEvent;

pub type EventResult = ServiceResult<()>;

/// Dispatches one decoded client frame. Frames of a single connection are
/// handled strictly in arrival order by the socket's inbound loop.
pub async fn handle_event(
    ctx: &RequestContext,
    conn: &mut Connection,
    event: ClientEvent,
) -> EventResult {
    match event {
        ClientEvent::Join(args) => join::handle(ctx, conn, args).await,
        ClientEvent::Message(args) => message::handle(ctx, conn, args).await,
        ClientEvent::Typing(args) => typing::handle(ctx, conn, args).await,
        ClientEvent::MarkRead(args) => mark_read::handle(ctx, conn, args).await,
    }
}
