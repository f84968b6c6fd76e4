use crate::api::RequestContext;
use crate::events::EventResult;
use crate::models::connections::Connection;
use crate::models::events::ServerEvent;
use crate::models::messages::SendMessageArgs;
use crate::usecases::messages;

pub async fn handle(
    ctx: &RequestContext,
    conn: &mut Connection,
    args: SendMessageArgs,
) -> EventResult {
    conn.require_identity()?;
    let message = messages::send(ctx, args.sender_id, args.receiver_id, &args.content).await?;
    // the confirmation goes to the originating connection only, not the
    // sender's whole room
    conn.send(&ServerEvent::MessageSent { message })
}
