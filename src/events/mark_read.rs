use crate::api::RequestContext;
use crate::events::EventResult;
use crate::models::connections::Connection;
use crate::models::events::MarkReadEventArgs;
use crate::usecases::messages;

pub async fn handle(
    ctx: &RequestContext,
    conn: &mut Connection,
    args: MarkReadEventArgs,
) -> EventResult {
    conn.require_identity()?;
    messages::mark_read(ctx, args.receiver_id, args.sender_id).await?;
    Ok(())
}
