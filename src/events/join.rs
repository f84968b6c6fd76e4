use crate::api::RequestContext;
use crate::entities::streams::StreamName;
use crate::events::EventResult;
use crate::models::connections::Connection;
use crate::models::events::JoinArgs;
use crate::repositories::streams;
use crate::usecases::presences;

pub async fn handle(ctx: &RequestContext, conn: &mut Connection, args: JoinArgs) -> EventResult {
    // re-announcing under a different identity moves the connection
    if let Some(previous) = conn.user_id {
        if previous != args.user_id {
            streams::leave(ctx, StreamName::User(previous), conn.connection_id).await;
        }
    }
    conn.user_id = Some(args.user_id);
    presences::join(ctx, args.user_id, conn.connection_id, conn.sender.clone()).await
}
