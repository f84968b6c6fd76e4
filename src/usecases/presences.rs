use crate::common::context::Context;
use crate::common::error::ServiceResult;
use crate::entities::streams::{StreamName, StreamSender};
use crate::models::events::{OnlineStatus, ServerEvent};
use crate::repositories::{presences, streams, users};
use tracing::{debug, warn};
use uuid::Uuid;

/// Announces a connection's identity: subscribes it to the user's room,
/// tracks it in the presence map and tells everyone the user is online.
/// The status broadcast fires on every join, even from a second tab.
pub async fn join<C: Context>(
    ctx: &C,
    user_id: i64,
    connection_id: Uuid,
    sender: StreamSender,
) -> ServiceResult<()> {
    streams::register_connection(ctx, connection_id, sender).await;
    streams::join(ctx, StreamName::User(user_id), connection_id).await;

    let came_online = presences::create(ctx, user_id, connection_id).await;
    if came_online {
        debug!("User {user_id} came online on connection {connection_id}");
    }

    // best-effort; a failed touch must not fail the join
    if let Err(e) = users::touch_last_seen(ctx, user_id).await {
        warn!("Failed to update last-seen for user {user_id}: {e}");
    }

    streams::broadcast_event(
        ctx,
        StreamName::Main,
        &ServerEvent::UserStatus {
            user_id,
            status: OnlineStatus::Online,
        },
    )
    .await?;
    Ok(())
}

/// Reverse of `join` for one connection. The offline broadcast only fires
/// when the user's last connection went away.
pub async fn disconnect<C: Context>(ctx: &C, connection_id: Uuid) -> ServiceResult<()> {
    streams::unregister_connection(ctx, connection_id).await;

    let Some(update) = presences::remove(ctx, connection_id).await else {
        // the connection never announced an identity
        return Ok(());
    };
    if update.went_offline {
        debug!("User {} went offline", update.user_id);
        streams::broadcast_event(
            ctx,
            StreamName::Main,
            &ServerEvent::UserStatus {
                user_id: update.user_id,
                status: OnlineStatus::Offline,
            },
        )
        .await?;
    }
    Ok(())
}
