use crate::common::context::Context;
use crate::entities::presences::PresenceUpdate;
use uuid::Uuid;

/// Registers a live connection. Returns true when the user transitioned
/// from offline to online.
pub async fn create<C: Context>(ctx: &C, user_id: i64, connection_id: Uuid) -> bool {
    ctx.presences().join(user_id, connection_id).await
}

pub async fn remove<C: Context>(ctx: &C, connection_id: Uuid) -> Option<PresenceUpdate> {
    ctx.presences().disconnect(connection_id).await
}

pub async fn is_online<C: Context>(ctx: &C, user_id: i64) -> bool {
    ctx.presences().is_online(user_id).await
}
