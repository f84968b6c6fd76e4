use crate::common::context::Context;
use crate::entities::streams::{StreamName, StreamSender};
use crate::models::events::ServerEvent;
use uuid::Uuid;

pub async fn register_connection<C: Context>(ctx: &C, connection_id: Uuid, sender: StreamSender) {
    ctx.streams().register(connection_id, sender).await
}

pub async fn unregister_connection<C: Context>(ctx: &C, connection_id: Uuid) {
    ctx.streams().unregister(connection_id).await
}

pub async fn join<C: Context>(ctx: &C, stream_name: StreamName, connection_id: Uuid) {
    ctx.streams().join(stream_name, connection_id).await
}

pub async fn leave<C: Context>(ctx: &C, stream_name: StreamName, connection_id: Uuid) {
    ctx.streams().leave(stream_name, connection_id).await
}

/// Serializes once and hands the frame to every subscriber of the stream.
pub async fn broadcast_event<C: Context>(
    ctx: &C,
    stream_name: StreamName,
    event: &ServerEvent,
) -> anyhow::Result<usize> {
    let frame = serde_json::to_string(event)?;
    Ok(ctx.streams().broadcast(stream_name, &frame).await)
}
