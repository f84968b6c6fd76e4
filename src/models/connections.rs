use crate::common::error::{AppError, ServiceResult};
use crate::entities::streams::StreamSender;
use crate::models::events::ServerEvent;
use uuid::Uuid;

/// State of one live socket, owned by its inbound loop. The identity is set
/// by the `join` event; until then only `join` itself is accepted.
pub struct Connection {
    pub connection_id: Uuid,
    pub user_id: Option<i64>,
    pub sender: StreamSender,
}

impl Connection {
    pub fn new(connection_id: Uuid, sender: StreamSender) -> Self {
        Self {
            connection_id,
            user_id: None,
            sender,
        }
    }

    pub fn require_identity(&self) -> ServiceResult<i64> {
        self.user_id.ok_or(AppError::ChannelsNotJoined)
    }

    /// Delivers an event to this connection only. A closed receiver means
    /// the socket is already shutting down and is not an error.
    pub fn send(&self, event: &ServerEvent) -> ServiceResult<()> {
        let frame = serde_json::to_string(event)?;
        let _ = self.sender.send(frame);
        Ok(())
    }
}
