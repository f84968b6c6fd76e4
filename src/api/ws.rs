use crate::api::RequestContext;
use crate::common::error::AppError;
use crate::common::state::AppState;
use crate::events;
use crate::models::connections::Connection;
use crate::models::events::{ClientEvent, ServerEvent};
use crate::usecases::presences;
use axum::extract::State;
use axum::extract::ws::{Message as WsMessage, WebSocket, WebSocketUpgrade};
use axum::response::Response;
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tracing::{debug, warn};
use uuid::Uuid;

pub async fn websocket(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| handle_socket(state, socket))
}

async fn handle_socket(state: AppState, socket: WebSocket) {
    let ctx = RequestContext::from_state(&state);
    let (tx, mut rx) = mpsc::unbounded_channel::<String>();
    let (mut sink, mut stream) = socket.split();

    // frames queued by the router are pushed out by a dedicated task so
    // event handling never blocks on a slow socket
    let forward_task = tokio::spawn(async move {
        while let Some(frame) = rx.recv().await {
            if sink.send(WsMessage::Text(frame.into())).await.is_err() {
                break;
            }
        }
    });

    let mut conn = Connection::new(Uuid::new_v4(), tx);
    while let Some(Ok(frame)) = stream.next().await {
        let frame = match frame {
            WsMessage::Text(text) => text,
            WsMessage::Close(_) => break,
            _ => continue,
        };
        let event = match serde_json::from_str::<ClientEvent>(frame.as_str()) {
            Ok(event) => event,
            Err(e) => {
                debug!("Undecodable frame on connection {}: {e}", conn.connection_id);
                let _ = conn.send(&ServerEvent::error(&AppError::DecodingRequestFailed));
                continue;
            }
        };
        // failures are reported to this connection and never tear down the
        // socket or the channel host
        if let Err(e) = events::handle_event(&ctx, &mut conn, event).await {
            let _ = conn.send(&ServerEvent::error(&e));
        }
    }

    forward_task.abort();
    if let Err(e) = presences::disconnect(&ctx, conn.connection_id).await {
        warn!(
            "Failed to clean up connection {}: {:?}",
            conn.connection_id, e
        );
    }
}
