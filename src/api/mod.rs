pub mod messages;
pub mod users;
pub mod ws;

use crate::common::context::Context;
use crate::common::init;
use crate::common::state::AppState;
use crate::entities::presences::PresenceMap;
use crate::entities::streams::StreamRouter;
use crate::settings::AppSettings;
use axum::Router;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::routing::get;
use sqlx::{MySql, Pool};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

pub struct RequestContext {
    pub db: Pool<MySql>,
    pub streams: Arc<StreamRouter>,
    pub presences: Arc<PresenceMap>,
}

impl RequestContext {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            db: state.db.clone(),
            streams: state.streams.clone(),
            presences: state.presences.clone(),
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/messages",
            get(messages::fetch)
                .post(messages::send)
                .put(messages::mark_read),
        )
        .route("/users", get(users::search))
        .route("/ws", get(ws::websocket))
}

pub async fn serve(settings: &AppSettings) -> anyhow::Result<()> {
    let state = init::initialize_state(settings).await?;
    let router = router().with_state(state);

    let addr = SocketAddr::new(settings.app_host, settings.app_port);
    let listener = TcpListener::bind(addr).await?;
    info!("Serving messaging API on {addr}");
    axum::serve(listener, router).await?;
    Ok(())
}

impl FromRequestParts<AppState> for RequestContext {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self::from_state(state))
    }
}

impl Context for RequestContext {
    fn db(&self) -> &Pool<MySql> {
        &self.db
    }

    fn streams(&self) -> &StreamRouter {
        &self.streams
    }

    fn presences(&self) -> &PresenceMap {
        &self.presences
    }
}
