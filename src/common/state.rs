use crate::entities::presences::PresenceMap;
use crate::entities::streams::StreamRouter;
use sqlx::{MySql, Pool};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: Pool<MySql>,
    pub streams: Arc<StreamRouter>,
    pub presences: Arc<PresenceMap>,
}
