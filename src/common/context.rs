use crate::entities::presences::PresenceMap;
use crate::entities::streams::StreamRouter;
use sqlx::{MySql, Pool};

pub trait Context: Sync + Send {
    fn db(&self) -> &Pool<MySql>;
    fn streams(&self) -> &StreamRouter;
    fn presences(&self) -> &PresenceMap;
}
