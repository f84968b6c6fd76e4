use hashbrown::{HashMap, HashSet};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresenceUpdate {
    pub user_id: i64,
    pub went_offline: bool,
}

/// Live connections per user. Process-local; reset on restart.
///
/// A user counts as online while at least one connection is registered.
/// Both indexes are guarded by a single lock so a join racing a disconnect
/// can never leave them disagreeing.
#[derive(Default)]
pub struct PresenceMap {
    inner: RwLock<PresenceInner>,
}

#[derive(Default)]
struct PresenceInner {
    by_user: HashMap<i64, HashSet<Uuid>>,
    by_connection: HashMap<Uuid, i64>,
}

impl PresenceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a connection for a user.
    /// Returns true when this is the user's first live connection.
    pub async fn join(&self, user_id: i64, connection_id: Uuid) -> bool {
        let mut inner = self.inner.write().await;
        // a connection belongs to exactly one user; re-announcing under a
        // different identity moves it
        if let Some(previous) = inner.by_connection.insert(connection_id, user_id) {
            if previous != user_id {
                if let Some(connections) = inner.by_user.get_mut(&previous) {
                    connections.remove(&connection_id);
                    if connections.is_empty() {
                        inner.by_user.remove(&previous);
                    }
                }
            }
        }
        let connections = inner.by_user.entry(user_id).or_default();
        let came_online = connections.is_empty();
        connections.insert(connection_id);
        came_online
    }

    /// Reverse lookup and removal. `went_offline` is set only when the
    /// user's last connection disappeared, so dropping an older tab never
    /// marks a still-connected user offline.
    pub async fn disconnect(&self, connection_id: Uuid) -> Option<PresenceUpdate> {
        let mut inner = self.inner.write().await;
        let user_id = inner.by_connection.remove(&connection_id)?;
        let went_offline = match inner.by_user.get_mut(&user_id) {
            Some(connections) => {
                connections.remove(&connection_id);
                connections.is_empty()
            }
            None => true,
        };
        if went_offline {
            inner.by_user.remove(&user_id);
        }
        Some(PresenceUpdate {
            user_id,
            went_offline,
        })
    }

    pub async fn is_online(&self, user_id: i64) -> bool {
        self.inner.read().await.by_user.contains_key(&user_id)
    }

    pub async fn connection_count(&self) -> usize {
        self.inner.read().await.by_connection.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn first_join_brings_user_online() {
        let presences = PresenceMap::new();
        assert!(presences.join(1, Uuid::new_v4()).await);
        assert!(presences.is_online(1).await);
    }

    #[tokio::test]
    async fn second_connection_is_not_a_transition() {
        let presences = PresenceMap::new();
        assert!(presences.join(1, Uuid::new_v4()).await);
        assert!(!presences.join(1, Uuid::new_v4()).await);
        assert_eq!(presences.connection_count().await, 2);
    }

    #[tokio::test]
    async fn user_stays_online_until_last_connection_drops() {
        let presences = PresenceMap::new();
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        presences.join(1, first).await;
        presences.join(1, second).await;

        let update = presences.disconnect(first).await.unwrap();
        assert_eq!(
            update,
            PresenceUpdate {
                user_id: 1,
                went_offline: false
            }
        );
        assert!(presences.is_online(1).await);

        let update = presences.disconnect(second).await.unwrap();
        assert_eq!(
            update,
            PresenceUpdate {
                user_id: 1,
                went_offline: true
            }
        );
        assert!(!presences.is_online(1).await);
    }

    #[tokio::test]
    async fn unknown_connection_is_ignored() {
        let presences = PresenceMap::new();
        presences.join(1, Uuid::new_v4()).await;
        assert_eq!(presences.disconnect(Uuid::new_v4()).await, None);
        assert!(presences.is_online(1).await);
    }

    #[tokio::test]
    async fn rejoin_under_new_identity_moves_the_connection() {
        let presences = PresenceMap::new();
        let connection_id = Uuid::new_v4();
        presences.join(1, connection_id).await;
        presences.join(2, connection_id).await;
        assert!(!presences.is_online(1).await);
        assert!(presences.is_online(2).await);
        assert_eq!(presences.connection_count().await, 1);
    }
}
