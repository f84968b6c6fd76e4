use hashbrown::{HashMap, HashSet};
use std::fmt::{Display, Formatter};
use tokio::sync::RwLock;
use tokio::sync::mpsc::UnboundedSender;
use uuid::Uuid;

pub type StreamSender = UnboundedSender<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamName {
    /// Per-user room; every connection the user has is subscribed to it so
    /// other parties can address the user directly.
    User(i64),
    /// Reaches every registered connection, identified or not.
    Main,
}

impl Display for StreamName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StreamName::User(user_id) => write!(f, "user:{}", user_id),
            StreamName::Main => write!(f, "main"),
        }
    }
}

/// In-process fanout between live connections. Each connection registers an
/// unbounded sender of serialized frames; streams are membership sets over
/// connection ids.
#[derive(Default)]
pub struct StreamRouter {
    inner: RwLock<RouterInner>,
}

#[derive(Default)]
struct RouterInner {
    connections: HashMap<Uuid, StreamSender>,
    memberships: HashMap<StreamName, HashSet<Uuid>>,
}

impl StreamRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn register(&self, connection_id: Uuid, sender: StreamSender) {
        let mut inner = self.inner.write().await;
        inner.connections.insert(connection_id, sender);
    }

    pub async fn unregister(&self, connection_id: Uuid) {
        let mut inner = self.inner.write().await;
        inner.connections.remove(&connection_id);
        inner.memberships.retain(|_, members| {
            members.remove(&connection_id);
            !members.is_empty()
        });
    }

    pub async fn join(&self, stream: StreamName, connection_id: Uuid) {
        let mut inner = self.inner.write().await;
        inner
            .memberships
            .entry(stream)
            .or_default()
            .insert(connection_id);
    }

    pub async fn leave(&self, stream: StreamName, connection_id: Uuid) {
        let mut inner = self.inner.write().await;
        if let Some(members) = inner.memberships.get_mut(&stream) {
            members.remove(&connection_id);
            if members.is_empty() {
                inner.memberships.remove(&stream);
            }
        }
    }

    /// Hands a frame to every connection subscribed to the stream.
    /// Returns the number of connections the frame was delivered to; closed
    /// receivers are skipped, their cleanup happens on disconnect.
    pub async fn broadcast(&self, stream: StreamName, payload: &str) -> usize {
        let inner = self.inner.read().await;
        let mut delivered = 0;
        match stream {
            StreamName::Main => {
                for sender in inner.connections.values() {
                    if sender.send(payload.to_owned()).is_ok() {
                        delivered += 1;
                    }
                }
            }
            StreamName::User(_) => {
                let Some(members) = inner.memberships.get(&stream) else {
                    return 0;
                };
                for connection_id in members {
                    if let Some(sender) = inner.connections.get(connection_id) {
                        if sender.send(payload.to_owned()).is_ok() {
                            delivered += 1;
                        }
                    }
                }
            }
        }
        delivered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

    async fn connect(router: &StreamRouter) -> (Uuid, UnboundedReceiver<String>) {
        let connection_id = Uuid::new_v4();
        let (tx, rx) = unbounded_channel();
        router.register(connection_id, tx).await;
        (connection_id, rx)
    }

    #[tokio::test]
    async fn user_room_reaches_only_its_members() {
        let router = StreamRouter::new();
        let (alice, mut alice_rx) = connect(&router).await;
        let (_bob, mut bob_rx) = connect(&router).await;
        router.join(StreamName::User(1), alice).await;

        let delivered = router.broadcast(StreamName::User(1), "hello").await;
        assert_eq!(delivered, 1);
        assert_eq!(alice_rx.recv().await.unwrap(), "hello");
        assert!(bob_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn main_reaches_every_connection() {
        let router = StreamRouter::new();
        let (_a, mut a_rx) = connect(&router).await;
        let (_b, mut b_rx) = connect(&router).await;

        let delivered = router.broadcast(StreamName::Main, "status").await;
        assert_eq!(delivered, 2);
        assert_eq!(a_rx.recv().await.unwrap(), "status");
        assert_eq!(b_rx.recv().await.unwrap(), "status");
    }

    #[tokio::test]
    async fn every_connection_of_a_user_gets_room_traffic() {
        let router = StreamRouter::new();
        let (tab_one, mut one_rx) = connect(&router).await;
        let (tab_two, mut two_rx) = connect(&router).await;
        router.join(StreamName::User(7), tab_one).await;
        router.join(StreamName::User(7), tab_two).await;

        assert_eq!(router.broadcast(StreamName::User(7), "ping").await, 2);
        assert_eq!(one_rx.recv().await.unwrap(), "ping");
        assert_eq!(two_rx.recv().await.unwrap(), "ping");
    }

    #[tokio::test]
    async fn unregister_removes_memberships() {
        let router = StreamRouter::new();
        let (conn, _rx) = connect(&router).await;
        router.join(StreamName::User(3), conn).await;
        router.unregister(conn).await;

        assert_eq!(router.broadcast(StreamName::User(3), "gone").await, 0);
        assert_eq!(router.broadcast(StreamName::Main, "gone").await, 0);
    }
}
