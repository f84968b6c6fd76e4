use chrono::{DateTime, Utc};

#[derive(Debug, sqlx::FromRow)]
pub struct Message {
    pub id: u64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub content: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    pub sender_name: String,
    pub receiver_name: String,
}

/// Raw read-model row: the most recent message between the viewer and one
/// counterpart, joined with the counterpart's display name. Viewer-relative
/// flags are derived in the model layer.
#[derive(Debug, sqlx::FromRow)]
pub struct ConversationEntry {
    pub partner_id: i64,
    pub partner_name: String,
    pub message_id: u64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub content: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}
