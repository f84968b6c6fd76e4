use crate::entities::messages::Message as MessageEntity;
use crate::models::conversations::Conversation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: u64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub sender_name: String,
    pub receiver_name: String,
    pub content: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl From<MessageEntity> for Message {
    fn from(value: MessageEntity) -> Self {
        Self {
            id: value.id,
            sender_id: value.sender_id,
            receiver_id: value.receiver_id,
            sender_name: value.sender_name,
            receiver_name: value.receiver_name,
            content: value.content,
            is_read: value.is_read,
            created_at: value.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageArgs {
    pub sender_id: i64,
    pub receiver_id: i64,
    pub content: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchMessagesArgs {
    pub user_id: i64,
    pub partner_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkReadArgs {
    pub user_id: i64,
    pub partner_id: i64,
}

#[derive(Serialize)]
pub struct SendMessageResponse {
    pub success: bool,
    pub message: Message,
}

#[derive(Serialize)]
pub struct MarkReadResponse {
    pub success: bool,
}

/// `GET /messages` answers with the inbox when no partner is given and with
/// the transcript when one is.
#[derive(Serialize)]
#[serde(untagged)]
pub enum FetchMessagesResponse {
    Conversations { conversations: Vec<Conversation> },
    History { messages: Vec<Message> },
}
