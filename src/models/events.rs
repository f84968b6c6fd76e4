use crate::common::error::AppError;
use crate::models::messages::{Message, SendMessageArgs};
use serde::{Deserialize, Serialize};

/// Client-to-server frames. Internally tagged so a frame reads
/// `{"type":"message","senderId":1,...}` on the wire.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientEvent {
    Join(JoinArgs),
    Message(SendMessageArgs),
    Typing(TypingArgs),
    MarkRead(MarkReadEventArgs),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinArgs {
    pub user_id: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypingArgs {
    pub sender_id: i64,
    pub receiver_id: i64,
    pub is_typing: bool,
}

/// "The receiver has read everything the sender sent them."
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkReadEventArgs {
    pub sender_id: i64,
    pub receiver_id: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum ServerEvent {
    Message {
        message: Message,
    },
    MessageSent {
        message: Message,
    },
    MessageError {
        code: &'static str,
        message: &'static str,
    },
    Typing {
        sender_id: i64,
        receiver_id: i64,
        is_typing: bool,
    },
    MessagesRead {
        reader_id: i64,
    },
    UserStatus {
        user_id: i64,
        status: OnlineStatus,
    },
}

impl ServerEvent {
    pub fn error(e: &AppError) -> Self {
        ServerEvent::MessageError {
            code: e.code(),
            message: e.message(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OnlineStatus {
    Online,
    Offline,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn message_frame_decodes() {
        let frame = r#"{"type":"message","senderId":1,"receiverId":2,"content":"hello"}"#;
        match serde_json::from_str::<ClientEvent>(frame).unwrap() {
            ClientEvent::Message(args) => {
                assert_eq!(args.sender_id, 1);
                assert_eq!(args.receiver_id, 2);
                assert_eq!(args.content, "hello");
            }
            other => panic!("decoded wrong event: {other:?}"),
        }
    }

    #[test]
    fn mark_read_frame_decodes() {
        let frame = r#"{"type":"mark_read","senderId":1,"receiverId":2}"#;
        match serde_json::from_str::<ClientEvent>(frame).unwrap() {
            ClientEvent::MarkRead(args) => {
                assert_eq!(args.sender_id, 1);
                assert_eq!(args.receiver_id, 2);
            }
            other => panic!("decoded wrong event: {other:?}"),
        }
    }

    #[test]
    fn unknown_event_type_is_rejected() {
        let frame = r#"{"type":"shrug"}"#;
        assert!(serde_json::from_str::<ClientEvent>(frame).is_err());
    }

    #[test]
    fn user_status_frame_encodes() {
        let event = ServerEvent::UserStatus {
            user_id: 42,
            status: OnlineStatus::Online,
        };
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({"type": "user_status", "userId": 42, "status": "online"})
        );
    }

    #[test]
    fn messages_read_frame_encodes() {
        let event = ServerEvent::MessagesRead { reader_id: 2 };
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({"type": "messages_read", "readerId": 2})
        );
    }
}
