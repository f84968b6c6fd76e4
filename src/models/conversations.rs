use crate::entities::messages::ConversationEntry;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub partner_id: i64,
    pub partner_name: String,
    pub last_message_id: u64,
    pub last_message: String,
    pub last_message_at: DateTime<Utc>,
    pub unread: bool,
    pub sent_by_viewer: bool,
}

impl Conversation {
    /// The unread flag is only raised when the latest message is addressed
    /// to the viewer; the viewer's own unanswered messages never count.
    pub fn from_entry(viewer_id: i64, entry: ConversationEntry) -> Self {
        let sent_by_viewer = entry.sender_id == viewer_id;
        let unread = entry.receiver_id == viewer_id && !entry.is_read;
        Self {
            partner_id: entry.partner_id,
            partner_name: entry.partner_name,
            last_message_id: entry.message_id,
            last_message: entry.content,
            last_message_at: entry.created_at,
            unread,
            sent_by_viewer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(sender_id: i64, receiver_id: i64, is_read: bool) -> ConversationEntry {
        ConversationEntry {
            partner_id: 2,
            partner_name: "Acme Corp".to_owned(),
            message_id: 11,
            sender_id,
            receiver_id,
            content: "hello".to_owned(),
            is_read,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn unread_incoming_message_flags_the_conversation() {
        let conversation = Conversation::from_entry(1, entry(2, 1, false));
        assert!(conversation.unread);
        assert!(!conversation.sent_by_viewer);
    }

    #[test]
    fn read_incoming_message_is_not_unread() {
        let conversation = Conversation::from_entry(1, entry(2, 1, true));
        assert!(!conversation.unread);
    }

    #[test]
    fn viewers_own_unread_message_is_not_unread_for_them() {
        let conversation = Conversation::from_entry(1, entry(1, 2, false));
        assert!(!conversation.unread);
        assert!(conversation.sent_by_viewer);
    }
}
