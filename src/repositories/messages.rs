use crate::common::context::Context;
use crate::entities::messages::{ConversationEntry, Message};

const TABLE_NAME: &str = "messages";
const READ_FIELDS: &str = "m.id, m.sender_id, m.receiver_id, m.content, m.is_read, m.created_at, \
    su.full_name AS sender_name, ru.full_name AS receiver_name";
const READ_JOINS: &str = " INNER JOIN users su ON su.id = m.sender_id \
    INNER JOIN users ru ON ru.id = m.receiver_id";

pub async fn create<C: Context>(
    ctx: &C,
    sender_id: i64,
    receiver_id: i64,
    content: &str,
) -> sqlx::Result<u64> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (sender_id, receiver_id, content, is_read) VALUES (?, ?, ?, FALSE)"
    );
    let result = sqlx::query(QUERY)
        .bind(sender_id)
        .bind(receiver_id)
        .bind(content)
        .execute(ctx.db())
        .await?;
    Ok(result.last_insert_id())
}

pub async fn fetch_one<C: Context>(ctx: &C, message_id: u64) -> sqlx::Result<Message> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " m",
        READ_JOINS,
        " WHERE m.id = ?"
    );
    sqlx::query_as(QUERY)
        .bind(message_id)
        .fetch_one(ctx.db())
        .await
}

/// Full transcript between two users, oldest first. Ids are assigned
/// monotonically at insert, so they break creation-time ties.
pub async fn fetch_transcript<C: Context>(
    ctx: &C,
    viewer_id: i64,
    partner_id: i64,
) -> sqlx::Result<Vec<Message>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " m",
        READ_JOINS,
        " WHERE (m.sender_id = ? AND m.receiver_id = ?)",
        " OR (m.sender_id = ? AND m.receiver_id = ?)",
        " ORDER BY m.created_at ASC, m.id ASC"
    );
    sqlx::query_as(QUERY)
        .bind(viewer_id)
        .bind(partner_id)
        .bind(partner_id)
        .bind(viewer_id)
        .fetch_all(ctx.db())
        .await
}

/// One row per counterpart: the message with the highest id in each
/// viewer/counterpart pair, joined with the counterpart's name, most
/// recently active conversation first.
pub async fn fetch_conversations<C: Context>(
    ctx: &C,
    viewer_id: i64,
) -> sqlx::Result<Vec<ConversationEntry>> {
    const QUERY: &str = const_str::concat!(
        "SELECT u.id AS partner_id, u.full_name AS partner_name,",
        " m.id AS message_id, m.sender_id, m.receiver_id, m.content, m.is_read, m.created_at",
        " FROM ",
        TABLE_NAME,
        " m",
        " INNER JOIN users u ON u.id = IF(m.sender_id = ?, m.receiver_id, m.sender_id)",
        " WHERE m.id IN (",
        "SELECT MAX(id) FROM ",
        TABLE_NAME,
        " WHERE sender_id = ? OR receiver_id = ?",
        " GROUP BY IF(sender_id = ?, receiver_id, sender_id)",
        ")",
        " ORDER BY m.created_at DESC"
    );
    sqlx::query_as(QUERY)
        .bind(viewer_id)
        .bind(viewer_id)
        .bind(viewer_id)
        .bind(viewer_id)
        .fetch_all(ctx.db())
        .await
}

/// Flips every unread message from `sender_id` to `receiver_id`.
/// Returns the number of rows that actually changed; already-read rows are
/// untouched, so repeating the call is a no-op.
pub async fn mark_read<C: Context>(
    ctx: &C,
    sender_id: i64,
    receiver_id: i64,
) -> sqlx::Result<u64> {
    const QUERY: &str = const_str::concat!(
        "UPDATE ",
        TABLE_NAME,
        " SET is_read = TRUE",
        " WHERE sender_id = ? AND receiver_id = ? AND is_read IS FALSE"
    );
    let result = sqlx::query(QUERY)
        .bind(sender_id)
        .bind(receiver_id)
        .execute(ctx.db())
        .await?;
    Ok(result.rows_affected())
}
