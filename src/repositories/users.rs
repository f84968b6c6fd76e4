use crate::common::context::Context;
use crate::entities::users::UserListing;

const TABLE_NAME: &str = "users";
const READ_FIELDS: &str = "id, full_name, email, last_seen_at";

pub async fn search_active<C: Context>(
    ctx: &C,
    exclude_user_id: i64,
    search: Option<&str>,
) -> sqlx::Result<Vec<UserListing>> {
    match search {
        Some(term) if !term.trim().is_empty() => {
            const QUERY: &str = const_str::concat!(
                "SELECT ",
                READ_FIELDS,
                " FROM ",
                TABLE_NAME,
                " WHERE id != ? AND is_active IS TRUE",
                " AND (full_name LIKE ? OR email LIKE ?)",
                " ORDER BY full_name ASC"
            );
            let pattern = format!("%{}%", term.trim());
            sqlx::query_as(QUERY)
                .bind(exclude_user_id)
                .bind(&pattern)
                .bind(&pattern)
                .fetch_all(ctx.db())
                .await
        }
        _ => {
            const QUERY: &str = const_str::concat!(
                "SELECT ",
                READ_FIELDS,
                " FROM ",
                TABLE_NAME,
                " WHERE id != ? AND is_active IS TRUE",
                " ORDER BY full_name ASC"
            );
            sqlx::query_as(QUERY)
                .bind(exclude_user_id)
                .fetch_all(ctx.db())
                .await
        }
    }
}

pub async fn touch_last_seen<C: Context>(ctx: &C, user_id: i64) -> sqlx::Result<()> {
    const QUERY: &str = const_str::concat!(
        "UPDATE ",
        TABLE_NAME,
        " SET last_seen_at = CURRENT_TIMESTAMP WHERE id = ?"
    );
    sqlx::query(QUERY).bind(user_id).execute(ctx.db()).await?;
    Ok(())
}
