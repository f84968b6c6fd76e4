use chrono::{DateTime, Utc};

#[derive(Debug, sqlx::FromRow)]
pub struct UserListing {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub last_seen_at: Option<DateTime<Utc>>,
}
