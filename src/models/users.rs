use crate::entities::users::UserListing as UserListingEntity;
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchUsersArgs {
    pub current_user_id: i64,
    pub search: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListing {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub last_seen_at: Option<DateTime<Utc>>,
    pub is_online: bool,
}

impl UserListing {
    /// A user is online when they hold a live connection or were seen within
    /// the presence window. Both signals are combined here so the directory
    /// agrees with the live chat pane.
    pub fn annotate(
        entity: UserListingEntity,
        connected: bool,
        now: DateTime<Utc>,
        window: Duration,
    ) -> Self {
        let is_online = connected || seen_within(entity.last_seen_at, now, window);
        Self {
            id: entity.id,
            full_name: entity.full_name,
            email: entity.email,
            last_seen_at: entity.last_seen_at,
            is_online,
        }
    }
}

pub fn seen_within(
    last_seen_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    window: Duration,
) -> bool {
    match last_seen_at {
        Some(last_seen_at) => now - last_seen_at <= TimeDelta::seconds(window.as_secs() as i64),
        None => false,
    }
}

#[derive(Serialize)]
pub struct UsersResponse {
    pub users: Vec<UserListing>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_secs(300);

    fn entity(last_seen_at: Option<DateTime<Utc>>) -> UserListingEntity {
        UserListingEntity {
            id: 2,
            full_name: "Dana Fields".to_owned(),
            email: "dana@example.com".to_owned(),
            last_seen_at,
        }
    }

    #[test]
    fn recently_seen_user_is_online_without_a_connection() {
        let now = Utc::now();
        let listing = UserListing::annotate(
            entity(Some(now - TimeDelta::seconds(60))),
            false,
            now,
            WINDOW,
        );
        assert!(listing.is_online);
    }

    #[test]
    fn stale_last_seen_is_offline_unless_connected() {
        let now = Utc::now();
        let last_seen = Some(now - TimeDelta::seconds(301));
        assert!(!UserListing::annotate(entity(last_seen), false, now, WINDOW).is_online);
        assert!(UserListing::annotate(entity(last_seen), true, now, WINDOW).is_online);
    }

    #[test]
    fn never_seen_user_is_offline() {
        let now = Utc::now();
        assert!(!UserListing::annotate(entity(None), false, now, WINDOW).is_online);
    }
}
