use crate::common::context::Context;
use crate::common::error::{ServiceResult, unexpected};
use crate::models::users::UserListing;
use crate::repositories::{presences, users};
use crate::settings::AppSettings;
use chrono::Utc;

/// Directory lookup: active users other than the viewer, filtered by name
/// or email, each annotated with the combined online flag (live connection
/// or recent activity).
pub async fn search<C: Context>(
    ctx: &C,
    viewer_id: i64,
    search: Option<&str>,
) -> ServiceResult<Vec<UserListing>> {
    let rows = match users::search_active(ctx, viewer_id, search).await {
        Ok(rows) => rows,
        Err(e) => return unexpected(e),
    };

    let window = AppSettings::get().presence_window;
    let now = Utc::now();
    let mut listings = Vec::with_capacity(rows.len());
    for row in rows {
        let connected = presences::is_online(ctx, row.id).await;
        listings.push(UserListing::annotate(row, connected, now, window));
    }
    Ok(listings)
}
