use crate::api::RequestContext;
use crate::common::error::ServiceResponse;
use crate::models::users::{SearchUsersArgs, UsersResponse};
use crate::usecases::users;
use axum::Json;
use axum::extract::Query;

pub async fn search(
    ctx: RequestContext,
    Query(args): Query<SearchUsersArgs>,
) -> ServiceResponse<UsersResponse> {
    let users = users::search(&ctx, args.current_user_id, args.search.as_deref()).await?;
    Ok(Json(UsersResponse { users }))
}
