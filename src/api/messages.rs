use crate::api::RequestContext;
use crate::common::error::ServiceResponse;
use crate::models::messages::{
    FetchMessagesArgs, FetchMessagesResponse, MarkReadArgs, MarkReadResponse, SendMessageArgs,
    SendMessageResponse,
};
use crate::usecases::messages;
use axum::Json;
use axum::extract::Query;

pub async fn fetch(
    ctx: RequestContext,
    Query(args): Query<FetchMessagesArgs>,
) -> ServiceResponse<FetchMessagesResponse> {
    let response = match args.partner_id {
        Some(partner_id) => {
            let messages = messages::open_transcript(&ctx, args.user_id, partner_id).await?;
            FetchMessagesResponse::History { messages }
        }
        None => {
            let conversations = messages::fetch_conversations(&ctx, args.user_id).await?;
            FetchMessagesResponse::Conversations { conversations }
        }
    };
    Ok(Json(response))
}

/// Fallback send path for clients without a live socket. Routes through the
/// same usecase as the socket event, so the receiver still gets the live
/// `message` push.
pub async fn send(
    ctx: RequestContext,
    Json(args): Json<SendMessageArgs>,
) -> ServiceResponse<SendMessageResponse> {
    let message = messages::send(&ctx, args.sender_id, args.receiver_id, &args.content).await?;
    Ok(Json(SendMessageResponse {
        success: true,
        message,
    }))
}

pub async fn mark_read(
    ctx: RequestContext,
    Json(args): Json<MarkReadArgs>,
) -> ServiceResponse<MarkReadResponse> {
    messages::mark_read(&ctx, args.user_id, args.partner_id).await?;
    Ok(Json(MarkReadResponse { success: true }))
}
