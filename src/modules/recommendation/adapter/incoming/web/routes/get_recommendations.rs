use actix_web::{get, web, Responder};

use crate::{
    auth::adapter::incoming::web::extractors::session::CurrentUser,
    auth::application::domain::entities::UserId, shared::api::ApiResponse, AppState,
};

#[get("/api/recommendations")]
pub async fn get_recommendations_handler(
    user: CurrentUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .recommendations
        .get
        .execute(UserId::from(user.id))
        .await
    {
        Ok(suggestions) => ApiResponse::success(suggestions),
        Err(err) => {
            tracing::error!("Failed to compute recommendations: {err}");
            ApiResponse::internal_error()
        }
    }
}
