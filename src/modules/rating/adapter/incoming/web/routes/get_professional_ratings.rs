use actix_web::{get, web, Responder};
use uuid::Uuid;

use crate::{shared::api::ApiResponse, AppState};

#[get("/api/professionals/{id}/ratings")]
pub async fn get_professional_ratings_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .ratings
        .list_for_professional
        .execute(path.into_inner())
        .await
    {
        Ok(ratings) => ApiResponse::success(ratings),
        Err(err) => {
            tracing::error!("Failed to list ratings: {err}");
            ApiResponse::internal_error()
        }
    }
}
