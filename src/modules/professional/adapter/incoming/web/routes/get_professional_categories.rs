use actix_web::{get, web, Responder};
use uuid::Uuid;

use crate::{shared::api::ApiResponse, AppState};

#[get("/api/professionals/{professionalId}/categories")]
pub async fn get_professional_categories_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .professionals
        .get_categories
        .execute(path.into_inner())
        .await
    {
        Ok(categories) => ApiResponse::success(categories),
        Err(err) => {
            tracing::error!("Failed to list professional categories: {err}");
            ApiResponse::internal_error()
        }
    }
}
