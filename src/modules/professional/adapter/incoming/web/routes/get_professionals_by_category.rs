use actix_web::{get, web, Responder};
use uuid::Uuid;

use crate::{shared::api::ApiResponse, AppState};

#[get("/api/categories/{categoryId}/professionals")]
pub async fn get_professionals_by_category_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .professionals
        .get_by_category
        .execute(path.into_inner())
        .await
    {
        Ok(professionals) => ApiResponse::success(professionals),
        Err(err) => {
            tracing::error!("Failed to list professionals by category: {err}");
            ApiResponse::internal_error()
        }
    }
}
