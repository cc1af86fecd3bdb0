use actix_web::{get, web, Responder};
use uuid::Uuid;

use crate::{shared::api::ApiResponse, AppState};

#[get("/api/categories/{id}/subcategories")]
pub async fn get_subcategories_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .categories
        .get_subcategories
        .execute(path.into_inner())
        .await
    {
        Ok(subcategories) => ApiResponse::success(subcategories),
        Err(err) => {
            tracing::error!("Failed to list subcategories: {err}");
            ApiResponse::internal_error()
        }
    }
}
