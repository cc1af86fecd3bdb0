use actix_web::{get, web, Responder};

use crate::{shared::api::ApiResponse, AppState};

#[get("/api/categories")]
pub async fn get_categories_handler(data: web::Data<AppState>) -> impl Responder {
    match data.categories.get_list.execute().await {
        Ok(categories) => ApiResponse::success(categories),
        Err(err) => {
            tracing::error!("Failed to list categories: {err}");
            ApiResponse::internal_error()
        }
    }
}
