use actix_web::{get, web, Responder};

use crate::{
    category::application::use_cases::get_category_by_slug::GetCategoryBySlugError,
    shared::api::ApiResponse, AppState,
};

#[get("/api/categories/{slug}")]
pub async fn get_category_by_slug_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.categories.get_by_slug.execute(&slug).await {
        Ok(category) => ApiResponse::success(category),
        Err(GetCategoryBySlugError::NotFound) => {
            ApiResponse::not_found("CATEGORY_NOT_FOUND", "Category not found")
        }
        Err(GetCategoryBySlugError::QueryError(msg)) => {
            tracing::error!("Category lookup failed: {msg}");
            ApiResponse::internal_error()
        }
    }
}
