use actix_web::{delete, web, HttpResponse, Responder};
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::session::SuperAdminUser,
    category::application::use_cases::delete_category::DeleteCategoryError,
    shared::api::ApiResponse, AppState,
};

#[delete("/api/categories/{id}")]
pub async fn delete_category_handler(
    _admin: SuperAdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.categories.delete.execute(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => map_delete_error(err),
    }
}

fn map_delete_error(err: DeleteCategoryError) -> HttpResponse {
    match err {
        DeleteCategoryError::CategoryNotFound => {
            ApiResponse::not_found("CATEGORY_NOT_FOUND", "Category not found")
        }
        DeleteCategoryError::RepositoryError(msg) => {
            tracing::error!("Category delete failed: {msg}");
            ApiResponse::internal_error()
        }
    }
}
