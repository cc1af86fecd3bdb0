use actix_web::{patch, web, HttpResponse, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::session::AdminUser,
    category::application::use_cases::patch_category::{
        PatchCategoryCommand, PatchCategoryCommandError, PatchCategoryError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
struct PatchCategoryRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub parent_id: Option<Uuid>,
    pub is_active: Option<bool>,
}

#[patch("/api/categories/{id}")]
pub async fn patch_category_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
    payload: web::Json<PatchCategoryRequest>,
) -> impl Responder {
    let command = match PatchCategoryCommand::new(
        path.into_inner(),
        payload.name.clone(),
        payload.description.clone(),
        payload.parent_id,
        payload.is_active,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.categories.patch.execute(command).await {
        Ok(category) => ApiResponse::success(category),
        Err(err) => map_patch_error(err),
    }
}

fn map_command_error(err: PatchCategoryCommandError) -> HttpResponse {
    match err {
        PatchCategoryCommandError::EmptyUpdate => {
            ApiResponse::bad_request("EMPTY_UPDATE", "Nothing to update")
        }
        PatchCategoryCommandError::EmptyName => {
            ApiResponse::bad_request("EMPTY_NAME", "Name cannot be empty")
        }
        PatchCategoryCommandError::NameTooLong => {
            ApiResponse::bad_request("NAME_TOO_LONG", "Name must not exceed 100 characters")
        }
    }
}

fn map_patch_error(err: PatchCategoryError) -> HttpResponse {
    match err {
        PatchCategoryError::CategoryNotFound => {
            ApiResponse::not_found("CATEGORY_NOT_FOUND", "Category not found")
        }
        PatchCategoryError::RepositoryError(msg) => {
            tracing::error!("Category update failed: {msg}");
            ApiResponse::internal_error()
        }
    }
}
