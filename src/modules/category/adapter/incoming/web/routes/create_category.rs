use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::session::AdminUser,
    category::application::use_cases::create_category::{
        CreateCategoryCommand, CreateCategoryCommandError, CreateCategoryError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
struct CreateCategoryRequest {
    pub name: String,
    pub description: Option<String>,
    pub parent_id: Option<Uuid>,
    pub is_active: Option<bool>,
}

#[post("/api/categories")]
pub async fn create_category_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    payload: web::Json<CreateCategoryRequest>,
) -> impl Responder {
    let command = match CreateCategoryCommand::new(
        payload.name.clone(),
        payload.description.clone(),
        payload.parent_id,
        payload.is_active,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.categories.create.execute(command).await {
        Ok(category) => ApiResponse::created(category),
        Err(err) => map_create_error(err),
    }
}

fn map_command_error(err: CreateCategoryCommandError) -> HttpResponse {
    match err {
        CreateCategoryCommandError::EmptyName => {
            ApiResponse::bad_request("EMPTY_NAME", "Name cannot be empty")
        }
        CreateCategoryCommandError::NameTooLong => {
            ApiResponse::bad_request("NAME_TOO_LONG", "Name must not exceed 100 characters")
        }
        CreateCategoryCommandError::UnsluggableName => ApiResponse::bad_request(
            "UNSLUGGABLE_NAME",
            "Name must contain at least one letter or digit",
        ),
    }
}

fn map_create_error(err: CreateCategoryError) -> HttpResponse {
    match err {
        CreateCategoryError::SlugTaken => {
            ApiResponse::conflict("SLUG_TAKEN", "A category with this name already exists")
        }
        CreateCategoryError::RepositoryError(msg) => {
            tracing::error!("Category creation failed: {msg}");
            ApiResponse::internal_error()
        }
    }
}
