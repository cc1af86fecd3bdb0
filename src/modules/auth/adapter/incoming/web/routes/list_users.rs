use actix_web::{get, web, Responder};

use crate::{
    auth::adapter::incoming::web::extractors::session::SuperAdminUser, shared::api::ApiResponse,
    AppState,
};

#[get("/api/users")]
pub async fn list_users_handler(
    _admin: SuperAdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.users.list.execute().await {
        Ok(users) => ApiResponse::success(users),
        Err(err) => {
            tracing::error!("Failed to list users: {err}");
            ApiResponse::internal_error()
        }
    }
}
