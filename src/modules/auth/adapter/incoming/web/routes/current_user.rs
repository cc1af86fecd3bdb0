use actix_web::{get, Responder};

use crate::{
    auth::adapter::incoming::web::extractors::session::CurrentUser, shared::api::ApiResponse,
};

#[get("/api/user")]
pub async fn current_user_handler(user: CurrentUser) -> impl Responder {
    ApiResponse::success(user.view())
}
