use actix_web::{get, web, Responder};

use crate::{shared::api::ApiResponse, AppState};

#[get("/api/professionals")]
pub async fn get_professionals_handler(data: web::Data<AppState>) -> impl Responder {
    match data.professionals.get_list.execute().await {
        Ok(professionals) => ApiResponse::success(professionals),
        Err(err) => {
            tracing::error!("Failed to list professionals: {err}");
            ApiResponse::internal_error()
        }
    }
}
