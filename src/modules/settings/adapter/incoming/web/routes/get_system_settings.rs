use actix_web::{get, web, Responder};

use crate::{shared::api::ApiResponse, AppState};

#[get("/api/system-settings")]
pub async fn get_system_settings_handler(data: web::Data<AppState>) -> impl Responder {
    match data.settings.get.execute().await {
        Ok(settings) => ApiResponse::success(settings),
        Err(err) => {
            tracing::error!("Failed to read system settings: {err}");
            ApiResponse::internal_error()
        }
    }
}
