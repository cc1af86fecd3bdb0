use actix_web::{patch, web, Responder};
use serde::Deserialize;

use crate::{
    auth::adapter::incoming::web::extractors::session::SuperAdminUser,
    settings::application::use_cases::patch_settings::PatchSettingsCommand,
    shared::api::ApiResponse, AppState,
};

#[derive(Debug, Deserialize)]
struct UpdateSettingsRequest {
    pub show_ratings: Option<bool>,
    pub allow_ratings: Option<bool>,
}

#[patch("/api/system-settings")]
pub async fn update_system_settings_handler(
    _admin: SuperAdminUser,
    data: web::Data<AppState>,
    payload: web::Json<UpdateSettingsRequest>,
) -> impl Responder {
    let command = PatchSettingsCommand {
        show_ratings: payload.show_ratings,
        allow_ratings: payload.allow_ratings,
    };

    match data.settings.patch.execute(command).await {
        Ok(settings) => ApiResponse::success(settings),
        Err(err) => {
            tracing::error!("Failed to update system settings: {err}");
            ApiResponse::internal_error()
        }
    }
}
