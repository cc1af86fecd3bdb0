use std::sync::Arc;

use crate::settings::application::use_cases::{
    get_settings::GetSettingsUseCase, patch_settings::PatchSettingsUseCase,
};

#[derive(Clone)]
pub struct SettingsUseCases {
    pub get: Arc<dyn GetSettingsUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchSettingsUseCase + Send + Sync>,
}
