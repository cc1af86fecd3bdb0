pub mod get_settings;
pub mod patch_settings;
