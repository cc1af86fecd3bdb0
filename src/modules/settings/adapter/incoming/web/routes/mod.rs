mod get_system_settings;
mod update_system_settings;

pub use get_system_settings::get_system_settings_handler;
pub use update_system_settings::update_system_settings_handler;
