mod create_user;
mod current_user;
mod delete_user;
mod list_users;
mod login_user;
mod logout_user;
mod register_user;
mod update_user;
mod update_user_role;

pub use create_user::create_user_handler;
pub use current_user::current_user_handler;
pub use delete_user::delete_user_handler;
pub use list_users::list_users_handler;
pub use login_user::login_user_handler;
pub use logout_user::logout_user_handler;
pub use register_user::register_user_handler;
pub use update_user::update_user_handler;
pub use update_user_role::update_user_role_handler;
