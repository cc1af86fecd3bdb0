pub mod create_user;
pub mod delete_user;
pub mod list_users;
pub mod login_user;
pub mod logout_user;
pub mod register_user;
pub mod update_user;
pub mod update_user_role;
