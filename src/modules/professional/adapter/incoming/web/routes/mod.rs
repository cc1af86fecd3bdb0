mod assign_category;
mod create_professional;
mod delete_professional;
mod get_professional_categories;
mod get_professionals;
mod get_professionals_by_category;
mod get_single_professional;
mod patch_professional;
mod remove_category;

pub use assign_category::assign_category_handler;
pub use create_professional::create_professional_handler;
pub use delete_professional::delete_professional_handler;
pub use get_professional_categories::get_professional_categories_handler;
pub use get_professionals::get_professionals_handler;
pub use get_professionals_by_category::get_professionals_by_category_handler;
pub use get_single_professional::get_single_professional_handler;
pub use patch_professional::patch_professional_handler;
pub use remove_category::remove_category_handler;
