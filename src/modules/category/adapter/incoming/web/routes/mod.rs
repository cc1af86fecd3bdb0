mod create_category;
mod delete_category;
mod get_categories;
mod get_category_by_slug;
mod get_subcategories;
mod patch_category;

pub use create_category::create_category_handler;
pub use delete_category::delete_category_handler;
pub use get_categories::get_categories_handler;
pub use get_category_by_slug::get_category_by_slug_handler;
pub use get_subcategories::get_subcategories_handler;
pub use patch_category::patch_category_handler;
