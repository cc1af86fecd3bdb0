pub mod create_category;
pub mod delete_category;
pub mod get_categories;
pub mod get_category_by_slug;
pub mod get_subcategories;
pub mod patch_category;
