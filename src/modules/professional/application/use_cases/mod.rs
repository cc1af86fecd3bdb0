pub mod assign_category;
pub mod create_professional;
pub mod delete_professional;
pub mod get_professional_categories;
pub mod get_professionals;
pub mod get_professionals_by_category;
pub mod get_single_professional;
pub mod patch_professional;
pub mod remove_category;
