mod get_professional_ratings;
mod rate_professional;

pub use get_professional_ratings::get_professional_ratings_handler;
pub use rate_professional::rate_professional_handler;
