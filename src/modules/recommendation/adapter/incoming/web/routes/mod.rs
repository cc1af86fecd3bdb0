mod get_recommendations;

pub use get_recommendations::get_recommendations_handler;
