pub mod ports;
pub mod rating_use_cases;
pub mod use_cases;
