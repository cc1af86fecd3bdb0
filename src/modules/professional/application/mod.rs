pub mod ports;
pub mod professional_use_cases;
pub mod use_cases;
