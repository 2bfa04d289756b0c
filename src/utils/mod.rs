pub mod error;
pub mod logger;
pub mod monitor;
pub mod sanitize;
pub mod validation;
