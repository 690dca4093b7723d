pub mod jwt;
pub mod parameter_error_handler;
pub mod sql;
pub mod validate;

pub use parameter_error_handler::json_error_handler;
pub use sql::placeholders;
