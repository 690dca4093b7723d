pub mod assign;

pub use assign::configure_assign_routes;
