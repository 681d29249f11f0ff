mod api;
pub mod core;
