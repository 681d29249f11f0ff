pub mod core;
pub mod persist;
