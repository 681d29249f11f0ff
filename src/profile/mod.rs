pub mod draft;
pub mod experience;
pub mod store;
