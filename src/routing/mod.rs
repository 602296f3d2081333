pub mod api;
pub mod catchers;
pub mod cors;
