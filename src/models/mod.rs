pub mod db;
pub mod page;
pub mod quiz;
pub mod store;
pub mod web;
