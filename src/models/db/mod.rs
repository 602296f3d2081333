pub mod models;
pub mod schema;
mod conn;
mod ops;

pub use conn::{create_tables, init_schema, Connection, DbConn};
