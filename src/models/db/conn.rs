use {
    diesel::{connection::SimpleConnection, QueryResult},
    log::{error, info},
    rocket::{fairing, Build, Rocket},
    rocket_sync_db_pools::database,
};

pub type Connection = diesel::SqliteConnection;

#[database("trivia_db")]
pub struct DbConn(Connection);

// stands in for a real migration setup; safe to run on every launch
const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS categories (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS questions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        category_id INTEGER NOT NULL REFERENCES categories (id),
        question TEXT NOT NULL,
        answer TEXT NOT NULL,
        difficulty INTEGER NOT NULL
    );
";

pub fn create_tables(conn: &mut Connection) -> QueryResult<()> {
    conn.batch_execute(SCHEMA)
}

pub async fn init_schema(rocket: Rocket<Build>) -> fairing::Result {
    let conn = match DbConn::get_one(&rocket).await {
        Some(conn) => conn,
        None => {
            error!("database pool unavailable while preparing the schema");
            return Err(rocket);
        }
    };

    match conn.run(create_tables).await {
        Ok(()) => {
            info!("database schema ready");
            Ok(rocket)
        }
        Err(e) => {
            error!("preparing the database schema failed: {}", e);
            Err(rocket)
        }
    }
}
