use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use std::path::Path;

pub type DbPool = Pool<SqliteConnectionManager>;

/// Accepts `sqlite:path?mode=rwc`, a bare path, or `:memory:`.
pub fn create_pool(database_url: &str) -> Result<DbPool, r2d2::Error> {
    let path = sqlite_path(database_url);

    // Each in-memory connection is its own database, so keep a single one
    if path == ":memory:" {
        return create_memory_pool();
    }

    Pool::builder()
        .max_size(5)
        .build(SqliteConnectionManager::file(Path::new(path)))
}

pub fn create_memory_pool() -> Result<DbPool, r2d2::Error> {
    Pool::builder()
        .max_size(1)
        .build(SqliteConnectionManager::memory())
}

fn sqlite_path(database_url: &str) -> &str {
    let path = database_url.strip_prefix("sqlite:").unwrap_or(database_url);
    path.split('?').next().unwrap_or(path)
}
