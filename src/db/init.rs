//! Database initialization
//!
//! Opens (or creates) the SQLite database and establishes the two tables.
//! Must complete successfully before the server accepts requests; any
//! failure here is fatal to the process.

use crate::error::{Error, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use tracing::info;

/// Initialize the database connection pool and create tables if needed.
///
/// The pool is created once at startup and shared for the process
/// lifetime. The `students.course` foreign key is declared but not
/// enforced (`foreign_keys(false)`, overriding the driver's default of
/// enabling the pragma): deleting a course leaves its students in place
/// with their old `course` value.
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Initialization(sqlx::Error::Io(e)))?;
        }
    }

    // foreign_keys(false): the driver turns the pragma on by default,
    // which would reject course deletion while students reference it
    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .foreign_keys(false);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .map_err(Error::Initialization)?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    create_schema(&pool).await?;

    Ok(pool)
}

/// Create the `courses` and `students` tables if absent.
///
/// Idempotent: safe to call against an already-initialized database.
pub async fn create_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS courses (
            course_id INTEGER PRIMARY KEY AUTOINCREMENT,
            course_code TEXT NOT NULL,
            course_description TEXT
        )",
    )
    .execute(pool)
    .await
    .map_err(Error::Initialization)?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS students (
            student_num INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name TEXT,
            last_name TEXT,
            email TEXT,
            address_street TEXT,
            address_city TEXT,
            address_province TEXT,
            ta INTEGER NOT NULL DEFAULT 0,
            status TEXT,
            course INTEGER REFERENCES courses(course_id)
        )",
    )
    .execute(pool)
    .await
    .map_err(Error::Initialization)?;

    Ok(())
}
