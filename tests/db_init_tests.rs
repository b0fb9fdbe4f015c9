//! Tests for database initialization and schema establishment

use college_records::db::init_database;
use std::path::PathBuf;

fn temp_db(name: &str) -> PathBuf {
    let path = PathBuf::from(format!(
        "/tmp/college-records-test-{}-{}.db",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    path
}

#[tokio::test]
async fn test_database_creation_when_missing() {
    let db_path = temp_db("create");

    let result = init_database(&db_path).await;
    assert!(
        result.is_ok(),
        "Database initialization failed: {:?}",
        result.err()
    );
    assert!(db_path.exists(), "Database file was not created");

    let _ = std::fs::remove_file(&db_path);
}

#[tokio::test]
async fn test_database_opens_existing() {
    let db_path = temp_db("existing");

    let pool1 = init_database(&db_path).await;
    assert!(pool1.is_ok());

    // Second run must be a no-op open, not a failure
    let pool2 = init_database(&db_path).await;
    assert!(
        pool2.is_ok(),
        "Failed to open existing database: {:?}",
        pool2.err()
    );

    drop(pool1);
    drop(pool2);
    let _ = std::fs::remove_file(&db_path);
}

#[tokio::test]
async fn test_schema_has_both_tables() {
    let db_path = temp_db("schema");

    let pool = init_database(&db_path).await.unwrap();

    let tables: Vec<String> = sqlx::query_scalar(
        "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(tables.contains(&"students".to_string()));
    assert!(tables.contains(&"courses".to_string()));

    drop(pool);
    let _ = std::fs::remove_file(&db_path);
}

#[tokio::test]
async fn test_course_foreign_key_is_not_enforced() {
    let db_path = temp_db("fk-off");

    let pool = init_database(&db_path).await.unwrap();

    let pragma: i64 = sqlx::query_scalar("PRAGMA foreign_keys")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(pragma, 0, "foreign_keys pragma must stay off");

    // The REFERENCES clause is documentary: a student may point at a
    // course id that does not exist
    let result =
        sqlx::query("INSERT INTO students (first_name, ta, course) VALUES ('X', 0, 123)")
            .execute(&pool)
            .await;
    assert!(
        result.is_ok(),
        "dangling course reference was rejected: {:?}",
        result.err()
    );

    drop(pool);
    let _ = std::fs::remove_file(&db_path);
}

#[tokio::test]
async fn test_course_code_is_required_by_schema() {
    let db_path = temp_db("notnull");

    let pool = init_database(&db_path).await.unwrap();

    let result = sqlx::query("INSERT INTO courses (course_code, course_description) VALUES (NULL, 'x')")
        .execute(&pool)
        .await;
    assert!(result.is_err(), "NULL course_code should be rejected");

    drop(pool);
    let _ = std::fs::remove_file(&db_path);
}
