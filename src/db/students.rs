//! Student operations
//!
//! Thin single-statement wrappers over the shared pool. Reads fail with
//! [`Error::Query`]; writes fail with [`Error::Mutation`] carrying the
//! fixed reason string the HTTP layer surfaces.

use crate::db::models::{Student, StudentInput};
use crate::error::{Error, Result};
use sqlx::SqlitePool;

/// All students, no filter, no defined ordering.
pub async fn list_students(pool: &SqlitePool) -> Result<Vec<Student>> {
    sqlx::query_as::<_, Student>("SELECT * FROM students")
        .fetch_all(pool)
        .await
        .map_err(Error::Query)
}

/// Students flagged as teaching assistants.
pub async fn list_teaching_assistants(pool: &SqlitePool) -> Result<Vec<Student>> {
    sqlx::query_as::<_, Student>("SELECT * FROM students WHERE ta = 1")
        .fetch_all(pool)
        .await
        .map_err(Error::Query)
}

/// Students assigned to the given course. No existence check on the
/// course itself: an unknown id yields an empty vec, not an error.
pub async fn list_students_by_course(pool: &SqlitePool, course_id: i64) -> Result<Vec<Student>> {
    sqlx::query_as::<_, Student>("SELECT * FROM students WHERE course = ?")
        .bind(course_id)
        .fetch_all(pool)
        .await
        .map_err(Error::Query)
}

/// Single student by number; `None` when no row matches.
pub async fn get_student_by_num(pool: &SqlitePool, num: i64) -> Result<Option<Student>> {
    sqlx::query_as::<_, Student>("SELECT * FROM students WHERE student_num = ?")
        .bind(num)
        .fetch_optional(pool)
        .await
        .map_err(Error::Query)
}

/// Insert a new student. The student number is assigned by the store.
pub async fn create_student(pool: &SqlitePool, input: StudentInput) -> Result<()> {
    let data = input.normalized();

    sqlx::query(
        "INSERT INTO students \
         (first_name, last_name, email, address_street, address_city, address_province, \
          ta, status, course) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&data.first_name)
    .bind(&data.last_name)
    .bind(&data.email)
    .bind(&data.address_street)
    .bind(&data.address_city)
    .bind(&data.address_province)
    .bind(data.ta)
    .bind(&data.status)
    .bind(data.course)
    .execute(pool)
    .await
    .map_err(|e| Error::mutation("Unable to create student", e))?;

    Ok(())
}

/// Update the student row keyed by the input's own `studentNum`.
/// Zero rows matched is a silent success, not an error.
///
/// The update is whole-record: every column is rewritten from the
/// input, so a field absent from the payload is stored as NULL (and an
/// absent `TA` as false). Callers submit the full field set.
pub async fn update_student(pool: &SqlitePool, input: StudentInput) -> Result<()> {
    let data = input.normalized();
    let num = data
        .student_num
        .ok_or_else(|| Error::malformed("Unable to update student"))?;

    sqlx::query(
        "UPDATE students SET \
         first_name = ?, last_name = ?, email = ?, address_street = ?, \
         address_city = ?, address_province = ?, ta = ?, status = ?, course = ? \
         WHERE student_num = ?",
    )
    .bind(&data.first_name)
    .bind(&data.last_name)
    .bind(&data.email)
    .bind(&data.address_street)
    .bind(&data.address_city)
    .bind(&data.address_province)
    .bind(data.ta)
    .bind(&data.status)
    .bind(data.course)
    .bind(num)
    .execute(pool)
    .await
    .map_err(|e| Error::mutation("Unable to update student", e))?;

    Ok(())
}

/// Delete by student number. Idempotent: succeeds even when no row matched.
pub async fn delete_student_by_num(pool: &SqlitePool, num: i64) -> Result<()> {
    sqlx::query("DELETE FROM students WHERE student_num = ?")
        .bind(num)
        .execute(pool)
        .await
        .map_err(|e| Error::mutation("Unable to remove student", e))?;

    Ok(())
}
