//! Course operations

use crate::db::models::{Course, CourseInput};
use crate::error::{Error, Result};
use sqlx::SqlitePool;

/// All courses, no defined ordering.
pub async fn list_courses(pool: &SqlitePool) -> Result<Vec<Course>> {
    sqlx::query_as::<_, Course>("SELECT * FROM courses")
        .fetch_all(pool)
        .await
        .map_err(Error::Query)
}

/// Single course by id; `None` when no row matches.
pub async fn get_course_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Course>> {
    sqlx::query_as::<_, Course>("SELECT * FROM courses WHERE course_id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(Error::Query)
}

/// Insert a new course. A missing or empty `courseCode` normalizes to
/// NULL and is rejected by the column's NOT NULL constraint.
pub async fn create_course(pool: &SqlitePool, input: CourseInput) -> Result<()> {
    let data = input.normalized();

    sqlx::query("INSERT INTO courses (course_code, course_description) VALUES (?, ?)")
        .bind(&data.course_code)
        .bind(&data.course_description)
        .execute(pool)
        .await
        .map_err(|e| Error::mutation("Unable to add course", e))?;

    Ok(())
}

/// Update the course row keyed by the input's own `courseId`.
/// Zero rows matched is a silent success.
///
/// Whole-record, like the student update: both columns are rewritten
/// from the input on every call.
pub async fn update_course(pool: &SqlitePool, input: CourseInput) -> Result<()> {
    let data = input.normalized();
    let id = data
        .course_id
        .ok_or_else(|| Error::malformed("Unable to update course"))?;

    sqlx::query("UPDATE courses SET course_code = ?, course_description = ? WHERE course_id = ?")
        .bind(&data.course_code)
        .bind(&data.course_description)
        .bind(id)
        .execute(pool)
        .await
        .map_err(|e| Error::mutation("Unable to update course", e))?;

    Ok(())
}

/// Delete by course id. No-op success when nothing matched. Does not
/// cascade: students assigned to the course keep their old `course`
/// value and become orphaned.
pub async fn delete_course_by_id(pool: &SqlitePool, id: i64) -> Result<()> {
    sqlx::query("DELETE FROM courses WHERE course_id = ?")
        .bind(id)
        .execute(pool)
        .await
        .map_err(|e| Error::mutation("Unable to remove course", e))?;

    Ok(())
}
