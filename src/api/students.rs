//! Student routes: JSON listings, rendered views, and form submissions

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::{Form, Json};
use serde::Deserialize;

use crate::api::ui::{escape, page};
use crate::api::ApiError;
use crate::db::{self, Course, Student, StudentInput};
use crate::AppState;

/// Query string for GET /students
#[derive(Debug, Default, Deserialize)]
pub struct StudentsQuery {
    /// Optional course filter; empty or non-numeric means unfiltered
    #[serde(default, deserialize_with = "crate::db::models::de_id")]
    pub course: Option<i64>,
}

/// GET /students
///
/// All students as JSON, or only those in `?course=` when given.
pub async fn list_students(
    State(state): State<AppState>,
    Query(query): Query<StudentsQuery>,
) -> Result<Json<Vec<Student>>, ApiError> {
    let students = match query.course {
        Some(course_id) => db::list_students_by_course(&state.db, course_id).await?,
        None => db::list_students(&state.db).await?,
    };
    Ok(Json(students))
}

/// GET /tas
pub async fn list_teaching_assistants(
    State(state): State<AppState>,
) -> Result<Json<Vec<Student>>, ApiError> {
    let tas = db::list_teaching_assistants(&state.db).await?;
    Ok(Json(tas))
}

/// GET /courses/:num
///
/// Students assigned to the course, as JSON. An unknown course id is an
/// empty array, not an error.
pub async fn students_in_course(
    State(state): State<AppState>,
    Path(num): Path<i64>,
) -> Result<Json<Vec<Student>>, ApiError> {
    let students = db::list_students_by_course(&state.db, num).await?;
    Ok(Json(students))
}

/// GET /student/:num
///
/// Rendered edit view for one student, with the course list for the
/// assignment dropdown. 404 when the student does not exist; a failed
/// course fetch still renders, with an empty dropdown.
pub async fn student_view(
    State(state): State<AppState>,
    Path(num): Path<i64>,
) -> Result<Response, ApiError> {
    let Some(student) = db::get_student_by_num(&state.db, num).await? else {
        return Ok((StatusCode::NOT_FOUND, "Student Not Found").into_response());
    };

    let courses = db::list_courses(&state.db).await.unwrap_or_default();
    let title = format!("Student {}", student.student_num);
    Ok(page(&title, &student_form(Some(&student), &courses)).into_response())
}

/// GET /student/add
pub async fn add_student_form(State(state): State<AppState>) -> Html<String> {
    let courses = db::list_courses(&state.db).await.unwrap_or_default();
    page("Add Student", &student_form(None, &courses))
}

/// POST /students/add
pub async fn create_student(
    State(state): State<AppState>,
    Form(input): Form<StudentInput>,
) -> Result<Redirect, ApiError> {
    db::create_student(&state.db, input).await?;
    Ok(Redirect::to("/students"))
}

/// POST /student/update
pub async fn update_student(
    State(state): State<AppState>,
    Form(input): Form<StudentInput>,
) -> Result<Redirect, ApiError> {
    db::update_student(&state.db, input).await?;
    Ok(Redirect::to("/students"))
}

/// GET /student/delete/:num
pub async fn delete_student(
    State(state): State<AppState>,
    Path(num): Path<i64>,
) -> Result<Redirect, ApiError> {
    db::delete_student_by_num(&state.db, num).await?;
    Ok(Redirect::to("/students"))
}

/// Shared add/edit form. `student` present means an edit form posting to
/// the update route with the student number carried in a hidden field.
fn student_form(student: Option<&Student>, courses: &[Course]) -> String {
    let text = |field: Option<String>| -> String { escape(field.as_deref().unwrap_or("")) };

    let (heading, action, key_field) = match student {
        Some(s) => (
            format!("Edit Student {}", s.student_num),
            "/student/update",
            format!(
                "<input type=\"hidden\" name=\"studentNum\" value=\"{}\">",
                s.student_num
            ),
        ),
        None => ("Add Student".to_string(), "/students/add", String::new()),
    };

    let ta_checked = match student {
        Some(s) if s.ta => " checked",
        _ => "",
    };

    let mut body = format!(
        "<h1>{heading}</h1>\n\
         <form method=\"post\" action=\"{action}\">\n{key_field}\n\
         <label>First name <input type=\"text\" name=\"firstName\" value=\"{first}\"></label>\n\
         <label>Last name <input type=\"text\" name=\"lastName\" value=\"{last}\"></label>\n\
         <label>Email <input type=\"email\" name=\"email\" value=\"{email}\"></label>\n\
         <label>Street <input type=\"text\" name=\"addressStreet\" value=\"{street}\"></label>\n\
         <label>City <input type=\"text\" name=\"addressCity\" value=\"{city}\"></label>\n\
         <label>Province <input type=\"text\" name=\"addressProvince\" value=\"{province}\"></label>\n\
         <label>Status <input type=\"text\" name=\"status\" value=\"{status}\"></label>\n\
         <label>Course <select name=\"course\">{options}</select></label>\n\
         <label><input type=\"checkbox\" name=\"TA\"{ta_checked}> Teaching assistant</label>\n\
         <div class=\"actions\"><button type=\"submit\">Save</button></div>\n\
         </form>\n",
        heading = escape(&heading),
        action = action,
        key_field = key_field,
        first = text(student.and_then(|s| s.first_name.clone())),
        last = text(student.and_then(|s| s.last_name.clone())),
        email = text(student.and_then(|s| s.email.clone())),
        street = text(student.and_then(|s| s.address_street.clone())),
        city = text(student.and_then(|s| s.address_city.clone())),
        province = text(student.and_then(|s| s.address_province.clone())),
        status = text(student.and_then(|s| s.status.clone())),
        options = course_options(courses, student.and_then(|s| s.course)),
        ta_checked = ta_checked,
    );

    if let Some(s) = student {
        body.push_str(&format!(
            "<p class=\"actions\"><a class=\"danger\" href=\"/student/delete/{}\">Delete this student</a></p>\n",
            s.student_num
        ));
    }

    body
}

/// Course dropdown options with the student's current course selected.
fn course_options(courses: &[Course], selected: Option<i64>) -> String {
    let mut options = String::from("<option value=\"\">(none)</option>");
    for course in courses {
        let marker = if selected == Some(course.course_id) {
            " selected"
        } else {
            ""
        };
        options.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>",
            course.course_id,
            marker,
            escape(&course.course_code)
        ));
    }
    options
}
