//! Course routes: rendered listing and forms, plus form submissions

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;

use crate::api::ui::{escape, page};
use crate::api::ApiError;
use crate::db::{self, Course, CourseInput};
use crate::AppState;

/// GET /courses
///
/// Rendered listing of all courses.
pub async fn courses_view(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let courses = db::list_courses(&state.db).await?;
    Ok(page("Courses", &course_table(&courses)))
}

/// GET /course/:id
///
/// Rendered edit view for one course; 404 when it does not exist.
pub async fn course_view(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let Some(course) = db::get_course_by_id(&state.db, id).await? else {
        return Ok((StatusCode::NOT_FOUND, "Course Not Found").into_response());
    };

    let title = format!("Course {}", course.course_id);
    Ok(page(&title, &course_form(Some(&course))).into_response())
}

/// GET /course/add
pub async fn add_course_form() -> Html<String> {
    page("Add Course", &course_form(None))
}

/// POST /courses/add
pub async fn create_course(
    State(state): State<AppState>,
    Form(input): Form<CourseInput>,
) -> Result<Redirect, ApiError> {
    db::create_course(&state.db, input).await?;
    Ok(Redirect::to("/courses"))
}

/// POST /course/update
pub async fn update_course(
    State(state): State<AppState>,
    Form(input): Form<CourseInput>,
) -> Result<Redirect, ApiError> {
    db::update_course(&state.db, input).await?;
    Ok(Redirect::to("/courses"))
}

/// GET /course/delete/:id
pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, ApiError> {
    db::delete_course_by_id(&state.db, id).await?;
    Ok(Redirect::to("/courses"))
}

fn course_table(courses: &[Course]) -> String {
    let mut body = String::from("<h1>Courses</h1>\n");

    if courses.is_empty() {
        body.push_str("<p>No courses yet. <a href=\"/course/add\">Add one.</a></p>\n");
        return body;
    }

    body.push_str(
        "<table>\n<tr><th>Id</th><th>Code</th><th>Description</th><th></th></tr>\n",
    );
    for course in courses {
        body.push_str(&format!(
            "<tr><td>{id}</td><td>{code}</td><td>{description}</td>\
             <td><a href=\"/course/{id}\">edit</a> \
             <a href=\"/courses/{id}\">students</a></td></tr>\n",
            id = course.course_id,
            code = escape(&course.course_code),
            description = escape(course.course_description.as_deref().unwrap_or("")),
        ));
    }
    body.push_str("</table>\n<p class=\"actions\"><a href=\"/course/add\">Add Course</a></p>\n");
    body
}

/// Shared add/edit form, posting to the add or update route.
fn course_form(course: Option<&Course>) -> String {
    let (heading, action, key_field) = match course {
        Some(c) => (
            format!("Edit Course {}", c.course_id),
            "/course/update",
            format!(
                "<input type=\"hidden\" name=\"courseId\" value=\"{}\">",
                c.course_id
            ),
        ),
        None => ("Add Course".to_string(), "/courses/add", String::new()),
    };

    let mut body = format!(
        "<h1>{heading}</h1>\n\
         <form method=\"post\" action=\"{action}\">\n{key_field}\n\
         <label>Course code <input type=\"text\" name=\"courseCode\" value=\"{code}\"></label>\n\
         <label>Description <input type=\"text\" name=\"courseDescription\" value=\"{description}\"></label>\n\
         <div class=\"actions\"><button type=\"submit\">Save</button></div>\n\
         </form>\n",
        heading = escape(&heading),
        action = action,
        key_field = key_field,
        code = escape(course.map(|c| c.course_code.as_str()).unwrap_or("")),
        description = escape(
            course
                .and_then(|c| c.course_description.as_deref())
                .unwrap_or("")
        ),
    );

    if let Some(c) = course {
        body.push_str(&format!(
            "<p class=\"actions\"><a class=\"danger\" href=\"/course/delete/{}\">Delete this course</a></p>\n",
            c.course_id
        ));
    }

    body
}
