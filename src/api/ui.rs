//! Server-rendered pages
//!
//! No template engine: pages are an embedded HTML shell plus
//! `format!`-composed body fragments, all dynamic text escaped.

use axum::response::Html;

const SHELL_HTML: &str = include_str!("../ui/shell.html");
const HOME_HTML: &str = include_str!("../ui/home.html");
const ABOUT_HTML: &str = include_str!("../ui/about.html");

/// Wrap a body fragment in the shared page shell.
pub fn page(title: &str, body: &str) -> Html<String> {
    Html(
        SHELL_HTML
            .replace("{{title}}", &escape(title))
            .replace("{{body}}", body),
    )
}

/// Escape text for interpolation into HTML content or attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// GET /
pub async fn serve_home() -> Html<String> {
    page("Home", HOME_HTML)
}

/// GET /about
pub async fn serve_about() -> Html<String> {
    page("About", ABOUT_HTML)
}
