//! HTML views for the web tier.
//!
//! Plain rendering functions over `format!`; all user-supplied values go
//! through [`escape`] before they reach the page.

use crate::models::{NationalParkDto, TrailDto};

/// Minimal HTML entity escaping for text nodes and attribute values.
pub fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn nav(user: Option<&(String, String)>) -> String {
    match user {
        Some((username, _role)) => format!(
            r#"<nav><a href="/">Home</a> <span>Hello, {}</span> <a href="/logout">Logout</a></nav>"#,
            escape(username)
        ),
        None => {
            r#"<nav><a href="/">Home</a> <a href="/login">Login</a> <a href="/register">Register</a></nav>"#
                .to_string()
        }
    }
}

fn layout(title: &str, user: Option<&(String, String)>, alert: Option<&str>, body: &str) -> String {
    let alert_html = match alert {
        Some(text) => format!(r#"<p class="alert">{}</p>"#, escape(text)),
        None => String::new(),
    };
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>{title} - Parky</title></head>
<body>
{nav}
{alert}
{body}
</body>
</html>"#,
        title = escape(title),
        nav = nav(user),
        alert = alert_html,
        body = body
    )
}

pub fn index_page(
    user: Option<&(String, String)>,
    alert: Option<&str>,
    parks: &[NationalParkDto],
    trails: &[TrailDto],
) -> String {
    let mut body = String::from("<h1>National Parks</h1>\n<table><tr><th>Name</th><th>State</th><th>Established</th></tr>\n");
    for park in parks {
        body.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape(&park.name),
            escape(&park.state),
            park.established.date()
        ));
    }
    body.push_str("</table>\n<h1>Trails</h1>\n<table><tr><th>Name</th><th>Park</th><th>Distance</th><th>Elevation</th><th>Difficulty</th></tr>\n");
    for trail in trails {
        body.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{} km</td><td>{} m</td><td>{}</td></tr>\n",
            escape(&trail.name),
            escape(&trail.national_park_name),
            trail.distance,
            trail.elevation,
            trail.difficulty
        ));
    }
    body.push_str("</table>");
    layout("Home", user, alert, &body)
}

pub fn login_page(alert: Option<&str>) -> String {
    let body = r#"<h1>Login</h1>
<form method="post" action="/login">
<label>Username <input type="text" name="username" required></label>
<label>Password <input type="password" name="password" required></label>
<button type="submit">Login</button>
</form>"#;
    layout("Login", None, alert, body)
}

pub fn register_page(alert: Option<&str>) -> String {
    let body = r#"<h1>Register</h1>
<form method="post" action="/register">
<label>Username <input type="text" name="username" required></label>
<label>Password <input type="password" name="password" required></label>
<button type="submit">Register</button>
</form>"#;
    layout("Register", None, alert, body)
}

pub fn access_denied_page(user: Option<&(String, String)>) -> String {
    layout(
        "Access Denied",
        user,
        None,
        "<h1>Access Denied</h1><p>You do not have permission to view this resource.</p>",
    )
}

pub fn not_found_page(user: Option<&(String, String)>) -> String {
    layout(
        "Not Found",
        user,
        None,
        "<h1>Not Found</h1><p>The page you requested does not exist.</p>",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::models::Difficulty;

    fn sample_park() -> NationalParkDto {
        NationalParkDto {
            id: 1,
            name: "Yellow<stone>".to_string(),
            state: "Wyoming".to_string(),
            created: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().into(),
            established: NaiveDate::from_ymd_opt(1872, 3, 1).unwrap().into(),
            picture: None,
        }
    }

    #[test]
    fn park_names_are_escaped() {
        let html = index_page(None, None, &[sample_park()], &[]);
        assert!(html.contains("Yellow&lt;stone&gt;"));
        assert!(!html.contains("Yellow<stone>"));
    }

    #[test]
    fn trails_render_with_park_name() {
        let trail = TrailDto {
            id: 1,
            name: "Fairy Falls".to_string(),
            distance: 10.5,
            elevation: 120.0,
            difficulty: Difficulty::Moderate,
            date_created: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().into(),
            national_park_id: 1,
            national_park_name: "Yellowstone".to_string(),
        };
        let html = index_page(None, None, &[], &[trail]);
        assert!(html.contains("Fairy Falls"));
        assert!(html.contains("Yellowstone"));
        assert!(html.contains("moderate"));
    }

    #[test]
    fn logged_in_nav_greets_the_user() {
        let user = ("ranger_rick".to_string(), "admin".to_string());
        let html = index_page(Some(&user), None, &[], &[]);
        assert!(html.contains("Hello, ranger_rick"));
        assert!(html.contains("/logout"));
    }
}
