//! Web tier handlers: session login against the API, and pages that
//! render what the API returns.

use actix_session::{Session, SessionInsertError};
use actix_web::{http::header, web, HttpResponse};
use log::{info, warn};
use serde::Deserialize;

use crate::models::{AuthResponse, NationalParkDto, TrailDto};
use crate::utils::mask_username;

use super::pages;
use super::{ApiClient, NATIONAL_PARK_API_PATH, SESSION_ROLE, SESSION_TOKEN, SESSION_USERNAME, TRAIL_API_PATH};

#[derive(Debug, Deserialize)]
pub struct CredentialsForm {
    pub username: String,
    pub password: String,
}

fn session_user(session: &Session) -> Option<(String, String)> {
    let username = session.get::<String>(SESSION_USERNAME).ok().flatten()?;
    let role = session
        .get::<String>(SESSION_ROLE)
        .ok()
        .flatten()
        .unwrap_or_default();
    Some((username, role))
}

fn store_session(session: &Session, auth: &AuthResponse) -> Result<(), SessionInsertError> {
    session.insert(SESSION_TOKEN, &auth.token)?;
    session.insert(SESSION_USERNAME, &auth.username)?;
    session.insert(SESSION_ROLE, auth.role.to_string())?;
    Ok(())
}

fn session_token(session: &Session) -> Option<String> {
    session
        .get::<String>(SESSION_TOKEN)
        .ok()
        .flatten()
        .filter(|t| !t.is_empty())
}

fn redirect_to(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

pub async fn index(client: web::Data<ApiClient>, session: Session) -> HttpResponse {
    let token = session_token(&session);
    let user = session_user(&session);

    let parks: Vec<NationalParkDto> = match client
        .get_all(NATIONAL_PARK_API_PATH, token.as_deref())
        .await
    {
        Ok(parks) => parks,
        Err(err) => {
            warn!("Failed to fetch parks from the API: {}", err);
            return html(pages::index_page(
                user.as_ref(),
                Some("The API is currently unavailable"),
                &[],
                &[],
            ));
        }
    };
    let trails: Vec<TrailDto> = client
        .get_all(TRAIL_API_PATH, token.as_deref())
        .await
        .unwrap_or_default();

    html(pages::index_page(user.as_ref(), None, &parks, &trails))
}

pub async fn login_form() -> HttpResponse {
    html(pages::login_page(None))
}

pub async fn login(
    client: web::Data<ApiClient>,
    session: Session,
    form: web::Form<CredentialsForm>,
) -> HttpResponse {
    match client.authenticate(&form.username, &form.password).await {
        Ok(Some(auth)) => match store_session(&session, &auth) {
            Ok(()) => {
                info!("User {} logged in", mask_username(&auth.username));
                redirect_to("/")
            }
            Err(err) => {
                warn!(
                    "Failed to store session for {}: {}",
                    mask_username(&auth.username),
                    err
                );
                html(pages::login_page(Some("Login failed, please try again")))
            }
        },
        Ok(None) => html(pages::login_page(Some("Username or password is incorrect"))),
        Err(err) => {
            warn!("Login request to the API failed: {}", err);
            html(pages::login_page(Some("The API is currently unavailable")))
        }
    }
}

pub async fn register_form() -> HttpResponse {
    html(pages::register_page(None))
}

pub async fn register(
    client: web::Data<ApiClient>,
    form: web::Form<CredentialsForm>,
) -> HttpResponse {
    match client.register(&form.username, &form.password).await {
        Ok(true) => {
            info!("User {} registered", mask_username(&form.username));
            redirect_to("/login")
        }
        Ok(false) => html(pages::register_page(Some(
            "Registration failed, the username may already be taken",
        ))),
        Err(err) => {
            warn!("Register request to the API failed: {}", err);
            html(pages::register_page(Some(
                "The API is currently unavailable",
            )))
        }
    }
}

pub async fn logout(session: Session) -> HttpResponse {
    session.purge();
    redirect_to("/")
}

pub async fn access_denied(session: Session) -> HttpResponse {
    let user = session_user(&session);
    HttpResponse::Forbidden()
        .content_type("text/html; charset=utf-8")
        .body(pages::access_denied_page(user.as_ref()))
}

pub async fn not_found(session: Session) -> HttpResponse {
    let user = session_user(&session);
    HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(pages::not_found_page(user.as_ref()))
}
