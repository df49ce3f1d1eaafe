//! Contract tests for the REST API, run against an in-memory SQLite
//! database behind a single-connection pool.

use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App};
use serde_json::json;

use parky::db::{self, DbPool};
use parky::models::{AuthResponse, ErrorResponse, NationalParkDto, NewUser, TrailDto, UserDto};
use parky::repositories::UserRepository;
use parky::routes;
use parky::services::auth_service;

fn test_pool() -> DbPool {
    db::build_pool(":memory:", 1).expect("in-memory pool")
}

fn seed_user(pool: &DbPool, username: &str, password: &str, role: &str) -> parky::models::User {
    let mut conn = pool.get().unwrap();
    UserRepository::insert(
        &mut conn,
        NewUser {
            username: username.to_string(),
            password_hash: auth_service::hash_password(password).unwrap(),
            role: role.to_string(),
        },
    )
    .unwrap()
}

fn bearer(user: &parky::models::User) -> (header::HeaderName, String) {
    let token = auth_service::generate_token(user).unwrap();
    (header::AUTHORIZATION, format!("Bearer {}", token))
}

macro_rules! test_app {
    ($pool:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($pool.clone()))
                .configure(routes::configure_routes),
        )
        .await
    };
}

fn park_body(name: &str) -> serde_json::Value {
    json!({
        "name": name,
        "state": "Wyoming",
        "established": "1872-03-01T00:00:00"
    })
}

fn trail_body(name: &str, park_id: i32) -> serde_json::Value {
    json!({
        "name": name,
        "distance": 10.5,
        "elevation": 120.0,
        "difficulty": "moderate",
        "national_park_id": park_id
    })
}

macro_rules! create_park {
    ($app:expr, $name:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/v1/nationalparks")
            .set_json(park_body($name))
            .to_request();
        let resp = test::call_service($app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let park: NationalParkDto = test::read_body_json(resp).await;
        park
    }};
}

#[actix_web::test]
async fn listing_parks_starts_empty() {
    let pool = test_pool();
    let app = test_app!(pool);

    let req = test::TestRequest::get()
        .uri("/api/v1/nationalparks")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let parks: Vec<NationalParkDto> = test::read_body_json(resp).await;
    assert!(parks.is_empty());
}

#[actix_web::test]
async fn creating_a_park_returns_location_header() {
    let pool = test_pool();
    let app = test_app!(pool);

    let req = test::TestRequest::post()
        .uri("/api/v1/nationalparks")
        .set_json(park_body("Yellowstone"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let location = resp
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .expect("location header")
        .to_string();
    let park: NationalParkDto = test::read_body_json(resp).await;
    assert_eq!(location, format!("/api/v1/nationalparks/{}", park.id));
    assert_eq!(park.name, "Yellowstone");
}

#[actix_web::test]
async fn duplicate_park_name_is_rejected() {
    let pool = test_pool();
    let app = test_app!(pool);
    create_park!(&app, "Yellowstone");

    let req = test::TestRequest::post()
        .uri("/api/v1/nationalparks")
        .set_json(park_body("Yellowstone"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: ErrorResponse = test::read_body_json(resp).await;
    assert!(!body.success);
    assert_eq!(body.message, "National Park already exists");
}

#[actix_web::test]
async fn invalid_park_payload_fails_validation() {
    let pool = test_pool();
    let app = test_app!(pool);

    let req = test::TestRequest::post()
        .uri("/api/v1/nationalparks")
        .set_json(json!({
            "name": "",
            "state": "Wyoming",
            "established": "1872-03-01T00:00:00"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: ErrorResponse = test::read_body_json(resp).await;
    assert!(body.errors.unwrap_or_default().iter().any(|e| e.contains("Name")));
}

#[actix_web::test]
async fn park_by_id_requires_a_token() {
    let pool = test_pool();
    let app = test_app!(pool);
    let park = create_park!(&app, "Yellowstone");

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/nationalparks/{}", park.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let user = seed_user(&pool, "hiker", "hunter2", "user");
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/nationalparks/{}", park.id))
        .insert_header(bearer(&user))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn malformed_token_is_rejected() {
    let pool = test_pool();
    let app = test_app!(pool);

    let req = test::TestRequest::get()
        .uri("/api/v1/nationalparks/1")
        .insert_header((header::AUTHORIZATION, "Bearer not-a-jwt"))
        .to_request();

    // The middleware rejects the token at the service level; actix
    // renders that error as a 401 response.
    let err = test::try_call_service(&app, req)
        .await
        .err()
        .expect("bad token should be rejected");
    assert_eq!(err.error_response().status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn fetching_an_unknown_park_returns_not_found() {
    let pool = test_pool();
    let app = test_app!(pool);
    let user = seed_user(&pool, "hiker", "hunter2", "user");

    let req = test::TestRequest::get()
        .uri("/api/v1/nationalparks/42")
        .insert_header(bearer(&user))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn updating_an_unknown_park_returns_not_found() {
    let pool = test_pool();
    let app = test_app!(pool);

    let req = test::TestRequest::patch()
        .uri("/api/v1/nationalparks/42")
        .set_json(json!({
            "id": 42,
            "name": "Nowhere",
            "state": "Nowhere",
            "established": "1900-01-01T00:00:00"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn update_with_mismatched_id_is_a_bad_request() {
    let pool = test_pool();
    let app = test_app!(pool);
    let park = create_park!(&app, "Yellowstone");

    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/nationalparks/{}", park.id))
        .set_json(json!({
            "id": park.id + 1,
            "name": "Yellowstone",
            "state": "Wyoming",
            "established": "1872-03-01T00:00:00"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn updating_a_park_returns_no_content() {
    let pool = test_pool();
    let app = test_app!(pool);
    let park = create_park!(&app, "Yellowstone");

    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/nationalparks/{}", park.id))
        .set_json(json!({
            "id": park.id,
            "name": "Yellowstone NP",
            "state": "Wyoming",
            "established": "1872-03-01T00:00:00"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let user = seed_user(&pool, "hiker", "hunter2", "user");
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/nationalparks/{}", park.id))
        .insert_header(bearer(&user))
        .to_request();
    let updated: NationalParkDto = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated.name, "Yellowstone NP");
}

#[actix_web::test]
async fn deleting_an_unknown_park_returns_not_found() {
    let pool = test_pool();
    let app = test_app!(pool);

    let req = test::TestRequest::delete()
        .uri("/api/v1/nationalparks/42")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn deleting_a_park_with_trails_conflicts() {
    let pool = test_pool();
    let app = test_app!(pool);
    let park = create_park!(&app, "Yellowstone");

    let req = test::TestRequest::post()
        .uri("/api/v1/trails")
        .set_json(trail_body("Fairy Falls", park.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/nationalparks/{}", park.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[actix_web::test]
async fn deleting_a_park_returns_no_content() {
    let pool = test_pool();
    let app = test_app!(pool);
    let park = create_park!(&app, "Yellowstone");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/nationalparks/{}", park.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[actix_web::test]
async fn v2_returns_the_first_park_only() {
    let pool = test_pool();
    let app = test_app!(pool);
    create_park!(&app, "Acadia");
    create_park!(&app, "Yellowstone");

    let req = test::TestRequest::get()
        .uri("/api/v2/nationalparks")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // Single object, not a list; first in name order
    let park: NationalParkDto = test::read_body_json(resp).await;
    assert_eq!(park.name, "Acadia");
}

#[actix_web::test]
async fn v2_with_no_parks_returns_not_found() {
    let pool = test_pool();
    let app = test_app!(pool);

    let req = test::TestRequest::get()
        .uri("/api/v2/nationalparks")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn creating_a_trail_in_an_unknown_park_is_a_bad_request() {
    let pool = test_pool();
    let app = test_app!(pool);

    let req = test::TestRequest::post()
        .uri("/api/v1/trails")
        .set_json(trail_body("Fairy Falls", 42))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn duplicate_trail_name_is_rejected() {
    let pool = test_pool();
    let app = test_app!(pool);
    let park = create_park!(&app, "Yellowstone");

    let req = test::TestRequest::post()
        .uri("/api/v1/trails")
        .set_json(trail_body("Fairy Falls", park.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/v1/trails")
        .set_json(trail_body("Fairy Falls", park.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn trail_by_id_requires_the_admin_role() {
    let pool = test_pool();
    let app = test_app!(pool);
    let park = create_park!(&app, "Yellowstone");

    let req = test::TestRequest::post()
        .uri("/api/v1/trails")
        .set_json(trail_body("Fairy Falls", park.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let trail: TrailDto = test::read_body_json(resp).await;

    // No token at all
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/trails/{}", trail.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // Authenticated but not an admin
    let hiker = seed_user(&pool, "hiker", "hunter2", "user");
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/trails/{}", trail.id))
        .insert_header(bearer(&hiker))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // Admin sees the trail with the park name joined in
    let ranger = seed_user(&pool, "ranger", "hunter2", "admin");
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/trails/{}", trail.id))
        .insert_header(bearer(&ranger))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: TrailDto = test::read_body_json(resp).await;
    assert_eq!(fetched.national_park_name, "Yellowstone");
}

#[actix_web::test]
async fn trails_in_an_unknown_park_return_not_found() {
    let pool = test_pool();
    let app = test_app!(pool);

    let req = test::TestRequest::get()
        .uri("/api/v1/trails/nationalpark/42")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn trails_are_filtered_by_park() {
    let pool = test_pool();
    let app = test_app!(pool);
    let yellowstone = create_park!(&app, "Yellowstone");
    let acadia = create_park!(&app, "Acadia");

    for (name, park_id) in [
        ("Fairy Falls", yellowstone.id),
        ("Precipice", acadia.id),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/v1/trails")
            .set_json(trail_body(name, park_id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/trails/nationalpark/{}", yellowstone.id))
        .to_request();
    let trails: Vec<TrailDto> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(trails.len(), 1);
    assert_eq!(trails[0].name, "Fairy Falls");
}

#[actix_web::test]
async fn updating_an_unknown_trail_returns_not_found() {
    let pool = test_pool();
    let app = test_app!(pool);
    let park = create_park!(&app, "Yellowstone");

    let req = test::TestRequest::patch()
        .uri("/api/v1/trails/42")
        .set_json(json!({
            "id": 42,
            "name": "Ghost Trail",
            "distance": 1.0,
            "elevation": 1.0,
            "difficulty": "easy",
            "national_park_id": park.id
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn deleting_an_unknown_trail_returns_not_found() {
    let pool = test_pool();
    let app = test_app!(pool);

    let req = test::TestRequest::delete().uri("/api/v1/trails/42").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn registration_issues_the_admin_role() {
    let pool = test_pool();
    let app = test_app!(pool);

    let req = test::TestRequest::post()
        .uri("/api/v1/users")
        .set_json(json!({ "username": "ranger_rick", "password": "hunter2" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let user: UserDto = test::read_body_json(resp).await;
    assert_eq!(user.username, "ranger_rick");
    assert!(user.role.is_admin());
}

#[actix_web::test]
async fn duplicate_username_is_a_bad_request() {
    let pool = test_pool();
    let app = test_app!(pool);
    seed_user(&pool, "ranger_rick", "hunter2", "admin");

    let req = test::TestRequest::post()
        .uri("/api/v1/users")
        .set_json(json!({ "username": "ranger_rick", "password": "hunter2" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.message, "Username already exists");
}

#[actix_web::test]
async fn authentication_returns_a_signed_token() {
    let pool = test_pool();
    let app = test_app!(pool);
    seed_user(&pool, "ranger_rick", "hunter2", "admin");

    let req = test::TestRequest::post()
        .uri("/api/v1/users/authenticate")
        .set_json(json!({ "username": "ranger_rick", "password": "hunter2" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let auth: AuthResponse = test::read_body_json(resp).await;
    assert!(!auth.token.is_empty());
    assert_eq!(auth.username, "ranger_rick");

    // The token decodes with the configured secret and carries the role
    let claims = auth_service::decode_token(&auth.token).unwrap();
    assert_eq!(claims.username, "ranger_rick");
    assert!(claims.is_admin());
}

#[actix_web::test]
async fn wrong_credentials_are_a_bad_request() {
    let pool = test_pool();
    let app = test_app!(pool);
    seed_user(&pool, "ranger_rick", "hunter2", "admin");

    let req = test::TestRequest::post()
        .uri("/api/v1/users/authenticate")
        .set_json(json!({ "username": "ranger_rick", "password": "wrong" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.message, "Username or password is incorrect");
}

#[actix_web::test]
async fn update_without_a_picture_clears_the_stored_one() {
    let pool = test_pool();
    let app = test_app!(pool);

    let mut body = park_body("Yellowstone");
    body["picture"] = json!([1, 2, 3]);
    let req = test::TestRequest::post()
        .uri("/api/v1/nationalparks")
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let park: NationalParkDto = test::read_body_json(resp).await;
    assert_eq!(park.picture.as_deref(), Some(&[1u8, 2, 3][..]));

    // PATCH carries the whole record; an absent picture means null
    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/nationalparks/{}", park.id))
        .set_json(json!({
            "id": park.id,
            "name": "Yellowstone",
            "state": "Wyoming",
            "established": "1872-03-01T00:00:00"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let user = seed_user(&pool, "hiker", "hunter2", "user");
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/nationalparks/{}", park.id))
        .insert_header(bearer(&user))
        .to_request();
    let updated: NationalParkDto = test::call_and_read_body_json(&app, req).await;
    assert!(updated.picture.is_none());
}

#[actix_web::test]
async fn registration_accepts_multibyte_usernames() {
    let pool = test_pool();
    let app = test_app!(pool);

    let req = test::TestRequest::post()
        .uri("/api/v1/users")
        .set_json(json!({ "username": "abé", "password": "hunter2" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let user: UserDto = test::read_body_json(resp).await;
    assert_eq!(user.username, "abé");
}

#[actix_web::test]
async fn openapi_document_is_served() {
    let pool = test_pool();
    let app = test_app!(pool);

    let req = test::TestRequest::get()
        .uri("/api-docs/openapi.json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let doc: serde_json::Value = test::read_body_json(resp).await;
    assert!(doc["paths"]["/api/v1/nationalparks"].is_object());
    assert!(doc["paths"]["/api/v1/users/authenticate"].is_object());
}

#[actix_web::test]
async fn health_check_reports_ok() {
    let pool = test_pool();
    let app = test_app!(pool);

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
