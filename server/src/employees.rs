//! HTTP surface for employee records.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    routing::{get, post},
};
use entity::employees::Model as Employee;
use platform_api::{ApiError, ApiResult};
use platform_db::EmployeeInput;
use products_hr::sample_employees;
use serde::{Deserialize, Serialize};

use crate::http::AppState;

const DEFAULT_PAGE: i64 = 1;
const DEFAULT_PAGE_SIZE: i64 = 10;
const SEED_SEGMENT: &str = "random";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/employees", post(create_employee).get(fetch_employees))
        .route(
            "/employees/random",
            post(seed_random_employees)
                .get(reject_seed_segment)
                .put(update_seed_segment)
                .delete(reject_seed_segment),
        )
        .route(
            "/employees/{id}",
            get(fetch_employee)
                .put(update_employee)
                .delete(delete_employee),
        )
}

#[derive(Debug, Default, Deserialize)]
struct PageParams {
    page: Option<String>,
    page_size: Option<String>,
}

impl PageParams {
    /// Anything that is not a positive integer falls back to the default.
    fn resolve(&self) -> (i64, i64) {
        (
            positive_or(self.page.as_deref(), DEFAULT_PAGE),
            positive_or(self.page_size.as_deref(), DEFAULT_PAGE_SIZE),
        )
    }
}

fn positive_or(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(default)
}

#[derive(Serialize)]
struct SeedResponse {
    message: &'static str,
}

fn parse_id(raw: &str) -> ApiResult<i64> {
    raw.parse::<i64>()
        .map_err(|err| ApiError::bad_request(format!("invalid employee id {raw:?}: {err}")))
}

/// The seed route shadows `/employees/{id}` for this segment, so every other
/// method answers as if "random" had been parsed as an id.
fn seed_segment_as_id() -> ApiError {
    match parse_id(SEED_SEGMENT) {
        Err(err) => err,
        Ok(_) => ApiError::bad_request(format!("invalid employee id {SEED_SEGMENT:?}")),
    }
}

async fn reject_seed_segment() -> ApiError {
    seed_segment_as_id()
}

async fn update_seed_segment(payload: Result<Json<EmployeeInput>, JsonRejection>) -> ApiError {
    match payload {
        Err(rejection) => rejected_body(rejection),
        Ok(_) => seed_segment_as_id(),
    }
}

fn rejected_body(rejection: JsonRejection) -> ApiError {
    ApiError::unprocessable(rejection.body_text())
}

async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Employee>)> {
    let Json(input) = payload.map_err(rejected_body)?;
    let employee = state.employees.create_employee(input).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

async fn fetch_employee(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<Employee>> {
    let id = parse_id(&raw_id)?;
    let employee = state.employees.get_employee(id).await?;
    if let Some(hook) = &state.on_fetch {
        hook(employee.id);
    }
    Ok(Json(employee))
}

async fn fetch_employees(
    State(state): State<AppState>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> ApiResult<Json<Vec<Employee>>> {
    let params = params.map(|Query(params)| params).unwrap_or_default();
    let (page, page_size) = params.resolve();
    let employees = state.employees.get_employees(page, page_size).await?;
    Ok(Json(employees))
}

async fn update_employee(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<EmployeeInput>, JsonRejection>,
) -> ApiResult<StatusCode> {
    // Body problems win over a bad path id.
    let Json(input) = payload.map_err(rejected_body)?;
    let id = parse_id(&raw_id)?;
    state.employees.update_employee(id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_employee(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&raw_id)?;
    state.employees.delete_employee(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn seed_random_employees(
    State(state): State<AppState>,
) -> ApiResult<(StatusCode, Json<SeedResponse>)> {
    state
        .employees
        .create_employees(sample_employees())
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(SeedResponse {
            message: "Random employees created",
        }),
    ))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        body::Body,
        http::{Method, Request, header},
    };
    use http_body_util::BodyExt;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::Database;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::{config::AppConfig, http::build_router};

    async fn state() -> AppState {
        let pool = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&pool, None).await.unwrap();
        AppState::new(pool, Arc::new(AppConfig::default()))
    }

    async fn app() -> Router {
        build_router(state().await)
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<String>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body)),
            None => builder.body(Body::empty()),
        }
        .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn create(app: &Router, name: &str) -> Value {
        let body = json!({ "name": name, "position": "Engineer", "salary": 1000.5 });
        let (status, created) =
            send(app, Method::POST, "/employees", Some(body.to_string())).await;
        assert_eq!(status, StatusCode::CREATED);
        created
    }

    #[tokio::test]
    async fn create_then_fetch_round_trips() {
        let app = app().await;
        let created = create(&app, "John Doe").await;
        let id = created["id"].as_i64().unwrap();
        assert!(id > 0);
        assert_eq!(created["name"], "John Doe");
        assert_eq!(created["position"], "Engineer");
        assert_eq!(created["salary"], 1000.5);
        assert!(created["createdAt"].is_string());
        assert!(created["updatedAt"].is_string());
        assert!(created.get("deletedAt").is_none());

        let (status, fetched) = send(&app, Method::GET, &format!("/employees/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn malformed_create_body_is_unprocessable() {
        let app = app().await;
        let (status, body) =
            send(&app, Method::POST, "/employees", Some("{not json".into())).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].is_string());

        let wrong_type = json!({ "name": 12, "salary": "lots" }).to_string();
        let (status, _) = send(&app, Method::POST, "/employees", Some(wrong_type)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn fetch_rejects_bad_and_unknown_ids() {
        let app = app().await;
        let (status, body) = send(&app, Method::GET, "/employees/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("abc"));

        let (status, body) = send(&app, Method::GET, "/employees/987654321", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "resource not found");
    }

    #[tokio::test]
    async fn fetch_invokes_hook_with_resolved_id() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorder = seen.clone();
        let state = state().await.with_fetch_hook(Arc::new(move |id: i64| {
            recorder.lock().unwrap().push(id);
        }));
        let app = build_router(state);
        let id = create(&app, "Traced").await["id"].as_i64().unwrap();

        send(&app, Method::GET, &format!("/employees/{id}"), None).await;
        send(&app, Method::GET, "/employees/424242", None).await;
        assert_eq!(*seen.lock().unwrap(), vec![id]);
    }

    #[tokio::test]
    async fn list_paginates() {
        let app = app().await;
        for name in ["a", "b", "c"] {
            create(&app, name).await;
        }
        let (status, page) = send(&app, Method::GET, "/employees?page=1&page_size=2", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(page.as_array().unwrap().len(), 2);

        let (_, page) = send(&app, Method::GET, "/employees?page=2&page_size=2", None).await;
        let rest = page.as_array().unwrap();
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0]["name"], "c");
    }

    #[tokio::test]
    async fn list_falls_back_to_default_pagination() {
        let app = app().await;
        send(&app, Method::POST, "/employees/random", None).await;

        for uri in [
            "/employees",
            "/employees?page=abc&page_size=xyz",
            "/employees?page=0&page_size=-5",
        ] {
            let (status, page) = send(&app, Method::GET, uri, None).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            let rows = page.as_array().unwrap();
            assert_eq!(rows.len(), 10, "{uri}");
            assert_eq!(rows[0]["name"], "Rahul Gupta");
        }
    }

    #[tokio::test]
    async fn list_survives_out_of_range_pagination() {
        let app = app().await;
        create(&app, "solo").await;

        let (status, page) = send(
            &app,
            Method::GET,
            "/employees?page=9223372036854775807&page_size=10",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(page.as_array().unwrap().is_empty());

        let (status, page) = send(
            &app,
            Method::GET,
            "/employees?page=1&page_size=9223372036854775807",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(page.as_array().unwrap().len(), 1);

        for uri in [
            "/employees?page=1&page_size=18446744073709551615",
            "/employees?page=18446744073709551615&page_size=10",
        ] {
            let (status, page) = send(&app, Method::GET, uri, None).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(page.as_array().unwrap().len(), 1, "{uri}");
        }
    }

    #[tokio::test]
    async fn seed_segment_is_a_bad_id_for_other_methods() {
        let app = app().await;
        for method in [Method::GET, Method::DELETE] {
            let (status, body) = send(&app, method.clone(), "/employees/random", None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{method}");
            assert!(body["error"].as_str().unwrap().contains("random"));
        }

        let valid = json!({ "id": 1, "name": "x" }).to_string();
        let (status, body) = send(&app, Method::PUT, "/employees/random", Some(valid)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());

        let (status, _) = send(
            &app,
            Method::PUT,
            "/employees/random",
            Some("{broken".into()),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn update_replaces_fields() {
        let app = app().await;
        let id = create(&app, "Before").await["id"].as_i64().unwrap();
        let body = json!({ "id": id, "name": "After", "position": "Lead", "salary": 2.5 });
        let (status, empty) = send(
            &app,
            Method::PUT,
            &format!("/employees/{id}"),
            Some(body.to_string()),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(empty, Value::Null);

        let (_, fetched) = send(&app, Method::GET, &format!("/employees/{id}"), None).await;
        assert_eq!(fetched["name"], "After");
        assert_eq!(fetched["position"], "Lead");
        assert_eq!(fetched["salary"], 2.5);
    }

    #[tokio::test]
    async fn update_failures_map_to_client_errors() {
        let app = app().await;
        let id = create(&app, "Subject").await["id"].as_i64().unwrap();

        let mismatched = json!({ "id": id + 1, "name": "x" }).to_string();
        let (status, body) = send(
            &app,
            Method::PUT,
            &format!("/employees/{id}"),
            Some(mismatched),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "id and payload don't match");

        let missing = json!({ "id": 5000, "name": "ghost" }).to_string();
        let (status, _) = send(&app, Method::PUT, "/employees/5000", Some(missing)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let valid = json!({ "id": id }).to_string();
        let (status, _) = send(&app, Method::PUT, "/employees/abc", Some(valid)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(
            &app,
            Method::PUT,
            "/employees/abc",
            Some("[broken".into()),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn delete_hides_record_and_is_idempotent() {
        let app = app().await;
        let id = create(&app, "Leaving").await["id"].as_i64().unwrap();
        let uri = format!("/employees/{id}");

        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(&app, Method::DELETE, "/employees/777777", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(&app, Method::DELETE, "/employees/nope", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn seeding_twice_appends_duplicates() {
        let app = app().await;
        let roster = sample_employees().len();
        for _ in 0..2 {
            let (status, body) = send(&app, Method::POST, "/employees/random", None).await;
            assert_eq!(status, StatusCode::CREATED);
            assert_eq!(body["message"], "Random employees created");
        }
        let (_, all) = send(&app, Method::GET, "/employees?page_size=1000", None).await;
        assert_eq!(all.as_array().unwrap().len(), 2 * roster);
    }

    #[test]
    fn page_params_resolve_defaults() {
        let params = PageParams {
            page: Some(" 3 ".into()),
            page_size: None,
        };
        assert_eq!(params.resolve(), (3, DEFAULT_PAGE_SIZE));
        assert_eq!(PageParams::default().resolve(), (DEFAULT_PAGE, DEFAULT_PAGE_SIZE));
    }
}
