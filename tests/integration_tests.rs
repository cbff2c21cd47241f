//! Integration tests using mock HTTP server
//!
//! Tests the full end-to-end flow: service config → auth → pager → HTTP
//! requests → typed resources

use codeengine_client::auth::AuthConfig;
use codeengine_client::models::{App, JobRunPrototype, SecretPrototype};
use codeengine_client::types::{BackoffType, JsonObject};
use codeengine_client::{
    fetch_fn, CodeEngineService, Cursor, Error, ListOptions, Page, Pager, ServiceConfig,
};
use futures::TryStreamExt;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_string_contains, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PROJECT_ID: &str = "4e49b3e0-27a8-48d2-a784-c7ee48bb863b";

fn service_for(server: &MockServer, auth: AuthConfig, retries: u32) -> CodeEngineService {
    let config = ServiceConfig::builder()
        .service_url(format!("{}/v2", server.uri()))
        .auth(auth)
        .max_retries(retries)
        .backoff(
            BackoffType::Constant,
            Duration::from_millis(10),
            Duration::from_millis(50),
        )
        .no_rate_limit()
        .build()
        .unwrap();
    CodeEngineService::new(config).unwrap()
}

fn apps_path() -> String {
    format!("/v2/projects/{PROJECT_ID}/apps")
}

async fn mount_app_pages(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(apps_path()))
        .and(query_param_is_missing("start"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "apps": [{"name": "a"}, {"name": "b"}],
            "limit": 2,
            "first": {"href": format!("{}/v2/projects/{PROJECT_ID}/apps?limit=2", server.uri())},
            "next": {
                "href": format!("{}/v2/projects/{PROJECT_ID}/apps?limit=2&start=page-2", server.uri()),
                "start": "page-2"
            }
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(apps_path()))
        .and(query_param("start", "page-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "apps": [{"name": "c"}],
            "limit": 2,
            "first": {"href": format!("{}/v2/projects/{PROJECT_ID}/apps?limit=2", server.uri())}
        })))
        .mount(server)
        .await;
}

fn names(apps: &[App]) -> Vec<&str> {
    apps.iter().map(|a| a.name.as_str()).collect()
}

// ============================================================================
// Pager over the live wire format
// ============================================================================

#[tokio::test]
async fn test_pager_page_by_page() {
    let server = MockServer::start().await;
    mount_app_pages(&server).await;

    let service = service_for(&server, AuthConfig::None, 0);
    let mut pager = service
        .apps_pager(PROJECT_ID, &ListOptions::new().limit(2))
        .unwrap();

    assert!(pager.has_next());
    assert_eq!(pager.cursor(), None);

    let first = pager.next_page().await.unwrap();
    assert_eq!(names(&first), vec!["a", "b"]);
    assert!(pager.has_next());
    assert_eq!(pager.cursor(), Some(&Cursor::new("page-2")));

    let second = pager.next_page().await.unwrap();
    assert_eq!(names(&second), vec!["c"]);
    assert!(!pager.has_next());

    assert!(pager.next_page().await.unwrap().is_empty());
    assert_eq!(pager.pages_fetched(), 2);
    assert_eq!(pager.items_fetched(), 3);
}

#[tokio::test]
async fn test_pager_item_stream() {
    let server = MockServer::start().await;
    mount_app_pages(&server).await;

    let service = service_for(&server, AuthConfig::None, 0);
    let apps: Vec<App> = service
        .apps_pager(PROJECT_ID, &ListOptions::new().limit(2))
        .unwrap()
        .into_item_stream()
        .try_collect()
        .await
        .unwrap();

    assert_eq!(names(&apps), vec!["a", "b", "c"]);
}

#[tokio::test]
async fn test_resume_from_saved_cursor() {
    let server = MockServer::start().await;
    mount_app_pages(&server).await;

    let service = service_for(&server, AuthConfig::None, 0);
    let first = service
        .list_apps(PROJECT_ID, &ListOptions::new().limit(2))
        .await
        .unwrap();
    let cursor = first.next.clone().unwrap();

    let second = service
        .list_apps(
            PROJECT_ID,
            &ListOptions::new().limit(2).start(cursor.into_inner()),
        )
        .await
        .unwrap();

    assert_eq!(names(&second.items), vec!["c"]);
    assert!(!second.has_more());
}

#[tokio::test]
async fn test_failed_page_is_retried_with_same_cursor() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(apps_path()))
        .and(query_param_is_missing("start"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "apps": [{"name": "a"}],
            "next": {"start": "page-2"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    // The second page fails once with a non-retryable status, then succeeds
    Mock::given(method("GET"))
        .and(path(apps_path()))
        .and(query_param("start", "page-2"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "errors": [{"code": "conflict", "message": "try again"}]
        })))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(apps_path()))
        .and(query_param("start", "page-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "apps": [{"name": "b"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server, AuthConfig::None, 0);
    let mut pager = service.apps_pager(PROJECT_ID, &ListOptions::new()).unwrap();

    assert_eq!(names(&pager.next_page().await.unwrap()), vec!["a"]);

    let err = pager.next_page().await.unwrap_err();
    assert_eq!(err.status(), Some(409));
    assert_eq!(err.api_message().as_deref(), Some("try again"));
    assert!(pager.has_next());
    assert_eq!(pager.cursor(), Some(&Cursor::new("page-2")));

    assert_eq!(names(&pager.next_page().await.unwrap()), vec!["b"]);
    assert!(!pager.has_next());
}

#[tokio::test]
async fn test_server_errors_are_retried_by_transport() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(apps_path()))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(apps_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"apps": []})))
        .mount(&server)
        .await;

    let service = service_for(&server, AuthConfig::None, 2);
    let mut pager = service.apps_pager(PROJECT_ID, &ListOptions::new()).unwrap();

    let items = pager.all_pages().await.unwrap();
    assert!(items.is_empty());
    assert!(!pager.has_next());
    assert_eq!(pager.pages_fetched(), 1);
}

// ============================================================================
// IAM authentication
// ============================================================================

#[tokio::test]
async fn test_iam_token_is_fetched_once_and_reused() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/identity/token"))
        .and(body_string_contains("apikey=my-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "iam-access-token",
            "token_type": "Bearer",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(apps_path()))
        .and(header("Authorization", "Bearer iam-access-token"))
        .and(query_param_is_missing("start"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "apps": [{"name": "a"}],
            "next": {"start": "2"}
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(apps_path()))
        .and(header("Authorization", "Bearer iam-access-token"))
        .and(query_param("start", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "apps": [{"name": "b"}]
        })))
        .mount(&server)
        .await;

    let auth = AuthConfig::iam_api_key("my-api-key")
        .with_token_url(format!("{}/identity/token", server.uri()));
    let service = service_for(&server, auth, 0);

    let apps = service
        .apps_pager(PROJECT_ID, &ListOptions::new())
        .unwrap()
        .all_pages()
        .await
        .unwrap();

    assert_eq!(names(&apps), vec!["a", "b"]);
}

// ============================================================================
// Mutations
// ============================================================================

#[tokio::test]
async fn test_job_run_lifecycle() {
    let server = MockServer::start().await;
    let runs = format!("/v2/projects/{PROJECT_ID}/job_runs");

    Mock::given(method("POST"))
        .and(path(runs.as_str()))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "name": "nightly-abc12",
            "job_name": "nightly",
            "status": "pending"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("{runs}/nightly-abc12")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "nightly-abc12",
            "job_name": "nightly",
            "status": "completed",
            "status_details": {"succeeded": 1}
        })))
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path(format!("{runs}/nightly-abc12")))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server, AuthConfig::bearer("t"), 0);

    let run = service
        .create_job_run(PROJECT_ID, &JobRunPrototype::for_job("nightly"))
        .await
        .unwrap();
    assert_eq!(run.status.as_deref(), Some("pending"));

    let run = service.get_job_run(PROJECT_ID, &run.name).await.unwrap();
    assert_eq!(run.status.as_deref(), Some("completed"));
    assert_eq!(run.extra["status_details"]["succeeded"], json!(1));

    service.delete_job_run(PROJECT_ID, &run.name).await.unwrap();
}

#[tokio::test]
async fn test_update_app_precondition_failed() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path(format!("{}/my-app", apps_path())))
        .and(header("If-Match", "stale"))
        .respond_with(ResponseTemplate::new(412).set_body_json(json!({
            "errors": [{"code": "precondition_failed", "message": "entity tag does not match"}],
            "trace": "abc"
        })))
        .mount(&server)
        .await;

    let service = service_for(&server, AuthConfig::None, 3);
    let mut patch = JsonObject::new();
    patch.insert("image_port".to_string(), json!(3000));

    let err = service
        .update_app(PROJECT_ID, "my-app", &patch, "stale")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 412, .. }));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_create_secret_validation() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let service = service_for(&server, AuthConfig::None, 0);
    let prototype = SecretPrototype {
        name: "registry".to_string(),
        ..Default::default()
    };

    let err = service
        .create_secret(PROJECT_ID, &prototype)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::MissingParameter { ref name } if name == "format"));
}

// ============================================================================
// Custom fetchers
// ============================================================================

#[tokio::test]
async fn test_pager_over_custom_fetcher() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let mut pager = Pager::new(fetch_fn(move |cursor: Option<Cursor>| {
        let counter = Arc::clone(&counter);
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            match cursor.as_ref().map(Cursor::as_str) {
                None => Ok(Page::more(vec!["a", "b"], "1")),
                Some("1") => Ok(Page::last(vec!["c"])),
                Some(other) => Err(Error::protocol(format!("unknown cursor {other}"))),
            }
        }
    }));

    let items = pager.all_pages().await.unwrap();

    assert_eq!(items, vec!["a", "b", "c"]);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert!(!pager.has_next());
}
