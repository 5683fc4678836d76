use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use folio::{Config, Database};
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_app() -> Router {
    use rand::Rng;
    let name = format!("api_test_db_{}", rand::thread_rng().gen::<u32>());
    let db = Database::open_memory(&name).expect("Failed to create test database");
    db.migrate().expect("Failed to run migrations");
    folio::web::app(Config::default(), db)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn blog_body(title: &str) -> Value {
    json!({
        "title": title,
        "excerpt": "A short teaser",
        "content": "Some words about the post",
        "tags": ["rust"],
    })
}

#[tokio::test]
async fn test_health() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["site"], "Kelvin Ndoma");
}

#[tokio::test]
async fn test_blog_lifecycle() {
    let app = test_app();

    let (status, created) =
        send(&app, Method::POST, "/api/blogs", Some(blog_body("Hello World"))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["slug"], "hello-world");
    assert_eq!(created["readTime"], 1);
    assert_eq!(created["author"], "Kelvin Ndoma");
    assert_eq!(created["published"], false);
    let id = created["_id"].as_str().unwrap().to_string();

    let (status, by_slug) = send(&app, Method::GET, "/api/blogs/hello-world", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_slug["_id"], id.as_str());
    assert_eq!(by_slug["content"], "Some words about the post");

    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/api/blogs/{}", id),
        Some(json!({ "published": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["published"], true);
    assert_eq!(updated["slug"], "hello-world");

    let (status, body) = send(&app, Method::DELETE, &format!("/api/blogs/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Blog deleted successfully");

    let (status, body) = send(&app, Method::GET, "/api/blogs/hello-world", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Blog not found");
}

#[tokio::test]
async fn test_blog_list_omits_content() {
    let app = test_app();
    for title in ["One", "Two", "Three"] {
        send(&app, Method::POST, "/api/blogs", Some(blog_body(title))).await;
    }

    let (status, body) = send(&app, Method::GET, "/api/blogs?limit=2&page=1", None).await;
    assert_eq!(status, StatusCode::OK);

    let blogs = body["blogs"].as_array().unwrap();
    assert_eq!(blogs.len(), 2);
    assert_eq!(blogs[0]["title"], "Three");
    assert!(blogs.iter().all(|b| b.get("content").is_none()));
    assert_eq!(
        body["pagination"],
        json!({ "page": 1, "limit": 2, "total": 3, "pages": 2 })
    );
}

#[tokio::test]
async fn test_blog_list_query_handling() {
    let app = test_app();
    let mut live = blog_body("Live");
    live["published"] = json!(true);
    send(&app, Method::POST, "/api/blogs", Some(live)).await;
    send(&app, Method::POST, "/api/blogs", Some(blog_body("Draft"))).await;

    let (_, body) = send(&app, Method::GET, "/api/blogs?published=true", None).await;
    assert_eq!(body["pagination"]["total"], 1);
    assert_eq!(body["blogs"][0]["slug"], "live");

    // unparseable values fall back to the defaults
    let (status, body) = send(&app, Method::GET, "/api/blogs?limit=abc&page=0", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["pagination"]["limit"], 10);

    let (_, body) = send(&app, Method::GET, "/api/blogs?limit=5000", None).await;
    assert_eq!(body["pagination"]["limit"], 100);

    let (status, body) = send(&app, Method::GET, "/api/blogs?page=-1", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_blog_validation_errors() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/blogs",
        Some(json!({ "excerpt": "x", "content": "y" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Please provide a title");

    send(&app, Method::POST, "/api/blogs", Some(blog_body("Hello World"))).await;
    let (status, body) =
        send(&app, Method::POST, "/api/blogs", Some(blog_body("Hello World"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "A blog with this title already exists");

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/blogs/hello-world",
        Some(json!({ "title": null })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_malformed_body() {
    let app = test_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/blogs")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "Invalid request body");
}

#[tokio::test]
async fn test_contact_flow() {
    let app = test_app();

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/contact",
        Some(json!({
            "name": "Jane Client",
            "email": "jane@example.com",
            "subject": "Redesign",
            "message": "Can you help?",
            "service": "web-design",
            "budget": "$1000 - $5000",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "new");
    assert_eq!(created["budget"], "$1000 - $5000");
    let id = created["_id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/contact",
        Some(json!({
            "name": "Bad",
            "email": "nope",
            "subject": "s",
            "message": "m",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Please provide a valid email address");

    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/api/contact/{}", id),
        Some(json!({ "status": "in-progress" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "in-progress");

    let (_, body) = send(&app, Method::GET, "/api/contact?status=in-progress", None).await;
    assert_eq!(body["contacts"].as_array().unwrap().len(), 1);
    assert_eq!(body["pagination"]["total"], 1);

    let (status, _) = send(&app, Method::GET, "/api/contact?status=archived", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_services_catalog() {
    let app = test_app();

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/services",
        Some(json!({
            "title": "Web Design",
            "description": "Sites that convert",
            "shortDescription": "Design",
            "category": "web-design",
            "features": [{ "title": "Responsive", "description": "Every screen" }],
            "startingPrice": 500,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["slug"], "web-design");
    assert_eq!(created["pricing"], "project-based");
    assert_eq!(created["active"], true);
    assert_eq!(serde_json::to_string(&created["startingPrice"]).unwrap(), "500");
    let id = created["_id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/services",
        Some(json!({
            "title": "Negative",
            "description": "d",
            "shortDescription": "s",
            "category": "web-design",
            "startingPrice": -1,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Starting price cannot be negative");

    let (status, body) = send(&app, Method::GET, "/api/services?category=web-design", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["services"].as_array().unwrap().len(), 1);
    assert!(body.get("pagination").is_none());

    let (_, body) = send(&app, Method::GET, "/api/services?active=false", None).await;
    assert!(body["services"].as_array().unwrap().is_empty());

    let (status, _) = send(&app, Method::GET, "/api/services?category=plumbing", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) =
        send(&app, Method::DELETE, &format!("/api/services/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Service deleted successfully");

    let (status, body) =
        send(&app, Method::DELETE, &format!("/api/services/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Service not found");
}

#[tokio::test]
async fn test_unknown_route() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/api/nothing-here", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");
}

#[tokio::test]
async fn test_security_headers() {
    let app = test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["x-frame-options"], "DENY");
}
