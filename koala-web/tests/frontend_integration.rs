// koala-web/tests/frontend_integration.rs
// Frontend router against a stub backend, driven with oneshot requests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::extract::{Form, Json, Path, State};
use axum::http::{Request, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use jsonwebtoken::{EncodingKey, Header, encode};
use koala_client::TokenClaims;
use koala_web::{Config, ServerState, build_app};
use serde_json::{Value, json};
use shared::models::LoginForm;
use tower::ServiceExt;
use uuid::Uuid;

const SECRET: &str = "stub-secret";
const READY_DISH: &str = "00000000-0000-4000-8000-00000000000a";
const NEW_DISH: &str = "00000000-0000-4000-8000-00000000000b";
const TEA_ITEM: &str = "00000000-0000-4000-8000-00000000000c";

fn token(role_id: u32, ttl_secs: i64) -> String {
    let claims = TokenClaims {
        username: Some("staff01".into()),
        role_id: Some(role_id),
        exp: Some(chrono::Utc::now().timestamp() + ttl_secs),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap()
}

fn detail(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "detail": message }))).into_response()
}

async fn login(Form(form): Form<LoginForm>) -> Response {
    if form.username == "chef01" && form.password == "koala" {
        Json(json!({ "access_token": token(2, 900), "token_type": "bearer" })).into_response()
    } else {
        detail(StatusCode::BAD_REQUEST, "Incorrect password")
    }
}

/// Mutable backend data, shared by every request of one test
struct StubData {
    tables: Vec<(u32, &'static str)>,
    sections: Vec<Value>,
    next_section_id: u32,
}

type Backend = Arc<Mutex<StubData>>;

fn set_table_status(backend: &Backend, table_id: u32, status: &'static str) {
    let mut data = backend.lock().unwrap();
    if let Some(table) = data.tables.iter_mut().find(|(id, _)| *id == table_id) {
        table.1 = status;
    }
}

async fn tables(State(backend): State<Backend>) -> Json<Value> {
    let data = backend.lock().unwrap();
    let tables: Vec<Value> = data
        .tables
        .iter()
        .map(|(id, status)| json!({ "table_id": id, "capacity": 4, "table_status": status }))
        .collect();
    Json(Value::Array(tables))
}

async fn reserve(State(backend): State<Backend>, Json(body): Json<Value>) -> Json<Value> {
    let table_id = body["table_id"].as_u64().unwrap() as u32;
    set_table_status(&backend, table_id, "reserved");
    Json(json!({ "table_id": table_id, "capacity": 4, "table_status": "reserved" }))
}

async fn menu_items() -> Json<Value> {
    Json(json!([
        { "menu_item_id": Uuid::new_v4(), "menu_section_id": 1, "item_name": "Pho", "note": null, "price": 10.0 }
    ]))
}

async fn create_order(State(backend): State<Backend>, Json(body): Json<Value>) -> Json<Value> {
    let table_id = body["table_id"].as_u64().unwrap() as u32;
    assert!(!body["dishes"].as_array().unwrap().is_empty());
    set_table_status(&backend, table_id, "eating");
    Json(json!({
        "order_id": Uuid::new_v4(),
        "table_id": table_id,
        "staff_id": Uuid::new_v4(),
        "is_served": false,
        "created_at": "2024-05-01T12:30:00",
    }))
}

async fn table_order(State(backend): State<Backend>, Path(table_id): Path<u32>) -> Response {
    let eating = backend
        .lock()
        .unwrap()
        .tables
        .iter()
        .any(|&(id, status)| id == table_id && status == "eating");
    if !eating {
        return detail(StatusCode::NOT_FOUND, "Order not found");
    }
    Json(json!({
        "order_id": Uuid::new_v4(),
        "items": [
            { "item_name": "Pho", "quantity": 2, "price": 10.0 },
            { "item_name": "Iced tea", "quantity": 3, "price": 5.0 },
        ],
        "created_at": "2024-05-01T12:30:00",
        "is_served": false,
    }))
    .into_response()
}

async fn serve_order(State(backend): State<Backend>, Path(table_id): Path<u32>) -> Json<Value> {
    set_table_status(&backend, table_id, "vacant");
    Json(json!([{ "order_id": Uuid::new_v4(), "table_id": table_id, "is_served": true }]))
}

async fn dishes() -> Json<Value> {
    let order_id = Uuid::new_v4();
    Json(json!([
        { "dish_id": NEW_DISH, "order_id": order_id, "table_id": 3, "item_name": "Pho", "quantity": 2, "dish_status": "received" },
        { "dish_id": READY_DISH, "order_id": order_id, "table_id": 3, "item_name": "Banana fritter", "quantity": 1, "dish_status": "ready" },
    ]))
}

async fn dish_status_update(Json(body): Json<Value>) -> Json<Value> {
    Json(json!({
        "dish_id": body["dish_id"],
        "order_id": Uuid::new_v4(),
        "staff_id": Uuid::new_v4(),
        "menu_item_id": Uuid::new_v4(),
        "note": null,
        "quantity": 2,
        "total": 20.0,
        "dish_status": "prepared",
    }))
}

async fn menu_sections(State(backend): State<Backend>) -> Response {
    let data = backend.lock().unwrap();
    if data.sections.is_empty() {
        return detail(StatusCode::NOT_FOUND, "No menu sections found");
    }
    Json(Value::Array(data.sections.clone())).into_response()
}

async fn create_section(State(backend): State<Backend>, Json(body): Json<Value>) -> Json<Value> {
    let mut data = backend.lock().unwrap();
    data.next_section_id += 1;
    let id = data.next_section_id;
    data.sections.push(json!({
        "menu_section_id": id,
        "section_name": body["section_name"],
        "menu_items": [],
    }));
    Json(json!({ "menu_section_id": id, "section_name": body["section_name"] }))
}

async fn delete_section(State(backend): State<Backend>, Path(id): Path<u32>) -> StatusCode {
    let mut data = backend.lock().unwrap();
    let before = data.sections.len();
    data.sections.retain(|s| s["menu_section_id"] != id);
    if data.sections.len() < before {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

fn stored_item(body: &Value, id: &str) -> Value {
    json!({
        "menu_item_id": id,
        "menu_section_id": body["menu_section_id"],
        "item_name": body["item_name"],
        "note": body["note"],
        "price": body["price"],
    })
}

async fn create_item(State(backend): State<Backend>, Json(body): Json<Value>) -> Response {
    let mut data = backend.lock().unwrap();
    let Some(section) = data
        .sections
        .iter_mut()
        .find(|s| s["menu_section_id"] == body["menu_section_id"])
    else {
        return detail(StatusCode::NOT_FOUND, "Menu section not found");
    };
    let item = stored_item(&body, TEA_ITEM);
    section["menu_items"].as_array_mut().unwrap().push(item.clone());
    Json(item).into_response()
}

async fn update_item(
    State(backend): State<Backend>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let mut data = backend.lock().unwrap();
    let item = stored_item(&body, &id);
    for section in data.sections.iter_mut() {
        for existing in section["menu_items"].as_array_mut().unwrap() {
            if existing["menu_item_id"] == id.as_str() {
                *existing = item.clone();
                return Json(item).into_response();
            }
        }
    }
    detail(StatusCode::NOT_FOUND, "Menu item not found")
}

async fn delete_item(State(backend): State<Backend>, Path(id): Path<String>) -> StatusCode {
    let mut data = backend.lock().unwrap();
    for section in data.sections.iter_mut() {
        section["menu_items"]
            .as_array_mut()
            .unwrap()
            .retain(|item| item["menu_item_id"] != id.as_str());
    }
    StatusCode::NO_CONTENT
}

async fn spawn_backend() -> String {
    let data = StubData {
        tables: (1..=7)
            .map(|id| match id {
                1 => (id, "vacant"),
                2 => (id, "reserved"),
                _ => (id, "eating"),
            })
            .collect(),
        sections: Vec::new(),
        next_section_id: 4,
    };
    let app = Router::new()
        .route("/login", post(login))
        .route("/users/waiter/tables", get(tables))
        .route("/users/waiter/tables/reserve", put(reserve))
        .route("/users/waiter/tables/menu-items", get(menu_items))
        .route("/users/waiter/create-order", post(create_order))
        .route("/users/waiter/tables/{id}/order", get(table_order))
        .route("/users/waiter/orders/{id}/serve", put(serve_order))
        .route("/users/chef/dishes", get(dishes))
        .route("/users/chef/dishes/status-update", put(dish_status_update))
        .route(
            "/users/manager/menu-sections",
            get(menu_sections).post(create_section),
        )
        .route(
            "/users/manager/menu-sections/{id}/delete",
            delete(delete_section),
        )
        .route("/users/manager/menu-items", post(create_item))
        .route("/users/manager/menu-items/{id}", put(update_item))
        .route("/users/manager/menu-items/{id}/delete", delete(delete_item))
        .with_state(Arc::new(Mutex::new(data)));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn frontend_with(extra: &[(&str, &str)]) -> Router {
    let backend = spawn_backend().await;
    let mut vars: HashMap<&str, &str> = HashMap::from([("BACKEND_URL", backend.as_str())]);
    vars.extend(extra.iter().copied());
    let config = Config::from_map(&vars);
    let state = ServerState::initialize(&config).unwrap();
    build_app(&state).with_state(state)
}

async fn frontend() -> Router {
    frontend_with(&[]).await
}

fn cookies(role: &str) -> String {
    format!("session=tok; access_token=tok; role_id={}", role)
}

fn get_req(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

fn post_form(uri: &str, cookie: Option<&str>, form: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(form.to_string())).unwrap()
}

fn location(resp: &Response) -> Option<&str> {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
}

async fn body_text(resp: Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn set_cookies(resp: &Response) -> Vec<String> {
    resp.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok().map(str::to_string))
        .collect()
}

#[tokio::test]
async fn test_health_is_public() {
    let resp = frontend().await.oneshot(get_req("/health", None)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("\"status\":\"ok\""));
}

#[tokio::test]
async fn test_session_api() {
    let app = frontend().await;

    let resp = app.clone().oneshot(get_req("/api/session", None)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(body_text(resp).await.contains("\"code\":1001"));

    let resp = app
        .oneshot(get_req("/api/session", Some(&cookies("3"))))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json: Value = serde_json::from_str(&body_text(resp).await).unwrap();
    assert_eq!(json["data"]["role"], "manager");
    assert_eq!(json["data"]["destination"], "/home/manager");
}

#[tokio::test]
async fn test_guard_redirects_without_cookie() {
    let app = frontend().await;
    for path in ["/home", "/home/waiter", "/home/chef/dishes/x/advance", "/home/unknown"] {
        let resp = app.clone().oneshot(get_req(path, None)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::SEE_OTHER, "{}", path);
        assert_eq!(location(&resp), Some("/login"), "{}", path);
    }

    let resp = app.oneshot(get_req("/login", None)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_root_redirects_by_role() {
    let app = frontend().await;

    let resp = app.clone().oneshot(get_req("/", None)).await.unwrap();
    assert_eq!(location(&resp), Some("/login"));

    let resp = app
        .clone()
        .oneshot(get_req("/", Some(&cookies("2"))))
        .await
        .unwrap();
    assert_eq!(location(&resp), Some("/home/chef"));

    let resp = app
        .oneshot(get_req("/home", Some(&cookies("3"))))
        .await
        .unwrap();
    assert_eq!(location(&resp), Some("/home/manager"));
}

#[tokio::test]
async fn test_unknown_role_gets_generic_home() {
    let resp = frontend()
        .await
        .oneshot(get_req("/home", Some(&cookies("9"))))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("Welcome"));
}

#[tokio::test]
async fn test_login_sets_session_cookies() {
    let resp = frontend()
        .await
        .oneshot(post_form("/login", None, "username=chef01&password=koala"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/home"));

    let cookies = set_cookies(&resp);
    assert!(cookies.iter().any(|c| c.starts_with("access_token=")));
    assert!(cookies.iter().any(|c| c.starts_with("session=")));
    assert!(cookies.iter().any(|c| c.starts_with("role_id=2")));
}

#[tokio::test]
async fn test_login_failure_message() {
    let resp = frontend()
        .await
        .oneshot(post_form("/login", None, "username=chef01&password=nope"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(set_cookies(&resp).is_empty());
    assert!(
        body_text(resp)
            .await
            .contains("Login failed. Please check your username and password.")
    );
}

#[tokio::test]
async fn test_logout_clears_cookies() {
    let resp = frontend()
        .await
        .oneshot(post_form("/logout", Some(&cookies("1")), ""))
        .await
        .unwrap();
    assert_eq!(location(&resp), Some("/login"));

    let cleared = set_cookies(&resp);
    for name in ["access_token=", "role_id=", "session="] {
        assert!(
            cleared
                .iter()
                .any(|c| c.starts_with(name) && c.contains("Max-Age=0")),
            "{} not cleared",
            name
        );
    }
}

#[tokio::test]
async fn test_waiter_grid() {
    let resp = frontend()
        .await
        .oneshot(get_req("/home/waiter", Some(&cookies("1"))))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let html = body_text(resp).await;
    assert!(html.contains("Relaxing Koala Restaurant"));
    assert_eq!(html.matches("<tr>").count(), 2);
    assert_eq!(html.matches("class=\"empty\"").count(), 3);
    assert!(html.contains("Check-in"));
    assert!(html.contains("Make Order"));
    assert!(html.contains("View Order"));
}

#[tokio::test]
async fn test_wrong_role_is_sent_home() {
    let resp = frontend()
        .await
        .oneshot(get_req("/home/waiter", Some(&cookies("2"))))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/home/chef"));
}

async fn waiter_grid(app: &Router) -> String {
    let resp = app
        .clone()
        .oneshot(get_req("/home/waiter", Some(&cookies("1"))))
        .await
        .unwrap();
    body_text(resp).await
}

#[tokio::test]
async fn test_check_in_returns_to_grid() {
    let app = frontend().await;
    let resp = app
        .clone()
        .oneshot(post_form(
            "/home/waiter/tables/1/check-in",
            Some(&cookies("1")),
            "",
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/home/waiter"));

    let html = waiter_grid(&app).await;
    assert!(!html.contains("Check-in"));
    assert_eq!(html.matches("Make Order").count(), 2);
}

#[tokio::test]
async fn test_submitted_order_seats_the_table() {
    let app = frontend().await;
    let form = format!("qty_{}=2&qty_{}=0", Uuid::new_v4(), Uuid::new_v4());
    let resp = app
        .clone()
        .oneshot(post_form(
            "/home/waiter/tables/2/order",
            Some(&cookies("1")),
            &form,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/home/waiter"));

    let html = waiter_grid(&app).await;
    assert!(!html.contains("Make Order"));
    assert_eq!(html.matches("View Order").count(), 6);
}

#[tokio::test]
async fn test_view_order_shows_total() {
    let html = body_text(
        frontend()
            .await
            .oneshot(get_req("/home/waiter/tables/3/order", Some(&cookies("1"))))
            .await
            .unwrap(),
    )
    .await;
    assert!(html.contains("Iced tea"));
    assert!(html.contains("Total: 35"));
    assert!(html.contains("Make Payment"));
    assert!(!html.contains("class=\"banner\""));
}

#[tokio::test]
async fn test_payment_frees_the_table() {
    let app = frontend().await;
    let resp = app
        .clone()
        .oneshot(post_form(
            "/home/waiter/tables/3/payment",
            Some(&cookies("1")),
            "",
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/home/waiter"));

    let html = waiter_grid(&app).await;
    assert_eq!(html.matches("Check-in").count(), 2);
    assert_eq!(html.matches("View Order").count(), 4);

    let resp = app
        .oneshot(get_req("/home/waiter/tables/3/order", Some(&cookies("1"))))
        .await
        .unwrap();
    assert!(!body_text(resp).await.contains("Make Payment"));
}

#[tokio::test]
async fn test_empty_order_shows_banner() {
    let resp = frontend()
        .await
        .oneshot(post_form(
            "/home/waiter/tables/2/order",
            Some(&cookies("1")),
            "",
        ))
        .await
        .unwrap();
    let html = body_text(resp).await;
    assert!(html.contains("class=\"banner\""));
    assert!(html.contains("Please select at least one dish"));
    assert!(html.contains("Pho"));
}

#[tokio::test]
async fn test_chef_board() {
    let app = frontend().await;

    let html = body_text(
        app.clone()
            .oneshot(get_req("/home/chef", Some(&cookies("2"))))
            .await
            .unwrap(),
    )
    .await;
    assert!(html.contains("Pho"));
    assert!(html.contains("Prepare"));
    assert!(!html.contains("Banana fritter"));

    let uri = format!("/home/chef/dishes/{}/advance", NEW_DISH);
    let html = body_text(
        app.oneshot(post_form(&uri, Some(&cookies("2")), ""))
            .await
            .unwrap(),
    )
    .await;
    assert!(html.contains("prepared"));
    assert!(html.contains(">Ready<"));
}

#[tokio::test]
async fn test_manager_empty_menu_and_validation() {
    let app = frontend().await;

    let html = body_text(
        app.clone()
            .oneshot(get_req("/home/manager", Some(&cookies("3"))))
            .await
            .unwrap(),
    )
    .await;
    assert!(html.contains("The menu has no sections yet."));
    assert!(!html.contains("class=\"banner\""));

    let html = body_text(
        app.oneshot(post_form(
            "/home/manager/sections",
            Some(&cookies("3")),
            "section_name=+++",
        ))
        .await
        .unwrap(),
    )
    .await;
    assert!(html.contains("Section name is required"));
}

async fn manager_post(app: &Router, uri: &str, form: &str) -> String {
    let resp = app
        .clone()
        .oneshot(post_form(uri, Some(&cookies("3")), form))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK, "{}", uri);
    let html = body_text(resp).await;
    assert!(!html.contains("class=\"banner\""), "{}: {}", uri, html);
    html
}

#[tokio::test]
async fn test_manager_changes_show_the_refetched_menu() {
    let app = frontend().await;

    let html = manager_post(&app, "/home/manager/sections", "section_name=Drinks").await;
    assert!(html.contains("Drinks"));
    assert!(!html.contains("The menu has no sections yet."));

    let html = manager_post(
        &app,
        "/home/manager/sections/5/items",
        "item_name=Iced+tea&note=&price=5",
    )
    .await;
    assert!(html.contains("Iced tea"));

    let html = manager_post(
        &app,
        &format!("/home/manager/items/{}", TEA_ITEM),
        "menu_section_id=5&item_name=Lemon+tea&note=No+ice&price=6",
    )
    .await;
    assert!(html.contains("Lemon tea"));
    assert!(html.contains("No ice"));
    assert!(!html.contains("Iced tea"));

    let html = manager_post(
        &app,
        &format!("/home/manager/items/{}/delete", TEA_ITEM),
        "",
    )
    .await;
    assert!(html.contains("Drinks"));
    assert!(!html.contains("Lemon tea"));

    let html = manager_post(&app, "/home/manager/sections/5/delete", "").await;
    assert!(html.contains("The menu has no sections yet."));
}

#[tokio::test]
async fn test_login_stays_reachable_under_catch_all_guard() {
    let app = frontend_with(&[("GUARD_PREFIXES", "/")]).await;

    let resp = app.clone().oneshot(get_req("/login", None)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .clone()
        .oneshot(post_form("/login", None, "username=chef01&password=koala"))
        .await
        .unwrap();
    assert_eq!(location(&resp), Some("/home"));

    let resp = app
        .clone()
        .oneshot(post_form("/logout", None, ""))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/login"));

    for path in ["/", "/home/waiter"] {
        let resp = app.clone().oneshot(get_req(path, None)).await.unwrap();
        assert_eq!(location(&resp), Some("/login"), "{}", path);
    }
}

#[tokio::test]
async fn test_token_mode_rejects_expired_session() {
    let app = frontend_with(&[("GUARD_MODE", "token"), ("JWT_SECRET", SECRET)]).await;

    let expired = token(1, -60);
    let cookie = format!("session={0}; access_token={0}; role_id=1", expired);
    let resp = app.clone().oneshot(get_req("/home/waiter", Some(&cookie))).await.unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/login"));

    let valid = token(1, 600);
    let cookie = format!("session={0}; access_token={0}; role_id=1", valid);
    let resp = app.oneshot(get_req("/home/waiter", Some(&cookie))).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
