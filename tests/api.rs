use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;
use toy_bazaar_api::{
    config::AppConfig, routes::create_app, seed::load_sample_data, state::AppState,
    storage::MemStorage,
};

fn empty_app() -> Router {
    create_app(AppState::new(MemStorage::new()), &AppConfig::default())
}

fn seeded_app() -> Router {
    let storage = MemStorage::new();
    load_sample_data(&storage);
    create_app(AppState::new(storage), &AppConfig::default())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request");

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, json)
}

fn contains_key(value: &Value, key: &str) -> bool {
    match value {
        Value::Object(map) => map.contains_key(key) || map.values().any(|v| contains_key(v, key)),
        Value::Array(items) => items.iter().any(|v| contains_key(v, key)),
        _ => false,
    }
}

fn new_user(username: &str) -> Value {
    json!({
        "username": username,
        "password": "secret",
        "name": "Asha Rao",
        "email": format!("{username}@example.com")
    })
}

#[tokio::test]
async fn users_are_created_and_never_expose_passwords() {
    let app = empty_app();

    let (status, body) = send(&app, Method::POST, "/api/users", Some(new_user("asha"))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["isArtisan"], false);
    assert!(!contains_key(&body, "password"));

    let (status, body) = send(&app, Method::GET, "/api/users/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "asha");
    assert!(!contains_key(&body, "password"));

    let (status, body) = send(&app, Method::POST, "/api/users", Some(new_user("asha"))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Username already exists");
}

#[tokio::test]
async fn user_lookups_reject_bad_ids_and_unknown_users() {
    let app = empty_app();

    let (status, body) = send(&app, Method::GET, "/api/users/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid user ID");

    let (status, body) = send(&app, Method::GET, "/api/users/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found");
}

#[tokio::test]
async fn invalid_user_payload_lists_field_errors() {
    let app = empty_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/users",
        Some(json!({ "username": "", "password": "x", "name": "X", "email": "nope" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid user data");

    let fields: Vec<&str> = body["errors"]
        .as_array()
        .expect("errors")
        .iter()
        .filter_map(|e| e["field"].as_str())
        .collect();
    assert_eq!(fields, vec!["email", "username"]);
}

#[tokio::test]
async fn users_can_be_partially_updated() {
    let app = empty_app();
    send(&app, Method::POST, "/api/users", Some(new_user("ravi"))).await;

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/api/users/1",
        Some(json!({ "bio": "Toy collector" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bio"], "Toy collector");
    assert_eq!(body["username"], "ravi");
}

#[tokio::test]
async fn artisans_come_with_their_products() {
    let app = seeded_app();

    let (status, body) = send(&app, Method::GET, "/api/artisans", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(3));
    assert!(!contains_key(&body, "password"));

    let (status, body) = send(&app, Method::GET, "/api/artisans/3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "mohan_singh");
    assert_eq!(body["products"][0]["name"], "Kathputli String Puppet");
}

#[tokio::test]
async fn product_listings_follow_the_catalogue() {
    let app = seeded_app();

    let (_, body) = send(&app, Method::GET, "/api/products", None).await;
    assert_eq!(body.as_array().map(Vec::len), Some(9));

    let (_, body) = send(&app, Method::GET, "/api/products/featured", None).await;
    assert_eq!(body.as_array().map(Vec::len), Some(4));

    let (_, body) = send(&app, Method::GET, "/api/products/category/Clay%20Crafts", None).await;
    assert_eq!(body[0]["name"], "Bengali Clay Doll");

    let (_, body) = send(&app, Method::GET, "/api/products/region/North%20India", None).await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));

    let (_, body) = send(&app, Method::GET, "/api/products/region/north%20india", None).await;
    assert_eq!(body.as_array().map(Vec::len), Some(0));

    let (status, body) = send(&app, Method::GET, "/api/products/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["price"], "1250");
}

#[tokio::test]
async fn search_needs_a_query() {
    let app = seeded_app();

    let (status, body) = send(&app, Method::GET, "/api/products/search", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Search query is required");

    let (status, body) = send(&app, Method::GET, "/api/products/search?q=CLAY", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn products_can_be_created_updated_and_deleted() {
    let app = empty_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/products",
        Some(json!({
            "name": "Wooden Peacock",
            "description": "Painted peacock",
            "price": "650",
            "category": "Wooden Toys",
            "region": "West India",
            "material": "Wood",
            "imageUrl": "/images/toys/peacock.svg",
            "artisanId": 1,
            "stock": 4
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["featured"], false);

    let (status, body) = send(&app, Method::PUT, "/api/products/1", Some(json!({ "stock": 9 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["stock"], 9);
    assert_eq!(body["name"], "Wooden Peacock");

    let (status, _) = send(&app, Method::DELETE, "/api/products/1", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::GET, "/api/products/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Product not found");
}

#[tokio::test]
async fn region_detail_joins_products_by_name() {
    let app = seeded_app();

    let (_, body) = send(&app, Method::GET, "/api/regions", None).await;
    assert_eq!(body.as_array().map(Vec::len), Some(4));

    let (status, body) = send(&app, Method::GET, "/api/regions/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "South India");
    assert_eq!(body["products"].as_array().map(Vec::len), Some(7));

    let (_, body) = send(&app, Method::GET, "/api/regions/4", None).await;
    assert_eq!(body["products"], json!([]));

    let (status, _) = send(&app, Method::GET, "/api/regions/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn cart_rows_merge_and_carry_their_product() {
    let app = seeded_app();
    send(&app, Method::POST, "/api/users", Some(new_user("meera"))).await;
    let buyer = 4;

    let add = json!({ "userId": buyer, "productId": 9, "quantity": 3 });
    let (status, body) = send(&app, Method::POST, "/api/cart", Some(add.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["product"]["name"], "Miniature Dollhouse");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/cart",
        Some(json!({ "userId": buyer, "productId": 9, "quantity": 4 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["quantity"], 7);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/cart",
        Some(json!({ "userId": buyer, "productId": 9, "quantity": 6 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Not enough stock available");

    let (_, body) = send(&app, Method::GET, &format!("/api/cart/{buyer}"), None).await;
    let rows = body.as_array().expect("cart rows");
    assert_eq!(rows.len(), 1);
    let row_id = rows[0]["id"].as_i64().expect("row id");

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/cart/{row_id}"),
        Some(json!({ "quantity": 0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid quantity");

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/cart/{row_id}"),
        Some(json!({ "quantity": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["quantity"], 2);

    let (status, body) = send(&app, Method::DELETE, &format!("/api/cart/{row_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Cart item removed successfully");

    let (status, _) = send(&app, Method::DELETE, &format!("/api/cart/{row_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn clearing_an_empty_cart_succeeds() {
    let app = empty_app();

    let (status, body) = send(&app, Method::DELETE, "/api/cart/user/5", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Cart cleared successfully");

    let (status, _) = send(&app, Method::POST, "/api/cart", Some(json!({ "userId": 5, "productId": 1, "quantity": 1 }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn orders_are_placed_and_read_back() {
    let app = seeded_app();
    send(&app, Method::POST, "/api/users", Some(new_user("kiran"))).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/orders",
        Some(json!({
            "order": {
                "userId": 4,
                "totalAmount": "2100",
                "status": "pending",
                "shippingAddress": "7 Park Street, Kolkata",
                "paymentMethod": "card"
            },
            "orderItems": [
                { "productId": 4, "quantity": 1, "price": "2100" }
            ]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let order_id = body["order"]["id"].as_i64().expect("order id");
    assert_eq!(body["orderItems"][0]["orderId"], order_id);

    let (_, body) = send(&app, Method::GET, "/api/products/4", None).await;
    assert_eq!(body["stock"], 7);

    let (status, body) = send(&app, Method::GET, "/api/orders/user/4", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["items"][0]["product"]["name"], "Kondapalli Bullock Cart");

    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/api/orders/{order_id}/status"),
        Some(json!({ "status": "delivered" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "delivered");

    let (status, _) = send(&app, Method::GET, "/api/orders/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn orders_without_items_are_rejected() {
    let app = seeded_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/orders",
        Some(json!({ "order": { "userId": 1 } })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid order data");

    let (_, body) = send(&app, Method::GET, "/api/orders/user/1", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn reviews_carry_their_author() {
    let app = seeded_app();
    send(&app, Method::POST, "/api/users", Some(new_user("dev"))).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/reviews",
        Some(json!({ "userId": 4, "productId": 2, "rating": 5, "comment": "Beautiful work" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user"]["username"], "dev");
    assert!(!contains_key(&body, "password"));

    let (status, body) = send(&app, Method::GET, "/api/reviews/product/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["rating"], 5);
    assert_eq!(body[0]["user"]["name"], "Asha Rao");
    assert!(!contains_key(&body, "email"));

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/reviews",
        Some(json!({ "userId": 4, "productId": 2, "rating": 6 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/reviews",
        Some(json!({ "userId": 4, "productId": 99, "rating": 4 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Product not found");
}

#[tokio::test]
async fn unknown_routes_fall_through_to_not_found() {
    let app = empty_app();

    let (status, body) = send(&app, Method::GET, "/api/nowhere", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No route for /api/nowhere");
}

#[tokio::test]
async fn health_answers_over_http() {
    let app = empty_app();

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn listings_are_bare_json_arrays() {
    let app = seeded_app();

    for uri in ["/api/products", "/api/regions", "/api/artisans", "/api/products/featured"] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_array(), "{uri} should answer with an array");
    }

    let (_, body) = send(&app, Method::GET, "/api/products/2", None).await;
    assert_eq!(body["name"], "Bengali Clay Doll");
    assert!(body.get("message").is_none());
}

#[tokio::test]
async fn missing_fields_are_each_reported() {
    let app = empty_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/users",
        Some(json!({ "username": "asha", "email": "asha@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid user data");
    let errors = body["errors"].as_array().expect("errors");
    let mut fields: Vec<&str> = errors.iter().filter_map(|e| e["field"].as_str()).collect();
    fields.sort_unstable();
    assert_eq!(fields, vec!["name", "password"]);
    assert!(errors.iter().all(|e| e["message"] == "Required"));
    assert!(body.get("data").is_none());
    assert!(body.get("meta").is_none());
}

#[tokio::test]
async fn mistyped_fields_are_named() {
    let app = seeded_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/cart",
        Some(json!({ "userId": 1, "productId": 1, "quantity": "two" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid cart item data");
    assert_eq!(body["errors"][0]["field"], "quantity");
}

#[tokio::test]
async fn plain_errors_have_no_field_list() {
    let app = empty_app();

    let (status, body) = send(&app, Method::GET, "/api/products/7", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Product not found" }));
}
