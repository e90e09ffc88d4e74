//! Test fixture: a small in-memory HTTP API the integration tests run
//! the client against. Not part of the published surface.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
}

#[derive(Deserialize)]
pub struct CreateItem {
    pub name: String,
}

pub type Db = Arc<RwLock<HashMap<u64, Item>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/echo", get(echo_query))
        .route("/items", post(create_item))
        .route("/items/{id}", get(get_item).delete(delete_item))
        .route("/flagged", get(flagged))
        .route("/broken", get(broken))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Echo the query string back so clients can verify parameter encoding.
async fn echo_query(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    Json(json!({ "query": params }))
}

async fn create_item(
    State(db): State<Db>,
    Json(input): Json<CreateItem>,
) -> (StatusCode, Json<Item>) {
    let mut items = db.write().await;
    let id = items.len() as u64 + 1;
    let item = Item {
        id,
        name: input.name,
    };
    items.insert(id, item.clone());
    (StatusCode::CREATED, Json(item))
}

async fn get_item(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Item>, StatusCode> {
    let items = db.read().await;
    items.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn delete_item(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Item>, StatusCode> {
    let mut items = db.write().await;
    items.remove(&id).map(Json).ok_or(StatusCode::NOT_FOUND)
}

/// 200 response with a domain error embedded in the body.
async fn flagged() -> Json<Value> {
    Json(json!({ "error_code": 5, "error_message": "flagged" }))
}

/// 200 response claiming JSON but carrying an unparseable body.
async fn broken() -> ([(&'static str, &'static str); 1], &'static str) {
    ([("content-type", "application/json")], "not json {")
}
