use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{error, info};

use libris::traits::{Insertable, Queryable};
use libris::types::author::Author;
use libris::types::date::OptionalDate;
use libris::types::uuid::Uuid;

pub struct AppState {
    conn: sqlx::SqlitePool,
}

fn app(conn: sqlx::SqlitePool) -> Router {
    let state = Arc::new(AppState { conn });

    Router::new()
        .route("/users", get(users_index))
        .route("/users/cool", get(users_cool))
        .route("/catalog/authors", get(author_list).post(author_create))
        .route("/catalog/author/:id", get(author_detail))
        .with_state(state)
}

pub async fn start(conn: &sqlx::SqlitePool, addr: SocketAddr) -> Result<()> {
    let app = app(conn.clone());

    info!("Listening on {}.", addr);
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}

async fn users_index() -> &'static str {
    "respond with a resource"
}

async fn users_cool() -> Html<&'static str> {
    Html("<h1>you so cool</h1>")
}

/// Raw fields plus the derived display values, the shape views consume.
fn author_json(author: &Author) -> Value {
    json!({
        "id": author.id.to_string(),
        "first_name": &author.first_name,
        "family_name": &author.family_name,
        "date_of_birth": author.date_of_birth,
        "date_of_death": author.date_of_death,
        "name": author.name(),
        "url": author.url(),
        "date_of_birth_formatted": author.date_of_birth_formatted(),
        "date_of_death_formatted": author.date_of_death_formatted(),
        "lifespan": author.lifespan(),
    })
}

async fn author_list(State(state): State<Arc<AppState>>) -> Result<Json<Value>, StatusCode> {
    match Author::get_all(&state.conn).await {
        Ok(authors) => Ok(Json(Value::Array(
            authors.iter().map(author_json).collect(),
        ))),
        Err(e) => {
            error!("Listing authors failed: {}.", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

async fn author_detail(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, StatusCode> {
    let id = match Uuid::parse(&id) {
        Ok(id) => id,
        Err(_) => {
            error!("{} is not an author id.", id);
            return Err(StatusCode::BAD_REQUEST);
        }
    };
    match Author::get_by_id(&state.conn, &id).await {
        Ok(Some(author)) => Ok(Json(author_json(&author))),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            error!("Fetching author {} failed: {}.", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[derive(Debug, Deserialize)]
struct NewAuthor {
    first_name: String,
    family_name: String,
    date_of_birth: Option<NaiveDate>,
    date_of_death: Option<NaiveDate>,
}

async fn author_create(
    State(state): State<Arc<AppState>>,
    Json(new): Json<NewAuthor>,
) -> Result<(StatusCode, Json<Value>), StatusCode> {
    for name in [&new.first_name, &new.family_name] {
        if name.is_empty() || name.chars().count() > 100 {
            return Err(StatusCode::UNPROCESSABLE_ENTITY);
        }
    }
    let author = Author {
        id: Uuid::new(),
        first_name: Some(new.first_name),
        family_name: Some(new.family_name),
        date_of_birth: OptionalDate(new.date_of_birth),
        date_of_death: OptionalDate(new.date_of_death),
        deleted: false,
    };
    match author.insert(&state.conn).await {
        Ok(_) => {
            info!("Created author {}.", author);
            Ok((StatusCode::CREATED, Json(author_json(&author))))
        }
        Err(e) => {
            error!("Creating author failed: {}.", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
