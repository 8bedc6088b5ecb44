use std::sync::Arc;

use axum::{
    Router,
    extract::{Form, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use serde::Deserialize;
use tracing::{debug, info};

use crate::{
    AppState,
    error::{AppError, AppResult},
    forms::{AddForm, EditForm, FieldErrors},
    templates,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/add", get(add).post(add_submit))
        .route("/select", get(select))
        .route("/edit", get(edit).post(edit_submit))
        .route("/delete", get(delete))
        .with_state(state)
}

pub async fn index(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let movies = state.store.list_ranked().await?;
    debug!(count = movies.len(), "listing movies");
    Ok(Html(templates::index_page(&movies)))
}

pub async fn add() -> Html<String> {
    Html(templates::add_page(&AddForm::default(), &FieldErrors::default()))
}

pub async fn add_submit(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AddForm>,
) -> AppResult<Html<String>> {
    let title = match form.validate() {
        Ok(title) => title,
        Err(errors) => return Ok(Html(templates::add_page(&form, &errors))),
    };

    let candidates = state.tmdb.search_movies(&title).await?;
    debug!(query = %title, results = candidates.len(), "search candidates");
    Ok(Html(templates::select_page(&title, &candidates)))
}

#[derive(Debug, Deserialize)]
pub struct SelectQuery {
    id: i64,
}

pub async fn select(
    State(state): State<Arc<AppState>>,
    Query(q): Query<SelectQuery>,
) -> AppResult<Redirect> {
    let new_movie = state.tmdb.fetch_new_movie(q.id).await?;
    let created = state.store.insert(new_movie).await?;
    info!(movie_id = created.id, tmdb_id = q.id, title = %created.title, "movie added");
    Ok(Redirect::to(&format!("/edit?id={}", created.id)))
}

/// `?id=` for record pages. Anything that is not an existing id is a 404.
#[derive(Debug, Deserialize)]
pub struct RecordQuery {
    id: Option<String>,
}

impl RecordQuery {
    fn record_id(&self) -> AppResult<i32> {
        self.id.as_deref().and_then(|s| s.trim().parse().ok()).ok_or(AppError::NotFound)
    }
}

pub async fn edit(
    State(state): State<Arc<AppState>>,
    Query(q): Query<RecordQuery>,
) -> AppResult<Html<String>> {
    let movie = state.store.get(q.record_id()?).await?;
    // Fields start blank on every load rather than showing the stored values.
    Ok(Html(templates::edit_page(&movie, &EditForm::default(), &FieldErrors::default())))
}

pub async fn edit_submit(
    State(state): State<Arc<AppState>>,
    Query(q): Query<RecordQuery>,
    Form(form): Form<EditForm>,
) -> AppResult<Response> {
    let movie = state.store.get(q.record_id()?).await?;

    let valid = match form.validate() {
        Ok(valid) => valid,
        Err(errors) => {
            return Ok(Html(templates::edit_page(&movie, &form, &errors)).into_response());
        }
    };

    let rating: f64 = valid.rating.parse()?;
    state.store.update_review(movie.id, rating, &valid.review).await?;
    debug!(movie_id = movie.id, rating = rating, "movie updated");
    Ok(Redirect::to("/").into_response())
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Query(q): Query<RecordQuery>,
) -> AppResult<Redirect> {
    let id = q.record_id()?;
    state.store.delete(id).await?;
    info!(movie_id = id, "movie deleted");
    Ok(Redirect::to("/"))
}
