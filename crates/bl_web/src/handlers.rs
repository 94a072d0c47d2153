use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use bl_core::contact::ContactForm;
use bl_core::Error;
use std::sync::Arc;
use tracing::{debug, info};

use crate::error::{AppError, Result};
use crate::routes::{ArticleQuery, CategoriesQuery, ResultsQuery, Route, SearchQuery};
use crate::views::pages;
use crate::AppState;

pub async fn home(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(pages::home(state.catalog.featured()))
}

/// Target of the home page search form.
pub async fn search(Query(params): Query<SearchQuery>) -> Redirect {
    match params.q {
        Some(q) if !q.trim().is_empty() => {
            let href = Route::Results(ResultsQuery::for_query(q)).href();
            debug!("🔎 search -> {}", href);
            Redirect::to(&href)
        }
        _ => Redirect::to(&Route::Home.href()),
    }
}

pub async fn results(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ResultsQuery>,
) -> Html<String> {
    let records = params
        .filter()
        .apply(&state.catalog.perspectives(params.query()));
    Html(pages::results(&params, &records))
}

pub async fn categories(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CategoriesQuery>,
) -> Html<String> {
    let catalog = &state.catalog;
    let records = catalog.search(&params.filter());
    Html(pages::categories(
        catalog.categories(),
        catalog.category(params.category.as_deref()),
        &params,
        &records,
    ))
}

pub async fn article(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<ArticleQuery>,
) -> Result<Html<String>> {
    let detail = state.catalog.detail(&id, params.q.as_deref())?;
    Ok(Html(pages::article(&detail)))
}

pub async fn about() -> Html<String> {
    Html(pages::about())
}

pub async fn contact() -> Html<String> {
    Html(pages::contact(&ContactForm::default(), &[], None))
}

/// Acknowledges a contact message. Nothing is stored or forwarded.
pub async fn submit_contact(Form(form): Form<ContactForm>) -> Response {
    match form.validate() {
        Ok(submission) => {
            info!(
                feedback_type = ?submission.feedback_type,
                "📬 Contact message from {} ({} chars)",
                submission.name,
                submission.message.chars().count()
            );
            let toast = pages::contact_toast();
            Html(pages::contact(&ContactForm::default(), &[], Some(&toast))).into_response()
        }
        Err(Error::Validation(errors)) => {
            debug!("Contact form rejected: {} field(s)", errors.len());
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(pages::contact(&form, &errors, None)),
            )
                .into_response()
        }
        Err(e) => AppError::from(e).into_response(),
    }
}

pub async fn not_found() -> AppError {
    AppError::NotFound("The page you are looking for does not exist.".to_string())
}
