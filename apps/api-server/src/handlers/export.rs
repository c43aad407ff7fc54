//! Export handlers - derived renderings of the held calendar.

use actix_web::{HttpResponse, web};
use chrono::Utc;

use cadence_core::DomainError;
use cadence_core::domain::{self, Post};

use crate::middleware::error::AppResult;
use crate::state::AppState;

async fn held_posts(state: &AppState) -> Result<Vec<Post>, DomainError> {
    let held = state.calendar.read().await;
    held.as_ref()
        .map(|calendar| calendar.posts.clone())
        .ok_or(DomainError::NoCalendar)
}

/// GET /api/export/csv
pub async fn csv(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = held_posts(&state).await?;
    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            "attachment; filename=\"content_calendar.csv\"",
        ))
        .body(domain::to_csv(&posts)))
}

/// GET /api/export/text
pub async fn plain_text(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = held_posts(&state).await?;
    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(domain::to_plain_text(&posts)))
}

/// GET /api/export/markdown
pub async fn markdown(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = held_posts(&state).await?;
    let rendered = domain::to_markdown(&posts, Utc::now().date_naive());
    Ok(HttpResponse::Ok()
        .content_type("text/markdown; charset=utf-8")
        .body(rendered))
}
