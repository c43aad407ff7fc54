//! Calendar generation, regeneration, and editing handlers.
//!
//! Regeneration follows a two-step protocol: post content is submitted to
//! the gateway without its id, and the caller-held ids are re-attached to
//! the returned drafts before anything is matched or merged. Gateway
//! calls never happen under the calendar lock.

use actix_web::{HttpResponse, web};
use chrono::Utc;

use cadence_core::DomainError;
use cadence_core::domain::{
    BrandContext, BrandVoice, Calendar, FieldEdit, Post, PostDraft, PostId, attach_ids,
};
use cadence_shared::dto::{
    CalendarResponse, GenerateCalendarRequest, PostResponse, RegeneratePostRequest,
    RegenerateWeekRequest, WeeksResponse,
};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn require(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!(
            "Missing required field: {field}"
        )));
    }
    Ok(())
}

fn valid_frequency(frequency: u8) -> Result<(), AppError> {
    if !(1..=7).contains(&frequency) {
        return Err(AppError::BadRequest(
            "frequency must be between 1 and 7 posts per week".to_string(),
        ));
    }
    Ok(())
}

/// Best-effort persistence after a successful mutation. Failures are
/// logged, never surfaced.
async fn persist(state: &AppState, calendar: &Calendar) {
    if let Err(e) = state.snapshots.save(calendar).await {
        tracing::warn!(error = %e, "Failed to persist calendar snapshot");
    }
}

/// POST /api/generate-calendar
pub async fn generate_calendar(
    state: web::Data<AppState>,
    body: web::Json<GenerateCalendarRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    require("brandDescription", &req.brand_description)?;
    require("tone", &req.tone)?;
    valid_frequency(req.frequency)?;

    let brand = BrandContext {
        voice: BrandVoice {
            brand_description: req.brand_description,
            tone: req.tone,
            user_type: req.user_type,
            temperature: req.temperature,
        },
        frequency: req.frequency,
    };

    let drafts = state.generator.generate_calendar(&brand).await?;

    let expected = usize::from(brand.frequency) * 4;
    if drafts.len() != expected {
        tracing::warn!(
            expected,
            returned = drafts.len(),
            "Gateway returned an unexpected post count"
        );
    }

    let calendar = Calendar::from_drafts(brand, drafts);
    persist(&state, &calendar).await;

    let posts = calendar.posts.clone();
    *state.calendar.write().await = Some(calendar);
    tracing::info!(posts = posts.len(), "Generated new calendar");

    Ok(HttpResponse::Ok().json(CalendarResponse { posts }))
}

/// POST /api/regenerate-post
pub async fn regenerate_post(
    state: web::Data<AppState>,
    body: web::Json<RegeneratePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    require("brandDescription", &req.brand_description)?;
    require("tone", &req.tone)?;

    let voice = BrandVoice {
        brand_description: req.brand_description,
        tone: req.tone,
        user_type: None,
        temperature: req.temperature,
    };

    let id = req.post.id.clone();
    let draft = state
        .generator
        .regenerate_post(&req.post.draft(), &voice)
        .await?;

    // Force the caller-held id back on, whatever the gateway returned.
    let replacement = Post::from_draft(id, draft);

    let mut held = state.calendar.write().await;
    if let Some(calendar) = held.as_mut() {
        if calendar.merge_post(&replacement) {
            persist(&state, calendar).await;
        } else {
            tracing::warn!(id = %replacement.id, "Regenerated post is not in the held calendar");
        }
    }
    drop(held);

    Ok(HttpResponse::Ok().json(PostResponse { post: replacement }))
}

/// POST /api/regenerate-week
pub async fn regenerate_week(
    state: web::Data<AppState>,
    body: web::Json<RegenerateWeekRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    require("brandDescription", &req.brand_description)?;
    require("tone", &req.tone)?;
    if req.week_posts.is_empty() {
        return Err(AppError::BadRequest("weekPosts must not be empty".to_string()));
    }

    let voice = BrandVoice {
        brand_description: req.brand_description,
        tone: req.tone,
        user_type: None,
        temperature: req.temperature,
    };

    let ids: Vec<PostId> = req.week_posts.iter().map(|p| p.id.clone()).collect();
    let drafts: Vec<PostDraft> = req.week_posts.iter().map(Post::draft).collect();

    let regenerated = state.generator.regenerate_week(&drafts, &voice).await?;
    if regenerated.len() != ids.len() {
        tracing::warn!(
            submitted = ids.len(),
            returned = regenerated.len(),
            "Gateway returned a different post count; merging what matched"
        );
    }

    let replacements = attach_ids(&ids, regenerated);

    let mut held = state.calendar.write().await;
    if let Some(calendar) = held.as_mut() {
        calendar.merge_week(&replacements);
        persist(&state, calendar).await;
    }
    drop(held);

    Ok(HttpResponse::Ok().json(CalendarResponse {
        posts: replacements,
    }))
}

/// GET /api/calendar
pub async fn current_calendar(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let held = state.calendar.read().await;
    let calendar = held.as_ref().ok_or(DomainError::NoCalendar)?;
    Ok(HttpResponse::Ok().json(calendar))
}

/// GET /api/calendar/weeks
///
/// Buckets are computed against the wall-clock date at every call, so the
/// same calendar can bucket differently on different days.
pub async fn week_view(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let held = state.calendar.read().await;
    let calendar = held.as_ref().ok_or(DomainError::NoCalendar)?;
    let weeks = calendar.weeks(Utc::now().date_naive());
    Ok(HttpResponse::Ok().json(WeeksResponse { weeks }))
}

/// PATCH /api/calendar/posts/{id}
pub async fn edit_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<FieldEdit>,
) -> AppResult<HttpResponse> {
    let id = PostId::from(path.into_inner().as_str());
    let edit = body.into_inner();

    let mut held = state.calendar.write().await;
    let calendar = held.as_mut().ok_or(DomainError::NoCalendar)?;
    let post = calendar.edit_post(&id, edit)?.clone();
    persist(&state, calendar).await;
    drop(held);

    Ok(HttpResponse::Ok().json(post))
}
