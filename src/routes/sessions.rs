use actix_web::{web, HttpResponse, Responder};
use uuid::Uuid;
use validator::Validate;
use crate::core::discover::{favorite_stores, filter_labels, list_stores, listing_for, DiscoverFilter};
use crate::core::pipeline::{lock_session, ActionOutcome, SharedSession, StyleAdvisor};
use crate::core::session::{SessionError, SessionMode};
use crate::models::{
    ActionResponse, CreateSessionRequest, ErrorResponse, HealthResponse, SampleDataRequest,
    SessionResponse, StoreListQuery, StoreListResponse, ToggleFavoriteRequest, ToggleStyleRequest,
};
use crate::services::SessionStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    pub advisor: StyleAdvisor,
    pub default_mode: SessionMode,
}

/// Configure all session-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/styles", web::get().to(list_styles))
        .route("/stores/categories", web::get().to(list_categories))
        .route("/sessions", web::post().to(create_session))
        .route("/sessions/{id}", web::get().to(get_session))
        .route("/sessions/{id}", web::delete().to(delete_session))
        .route("/sessions/{id}/styles/toggle", web::post().to(toggle_style))
        .route("/sessions/{id}/analyze", web::post().to(analyze_style))
        .route("/sessions/{id}/match", web::post().to(match_stores))
        .route("/sessions/{id}/explore", web::post().to(explore_stores))
        .route("/sessions/{id}/stores", web::get().to(get_stores))
        .route("/sessions/{id}/stores/{store_id}", web::get().to(get_store))
        .route("/sessions/{id}/favorites", web::get().to(get_favorites))
        .route("/sessions/{id}/favorites/toggle", web::post().to(toggle_favorite))
        .route("/sessions/{id}/retake", web::post().to(retake_quiz))
        .route("/sessions/{id}/sample", web::post().to(set_sample_data))
        .route("/sessions/{id}/error", web::delete().to(dismiss_error));
}

fn error_response(status: actix_web::http::StatusCode, error: &str, message: String) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: status.as_u16(),
    })
}

fn session_not_found(id: &Uuid) -> HttpResponse {
    error_response(
        actix_web::http::StatusCode::NOT_FOUND,
        "Session not found",
        format!("No active session {}", id),
    )
}

fn session_error(err: SessionError) -> HttpResponse {
    use actix_web::http::StatusCode;

    let (status, error) = match &err {
        SessionError::UnknownStyle(_) => (StatusCode::BAD_REQUEST, "Unknown style"),
        SessionError::UnknownStore(_) => (StatusCode::NOT_FOUND, "Unknown store"),
        SessionError::NotEnoughStyles { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "Not enough styles"),
        SessionError::NoProfile => (StatusCode::CONFLICT, "No style profile"),
        SessionError::AlreadyInFlight(_) => (StatusCode::CONFLICT, "Request in flight"),
    };
    error_response(status, error, err.to_string())
}

fn action_response<T>(outcome: &ActionOutcome<T>, session: &SharedSession) -> HttpResponse {
    HttpResponse::Ok().json(ActionResponse {
        outcome: outcome.label().to_string(),
        message: outcome.message().map(str::to_string),
        session: lock_session(session).view(),
    })
}

async fn lookup(state: &AppState, id: &Uuid) -> Result<SharedSession, HttpResponse> {
    state.sessions.get(id).await.ok_or_else(|| session_not_found(id))
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        active_sessions: state.sessions.len(),
        timestamp: chrono::Utc::now(),
    })
}

/// Quiz cards
async fn list_styles(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.advisor.catalog().styles())
}

/// Filter chip labels for the discover screen
async fn list_categories(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(filter_labels(state.advisor.catalog()))
}

/// Open a session
///
/// POST /api/v1/sessions
///
/// Request body:
/// ```json
/// { "sample_data": false }
/// ```
async fn create_session(
    state: web::Data<AppState>,
    req: Option<web::Json<CreateSessionRequest>>,
) -> impl Responder {
    let mode = match req.and_then(|r| r.sample_data) {
        Some(true) => SessionMode::Sample,
        Some(false) => SessionMode::Live,
        None => state.default_mode,
    };

    let (session_id, session) = state.sessions.create(mode).await;
    tracing::info!("Created session {} in {:?} mode", session_id, mode);

    let view = lock_session(&session).view();
    HttpResponse::Created().json(SessionResponse { session_id, session: view })
}

async fn get_session(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    let id = path.into_inner();
    match lookup(&state, &id).await {
        Ok(session) => {
            let view = lock_session(&session).view();
            HttpResponse::Ok().json(SessionResponse { session_id: id, session: view })
        }
        Err(resp) => resp,
    }
}

async fn delete_session(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    let id = path.into_inner();
    if state.sessions.remove(&id).await {
        HttpResponse::NoContent().finish()
    } else {
        session_not_found(&id)
    }
}

/// Toggle a quiz card
///
/// POST /api/v1/sessions/{id}/styles/toggle
///
/// Request body:
/// ```json
/// { "style_id": "3" }
/// ```
async fn toggle_style(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: web::Json<ToggleStyleRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return error_response(
            actix_web::http::StatusCode::BAD_REQUEST,
            "Validation failed",
            errors.to_string(),
        );
    }

    let id = path.into_inner();
    let session = match lookup(&state, &id).await {
        Ok(session) => session,
        Err(resp) => return resp,
    };

    let mut guard = lock_session(&session);
    match guard.toggle_style(state.advisor.catalog(), &req.style_id) {
        Ok(effect) => {
            tracing::debug!("Session {} toggled style {}: {:?}", id, req.style_id, effect);
            HttpResponse::Ok().json(SessionResponse { session_id: id, session: guard.view() })
        }
        Err(e) => session_error(e),
    }
}

/// Run the style-analysis agent over the current selection
async fn analyze_style(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    let id = path.into_inner();
    let session = match lookup(&state, &id).await {
        Ok(session) => session,
        Err(resp) => return resp,
    };

    match state.advisor.analyze_style(&session).await {
        Ok(outcome) => action_response(&outcome, &session),
        Err(e) => {
            tracing::info!("Rejected style analysis for {}: {}", id, e);
            session_error(e)
        }
    }
}

/// Run the store-matching agent against the current profile
async fn match_stores(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    let id = path.into_inner();
    let session = match lookup(&state, &id).await {
        Ok(session) => session,
        Err(resp) => return resp,
    };

    match state.advisor.match_stores(&session).await {
        Ok(outcome) => action_response(&outcome, &session),
        Err(e) => {
            tracing::info!("Rejected store matching for {}: {}", id, e);
            session_error(e)
        }
    }
}

/// Enter the discover screen, matching first if nothing is matched yet
async fn explore_stores(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    let id = path.into_inner();
    let session = match lookup(&state, &id).await {
        Ok(session) => session,
        Err(resp) => return resp,
    };

    match state.advisor.explore_stores(&session).await {
        Ok(Some(outcome)) => action_response(&outcome, &session),
        Ok(None) => HttpResponse::Ok().json(ActionResponse {
            outcome: "skipped".to_string(),
            message: None,
            session: lock_session(&session).view(),
        }),
        Err(e) => session_error(e),
    }
}

/// Store listing
///
/// GET /api/v1/sessions/{id}/stores?filter=Best%20Match
async fn get_stores(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    query: web::Query<StoreListQuery>,
) -> impl Responder {
    let id = path.into_inner();
    let session = match lookup(&state, &id).await {
        Ok(session) => session,
        Err(resp) => return resp,
    };

    let catalog = state.advisor.catalog();
    let filter = DiscoverFilter::parse(query.filter.as_deref());
    let guard = lock_session(&session);

    HttpResponse::Ok().json(StoreListResponse {
        filter: filter.to_string(),
        categories: filter_labels(catalog),
        match_summary: guard.matches().match_summary.clone(),
        stores: list_stores(catalog, guard.matches(), guard.favorites(), &filter),
    })
}

/// Store detail page
async fn get_store(state: web::Data<AppState>, path: web::Path<(Uuid, String)>) -> impl Responder {
    let (id, store_id) = path.into_inner();
    let session = match lookup(&state, &id).await {
        Ok(session) => session,
        Err(resp) => return resp,
    };

    let Some(store) = state.advisor.catalog().store(&store_id) else {
        return session_error(SessionError::UnknownStore(store_id));
    };

    let guard = lock_session(&session);
    HttpResponse::Ok().json(listing_for(store, guard.matches(), guard.favorites()))
}

async fn get_favorites(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    let id = path.into_inner();
    let session = match lookup(&state, &id).await {
        Ok(session) => session,
        Err(resp) => return resp,
    };

    let guard = lock_session(&session);
    HttpResponse::Ok().json(favorite_stores(state.advisor.catalog(), guard.matches(), guard.favorites()))
}

/// Toggle a store in the favorites list
///
/// POST /api/v1/sessions/{id}/favorites/toggle
///
/// Request body:
/// ```json
/// { "store_id": "s1" }
/// ```
async fn toggle_favorite(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: web::Json<ToggleFavoriteRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return error_response(
            actix_web::http::StatusCode::BAD_REQUEST,
            "Validation failed",
            errors.to_string(),
        );
    }

    let id = path.into_inner();
    let session = match lookup(&state, &id).await {
        Ok(session) => session,
        Err(resp) => return resp,
    };

    let mut guard = lock_session(&session);
    match guard.toggle_favorite(state.advisor.catalog(), &req.store_id) {
        Ok(is_favorite) => HttpResponse::Ok().json(serde_json::json!({
            "store_id": req.store_id,
            "is_favorite": is_favorite,
            "favorites": guard.favorites(),
        })),
        Err(e) => session_error(e),
    }
}

async fn retake_quiz(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    let id = path.into_inner();
    let session = match lookup(&state, &id).await {
        Ok(session) => session,
        Err(resp) => return resp,
    };

    let mut guard = lock_session(&session);
    guard.retake_quiz();
    tracing::info!("Session {} retook the quiz", id);
    HttpResponse::Ok().json(SessionResponse { session_id: id, session: guard.view() })
}

/// Switch sample-data mode
///
/// POST /api/v1/sessions/{id}/sample
///
/// Request body:
/// ```json
/// { "enabled": true }
/// ```
async fn set_sample_data(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: web::Json<SampleDataRequest>,
) -> impl Responder {
    let id = path.into_inner();
    let session = match lookup(&state, &id).await {
        Ok(session) => session,
        Err(resp) => return resp,
    };

    let mut guard = lock_session(&session);
    guard.set_sample_data(req.enabled);
    HttpResponse::Ok().json(SessionResponse { session_id: id, session: guard.view() })
}

async fn dismiss_error(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    let id = path.into_inner();
    let session = match lookup(&state, &id).await {
        Ok(session) => session,
        Err(resp) => return resp,
    };

    lock_session(&session).dismiss_error();
    HttpResponse::NoContent().finish()
}
