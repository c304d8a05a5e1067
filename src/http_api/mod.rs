use std::{net::SocketAddr, sync::Arc};

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::{
    AdaptiveOptions, CalendarEntry, CalendarError, Locale, PlanDocument, PlanError, PlanRequest,
    adaptive::{DEFAULT_FOCUS_AREA, DEFAULT_MINUTES_PER_WEEK, DEFAULT_WEEKS, check_weeks},
    calendar::{parse_start_date, project_calendar},
    render::render_document,
};

#[derive(Clone)]
pub struct AppState {
    locale: Arc<RwLock<Locale>>,
}

impl AppState {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale: Arc::new(RwLock::new(locale)),
        }
    }

    fn locale(&self) -> Locale {
        *self.locale.read()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

#[derive(Debug)]
enum ApiError {
    Invalid(String),
    Internal(String),
}

impl ApiError {
    fn invalid(message: impl Into<String>) -> Self {
        ApiError::Invalid(message.into())
    }
}

impl From<PlanError> for ApiError {
    fn from(value: PlanError) -> Self {
        ApiError::Invalid(value.to_string())
    }
}

impl From<CalendarError> for ApiError {
    fn from(value: CalendarError) -> Self {
        let message = value.to_string();
        match value {
            CalendarError::InvalidStartDate(_) | CalendarError::OutOfRange { .. } => {
                ApiError::Invalid(message)
            }
            CalendarError::DataFrame(_) => ApiError::Internal(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Invalid(message) => {
                let body = Json(ErrorBody {
                    error: "invalid_request",
                    message,
                });
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            ApiError::Internal(message) => {
                let body = Json(ErrorBody {
                    error: "internal_error",
                    message,
                });
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}

/// Query string shared by every plan endpoint. `mode` selects the generator;
/// the remaining fields only apply to the adaptive one.
#[derive(Debug, Deserialize)]
struct PlanQuery {
    mode: Option<String>,
    minutes_per_week: Option<i64>,
    focus: Option<String>,
    weeks: Option<u32>,
    start: Option<String>,
}

impl PlanQuery {
    fn adaptive_options(&self) -> Result<AdaptiveOptions, ApiError> {
        let weeks = check_weeks(self.weeks.unwrap_or(DEFAULT_WEEKS))?;
        Ok(AdaptiveOptions::new(
            self.minutes_per_week.unwrap_or(DEFAULT_MINUTES_PER_WEEK),
            self.focus.clone().unwrap_or_else(|| DEFAULT_FOCUS_AREA.to_string()),
            weeks,
        ))
    }

    fn request(&self) -> Result<PlanRequest, ApiError> {
        match self.mode.as_deref().map(str::trim) {
            None | Some("") | Some("fixed") => Ok(PlanRequest::Fixed),
            Some("adaptive") => Ok(PlanRequest::Adaptive(self.adaptive_options()?)),
            Some(other) => Err(ApiError::invalid(format!(
                "unknown mode '{other}' (expected fixed or adaptive)"
            ))),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct LocalePayload {
    locale: Locale,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/locale", get(get_locale).put(update_locale))
        .route("/schedule/fixed", get(fixed_schedule))
        .route("/schedule/adaptive", get(adaptive_schedule))
        .route("/schedule/table", get(schedule_table))
        .route("/calendar", get(calendar))
        .with_state(state)
}

pub async fn serve(addr: SocketAddr, locale: Locale) -> std::io::Result<()> {
    let state = AppState::new(locale);
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, %locale, "study planner HTTP API listening");
    axum::serve(listener, app).await
}

fn build_document(state: &AppState, request: &PlanRequest) -> Result<PlanDocument, ApiError> {
    let catalog = state.locale().catalog();
    let items = request.build(catalog)?;
    Ok(PlanDocument {
        title: request.title(catalog).to_string(),
        items,
    })
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn get_locale(State(state): State<AppState>) -> Json<LocalePayload> {
    Json(LocalePayload {
        locale: state.locale(),
    })
}

async fn update_locale(
    State(state): State<AppState>,
    Json(payload): Json<LocalePayload>,
) -> Json<LocalePayload> {
    *state.locale.write() = payload.locale;
    Json(payload)
}

async fn fixed_schedule(State(state): State<AppState>) -> Result<Json<PlanDocument>, ApiError> {
    build_document(&state, &PlanRequest::Fixed).map(Json)
}

async fn adaptive_schedule(
    State(state): State<AppState>,
    Query(query): Query<PlanQuery>,
) -> Result<Json<PlanDocument>, ApiError> {
    let request = PlanRequest::Adaptive(query.adaptive_options()?);
    build_document(&state, &request).map(Json)
}

async fn schedule_table(
    State(state): State<AppState>,
    Query(query): Query<PlanQuery>,
) -> Result<Response, ApiError> {
    let document = build_document(&state, &query.request()?)?;
    let body = render_document(&document.title, &document.items);
    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    )
        .into_response())
}

async fn calendar(
    State(state): State<AppState>,
    Query(query): Query<PlanQuery>,
) -> Result<Json<Vec<CalendarEntry>>, ApiError> {
    let start = query
        .start
        .as_deref()
        .ok_or_else(|| ApiError::invalid("missing 'start' query parameter (YYYY-MM-DD)"))?;
    let start = parse_start_date(start)?;
    let document = build_document(&state, &query.request()?)?;
    Ok(Json(project_calendar(&document.items, start)?))
}
