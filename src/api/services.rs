use axum::{
    Json,
    body::Bytes,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Redirect, Response},
};
use std::collections::HashMap;
use tracing::{debug, warn};

use super::{
    error::ApiError,
    models::{
        BangResponse, CustomBangList, HealthResponse, MultiBangParams, NewCustomBang,
        RemovedBangResponse, ResolveResponse, SearchParams,
    },
    pages,
    state::AppState,
    utils,
};
use crate::bangs::BangError;
use crate::engine::{self, ResolvedRequest};
use crate::settings::{SettingsError, SettingsPatch};

/// Settings and custom bang payloads are tiny
const MAX_PAYLOAD_SIZE: usize = 64 * 1024;

/// Search entry point (GET /?q=)
///
/// - empty query: the search surface
/// - single destination: 302 to it
/// - several destinations: the dispatch page, which opens them as tabs
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Response, ApiError> {
    let snapshot = state.settings.snapshot()?;
    let query = params.q.unwrap_or_default();

    match engine::resolve(&query, &snapshot.registry, &snapshot.settings) {
        None => {
            state.metrics.search_page();
            let template = state.config.server.search_template();
            Ok(Html(pages::home(&template, &snapshot.settings, &snapshot.registry)).into_response())
        }
        Some(ResolvedRequest::Single { url, strategy }) => {
            debug!(?strategy, %url, "Redirecting search");
            state.metrics.redirect();
            match utils::redirect(&url) {
                Some(response) => Ok(response),
                None => Ok(Html(pages::redirect(&url)?).into_response()),
            }
        }
        Some(ResolvedRequest::Multi(destination)) => {
            state.metrics.multi_dispatch();
            let host = public_host(&state);
            Ok(Html(pages::dispatch(&destination, &host)?).into_response())
        }
    }
}

/// Multi-bang request form (GET /multibang?q=&bangs=)
///
/// Both parameters are required; a request missing either goes back to `/`.
pub async fn multibang(
    State(state): State<AppState>,
    Query(params): Query<MultiBangParams>,
) -> Result<Response, ApiError> {
    let query = params.q.as_deref().map(str::trim).unwrap_or_default();
    let bangs = params.bangs.as_deref().unwrap_or_default();

    if query.is_empty() || bangs.is_empty() {
        debug!("Multi-bang request without q or bangs, redirecting home");
        return Ok(Redirect::to("/").into_response());
    }

    let snapshot = state.settings.snapshot()?;
    let destination = engine::resolve_destinations(
        query,
        engine::split_triggers(bangs),
        &snapshot.registry,
        &snapshot.settings,
    );

    state.metrics.multi_dispatch();
    let host = public_host(&state);
    Ok(Html(pages::dispatch(&destination, &host)?).into_response())
}

/// Engine decision as JSON (GET /api/resolve?q=)
pub async fn resolve(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, ApiError> {
    let snapshot = state.settings.snapshot()?;
    let query = params.q.unwrap_or_default();
    let result = engine::resolve(&query, &snapshot.registry, &snapshot.settings);

    Ok(Json(ResolveResponse { query, result }))
}

/// Current settings snapshot (GET /api/settings)
pub async fn get_settings(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.settings.settings()?))
}

/// Partial settings update (PUT /api/settings)
pub async fn update_settings(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let patch: SettingsPatch = read_json(&headers, &body)?;
    if patch.is_empty() {
        return Err(ApiError::InvalidPayload("no settings to update".into()));
    }

    let settings = state.settings.update(patch)?;
    state.metrics.settings_changed();

    Ok(Json(settings))
}

/// User-added bangs (GET /api/bangs/custom)
pub async fn list_custom_bangs(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let bangs = state.settings.custom_bangs()?;

    Ok(Json(CustomBangList {
        bangs: bangs.iter().map(BangResponse::from).collect(),
    }))
}

/// Add a custom bang (POST /api/bangs/custom)
pub async fn add_custom_bang(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let request: NewCustomBang = read_json(&headers, &body)?;
    let bang = state
        .settings
        .add_custom_bang(&request.trigger, &request.url_template)?;
    state.metrics.settings_changed();

    Ok((StatusCode::CREATED, Json(BangResponse::from(&bang))))
}

/// Remove a custom bang (DELETE /api/bangs/custom/{trigger})
pub async fn remove_custom_bang(
    State(state): State<AppState>,
    Path(trigger): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let removed = state
        .settings
        .remove_custom_bang(&trigger)
        .map_err(|err| match err {
            SettingsError::Bang(BangError::Unknown(trigger)) => {
                ApiError::NotFound(format!("custom bang !{trigger}"))
            }
            other => other.into(),
        })?;
    state.metrics.settings_changed();

    Ok(Json(RemovedBangResponse {
        removed: BangResponse::from(&removed.bang),
        default_reset: removed.default_reset,
    }))
}

/// Health check endpoint (GET /health)
///
/// Returns 503 Service Unavailable if the settings store cannot be read.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let mut components = HashMap::new();
    components.insert("api".to_string(), "healthy".to_string());

    let store_status = match state.settings.snapshot() {
        Ok(_) => "healthy".to_string(),
        Err(err) => {
            warn!(error = %err, "Settings store health check failed");
            "unhealthy".to_string()
        }
    };
    components.insert("settings_store".to_string(), store_status);

    let all_healthy = components.values().all(|status| status == "healthy");
    let status_code = if all_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "unhealthy" }.to_string(),
        components,
        version: env!("CARGO_PKG_VERSION").to_string(),
        counters: state.metrics.snapshot(),
    };

    (status_code, Json(response))
}

/// Validate Content-Type and size, then deserialize a JSON body
fn read_json<T: serde::de::DeserializeOwned>(headers: &HeaderMap, body: &Bytes) -> Result<T, ApiError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::InvalidPayload("missing Content-Type header".into()))?;
    utils::parse_content_type(content_type)?;
    utils::validate_body_size(body, MAX_PAYLOAD_SIZE)?;

    Ok(serde_json::from_slice(body)?)
}

/// Host shown in the pop-up blocker hint
fn public_host(state: &AppState) -> String {
    url::Url::parse(&state.config.server.public_url)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_else(|| state.config.server.public_url.clone())
}
