use crate::auth::AdminUser;
use crate::errors::AppError;
use crate::models::{
    done, ok, ApiData, ApiMessage, Client, ClientStats, CreateClientRequest, CreateRecordRequest,
    DailyRecord, LoginRequest, SearchQuery, UpdateClientRequest, UpdateRecordRequest,
};
use crate::state::AppState;
use crate::stats::build_client_stats;
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap},
    response::Html,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

const LOGIN_MAX_REQUESTS: u32 = 5;
const LOGIN_WINDOW_MS: u64 = 5 * 60 * 1000;
const CLIENT_API_MAX_REQUESTS: u32 = 50;
const CLIENT_API_WINDOW_MS: u64 = 60 * 1000;

pub async fn index() -> Html<&'static str> {
    Html(render_index())
}

#[derive(Debug, Serialize)]
pub struct LoginData {
    pub user: AdminUser,
    pub token: String,
}

pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<ApiData<LoginData>>, AppError> {
    let ip = client_ip(&headers);
    let allowed = state
        .limiter
        .lock()
        .await
        .check(&format!("login:{ip}"), LOGIN_MAX_REQUESTS, LOGIN_WINDOW_MS);
    if !allowed {
        return Err(AppError::rate_limited(
            "Too many login attempts. Please try again later.",
        ));
    }

    if payload.username.is_empty() || payload.password.is_empty() {
        return Err(AppError::bad_request("Username and password are required"));
    }

    let mut auth = state.auth.lock().await;
    let user = auth
        .verify_credentials(&payload.username, &payload.password)
        .ok_or_else(|| AppError::unauthorized("Invalid credentials"))?;
    let token = auth.issue(&user.username);

    tracing::info!("admin login: {}", user.username);
    Ok(ok(LoginData { user, token }))
}

pub async fn protected(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ApiData<AdminUser>>, AppError> {
    let token = bearer_token(&headers).ok_or_else(|| AppError::unauthorized("Unauthorized"))?;
    let user = state
        .auth
        .lock()
        .await
        .validate(token)
        .ok_or_else(|| AppError::unauthorized("Invalid or expired token"))?;

    Ok(ok(user))
}

pub async fn list_clients(
    State(state): State<AppState>,
) -> Result<Json<ApiData<Vec<Client>>>, AppError> {
    let data = state.data.lock().await;
    Ok(ok(data.list_clients()))
}

pub async fn create_client(
    State(state): State<AppState>,
    Json(payload): Json<CreateClientRequest>,
) -> Result<Json<ApiData<Client>>, AppError> {
    let mut data = state.data.lock().await;
    let client = data.create_client(payload);
    persist_data(&state.data_path, &data).await?;
    Ok(ok(client))
}

pub async fn update_client(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
    Json(payload): Json<UpdateClientRequest>,
) -> Result<Json<ApiData<Client>>, AppError> {
    let mut data = state.data.lock().await;
    let client = data.update_client(&client_id, payload)?;
    persist_data(&state.data_path, &data).await?;
    Ok(ok(client))
}

pub async fn delete_client(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
) -> Result<Json<ApiMessage>, AppError> {
    let mut data = state.data.lock().await;
    data.delete_client(&client_id)?;
    persist_data(&state.data_path, &data).await?;
    Ok(done("Client deleted successfully"))
}

pub async fn list_records(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<ApiData<Vec<DailyRecord>>>, AppError> {
    if Uuid::parse_str(&client_id).is_err() {
        return Err(AppError::forbidden("Invalid client access"));
    }

    let ip = client_ip(&headers);
    let allowed = state.limiter.lock().await.check(
        &format!("client:{client_id}:{ip}"),
        CLIENT_API_MAX_REQUESTS,
        CLIENT_API_WINDOW_MS,
    );
    if !allowed {
        return Err(AppError::rate_limited("Rate limit exceeded"));
    }

    let data = state.data.lock().await;
    Ok(ok(data.list_records(&client_id)))
}

pub async fn create_record(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
    Json(payload): Json<CreateRecordRequest>,
) -> Result<Json<ApiData<DailyRecord>>, AppError> {
    // The store lock spans the comparison lookup and the insert, so two
    // concurrent creations cannot compute against half-written data.
    let mut data = state.data.lock().await;
    let record = data.create_record(&client_id, payload);
    persist_data(&state.data_path, &data).await?;
    Ok(ok(record))
}

pub async fn client_stats(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
) -> Result<Json<ApiData<ClientStats>>, AppError> {
    let data = state.data.lock().await;
    let records = data.list_records(&client_id);
    Ok(ok(build_client_stats(&records)))
}

pub async fn update_record(
    State(state): State<AppState>,
    Path(record_id): Path<String>,
    Json(payload): Json<UpdateRecordRequest>,
) -> Result<Json<ApiData<DailyRecord>>, AppError> {
    let mut data = state.data.lock().await;
    let record = data.update_record(&record_id, payload)?;
    persist_data(&state.data_path, &data).await?;
    Ok(ok(record))
}

pub async fn delete_record(
    State(state): State<AppState>,
    Path(record_id): Path<String>,
) -> Result<Json<ApiMessage>, AppError> {
    let mut data = state.data.lock().await;
    data.delete_record(&record_id)?;
    persist_data(&state.data_path, &data).await?;
    Ok(done("Record deleted successfully"))
}

pub async fn search_records(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ApiData<Vec<DailyRecord>>>, AppError> {
    let client_id = query
        .client_id
        .clone()
        .ok_or_else(|| AppError::bad_request("Client ID is required"))?;

    let data = state.data.lock().await;
    Ok(ok(data.search_records(&client_id, &query)))
}

/// First hop of `x-forwarded-for`, or "unknown" when the header is absent.
fn client_ip(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn client_ip_takes_the_first_forwarded_hop() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.7, 10.0.0.1"),
        );
        assert_eq!(client_ip(&headers), "203.0.113.7");
    }

    #[test]
    fn client_ip_falls_back_to_unknown() {
        assert_eq!(client_ip(&HeaderMap::new()), "unknown");
    }

    #[test]
    fn bearer_token_requires_the_scheme_prefix() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer abc123"),
        );
        assert_eq!(bearer_token(&headers), Some("abc123"));

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("abc123"));
        assert_eq!(bearer_token(&headers), None);
    }
}
