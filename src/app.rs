use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post, put},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/admin/login", post(handlers::login))
        .route(
            "/api/admin/protected",
            get(handlers::protected).post(handlers::protected),
        )
        .route(
            "/api/clients",
            get(handlers::list_clients).post(handlers::create_client),
        )
        .route(
            "/api/clients/:client_id",
            put(handlers::update_client).delete(handlers::delete_client),
        )
        .route(
            "/api/clients/:client_id/records",
            get(handlers::list_records).post(handlers::create_record),
        )
        .route("/api/clients/:client_id/stats", get(handlers::client_stats))
        .route(
            "/api/records/:record_id",
            put(handlers::update_record).delete(handlers::delete_record),
        )
        .route("/api/search/records", get(handlers::search_records))
        .with_state(state)
}
