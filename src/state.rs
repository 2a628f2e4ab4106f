use crate::auth::AuthService;
use crate::models::AppData;
use crate::ratelimit::RateLimiter;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

/// Shared application services. Everything mutable lives here rather than in
/// process-wide statics, so each test can build an isolated instance.
#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub data: Arc<Mutex<AppData>>,
    pub auth: Arc<Mutex<AuthService>>,
    pub limiter: Arc<Mutex<RateLimiter>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, data: AppData) -> Self {
        Self {
            data_path,
            data: Arc::new(Mutex::new(data)),
            auth: Arc::new(Mutex::new(AuthService::new())),
            limiter: Arc::new(Mutex::new(RateLimiter::new())),
        }
    }
}
