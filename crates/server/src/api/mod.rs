pub mod gps_controller;

use axum::routing::{get, Router};

/// 系统健康检查
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "服务器运行正常", body = String)
    ),
    tag = "系统状态"
)]
pub async fn health() -> &'static str {
    "Server is running! 🚀"
}

pub fn app() -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(gps_controller::GpsController::app())
}
