use crate::{
    dtos::gps_dto::{ClientConfigDto, GpsStatusDto},
    extractors::json_payload::JsonPayload,
    services::Services,
};
use axum::{
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use serde_json::Value;
use store::Position;

/// 接收设备上报的坐标
///
/// 载荷不做任何结构校验，原样保存为最新值。
#[utoipa::path(
    post,
    path = "/update_gps",
    tag = "gps",
    request_body = Position,
    responses(
        (status = 200, description = "已保存为最新坐标", body = String),
        (status = 400, description = "请求体为空或不是合法 JSON")
    )
)]
pub async fn update_gps(
    Extension(services): Extension<Services>,
    JsonPayload(payload): JsonPayload,
) -> (StatusCode, &'static str) {
    services.position.accept_update(payload).await;

    (StatusCode::OK, "GPS Data Updated")
}

/// 获取最新坐标
#[utoipa::path(
    get,
    path = "/gps",
    tag = "gps",
    responses(
        (status = 200, description = "最新保存的载荷，从未更新时为 {lat: 0.0, lng: 0.0}", body = Position)
    )
)]
pub async fn get_gps(Extension(services): Extension<Services>) -> Json<Value> {
    Json(services.position.read_latest().await)
}

#[utoipa::path(
    get,
    path = "/gps/status",
    tag = "gps",
    responses(
        (status = 200, description = "更新次数与新鲜度", body = GpsStatusDto)
    )
)]
pub async fn get_gps_status(Extension(services): Extension<Services>) -> Json<GpsStatusDto> {
    Json(services.position.status().await)
}

/// 地图前端的轮询配置
#[utoipa::path(
    get,
    path = "/client_config",
    tag = "gps",
    responses(
        (status = 200, description = "轮询地址与间隔", body = ClientConfigDto)
    )
)]
pub async fn get_client_config(Extension(services): Extension<Services>) -> Json<ClientConfigDto> {
    Json(ClientConfigDto {
        gps_url: "/gps".to_string(),
        poll_interval_ms: services.config.poll_interval_ms,
    })
}

pub struct GpsController;
impl GpsController {
    pub fn app() -> Router {
        Router::new()
            .route("/update_gps", post(update_gps))
            .route("/gps", get(get_gps))
            .route("/gps/status", get(get_gps_status))
            .route("/client_config", get(get_client_config))
    }
}
