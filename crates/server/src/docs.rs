use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "GPS Relay API",
        description = "接收追踪设备上报的最新坐标，并提供给浏览器地图轮询",
        version = "0.1.0"
    ),
    paths(
        crate::api::health,
        crate::api::gps_controller::update_gps,
        crate::api::gps_controller::get_gps,
        crate::api::gps_controller::get_gps_status,
        crate::api::gps_controller::get_client_config,
    ),
    components(
        schemas(
            store::Position,
            crate::dtos::gps_dto::GpsStatusDto,
            crate::dtos::gps_dto::ClientConfigDto,
        )
    ),
    tags(
        (name = "gps", description = "坐标上报与查询"),
        (name = "系统状态", description = "健康检查")
    )
)]
pub struct ApiDoc;
