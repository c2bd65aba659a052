use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 最新坐标的状态
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GpsStatusDto {
    /// 进程启动以来接受的更新次数
    pub updates: u64,
    /// 最近一次更新的 Unix 时间戳(秒)，从未更新时为 null
    pub last_updated: Option<i64>,
    /// 超过过期窗口未收到更新
    pub stale: bool,
}

/// 地图前端的轮询配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClientConfigDto {
    pub gps_url: String,
    pub poll_interval_ms: u64,
}
