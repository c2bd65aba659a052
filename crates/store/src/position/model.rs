use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// 设备上报的坐标
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct Position {
    /// 纬度
    pub lat: f64,
    /// 经度
    pub lng: f64,
}

impl Position {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<Position> for Value {
    fn from(position: Position) -> Self {
        serde_json::json!({ "lat": position.lat, "lng": position.lng })
    }
}

/// 存储中的完整状态：最新载荷及其元数据，整体替换
#[derive(Debug, Clone, PartialEq)]
pub struct PositionSnapshot {
    /// 原样保存的上报内容，不一定是 Position 结构
    pub payload: Value,
    /// 进程启动以来接受的更新次数
    pub updates: u64,
    pub last_updated: Option<DateTime<Utc>>,
}

impl Default for PositionSnapshot {
    fn default() -> Self {
        Self {
            payload: Position::default().into(),
            updates: 0,
            last_updated: None,
        }
    }
}

impl PositionSnapshot {
    /// 从未更新，或最近一次更新早于 `max_age`
    pub fn is_stale(&self, now: DateTime<Utc>, max_age: std::time::Duration) -> bool {
        match self.last_updated {
            None => true,
            Some(at) => (now - at).to_std().map(|age| age > max_age).unwrap_or(false),
        }
    }
}
