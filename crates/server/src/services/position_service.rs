use crate::dtos::gps_dto::GpsStatusDto;
use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use std::{sync::Arc, time::Duration};
use store::DynPositionRepository;
use tracing::info;

pub type DynPositionService = Arc<dyn PositionServiceTrait + Send + Sync>;

#[async_trait]
pub trait PositionServiceTrait {
    /// 原样保存上报内容，无条件替换上一个值
    async fn accept_update(&self, payload: Value);

    async fn read_latest(&self) -> Value;

    async fn status(&self) -> GpsStatusDto;
}

#[derive(Clone)]
pub struct PositionService {
    repository: DynPositionRepository,
    stale_after: Duration,
}

impl PositionService {
    pub fn new(repository: DynPositionRepository, stale_after: Duration) -> Self {
        Self { repository, stale_after }
    }
}

#[async_trait]
impl PositionServiceTrait for PositionService {
    async fn accept_update(&self, payload: Value) {
        info!("📡 Received GPS Data: {}", payload);

        let snapshot = self.repository.replace(payload).await;

        tracing::debug!("GPS update #{} stored", snapshot.updates);
    }

    async fn read_latest(&self) -> Value {
        self.repository.latest().await
    }

    async fn status(&self) -> GpsStatusDto {
        let snapshot = self.repository.snapshot().await;

        GpsStatusDto {
            updates: snapshot.updates,
            last_updated: snapshot.last_updated.map(|at| at.timestamp()),
            stale: snapshot.is_stale(Utc::now(), self.stale_after),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use store::PositionStore;

    fn service(stale_after: Duration) -> PositionService {
        PositionService::new(Arc::new(PositionStore::new()), stale_after)
    }

    #[tokio::test]
    async fn test_status_before_any_update() {
        let status = service(Duration::from_secs(60)).status().await;

        assert_eq!(status.updates, 0);
        assert_eq!(status.last_updated, None);
        assert!(status.stale);
    }

    #[tokio::test]
    async fn test_status_after_update() {
        let service = service(Duration::from_secs(60));
        service.accept_update(json!({ "lat": 48.8584, "lng": 2.2945 })).await;

        let status = service.status().await;
        assert_eq!(status.updates, 1);
        assert!(status.last_updated.is_some());
        assert!(!status.stale);
    }

    #[tokio::test]
    async fn test_unvalidated_payload_passthrough() {
        let service = service(Duration::from_secs(60));
        service.accept_update(json!({ "foo": "bar" })).await;

        assert_eq!(service.read_latest().await, json!({ "foo": "bar" }));
    }
}
