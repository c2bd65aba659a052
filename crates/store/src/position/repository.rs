use crate::{position::model::PositionSnapshot, PositionStore};
use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;

pub type DynPositionRepository = Arc<dyn PositionRepositoryTrait + Send + Sync>;

// 主要用于Service中，表示提供了该Trait功能
#[async_trait]
pub trait PositionRepositoryTrait {
    /// 当前最新载荷
    async fn latest(&self) -> Value;

    /// 载荷及元数据的一致快照
    async fn snapshot(&self) -> PositionSnapshot;

    /// 整体替换最新载荷，返回替换后的快照
    async fn replace(&self, payload: Value) -> PositionSnapshot;
}

#[async_trait]
impl PositionRepositoryTrait for PositionStore {
    async fn latest(&self) -> Value {
        self.latest.read().await.payload.clone()
    }

    async fn snapshot(&self) -> PositionSnapshot {
        self.latest.read().await.clone()
    }

    async fn replace(&self, payload: Value) -> PositionSnapshot {
        let mut guard = self.latest.write().await;
        *guard = PositionSnapshot {
            payload,
            updates: guard.updates + 1,
            last_updated: Some(Utc::now()),
        };

        guard.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::model::Position;
    use serde_json::json;

    fn repository() -> DynPositionRepository {
        Arc::new(PositionStore::new())
    }

    #[tokio::test]
    async fn test_fresh_store_returns_origin() {
        let repo = repository();
        assert_eq!(repo.latest().await, json!({ "lat": 0.0, "lng": 0.0 }));
    }

    #[tokio::test]
    async fn test_write_then_read() {
        let repo = repository();
        let position = Position::new(37.7749, -122.4194);

        repo.replace(position.into()).await;

        assert_eq!(repo.latest().await, json!({ "lat": 37.7749, "lng": -122.4194 }));
    }

    #[tokio::test]
    async fn test_replace_twice_is_same_as_once() {
        let repo = repository();
        let payload = json!({ "lat": 1.5, "lng": 2.5 });

        repo.replace(payload.clone()).await;
        repo.replace(payload.clone()).await;

        assert_eq!(repo.latest().await, payload);
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let repo = repository();
        for i in 1..=5 {
            repo.replace(json!({ "lat": i as f64, "lng": -(i as f64) })).await;
        }

        assert_eq!(repo.latest().await, json!({ "lat": 5.0, "lng": -5.0 }));
    }

    #[tokio::test]
    async fn test_replace_is_wholesale_not_merge() {
        let repo = repository();
        repo.replace(json!({ "lat": 10.0, "lng": 20.0, "alt": 3.0 })).await;
        repo.replace(json!({ "foo": "bar" })).await;

        assert_eq!(repo.latest().await, json!({ "foo": "bar" }));
    }

    #[tokio::test]
    async fn test_snapshot_tracks_updates() {
        let repo = repository();
        assert_eq!(repo.snapshot().await.updates, 0);

        let after = repo.replace(json!({ "lat": 1.0, "lng": 1.0 })).await;
        assert_eq!(after.updates, 1);
        assert!(after.last_updated.is_some());

        repo.replace(json!(null)).await;
        let snapshot = repo.snapshot().await;
        assert_eq!(snapshot.updates, 2);
        assert_eq!(snapshot.payload, json!(null));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_writes_never_tear() {
        let repo = repository();
        let a = json!({ "lat": 11.0, "lng": 11.0 });
        let b = json!({ "lat": 22.0, "lng": 22.0 });

        let mut handles = Vec::new();
        for i in 0..200 {
            let repo = repo.clone();
            let payload = if i % 2 == 0 { a.clone() } else { b.clone() };
            handles.push(tokio::spawn(async move {
                repo.replace(payload).await;
                repo.latest().await
            }));
        }

        for handle in handles {
            let seen = handle.await.unwrap();
            assert!(seen == a || seen == b, "torn value observed: {}", seen);
        }

        let last = repo.latest().await;
        assert!(last == a || last == b);
        assert_eq!(repo.snapshot().await.updates, 200);
    }
}
