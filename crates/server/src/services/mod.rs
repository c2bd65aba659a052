pub mod position_service;

use position_service::{DynPositionService, PositionService};
use std::sync::Arc;
use store::{DynPositionRepository, PositionStore};
use tracing::info;
use utils::AppConfig;

#[derive(Clone)]
pub struct Services {
    pub position: DynPositionService,
    pub config: Arc<AppConfig>,
}

impl Services {
    pub fn new(store: Arc<PositionStore>, config: Arc<AppConfig>) -> Self {
        let repository: DynPositionRepository = store;
        let position = Arc::new(PositionService::new(repository, config.stale_after())) as DynPositionService;

        info!("🧠 Services initialized");

        Self { position, config }
    }

    /// 使用全新的内存存储（用于测试）
    pub fn in_memory(config: AppConfig) -> Self {
        Self::new(Arc::new(PositionStore::new()), Arc::new(config))
    }
}
