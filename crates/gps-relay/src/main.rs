use anyhow::Result;
use clap::Parser;
use server::{app::ApplicationServer, monitor::StalenessMonitor, services::Services};
use std::sync::Arc;
use store::PositionStore;
use tokio::task::JoinSet;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use utils::{AppConfig, Logger};

#[tokio::main]
async fn main() -> Result<()> {
    let relay = GpsRelay::new();
    relay.run().await
}

pub struct GpsRelay {
    services: Services,
    config: Arc<AppConfig>,
    _guard: WorkerGuard,
}

impl GpsRelay {
    fn new() -> Self {
        let config = GpsRelay::with_config();
        let guard = Logger::new(config.cargo_env, config.log_dir.clone());
        let services = GpsRelay::with_services(config.clone());

        Self {
            services,
            config,
            _guard: guard,
        }
    }

    /// 1. 启动 api (收到退出信号后优雅关闭)
    /// 2. 启动过期监控
    /// 任一任务结束即整体退出
    pub async fn run(self) -> Result<()> {
        let mut set = JoinSet::new();

        let monitor = StalenessMonitor::new(self.services.position.clone(), self.config.monitor_interval());
        set.spawn(monitor.run());

        let services = self.services.clone();
        set.spawn(async move { ApplicationServer::serve(services).await });

        let outcome = match set.join_next().await {
            Some(Ok(Ok(()))) => {
                info!("🔔 Task completed, stopping remaining tasks...");
                Ok(())
            }
            Some(Ok(Err(e))) => {
                error!("🔴 Task failed: {:?}", e);
                Err(e)
            }
            Some(Err(e)) => {
                error!("🔴 Task panicked: {}", e);
                Err(e.into())
            }
            None => Ok(()),
        };

        set.shutdown().await;
        info!("👋 gps-relay stopped");

        outcome
    }
}

impl GpsRelay {
    fn with_config() -> Arc<AppConfig> {
        // 根据 CARGO_ENV 加载对应的环境配置文件
        utils::EnvLoader::load_env_file().ok();
        Arc::new(AppConfig::parse())
    }

    fn with_services(config: Arc<AppConfig>) -> Services {
        let store = Arc::new(PositionStore::new());
        info!("🧭 Position store initialized with default position (0.0, 0.0)");

        Services::new(store, config)
    }
}
