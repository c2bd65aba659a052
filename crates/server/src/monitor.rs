// 过期监控: 定期检查最新坐标是否长时间未更新
// - 进入过期状态时告警一次，恢复更新后记录一次
use crate::services::position_service::DynPositionService;
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{info, warn};

pub struct StalenessMonitor {
    position: DynPositionService,
    period: Duration,
    stale: bool,
}

impl StalenessMonitor {
    pub fn new(position: DynPositionService, period: Duration) -> Self {
        Self {
            position,
            period,
            // 启动时尚无更新，不把这个状态当作告警
            stale: true,
        }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        info!("⏳ Staleness monitor checking every {}s", self.period.as_secs());

        let mut ticker = interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            self.check().await;
        }
    }

    /// 执行一次检查，返回当前是否过期
    pub async fn check(&mut self) -> bool {
        let status = self.position.status().await;

        match (self.stale, status.stale) {
            (false, true) => warn!(
                "⚠️ No GPS update received recently (last update at {:?}, {} updates total)",
                status.last_updated, status.updates
            ),
            (true, false) => info!("🟢 GPS updates flowing ({} updates total)", status.updates),
            _ => {}
        }

        self.stale = status.stale;
        self.stale
    }
}
