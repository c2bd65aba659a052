use crate::{router::AppRouter, services::Services};
use anyhow::Context;
use axum::serve;
use std::net::SocketAddr;
use tokio::signal;
use tracing::info;

pub struct ApplicationServer;

impl ApplicationServer {
    pub async fn serve(services: Services) -> anyhow::Result<()> {
        // 日志初始化在 gps-relay/src/main.rs 中完成
        let address = services.config.listen_address();
        let tcp_listener = tokio::net::TcpListener::bind(&address)
            .await
            .with_context(|| format!("🔴 Failed to bind TCP listener on {}", address))?;

        let local_addr = tcp_listener.local_addr().context("🔴 Failed to get local address")?;

        let router = AppRouter::new(services);

        info!("🟢 gps-relay has launched on {local_addr} 🚀");

        serve(tcp_listener, router.into_make_service_with_connect_info::<SocketAddr>())
            .with_graceful_shutdown(Self::shutdown_signal())
            .await
            .context("🔴 Failed to start server")?;

        Ok(())
    }

    async fn shutdown_signal() {
        let ctrl_c = async {
            if let Err(e) = signal::ctrl_c().await {
                tracing::error!("🔴 Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        };

        #[cfg(unix)]
        let terminate = async {
            match signal::unix::signal(signal::unix::SignalKind::terminate()) {
                Ok(mut stream) => {
                    stream.recv().await;
                }
                Err(e) => {
                    tracing::error!("🔴 Failed to install signal handler: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {},
            _ = terminate => {},
        }

        tracing::warn!("❌ Signal received, starting graceful shutdown...");
    }
}
