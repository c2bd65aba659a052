use std::{path::PathBuf, time::Duration};

#[derive(clap::ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
#[clap(rename_all = "lowercase")]
pub enum CargoEnv {
    #[value(alias = "dev", alias = "Development")]
    Development,
    #[value(alias = "prod", alias = "Production")]
    Production,
    #[value(alias = "Test")]
    Test,
}

/// 环境配置加载器
pub struct EnvLoader;

impl EnvLoader {
    /// 根据 CARGO_ENV 加载对应的环境配置文件
    pub fn load_env_file() -> Result<(), dotenvy::Error> {
        let cargo_env = std::env::var("CARGO_ENV").unwrap_or_else(|_| "development".to_string());
        let env_file = Self::env_file_for(&cargo_env);

        if !std::path::Path::new(env_file).exists() {
            eprintln!("⚠️  配置文件 {} 不存在，尝试加载默认的 .env 文件", env_file);
            if std::path::Path::new(".env").exists() {
                dotenvy::from_filename(".env")?;
                println!("✅ 已加载默认配置文件: .env");
            } else {
                eprintln!("❌ 未找到任何配置文件，使用默认配置");
            }
            return Ok(());
        }

        dotenvy::from_filename(env_file)?;
        println!("✅ 已加载环境配置文件: {} (CARGO_ENV={})", env_file, cargo_env);

        Ok(())
    }

    /// CARGO_ENV -> 配置文件名
    pub fn env_file_for(cargo_env: &str) -> &'static str {
        match cargo_env {
            "production" | "Production" | "prod" => ".env.production",
            "development" | "Development" | "dev" => ".env.development",
            "test" | "Test" => ".env.test",
            _ => {
                println!("⚠️  未知的 CARGO_ENV: {}，使用默认的 .env.development", cargo_env);
                ".env.development"
            }
        }
    }
}

#[derive(clap::Parser, Clone, Debug)]
#[command(name = "gps-relay", about = "Relays the latest GPS fix from a tracker to map viewers")]
pub struct AppConfig {
    #[clap(long, env, value_enum, default_value = "development")]
    pub cargo_env: CargoEnv,

    #[clap(long, env, default_value = "0.0.0.0")]
    pub app_host: String,

    /// 监听端口 (与设备固件约定的 PORT 变量)
    #[clap(long, env = "PORT", default_value = "3010")]
    pub app_port: u16,

    /// 地图前端静态文件目录
    #[clap(long, env, default_value = "web")]
    pub static_dir: PathBuf,

    /// 浏览器轮询 /gps 的间隔(毫秒)
    #[clap(long, env, default_value = "5000")]
    pub poll_interval_ms: u64,

    #[clap(long, env, default_value = "30")]
    pub http_timeout_secs: u64,

    /// 超过该时长没有收到更新即视为过期
    #[clap(long, env, default_value = "60")]
    pub stale_after_secs: u64,

    #[clap(long, env, default_value = "15")]
    pub monitor_interval_secs: u64,

    #[clap(long, env)]
    pub log_dir: Option<PathBuf>,
}

impl AppConfig {
    /// 手动创建配置实例（用于测试）
    pub fn new_for_test() -> Self {
        Self {
            cargo_env: CargoEnv::Development,
            app_host: "127.0.0.1".to_string(),
            app_port: 0,
            static_dir: PathBuf::from("web"),
            poll_interval_ms: 5000,
            http_timeout_secs: 30,
            stale_after_secs: 60,
            monitor_interval_secs: 15,
            log_dir: None,
        }
    }

    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.app_host, self.app_port)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    pub fn stale_after(&self) -> Duration {
        Duration::from_secs(self.stale_after_secs)
    }

    pub fn monitor_interval(&self) -> Duration {
        Duration::from_secs(self.monitor_interval_secs.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults_without_env() {
        let config = AppConfig::try_parse_from(["gps-relay"]).unwrap();

        // PORT 等环境变量可能在CI中被设置，这里只验证未被覆盖的字段
        if std::env::var("PORT").is_err() {
            assert_eq!(config.app_port, 3010);
        }
        if std::env::var("POLL_INTERVAL_MS").is_err() {
            assert_eq!(config.poll_interval_ms, 5000);
        }
        if std::env::var("CARGO_ENV").is_err() {
            assert_eq!(config.cargo_env, CargoEnv::Development);
        }
    }

    #[test]
    fn test_cli_overrides() {
        let config =
            AppConfig::try_parse_from(["gps-relay", "--app-port", "8080", "--cargo-env", "production"]).unwrap();

        assert_eq!(config.app_port, 8080);
        assert_eq!(config.cargo_env, CargoEnv::Production);
    }

    #[test]
    fn test_env_file_names_are_parseable() {
        // 能选中配置文件的 CARGO_ENV 也必须能被解析
        for (value, expected) in [
            ("prod", CargoEnv::Production),
            ("Production", CargoEnv::Production),
            ("dev", CargoEnv::Development),
            ("Development", CargoEnv::Development),
            ("test", CargoEnv::Test),
            ("Test", CargoEnv::Test),
        ] {
            let config = AppConfig::try_parse_from(["gps-relay", "--cargo-env", value]).unwrap();
            assert_eq!(config.cargo_env, expected, "CARGO_ENV={}", value);
        }
    }

    #[test]
    fn test_listen_address() {
        let mut config = AppConfig::new_for_test();
        config.app_port = 3010;
        assert_eq!(config.listen_address(), "127.0.0.1:3010");
    }

    #[test]
    fn test_env_file_for() {
        assert_eq!(EnvLoader::env_file_for("prod"), ".env.production");
        assert_eq!(EnvLoader::env_file_for("test"), ".env.test");
        assert_eq!(EnvLoader::env_file_for("whatever"), ".env.development");
    }

    #[test]
    fn test_monitor_interval_never_zero() {
        let mut config = AppConfig::new_for_test();
        config.monitor_interval_secs = 0;
        assert_eq!(config.monitor_interval(), Duration::from_secs(1));
    }
}
