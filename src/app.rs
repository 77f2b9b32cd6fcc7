use crate::api::{create_router, AppState};
use crate::config::Config;
use crate::utils::logging::log_startup;
use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    router: Router,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        let state = AppState::from_config(&config);

        // 扫描可用考试局，仅用于启动日志
        let boards = match state.store.list_boards().await {
            Ok(boards) => boards,
            Err(e) => {
                warn!("⚠️ 扫描大纲目录失败: {}", e);
                Vec::new()
            }
        };
        log_startup(&config, &boards);

        let router = create_router(state, &config.public_dir);

        Ok(Self { config, router })
    }

    /// 运行 HTTP 服务
    pub async fn run(self) -> Result<()> {
        let addr = self.config.bind_addr();

        let listener = match TcpListener::bind(&addr).await {
            Ok(listener) => listener,
            Err(e) => {
                error!("❌ 无法监听 {}: {}", addr, e);
                if e.kind() == std::io::ErrorKind::AddrInUse {
                    error!("端口 {} 已被占用，可以通过 PORT 环境变量换一个端口", self.config.port);
                }
                return Err(e).with_context(|| format!("无法监听 {}", addr));
            }
        };

        info!("✓ 服务已启动: http://{}", addr);

        axum::serve(listener, self.router)
            .await
            .context("HTTP 服务异常退出")?;

        Ok(())
    }
}
