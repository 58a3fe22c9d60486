//! Portfolio 终端版
//!
//! 在终端里浏览作品集页面：区块高亮、入场揭示、平滑滚动、
//! 联系表单与装饰效果都由 `portfolio-core` 的控制器驱动。

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use portfolio_core::traits::{SimulatedContactBackend, UiAvatarsService};
use portfolio_core::{ContactBackend, PortfolioConfig};
use tokio::sync::mpsc;

use backend::{ConfigService, LocalConfigService, SubmissionDispatcher};
use util::{init_logging, init_terminal, restore_terminal};

#[tokio::main]
async fn main() -> Result<()> {
    // 1. 日志与配置（终端接管之前，出错时还能看到信息）
    let config_service = LocalConfigService::default();
    let log_path = init_logging(config_service.dir())?;
    tracing::info!("Logging to {}", log_path.display());

    let config = load_config(&config_service);

    // 2. 后端
    let backend: Arc<dyn ContactBackend> =
        Arc::new(SimulatedContactBackend::new(config.submit_latency()));
    let (tx, mut rx) = mpsc::unbounded_channel();
    let dispatcher = SubmissionDispatcher::new(backend, config.submit_timeout(), tx);

    // 3. 初始化终端
    let mut terminal = init_terminal()?;
    let size = terminal.size()?;

    // 4. 创建应用实例
    let mut app = model::App::new(
        config,
        Arc::new(UiAvatarsService::default()),
        size.width,
        size.height,
        Instant::now(),
    );

    // 5. 运行主循环
    let result = app::run(&mut terminal, &mut app, &dispatcher, &mut rx);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    tracing::info!("Portfolio exited");
    result
}

/// 读取配置；首次运行时写出默认配置，读取失败则使用默认值
fn load_config(service: &LocalConfigService) -> PortfolioConfig {
    let first_run = !service.path().exists();

    match service.load() {
        Ok(config) => {
            if first_run {
                if let Err(e) = service.save(&config) {
                    log::warn!("Could not write default config: {e:#}");
                }
            }
            config
        }
        Err(e) => {
            log::error!("Invalid config, using defaults: {e:#}");
            PortfolioConfig::default()
        }
    }
}
