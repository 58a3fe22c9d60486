//! 配置服务

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use portfolio_core::PortfolioConfig;

/// 配置文件名
const CONFIG_FILE: &str = "config.json";

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<PortfolioConfig>;

    /// 保存配置
    fn save(&self, config: &PortfolioConfig) -> Result<()>;
}

/// 本地配置服务：`<config_dir>/portfolio/config.json`
pub struct LocalConfigService {
    dir: PathBuf,
}

impl LocalConfigService {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// 平台默认配置目录；取不到时退回当前目录
    pub fn default_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("portfolio")
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE)
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new(Self::default_dir())
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<PortfolioConfig> {
        let path = self.path();
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(PortfolioConfig::default());
        }

        let config = PortfolioConfig::load_from_path(&path)
            .with_context(|| format!("Failed to load config {}", path.display()))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    fn save(&self, config: &PortfolioConfig) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create {}", self.dir.display()))?;
        let json = serde_json::to_string_pretty(config)?;
        std::fs::write(self.path(), json)
            .with_context(|| format!("Failed to write {}", self.path().display()))?;
        Ok(())
    }
}
