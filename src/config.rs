//! 配置加载
//!
//! 可选的 TOML 配置文件 (~/.config/tracalorie/config.toml)，
//! 提供日志级别和启动时预置的条目。预置条目只读入内存，从不写回。

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::models::ItemStore;

/// 预置条目
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedItem {
    pub name: String,
    pub calories: u32,
}

/// 配置文件结构
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: Option<String>,
    pub items: Vec<SeedItem>,
}

/// 获取默认配置文件路径
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tracalorie").join("config.toml"))
}

/// 从TOML文件加载配置，文件不存在时返回默认配置
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("无法读取配置文件 {}", path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("无法解析配置文件 {}", path.display()))?;

    Ok(config)
}

impl Config {
    /// 用预置条目构建条目控制器，无效条目记录警告后跳过
    pub fn build_store(&self) -> ItemStore {
        let mut store = ItemStore::new();
        for seed in &self.items {
            match store.add_item(&seed.name, &seed.calories.to_string()) {
                Ok(item) => log::debug!("Seeded item {} ({})", item.id, item.name),
                Err(err) => log::warn!("Skipping seed item {:?}: {}", seed.name, err),
            }
        }
        store.total_calories();
        store
    }
}
