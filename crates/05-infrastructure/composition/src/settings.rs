//! 场景配置
//!
//! 配置来源按优先级从低到高：内置默认值、可选的 TOML 文件、`SCENE_DI__` 前缀的
//! 环境变量（层级用 `__` 分隔，例如 `SCENE_DI__LOGGING__LEVEL=debug`）。

use crate::logging::LoggingConfig;
use config::{Config, Environment, File, FileFormat};
use di_common::{BootstrapError, BootstrapResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// 环境变量前缀
pub const ENV_PREFIX: &str = "SCENE_DI";

/// 环境变量层级分隔符
pub const ENV_SEPARATOR: &str = "__";

/// 场景配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneSettings {
    /// 日志配置节
    pub logging: LoggingSection,
    /// 场景配置节
    pub scene: SceneSection,
}

/// 日志配置节
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// 日志级别名称
    pub level: String,
    /// 是否使用 JSON 格式
    pub json: bool,
    /// 是否显示目标
    pub show_target: bool,
    /// 是否显示线程ID
    pub show_thread_ids: bool,
    /// 是否显示文件名
    pub show_file: bool,
    /// 是否显示行号
    pub show_line_number: bool,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            show_target: true,
            show_thread_ids: false,
            show_file: false,
            show_line_number: false,
        }
    }
}

/// 场景配置节
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneSection {
    /// 场景名称
    pub name: String,
    /// 注入完成后是否自动运行三个生命周期阶段
    pub auto_run_phases: bool,
    /// 是否安装全局访问点
    pub install_global: bool,
}

impl Default for SceneSection {
    fn default() -> Self {
        Self {
            name: "main".to_string(),
            auto_run_phases: true,
            install_global: true,
        }
    }
}

impl SceneSettings {
    /// 从可选的配置文件和环境变量加载配置
    pub fn load(path: Option<&Path>) -> BootstrapResult<Self> {
        Self::load_with_env(
            path,
            Environment::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        )
    }

    /// 使用指定的环境变量源加载配置
    pub fn load_with_env(path: Option<&Path>, env: Environment) -> BootstrapResult<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            debug!("加载配置文件: {}", path.display());
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }

        let settings: Self = builder
            .add_source(env)
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|e| BootstrapError::ConfigLoadFailed {
                message: e.to_string(),
            })?;

        settings.logging_config()?;
        info!("场景配置加载完成: {}", settings.scene.name);
        Ok(settings)
    }

    /// 转换为日志配置
    pub fn logging_config(&self) -> BootstrapResult<LoggingConfig> {
        let level = tracing::Level::from_str(&self.logging.level).map_err(|_| {
            BootstrapError::InvalidSetting {
                key: "logging.level".to_string(),
                value: self.logging.level.clone(),
            }
        })?;

        Ok(LoggingConfig {
            level,
            show_target: self.logging.show_target,
            show_thread_ids: self.logging.show_thread_ids,
            show_file: self.logging.show_file,
            show_line_number: self.logging.show_line_number,
            json_format: self.logging.json,
        })
    }
}
