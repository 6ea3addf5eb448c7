//! # Scene Composition
//!
//! 场景组合层，负责配置加载、日志初始化以及把容器接到宿主的唤醒回调上。
//!
//! ## 主要组件
//!
//! - [`SceneSettings`] - 场景配置（TOML 文件加 `SCENE_DI__` 环境变量）
//! - [`LoggingConfig`] / [`init_logging`] - 日志初始化
//! - [`ComponentInjector`] / [`InjectedBehaviour`] - 宿主适配层
//! - [`SceneBootstrapper`] - 场景启动器

pub mod bootstrapper;
pub mod logging;
pub mod settings;
pub mod shims;

pub use bootstrapper::{SceneBootstrapper, SceneReport};
pub use logging::{init_logging, LoggingConfig};
pub use settings::{LoggingSection, SceneSection, SceneSettings};
pub use shims::{ComponentInjector, InjectedBehaviour};
