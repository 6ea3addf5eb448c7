//! 场景启动器

use crate::logging::init_logging;
use crate::settings::SceneSettings;
use crate::shims::ComponentInjector;
use di_abstractions::{ContainerStats, DiContainer, LifecyclePhaseRunner};
use di_common::BootstrapResult;
use di_impl::DiContainerImpl;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// 场景启动器
///
/// 负责协调场景的启动顺序：创建容器（可选安装全局访问点），由调用方注册服务，
/// 再唤醒全部组件注入器，最后按顺序运行一次三个生命周期阶段。
#[derive(Debug)]
pub struct SceneBootstrapper {
    settings: SceneSettings,
    container: Arc<DiContainerImpl>,
    injectors: Vec<ComponentInjector>,
}

/// 场景启动报告
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SceneReport {
    /// 场景名称
    pub scene: String,
    /// 注入的组件数量
    pub components_injected: usize,
    /// 是否运行了生命周期阶段
    pub phases_run: bool,
    /// 预初始化调用数量
    pub pre_initialized: usize,
    /// 初始化调用数量
    pub initialized: usize,
    /// 后初始化调用数量
    pub post_initialized: usize,
    /// 容器统计
    pub stats: ContainerStats,
}

impl SceneBootstrapper {
    /// 创建场景启动器
    pub fn new(settings: SceneSettings) -> BootstrapResult<Self> {
        let container = if settings.scene.install_global {
            DiContainerImpl::install()?
        } else {
            Arc::new(DiContainerImpl::new())
        };
        info!("创建场景启动器: {}", settings.scene.name);

        Ok(Self {
            settings,
            container,
            injectors: Vec::new(),
        })
    }

    /// 按配置初始化日志
    pub fn init_logging(&self) -> BootstrapResult<()> {
        init_logging(&self.settings.logging_config()?)
    }

    /// 场景配置
    pub fn settings(&self) -> &SceneSettings {
        &self.settings
    }

    /// 容器
    pub fn container(&self) -> &Arc<DiContainerImpl> {
        &self.container
    }

    /// 添加组件注入器
    pub fn add_injector(&mut self, injector: ComponentInjector) -> &mut Self {
        self.injectors.push(injector);
        self
    }

    /// 启动场景
    ///
    /// 按添加顺序唤醒组件注入器，随后（若配置允许）依次运行预初始化、
    /// 初始化和后初始化阶段。
    pub fn start(self) -> BootstrapResult<SceneReport> {
        info!("开始启动场景: {}", self.settings.scene.name);

        let mut components_injected = 0;
        for injector in &self.injectors {
            components_injected += injector.awake(self.container.as_ref())?;
        }

        let phases_run = self.settings.scene.auto_run_phases;
        let (pre_initialized, initialized, post_initialized) = if phases_run {
            (
                self.container.run_pre_init(),
                self.container.run_init(),
                self.container.run_post_init(),
            )
        } else {
            (0, 0, 0)
        };

        let report = SceneReport {
            scene: self.settings.scene.name.clone(),
            components_injected,
            phases_run,
            pre_initialized,
            initialized,
            post_initialized,
            stats: self.container.stats(),
        };
        info!(
            "场景启动完成: {}, 注入组件数量: {}",
            report.scene, report.components_injected
        );
        Ok(report)
    }
}
