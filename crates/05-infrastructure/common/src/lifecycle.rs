//! 组件生命周期能力
//!
//! 容器按固定顺序运行三个初始化阶段：预初始化 → 初始化 → 后初始化。
//! 注册实例可以实现其中任意几个能力，注入完成后被归入对应的生命周期桶。

use std::fmt;
use std::sync::Arc;

/// 预初始化能力
pub trait PreInitializable: Send + Sync {
    /// 预初始化
    fn pre_initialize(&self);
}

/// 初始化能力
pub trait Initializable: Send + Sync {
    /// 初始化
    fn initialize(&self);
}

/// 后初始化能力
pub trait PostInitializable: Send + Sync {
    /// 后初始化
    fn post_initialize(&self);
}

/// 注入完成回调
///
/// 由宿主适配层（如 `ComponentInjector`）在单个对象注入完成后立即调用，
/// 不属于生命周期桶。
pub trait OnInjected: Send + Sync {
    /// 注入完成
    fn on_injected(&self);
}

/// 生命周期阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecyclePhase {
    /// 预初始化
    PreInitialize,
    /// 初始化
    Initialize,
    /// 后初始化
    PostInitialize,
}

impl LifecyclePhase {
    /// 按运行顺序排列的全部阶段
    pub const ALL: [Self; 3] = [Self::PreInitialize, Self::Initialize, Self::PostInitialize];

    /// 阶段名称
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PreInitialize => "pre_initialize",
            Self::Initialize => "initialize",
            Self::PostInitialize => "post_initialize",
        }
    }
}

impl fmt::Display for LifecyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 生命周期挂钩
///
/// 描述一个注入目标实现了哪些生命周期能力。每个能力以共享引用的形式保存，
/// 以便同一对象可以同时进入多个生命周期桶。
#[derive(Clone, Default)]
pub struct LifecycleHooks {
    /// 预初始化能力
    pub pre_initialize: Option<Arc<dyn PreInitializable>>,
    /// 初始化能力
    pub initialize: Option<Arc<dyn Initializable>>,
    /// 后初始化能力
    pub post_initialize: Option<Arc<dyn PostInitializable>>,
}

impl LifecycleHooks {
    /// 创建空的生命周期挂钩
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置预初始化能力
    pub fn with_pre_initialize(mut self, hook: Arc<dyn PreInitializable>) -> Self {
        self.pre_initialize = Some(hook);
        self
    }

    /// 设置初始化能力
    pub fn with_initialize(mut self, hook: Arc<dyn Initializable>) -> Self {
        self.initialize = Some(hook);
        self
    }

    /// 设置后初始化能力
    pub fn with_post_initialize(mut self, hook: Arc<dyn PostInitializable>) -> Self {
        self.post_initialize = Some(hook);
        self
    }

    /// 是否没有任何生命周期能力
    pub fn is_empty(&self) -> bool {
        self.pre_initialize.is_none() && self.initialize.is_none() && self.post_initialize.is_none()
    }

    /// 已实现的阶段列表
    pub fn phases(&self) -> Vec<LifecyclePhase> {
        let mut phases = Vec::with_capacity(3);
        if self.pre_initialize.is_some() {
            phases.push(LifecyclePhase::PreInitialize);
        }
        if self.initialize.is_some() {
            phases.push(LifecyclePhase::Initialize);
        }
        if self.post_initialize.is_some() {
            phases.push(LifecyclePhase::PostInitialize);
        }
        phases
    }
}

impl fmt::Debug for LifecycleHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LifecycleHooks")
            .field("phases", &self.phases())
            .finish()
    }
}
