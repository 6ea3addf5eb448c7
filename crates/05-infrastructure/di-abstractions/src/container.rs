//! 依赖注入容器抽象接口
//!
//! 提供依赖注入容器的核心抽象

use crate::phases::LifecyclePhaseRunner;
use crate::registry::ComponentRegistry;
use crate::resolver::DependencyInjector;
use serde::Serialize;

/// 依赖注入容器 trait
///
/// 持有注册表与三个生命周期桶的单一入口
pub trait DiContainer: ComponentRegistry + DependencyInjector + LifecyclePhaseRunner {
    /// 获取容器统计信息
    fn stats(&self) -> ContainerStats;
}

/// 容器统计信息
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContainerStats {
    /// 已注册绑定数量
    pub registered_bindings: usize,
    /// 注入调用次数（成功完成的）
    pub injection_calls: usize,
    /// 已填充的注入点数量
    pub sites_filled: usize,
    /// 解析失败次数
    pub resolution_errors: usize,
    /// 预初始化桶成员数量
    pub pre_initialize_members: usize,
    /// 初始化桶成员数量
    pub initialize_members: usize,
    /// 后初始化桶成员数量
    pub post_initialize_members: usize,
}

impl ContainerStats {
    /// 三个生命周期桶的成员总数
    pub fn lifecycle_members(&self) -> usize {
        self.pre_initialize_members + self.initialize_members + self.post_initialize_members
    }
}
