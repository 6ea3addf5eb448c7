//! 依赖注入器抽象接口
//!
//! 负责发现注入目标的注入点、从注册表解析实例并赋值

use di_common::{DependencyResult, Injectable, StaticInjectable, TypeKey};
use std::sync::Arc;

/// 依赖注入器 trait
pub trait DependencyInjector: Send + Sync {
    /// 对目标对象执行字段注入
    ///
    /// 从目标的运行时类型开始逐级处理各层声明的注入点，遇到停止类型即结束；
    /// 全部成功后按目标实现的生命周期能力将其加入对应的生命周期桶。
    /// 任何一个注入点解析失败都会立即返回错误，已完成的赋值保留。
    fn inject_at<T>(&self, target: &Arc<T>) -> DependencyResult<()>
    where
        T: Injectable;

    /// 对类型擦除的目标对象执行字段注入
    fn inject_dyn(&self, target: &Arc<dyn Injectable>) -> DependencyResult<()>;

    /// 对类型的静态注入槽执行注入
    fn inject_static_fields<T>(&self) -> DependencyResult<()>
    where
        T: StaticInjectable;

    /// 祖先遍历的停止类型
    fn stop_types(&self) -> Vec<TypeKey>;
}

/// 对象注入能力
///
/// 只暴露注入入口的窄接口，用于向宿主适配层或工厂显式传递注入能力，
/// 而不必交出整个容器。
pub trait ObjectInjector: Send + Sync {
    /// 注入单个对象
    fn inject_object(&self, target: &Arc<dyn Injectable>) -> DependencyResult<()>;
}

impl<I> ObjectInjector for I
where
    I: DependencyInjector,
{
    fn inject_object(&self, target: &Arc<dyn Injectable>) -> DependencyResult<()> {
        self.inject_dyn(target)
    }
}
