//! 组件基础接口定义
//!
//! 提供注入目标的描述表接口和宿主根类型

use crate::injection::InjectionSite;
use crate::lifecycle::{LifecycleHooks, OnInjected};
use crate::metadata::TypeKey;
use std::sync::Arc;

/// 可注入组件 trait
///
/// 每个类型层级只声明自己直接拥有的注入点；祖先层级通过 [`Injectable::base`]
/// 显式给出，注入器从最具体的类型开始逐级向上遍历，直到遇到停止类型。
///
/// 通常通过 `#[derive(Injectable)]` 生成实现，也可以手写。
pub trait Injectable: Send + Sync + 'static {
    /// 运行时类型键
    fn type_key(&self) -> TypeKey {
        TypeKey::of::<Self>()
    }

    /// 当前类型层级直接声明的注入点，按声明顺序排列
    fn declared_sites(&self) -> Vec<InjectionSite<'_>>;

    /// 直接父类型层级
    ///
    /// 返回的链必须是有限的：不能返回 `self`，也不能经由祖先回到自身。
    /// 注入器遍历超过固定层数时以 [`DependencyError::HierarchyTooDeep`] 中止。
    ///
    /// [`DependencyError::HierarchyTooDeep`]: crate::errors::DependencyError::HierarchyTooDeep
    fn base(&self) -> Option<&dyn Injectable> {
        None
    }

    /// 已实现的生命周期能力
    fn lifecycle(self: Arc<Self>) -> LifecycleHooks {
        LifecycleHooks::new()
    }

    /// 注入完成回调
    fn as_on_injected(&self) -> Option<&dyn OnInjected> {
        None
    }
}

/// 静态注入 trait
///
/// 针对类型的静态成员（进程级 `static` 注入槽）而不是实例。
pub trait StaticInjectable: 'static {
    /// 静态注入点
    fn static_sites() -> Vec<InjectionSite<'static>>;
}

/// 抽象提供 trait
///
/// 具体类型 `C` 实现 `Provides<A>` 表示它可以以抽象 `A` 的身份注册，
/// 供 `bind::<A, C>()` 把默认构造的 `Arc<C>` 转换为 `Arc<A>`。
pub trait Provides<A: ?Sized>: Send + Sync + 'static {
    /// 转换为抽象
    fn provide(self: Arc<Self>) -> Arc<A>;
}

impl<T: Send + Sync + 'static> Provides<T> for T {
    fn provide(self: Arc<Self>) -> Arc<T> {
        self
    }
}

/// 宿主组件根类型
///
/// 所有场景组件的最终祖先，默认属于停止类型，注入器不会对其进行检查。
#[derive(Debug, Clone)]
pub struct ComponentBase {
    name: String,
}

impl ComponentBase {
    /// 创建新的组件基础实例
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// 组件名称
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for ComponentBase {
    fn default() -> Self {
        Self::new("Component")
    }
}

impl Injectable for ComponentBase {
    fn declared_sites(&self) -> Vec<InjectionSite<'_>> {
        Vec::new()
    }
}
