//! 组件注册表抽象接口

use di_common::{BindingDescriptor, DependencyResult, Provides, TypeKey};
use std::sync::Arc;

/// 组件注册表 trait
///
/// 单例映射：每个类型键至多绑定一个实例。重复注册同一个键总是返回
/// `DependencyError::DuplicateBinding`，并保留第一次注册的实例。
pub trait ComponentRegistry: Send + Sync {
    /// 默认构造 `T` 并以自身类型注册
    fn register<T>(&self) -> DependencyResult<()>
    where
        T: Default + Send + Sync + 'static;

    /// 默认构造 `C` 并以抽象 `A` 注册
    fn bind<A, C>(&self) -> DependencyResult<()>
    where
        A: ?Sized + Send + Sync + 'static,
        C: Default + Provides<A>;

    /// 以实例自身类型注册已构建的实例
    fn add<T>(&self, instance: Arc<T>) -> DependencyResult<()>
    where
        T: Send + Sync + 'static;

    /// 以指定抽象注册已构建的实例
    fn add_as<A>(&self, instance: Arc<A>) -> DependencyResult<()>
    where
        A: ?Sized + Send + Sync + 'static;

    /// 获取绑定到 `A` 的实例
    fn get<A>(&self) -> DependencyResult<Arc<A>>
    where
        A: ?Sized + Send + Sync + 'static;

    /// 检查组件是否已注册
    fn is_registered<A>(&self) -> bool
    where
        A: ?Sized + 'static,
    {
        self.is_registered_by_key(TypeKey::of::<A>())
    }

    /// 检查组件是否已注册（通过类型键）
    fn is_registered_by_key(&self, key: TypeKey) -> bool;

    /// 获取所有绑定描述符，按类型名称排序
    fn registered_bindings(&self) -> Vec<BindingDescriptor>;
}
