//! 注入点定义
//!
//! 没有运行时反射，注入目标通过描述表声明自己的注入点：
//! 每个注入点要么是一个 [`Inject`] 字段槽，要么是一个带参数列表的方法。
//! 注入器遍历描述表、按请求的 [`TypeKey`] 从注册表取出实例并赋值。

use crate::errors::{DependencyError, DependencyResult};
use crate::metadata::TypeKey;
use parking_lot::RwLock;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// 类型擦除后的注册实例
///
/// 内部保存的值总是 `Arc<A>`，其中 `A` 是注册时使用的抽象类型。
pub type ErasedInstance = Arc<dyn Any + Send + Sync>;

/// 擦除实例类型
pub fn erase_instance<A>(instance: Arc<A>) -> ErasedInstance
where
    A: ?Sized + Send + Sync + 'static,
{
    Arc::new(instance)
}

/// 还原实例类型
pub fn downcast_instance<A>(instance: &ErasedInstance) -> DependencyResult<Arc<A>>
where
    A: ?Sized + Send + Sync + 'static,
{
    instance
        .downcast_ref::<Arc<A>>()
        .cloned()
        .ok_or_else(|| DependencyError::type_mismatch(std::any::type_name::<A>()))
}

/// 注入字段
///
/// 带注入标记的字段类型。槽位使用内部可变性，因此可以对已共享的目标对象
/// （例如从注册表取出的单例）再次注入；重复注入会重新赋值同一个实例。
/// 支持 `const` 构造，可直接用作 `static` 注入槽。
pub struct Inject<T: ?Sized> {
    slot: RwLock<Option<Arc<T>>>,
}

impl<T: ?Sized> Inject<T> {
    /// 创建空的注入字段
    pub const fn new() -> Self {
        Self {
            slot: parking_lot::const_rwlock(None),
        }
    }

    /// 是否已经注入
    pub fn is_injected(&self) -> bool {
        self.slot.read().is_some()
    }

    /// 获取注入的实例
    pub fn try_get(&self) -> DependencyResult<Arc<T>> {
        self.slot
            .read()
            .clone()
            .ok_or_else(|| DependencyError::NotInjected {
                type_name: std::any::type_name::<T>().to_string(),
            })
    }

    /// 获取注入的实例
    ///
    /// # Panics
    ///
    /// 字段尚未注入时 panic，相当于宿主中对空引用的访问。
    pub fn get(&self) -> Arc<T> {
        match self.try_get() {
            Ok(instance) => instance,
            Err(e) => panic!("{e}"),
        }
    }

    /// 直接设置实例
    pub fn set(&self, instance: Arc<T>) {
        *self.slot.write() = Some(instance);
    }

    /// 是否持有指定实例
    pub fn holds(&self, instance: &Arc<T>) -> bool {
        self.slot
            .read()
            .as_ref()
            .map_or(false, |current| Arc::ptr_eq(current, instance))
    }
}

impl<T: ?Sized> Default for Inject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for Inject<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inject")
            .field("type", &std::any::type_name::<T>())
            .field("injected", &self.is_injected())
            .finish()
    }
}

/// 类型擦除的注入槽
pub trait InjectSlot: Send + Sync {
    /// 请求的类型键
    fn requested_key(&self) -> TypeKey;

    /// 将注册实例写入槽位
    fn assign(&self, instance: &ErasedInstance) -> DependencyResult<()>;
}

impl<T> InjectSlot for Inject<T>
where
    T: ?Sized + Send + Sync + 'static,
{
    fn requested_key(&self) -> TypeKey {
        TypeKey::of::<T>()
    }

    fn assign(&self, instance: &ErasedInstance) -> DependencyResult<()> {
        self.set(downcast_instance::<T>(instance)?);
        Ok(())
    }
}

/// 方法注入的调用函数
type MethodInvoker<'a> = Box<dyn FnOnce(ResolvedArgs) -> DependencyResult<()> + 'a>;

/// 方法注入点
///
/// 参数按声明顺序全部解析成功后才会调用方法。
pub struct MethodSite<'a> {
    params: Vec<TypeKey>,
    invoke: MethodInvoker<'a>,
}

impl<'a> MethodSite<'a> {
    /// 参数类型键
    pub fn params(&self) -> &[TypeKey] {
        &self.params
    }

    /// 以解析后的参数调用方法
    pub fn call(self, args: ResolvedArgs) -> DependencyResult<()> {
        (self.invoke)(args)
    }
}

/// 方法注入的已解析参数
pub struct ResolvedArgs {
    method: &'static str,
    values: Vec<ErasedInstance>,
}

impl ResolvedArgs {
    /// 创建参数列表
    pub fn new(method: &'static str, values: Vec<ErasedInstance>) -> Self {
        Self { method, values }
    }

    /// 按索引取出参数
    pub fn get<A>(&self, index: usize) -> DependencyResult<Arc<A>>
    where
        A: ?Sized + Send + Sync + 'static,
    {
        let value = self
            .values
            .get(index)
            .ok_or_else(|| DependencyError::ArgumentOutOfRange {
                method: self.method.to_string(),
                index,
            })?;
        downcast_instance::<A>(value)
    }

    /// 参数个数
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// 是否没有参数
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// 注入点种类
pub enum SiteKind<'a> {
    /// 字段注入
    Field(&'a dyn InjectSlot),
    /// 方法注入
    Method(MethodSite<'a>),
}

/// 注入点
///
/// 描述表中的一项：成员名称加上请求的类型键。
pub struct InjectionSite<'a> {
    name: &'static str,
    kind: SiteKind<'a>,
}

impl<'a> InjectionSite<'a> {
    /// 字段注入点
    pub fn field<T>(name: &'static str, slot: &'a Inject<T>) -> Self
    where
        T: ?Sized + Send + Sync + 'static,
    {
        Self {
            name,
            kind: SiteKind::Field(slot),
        }
    }

    /// 方法注入点构建器
    pub fn method(name: &'static str) -> MethodSiteBuilder {
        MethodSiteBuilder {
            name,
            params: Vec::new(),
        }
    }

    /// 成员名称
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// 取出注入点种类
    pub fn into_kind(self) -> SiteKind<'a> {
        self.kind
    }

    /// 请求的全部类型键
    pub fn requested_keys(&self) -> Vec<TypeKey> {
        match &self.kind {
            SiteKind::Field(slot) => vec![slot.requested_key()],
            SiteKind::Method(method) => method.params.clone(),
        }
    }
}

impl fmt::Debug for InjectionSite<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            SiteKind::Field(_) => "field",
            SiteKind::Method(_) => "method",
        };
        f.debug_struct("InjectionSite")
            .field("name", &self.name)
            .field("kind", &kind)
            .field("requested", &self.requested_keys())
            .finish()
    }
}

/// 方法注入点构建器
#[derive(Debug)]
pub struct MethodSiteBuilder {
    name: &'static str,
    params: Vec<TypeKey>,
}

impl MethodSiteBuilder {
    /// 追加一个参数
    pub fn param<A: ?Sized + 'static>(mut self) -> Self {
        self.params.push(TypeKey::of::<A>());
        self
    }

    /// 设置调用函数
    pub fn invoke<'a, F>(self, invoke: F) -> InjectionSite<'a>
    where
        F: FnOnce(ResolvedArgs) -> DependencyResult<()> + 'a,
    {
        InjectionSite {
            name: self.name,
            kind: SiteKind::Method(MethodSite {
                params: self.params,
                invoke: Box::new(invoke),
            }),
        }
    }
}
