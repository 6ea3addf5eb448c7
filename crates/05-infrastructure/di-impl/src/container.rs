//! 依赖注入容器实现

use crate::global::GlobalInjector;
use crate::phases::LifecycleBuckets;
use crate::registry::RegistryStore;
use di_abstractions::{
    ComponentRegistry, ContainerStats, DependencyInjector, DiContainer, LifecyclePhaseRunner,
};
use di_common::{
    downcast_instance, erase_instance, BindingDescriptor, BindingSource, ComponentBase,
    DependencyError, DependencyResult, Injectable, LifecyclePhase, Provides, StaticInjectable,
    TypeKey,
};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

/// 注入计数器
#[derive(Default)]
pub(crate) struct InjectionCounters {
    pub(crate) injection_calls: AtomicUsize,
    pub(crate) sites_filled: AtomicUsize,
    pub(crate) resolution_errors: AtomicUsize,
}

/// 具体的依赖注入容器实现
///
/// 持有单例注册表和三个生命周期桶。`new()` 创建的容器只通过显式传递使用；
/// 需要全局访问点时使用 [`DiContainerImpl::install`]。
pub struct DiContainerImpl {
    /// 注册表
    pub(crate) registry: RegistryStore,
    /// 生命周期桶
    pub(crate) buckets: LifecycleBuckets,
    /// 祖先遍历的停止类型
    pub(crate) stop_types: HashSet<TypeKey>,
    /// 统计计数
    pub(crate) counters: InjectionCounters,
}

impl DiContainerImpl {
    /// 创建新的容器
    pub fn new() -> Self {
        DiContainerBuilder::new().build()
    }

    /// 创建容器构建器
    pub fn builder() -> DiContainerBuilder {
        DiContainerBuilder::new()
    }

    /// 创建容器并安装为全局访问点
    ///
    /// 容器先以自身类型注册到自己的注册表，再通过静态字段注入把自己写入
    /// [`GlobalInjector`]。必须在任何全局注入调用之前执行；再次安装会覆盖
    /// 之前的容器。
    pub fn install() -> DependencyResult<Arc<Self>> {
        DiContainerBuilder::new().install()
    }

    /// 默认构造 `C` 并以 `A` 的身份注册
    fn bind_default<A, C>(&self, source: BindingSource) -> DependencyResult<()>
    where
        A: ?Sized + Send + Sync + 'static,
        C: Default + Provides<A>,
    {
        let key = TypeKey::of::<A>();
        if self.registry.contains(key) {
            warn!("重复注册被拒绝: {}", key);
            return Err(DependencyError::duplicate_binding(key.name()));
        }

        let instance = <C as Provides<A>>::provide(Arc::new(C::default()));
        self.registry.insert(
            BindingDescriptor::new(key, TypeKey::of::<C>(), source),
            erase_instance(instance),
        )
    }
}

impl Default for DiContainerImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DiContainerImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiContainerImpl")
            .field("bindings", &self.registry.len())
            .field("stop_types", &self.stop_types.len())
            .finish()
    }
}

impl ComponentRegistry for DiContainerImpl {
    fn register<T>(&self) -> DependencyResult<()>
    where
        T: Default + Send + Sync + 'static,
    {
        self.bind_default::<T, T>(BindingSource::Register)
    }

    fn bind<A, C>(&self) -> DependencyResult<()>
    where
        A: ?Sized + Send + Sync + 'static,
        C: Default + Provides<A>,
    {
        self.bind_default::<A, C>(BindingSource::Bind)
    }

    fn add<T>(&self, instance: Arc<T>) -> DependencyResult<()>
    where
        T: Send + Sync + 'static,
    {
        let key = TypeKey::of::<T>();
        self.registry.insert(
            BindingDescriptor::new(key, key, BindingSource::Add),
            erase_instance(instance),
        )
    }

    fn add_as<A>(&self, instance: Arc<A>) -> DependencyResult<()>
    where
        A: ?Sized + Send + Sync + 'static,
    {
        let key = TypeKey::of::<A>();
        self.registry.insert(
            BindingDescriptor::new(key, key, BindingSource::AddAs),
            erase_instance(instance),
        )
    }

    fn get<A>(&self) -> DependencyResult<Arc<A>>
    where
        A: ?Sized + Send + Sync + 'static,
    {
        let instance = self.registry.resolve(TypeKey::of::<A>())?;
        downcast_instance::<A>(&instance)
    }

    fn is_registered_by_key(&self, key: TypeKey) -> bool {
        self.registry.contains(key)
    }

    fn registered_bindings(&self) -> Vec<BindingDescriptor> {
        self.registry.descriptors()
    }
}

impl DependencyInjector for DiContainerImpl {
    fn inject_at<T>(&self, target: &Arc<T>) -> DependencyResult<()>
    where
        T: Injectable,
    {
        self.inject_target(&**target, || Arc::clone(target).lifecycle())
    }

    fn inject_dyn(&self, target: &Arc<dyn Injectable>) -> DependencyResult<()> {
        self.inject_target(&**target, || Arc::clone(target).lifecycle())
    }

    fn inject_static_fields<T>(&self) -> DependencyResult<()>
    where
        T: StaticInjectable,
    {
        let owner = TypeKey::of::<T>();
        for site in T::static_sites() {
            if let Err(e) = self.fill_site(owner, site) {
                warn!("静态注入失败: {}, 原因: {}", owner, e);
                return Err(e);
            }
        }
        info!("静态注入完成: {}", owner);
        Ok(())
    }

    fn stop_types(&self) -> Vec<TypeKey> {
        let mut stop_types: Vec<TypeKey> = self.stop_types.iter().copied().collect();
        stop_types.sort();
        stop_types
    }
}

impl LifecyclePhaseRunner for DiContainerImpl {
    fn run_pre_init(&self) -> usize {
        self.buckets.run_pre_init()
    }

    fn run_init(&self) -> usize {
        self.buckets.run_init()
    }

    fn run_post_init(&self) -> usize {
        self.buckets.run_post_init()
    }

    fn bucket_len(&self, phase: LifecyclePhase) -> usize {
        self.buckets.len(phase)
    }
}

impl DiContainer for DiContainerImpl {
    fn stats(&self) -> ContainerStats {
        ContainerStats {
            registered_bindings: self.registry.len(),
            injection_calls: self.counters.injection_calls.load(Ordering::Relaxed),
            sites_filled: self.counters.sites_filled.load(Ordering::Relaxed),
            resolution_errors: self.counters.resolution_errors.load(Ordering::Relaxed),
            pre_initialize_members: self.buckets.len(LifecyclePhase::PreInitialize),
            initialize_members: self.buckets.len(LifecyclePhase::Initialize),
            post_initialize_members: self.buckets.len(LifecyclePhase::PostInitialize),
        }
    }
}

/// 容器构建器
#[derive(Debug, Clone)]
pub struct DiContainerBuilder {
    stop_types: HashSet<TypeKey>,
}

impl DiContainerBuilder {
    /// 创建构建器，默认以 [`ComponentBase`] 作为停止类型
    pub fn new() -> Self {
        let mut stop_types = HashSet::new();
        stop_types.insert(TypeKey::of::<ComponentBase>());
        Self { stop_types }
    }

    /// 添加停止类型
    pub fn with_stop_type<T: ?Sized + 'static>(self) -> Self {
        self.with_stop_key(TypeKey::of::<T>())
    }

    /// 添加停止类型（通过类型键）
    pub fn with_stop_key(mut self, key: TypeKey) -> Self {
        self.stop_types.insert(key);
        self
    }

    /// 构建容器
    pub fn build(self) -> DiContainerImpl {
        info!("构建容器完成，停止类型数量: {}", self.stop_types.len());
        DiContainerImpl {
            registry: RegistryStore::default(),
            buckets: LifecycleBuckets::default(),
            stop_types: self.stop_types,
            counters: InjectionCounters::default(),
        }
    }

    /// 构建容器并安装为全局访问点
    pub fn install(self) -> DependencyResult<Arc<DiContainerImpl>> {
        let container = Arc::new(self.build());
        container.add(Arc::clone(&container))?;

        if GlobalInjector::is_installed() {
            info!("替换已安装的全局容器");
        }
        container.inject_static_fields::<GlobalInjector>()?;

        info!("全局容器安装完成");
        Ok(container)
    }
}

impl Default for DiContainerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
