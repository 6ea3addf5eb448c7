//! 单例注册表存储

use di_common::{BindingDescriptor, DependencyError, DependencyResult, ErasedInstance, TypeKey};
use parking_lot::RwLock;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::{info, warn};

/// 单个绑定
struct Binding {
    descriptor: BindingDescriptor,
    instance: ErasedInstance,
}

/// 注册表存储
///
/// 每个类型键至多一个实例；重复的键被拒绝而不是覆盖。
#[derive(Default)]
pub(crate) struct RegistryStore {
    bindings: RwLock<HashMap<TypeKey, Binding>>,
}

impl RegistryStore {
    /// 插入绑定
    pub(crate) fn insert(
        &self,
        descriptor: BindingDescriptor,
        instance: ErasedInstance,
    ) -> DependencyResult<()> {
        let key = descriptor.key;
        let mut bindings = self.bindings.write();
        match bindings.entry(key) {
            Entry::Occupied(_) => {
                warn!("重复注册被拒绝: {}", key);
                Err(DependencyError::duplicate_binding(key.name()))
            }
            Entry::Vacant(slot) => {
                info!(
                    "注册组件: {} -> {} ({})",
                    key, descriptor.concrete, descriptor.source
                );
                slot.insert(Binding {
                    descriptor,
                    instance,
                });
                Ok(())
            }
        }
    }

    /// 检查键是否已绑定
    pub(crate) fn contains(&self, key: TypeKey) -> bool {
        self.bindings.read().contains_key(&key)
    }

    /// 解析键对应的实例
    pub(crate) fn resolve(&self, key: TypeKey) -> DependencyResult<ErasedInstance> {
        self.bindings
            .read()
            .get(&key)
            .map(|binding| ErasedInstance::clone(&binding.instance))
            .ok_or_else(|| DependencyError::not_registered(key.name()))
    }

    /// 所有绑定描述符，按类型名称排序
    pub(crate) fn descriptors(&self) -> Vec<BindingDescriptor> {
        let mut descriptors: Vec<BindingDescriptor> = self
            .bindings
            .read()
            .values()
            .map(|binding| binding.descriptor.clone())
            .collect();
        descriptors.sort_by(|a, b| a.key.cmp(&b.key));
        descriptors
    }

    /// 绑定数量
    pub(crate) fn len(&self) -> usize {
        self.bindings.read().len()
    }
}
