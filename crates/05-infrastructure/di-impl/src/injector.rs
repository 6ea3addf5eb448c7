//! 字段注入算法
//!
//! 从目标的运行时类型开始，逐级处理每一层直接声明的注入点，再转到该层声明的
//! 父类型；遇到停止类型立即结束，停止类型本身不会被检查。

use crate::container::DiContainerImpl;
use di_common::{
    DependencyError, DependencyResult, Injectable, InjectionSite, LifecycleHooks, ResolvedArgs,
    SiteKind, TypeKey,
};
use std::sync::atomic::Ordering;
use tracing::{debug, trace, warn};

/// 祖先遍历的最大层数
pub const MAX_HIERARCHY_DEPTH: usize = 64;

impl DiContainerImpl {
    /// 注入目标并按生命周期能力归类
    pub(crate) fn inject_target(
        &self,
        target: &dyn Injectable,
        hooks: impl FnOnce() -> LifecycleHooks,
    ) -> DependencyResult<()> {
        let target_key = target.type_key();
        debug!("开始注入: {}", target_key);

        let filled = match self.inject_levels(target) {
            Ok(filled) => filled,
            Err(e) => {
                self.counters.resolution_errors.fetch_add(1, Ordering::Relaxed);
                warn!("注入失败: {}, 原因: {}", target_key, e);
                return Err(e);
            }
        };

        self.buckets.classify(target_key, hooks());
        self.counters.injection_calls.fetch_add(1, Ordering::Relaxed);
        self.counters.sites_filled.fetch_add(filled, Ordering::Relaxed);
        debug!("注入完成: {}, 注入点数量: {}", target_key, filled);
        Ok(())
    }

    /// 沿祖先链逐级注入，返回填充的注入点数量
    fn inject_levels(&self, target: &dyn Injectable) -> DependencyResult<usize> {
        let mut filled = 0;
        let mut depth = 0;
        let mut level = Some(target);

        while let Some(current) = level {
            let level_key = current.type_key();
            if self.stop_types.contains(&level_key) {
                trace!("到达停止类型: {}", level_key);
                break;
            }

            depth += 1;
            if depth > MAX_HIERARCHY_DEPTH {
                return Err(DependencyError::HierarchyTooDeep {
                    type_name: target.type_key().name().to_string(),
                    limit: MAX_HIERARCHY_DEPTH,
                });
            }

            for site in current.declared_sites() {
                self.fill_site(level_key, site)?;
                filled += 1;
            }
            level = current.base();
        }

        Ok(filled)
    }

    /// 解析并填充单个注入点
    pub(crate) fn fill_site(&self, owner: TypeKey, site: InjectionSite<'_>) -> DependencyResult<()> {
        let name = site.name();
        match site.into_kind() {
            SiteKind::Field(slot) => {
                let key = slot.requested_key();
                let instance = self.registry.resolve(key)?;
                slot.assign(&instance)?;
                trace!("字段注入: {}::{} <- {}", owner.short_name(), name, key);
            }
            SiteKind::Method(method) => {
                let values = method
                    .params()
                    .iter()
                    .map(|key| self.registry.resolve(*key))
                    .collect::<DependencyResult<Vec<_>>>()?;
                trace!(
                    "方法注入: {}::{}，参数数量: {}",
                    owner.short_name(),
                    name,
                    values.len()
                );
                method.call(ResolvedArgs::new(name, values))?;
            }
        }
        Ok(())
    }
}
