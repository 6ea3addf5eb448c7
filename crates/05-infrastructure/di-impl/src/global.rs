//! 全局访问点
//!
//! 进程级的静态注入槽，保存通过 [`DiContainerImpl::install`] 安装的容器。
//! 槽位本身由容器的静态字段注入填充，安装之前的任何全局访问都会得到
//! [`DependencyError::ContainerNotInstalled`]。

use crate::container::DiContainerImpl;
use di_abstractions::{DependencyInjector, ObjectInjector};
use di_common::{
    DependencyError, DependencyResult, Inject, Injectable, InjectionSite, StaticInjectable,
};
use std::sync::Arc;

static CONTAINER: Inject<DiContainerImpl> = Inject::new();

/// 全局注入器
pub struct GlobalInjector;

impl StaticInjectable for GlobalInjector {
    fn static_sites() -> Vec<InjectionSite<'static>> {
        vec![InjectionSite::field("container", &CONTAINER)]
    }
}

impl GlobalInjector {
    /// 全局容器是否已安装
    pub fn is_installed() -> bool {
        CONTAINER.is_injected()
    }

    /// 获取全局容器
    pub fn container() -> DependencyResult<Arc<DiContainerImpl>> {
        CONTAINER
            .try_get()
            .map_err(|_| DependencyError::ContainerNotInstalled)
    }

    /// 使用全局容器注入目标
    pub fn inject_at<T: Injectable>(target: &Arc<T>) -> DependencyResult<()> {
        Self::container()?.inject_at(target)
    }
}

impl ObjectInjector for GlobalInjector {
    fn inject_object(&self, target: &Arc<dyn Injectable>) -> DependencyResult<()> {
        Self::container()?.inject_dyn(target)
    }
}

/// 使用全局容器注入目标
pub fn global_inject_at<T: Injectable>(target: &Arc<T>) -> DependencyResult<()> {
    GlobalInjector::inject_at(target)
}
