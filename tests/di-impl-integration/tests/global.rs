//! 全局访问点集成测试
//!
//! 全局槽位是进程级状态，整个流程放在同一个测试函数中按顺序执行。

use di_abstractions::{ComponentRegistry, ObjectInjector};
use di_common::{DependencyError, Inject, Injectable, InjectionSite};
use di_impl::{global_inject_at, DiContainerImpl, GlobalInjector};
use std::sync::Arc;

#[derive(Default)]
struct Inventory;

#[derive(Default)]
struct Backpack {
    inventory: Inject<Inventory>,
}

impl Injectable for Backpack {
    fn declared_sites(&self) -> Vec<InjectionSite<'_>> {
        vec![InjectionSite::field("inventory", &self.inventory)]
    }
}

#[test]
fn test_global_access_point_lifecycle() {
    // 安装之前
    assert!(!GlobalInjector::is_installed());
    assert_eq!(
        GlobalInjector::container().unwrap_err(),
        DependencyError::ContainerNotInstalled
    );
    let backpack = Arc::new(Backpack::default());
    assert_eq!(
        global_inject_at(&backpack).unwrap_err(),
        DependencyError::ContainerNotInstalled
    );

    // 安装后容器以自身类型注册，并写入全局槽位
    let first = DiContainerImpl::install().unwrap();
    assert!(GlobalInjector::is_installed());
    assert!(Arc::ptr_eq(&GlobalInjector::container().unwrap(), &first));
    assert!(Arc::ptr_eq(&first.get::<DiContainerImpl>().unwrap(), &first));

    first.register::<Inventory>().unwrap();
    global_inject_at(&backpack).unwrap();
    assert!(backpack.inventory.holds(&first.get::<Inventory>().unwrap()));

    let erased: Arc<dyn Injectable> = Arc::new(Backpack::default());
    GlobalInjector.inject_object(&erased).unwrap();

    // 再次安装会替换全局容器
    let second = DiContainerImpl::builder().install().unwrap();
    assert!(Arc::ptr_eq(&GlobalInjector::container().unwrap(), &second));
    assert!(!Arc::ptr_eq(&second, &first));
    assert!(global_inject_at(&Arc::new(Backpack::default()))
        .unwrap_err()
        .is_lookup_error());
}
