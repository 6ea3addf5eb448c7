//! 容器端到端集成测试

use di_abstractions::{
    ComponentRegistry, DependencyInjector, DiContainer, LifecyclePhaseRunner, ObjectInjector,
};
use di_common::{
    ComponentBase, DependencyError, Initializable, Inject, Injectable, InjectionSite,
    LifecycleHooks, LifecyclePhase, PostInitializable, Provides, TypeKey,
};
use di_impl::DiContainerImpl;
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Default)]
struct ServiceA;

#[derive(Default)]
struct ServiceB {
    service_a: Inject<ServiceA>,
}

impl Injectable for ServiceB {
    fn declared_sites(&self) -> Vec<InjectionSite<'_>> {
        vec![InjectionSite::field("service_a", &self.service_a)]
    }
}

trait Renderer: Send + Sync {
    fn backend(&self) -> &'static str;
}

#[derive(Default)]
struct VulkanRenderer;

impl Renderer for VulkanRenderer {
    fn backend(&self) -> &'static str {
        "vulkan"
    }
}

impl Provides<dyn Renderer> for VulkanRenderer {
    fn provide(self: Arc<Self>) -> Arc<dyn Renderer> {
        self
    }
}

#[test]
fn test_service_b_receives_registered_service_a() {
    let container = DiContainerImpl::new();
    container.register::<ServiceA>().unwrap();
    container.register::<ServiceB>().unwrap();

    let service_b = container.get::<ServiceB>().unwrap();
    container.inject_at(&service_b).unwrap();

    let service_a = container.get::<ServiceA>().unwrap();
    assert!(Arc::ptr_eq(&service_b.service_a.get(), &service_a));
}

#[test]
fn test_abstraction_binding_and_instance_registration() {
    let container = DiContainerImpl::new();
    container.bind::<dyn Renderer, VulkanRenderer>().unwrap();

    let clock = Arc::new(Mutex::new(0_u64));
    container.add(clock.clone()).unwrap();

    assert_eq!(container.get::<dyn Renderer>().unwrap().backend(), "vulkan");
    assert!(Arc::ptr_eq(&container.get::<Mutex<u64>>().unwrap(), &clock));
    assert!(container.is_registered_by_key(TypeKey::of::<dyn Renderer>()));
    assert!(!container.is_registered::<VulkanRenderer>());
}

#[test]
fn test_failed_lookup_reports_type_name() {
    let container = DiContainerImpl::new();
    match container.get::<dyn Renderer>().err() {
        Some(DependencyError::ComponentNotRegistered { type_name }) => {
            assert!(type_name.contains("Renderer"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

/// 注入方法接收多个参数
struct Camera {
    base: ComponentBase,
    renderer: Inject<dyn Renderer>,
    target: Inject<ServiceA>,
}

impl Injectable for Camera {
    fn declared_sites(&self) -> Vec<InjectionSite<'_>> {
        vec![InjectionSite::method("construct")
            .param::<dyn Renderer>()
            .param::<ServiceA>()
            .invoke(move |args| {
                self.renderer.set(args.get::<dyn Renderer>(0)?);
                self.target.set(args.get::<ServiceA>(1)?);
                Ok(())
            })]
    }

    fn base(&self) -> Option<&dyn Injectable> {
        Some(&self.base)
    }
}

fn camera() -> Arc<Camera> {
    Arc::new(Camera {
        base: ComponentBase::new("MainCamera"),
        renderer: Inject::new(),
        target: Inject::new(),
    })
}

#[test]
fn test_method_site_receives_all_arguments() {
    let container = DiContainerImpl::new();
    container.bind::<dyn Renderer, VulkanRenderer>().unwrap();
    container.register::<ServiceA>().unwrap();

    let camera = camera();
    container.inject_at(&camera).unwrap();

    assert_eq!(camera.renderer.get().backend(), "vulkan");
    assert!(camera.target.holds(&container.get::<ServiceA>().unwrap()));
}

#[test]
fn test_method_site_not_called_when_argument_missing() {
    let container = DiContainerImpl::new();
    container.bind::<dyn Renderer, VulkanRenderer>().unwrap();

    let camera = camera();
    assert!(container.inject_at(&camera).unwrap_err().is_lookup_error());
    assert!(!camera.renderer.is_injected());
}

#[test]
fn test_object_injector_accepts_erased_targets() {
    let container = DiContainerImpl::new();
    container.register::<ServiceA>().unwrap();

    let target = Arc::new(ServiceB::default());
    let erased: Arc<dyn Injectable> = target.clone();
    let injector: &dyn ObjectInjector = &container;
    injector.inject_object(&erased).unwrap();

    assert!(target.service_a.is_injected());
}

/// 阶段回调中再次使用容器
struct Spawner {
    container: Inject<DiContainerImpl>,
    log: Arc<Mutex<Vec<&'static str>>>,
}

struct Spawned {
    log: Arc<Mutex<Vec<&'static str>>>,
}

impl Initializable for Spawned {
    fn initialize(&self) {
        self.log.lock().push("spawned:init");
    }
}

impl PostInitializable for Spawned {
    fn post_initialize(&self) {
        self.log.lock().push("spawned:post");
    }
}

impl Injectable for Spawned {
    fn declared_sites(&self) -> Vec<InjectionSite<'_>> {
        Vec::new()
    }

    fn lifecycle(self: Arc<Self>) -> LifecycleHooks {
        LifecycleHooks::new()
            .with_initialize(self.clone())
            .with_post_initialize(self)
    }
}

impl Initializable for Spawner {
    fn initialize(&self) {
        self.log.lock().push("spawner:init");
        let spawned = Arc::new(Spawned {
            log: self.log.clone(),
        });
        self.container.get().inject_at(&spawned).unwrap();
    }
}

impl Injectable for Spawner {
    fn declared_sites(&self) -> Vec<InjectionSite<'_>> {
        vec![InjectionSite::field("container", &self.container)]
    }

    fn lifecycle(self: Arc<Self>) -> LifecycleHooks {
        LifecycleHooks::new().with_initialize(self)
    }
}

#[test]
fn test_phase_callbacks_may_reenter_container() {
    let container = Arc::new(DiContainerImpl::new());
    container.add(Arc::clone(&container)).unwrap();

    let log = Arc::new(Mutex::new(Vec::new()));
    let spawner = Arc::new(Spawner {
        container: Inject::new(),
        log: log.clone(),
    });
    container.inject_at(&spawner).unwrap();

    assert_eq!(container.run_pre_init(), 0);
    assert_eq!(container.run_init(), 1);
    assert_eq!(container.bucket_len(LifecyclePhase::Initialize), 2);
    assert_eq!(container.run_post_init(), 1);

    assert_eq!(*log.lock(), vec!["spawner:init", "spawned:post"]);
}

#[test]
fn test_stats_serialize_to_json() {
    let container = DiContainerImpl::new();
    container.register::<ServiceA>().unwrap();
    container.inject_at(&Arc::new(ServiceB::default())).unwrap();
    let _ = container.inject_at(&camera());

    let json = serde_json::to_value(container.stats()).unwrap();
    assert_eq!(json["registered_bindings"], 1);
    assert_eq!(json["injection_calls"], 1);
    assert_eq!(json["resolution_errors"], 1);
}
