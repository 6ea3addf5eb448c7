//! Injectable 派生宏与容器的集成测试

use di_abstractions::{ComponentRegistry, DependencyInjector, LifecyclePhaseRunner};
use di_common::{
    ComponentBase, Initializable, Inject, Injectable, LifecyclePhase, OnInjected,
    PostInitializable, PreInitializable,
};
use di_impl::DiContainerImpl;
use parking_lot::Mutex;
use std::sync::Arc;

type Journal = Arc<Mutex<Vec<String>>>;

trait Navigation: Send + Sync {
    fn route(&self) -> &'static str;
}

#[derive(Default, Injectable)]
#[injectable(provides(dyn Navigation))]
struct NavMesh;

impl Navigation for NavMesh {
    fn route(&self) -> &'static str {
        "navmesh"
    }
}

#[derive(Default)]
struct Physics;

#[derive(Default)]
struct Animator;

#[derive(Injectable)]
struct Body {
    #[base]
    component: ComponentBase,
    #[inject]
    physics: Inject<Physics>,
}

#[derive(Injectable)]
struct Creature {
    #[base]
    body: Body,
    #[inject]
    animator: Inject<Animator>,
}

#[derive(Injectable)]
#[injectable(pre_initialize, initialize, post_initialize, on_injected)]
struct Enemy {
    #[base]
    creature: Creature,
    #[inject]
    navigation: Inject<dyn Navigation>,
    journal: Journal,
}

impl Enemy {
    fn new(journal: &Journal) -> Arc<Self> {
        Arc::new(Self {
            creature: Creature {
                body: Body {
                    component: ComponentBase::new("Enemy"),
                    physics: Inject::new(),
                },
                animator: Inject::new(),
            },
            navigation: Inject::new(),
            journal: journal.clone(),
        })
    }

    fn note(&self, entry: &str) {
        self.journal.lock().push(entry.to_string());
    }
}

impl PreInitializable for Enemy {
    fn pre_initialize(&self) {
        self.note("pre");
    }
}

impl Initializable for Enemy {
    fn initialize(&self) {
        self.note(&format!("init:{}", self.navigation.get().route()));
    }
}

impl PostInitializable for Enemy {
    fn post_initialize(&self) {
        self.note("post");
    }
}

impl OnInjected for Enemy {
    fn on_injected(&self) {
        self.note("injected");
    }
}

fn full_container() -> DiContainerImpl {
    let container = DiContainerImpl::new();
    container.register::<Physics>().unwrap();
    container.register::<Animator>().unwrap();
    container.bind::<dyn Navigation, NavMesh>().unwrap();
    container
}

#[test]
fn test_derived_hierarchy_is_fully_injected() {
    let container = full_container();
    let journal = Journal::default();
    let enemy = Enemy::new(&journal);

    container.inject_at(&enemy).unwrap();

    assert!(enemy.navigation.is_injected());
    assert!(enemy.creature.animator.is_injected());
    assert!(enemy
        .creature
        .body
        .physics
        .holds(&container.get::<Physics>().unwrap()));
}

#[test]
fn test_derived_sites_are_per_level() {
    let journal = Journal::default();
    let enemy = Enemy::new(&journal);

    let names: Vec<&str> = enemy.declared_sites().iter().map(|site| site.name()).collect();
    assert_eq!(names, vec!["navigation"]);

    let creature = enemy.base().unwrap();
    let names: Vec<&str> = creature.declared_sites().iter().map(|site| site.name()).collect();
    assert_eq!(names, vec!["animator"]);
}

#[test]
fn test_stop_type_level_is_skipped() {
    let container = DiContainerImpl::builder().with_stop_type::<Body>().build();
    container.register::<Animator>().unwrap();
    container.bind::<dyn Navigation, NavMesh>().unwrap();

    let journal = Journal::default();
    let enemy = Enemy::new(&journal);
    container.inject_at(&enemy).unwrap();

    assert!(enemy.creature.animator.is_injected());
    assert!(!enemy.creature.body.physics.is_injected());
}

#[test]
fn test_derived_lifecycle_capabilities() {
    let container = full_container();
    let journal = Journal::default();
    let enemy = Enemy::new(&journal);
    container.inject_at(&enemy).unwrap();

    for phase in LifecyclePhase::ALL {
        assert_eq!(container.bucket_len(phase), 1);
    }
    assert_eq!(container.run_all_phases(), 3);
    assert_eq!(*journal.lock(), vec!["pre", "init:navmesh", "post"]);

    enemy.as_on_injected().unwrap().on_injected();
    assert_eq!(journal.lock().last().map(String::as_str), Some("injected"));
}

#[test]
fn test_components_without_capabilities_are_not_bucketed() {
    let container = full_container();
    let body = Arc::new(Body {
        component: ComponentBase::default(),
        physics: Inject::new(),
    });
    container.inject_at(&body).unwrap();

    assert!(body.as_on_injected().is_none());
    for phase in LifecyclePhase::ALL {
        assert_eq!(container.bucket_len(phase), 0);
    }
}

/// 未在属性中声明能力，由派生宏检测
#[derive(Injectable)]
struct Spawner {
    #[inject]
    physics: Inject<Physics>,
    journal: Journal,
}

impl Initializable for Spawner {
    fn initialize(&self) {
        self.journal.lock().push("spawner:init".to_string());
    }
}

impl OnInjected for Spawner {
    fn on_injected(&self) {
        self.journal.lock().push("spawner:injected".to_string());
    }
}

#[test]
fn test_undeclared_capabilities_are_bucketed() {
    let container = full_container();
    let journal = Journal::default();
    let spawner = Arc::new(Spawner {
        physics: Inject::new(),
        journal: journal.clone(),
    });
    container.inject_at(&spawner).unwrap();

    assert!(spawner.physics.is_injected());
    assert_eq!(container.bucket_len(LifecyclePhase::PreInitialize), 0);
    assert_eq!(container.bucket_len(LifecyclePhase::Initialize), 1);
    assert_eq!(container.bucket_len(LifecyclePhase::PostInitialize), 0);
    assert_eq!(container.run_init(), 1);

    spawner.as_on_injected().unwrap().on_injected();
    assert_eq!(*journal.lock(), vec!["spawner:init", "spawner:injected"]);
}
