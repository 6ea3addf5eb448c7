//! 生命周期桶与阶段运行

use di_common::{
    Initializable, LifecycleHooks, LifecyclePhase, PostInitializable, PreInitializable, TypeKey,
};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Default)]
struct Buckets {
    pre_initialize: Vec<Arc<dyn PreInitializable>>,
    initialize: Vec<Arc<dyn Initializable>>,
    post_initialize: Vec<Arc<dyn PostInitializable>>,
}

/// 三个生命周期桶
///
/// 成员按归类顺序追加，阶段运行时按同一顺序调用。运行时先取快照再释放锁，
/// 阶段回调中可以再次调用容器；回调期间新归类的对象只会被之后的阶段看到。
#[derive(Default)]
pub(crate) struct LifecycleBuckets {
    inner: Mutex<Buckets>,
}

impl LifecycleBuckets {
    /// 按生命周期能力归类目标
    pub(crate) fn classify(&self, target: TypeKey, hooks: LifecycleHooks) {
        if hooks.is_empty() {
            return;
        }
        debug!("归类生命周期目标: {} {:?}", target, hooks.phases());

        let mut buckets = self.inner.lock();
        if let Some(hook) = hooks.pre_initialize {
            buckets.pre_initialize.push(hook);
        }
        if let Some(hook) = hooks.initialize {
            buckets.initialize.push(hook);
        }
        if let Some(hook) = hooks.post_initialize {
            buckets.post_initialize.push(hook);
        }
    }

    pub(crate) fn run_pre_init(&self) -> usize {
        let members = self.inner.lock().pre_initialize.clone();
        info!("运行生命周期阶段: {}, 成员数量: {}", LifecyclePhase::PreInitialize, members.len());
        for member in &members {
            member.pre_initialize();
        }
        members.len()
    }

    pub(crate) fn run_init(&self) -> usize {
        let members = self.inner.lock().initialize.clone();
        info!("运行生命周期阶段: {}, 成员数量: {}", LifecyclePhase::Initialize, members.len());
        for member in &members {
            member.initialize();
        }
        members.len()
    }

    pub(crate) fn run_post_init(&self) -> usize {
        let members = self.inner.lock().post_initialize.clone();
        info!("运行生命周期阶段: {}, 成员数量: {}", LifecyclePhase::PostInitialize, members.len());
        for member in &members {
            member.post_initialize();
        }
        members.len()
    }

    /// 指定阶段的成员数量
    pub(crate) fn len(&self, phase: LifecyclePhase) -> usize {
        let buckets = self.inner.lock();
        match phase {
            LifecyclePhase::PreInitialize => buckets.pre_initialize.len(),
            LifecyclePhase::Initialize => buckets.initialize.len(),
            LifecyclePhase::PostInitialize => buckets.post_initialize.len(),
        }
    }
}
