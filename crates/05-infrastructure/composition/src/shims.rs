//! 宿主适配层
//!
//! 场景中的组件由宿主创建，注入只能在宿主的唤醒回调里触发。
//! 这里的两个适配器把唤醒回调接到注入入口上。

use di_abstractions::ObjectInjector;
use di_common::{DependencyResult, Injectable};
use std::sync::Arc;
use tracing::debug;

/// 组件注入器
///
/// 持有一组场景组件，唤醒时按顺序逐个注入，每个组件注入完成后
/// 立即调用它的 [`OnInjected`](di_common::OnInjected) 回调。
#[derive(Default)]
pub struct ComponentInjector {
    components: Vec<Arc<dyn Injectable>>,
}

impl ComponentInjector {
    /// 创建空的组件注入器
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加组件
    pub fn with_component<T: Injectable>(mut self, component: Arc<T>) -> Self {
        self.components.push(component);
        self
    }

    /// 追加类型擦除的组件
    pub fn push(&mut self, component: Arc<dyn Injectable>) {
        self.components.push(component);
    }

    /// 组件数量
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// 是否没有组件
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// 唤醒：注入全部组件，返回注入的组件数量
    ///
    /// 任何一个组件注入失败都会立即返回错误，之后的组件不会被处理。
    pub fn awake(&self, injector: &dyn ObjectInjector) -> DependencyResult<usize> {
        for component in &self.components {
            injector.inject_object(component)?;
            if let Some(callback) = component.as_on_injected() {
                debug!("注入完成回调: {}", component.type_key());
                callback.on_injected();
            }
        }
        Ok(self.components.len())
    }
}

impl std::fmt::Debug for ComponentInjector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self
            .components
            .iter()
            .map(|component| component.type_key().short_name())
            .collect();
        f.debug_struct("ComponentInjector")
            .field("components", &names)
            .finish()
    }
}

/// 自注入行为
///
/// 在唤醒时注入自己，然后运行自己的 [`InjectedBehaviour::init`]。
pub trait InjectedBehaviour: Injectable + Sized {
    /// 注入完成后的初始化
    fn init(&self) {}

    /// 唤醒
    fn awake(this: &Arc<Self>, injector: &dyn ObjectInjector) -> DependencyResult<()> {
        let target: Arc<dyn Injectable> = this.clone();
        injector.inject_object(&target)?;
        this.init();
        Ok(())
    }
}
