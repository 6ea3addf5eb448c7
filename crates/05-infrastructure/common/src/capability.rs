//! 派生宏使用的能力检测
//!
//! 借助自动引用的方法解析顺序：`Detect<T>` 上的实现要求 `T` 实现对应能力，
//! 优先被选中；否则退回到 `&Detect<T>` 上恒返回 `None` 的实现。
//! 只对具体类型可靠，泛型类型应在 `#[injectable(...)]` 中显式声明能力。

use crate::lifecycle::{Initializable, OnInjected, PostInitializable, PreInitializable};
use std::marker::PhantomData;
use std::sync::Arc;

/// 能力检测标记
pub struct Detect<T>(PhantomData<fn() -> T>);

impl<T> Detect<T> {
    /// 创建检测标记
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for Detect<T> {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! phase_detection {
    ($detect:ident, $skip:ident, $method:ident, $capability:ident) => {
        #[doc(hidden)]
        pub trait $detect {
            type Target;
            fn $method(&self, target: &Arc<Self::Target>) -> Option<Arc<dyn $capability>>;
        }

        impl<T: $capability + 'static> $detect for Detect<T> {
            type Target = T;
            fn $method(&self, target: &Arc<T>) -> Option<Arc<dyn $capability>> {
                Some(Arc::clone(target) as Arc<dyn $capability>)
            }
        }

        #[doc(hidden)]
        pub trait $skip {
            type Target;
            fn $method(&self, target: &Arc<Self::Target>) -> Option<Arc<dyn $capability>>;
        }

        impl<T> $skip for &Detect<T> {
            type Target = T;
            fn $method(&self, _target: &Arc<T>) -> Option<Arc<dyn $capability>> {
                None
            }
        }
    };
}

phase_detection!(
    DetectPreInitialize,
    SkipPreInitialize,
    pre_initialize_hook,
    PreInitializable
);
phase_detection!(DetectInitialize, SkipInitialize, initialize_hook, Initializable);
phase_detection!(
    DetectPostInitialize,
    SkipPostInitialize,
    post_initialize_hook,
    PostInitializable
);

#[doc(hidden)]
pub trait DetectOnInjected {
    type Target;
    fn on_injected_hook<'a>(&self, target: &'a Self::Target) -> Option<&'a dyn OnInjected>;
}

impl<T: OnInjected> DetectOnInjected for Detect<T> {
    type Target = T;
    fn on_injected_hook<'a>(&self, target: &'a T) -> Option<&'a dyn OnInjected> {
        Some(target)
    }
}

#[doc(hidden)]
pub trait SkipOnInjected {
    type Target;
    fn on_injected_hook<'a>(&self, target: &'a Self::Target) -> Option<&'a dyn OnInjected>;
}

impl<T> SkipOnInjected for &Detect<T> {
    type Target = T;
    fn on_injected_hook<'a>(&self, _target: &'a T) -> Option<&'a dyn OnInjected> {
        None
    }
}
