//! # 依赖注入具体实现
//!
//! 提供具体的依赖注入容器：单例注册表、沿祖先链的字段注入、
//! 三阶段生命周期桶以及进程级的全局访问点。
//!
//! ```no_run
//! use di_abstractions::{ComponentRegistry, DependencyInjector, LifecyclePhaseRunner};
//! use di_impl::DiContainerImpl;
//!
//! #[derive(Default)]
//! struct AudioMixer;
//!
//! let container = DiContainerImpl::new();
//! container.register::<AudioMixer>().unwrap();
//! let mixer = container.get::<AudioMixer>().unwrap();
//! container.run_all_phases();
//! # let _ = mixer;
//! ```

pub mod container;
pub mod global;
mod injector;
mod phases;
mod registry;

pub use container::{DiContainerBuilder, DiContainerImpl};
pub use global::{global_inject_at, GlobalInjector};
pub use injector::MAX_HIERARCHY_DEPTH;
