//! # Dependency Injection Abstractions
//!
//! 依赖注入抽象层，定义实例注册、字段注入与生命周期阶段运行的核心接口。
//!
//! ## 核心接口
//!
//! - [`ComponentRegistry`] - 单例注册表接口
//! - [`DependencyInjector`] - 字段注入接口
//! - [`ObjectInjector`] - 只暴露注入入口的窄接口
//! - [`LifecyclePhaseRunner`] - 三阶段生命周期运行接口
//! - [`DiContainer`] - 容器门面接口

pub mod container;
pub mod phases;
pub mod registry;
pub mod resolver;

pub use container::*;
pub use phases::*;
pub use registry::*;
pub use resolver::*;
