//! # DI Common
//!
//! 场景依赖注入的公共类型：注入槽、描述表接口、生命周期能力与错误类型。
//!
//! ## 核心组件
//!
//! - [`Inject`] - 带注入标记的字段槽
//! - [`Injectable`] - 注入目标的描述表接口（可通过 `#[derive(Injectable)]` 生成）
//! - [`StaticInjectable`] - 静态注入槽描述表
//! - [`PreInitializable`] / [`Initializable`] / [`PostInitializable`] - 三阶段生命周期能力
//! - [`TypeKey`] - 注册表查找键
//! - [`DependencyError`] - 重复绑定与查找失败等错误
//!
//! ## 设计原则
//!
//! - 以编译期生成的描述表代替运行时反射
//! - 祖先链显式声明、有限遍历
//! - 错误在产生处即上报，不做静默降级

#[doc(hidden)]
pub mod capability;
pub mod component;
pub mod errors;
pub mod injection;
pub mod lifecycle;
pub mod metadata;

pub use component::*;
pub use errors::*;
pub use injection::*;
pub use lifecycle::*;
pub use metadata::*;

/// 派生 [`Injectable`] 描述表
pub use component_macros::Injectable;
