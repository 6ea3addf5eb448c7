//! 错误类型定义

use thiserror::Error;

/// 依赖注入错误类型
///
/// 所有错误在产生处都不可恢复：容器没有回退实例，也没有可选依赖的概念，
/// 调用方应当将其视为启动阶段的致命错误。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DependencyError {
    #[error("类型已注册到容器中: {type_name}")]
    DuplicateBinding { type_name: String },

    #[error("组件未注册: {type_name}")]
    ComponentNotRegistered { type_name: String },

    #[error("注入字段尚未赋值: {type_name}")]
    NotInjected { type_name: String },

    #[error("全局容器尚未安装，请先调用 DiContainerImpl::install()")]
    ContainerNotInstalled,

    #[error("注册实例类型不匹配: {type_name}")]
    TypeMismatch { type_name: String },

    #[error("方法注入参数越界: {method}, 索引: {index}")]
    ArgumentOutOfRange { method: String, index: usize },

    #[error("类型层级超过 {limit} 层，base() 可能构成循环: {type_name}")]
    HierarchyTooDeep { type_name: String, limit: usize },
}

impl DependencyError {
    /// 创建重复绑定错误
    pub fn duplicate_binding(type_name: impl Into<String>) -> Self {
        Self::DuplicateBinding {
            type_name: type_name.into(),
        }
    }

    /// 创建未注册错误
    pub fn not_registered(type_name: impl Into<String>) -> Self {
        Self::ComponentNotRegistered {
            type_name: type_name.into(),
        }
    }

    /// 创建类型不匹配错误
    pub fn type_mismatch(type_name: impl Into<String>) -> Self {
        Self::TypeMismatch {
            type_name: type_name.into(),
        }
    }

    /// 是否为重复绑定错误
    pub fn is_duplicate_binding(&self) -> bool {
        matches!(self, Self::DuplicateBinding { .. })
    }

    /// 是否为查找失败错误
    pub fn is_lookup_error(&self) -> bool {
        matches!(self, Self::ComponentNotRegistered { .. })
    }
}

/// 场景启动错误类型
#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("依赖注入错误: {source}")]
    Dependency {
        #[from]
        source: DependencyError,
    },

    #[error("配置加载失败: {message}")]
    ConfigLoadFailed { message: String },

    #[error("配置值无效: {key} = {value}")]
    InvalidSetting { key: String, value: String },

    #[error("日志初始化失败: {message}")]
    LoggingInitFailed { message: String },
}

/// 结果类型别名
pub type DependencyResult<T> = Result<T, DependencyError>;
pub type BootstrapResult<T> = Result<T, BootstrapError>;
