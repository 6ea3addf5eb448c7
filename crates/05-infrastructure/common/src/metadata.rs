//! 元数据定义
//!
//! 提供类型键和绑定描述信息

use serde::Serialize;
use std::any::TypeId;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// 类型键
///
/// 注册表唯一的查找键。相等性与哈希只取决于 [`TypeId`]，名称仅用于诊断输出。
/// 支持 `dyn Trait` 这类非定长抽象类型。
#[derive(Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// 从类型获取类型键
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// 类型ID
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// 完整类型名称
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// 获取简短的类型名称（不包含模块路径）
    pub fn short_name(&self) -> &'static str {
        let base = self.name.split('<').next().unwrap_or(self.name);
        base.rsplit("::").next().unwrap_or(base)
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for TypeKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TypeKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(other.name).then_with(|| self.id.cmp(&other.id))
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeKey({})", self.name)
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl Serialize for TypeKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name)
    }
}

/// 绑定来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingSource {
    /// `register::<T>()` 默认构造并自绑定
    Register,
    /// `bind::<A, C>()` 默认构造并绑定到抽象
    Bind,
    /// `add(instance)` 以实例自身类型注册
    Add,
    /// `add_as::<A>(instance)` 以指定抽象注册
    AddAs,
}

impl fmt::Display for BindingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Register => "register",
            Self::Bind => "bind",
            Self::Add => "add",
            Self::AddAs => "add_as",
        };
        f.write_str(name)
    }
}

/// 绑定描述符
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BindingDescriptor {
    /// 查找键
    pub key: TypeKey,
    /// 具体实例类型
    pub concrete: TypeKey,
    /// 绑定来源
    pub source: BindingSource,
}

impl BindingDescriptor {
    /// 创建新的绑定描述符
    pub fn new(key: TypeKey, concrete: TypeKey, source: BindingSource) -> Self {
        Self {
            key,
            concrete,
            source,
        }
    }

    /// 是否为自绑定（键与具体类型相同）
    pub fn is_self_binding(&self) -> bool {
        self.key == self.concrete
    }
}
