//! # Component Macros
//!
//! 这个 crate 提供了生成注入描述表的派生宏，代替运行时反射的字段扫描。
//!
//! ## 核心宏
//!
//! - [`Injectable`] - 为结构体生成 `di_common::Injectable` 实现
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use di_common::{ComponentBase, Inject, Injectable, Initializable};
//!
//! #[derive(Default, Injectable)]
//! #[injectable(initialize)]
//! pub struct Player {
//!     #[base]
//!     base: ComponentBase,
//!     #[inject]
//!     audio: Inject<dyn AudioService>,
//! }
//!
//! impl Initializable for Player {
//!     fn initialize(&self) {
//!         self.audio.get().play("spawn");
//!     }
//! }
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod injectable;
mod lifecycle;
mod utils;

/// 注入描述表派生宏
///
/// # 字段属性
///
/// - `#[inject]` - 注入字段，类型必须是 `Inject<T>`，按 `T` 的类型键解析
/// - `#[base]` - 父类型层级（至多一个），注入器处理完本层后转到该字段
///
/// # 结构体属性 `#[injectable(...)]`
///
/// - `pre_initialize` / `initialize` / `post_initialize` - 声明已实现的生命周期能力
/// - `on_injected` - 声明已实现 `OnInjected` 回调
///
/// 具体类型不声明也会在编译期检测到已实现的能力；泛型类型的能力实现带有额外约束时
/// 检测不可靠，应显式声明。
/// - `provides(dyn A, dyn B)` - 生成 `Provides<dyn A>` 等实现，允许以抽象身份绑定
///
/// # 示例
///
/// ```rust,ignore
/// #[derive(Default, Injectable)]
/// #[injectable(pre_initialize, post_initialize, provides(dyn ScoreSink))]
/// pub struct ScoreBoard {
///     #[inject]
///     clock: Inject<GameClock>,
/// }
/// ```
#[proc_macro_derive(Injectable, attributes(injectable, inject, base))]
pub fn derive_injectable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    injectable::expand_injectable(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
