//! 生命周期能力参数与代码生成

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

/// 生命周期能力参数
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LifecycleArgs {
    /// 实现了预初始化
    pub pre_initialize: bool,
    /// 实现了初始化
    pub initialize: bool,
    /// 实现了后初始化
    pub post_initialize: bool,
    /// 实现了注入完成回调
    pub on_injected: bool,
}

impl LifecycleArgs {
    /// 尝试识别一个能力标记，返回是否识别成功
    pub fn accept(&mut self, ident: &str) -> bool {
        match ident {
            "pre_initialize" => self.pre_initialize = true,
            "initialize" => self.initialize = true,
            "post_initialize" => self.post_initialize = true,
            "on_injected" => self.on_injected = true,
            _ => return false,
        }
        true
    }

    /// 按运行顺序排列的阶段
    fn phases(&self) -> [PhaseSpec; 3] {
        [
            PhaseSpec {
                declared: self.pre_initialize,
                capability: "PreInitializable",
                builder: "with_pre_initialize",
                hook: "pre_initialize_hook",
            },
            PhaseSpec {
                declared: self.initialize,
                capability: "Initializable",
                builder: "with_initialize",
                hook: "initialize_hook",
            },
            PhaseSpec {
                declared: self.post_initialize,
                capability: "PostInitializable",
                builder: "with_post_initialize",
                hook: "post_initialize_hook",
            },
        ]
    }
}

/// 单个阶段的生成参数
struct PhaseSpec {
    /// 是否在属性中显式声明
    declared: bool,
    capability: &'static str,
    builder: &'static str,
    hook: &'static str,
}

/// 检测所需的 trait 导入
fn detection_imports() -> TokenStream {
    quote! {
        #[allow(unused_imports)]
        use ::di_common::capability::{
            DetectInitialize as _, DetectOnInjected as _, DetectPostInitialize as _,
            DetectPreInitialize as _, SkipInitialize as _, SkipOnInjected as _,
            SkipPostInitialize as _, SkipPreInitialize as _,
        };
        #[allow(unused_variables)]
        let detect = ::di_common::capability::Detect::<Self>::new();
    }
}

/// 生成 `lifecycle` 方法
///
/// 显式声明的阶段直接转换为能力对象；未声明的阶段在编译期检测类型是否实现了该能力。
pub fn generate_lifecycle_fn(args: &LifecycleArgs) -> TokenStream {
    let imports = detection_imports();
    let steps = args.phases().into_iter().map(|phase| {
        let builder = format_ident!("{}", phase.builder);
        if phase.declared {
            let capability = format_ident!("{}", phase.capability);
            quote! {
                let hooks = hooks.#builder(
                    ::std::sync::Arc::clone(&self) as ::std::sync::Arc<dyn ::di_common::#capability>
                );
            }
        } else {
            let hook = format_ident!("{}", phase.hook);
            quote! {
                let hooks = match (&detect).#hook(&self) {
                    ::std::option::Option::Some(hook) => hooks.#builder(hook),
                    ::std::option::Option::None => hooks,
                };
            }
        }
    });

    quote! {
        fn lifecycle(self: ::std::sync::Arc<Self>) -> ::di_common::LifecycleHooks {
            #imports
            let hooks = ::di_common::LifecycleHooks::new();
            #(#steps)*
            hooks
        }
    }
}

/// 生成 `as_on_injected` 方法
pub fn generate_on_injected_fn(args: &LifecycleArgs) -> TokenStream {
    if args.on_injected {
        return quote! {
            fn as_on_injected(&self) -> ::std::option::Option<&dyn ::di_common::OnInjected> {
                ::std::option::Option::Some(self)
            }
        };
    }

    let imports = detection_imports();
    quote! {
        fn as_on_injected(&self) -> ::std::option::Option<&dyn ::di_common::OnInjected> {
            #imports
            (&detect).on_injected_hook(self)
        }
    }
}
