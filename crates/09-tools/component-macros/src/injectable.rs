//! 注入描述表派生宏实现

use crate::lifecycle::{generate_lifecycle_fn, generate_on_injected_fn, LifecycleArgs};
use crate::utils::{field_has_attribute, is_inject_type, named_fields};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{punctuated::Punctuated, DeriveInput, Ident, LitStr, Token, Type};

/// `#[injectable(...)]` 参数
#[derive(Default)]
pub struct InjectableArgs {
    /// 生命周期能力
    pub lifecycle: LifecycleArgs,
    /// 可以作为哪些抽象注册
    pub provides: Vec<Type>,
}

impl InjectableArgs {
    /// 从结构体属性中解析参数
    pub fn from_input(input: &DeriveInput) -> syn::Result<Self> {
        let mut args = Self::default();

        for attr in &input.attrs {
            if !attr.path().is_ident("injectable") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("provides") {
                    let content;
                    syn::parenthesized!(content in meta.input);
                    let types = Punctuated::<Type, Token![,]>::parse_terminated(&content)?;
                    args.provides.extend(types);
                    return Ok(());
                }

                let name = meta
                    .path
                    .get_ident()
                    .map(ToString::to_string)
                    .unwrap_or_default();
                if args.lifecycle.accept(&name) {
                    Ok(())
                } else {
                    Err(meta.error("未知的 injectable 参数"))
                }
            })?;
        }

        Ok(args)
    }
}

/// 注入字段
struct InjectField<'a> {
    ident: &'a Ident,
    name: LitStr,
}

/// 扫描出的字段布局
struct FieldLayout<'a> {
    injected: Vec<InjectField<'a>>,
    base: Option<&'a Ident>,
}

fn scan_fields(input: &DeriveInput) -> syn::Result<FieldLayout<'_>> {
    let fields = named_fields(input)?;
    let mut layout = FieldLayout {
        injected: Vec::new(),
        base: None,
    };

    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let is_inject = field_has_attribute(field, "inject");
        let is_base = field_has_attribute(field, "base");

        if is_inject && is_base {
            return Err(syn::Error::new_spanned(
                ident,
                "字段不能同时标记 #[inject] 和 #[base]",
            ));
        }

        if is_inject {
            if !is_inject_type(&field.ty) {
                return Err(syn::Error::new_spanned(
                    &field.ty,
                    "#[inject] 字段类型必须是 Inject<T>",
                ));
            }
            layout.injected.push(InjectField {
                ident,
                name: LitStr::new(&ident.to_string(), ident.span()),
            });
        }

        if is_base {
            if layout.base.is_some() {
                return Err(syn::Error::new_spanned(ident, "只能有一个 #[base] 字段"));
            }
            layout.base = Some(ident);
        }
    }

    Ok(layout)
}

/// 实现 #[derive(Injectable)]
pub fn expand_injectable(input: &DeriveInput) -> syn::Result<TokenStream> {
    let args = InjectableArgs::from_input(input)?;
    let layout = scan_fields(input)?;

    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let sites = layout.injected.iter().map(|field| {
        let ident = field.ident;
        let name = &field.name;
        quote! { ::di_common::InjectionSite::field(#name, &self.#ident) }
    });

    let base_fn = layout.base.map(|ident| {
        quote! {
            fn base(&self) -> ::std::option::Option<&dyn ::di_common::Injectable> {
                ::std::option::Option::Some(&self.#ident)
            }
        }
    });

    let lifecycle_fn = generate_lifecycle_fn(&args.lifecycle);
    let on_injected_fn = generate_on_injected_fn(&args.lifecycle);

    let provides_impls = args.provides.iter().map(|abstraction| {
        quote! {
            impl #impl_generics ::di_common::Provides<#abstraction> for #struct_name #ty_generics #where_clause {
                fn provide(self: ::std::sync::Arc<Self>) -> ::std::sync::Arc<#abstraction> {
                    self
                }
            }
        }
    });

    Ok(quote! {
        impl #impl_generics ::di_common::Injectable for #struct_name #ty_generics #where_clause {
            fn declared_sites(&self) -> ::std::vec::Vec<::di_common::InjectionSite<'_>> {
                ::std::vec![#(#sites),*]
            }

            #base_fn

            #lifecycle_fn

            #on_injected_fn
        }

        #(#provides_impls)*
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn expand(input: DeriveInput) -> syn::Result<String> {
        expand_injectable(&input).map(|tokens| tokens.to_string())
    }

    #[test]
    fn test_sites_in_declaration_order() {
        let output = expand(parse_quote! {
            struct Player {
                #[inject]
                audio: Inject<dyn AudioService>,
                score: u32,
                #[inject]
                clock: Inject<GameClock>,
            }
        })
        .unwrap();

        let audio = output.find("\"audio\"").unwrap();
        let clock = output.find("\"clock\"").unwrap();
        assert!(audio < clock);
        assert!(!output.contains("\"score\""));
        assert!(!output.contains("fn base"));
        assert!(output.contains("initialize_hook"));
    }

    #[test]
    fn test_base_and_lifecycle() {
        let output = expand(parse_quote! {
            #[injectable(initialize, on_injected)]
            struct Enemy {
                #[base]
                actor: Actor,
            }
        })
        .unwrap();

        assert!(output.contains("fn base"));
        assert!(output.contains("self . actor"));
        assert!(output.contains("with_initialize"));
        assert!(output.contains("fn as_on_injected"));
    }

    #[test]
    fn test_provides_generates_upcast_impls() {
        let output = expand(parse_quote! {
            #[injectable(provides(dyn AudioService, dyn Mixer))]
            struct Speaker {}
        })
        .unwrap();

        assert_eq!(output.matches("Provides <").count(), 2);
        assert!(output.contains("dyn AudioService"));
        assert!(output.contains("dyn Mixer"));
    }

    #[test]
    fn test_rejects_two_bases() {
        let err = expand(parse_quote! {
            struct Broken {
                #[base]
                first: Actor,
                #[base]
                second: Actor,
            }
        })
        .unwrap_err();
        assert!(err.to_string().contains("#[base]"));
    }

    #[test]
    fn test_rejects_non_inject_field_type() {
        let err = expand(parse_quote! {
            struct Broken {
                #[inject]
                audio: Option<AudioService>,
            }
        })
        .unwrap_err();
        assert!(err.to_string().contains("Inject<T>"));
    }

    #[test]
    fn test_rejects_unknown_argument() {
        let err = expand(parse_quote! {
            #[injectable(dispose)]
            struct Broken {}
        })
        .unwrap_err();
        assert!(err.to_string().contains("injectable"));
    }

    #[test]
    fn test_rejects_enum() {
        assert!(expand(parse_quote! {
            enum State { Idle }
        })
        .is_err());
    }
}
