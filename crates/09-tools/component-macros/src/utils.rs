//! 宏工具函数

use syn::{Data, DeriveInput, Field, Fields, Type};

/// 获取结构体的具名字段，单元结构体没有字段
pub fn named_fields(input: &DeriveInput) -> syn::Result<Vec<&Field>> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => Ok(fields.named.iter().collect()),
            Fields::Unit => Ok(Vec::new()),
            Fields::Unnamed(_) => Err(syn::Error::new_spanned(
                &input.ident,
                "Injectable 只支持具名字段结构体",
            )),
        },
        _ => Err(syn::Error::new_spanned(
            &input.ident,
            "Injectable 只能派生在结构体上",
        )),
    }
}

/// 检查字段是否有特定属性
pub fn field_has_attribute(field: &Field, attr_name: &str) -> bool {
    field.attrs.iter().any(|attr| attr.path().is_ident(attr_name))
}

/// 检查类型是否为 Inject<T>
pub fn is_inject_type(ty: &Type) -> bool {
    match ty {
        Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .map_or(false, |segment| {
                segment.ident == "Inject"
                    && matches!(segment.arguments, syn::PathArguments::AngleBracketed(_))
            }),
        _ => false,
    }
}
